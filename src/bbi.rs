pub(crate) mod region;
pub(crate) mod zoomdata;

use std::fmt;

/// Byte size of one zoom data record as stored in a bbi file.
pub const ZOOM_RECORD_SIZE: usize = 32;

/// A single decoded zoom data record.
///
/// The wire fields (`chrom_id` through `sum_squares`) are carried exactly
/// as stored: four signed 32-bit integers followed by four IEEE-754 32-bit
/// floats. `zoom_level` and `record_number` are assigned at decode time,
/// with `record_number` counting records from 1 within the block.
/// `chrom_name` is resolved through the caller's chromosome id map and is
/// `None` for ids the map does not know.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomDataRecord {
    pub zoom_level: u32,
    pub record_number: u32,
    pub chrom_name: Option<String>,
    pub chrom_id: i32,
    pub start: i32,
    pub end: i32,
    pub valid_count: i32,
    pub min_val: f32,
    pub max_val: f32,
    pub sum: f32,
    pub sum_squares: f32,
}

impl fmt::Display for ZoomDataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: ", self.record_number)?;
        match &self.chrom_name {
            Some(name) => write!(f, "{}", name)?,
            None => write!(f, "chrom id {}", self.chrom_id)?,
        }
        write!(
            f,
            ":{}-{}, valid count {}, min {}, max {}, sum {}, sum of squares {}",
            self.start, self.end, self.valid_count, self.min_val, self.max_val, self.sum,
            self.sum_squares
        )
    }
}

pub use region::*;
pub use zoomdata::*;
