use std::collections::HashMap;
use std::io::{self, Read, Seek, SeekFrom};

use byteordered::Endianness;
use bytes::Buf;
use libdeflater::Decompressor;
use log::{debug, warn};
use thiserror::Error;

use crate::bbi::{ChromRegion, RegionRelation, ZoomDataRecord, ZOOM_RECORD_SIZE};

/// A helper trait for things that implement `Read`, `Seek`, and `Send`
pub trait SeekableRead: Seek + Read + Send {}
impl<T> SeekableRead for T where T: Seek + Read + Send {}

/// The location of one zoom data block within a bbi file, as produced by
/// the file's spatial index for a given zoom level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    /// File offset of the block's first byte.
    pub offset: u64,
    /// Byte size of the block as stored (possibly compressed).
    pub size: u32,
    /// The region covered by all records in the block.
    pub bounds: ChromRegion,
}

/// Possible errors encountered when reading zoom data from a bbi file
#[derive(Error, Debug)]
pub enum ZoomDataError {
    #[error("Error reading zoom level {zoom_level} block at offset {offset}: {error}")]
    ReadFailed {
        zoom_level: u32,
        offset: u64,
        #[source]
        error: io::Error,
    },
    #[error("Error decompressing zoom level {zoom_level} block at offset {offset}: {error}")]
    DecompressFailed {
        zoom_level: u32,
        offset: u64,
        #[source]
        error: libdeflater::DecompressionError,
    },
    #[error("Zoom level {zoom_level} block truncated in record {record_number}")]
    TruncatedRecord { zoom_level: u32, record_number: u32 },
}

/// Reads the raw bytes of a zoom data block, decompressing them if
/// necessary.
///
/// `uncompress_buf_size` is the decompression buffer size declared in the
/// bbi file header; `0` means block data is stored uncompressed. A short
/// read is an error: the source must supply exactly `block.size` bytes.
/// `zoom_level` only gives errors context and plays no role in the read.
pub fn read_zoom_block_data<R: SeekableRead>(
    file: &mut R,
    block: &Block,
    zoom_level: u32,
    uncompress_buf_size: u32,
) -> Result<Vec<u8>, ZoomDataError> {
    let read_failed = |error| ZoomDataError::ReadFailed {
        zoom_level,
        offset: block.offset,
        error,
    };

    file.seek(SeekFrom::Start(block.offset)).map_err(read_failed)?;
    let mut raw_data = vec![0u8; block.size as usize];
    file.read_exact(&mut raw_data).map_err(read_failed)?;

    // The buffer size is 0 for uncompressed data.
    let block_data = if uncompress_buf_size > 0 {
        let mut decompressor = Decompressor::new();
        let mut outbuf = vec![0; uncompress_buf_size as usize];
        let decompressed = decompressor
            .zlib_decompress(&raw_data, &mut outbuf)
            .map_err(|error| ZoomDataError::DecompressFailed {
                zoom_level,
                offset: block.offset,
                error,
            })?;
        outbuf.truncate(decompressed);
        outbuf
    } else {
        raw_data
    };

    Ok(block_data)
}

/// Decodes the zoom records in a block buffer, keeping those matching the
/// selection region.
///
/// `block_bounds` is the region covered by the block as a whole, from the
/// same index leaf that located the block: when it is contained in the
/// selection, every record is a hit and per-record testing is skipped.
/// Otherwise each record's own region is classified against `selection`;
/// a contained record is always kept, an overlapping one only if
/// `contained` is false. Records are numbered from 1 in decode order,
/// counting discarded records too.
///
/// A zoom record count for the block is not stored anywhere, so the
/// remaining byte count determines the end of decoding. Trailing bytes
/// shorter than one record are ignored once at least one record has been
/// decoded; a non-empty buffer too short for even a single record is an
/// error.
pub fn get_zoom_block_records(
    block_data: &[u8],
    zoom_level: u32,
    endianness: Endianness,
    chrom_map: &HashMap<i32, String>,
    block_bounds: ChromRegion,
    selection: ChromRegion,
    contained: bool,
) -> Result<Vec<ZoomDataRecord>, ZoomDataError> {
    let item_count = block_data.len() / ZOOM_RECORD_SIZE;
    let mut records = Vec::with_capacity(item_count);

    // Checked once: block bounds contained in the selection means every
    // record is contained too, since records lie within the bounds.
    let block_relation = block_bounds.relation_to(&selection);

    let mut bytes = block_data;
    let mut record_number = 0u32;
    while bytes.remaining() >= ZOOM_RECORD_SIZE {
        record_number += 1;

        let (chrom_id, start, end, valid_count, min_val, max_val, sum, sum_squares) =
            match endianness {
                Endianness::Big => (
                    bytes.get_i32(),
                    bytes.get_i32(),
                    bytes.get_i32(),
                    bytes.get_i32(),
                    bytes.get_f32(),
                    bytes.get_f32(),
                    bytes.get_f32(),
                    bytes.get_f32(),
                ),
                Endianness::Little => (
                    bytes.get_i32_le(),
                    bytes.get_i32_le(),
                    bytes.get_i32_le(),
                    bytes.get_i32_le(),
                    bytes.get_f32_le(),
                    bytes.get_f32_le(),
                    bytes.get_f32_le(),
                    bytes.get_f32_le(),
                ),
            };

        let hit = match block_relation {
            RegionRelation::Contained => true,
            _ => {
                let record_region = ChromRegion::new(chrom_id, start, chrom_id, end);
                match record_region.relation_to(&selection) {
                    RegionRelation::Contained => true,
                    RegionRelation::Overlapping => !contained,
                    RegionRelation::Disjoint => false,
                }
            }
        };

        if hit {
            let chrom_name = chrom_map.get(&chrom_id).cloned();
            records.push(ZoomDataRecord {
                zoom_level,
                record_number,
                chrom_name,
                chrom_id,
                start,
                end,
                valid_count,
                min_val,
                max_val,
                sum,
                sum_squares,
            });
        }
    }

    let leftover = bytes.remaining();
    if leftover != 0 {
        // Accept this as an end of block condition unless no records were
        // read at all.
        if record_number == 0 {
            return Err(ZoomDataError::TruncatedRecord {
                zoom_level,
                record_number: 1,
            });
        }
        warn!(
            "Zoom level {} block truncated after record {}: ignoring {} trailing bytes",
            zoom_level, record_number, leftover
        );
    }

    Ok(records)
}

/// Logs a block's decoded records at debug level.
pub fn log_zoom_block_records(zoom_level: u32, records: &[ZoomDataRecord]) {
    debug!("Zoom level {} block: {} records", zoom_level, records.len());
    for record in records {
        debug!("{}", record);
    }
}
