//! Chromosome regions and the relation test used to filter zoom records.

/// A half-open genomic region, possibly spanning chromosome boundaries.
///
/// Positions are ordered by `(chrom_id, base)`: a region covers everything
/// from `(start_chrom_id, start_base)` up to, but not including,
/// `(end_chrom_id, end_base)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChromRegion {
    pub start_chrom_id: i32,
    pub start_base: i32,
    pub end_chrom_id: i32,
    pub end_base: i32,
}

/// How one region relates to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegionRelation {
    /// The region lies entirely within the other.
    Contained,
    /// The regions share positions but neither contains the other fully.
    Overlapping,
    /// The regions share no positions.
    Disjoint,
}

#[inline]
fn compare_position(chrom1: i32, chrom1_base: i32, chrom2: i32, chrom2_base: i32) -> i8 {
    if chrom1 < chrom2 {
        -1
    } else if chrom1 > chrom2 {
        1
    } else if chrom1_base < chrom2_base {
        -1
    } else if chrom1_base > chrom2_base {
        1
    } else {
        0
    }
}

impl ChromRegion {
    pub fn new(start_chrom_id: i32, start_base: i32, end_chrom_id: i32, end_base: i32) -> Self {
        ChromRegion {
            start_chrom_id,
            start_base,
            end_chrom_id,
            end_base,
        }
    }

    /// Classifies this region against `other`.
    ///
    /// A region equal to `other` is `Contained`. Since regions are
    /// half-open, a region ending exactly where `other` starts (or starting
    /// where it ends) is `Disjoint`.
    pub fn relation_to(&self, other: &ChromRegion) -> RegionRelation {
        let starts_at_or_after = compare_position(
            self.start_chrom_id,
            self.start_base,
            other.start_chrom_id,
            other.start_base,
        ) >= 0;
        let ends_at_or_before = compare_position(
            self.end_chrom_id,
            self.end_base,
            other.end_chrom_id,
            other.end_base,
        ) <= 0;
        if starts_at_or_after && ends_at_or_before {
            return RegionRelation::Contained;
        }

        let ends_before = compare_position(
            self.end_chrom_id,
            self.end_base,
            other.start_chrom_id,
            other.start_base,
        ) <= 0;
        let starts_after = compare_position(
            self.start_chrom_id,
            self.start_base,
            other.end_chrom_id,
            other.end_base,
        ) >= 0;
        if ends_before || starts_after {
            RegionRelation::Disjoint
        } else {
            RegionRelation::Overlapping
        }
    }
}
