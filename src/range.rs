//! Per-group range statistics.
//!
//! Every vendor catalog describes each of its stem groups with the same
//! bundle of bounds and metadata; the struct is generic over the vendor's
//! group enum so each catalog keeps its own taxonomy.

use serde::Serialize;

/// Bounds and descriptive metadata for one stem group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RangeStats<G> {
    pub group: G,
    /// Position of the group's first/last entry in the vendor-wide catalog
    /// table (spanning all groups).
    pub catalog_index_min: i32,
    pub catalog_index_max: i32,
    pub description: &'static str,
    /// Valid in-group offset window; both bounds match the group's table
    /// length exactly.
    pub size_min: i32,
    pub size_max: i32,
}

impl<G: Copy> RangeStats<G> {
    /// Saturating clamp of `value` into `[size_min, size_max]`.
    #[inline]
    pub const fn clamp(&self, value: i32) -> i32 {
        if value < self.size_min {
            self.size_min
        } else if value > self.size_max {
            self.size_max
        } else {
            value
        }
    }
}
