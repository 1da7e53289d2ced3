//! hipstem: hip-stem implant catalog core.
//!
//! Models six vendor hip-stem catalogs as discrete, enumerable variant
//! spaces over one collision-free numeric identifier space. For every
//! variant the crate exposes its group and in-group offset, the external
//! RCC catalog code, measured geometric reference points in the stem local
//! frame (millimeters), derived geometry (head-offset composition,
//! resection cut plane) and deterministic nearest-equivalent translation
//! between groups of the same vendor.
//!
//! All tables are `'static` literal data transcribed from the legacy
//! device schemes; every operation is a pure function and safe for
//! unsynchronized concurrent use.

pub mod math;
pub mod range;
pub mod registry;
pub mod variant;
pub mod vendors;

// Re-exports for convenience
pub use math::{CutPlane, Pnt, Vec3};
pub use range::RangeStats;
pub use registry::{resolve, StemLookup};
pub use variant::StemVariant;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("UID {0} is not a variant of this catalog")]
    UnknownVariant(i32),

    #[error("UID {0} is not a stem variant")]
    NotAStem(i32),

    #[error("UID {0} is not a head marker")]
    NotAHead(i32),

    #[error("no catalog code configured for {0}")]
    MissingCatalogCode(&'static str),

    #[error("no equivalent variant in group {group} at offset {offset}")]
    NoEquivalent { group: &'static str, offset: i32 },
}
