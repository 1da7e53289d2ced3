//! Stem variant metadata.

use serde::Serialize;

/// One concrete size/offset configuration of an implant stem.
///
/// Generic over the vendor's UID and group enums; assembled on demand from
/// the vendor's literal tables, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StemVariant<U, G> {
    pub uid: U,
    pub group: G,
    /// Dense in-group index, `0..N-1` in catalog-table order.
    pub offset: i32,
    /// Human label as printed in the vendor catalog.
    pub label: &'static str,
    /// External RCC catalog code; some legacy variants legitimately lack one.
    pub rcc_id: Option<&'static str>,
}
