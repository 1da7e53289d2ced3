//! Lima FIT catalog.
//!
//! Tables transcribed from the legacy `lima_fit_scheme.h` device scheme.
//! The FIT line is the odd one out: seven sizes per side rather than
//! geometric families, sizes numbered from 1, the neck origin pinned to
//! the frame origin and the head seat measured on the X axis.

use crate::math::{CutPlane, Pnt, Vec3};
use crate::{CatalogError, Result};

pub const COMPANY_NAME: &str = "LC";
pub const PRODUCT_NAME: &str = "LC FIT";
/// First UID of the FIT block (company range 60_000, product offset 750).
pub const RANGE_START: i32 = 60_750;

/// Scheme constants of the FIT product line, one contiguous ascending UID
/// block with explicit discriminants.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(i32)]
pub enum Uid {
    STEM_1_R = 60_750,
    STEM_2_R = 60_751,
    STEM_3_R = 60_752,
    STEM_4_R = 60_753,
    STEM_5_R = 60_754,
    STEM_6_R = 60_755,
    STEM_7_R = 60_756,
    STEM_1_L = 60_757,
    STEM_2_L = 60_758,
    STEM_3_L = 60_759,
    STEM_4_L = 60_760,
    STEM_5_L = 60_761,
    STEM_6_L = 60_762,
    STEM_7_L = 60_763,
    CUTPLANE = 60_764,
    HEAD_M4 = 60_765,
    HEAD_P0 = 60_766,
    HEAD_P4 = 60_767,
    HEAD_P8 = 60_768,
}

const ALL: [Uid; 19] = [
    Uid::STEM_1_R, Uid::STEM_2_R, Uid::STEM_3_R,
    Uid::STEM_4_R, Uid::STEM_5_R, Uid::STEM_6_R,
    Uid::STEM_7_R, Uid::STEM_1_L, Uid::STEM_2_L,
    Uid::STEM_3_L, Uid::STEM_4_L, Uid::STEM_5_L,
    Uid::STEM_6_L, Uid::STEM_7_L, Uid::CUTPLANE,
    Uid::HEAD_M4, Uid::HEAD_P0, Uid::HEAD_P4,
    Uid::HEAD_P8,
];

const NAMES: [&str; 19] = [
    "STEM_1_R", "STEM_2_R", "STEM_3_R",
    "STEM_4_R", "STEM_5_R", "STEM_6_R",
    "STEM_7_R", "STEM_1_L", "STEM_2_L",
    "STEM_3_L", "STEM_4_L", "STEM_5_L",
    "STEM_6_L", "STEM_7_L", "CUTPLANE",
    "HEAD_M4", "HEAD_P0", "HEAD_P4",
    "HEAD_P8",
];

const RCC: [Option<&str>; 19] = [
    Some("4211_25_110"), Some("4211_25_120"),
    Some("4211_25_130"), Some("4211_25_140"),
    Some("4211_25_150"), Some("4211_25_160"),
    Some("4211_25_170"), Some("4211_25_010"),
    Some("4211_25_020"), Some("4211_25_030"),
    Some("4211_25_040"), Some("4211_25_050"),
    Some("4211_25_060"), Some("4211_25_070"),
    None, None,
    None, None,
    None,
];

impl Uid {
    /// Claims `raw` if it falls inside the FIT block.
    pub fn from_raw(raw: i32) -> Option<Self> {
        let index = (raw as i64) - (RANGE_START as i64);
        if !(0..ALL.len() as i64).contains(&index) {
            return None;
        }
        Some(ALL[index as usize])
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self as i32
    }

    #[inline]
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    #[inline]
    fn index(self) -> usize {
        (self as i32 - RANGE_START) as usize
    }
}

/// Anatomical side of a FIT stem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Side {
    Right,
    Left,
}

pub const SIDES: [Side; 2] = [Side::Right, Side::Left];

const STEM_RIGHT: [Uid; 7] = [
    Uid::STEM_1_R, Uid::STEM_2_R, Uid::STEM_3_R,
    Uid::STEM_4_R, Uid::STEM_5_R, Uid::STEM_6_R,
    Uid::STEM_7_R,
];

const STEM_LEFT: [Uid; 7] = [
    Uid::STEM_1_L, Uid::STEM_2_L, Uid::STEM_3_L,
    Uid::STEM_4_L, Uid::STEM_5_L, Uid::STEM_6_L,
    Uid::STEM_7_L,
];

impl Side {
    /// Stem UIDs of this side in ascending size order.
    pub const fn uids(self) -> &'static [Uid] {
        match self {
            Side::Right => &STEM_RIGHT,
            Side::Left => &STEM_LEFT,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Right => "R",
            Side::Left => "L",
        }
    }
}

const HEAD_UIDS: [Uid; 4] = [Uid::HEAD_M4, Uid::HEAD_P0, Uid::HEAD_P4, Uid::HEAD_P8];

/// Distance from the frame origin to the resection plane, per size.
const CUT_LENGTH: [f64; 7] = [-34.4, -36.5, -38.0, -39.5, -41.5, -43.4, -45.6];

const _: () = {
    assert!(STEM_RIGHT.len() == CUT_LENGTH.len());
    assert!(STEM_LEFT.len() == CUT_LENGTH.len());
};

fn stem_slot(uid: Uid) -> Option<(Side, usize)> {
    for side in SIDES {
        if let Some(slot) = side.uids().iter().position(|&u| u == uid) {
            return Some((side, slot));
        }
    }
    None
}

fn require_stem(uid: Uid) -> Result<(Side, usize)> {
    stem_slot(uid).ok_or(CatalogError::NotAStem(uid.raw()))
}

pub fn is_stem(uid: Uid) -> bool {
    stem_slot(uid).is_some()
}

pub fn is_head(uid: Uid) -> bool {
    HEAD_UIDS.contains(&uid)
}

pub fn side_of(uid: Uid) -> Result<Side> {
    require_stem(uid).map(|(side, _)| side)
}

/// Catalog size, numbered from 1 as printed on the implant.
pub fn size_of(uid: Uid) -> Result<i32> {
    require_stem(uid).map(|(_, slot)| slot as i32 + 1)
}

pub fn rcc_code(uid: Uid) -> Result<&'static str> {
    RCC[uid.index()].ok_or(CatalogError::MissingCatalogCode(uid.name()))
}

/// All stem UIDs in table order, optionally restricted to one side.
pub fn iter_stems(side: Option<Side>) -> impl Iterator<Item = Uid> {
    SIDES
        .into_iter()
        .filter(move |s| side.map_or(true, |want| *s == want))
        .flat_map(|s| s.uids().iter().copied())
}

/// Next (or previous) size on the same side; saturates at sizes 1 and 7.
pub fn adjacent(uid: Uid, forward: bool) -> Result<Uid> {
    let (side, slot) = require_stem(uid)?;
    let uids = side.uids();
    let candidate = slot as i64 + if forward { 1 } else { -1 };
    if (0..uids.len() as i64).contains(&candidate) {
        return Ok(uids[candidate as usize]);
    }
    Ok(uid)
}

/// The neck origin coincides with the frame origin for every FIT stem.
pub fn neck_origin(uid: Uid) -> Result<Pnt> {
    require_stem(uid)?;
    Ok(Pnt::ORIGIN)
}

fn head_offset_mm(head: Uid) -> f64 {
    match head {
        Uid::HEAD_M4 => -8.0,
        Uid::HEAD_P0 => -4.0,
        Uid::HEAD_P8 => 4.3,
        _ => 0.0,
    }
}

/// Seat of `head` mounted on `stem`: an absolute point on the X axis
/// rather than an offset along a measured neck.
pub fn head_to_stem_offset(head: Uid, stem: Uid) -> Result<Pnt> {
    if !is_head(head) {
        return Err(CatalogError::NotAHead(head.raw()));
    }
    require_stem(stem)?;
    Ok(Pnt::new(head_offset_mm(head), 0.0, 0.0))
}

/// Resection plane: per-size distance along the X axis, normal +X.
pub fn cut_plane(uid: Uid) -> Result<CutPlane> {
    let (_, slot) = require_stem(uid)?;
    Ok(CutPlane {
        origin: Pnt::new(CUT_LENGTH[slot], 0.0, 0.0),
        normal: Vec3::new(1.0, 0.0, 0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_bounds() {
        assert_eq!(Uid::from_raw(60_750), Some(Uid::STEM_1_R));
        assert_eq!(Uid::from_raw(60_749), None);
        assert_eq!(Uid::from_raw(60_768), Some(Uid::HEAD_P8));
        assert_eq!(Uid::from_raw(60_769), None);
    }

    #[test]
    fn test_sizes_are_one_based() {
        assert_eq!(size_of(Uid::STEM_1_R).unwrap(), 1);
        assert_eq!(size_of(Uid::STEM_7_L).unwrap(), 7);
        assert_eq!(side_of(Uid::STEM_4_L).unwrap(), Side::Left);
        assert_eq!(side_of(Uid::STEM_4_R).unwrap(), Side::Right);
    }

    #[test]
    fn test_markers_are_not_stems() {
        assert!(!is_stem(Uid::CUTPLANE));
        assert!(!is_stem(Uid::HEAD_P0));
        assert!(is_head(Uid::HEAD_M4));
        assert!(matches!(
            side_of(Uid::CUTPLANE),
            Err(CatalogError::NotAStem(_))
        ));
    }

    #[test]
    fn test_adjacent_saturates() {
        assert_eq!(adjacent(Uid::STEM_3_R, true).unwrap(), Uid::STEM_4_R);
        assert_eq!(adjacent(Uid::STEM_7_R, true).unwrap(), Uid::STEM_7_R);
        assert_eq!(adjacent(Uid::STEM_1_L, false).unwrap(), Uid::STEM_1_L);
    }

    #[test]
    fn test_head_seats_are_absolute_x_points() {
        let seat = head_to_stem_offset(Uid::HEAD_P8, Uid::STEM_2_L).unwrap();
        assert_eq!(seat, Pnt::new(4.3, 0.0, 0.0));
        let neutral = head_to_stem_offset(Uid::HEAD_P4, Uid::STEM_2_L).unwrap();
        assert_eq!(neutral, Pnt::ORIGIN);
    }

    #[test]
    fn test_cut_plane_length_per_size() {
        let small = cut_plane(Uid::STEM_1_R).unwrap();
        assert_eq!(small.origin, Pnt::new(-34.4, 0.0, 0.0));
        let large = cut_plane(Uid::STEM_7_L).unwrap();
        assert_eq!(large.origin, Pnt::new(-45.6, 0.0, 0.0));
        assert_eq!(large.normal, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rcc_codes_cover_all_stems() {
        for uid in iter_stems(None) {
            assert!(rcc_code(uid).is_ok());
        }
        assert!(matches!(
            rcc_code(Uid::CUTPLANE),
            Err(CatalogError::MissingCatalogCode(_))
        ));
    }
}
