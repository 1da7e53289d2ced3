//! Medacta AMISTEM catalog.
//!
//! Tables transcribed from the legacy `amistem_scheme.h` device scheme.
//! Coordinates are millimeters in the stem local frame; the measured
//! meridians store (y, z) pairs with x fixed at zero.

use crate::math::{CutPlane, Pnt, Vec3};
use crate::range::RangeStats;
use crate::variant::StemVariant;
use crate::{CatalogError, Result};

pub const COMPANY_NAME: &str = "MDCA";
pub const PRODUCT_NAME: &str = "AMISTEM";
/// First UID of the AMISTEM block (company range 100_000, product offset
/// 750, first scheme constant at +50).
pub const RANGE_START: i32 = 100_800;

/// Scheme constants of the AMISTEM product line, one contiguous ascending
/// UID block. Discriminants are explicit so the numbering can never drift
/// if a constant is added or removed.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(i32)]
pub enum Uid {
    STEM_STD_0 = 100_800,
    STEM_STD_1 = 100_801,
    STEM_STD_2 = 100_802,
    STEM_STD_3 = 100_803,
    STEM_STD_4 = 100_804,
    STEM_STD_5 = 100_805,
    STEM_STD_6 = 100_806,
    STEM_STD_7 = 100_807,
    STEM_STD_8 = 100_808,
    STEM_STD_9 = 100_809,
    STEM_STD_10 = 100_810,
    STEM_LAT_0 = 100_811,
    STEM_LAT_1 = 100_812,
    STEM_LAT_2 = 100_813,
    STEM_LAT_3 = 100_814,
    STEM_LAT_4 = 100_815,
    STEM_LAT_5 = 100_816,
    STEM_LAT_6 = 100_817,
    STEM_LAT_7 = 100_818,
    STEM_LAT_8 = 100_819,
    STEM_STD_SN_0 = 100_820,
    STEM_STD_SN_1 = 100_821,
    STEM_STD_SN_2 = 100_822,
    STEM_STD_SN_3 = 100_823,
    STEM_STD_SN_4 = 100_824,
    STEM_STD_SN_5 = 100_825,
    STEM_STD_SN_6 = 100_826,
    STEM_STD_SN_7 = 100_827,
    STEM_STD_SN_8 = 100_828,
    STEM_STD_SN_9 = 100_829,
    STEM_STD_SN_10 = 100_830,
    STEM_LAT_SN_0 = 100_831,
    STEM_LAT_SN_1 = 100_832,
    STEM_LAT_SN_2 = 100_833,
    STEM_LAT_SN_3 = 100_834,
    STEM_LAT_SN_4 = 100_835,
    STEM_LAT_SN_5 = 100_836,
    STEM_LAT_SN_6 = 100_837,
    STEM_LAT_SN_7 = 100_838,
    STEM_LAT_SN_8 = 100_839,
    CUTPLANE = 100_840,
    HEAD_M4 = 100_841,
    HEAD_P0 = 100_842,
    HEAD_P4 = 100_843,
    HEAD_P8 = 100_844,
    HEAD_P12 = 100_845,
    RANGE_CCD_STD = 100_846,
    RANGE_CCD_LAT = 100_847,
    RANGE_CCD_STD_SN = 100_848,
    RANGE_CCD_LAT_SN = 100_849,
}

const ALL: [Uid; 50] = [
    Uid::STEM_STD_0, Uid::STEM_STD_1, Uid::STEM_STD_2,
    Uid::STEM_STD_3, Uid::STEM_STD_4, Uid::STEM_STD_5,
    Uid::STEM_STD_6, Uid::STEM_STD_7, Uid::STEM_STD_8,
    Uid::STEM_STD_9, Uid::STEM_STD_10, Uid::STEM_LAT_0,
    Uid::STEM_LAT_1, Uid::STEM_LAT_2, Uid::STEM_LAT_3,
    Uid::STEM_LAT_4, Uid::STEM_LAT_5, Uid::STEM_LAT_6,
    Uid::STEM_LAT_7, Uid::STEM_LAT_8, Uid::STEM_STD_SN_0,
    Uid::STEM_STD_SN_1, Uid::STEM_STD_SN_2, Uid::STEM_STD_SN_3,
    Uid::STEM_STD_SN_4, Uid::STEM_STD_SN_5, Uid::STEM_STD_SN_6,
    Uid::STEM_STD_SN_7, Uid::STEM_STD_SN_8, Uid::STEM_STD_SN_9,
    Uid::STEM_STD_SN_10, Uid::STEM_LAT_SN_0, Uid::STEM_LAT_SN_1,
    Uid::STEM_LAT_SN_2, Uid::STEM_LAT_SN_3, Uid::STEM_LAT_SN_4,
    Uid::STEM_LAT_SN_5, Uid::STEM_LAT_SN_6, Uid::STEM_LAT_SN_7,
    Uid::STEM_LAT_SN_8, Uid::CUTPLANE, Uid::HEAD_M4,
    Uid::HEAD_P0, Uid::HEAD_P4, Uid::HEAD_P8,
    Uid::HEAD_P12, Uid::RANGE_CCD_STD, Uid::RANGE_CCD_LAT,
    Uid::RANGE_CCD_STD_SN, Uid::RANGE_CCD_LAT_SN,
];

const NAMES: [&str; 50] = [
    "STEM_STD_0", "STEM_STD_1", "STEM_STD_2",
    "STEM_STD_3", "STEM_STD_4", "STEM_STD_5",
    "STEM_STD_6", "STEM_STD_7", "STEM_STD_8",
    "STEM_STD_9", "STEM_STD_10", "STEM_LAT_0",
    "STEM_LAT_1", "STEM_LAT_2", "STEM_LAT_3",
    "STEM_LAT_4", "STEM_LAT_5", "STEM_LAT_6",
    "STEM_LAT_7", "STEM_LAT_8", "STEM_STD_SN_0",
    "STEM_STD_SN_1", "STEM_STD_SN_2", "STEM_STD_SN_3",
    "STEM_STD_SN_4", "STEM_STD_SN_5", "STEM_STD_SN_6",
    "STEM_STD_SN_7", "STEM_STD_SN_8", "STEM_STD_SN_9",
    "STEM_STD_SN_10", "STEM_LAT_SN_0", "STEM_LAT_SN_1",
    "STEM_LAT_SN_2", "STEM_LAT_SN_3", "STEM_LAT_SN_4",
    "STEM_LAT_SN_5", "STEM_LAT_SN_6", "STEM_LAT_SN_7",
    "STEM_LAT_SN_8", "CUTPLANE", "HEAD_M4",
    "HEAD_P0", "HEAD_P4", "HEAD_P8",
    "HEAD_P12", "RANGE_CCD_STD", "RANGE_CCD_LAT",
    "RANGE_CCD_STD_SN", "RANGE_CCD_LAT_SN",
];

const RCC: [Option<&str>; 50] = [
    Some("01_18_399"), Some("01_18_400"),
    Some("01_18_401"), Some("01_18_402"),
    Some("01_18_403"), Some("01_18_404"),
    Some("01_18_405"), Some("01_18_406"),
    Some("01_18_407"), Some("01_18_408"),
    Some("01_18_409"), Some("01_18_410"),
    Some("01_18_411"), Some("01_18_412"),
    Some("01_18_413"), Some("01_18_414"),
    Some("01_18_415"), Some("01_18_416"),
    Some("01_18_417"), Some("01_18_418"),
    Some("01_18_459"), Some("01_18_460"),
    Some("01_18_461"), Some("01_18_462"),
    Some("01_18_463"), Some("01_18_464"),
    Some("01_18_465"), Some("01_18_466"),
    Some("01_18_467"), Some("01_18_468"),
    Some("01_18_469"), Some("01_18_470"),
    Some("01_18_471"), Some("01_18_472"),
    Some("01_18_473"), Some("01_18_474"),
    Some("01_18_475"), Some("01_18_476"),
    Some("01_18_477"), Some("01_18_478"),
    None, None,
    None, None,
    None, None,
    None, None,
    None, None,
];

impl Uid {
    /// Claims `raw` if it falls inside the AMISTEM block.
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

    /// Legacy scheme constant name, e.g. `"STEM_STD_5"`.
    #[inline]
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    #[inline]
    fn index(self) -> usize {
        (self as i32 - RANGE_START) as usize
    }
}

/// Stem families of the AMISTEM catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Group {
    /// Standard neck angle (135 deg).
    Std,
    /// Lateralized (127 deg).
    Lat,
    /// Small-neck standard (135 deg).
    StdSn,
    /// Small-neck lateralized (127 deg).
    LatSn,
}

pub const GROUPS: [Group; 4] = [Group::Std, Group::Lat, Group::StdSn, Group::LatSn];

const STEM_STD: [Uid; 11] = [
    Uid::STEM_STD_0, Uid::STEM_STD_1, Uid::STEM_STD_2,
    Uid::STEM_STD_3, Uid::STEM_STD_4, Uid::STEM_STD_5,
    Uid::STEM_STD_6, Uid::STEM_STD_7, Uid::STEM_STD_8,
    Uid::STEM_STD_9, Uid::STEM_STD_10,
];

const STEM_LAT: [Uid; 9] = [
    Uid::STEM_LAT_0, Uid::STEM_LAT_1, Uid::STEM_LAT_2,
    Uid::STEM_LAT_3, Uid::STEM_LAT_4, Uid::STEM_LAT_5,
    Uid::STEM_LAT_6, Uid::STEM_LAT_7, Uid::STEM_LAT_8,
];

const STEM_STD_SN: [Uid; 11] = [
    Uid::STEM_STD_SN_0, Uid::STEM_STD_SN_1, Uid::STEM_STD_SN_2,
    Uid::STEM_STD_SN_3, Uid::STEM_STD_SN_4, Uid::STEM_STD_SN_5,
    Uid::STEM_STD_SN_6, Uid::STEM_STD_SN_7, Uid::STEM_STD_SN_8,
    Uid::STEM_STD_SN_9, Uid::STEM_STD_SN_10,
];

const STEM_LAT_SN: [Uid; 9] = [
    Uid::STEM_LAT_SN_0, Uid::STEM_LAT_SN_1, Uid::STEM_LAT_SN_2,
    Uid::STEM_LAT_SN_3, Uid::STEM_LAT_SN_4, Uid::STEM_LAT_SN_5,
    Uid::STEM_LAT_SN_6, Uid::STEM_LAT_SN_7, Uid::STEM_LAT_SN_8,
];

const LABELS_STD: [&str; 11] = [
    "STD 00", "STD 0", "STD 1",
    "STD 2", "STD 3", "STD 4",
    "STD 5", "STD 6", "STD 7",
    "STD 8", "STD 9",
];

const LABELS_LAT: [&str; 9] = [
    "LAT 0", "LAT 1", "LAT 2",
    "LAT 3", "LAT 4", "LAT 5",
    "LAT 6", "LAT 7", "LAT 8",
];

const LABELS_STD_SN: [&str; 11] = [
    "SN STD 00", "SN STD 0", "SN STD 1",
    "SN STD 2", "SN STD 3", "SN STD 4",
    "SN STD 5", "SN STD 6", "SN STD 7",
    "SN STD 8", "SN STD 9",
];

const LABELS_LAT_SN: [&str; 9] = [
    "SN LAT 0", "SN LAT 1", "SN LAT 2",
    "SN LAT 3", "SN LAT 4", "SN LAT 5",
    "SN LAT 6", "SN LAT 7", "SN LAT 8",
];

impl Group {
    /// Stem UIDs of this family in catalog-table order.
    pub const fn uids(self) -> &'static [Uid] {
        match self {
            Group::Std => &STEM_STD,
            Group::Lat => &STEM_LAT,
            Group::StdSn => &STEM_STD_SN,
            Group::LatSn => &STEM_LAT_SN,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Std => "STD",
            Group::Lat => "LAT",
            Group::StdSn => "STD_SN",
            Group::LatSn => "LAT_SN",
        }
    }

    const fn labels(self) -> &'static [&'static str] {
        match self {
            Group::Std => &LABELS_STD,
            Group::Lat => &LABELS_LAT,
            Group::StdSn => &LABELS_STD_SN,
            Group::LatSn => &LABELS_LAT_SN,
        }
    }

    /// Standard-angle family, regular or small neck.
    const fn is_std_family(self) -> bool {
        matches!(self, Group::Std | Group::StdSn)
    }
}

const STATS: [RangeStats<Group>; 4] = [
    RangeStats {
        group: Group::Std,
        catalog_index_min: 0,
        catalog_index_max: 10,
        description: "STD (135 deg)",
        size_min: 0,
        size_max: 10,
    },
    RangeStats {
        group: Group::Lat,
        catalog_index_min: 11,
        catalog_index_max: 19,
        description: "LAT (127 deg)",
        size_min: 0,
        size_max: 8,
    },
    RangeStats {
        group: Group::StdSn,
        catalog_index_min: 20,
        catalog_index_max: 30,
        description: "SN STD (135 deg)",
        size_min: 0,
        size_max: 10,
    },
    RangeStats {
        group: Group::LatSn,
        catalog_index_min: 31,
        catalog_index_max: 39,
        description: "SN LAT (127 deg)",
        size_min: 0,
        size_max: 8,
    },
];

pub const fn stats_of(group: Group) -> &'static RangeStats<Group> {
    match group {
        Group::Std => &STATS[0],
        Group::Lat => &STATS[1],
        Group::StdSn => &STATS[2],
        Group::LatSn => &STATS[3],
    }
}

const HEAD_UIDS: [Uid; 5] = [
    Uid::HEAD_M4,
    Uid::HEAD_P0,
    Uid::HEAD_P4,
    Uid::HEAD_P8,
    Uid::HEAD_P12,
];

const RANGE_UIDS: [Uid; 4] = [
    Uid::RANGE_CCD_STD,
    Uid::RANGE_CCD_LAT,
    Uid::RANGE_CCD_STD_SN,
    Uid::RANGE_CCD_LAT_SN,
];

const NECK_MERIDIAN_STD: [(f64, f64); 11] = [
    (14.52, 14.52), (14.78, 14.78), (15.49, 15.49),
    (16.19, 16.19), (16.9, 16.9), (17.54, 17.54),
    (18.17, 18.17), (18.8, 18.8), (19.37, 19.37),
    (20.07, 20.07), (20.78, 20.78),
];

const NECK_MERIDIAN_LAT: [(f64, f64); 9] = [
    (13.99, 10.54), (14.7, 11.08), (15.4, 11.61),
    (16.35, 12.32), (16.76, 12.63), (17.38, 13.1),
    (17.88, 13.55), (18.59, 14.01), (19.2, 14.47),
];

const NECK_MERIDIAN_STD_SN: [(f64, f64); 11] = [
    (14.51, 14.51), (14.77, 14.77), (15.48, 15.48),
    (16.19, 16.19), (16.9, 16.9), (17.53, 17.53),
    (18.17, 18.17), (18.8, 18.8), (19.36, 19.36),
    (20.07, 20.07), (20.78, 20.78),
];

const NECK_MERIDIAN_LAT_SN: [(f64, f64); 9] = [
    (13.99, 10.54), (14.7, 11.08), (15.4, 11.61),
    (16.35, 12.32), (16.76, 12.63), (17.38, 13.1),
    (17.98, 13.55), (18.59, 14.01), (19.2, 14.47),
];

const HEAD_MERIDIAN_STD: [(f64, f64); 11] = [
    (41.5, 41.5), (41.95, 41.95), (43.19, 43.19),
    (44.44, 44.44), (45.7, 45.7), (46.84, 46.84),
    (48.0, 48.0), (49.18, 49.18), (50.25, 50.25),
    (51.48, 51.48), (52.87, 52.87),
];

const HEAD_MERIDIAN_LAT: [(f64, f64); 9] = [
    (43.73, 32.96), (45.13, 34.01), (46.54, 35.07),
    (47.94, 36.13), (49.3, 37.15), (50.61, 38.14),
    (51.91, 39.12), (53.26, 40.13), (54.41, 41.0),
];

const HEAD_MERIDIAN_STD_SN: [(f64, f64); 11] = [
    (37.96, 37.96), (38.42, 38.42), (39.65, 39.65),
    (40.91, 40.91), (42.16, 42.16), (43.3, 43.3),
    (44.46, 44.46), (45.64, 45.64), (46.72, 46.72),
    (47.94, 47.94), (49.33, 49.33),
];

const HEAD_MERIDIAN_LAT_SN: [(f64, f64); 9] = [
    (43.73, 32.96), (45.13, 34.01), (45.64, 35.07),
    (47.94, 36.13), (49.3, 37.15), (50.61, 38.14),
    (51.91, 39.12), (53.26, 40.13), (54.41, 41.0),
];

const fn neck_meridian(group: Group) -> &'static [(f64, f64)] {
    match group {
        Group::Std => &NECK_MERIDIAN_STD,
        Group::Lat => &NECK_MERIDIAN_LAT,
        Group::StdSn => &NECK_MERIDIAN_STD_SN,
        Group::LatSn => &NECK_MERIDIAN_LAT_SN,
    }
}

const fn head_meridian(group: Group) -> &'static [(f64, f64)] {
    match group {
        Group::Std => &HEAD_MERIDIAN_STD,
        Group::Lat => &HEAD_MERIDIAN_LAT,
        Group::StdSn => &HEAD_MERIDIAN_STD_SN,
        Group::LatSn => &HEAD_MERIDIAN_LAT_SN,
    }
}

// Table shapes are part of the scheme contract; a mismatch would corrupt
// every offset-based lookup, so it must never compile.
const _: () = {
    assert!(NECK_MERIDIAN_STD.len() == STEM_STD.len());
    assert!(NECK_MERIDIAN_LAT.len() == STEM_LAT.len());
    assert!(NECK_MERIDIAN_STD_SN.len() == STEM_STD_SN.len());
    assert!(NECK_MERIDIAN_LAT_SN.len() == STEM_LAT_SN.len());
    assert!(HEAD_MERIDIAN_STD.len() == STEM_STD.len());
    assert!(HEAD_MERIDIAN_LAT.len() == STEM_LAT.len());
    assert!(HEAD_MERIDIAN_STD_SN.len() == STEM_STD_SN.len());
    assert!(HEAD_MERIDIAN_LAT_SN.len() == STEM_LAT_SN.len());
    assert!(LABELS_STD.len() == STEM_STD.len());
    assert!(LABELS_LAT.len() == STEM_LAT.len());
    assert!(LABELS_STD_SN.len() == STEM_STD_SN.len());
    assert!(LABELS_LAT_SN.len() == STEM_LAT_SN.len());
};

/// Empirical Z-axis corrections between the regular families, keyed by the
/// source stem's in-group offset. Sizes without an entry shift by zero.
fn std_to_lat_shift(size: i32) -> f64 {
    match size {
        1 => 5.89,
        2 => 6.03,
        3 => 6.22,
        4 => 6.39,
        5 => 6.55,
        6 => 6.71,
        7 => 6.85,
        8 => 7.0,
        9 => 7.26,
        _ => 0.0,
    }
}

fn lat_to_std_shift(size: i32) -> f64 {
    match size {
        0 => 5.89,
        1 => 6.03,
        2 => 6.22,
        3 => 6.39,
        4 => 6.55,
        5 => 6.71,
        6 => 6.85,
        7 => 7.0,
        8 => 7.26,
        _ => 0.0,
    }
}

fn std_sn_to_lat_sn_shift(size: i32) -> f64 {
    match size {
        1 => 5.01,
        2 => 5.19,
        3 => 5.38,
        4 => 5.58,
        5 => 5.69,
        6 => 5.87,
        7 => 6.07,
        8 => 6.13,
        9 => 6.48,
        _ => 0.0,
    }
}

fn lat_sn_to_std_sn_shift(size: i32) -> f64 {
    match size {
        0 => 5.01,
        1 => 5.19,
        2 => 5.38,
        3 => 5.58,
        4 => 5.69,
        5 => 5.87,
        6 => 6.07,
        7 => 6.13,
        8 => 6.48,
        _ => 0.0,
    }
}

fn stem_slot(uid: Uid) -> Option<(Group, usize)> {
    for group in GROUPS {
        if let Some(offset) = group.uids().iter().position(|&u| u == uid) {
            return Some((group, offset));
        }
    }
    None
}

fn require_stem(uid: Uid) -> Result<(Group, usize)> {
    stem_slot(uid).ok_or(CatalogError::NotAStem(uid.raw()))
}

pub fn is_stem(uid: Uid) -> bool {
    stem_slot(uid).is_some()
}

pub fn is_head(uid: Uid) -> bool {
    HEAD_UIDS.contains(&uid)
}

pub fn is_range(uid: Uid) -> bool {
    RANGE_UIDS.contains(&uid)
}

pub fn group_of(uid: Uid) -> Result<Group> {
    require_stem(uid).map(|(group, _)| group)
}

pub fn offset_of(uid: Uid) -> Result<i32> {
    require_stem(uid).map(|(_, offset)| offset as i32)
}

pub fn rcc_code(uid: Uid) -> Result<&'static str> {
    RCC[uid.index()].ok_or(CatalogError::MissingCatalogCode(uid.name()))
}

pub fn variant_of(uid: Uid) -> Result<StemVariant<Uid, Group>> {
    let (group, offset) = require_stem(uid)?;
    Ok(StemVariant {
        uid,
        group,
        offset: offset as i32,
        label: group.labels()[offset],
        rcc_id: RCC[uid.index()],
    })
}

/// All stem UIDs in table order, optionally restricted to one family.
pub fn iter_stems(group: Option<Group>) -> impl Iterator<Item = Uid> {
    GROUPS
        .into_iter()
        .filter(move |g| group.map_or(true, |want| *g == want))
        .flat_map(|g| g.uids().iter().copied())
}

/// Next (or previous) stem in the same family; saturates at the family
/// boundaries rather than wrapping or failing.
pub fn adjacent(uid: Uid, forward: bool) -> Result<Uid> {
    let (group, offset) = require_stem(uid)?;
    let uids = group.uids();
    let candidate = offset as i64 + if forward { 1 } else { -1 };
    if (0..uids.len() as i64).contains(&candidate) {
        return Ok(uids[candidate as usize]);
    }
    Ok(uid)
}

pub fn neck_origin(uid: Uid) -> Result<Pnt> {
    let (group, offset) = require_stem(uid)?;
    let (y, z) = neck_meridian(group)[offset];
    Ok(Pnt::new(0.0, y, z))
}

pub fn head_point(uid: Uid) -> Result<Pnt> {
    let (group, offset) = require_stem(uid)?;
    let (y, z) = head_meridian(group)[offset];
    Ok(Pnt::new(0.0, y, z))
}

/// Translation from `source`'s frame to `target`'s.
///
/// Within one neck-angle family this is the raw neck-origin difference.
/// Across the regular STD/LAT (and SN STD/LAT) family boundary the scheme
/// instead prescribes a pure Z translation from the empirical correction
/// tables. Branch order follows the scheme: the standard-family check
/// spans both regular and small-neck variants, so mixed STD-vs-LAT_SN
/// pairs fall through to the raw difference.
pub fn shift_vector(source: Uid, target: Uid) -> Result<Vec3> {
    let (source_group, source_offset) = require_stem(source)?;
    let (target_group, _) = require_stem(target)?;

    if source == target {
        return Ok(Vec3::ZERO);
    }

    let source_neck = neck_origin(source)?;
    let target_neck = neck_origin(target)?;

    if source_group.is_std_family() && target_group.is_std_family() {
        return Ok(source_neck.subtracted(&target_neck));
    }
    if source_group == Group::Lat && target_group == Group::Lat {
        return Ok(source_neck.subtracted(&target_neck));
    }
    if source_group == Group::LatSn && target_group == Group::LatSn {
        return Ok(source_neck.subtracted(&target_neck));
    }

    let size = source_offset as i32;
    match (source_group, target_group) {
        (Group::Std, Group::Lat) => Ok(Vec3::new(0.0, 0.0, std_to_lat_shift(size))),
        (Group::Lat, Group::Std) => Ok(Vec3::new(0.0, 0.0, -lat_to_std_shift(size))),
        (Group::StdSn, Group::LatSn) => Ok(Vec3::new(0.0, 0.0, std_sn_to_lat_sn_shift(size))),
        (Group::LatSn, Group::StdSn) => Ok(Vec3::new(0.0, 0.0, -lat_sn_to_std_sn_shift(size))),
        _ => Ok(source_neck.subtracted(&target_neck)),
    }
}

/// Nearest catalog equivalent of `uid` inside `target_group`.
///
/// Moving into a lateral family drops one size, except from the family's
/// boundary sizes (smallest and largest) where the catalog has no true
/// equivalent and the input is returned unchanged. Moving back adds one
/// size. The asymmetry is ground truth from the device scheme.
pub fn similar_stem(uid: Uid, target_group: Group) -> Result<Uid> {
    let (source_group, source_offset) = require_stem(uid)?;
    if target_group == source_group {
        return Ok(uid);
    }

    let stats = stats_of(target_group);
    let size = source_offset as i32;
    let translated = match source_group {
        Group::Std | Group::StdSn => match target_group {
            Group::Std | Group::StdSn => stats.clamp(size),
            Group::Lat | Group::LatSn => {
                if size == 0 || size == stats_of(source_group).size_max {
                    return Ok(uid);
                }
                stats.clamp(size - 1)
            }
        },
        Group::Lat | Group::LatSn => match target_group {
            Group::Std | Group::StdSn => stats.clamp(size + 1),
            Group::Lat | Group::LatSn => size,
        },
    };

    tracing::trace!(
        source = uid.name(),
        target = target_group.as_str(),
        offset = translated,
        "translated equivalent size"
    );
    target_group
        .uids()
        .get(translated as usize)
        .copied()
        .ok_or(CatalogError::NoEquivalent {
            group: target_group.as_str(),
            offset: translated,
        })
}

/// Base head offset step in millimeters (5 mm along the neck meridian
/// projected at 45 deg).
const HEAD_OFFSET_BASE: f64 = 3.5355;
/// Extra lateral correction applied to regular LAT stems.
const LAT_CORRECTION: f64 = 0.9 + HEAD_OFFSET_BASE;

/// Attachment point of `head` mounted on `stem`.
pub fn head_to_stem_offset(head: Uid, stem: Uid) -> Result<Pnt> {
    if !is_head(head) {
        return Err(CatalogError::NotAHead(head.raw()));
    }
    let (group, _) = require_stem(stem)?;

    let neck = neck_origin(stem)?;
    let head_point = head_point(stem)?;
    let neck_axis = head_point.subtracted(&neck).normalized();

    let mut factor = HEAD_OFFSET_BASE;
    match head {
        Uid::HEAD_M4 => factor *= -2.0,
        Uid::HEAD_P0 => factor *= -1.0,
        Uid::HEAD_P4 => factor = 0.0,
        Uid::HEAD_P12 => factor *= 2.0,
        _ => {}
    }
    if group == Group::Lat {
        factor += LAT_CORRECTION;
    }

    Ok(head_point.translated(&neck_axis.multiplied(factor)))
}

/// Resection plane: origin at the neck origin, normal the Y axis rotated
/// 45 deg about X.
pub fn cut_plane(uid: Uid) -> Result<CutPlane> {
    let origin = neck_origin(uid)?;
    let angle = 45.0_f64.to_radians();
    let normal = Vec3::new(0.0, angle.cos(), angle.sin()).normalized();
    Ok(CutPlane { origin, normal })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_bounds() {
        assert_eq!(Uid::from_raw(RANGE_START), Some(Uid::STEM_STD_0));
        assert_eq!(Uid::from_raw(RANGE_START - 1), None);
        assert_eq!(Uid::from_raw(100_849), Some(Uid::RANGE_CCD_LAT_SN));
        assert_eq!(Uid::from_raw(100_850), None);
    }

    #[test]
    fn test_group_and_offset_mapping() {
        assert_eq!(group_of(Uid::STEM_STD_3).unwrap(), Group::Std);
        assert_eq!(offset_of(Uid::STEM_STD_3).unwrap(), 3);
        assert_eq!(group_of(Uid::STEM_LAT_SN_8).unwrap(), Group::LatSn);
        assert_eq!(offset_of(Uid::STEM_LAT_SN_8).unwrap(), 8);
    }

    #[test]
    fn test_markers_are_not_stems() {
        assert!(!is_stem(Uid::CUTPLANE));
        assert!(!is_stem(Uid::HEAD_P0));
        assert!(!is_stem(Uid::RANGE_CCD_STD));
        assert!(is_head(Uid::HEAD_P12));
        assert!(is_range(Uid::RANGE_CCD_LAT));
        assert!(matches!(
            group_of(Uid::CUTPLANE),
            Err(CatalogError::NotAStem(_))
        ));
    }

    #[test]
    fn test_offsets_are_dense_per_group() {
        for group in GROUPS {
            let offsets: Vec<i32> = iter_stems(Some(group))
                .map(|uid| offset_of(uid).unwrap())
                .collect();
            let expected: Vec<i32> = (0..group.uids().len() as i32).collect();
            assert_eq!(offsets, expected);
        }
    }

    #[test]
    fn test_adjacent_saturates() {
        assert_eq!(adjacent(Uid::STEM_STD_4, true).unwrap(), Uid::STEM_STD_5);
        assert_eq!(adjacent(Uid::STEM_STD_5, false).unwrap(), Uid::STEM_STD_4);
        assert_eq!(adjacent(Uid::STEM_STD_10, true).unwrap(), Uid::STEM_STD_10);
        assert_eq!(adjacent(Uid::STEM_STD_0, false).unwrap(), Uid::STEM_STD_0);
    }

    #[test]
    fn test_similar_std_to_lat_drops_one_size() {
        assert_eq!(
            similar_stem(Uid::STEM_STD_5, Group::Lat).unwrap(),
            Uid::STEM_LAT_4
        );
    }

    #[test]
    fn test_similar_boundary_sizes_stay_put() {
        assert_eq!(
            similar_stem(Uid::STEM_STD_0, Group::Lat).unwrap(),
            Uid::STEM_STD_0
        );
        assert_eq!(
            similar_stem(Uid::STEM_STD_10, Group::Lat).unwrap(),
            Uid::STEM_STD_10
        );
    }

    #[test]
    fn test_similar_identity_within_group() {
        for uid in iter_stems(None) {
            let group = group_of(uid).unwrap();
            assert_eq!(similar_stem(uid, group).unwrap(), uid);
        }
    }

    #[test]
    fn test_shift_vector_std_to_lat_is_tabulated_z() {
        let shift = shift_vector(Uid::STEM_STD_5, Uid::STEM_LAT_4).unwrap();
        assert_eq!(shift.x, 0.0);
        assert_eq!(shift.y, 0.0);
        assert!((shift.z - 6.55).abs() < 1e-4);
    }

    #[test]
    fn test_shift_vector_is_directional() {
        let forward = shift_vector(Uid::STEM_STD_5, Uid::STEM_LAT_4).unwrap();
        let back = shift_vector(Uid::STEM_LAT_5, Uid::STEM_STD_5).unwrap();
        assert!(forward.z > 0.0);
        assert!(back.z < 0.0);
    }

    #[test]
    fn test_head_p4_is_neutral() {
        let head_pt = head_point(Uid::STEM_STD_5).unwrap();
        let mounted = head_to_stem_offset(Uid::HEAD_P4, Uid::STEM_STD_5).unwrap();
        assert_eq!(mounted, head_pt);
    }

    #[test]
    fn test_head_p12_moves_two_steps_along_axis() {
        let stem = Uid::STEM_STD_5;
        let neck = neck_origin(stem).unwrap();
        let head_pt = head_point(stem).unwrap();
        let axis = head_pt.subtracted(&neck).normalized();
        let mounted = head_to_stem_offset(Uid::HEAD_P12, stem).unwrap();
        let expected = head_pt.translated(&axis.multiplied(2.0 * HEAD_OFFSET_BASE));
        assert!((mounted.y - expected.y).abs() < 1e-9);
        assert!((mounted.z - expected.z).abs() < 1e-9);
    }

    #[test]
    fn test_lat_head_offset_includes_correction() {
        let stem = Uid::STEM_LAT_4;
        let neck = neck_origin(stem).unwrap();
        let head_pt = head_point(stem).unwrap();
        let axis = head_pt.subtracted(&neck).normalized();
        let mounted = head_to_stem_offset(Uid::HEAD_P4, stem).unwrap();
        let delta = mounted.subtracted(&head_pt);
        let expected = axis.multiplied(LAT_CORRECTION);
        assert!((delta.y - expected.y).abs() < 1e-9);
        assert!((delta.z - expected.z).abs() < 1e-9);
    }

    #[test]
    fn test_cut_plane_sits_on_neck_origin() {
        for uid in iter_stems(None) {
            let plane = cut_plane(uid).unwrap();
            assert_eq!(plane.origin, neck_origin(uid).unwrap());
            assert!((plane.normal.magnitude() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rcc_codes_cover_all_stems() {
        for uid in iter_stems(None) {
            assert!(rcc_code(uid).is_ok(), "missing RCC for {}", uid.name());
        }
        assert!(matches!(
            rcc_code(Uid::HEAD_P0),
            Err(CatalogError::MissingCatalogCode(_))
        ));
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(variant_of(Uid::STEM_STD_0).unwrap().label, "STD 00");
        assert_eq!(variant_of(Uid::STEM_STD_5).unwrap().label, "STD 4");
        assert_eq!(variant_of(Uid::STEM_LAT_3).unwrap().label, "LAT 3");
        assert_eq!(variant_of(Uid::STEM_STD_SN_0).unwrap().label, "SN STD 00");
    }
}
