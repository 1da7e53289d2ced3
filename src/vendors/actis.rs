//! Johnson & Johnson ACTIS catalog.
//!
//! Tables transcribed from the legacy `johnson_actis_scheme.h` device
//! scheme. Two collared families of thirteen sizes each; every measured
//! point is a full 3-D coordinate in millimeters in the stem local frame.

use crate::math::{CutPlane, Pnt, Vec3};
use crate::range::RangeStats;
use crate::variant::StemVariant;
use crate::{CatalogError, Result};

pub const COMPANY_NAME: &str = "JNJ";
pub const PRODUCT_NAME: &str = "ACTIS";
/// First UID of the ACTIS block (company range 160_000, product offset
/// 1_250, first scheme constant at +90).
pub const RANGE_START: i32 = 161_340;

/// Scheme constants of the ACTIS product line, one contiguous ascending
/// UID block with explicit discriminants.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(i32)]
pub enum Uid {
    STEM_STD_0 = 161_340,
    STEM_STD_1 = 161_341,
    STEM_STD_2 = 161_342,
    STEM_STD_3 = 161_343,
    STEM_STD_4 = 161_344,
    STEM_STD_5 = 161_345,
    STEM_STD_6 = 161_346,
    STEM_STD_7 = 161_347,
    STEM_STD_8 = 161_348,
    STEM_STD_9 = 161_349,
    STEM_STD_10 = 161_350,
    STEM_STD_11 = 161_351,
    STEM_STD_12 = 161_352,
    STEM_HO_0 = 161_353,
    STEM_HO_1 = 161_354,
    STEM_HO_2 = 161_355,
    STEM_HO_3 = 161_356,
    STEM_HO_4 = 161_357,
    STEM_HO_5 = 161_358,
    STEM_HO_6 = 161_359,
    STEM_HO_7 = 161_360,
    STEM_HO_8 = 161_361,
    STEM_HO_9 = 161_362,
    STEM_HO_10 = 161_363,
    STEM_HO_11 = 161_364,
    STEM_HO_12 = 161_365,
    CUTPLANE = 161_366,
    HEAD_M4 = 161_367,
    HEAD_P0 = 161_368,
    HEAD_P4 = 161_369,
    HEAD_P8 = 161_370,
    RANGE_CCD_STD = 161_371,
    RANGE_CCD_HO = 161_372,
}

const ALL: [Uid; 33] = [
    Uid::STEM_STD_0, Uid::STEM_STD_1, Uid::STEM_STD_2,
    Uid::STEM_STD_3, Uid::STEM_STD_4, Uid::STEM_STD_5,
    Uid::STEM_STD_6, Uid::STEM_STD_7, Uid::STEM_STD_8,
    Uid::STEM_STD_9, Uid::STEM_STD_10, Uid::STEM_STD_11,
    Uid::STEM_STD_12, Uid::STEM_HO_0, Uid::STEM_HO_1,
    Uid::STEM_HO_2, Uid::STEM_HO_3, Uid::STEM_HO_4,
    Uid::STEM_HO_5, Uid::STEM_HO_6, Uid::STEM_HO_7,
    Uid::STEM_HO_8, Uid::STEM_HO_9, Uid::STEM_HO_10,
    Uid::STEM_HO_11, Uid::STEM_HO_12, Uid::CUTPLANE,
    Uid::HEAD_M4, Uid::HEAD_P0, Uid::HEAD_P4,
    Uid::HEAD_P8, Uid::RANGE_CCD_STD, Uid::RANGE_CCD_HO,
];

const NAMES: [&str; 33] = [
    "STEM_STD_0", "STEM_STD_1", "STEM_STD_2",
    "STEM_STD_3", "STEM_STD_4", "STEM_STD_5",
    "STEM_STD_6", "STEM_STD_7", "STEM_STD_8",
    "STEM_STD_9", "STEM_STD_10", "STEM_STD_11",
    "STEM_STD_12", "STEM_HO_0", "STEM_HO_1",
    "STEM_HO_2", "STEM_HO_3", "STEM_HO_4",
    "STEM_HO_5", "STEM_HO_6", "STEM_HO_7",
    "STEM_HO_8", "STEM_HO_9", "STEM_HO_10",
    "STEM_HO_11", "STEM_HO_12", "CUTPLANE",
    "HEAD_M4", "HEAD_P0", "HEAD_P4",
    "HEAD_P8", "RANGE_CCD_STD", "RANGE_CCD_HO",
];

const RCC: [Option<&str>; 33] = [
    Some("103794036 Rev 1"), Some("103533729_1"),
    Some("103534115_1"), Some("103534118_1"),
    Some("103534120_1"), Some("103534121_1"),
    Some("103534123_1"), Some("103534124_1"),
    Some("103534125_1"), Some("103534127_1"),
    Some("103534129_1"), Some("103534132_1"),
    Some("103534133_1"), Some("103794037 Rev 1"),
    Some("103534134_1"), Some("103534135_1"),
    Some("103534138_1"), Some("103534139_1"),
    Some("103534144_1"), Some("103534146_1"),
    Some("103534147_1"), Some("103534972_1"),
    Some("103534973_1"), Some("103534974_1"),
    Some("103534976_1"), Some("103534977_1"),
    None, None,
    None, None,
    None, None,
    None,
];

impl Uid {
    /// Claims `raw` if it falls inside the ACTIS block.
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

/// Stem families of the ACTIS catalog. Both families ship collared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Group {
    /// Standard offset.
    Std,
    /// High offset.
    HighOffset,
}

pub const GROUPS: [Group; 2] = [Group::Std, Group::HighOffset];

const STEM_STD: [Uid; 13] = [
    Uid::STEM_STD_0, Uid::STEM_STD_1, Uid::STEM_STD_2,
    Uid::STEM_STD_3, Uid::STEM_STD_4, Uid::STEM_STD_5,
    Uid::STEM_STD_6, Uid::STEM_STD_7, Uid::STEM_STD_8,
    Uid::STEM_STD_9, Uid::STEM_STD_10, Uid::STEM_STD_11,
    Uid::STEM_STD_12,
];

const STEM_HO: [Uid; 13] = [
    Uid::STEM_HO_0, Uid::STEM_HO_1, Uid::STEM_HO_2,
    Uid::STEM_HO_3, Uid::STEM_HO_4, Uid::STEM_HO_5,
    Uid::STEM_HO_6, Uid::STEM_HO_7, Uid::STEM_HO_8,
    Uid::STEM_HO_9, Uid::STEM_HO_10, Uid::STEM_HO_11,
    Uid::STEM_HO_12,
];

impl Group {
    pub const fn uids(self) -> &'static [Uid] {
        match self {
            Group::Std => &STEM_STD,
            Group::HighOffset => &STEM_HO,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Std => "STD",
            Group::HighOffset => "HIGH",
        }
    }

    /// Range marker UID of this family's CCD span.
    pub const fn range_uid(self) -> Uid {
        match self {
            Group::Std => Uid::RANGE_CCD_STD,
            Group::HighOffset => Uid::RANGE_CCD_HO,
        }
    }
}

const LABELS_STD: [&str; 13] = [
    "COLLARED STD 0",
    "COLLARED STD 1",
    "COLLARED STD 2",
    "COLLARED STD 3",
    "COLLARED STD 4",
    "COLLARED STD 5",
    "COLLARED STD 6",
    "COLLARED STD 7",
    "COLLARED STD 8",
    "COLLARED STD 9",
    "COLLARED STD 10",
    "COLLARED STD 11",
    "COLLARED STD 12",
];

const LABELS_HO: [&str; 13] = [
    "COLLARED HIGH 0",
    "COLLARED HIGH 1",
    "COLLARED HIGH 2",
    "COLLARED HIGH 3",
    "COLLARED HIGH 4",
    "COLLARED HIGH 5",
    "COLLARED HIGH 6",
    "COLLARED HIGH 7",
    "COLLARED HIGH 8",
    "COLLARED HIGH 9",
    "COLLARED HIGH 10",
    "COLLARED HIGH 11",
    "COLLARED HIGH 12",
];

const STATS: [RangeStats<Group>; 2] = [
    RangeStats {
        group: Group::Std,
        catalog_index_min: 0,
        catalog_index_max: 12,
        description: "Standard collared",
        size_min: 0,
        size_max: 12,
    },
    RangeStats {
        group: Group::HighOffset,
        catalog_index_min: 13,
        catalog_index_max: 25,
        description: "High-offset collared",
        size_min: 0,
        size_max: 12,
    },
];

pub const fn stats_of(group: Group) -> &'static RangeStats<Group> {
    match group {
        Group::Std => &STATS[0],
        Group::HighOffset => &STATS[1],
    }
}

const HEAD_UIDS: [Uid; 4] = [Uid::HEAD_M4, Uid::HEAD_P0, Uid::HEAD_P4, Uid::HEAD_P8];
const RANGE_UIDS: [Uid; 2] = [Uid::RANGE_CCD_STD, Uid::RANGE_CCD_HO];

const NECK_ORIGIN_STD: [Pnt; 13] = [
    Pnt::new(11.94, 0.0, 10.02), Pnt::new(12.47, 0.0, 10.46),
    Pnt::new(13.27, 0.0, 11.14), Pnt::new(13.05, 0.0, 10.95),
    Pnt::new(13.56, 0.0, 11.38), Pnt::new(13.58, 0.0, 11.4),
    Pnt::new(14.12, 0.0, 11.85), Pnt::new(14.14, 0.0, 11.87),
    Pnt::new(14.68, 0.0, 12.32), Pnt::new(14.7, 0.0, 12.34),
    Pnt::new(15.29, 0.0, 12.83), Pnt::new(15.64, 0.0, 13.12),
    Pnt::new(16.04, 0.0, 13.46),
];

const NECK_ORIGIN_HO: [Pnt; 13] = [
    Pnt::new(15.1, 0.0, 12.67), Pnt::new(15.47, 0.0, 12.98),
    Pnt::new(16.27, 0.0, 13.65), Pnt::new(16.05, 0.0, 13.46),
    Pnt::new(17.57, 0.0, 14.74), Pnt::new(17.58, 0.0, 14.76),
    Pnt::new(18.12, 0.0, 15.21), Pnt::new(18.14, 0.0, 15.22),
    Pnt::new(18.68, 0.0, 15.68), Pnt::new(18.7, 0.0, 15.69),
    Pnt::new(19.29, 0.0, 16.19), Pnt::new(19.64, 0.0, 16.48),
    Pnt::new(20.04, 0.0, 16.82),
];

const REFERENCE_POINT_STD: [Pnt; 13] = [
    Pnt::new(20.01, 0.0, 3.17), Pnt::new(21.01, 0.0, 3.3),
    Pnt::new(21.81, 0.0, 3.98), Pnt::new(22.51, 0.0, 3.01),
    Pnt::new(23.3, 0.0, 3.21), Pnt::new(24.1, 0.0, 2.57),
    Pnt::new(24.81, 0.0, 2.89), Pnt::new(25.61, 0.0, 2.25),
    Pnt::new(26.31, 0.0, 2.57), Pnt::new(27.11, 0.0, 1.93),
    Pnt::new(27.91, 0.0, 2.24), Pnt::new(28.61, 0.0, 2.24),
    Pnt::new(29.41, 0.0, 2.24),
];

const REFERENCE_POINT_HO: [Pnt; 13] = [
    Pnt::new(20.21, 0.0, 8.39), Pnt::new(21.01, 0.0, 8.33),
    Pnt::new(21.81, 0.0, 9.01), Pnt::new(22.51, 0.0, 8.04),
    Pnt::new(23.31, 0.0, 9.92), Pnt::new(24.11, 0.0, 9.28),
    Pnt::new(24.82, 0.0, 9.59), Pnt::new(25.61, 0.0, 8.96),
    Pnt::new(26.31, 0.0, 9.28), Pnt::new(27.11, 0.0, 8.64),
    Pnt::new(27.91, 0.0, 8.96), Pnt::new(28.61, 0.0, 8.96),
    Pnt::new(29.41, 0.0, 8.96),
];

const HEAD_POINT_STD: [Pnt; 13] = [
    Pnt::new(36.29, 0.0, 30.45), Pnt::new(36.44, 0.0, 30.58),
    Pnt::new(38.44, 0.0, 32.26), Pnt::new(38.24, 0.0, 32.09),
    Pnt::new(39.85, 0.0, 33.44), Pnt::new(39.66, 0.0, 33.28),
    Pnt::new(41.66, 0.0, 34.96), Pnt::new(41.66, 0.0, 34.96),
    Pnt::new(43.66, 0.0, 36.64), Pnt::new(43.66, 0.0, 36.64),
    Pnt::new(45.66, 0.0, 38.32), Pnt::new(45.66, 0.0, 38.32),
    Pnt::new(45.66, 0.0, 38.32),
];

const HEAD_POINT_HO: [Pnt; 13] = [
    Pnt::new(42.44, 0.0, 35.61), Pnt::new(42.44, 0.0, 35.61),
    Pnt::new(44.44, 0.0, 37.29), Pnt::new(44.24, 0.0, 37.12),
    Pnt::new(47.85, 0.0, 40.15), Pnt::new(47.66, 0.0, 39.99),
    Pnt::new(49.66, 0.0, 41.67), Pnt::new(49.66, 0.0, 41.67),
    Pnt::new(51.66, 0.0, 43.35), Pnt::new(51.66, 0.0, 43.35),
    Pnt::new(53.66, 0.0, 45.03), Pnt::new(53.66, 0.0, 45.03),
    Pnt::new(53.66, 0.0, 45.03),
];

const fn neck_origin_table(group: Group) -> &'static [Pnt] {
    match group {
        Group::Std => &NECK_ORIGIN_STD,
        Group::HighOffset => &NECK_ORIGIN_HO,
    }
}

const fn reference_point_table(group: Group) -> &'static [Pnt] {
    match group {
        Group::Std => &REFERENCE_POINT_STD,
        Group::HighOffset => &REFERENCE_POINT_HO,
    }
}

const fn head_point_table(group: Group) -> &'static [Pnt] {
    match group {
        Group::Std => &HEAD_POINT_STD,
        Group::HighOffset => &HEAD_POINT_HO,
    }
}

const _: () = {
    assert!(NECK_ORIGIN_STD.len() == STEM_STD.len());
    assert!(NECK_ORIGIN_HO.len() == STEM_HO.len());
    assert!(REFERENCE_POINT_STD.len() == STEM_STD.len());
    assert!(REFERENCE_POINT_HO.len() == STEM_HO.len());
    assert!(HEAD_POINT_STD.len() == STEM_STD.len());
    assert!(HEAD_POINT_HO.len() == STEM_HO.len());
    assert!(LABELS_STD.len() == STEM_STD.len());
    assert!(LABELS_HO.len() == STEM_HO.len());
};

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

/// Every ACTIS stem ships with a collar.
pub fn has_collar(uid: Uid) -> bool {
    is_stem(uid)
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
    let labels: &[&str] = match group {
        Group::Std => &LABELS_STD,
        Group::HighOffset => &LABELS_HO,
    };
    Ok(StemVariant {
        uid,
        group,
        offset: offset as i32,
        label: labels[offset],
        rcc_id: RCC[uid.index()],
    })
}

pub fn iter_stems(group: Option<Group>) -> impl Iterator<Item = Uid> {
    GROUPS
        .into_iter()
        .filter(move |g| group.map_or(true, |want| *g == want))
        .flat_map(|g| g.uids().iter().copied())
}

/// Next (or previous) stem in the same family; saturates at the family
/// boundaries.
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
    Ok(neck_origin_table(group)[offset])
}

pub fn reference_point(uid: Uid) -> Result<Pnt> {
    let (group, offset) = require_stem(uid)?;
    Ok(reference_point_table(group)[offset])
}

pub fn head_point(uid: Uid) -> Result<Pnt> {
    let (group, offset) = require_stem(uid)?;
    Ok(head_point_table(group)[offset])
}

/// CCD shaft angle in degrees. Uniform across the line.
pub fn shaft_angle(uid: Uid) -> Result<f64> {
    require_stem(uid)?;
    Ok(45.0)
}

/// Translation from `source`'s frame to `target`'s, taken between the
/// distal reference points.
pub fn shift_vector(source: Uid, target: Uid) -> Result<Vec3> {
    let from = reference_point(source)?;
    let to = reference_point(target)?;
    Ok(from.subtracted(&to))
}

/// Nearest catalog equivalent: standard and high-offset families share a
/// size ladder, so this is a plain clamp into the target span.
pub fn similar_stem(uid: Uid, target_group: Group) -> Result<Uid> {
    let (source_group, source_offset) = require_stem(uid)?;
    if target_group == source_group {
        return Ok(uid);
    }
    let translated = stats_of(target_group).clamp(source_offset as i32);
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

fn head_offset_mm(head: Uid) -> f64 {
    match head {
        Uid::HEAD_M4 => -3.5,
        Uid::HEAD_P4 => 3.5,
        Uid::HEAD_P8 => 7.0,
        _ => 0.0,
    }
}

/// Attachment point of `head` mounted on `stem`.
pub fn head_to_stem_offset(head: Uid, stem: Uid) -> Result<Pnt> {
    if !is_head(head) {
        return Err(CatalogError::NotAHead(head.raw()));
    }
    let neck = neck_origin(stem)?;
    let head_point = head_point(stem)?;
    let neck_axis = head_point.subtracted(&neck).normalized();
    Ok(head_point.translated(&neck_axis.multiplied(head_offset_mm(head))))
}

/// Resection plane: origin at the neck origin, normal the Y axis rotated
/// 90 deg about X then 40 deg about Y.
pub fn cut_plane(uid: Uid) -> Result<CutPlane> {
    let origin = neck_origin(uid)?;
    let angle = 40.0_f64.to_radians();
    let normal = Vec3::new(angle.sin(), 0.0, angle.cos()).normalized();
    Ok(CutPlane { origin, normal })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_bounds() {
        assert_eq!(Uid::from_raw(161_340), Some(Uid::STEM_STD_0));
        assert_eq!(Uid::from_raw(161_339), None);
        assert_eq!(Uid::from_raw(161_372), Some(Uid::RANGE_CCD_HO));
        assert_eq!(Uid::from_raw(161_373), None);
    }

    #[test]
    fn test_all_stems_are_collared() {
        for uid in iter_stems(None) {
            assert!(has_collar(uid));
        }
        assert!(!has_collar(Uid::HEAD_P0));
    }

    #[test]
    fn test_similar_is_plain_clamp() {
        assert_eq!(
            similar_stem(Uid::STEM_STD_7, Group::HighOffset).unwrap(),
            Uid::STEM_HO_7
        );
        assert_eq!(
            similar_stem(Uid::STEM_HO_0, Group::Std).unwrap(),
            Uid::STEM_STD_0
        );
    }

    #[test]
    fn test_adjacent_saturates() {
        assert_eq!(adjacent(Uid::STEM_HO_12, true).unwrap(), Uid::STEM_HO_12);
        assert_eq!(adjacent(Uid::STEM_STD_0, false).unwrap(), Uid::STEM_STD_0);
        assert_eq!(adjacent(Uid::STEM_STD_3, true).unwrap(), Uid::STEM_STD_4);
    }

    #[test]
    fn test_head_p0_is_neutral() {
        let stem = Uid::STEM_STD_6;
        assert_eq!(
            head_to_stem_offset(Uid::HEAD_P0, stem).unwrap(),
            head_point(stem).unwrap()
        );
    }

    #[test]
    fn test_head_p8_moves_along_neck_axis() {
        let stem = Uid::STEM_HO_4;
        let neck = neck_origin(stem).unwrap();
        let head_pt = head_point(stem).unwrap();
        let axis = head_pt.subtracted(&neck).normalized();
        let mounted = head_to_stem_offset(Uid::HEAD_P8, stem).unwrap();
        let expected = head_pt.translated(&axis.multiplied(7.0));
        assert!((mounted.x - expected.x).abs() < 1e-9);
        assert!((mounted.y - expected.y).abs() < 1e-9);
        assert!((mounted.z - expected.z).abs() < 1e-9);
    }

    #[test]
    fn test_cut_plane_normal() {
        let plane = cut_plane(Uid::STEM_STD_0).unwrap();
        let angle = 40.0_f64.to_radians();
        assert!((plane.normal.x - angle.sin()).abs() < 1e-12);
        assert_eq!(plane.normal.y, 0.0);
        assert!((plane.normal.z - angle.cos()).abs() < 1e-12);
        assert_eq!(plane.origin, neck_origin(Uid::STEM_STD_0).unwrap());
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(variant_of(Uid::STEM_STD_0).unwrap().label, "COLLARED STD 0");
        assert_eq!(
            variant_of(Uid::STEM_HO_12).unwrap().label,
            "COLLARED HIGH 12"
        );
    }

    #[test]
    fn test_range_uid_per_group() {
        assert_eq!(Group::HighOffset.range_uid(), Uid::RANGE_CCD_HO);
        assert!(is_range(Uid::RANGE_CCD_HO));
        assert!(!is_stem(Uid::RANGE_CCD_HO));
    }

    #[test]
    fn test_shift_vector_within_family() {
        let shift = shift_vector(Uid::STEM_STD_0, Uid::STEM_STD_0).unwrap();
        assert_eq!(shift, Vec3::ZERO);
    }
}
