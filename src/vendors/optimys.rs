//! Mathys optimys catalog.
//!
//! Tables transcribed from the legacy `mathys_optimys_scheme.h` device
//! scheme. The geometry is parametric rather than tabulated point by
//! point: every landmark is built from a per-family X translation and a
//! per-size head height, both expressed in a frame rotated -45 deg about
//! Z. Both families ship collared.

use crate::math::{CutPlane, Pnt, Vec3};
use crate::range::RangeStats;
use crate::variant::StemVariant;
use crate::{CatalogError, Result};

pub const COMPANY_NAME: &str = "MYS";
pub const PRODUCT_NAME: &str = "MYS OPTIMYS";
/// First UID of the optimys block (company range 130_000, product offset
/// 500).
pub const RANGE_START: i32 = 130_500;

/// Scheme constants of the optimys product line, one contiguous ascending
/// UID block with explicit discriminants.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(i32)]
pub enum Uid {
    STEM_STD_1 = 130_500,
    STEM_STD_2 = 130_501,
    STEM_STD_3 = 130_502,
    STEM_STD_4 = 130_503,
    STEM_STD_5 = 130_504,
    STEM_STD_6 = 130_505,
    STEM_STD_7 = 130_506,
    STEM_STD_8 = 130_507,
    STEM_STD_9 = 130_508,
    STEM_STD_10 = 130_509,
    STEM_STD_11 = 130_510,
    STEM_STD_12 = 130_511,
    STEM_STD_13 = 130_512,
    STEM_STD_14 = 130_513,
    STEM_LAT_1 = 130_514,
    STEM_LAT_2 = 130_515,
    STEM_LAT_3 = 130_516,
    STEM_LAT_4 = 130_517,
    STEM_LAT_5 = 130_518,
    STEM_LAT_6 = 130_519,
    STEM_LAT_7 = 130_520,
    STEM_LAT_8 = 130_521,
    STEM_LAT_9 = 130_522,
    STEM_LAT_10 = 130_523,
    STEM_LAT_11 = 130_524,
    STEM_LAT_12 = 130_525,
    STEM_LAT_13 = 130_526,
    STEM_LAT_14 = 130_527,
    CUTPLANE = 130_528,
    HEAD_M4 = 130_529,
    HEAD_P0 = 130_530,
    HEAD_P4 = 130_531,
    HEAD_P8 = 130_532,
    RANGE_CCD_STD = 130_533,
    RANGE_CCD_LAT = 130_534,
}

const ALL: [Uid; 35] = [
    Uid::STEM_STD_1, Uid::STEM_STD_2, Uid::STEM_STD_3,
    Uid::STEM_STD_4, Uid::STEM_STD_5, Uid::STEM_STD_6,
    Uid::STEM_STD_7, Uid::STEM_STD_8, Uid::STEM_STD_9,
    Uid::STEM_STD_10, Uid::STEM_STD_11, Uid::STEM_STD_12,
    Uid::STEM_STD_13, Uid::STEM_STD_14, Uid::STEM_LAT_1,
    Uid::STEM_LAT_2, Uid::STEM_LAT_3, Uid::STEM_LAT_4,
    Uid::STEM_LAT_5, Uid::STEM_LAT_6, Uid::STEM_LAT_7,
    Uid::STEM_LAT_8, Uid::STEM_LAT_9, Uid::STEM_LAT_10,
    Uid::STEM_LAT_11, Uid::STEM_LAT_12, Uid::STEM_LAT_13,
    Uid::STEM_LAT_14, Uid::CUTPLANE, Uid::HEAD_M4,
    Uid::HEAD_P0, Uid::HEAD_P4, Uid::HEAD_P8,
    Uid::RANGE_CCD_STD, Uid::RANGE_CCD_LAT,
];

const NAMES: [&str; 35] = [
    "STEM_STD_1", "STEM_STD_2", "STEM_STD_3",
    "STEM_STD_4", "STEM_STD_5", "STEM_STD_6",
    "STEM_STD_7", "STEM_STD_8", "STEM_STD_9",
    "STEM_STD_10", "STEM_STD_11", "STEM_STD_12",
    "STEM_STD_13", "STEM_STD_14", "STEM_LAT_1",
    "STEM_LAT_2", "STEM_LAT_3", "STEM_LAT_4",
    "STEM_LAT_5", "STEM_LAT_6", "STEM_LAT_7",
    "STEM_LAT_8", "STEM_LAT_9", "STEM_LAT_10",
    "STEM_LAT_11", "STEM_LAT_12", "STEM_LAT_13",
    "STEM_LAT_14", "CUTPLANE", "HEAD_M4",
    "HEAD_P0", "HEAD_P4", "HEAD_P8",
    "RANGE_CCD_STD", "RANGE_CCD_LAT",
];

const RCC: [Option<&str>; 35] = [
    Some("52_34_1165_50024772_V02"), Some("52_34_1166_50028325_V03"),
    Some("52_34_0191_10092331_V01"), Some("52_34_0192_10092332_V01"),
    Some("52_34_0193_10092333_V01"), Some("52_34_0194_10092334_V01"),
    Some("52_34_0195_10092335_V01"), Some("52_34_0196_10092336_V01"),
    Some("52_34_0197_10092337_V01"), Some("52_34_0198_10092338_V01"),
    Some("52_34_0199_10092339_V01"), Some("52_34_0200_10092340_V01"),
    Some("52_34_0211_10092351_V03"), Some("52_34_0212_10092352_V03"),
    Some("52_34_1167_50028427_V02"), Some("52_34_1168_50028426_V02"),
    Some("52_34_0201_10092341_V01"), Some("52_34_0202_10092342_V01"),
    Some("52_34_0203_10092343_V01"), Some("52_34_0204_10092344_V01"),
    Some("52_34_0205_10092345_V01"), Some("52_34_0206_10092346_V01"),
    Some("52_34_0207_10092347_V01"), Some("52_34_0208_10092348_V01"),
    Some("52_34_0209_10092349_V01"), Some("52_34_0210_10092350_V01"),
    Some("52_34_0221_10092361_V03"), Some("52_34_0222_10092362_V03"),
    None, None,
    None, None,
    None, None,
    None,
];

impl Uid {
    /// Claims `raw` if it falls inside the optimys block.
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

/// Stem families of the optimys catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Group {
    Std,
    Lat,
}

pub const GROUPS: [Group; 2] = [Group::Std, Group::Lat];

const STEM_STD: [Uid; 14] = [
    Uid::STEM_STD_1, Uid::STEM_STD_2, Uid::STEM_STD_3,
    Uid::STEM_STD_4, Uid::STEM_STD_5, Uid::STEM_STD_6,
    Uid::STEM_STD_7, Uid::STEM_STD_8, Uid::STEM_STD_9,
    Uid::STEM_STD_10, Uid::STEM_STD_11, Uid::STEM_STD_12,
    Uid::STEM_STD_13, Uid::STEM_STD_14,
];

const STEM_LAT: [Uid; 14] = [
    Uid::STEM_LAT_1, Uid::STEM_LAT_2, Uid::STEM_LAT_3,
    Uid::STEM_LAT_4, Uid::STEM_LAT_5, Uid::STEM_LAT_6,
    Uid::STEM_LAT_7, Uid::STEM_LAT_8, Uid::STEM_LAT_9,
    Uid::STEM_LAT_10, Uid::STEM_LAT_11, Uid::STEM_LAT_12,
    Uid::STEM_LAT_13, Uid::STEM_LAT_14,
];

const LABELS_STD: [&str; 14] = [
    "STD XS", "STD 0", "STD 1", "STD 2", "STD 3",
    "STD 4", "STD 5", "STD 6", "STD 7", "STD 8",
    "STD 9", "STD 10", "STD 11", "STD 12",
];

const LABELS_LAT: [&str; 14] = [
    "LAT XS", "LAT 0", "LAT 1", "LAT 2", "LAT 3",
    "LAT 4", "LAT 5", "LAT 6", "LAT 7", "LAT 8",
    "LAT 9", "LAT 10", "LAT 11", "LAT 12",
];

impl Group {
    pub const fn uids(self) -> &'static [Uid] {
        match self {
            Group::Std => &STEM_STD,
            Group::Lat => &STEM_LAT,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Std => "STD",
            Group::Lat => "LAT",
        }
    }

    /// Range marker UID of this family's CCD span.
    pub const fn range_uid(self) -> Uid {
        match self {
            Group::Std => Uid::RANGE_CCD_STD,
            Group::Lat => Uid::RANGE_CCD_LAT,
        }
    }

    const fn head_top_table(self) -> &'static [f64] {
        match self {
            Group::Std => &HEAD_TOP_STD,
            Group::Lat => &HEAD_TOP_LAT,
        }
    }

    /// X translation of the family's axis before the frame rotation.
    const fn translation_x(self) -> f64 {
        match self {
            Group::Std => -12.5,
            Group::Lat => -8.5,
        }
    }
}

const STATS: [RangeStats<Group>; 2] = [
    RangeStats {
        group: Group::Std,
        catalog_index_min: 0,
        catalog_index_max: 13,
        description: "Standard CCD",
        size_min: 0,
        size_max: 13,
    },
    RangeStats {
        group: Group::Lat,
        catalog_index_min: 14,
        catalog_index_max: 27,
        description: "Lateralized CCD",
        size_min: 0,
        size_max: 13,
    },
];

pub const fn stats_of(group: Group) -> &'static RangeStats<Group> {
    match group {
        Group::Std => &STATS[0],
        Group::Lat => &STATS[1],
    }
}

const HEAD_UIDS: [Uid; 4] = [Uid::HEAD_M4, Uid::HEAD_P0, Uid::HEAD_P4, Uid::HEAD_P8];
const RANGE_UIDS: [Uid; 2] = [Uid::RANGE_CCD_STD, Uid::RANGE_CCD_LAT];

const HEAD_TOP_STD: [f64; 14] = [
    27.0, 28.05, 29.1, 30.15, 31.2, 32.25,
    33.9, 35.05, 36.2, 38.25, 39.5, 40.75,
    42.0, 43.25,
];

const HEAD_TOP_LAT: [f64; 14] = [
    31.0, 32.05, 33.1, 34.15, 35.2, 36.25,
    37.9, 39.05, 40.2, 42.25, 43.5, 44.75,
    46.0, 47.25,
];

const _: () = {
    assert!(HEAD_TOP_STD.len() == STEM_STD.len());
    assert!(HEAD_TOP_LAT.len() == STEM_LAT.len());
    assert!(LABELS_STD.len() == STEM_STD.len());
    assert!(LABELS_LAT.len() == STEM_LAT.len());
};

/// The local frame is rotated -45 deg about Z.
fn rotate_z(x: f64, y: f64, z: f64) -> Pnt {
    let angle = (-45.0_f64).to_radians();
    let (s, c) = angle.sin_cos();
    Pnt::new(x * c - y * s, x * s + y * c, z)
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

/// Every optimys stem ships with a collar.
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
        Group::Lat => &LABELS_LAT,
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

fn head_top(group: Group, offset: usize) -> f64 {
    group.head_top_table()[offset]
}

pub fn neck_origin(uid: Uid) -> Result<Pnt> {
    let (group, _) = require_stem(uid)?;
    Ok(rotate_z(group.translation_x(), 0.0, 0.0))
}

pub fn head_point(uid: Uid) -> Result<Pnt> {
    let (group, offset) = require_stem(uid)?;
    Ok(rotate_z(group.translation_x(), head_top(group, offset), 0.0))
}

/// The head taper center doubles as the frame reference in this line.
pub fn reference_point(uid: Uid) -> Result<Pnt> {
    head_point(uid)
}

/// CCD shaft angle in degrees. Uniform across the line.
pub fn shaft_angle(uid: Uid) -> Result<f64> {
    require_stem(uid)?;
    Ok(45.0)
}

/// Translation from `source`'s frame to `target`'s, taken between the
/// reference points.
pub fn shift_vector(source: Uid, target: Uid) -> Result<Vec3> {
    let from = reference_point(source)?;
    let to = reference_point(target)?;
    Ok(from.subtracted(&to))
}

/// Nearest catalog equivalent: both families share a size ladder, so this
/// is a plain clamp into the target span.
pub fn similar_stem(uid: Uid, target_group: Group) -> Result<Uid> {
    let (_, source_offset) = require_stem(uid)?;
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
        Uid::HEAD_M4 => -8.0,
        Uid::HEAD_P0 => -4.0,
        Uid::HEAD_P8 => 4.0,
        _ => 0.0,
    }
}

/// Attachment point of `head` mounted on `stem`, rebuilt from the
/// parametric frame rather than offset along a measured axis.
pub fn head_to_stem_offset(head: Uid, stem: Uid) -> Result<Pnt> {
    if !is_head(head) {
        return Err(CatalogError::NotAHead(head.raw()));
    }
    let (group, offset) = require_stem(stem)?;
    let top = head_top(group, offset) + head_offset_mm(head);
    Ok(rotate_z(group.translation_x(), top, 0.0))
}

/// Resection plane: origin at the neck origin, normal the Y axis carried
/// through the -45 deg frame rotation.
pub fn cut_plane(uid: Uid) -> Result<CutPlane> {
    let origin = neck_origin(uid)?;
    let angle = 45.0_f64.to_radians();
    let normal = Vec3::new(angle.sin(), angle.cos(), 0.0).normalized();
    Ok(CutPlane { origin, normal })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_bounds() {
        assert_eq!(Uid::from_raw(130_500), Some(Uid::STEM_STD_1));
        assert_eq!(Uid::from_raw(130_499), None);
        assert_eq!(Uid::from_raw(130_534), Some(Uid::RANGE_CCD_LAT));
        assert_eq!(Uid::from_raw(130_535), None);
    }

    #[test]
    fn test_neck_origin_is_rotated_axis_translation() {
        let origin = neck_origin(Uid::STEM_STD_1).unwrap();
        let angle = (-45.0_f64).to_radians();
        assert!((origin.x - (-12.5 * angle.cos())).abs() < 1e-12);
        assert!((origin.y - (-12.5 * angle.sin())).abs() < 1e-12);
        assert_eq!(origin.z, 0.0);
    }

    #[test]
    fn test_head_point_uses_per_size_height() {
        let xs = head_point(Uid::STEM_STD_1).unwrap();
        let largest = head_point(Uid::STEM_STD_14).unwrap();
        let height = |p: Pnt| {
            let origin = neck_origin(Uid::STEM_STD_1).unwrap();
            p.subtracted(&origin).magnitude()
        };
        assert!((height(xs) - 27.0).abs() < 1e-9);
        assert!((height(largest) - 43.25).abs() < 1e-9);
    }

    #[test]
    fn test_head_p4_is_neutral() {
        let stem = Uid::STEM_LAT_4;
        assert_eq!(
            head_to_stem_offset(Uid::HEAD_P4, stem).unwrap(),
            head_point(stem).unwrap()
        );
    }

    #[test]
    fn test_head_p0_drops_four_millimeters() {
        let stem = Uid::STEM_STD_6;
        let mounted = head_to_stem_offset(Uid::HEAD_P0, stem).unwrap();
        let base = head_point(stem).unwrap();
        assert!((base.subtracted(&mounted).magnitude() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_similar_is_plain_clamp() {
        assert_eq!(
            similar_stem(Uid::STEM_STD_6, Group::Lat).unwrap(),
            Uid::STEM_LAT_6
        );
        assert_eq!(
            similar_stem(Uid::STEM_LAT_1, Group::Std).unwrap(),
            Uid::STEM_STD_1
        );
    }

    #[test]
    fn test_all_stems_are_collared() {
        for uid in iter_stems(None) {
            assert!(has_collar(uid));
        }
        assert!(!has_collar(Uid::CUTPLANE));
    }

    #[test]
    fn test_cut_plane_normal() {
        let plane = cut_plane(Uid::STEM_STD_1).unwrap();
        let angle = 45.0_f64.to_radians();
        assert!((plane.normal.x - angle.sin()).abs() < 1e-12);
        assert!((plane.normal.y - angle.cos()).abs() < 1e-12);
        assert_eq!(plane.normal.z, 0.0);
        assert_eq!(plane.origin, neck_origin(Uid::STEM_STD_1).unwrap());
    }

    #[test]
    fn test_range_uid_per_group() {
        assert_eq!(Group::Lat.range_uid(), Uid::RANGE_CCD_LAT);
        assert!(is_range(Uid::RANGE_CCD_LAT));
        assert!(!is_stem(Uid::RANGE_CCD_LAT));
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(variant_of(Uid::STEM_STD_1).unwrap().label, "STD XS");
        assert_eq!(variant_of(Uid::STEM_STD_2).unwrap().label, "STD 0");
        assert_eq!(variant_of(Uid::STEM_LAT_14).unwrap().label, "LAT 12");
    }
}
