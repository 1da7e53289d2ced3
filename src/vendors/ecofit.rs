//! Implantcast ECOFIT catalog.
//!
//! Tables transcribed from the legacy `implancast_ecofit_scheme.h` device
//! scheme. Five families at three neck angles; the neck origin sits at
//! the frame origin and the measured reference and head points are shared
//! per family rather than per size. Sizes are labelled by taper diameter,
//! decimal comma included, as printed in the vendor catalog.

use crate::math::{CutPlane, Pnt, Vec3};
use crate::range::RangeStats;
use crate::variant::StemVariant;
use crate::{CatalogError, Result};

pub const COMPANY_NAME: &str = "ICAST";
pub const PRODUCT_NAME: &str = "ECOFIT STEMLESS";
/// First UID of the ECOFIT block (company range 310_000, product offset
/// 750, first scheme constant at +90).
pub const RANGE_START: i32 = 310_840;

/// Scheme constants of the ECOFIT product line, one contiguous ascending
/// UID block with explicit discriminants.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(i32)]
pub enum Uid {
    STEM_STD_133_0 = 310_840,
    STEM_STD_133_1 = 310_841,
    STEM_STD_133_2 = 310_842,
    STEM_STD_133_3 = 310_843,
    STEM_STD_133_4 = 310_844,
    STEM_STD_133_5 = 310_845,
    STEM_STD_133_6 = 310_846,
    STEM_STD_133_7 = 310_847,
    STEM_STD_133_8 = 310_848,
    STEM_STD_133_9 = 310_849,
    STEM_STD_133_10 = 310_850,
    STEM_STD_133_11 = 310_851,
    STEM_LAT_133_0 = 310_852,
    STEM_LAT_133_1 = 310_853,
    STEM_LAT_133_2 = 310_854,
    STEM_LAT_133_3 = 310_855,
    STEM_LAT_133_4 = 310_856,
    STEM_LAT_133_5 = 310_857,
    STEM_LAT_133_6 = 310_858,
    STEM_LAT_133_7 = 310_859,
    STEM_LAT_133_8 = 310_860,
    STEM_LAT_133_9 = 310_861,
    STEM_LAT_133_10 = 310_862,
    STEM_LAT_133_11 = 310_863,
    STEM_STD_138_0 = 310_864,
    STEM_STD_138_1 = 310_865,
    STEM_STD_138_2 = 310_866,
    STEM_STD_138_3 = 310_867,
    STEM_STD_138_4 = 310_868,
    STEM_STD_138_5 = 310_869,
    STEM_STD_138_6 = 310_870,
    STEM_STD_138_7 = 310_871,
    STEM_STD_138_8 = 310_872,
    STEM_STD_138_9 = 310_873,
    STEM_LAT_138_0 = 310_874,
    STEM_LAT_138_1 = 310_875,
    STEM_LAT_138_2 = 310_876,
    STEM_LAT_138_3 = 310_877,
    STEM_LAT_138_4 = 310_878,
    STEM_LAT_138_5 = 310_879,
    STEM_LAT_138_6 = 310_880,
    STEM_LAT_138_7 = 310_881,
    STEM_LAT_138_8 = 310_882,
    STEM_LAT_138_9 = 310_883,
    STEM_CV_0 = 310_884,
    STEM_CV_1 = 310_885,
    STEM_CV_2 = 310_886,
    STEM_CV_3 = 310_887,
    STEM_CV_4 = 310_888,
    STEM_CV_5 = 310_889,
    STEM_CV_6 = 310_890,
    STEM_CV_7 = 310_891,
    STEM_CV_8 = 310_892,
    STEM_CV_9 = 310_893,
    CUTPLANE = 310_894,
    HEAD_M4 = 310_895,
    HEAD_P0 = 310_896,
    HEAD_P4 = 310_897,
    HEAD_P8 = 310_898,
    RANGE_CCD_STD_133 = 310_899,
    RANGE_CCD_LAT_133 = 310_900,
    RANGE_CCD_STD_138 = 310_901,
    RANGE_CCD_LAT_138 = 310_902,
    RANGE_CCD_CV = 310_903,
}

const ALL: [Uid; 64] = [
    Uid::STEM_STD_133_0, Uid::STEM_STD_133_1, Uid::STEM_STD_133_2,
    Uid::STEM_STD_133_3, Uid::STEM_STD_133_4, Uid::STEM_STD_133_5,
    Uid::STEM_STD_133_6, Uid::STEM_STD_133_7, Uid::STEM_STD_133_8,
    Uid::STEM_STD_133_9, Uid::STEM_STD_133_10, Uid::STEM_STD_133_11,
    Uid::STEM_LAT_133_0, Uid::STEM_LAT_133_1, Uid::STEM_LAT_133_2,
    Uid::STEM_LAT_133_3, Uid::STEM_LAT_133_4, Uid::STEM_LAT_133_5,
    Uid::STEM_LAT_133_6, Uid::STEM_LAT_133_7, Uid::STEM_LAT_133_8,
    Uid::STEM_LAT_133_9, Uid::STEM_LAT_133_10, Uid::STEM_LAT_133_11,
    Uid::STEM_STD_138_0, Uid::STEM_STD_138_1, Uid::STEM_STD_138_2,
    Uid::STEM_STD_138_3, Uid::STEM_STD_138_4, Uid::STEM_STD_138_5,
    Uid::STEM_STD_138_6, Uid::STEM_STD_138_7, Uid::STEM_STD_138_8,
    Uid::STEM_STD_138_9, Uid::STEM_LAT_138_0, Uid::STEM_LAT_138_1,
    Uid::STEM_LAT_138_2, Uid::STEM_LAT_138_3, Uid::STEM_LAT_138_4,
    Uid::STEM_LAT_138_5, Uid::STEM_LAT_138_6, Uid::STEM_LAT_138_7,
    Uid::STEM_LAT_138_8, Uid::STEM_LAT_138_9, Uid::STEM_CV_0,
    Uid::STEM_CV_1, Uid::STEM_CV_2, Uid::STEM_CV_3,
    Uid::STEM_CV_4, Uid::STEM_CV_5, Uid::STEM_CV_6,
    Uid::STEM_CV_7, Uid::STEM_CV_8, Uid::STEM_CV_9,
    Uid::CUTPLANE, Uid::HEAD_M4, Uid::HEAD_P0,
    Uid::HEAD_P4, Uid::HEAD_P8, Uid::RANGE_CCD_STD_133,
    Uid::RANGE_CCD_LAT_133, Uid::RANGE_CCD_STD_138, Uid::RANGE_CCD_LAT_138,
    Uid::RANGE_CCD_CV,
];

const NAMES: [&str; 64] = [
    "STEM_STD_133_0", "STEM_STD_133_1", "STEM_STD_133_2",
    "STEM_STD_133_3", "STEM_STD_133_4", "STEM_STD_133_5",
    "STEM_STD_133_6", "STEM_STD_133_7", "STEM_STD_133_8",
    "STEM_STD_133_9", "STEM_STD_133_10", "STEM_STD_133_11",
    "STEM_LAT_133_0", "STEM_LAT_133_1", "STEM_LAT_133_2",
    "STEM_LAT_133_3", "STEM_LAT_133_4", "STEM_LAT_133_5",
    "STEM_LAT_133_6", "STEM_LAT_133_7", "STEM_LAT_133_8",
    "STEM_LAT_133_9", "STEM_LAT_133_10", "STEM_LAT_133_11",
    "STEM_STD_138_0", "STEM_STD_138_1", "STEM_STD_138_2",
    "STEM_STD_138_3", "STEM_STD_138_4", "STEM_STD_138_5",
    "STEM_STD_138_6", "STEM_STD_138_7", "STEM_STD_138_8",
    "STEM_STD_138_9", "STEM_LAT_138_0", "STEM_LAT_138_1",
    "STEM_LAT_138_2", "STEM_LAT_138_3", "STEM_LAT_138_4",
    "STEM_LAT_138_5", "STEM_LAT_138_6", "STEM_LAT_138_7",
    "STEM_LAT_138_8", "STEM_LAT_138_9", "STEM_CV_0",
    "STEM_CV_1", "STEM_CV_2", "STEM_CV_3",
    "STEM_CV_4", "STEM_CV_5", "STEM_CV_6",
    "STEM_CV_7", "STEM_CV_8", "STEM_CV_9",
    "CUTPLANE", "HEAD_M4", "HEAD_P0",
    "HEAD_P4", "HEAD_P8", "RANGE_CCD_STD_133",
    "RANGE_CCD_LAT_133", "RANGE_CCD_STD_138", "RANGE_CCD_LAT_138",
    "RANGE_CCD_CV",
];

const RCC: [Option<&str>; 64] = [
    Some("30363062_133"), Some("30363075_133"),
    Some("30363087_133"), Some("30363100_133"),
    Some("30363112_133"), Some("30363125_133"),
    Some("30363137_133"), Some("30363150_133"),
    Some("30363162_133"), Some("30363175_133"),
    Some("30363187_133"), Some("30363200_133"),
    Some("30364062_133Lat"), Some("30364075_133Lat"),
    Some("30364087_133Lat"), Some("30364100_133Lat"),
    Some("30364112_133Lat"), Some("30364125_133Lat"),
    Some("30364137_133Lat"), Some("30364150_133Lat"),
    Some("30364162_133Lat"), Some("30364175_133Lat"),
    Some("30364187_133Lat"), Some("30364200_133Lat"),
    Some("30383062_138"), Some("30383075_138"),
    Some("30383087_138"), Some("30383100_138"),
    Some("30383112_138"), Some("30383125_138"),
    Some("30383137_138"), Some("30383150_138"),
    Some("30383175_138"), Some("30383200_138"),
    Some("30384062_138Lat"), Some("30384075_138Lat"),
    Some("30384087_138Lat"), Some("30384100_138Lat"),
    Some("30384112_138Lat"), Some("30384125_138Lat"),
    Some("30384137_138Lat"), Some("30384150_138Lat"),
    Some("30384175_138Lat"), Some("30384200_138Lat"),
    Some("30382062_CV"), Some("30382075_CV"),
    Some("30382087_CV"), Some("30382100_CV"),
    Some("30382112_CV"), Some("30382125_CV"),
    Some("30382137_CV"), Some("30382150_CV"),
    Some("30382175_CV"), Some("30382200_CV"),
    None, None,
    None, None,
    None, None,
    None, None,
    None, None,
];

impl Uid {
    /// Claims `raw` if it falls inside the ECOFIT block.
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

/// Stem families of the ECOFIT catalog, named by CCD angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Group {
    Std133,
    Lat133,
    Std138,
    Lat138,
    /// Curved varus family at 123 deg.
    Cv,
}

pub const GROUPS: [Group; 5] = [
    Group::Std133,
    Group::Lat133,
    Group::Std138,
    Group::Lat138,
    Group::Cv,
];

const STEM_STD_133: [Uid; 12] = [
    Uid::STEM_STD_133_0, Uid::STEM_STD_133_1, Uid::STEM_STD_133_2,
    Uid::STEM_STD_133_3, Uid::STEM_STD_133_4, Uid::STEM_STD_133_5,
    Uid::STEM_STD_133_6, Uid::STEM_STD_133_7, Uid::STEM_STD_133_8,
    Uid::STEM_STD_133_9, Uid::STEM_STD_133_10, Uid::STEM_STD_133_11,
];

const STEM_LAT_133: [Uid; 12] = [
    Uid::STEM_LAT_133_0, Uid::STEM_LAT_133_1, Uid::STEM_LAT_133_2,
    Uid::STEM_LAT_133_3, Uid::STEM_LAT_133_4, Uid::STEM_LAT_133_5,
    Uid::STEM_LAT_133_6, Uid::STEM_LAT_133_7, Uid::STEM_LAT_133_8,
    Uid::STEM_LAT_133_9, Uid::STEM_LAT_133_10, Uid::STEM_LAT_133_11,
];

const STEM_STD_138: [Uid; 10] = [
    Uid::STEM_STD_138_0, Uid::STEM_STD_138_1, Uid::STEM_STD_138_2,
    Uid::STEM_STD_138_3, Uid::STEM_STD_138_4, Uid::STEM_STD_138_5,
    Uid::STEM_STD_138_6, Uid::STEM_STD_138_7, Uid::STEM_STD_138_8,
    Uid::STEM_STD_138_9,
];

const STEM_LAT_138: [Uid; 10] = [
    Uid::STEM_LAT_138_0, Uid::STEM_LAT_138_1, Uid::STEM_LAT_138_2,
    Uid::STEM_LAT_138_3, Uid::STEM_LAT_138_4, Uid::STEM_LAT_138_5,
    Uid::STEM_LAT_138_6, Uid::STEM_LAT_138_7, Uid::STEM_LAT_138_8,
    Uid::STEM_LAT_138_9,
];

const STEM_CV: [Uid; 10] = [
    Uid::STEM_CV_0, Uid::STEM_CV_1, Uid::STEM_CV_2,
    Uid::STEM_CV_3, Uid::STEM_CV_4, Uid::STEM_CV_5,
    Uid::STEM_CV_6, Uid::STEM_CV_7, Uid::STEM_CV_8,
    Uid::STEM_CV_9,
];

const LABELS_STD_133: [&str; 12] = [
    "133 STD 6,25", "133 STD 7,5", "133 STD 8,75",
    "133 STD 10", "133 STD 11,25", "133 STD 12,5",
    "133 STD 13,75", "133 STD 15", "133 STD 16,25",
    "133 STD 17,5", "133 STD 18,75", "133 STD 20",
];

const LABELS_LAT_133: [&str; 12] = [
    "133 LAT 6,25", "133 LAT 7,5", "133 LAT 8,75",
    "133 LAT 10", "133 LAT 11,25", "133 LAT 12,5",
    "133 LAT 13,75", "133 LAT 15", "133 LAT 16,25",
    "133 LAT 17.5", "133 LAT 18,75", "133 LAT 20",
];

const LABELS_STD_138: [&str; 10] = [
    "138 STD 6,25", "138 STD 7,5", "138 STD 8,75",
    "138 STD 10", "138 STD 11,25", "138 STD 12,5",
    "138 STD 13,75", "138 STD 15", "138 STD 17,5",
    "138 STD 20",
];

const LABELS_LAT_138: [&str; 10] = [
    "138 LAT 6,25", "138 LAT 7,5", "138 LAT 8,75",
    "138 LAT 10", "138 LAT 11,25", "138 LAT 12,5",
    "138 LAT 13,75", "138 LAT 15", "138 LAT 17,5",
    "138 LAT 20",
];

const LABELS_CV: [&str; 10] = [
    "123 STD 6,25", "123 STD 7,5", "123 STD 8,75",
    "123 STD 10", "123 STD 11,25", "123 STD 12,5",
    "123 STD 13,75", "123 STD 15", "123 STD 17,5",
    "123 STD 20",
];

impl Group {
    pub const fn uids(self) -> &'static [Uid] {
        match self {
            Group::Std133 => &STEM_STD_133,
            Group::Lat133 => &STEM_LAT_133,
            Group::Std138 => &STEM_STD_138,
            Group::Lat138 => &STEM_LAT_138,
            Group::Cv => &STEM_CV,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Std133 => "STD_133",
            Group::Lat133 => "LAT_133",
            Group::Std138 => "STD_138",
            Group::Lat138 => "LAT_138",
            Group::Cv => "CV",
        }
    }

    const fn labels(self) -> &'static [&'static str] {
        match self {
            Group::Std133 => &LABELS_STD_133,
            Group::Lat133 => &LABELS_LAT_133,
            Group::Std138 => &LABELS_STD_138,
            Group::Lat138 => &LABELS_LAT_138,
            Group::Cv => &LABELS_CV,
        }
    }

    /// Range marker UID of this family's CCD span.
    pub const fn range_uid(self) -> Uid {
        match self {
            Group::Std133 => Uid::RANGE_CCD_STD_133,
            Group::Lat133 => Uid::RANGE_CCD_LAT_133,
            Group::Std138 => Uid::RANGE_CCD_STD_138,
            Group::Lat138 => Uid::RANGE_CCD_LAT_138,
            Group::Cv => Uid::RANGE_CCD_CV,
        }
    }

    /// The 133 deg families run a longer taper ladder than the others.
    const fn is_133(self) -> bool {
        matches!(self, Group::Std133 | Group::Lat133)
    }
}

const STATS: [RangeStats<Group>; 5] = [
    RangeStats {
        group: Group::Std133,
        catalog_index_min: 0,
        catalog_index_max: 11,
        description: "133 STD",
        size_min: 0,
        size_max: 11,
    },
    RangeStats {
        group: Group::Lat133,
        catalog_index_min: 12,
        catalog_index_max: 23,
        description: "133 LAT",
        size_min: 0,
        size_max: 11,
    },
    RangeStats {
        group: Group::Std138,
        catalog_index_min: 24,
        catalog_index_max: 33,
        description: "138 STD",
        size_min: 0,
        size_max: 9,
    },
    RangeStats {
        group: Group::Lat138,
        catalog_index_min: 34,
        catalog_index_max: 43,
        description: "138 LAT",
        size_min: 0,
        size_max: 9,
    },
    RangeStats {
        group: Group::Cv,
        catalog_index_min: 44,
        catalog_index_max: 53,
        description: "123 STD",
        size_min: 0,
        size_max: 9,
    },
];

pub const fn stats_of(group: Group) -> &'static RangeStats<Group> {
    match group {
        Group::Std133 => &STATS[0],
        Group::Lat133 => &STATS[1],
        Group::Std138 => &STATS[2],
        Group::Lat138 => &STATS[3],
        Group::Cv => &STATS[4],
    }
}

const HEAD_UIDS: [Uid; 4] = [Uid::HEAD_M4, Uid::HEAD_P0, Uid::HEAD_P4, Uid::HEAD_P8];

const RANGE_UIDS: [Uid; 5] = [
    Uid::RANGE_CCD_STD_133,
    Uid::RANGE_CCD_LAT_133,
    Uid::RANGE_CCD_STD_138,
    Uid::RANGE_CCD_LAT_138,
    Uid::RANGE_CCD_CV,
];

// One measured point per family; all sizes of a family share the same
// neck geometry in this line.
const fn reference_point_of(group: Group) -> Pnt {
    match group {
        Group::Std133 => Pnt::new(10.69, -9.21, 0.0),
        Group::Std138 => Pnt::new(10.5, -9.45, 0.0),
        Group::Cv => Pnt::new(10.27, -9.93, 0.0),
        Group::Lat133 => Pnt::new(6.55, -5.9, 0.0),
        Group::Lat138 => Pnt::new(6.54, -5.89, 0.0),
    }
}

const fn head_point_of(group: Group) -> Pnt {
    match group {
        Group::Std133 => Pnt::new(25.09, 23.39, 0.0),
        Group::Std138 => Pnt::new(23.02, 25.56, 0.0),
        Group::Cv => Pnt::new(27.12, 17.61, 0.0),
        Group::Lat133 => Pnt::new(29.25, 27.28, 0.0),
        Group::Lat138 => Pnt::new(26.77, 29.74, 0.0),
    }
}

const _: () = {
    assert!(LABELS_STD_133.len() == STEM_STD_133.len());
    assert!(LABELS_LAT_133.len() == STEM_LAT_133.len());
    assert!(LABELS_STD_138.len() == STEM_STD_138.len());
    assert!(LABELS_LAT_138.len() == STEM_LAT_138.len());
    assert!(LABELS_CV.len() == STEM_CV.len());
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
    let translated = stats_of(group).clamp(offset as i32 + if forward { 1 } else { -1 });
    Ok(group.uids()[translated as usize])
}

/// The neck origin coincides with the frame origin for every ECOFIT stem.
pub fn neck_origin(uid: Uid) -> Result<Pnt> {
    require_stem(uid)?;
    Ok(Pnt::ORIGIN)
}

pub fn reference_point(uid: Uid) -> Result<Pnt> {
    let (group, _) = require_stem(uid)?;
    Ok(reference_point_of(group))
}

pub fn head_point(uid: Uid) -> Result<Pnt> {
    let (group, _) = require_stem(uid)?;
    Ok(head_point_of(group))
}

/// Translation from `source`'s frame to `target`'s, taken between the
/// family reference points.
pub fn shift_vector(source: Uid, target: Uid) -> Result<Vec3> {
    let from = reference_point(source)?;
    let to = reference_point(target)?;
    Ok(from.subtracted(&to))
}

/// Nearest catalog equivalent of `uid` inside `target_group`.
///
/// The 133 deg ladder inserts two intermediate tapers above size 8, so
/// crossing that boundary remaps the top offsets before clamping.
pub fn similar_stem(uid: Uid, target_group: Group) -> Result<Uid> {
    let (source_group, source_offset) = require_stem(uid)?;
    let source_offset = source_offset as i32;

    let mut translated = source_offset;
    if !source_group.is_133() && target_group.is_133() {
        if source_offset == 8 {
            translated = 9;
        } else if source_offset == 9 {
            translated = 11;
        }
    } else if source_group.is_133() && !target_group.is_133() {
        if source_offset == 9 {
            translated = 8;
        } else if source_offset == 11 {
            translated = 9;
        }
    }
    let translated = stats_of(target_group).clamp(translated);

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
        Uid::HEAD_M4 => -3.53,
        Uid::HEAD_P4 => 3.53,
        Uid::HEAD_P8 => 7.1,
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

/// Resection plane: origin at the frame origin, normal tilted 42 deg from
/// the Y axis toward X.
pub fn cut_plane(uid: Uid) -> Result<CutPlane> {
    let origin = neck_origin(uid)?;
    let angle = 42.0_f64.to_radians();
    let normal = Vec3::new(angle.sin(), angle.cos(), 0.0);
    Ok(CutPlane { origin, normal })
}
