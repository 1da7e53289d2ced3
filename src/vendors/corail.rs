//! Johnson & Johnson CORAIL catalog.
//!
//! Tables transcribed from the legacy `johnson_corail_scheme.h` device
//! scheme. The catalog spans nine families; standard and high-offset
//! families share geometry tables, the collared variant differing only in
//! the resection plane. Coordinates are millimeters in the stem local
//! frame, all measured points lying in the XZ plane.

use crate::math::{CutPlane, Pnt, Vec3};
use crate::range::RangeStats;
use crate::variant::StemVariant;
use crate::{CatalogError, Result};

pub const COMPANY_NAME: &str = "JNJ";
pub const PRODUCT_NAME: &str = "CORAIL";
/// First UID of the CORAIL block (company range 160_000, first scheme
/// constant at +90).
pub const RANGE_START: i32 = 160_090;

/// Scheme constants of the CORAIL product line, one contiguous ascending
/// UID block with explicit discriminants.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(i32)]
pub enum Uid {
    STEM_KHO_A_135_0 = 160_090,
    STEM_KHO_A_135_1 = 160_091,
    STEM_KHO_A_135_2 = 160_092,
    STEM_KHO_A_135_3 = 160_093,
    STEM_KHO_A_135_4 = 160_094,
    STEM_KHO_A_135_5 = 160_095,
    STEM_KHO_A_135_6 = 160_096,
    STEM_KHO_A_135_7 = 160_097,
    STEM_KHO_A_135_8 = 160_098,
    STEM_KHO_A_135_9 = 160_099,
    STEM_KS_STD135_0 = 160_100,
    STEM_KS_STD135_1 = 160_101,
    STEM_KS_STD135_2 = 160_102,
    STEM_KS_STD135_3 = 160_103,
    STEM_KS_STD135_4 = 160_104,
    STEM_KS_STD135_5 = 160_105,
    STEM_KS_STD135_6 = 160_106,
    STEM_KS_STD135_7 = 160_107,
    STEM_KS_STD135_8 = 160_108,
    STEM_KS_STD135_9 = 160_109,
    STEM_KS_STD135_10 = 160_110,
    STEM_KA_STD135_0 = 160_111,
    STEM_KA_STD135_1 = 160_112,
    STEM_KA_STD135_2 = 160_113,
    STEM_KA_STD135_3 = 160_114,
    STEM_KA_STD135_4 = 160_115,
    STEM_KA_STD135_5 = 160_116,
    STEM_KA_STD135_6 = 160_117,
    STEM_KA_STD135_7 = 160_118,
    STEM_KA_STD135_8 = 160_119,
    STEM_KA_STD135_9 = 160_120,
    STEM_KA_STD135_10 = 160_121,
    STEM_KHO_S_135_0 = 160_122,
    STEM_KHO_S_135_1 = 160_123,
    STEM_KHO_S_135_2 = 160_124,
    STEM_KHO_S_135_3 = 160_125,
    STEM_KHO_S_135_4 = 160_126,
    STEM_KHO_S_135_5 = 160_127,
    STEM_KHO_S_135_6 = 160_128,
    STEM_KHO_S_135_7 = 160_129,
    STEM_KHO_S_135_8 = 160_130,
    STEM_KHO_S_135_9 = 160_131,
    STEM_KLA_125_0 = 160_132,
    STEM_KLA_125_1 = 160_133,
    STEM_KLA_125_2 = 160_134,
    STEM_KLA_125_3 = 160_135,
    STEM_KLA_125_4 = 160_136,
    STEM_KLA_125_5 = 160_137,
    STEM_KLA_125_6 = 160_138,
    STEM_KLA_125_7 = 160_139,
    STEM_KLA_125_8 = 160_140,
    STEM_KLA_125_9 = 160_141,
    STEM_STD125_S_0 = 160_142,
    STEM_STD125_S_1 = 160_143,
    STEM_STD125_S_2 = 160_144,
    STEM_STD125_S_3 = 160_145,
    STEM_STD125_A_0 = 160_146,
    STEM_STD125_A_1 = 160_147,
    STEM_STD125_A_2 = 160_148,
    STEM_STD125_A_3 = 160_149,
    STEM_STD125_A_4 = 160_150,
    STEM_STD125_A_5 = 160_151,
    STEM_STD125_A_6 = 160_152,
    STEM_STD125_A_7 = 160_153,
    STEM_SN_S_0 = 160_154,
    STEM_SN_S_1 = 160_155,
    STEM_SN_S_2 = 160_156,
    STEM_SN_S_3 = 160_157,
    STEM_SN_A_0 = 160_158,
    STEM_SN_A_1 = 160_159,
    STEM_SN_A_2 = 160_160,
    STEM_SN_A_3 = 160_161,
    STEM_SN_A_4 = 160_162,
    STEM_SN_A_5 = 160_163,
    STEM_SN_A_6 = 160_164,
    STEM_SN_A_7 = 160_165,
    CUTPLANE = 160_166,
    HEAD_M4 = 160_167,
    HEAD_P0 = 160_168,
    HEAD_P4 = 160_169,
    HEAD_P8 = 160_170,
    RANGE_CCD_KS_STD135 = 160_171,
    RANGE_CCD_KA_STD135 = 160_172,
    RANGE_CCD_KHO_S_135 = 160_173,
    RANGE_CCD_KHO_A_135 = 160_174,
    RANGE_CCD_KLA_125 = 160_175,
    RANGE_CCD_STD125_S = 160_176,
    RANGE_CCD_STD125_A = 160_177,
    RANGE_CCD_SN_S = 160_178,
    RANGE_CCD_SN_A = 160_179,
}

const ALL: [Uid; 90] = [
    Uid::STEM_KHO_A_135_0, Uid::STEM_KHO_A_135_1, Uid::STEM_KHO_A_135_2,
    Uid::STEM_KHO_A_135_3, Uid::STEM_KHO_A_135_4, Uid::STEM_KHO_A_135_5,
    Uid::STEM_KHO_A_135_6, Uid::STEM_KHO_A_135_7, Uid::STEM_KHO_A_135_8,
    Uid::STEM_KHO_A_135_9, Uid::STEM_KS_STD135_0, Uid::STEM_KS_STD135_1,
    Uid::STEM_KS_STD135_2, Uid::STEM_KS_STD135_3, Uid::STEM_KS_STD135_4,
    Uid::STEM_KS_STD135_5, Uid::STEM_KS_STD135_6, Uid::STEM_KS_STD135_7,
    Uid::STEM_KS_STD135_8, Uid::STEM_KS_STD135_9, Uid::STEM_KS_STD135_10,
    Uid::STEM_KA_STD135_0, Uid::STEM_KA_STD135_1, Uid::STEM_KA_STD135_2,
    Uid::STEM_KA_STD135_3, Uid::STEM_KA_STD135_4, Uid::STEM_KA_STD135_5,
    Uid::STEM_KA_STD135_6, Uid::STEM_KA_STD135_7, Uid::STEM_KA_STD135_8,
    Uid::STEM_KA_STD135_9, Uid::STEM_KA_STD135_10, Uid::STEM_KHO_S_135_0,
    Uid::STEM_KHO_S_135_1, Uid::STEM_KHO_S_135_2, Uid::STEM_KHO_S_135_3,
    Uid::STEM_KHO_S_135_4, Uid::STEM_KHO_S_135_5, Uid::STEM_KHO_S_135_6,
    Uid::STEM_KHO_S_135_7, Uid::STEM_KHO_S_135_8, Uid::STEM_KHO_S_135_9,
    Uid::STEM_KLA_125_0, Uid::STEM_KLA_125_1, Uid::STEM_KLA_125_2,
    Uid::STEM_KLA_125_3, Uid::STEM_KLA_125_4, Uid::STEM_KLA_125_5,
    Uid::STEM_KLA_125_6, Uid::STEM_KLA_125_7, Uid::STEM_KLA_125_8,
    Uid::STEM_KLA_125_9, Uid::STEM_STD125_S_0, Uid::STEM_STD125_S_1,
    Uid::STEM_STD125_S_2, Uid::STEM_STD125_S_3, Uid::STEM_STD125_A_0,
    Uid::STEM_STD125_A_1, Uid::STEM_STD125_A_2, Uid::STEM_STD125_A_3,
    Uid::STEM_STD125_A_4, Uid::STEM_STD125_A_5, Uid::STEM_STD125_A_6,
    Uid::STEM_STD125_A_7, Uid::STEM_SN_S_0, Uid::STEM_SN_S_1,
    Uid::STEM_SN_S_2, Uid::STEM_SN_S_3, Uid::STEM_SN_A_0,
    Uid::STEM_SN_A_1, Uid::STEM_SN_A_2, Uid::STEM_SN_A_3,
    Uid::STEM_SN_A_4, Uid::STEM_SN_A_5, Uid::STEM_SN_A_6,
    Uid::STEM_SN_A_7, Uid::CUTPLANE, Uid::HEAD_M4,
    Uid::HEAD_P0, Uid::HEAD_P4, Uid::HEAD_P8,
    Uid::RANGE_CCD_KS_STD135, Uid::RANGE_CCD_KA_STD135, Uid::RANGE_CCD_KHO_S_135,
    Uid::RANGE_CCD_KHO_A_135, Uid::RANGE_CCD_KLA_125, Uid::RANGE_CCD_STD125_S,
    Uid::RANGE_CCD_STD125_A, Uid::RANGE_CCD_SN_S, Uid::RANGE_CCD_SN_A,
];

const NAMES: [&str; 90] = [
    "STEM_KHO_A_135_0", "STEM_KHO_A_135_1", "STEM_KHO_A_135_2",
    "STEM_KHO_A_135_3", "STEM_KHO_A_135_4", "STEM_KHO_A_135_5",
    "STEM_KHO_A_135_6", "STEM_KHO_A_135_7", "STEM_KHO_A_135_8",
    "STEM_KHO_A_135_9", "STEM_KS_STD135_0", "STEM_KS_STD135_1",
    "STEM_KS_STD135_2", "STEM_KS_STD135_3", "STEM_KS_STD135_4",
    "STEM_KS_STD135_5", "STEM_KS_STD135_6", "STEM_KS_STD135_7",
    "STEM_KS_STD135_8", "STEM_KS_STD135_9", "STEM_KS_STD135_10",
    "STEM_KA_STD135_0", "STEM_KA_STD135_1", "STEM_KA_STD135_2",
    "STEM_KA_STD135_3", "STEM_KA_STD135_4", "STEM_KA_STD135_5",
    "STEM_KA_STD135_6", "STEM_KA_STD135_7", "STEM_KA_STD135_8",
    "STEM_KA_STD135_9", "STEM_KA_STD135_10", "STEM_KHO_S_135_0",
    "STEM_KHO_S_135_1", "STEM_KHO_S_135_2", "STEM_KHO_S_135_3",
    "STEM_KHO_S_135_4", "STEM_KHO_S_135_5", "STEM_KHO_S_135_6",
    "STEM_KHO_S_135_7", "STEM_KHO_S_135_8", "STEM_KHO_S_135_9",
    "STEM_KLA_125_0", "STEM_KLA_125_1", "STEM_KLA_125_2",
    "STEM_KLA_125_3", "STEM_KLA_125_4", "STEM_KLA_125_5",
    "STEM_KLA_125_6", "STEM_KLA_125_7", "STEM_KLA_125_8",
    "STEM_KLA_125_9", "STEM_STD125_S_0", "STEM_STD125_S_1",
    "STEM_STD125_S_2", "STEM_STD125_S_3", "STEM_STD125_A_0",
    "STEM_STD125_A_1", "STEM_STD125_A_2", "STEM_STD125_A_3",
    "STEM_STD125_A_4", "STEM_STD125_A_5", "STEM_STD125_A_6",
    "STEM_STD125_A_7", "STEM_SN_S_0", "STEM_SN_S_1",
    "STEM_SN_S_2", "STEM_SN_S_3", "STEM_SN_A_0",
    "STEM_SN_A_1", "STEM_SN_A_2", "STEM_SN_A_3",
    "STEM_SN_A_4", "STEM_SN_A_5", "STEM_SN_A_6",
    "STEM_SN_A_7", "CUTPLANE", "HEAD_M4",
    "HEAD_P0", "HEAD_P4", "HEAD_P8",
    "RANGE_CCD_KS_STD135", "RANGE_CCD_KA_STD135", "RANGE_CCD_KHO_S_135",
    "RANGE_CCD_KHO_A_135", "RANGE_CCD_KLA_125", "RANGE_CCD_STD125_S",
    "RANGE_CCD_STD125_A", "RANGE_CCD_SN_S", "RANGE_CCD_SN_A",
];

const RCC: [Option<&str>; 90] = [
    Some("103550471_1"), Some("103550472_1"),
    Some("103550473_1"), Some("103550474_1"),
    Some("103550475_1"), Some("103550476_1"),
    Some("103550477_1"), Some("103550478_1"),
    Some("103550481_1"), Some("103550482_1"),
    Some("103427643_1"), Some("103427644_1"),
    Some("103427646_1"), Some("103427648_1"),
    Some("103427649_1"), Some("103427650_1"),
    Some("103427651_1"), Some("103427652_1"),
    Some("103427653_1"), Some("103427654_1"),
    Some("103427657_1"), Some("103414240_1"),
    Some("103414964_1"), Some("103414966_1"),
    Some("103414967_1"), Some("103414968_1"),
    Some("103414969_1"), Some("103414970_1"),
    Some("103414971_1"), Some("103427630_1"),
    Some("103427639_1"), Some("103427658_1"),
    Some("103607083_1"), Some("103607086_1"),
    Some("103607087_1"), Some("103607088_1"),
    Some("103607091_1"), Some("103607092_1"),
    Some("103607093_1"), Some("103607094_1"),
    Some("103607095_1"), Some("103607099_1"),
    Some("103610427_1"), Some("103610428_1"),
    Some("103610429_1"), Some("103610430_1"),
    Some("103610431_1"), Some("103610432_1"),
    Some("103610433_1"), Some("103610434_1"),
    Some("103610435_1"), Some("103610436_1"),
    Some("103548905_1"), Some("103550468_1"),
    Some("103550469_1"), Some("103550470_1"),
    Some("103548903_1"), Some("103550462_1"),
    Some("103550463_1"), Some("103550464_1"),
    Some("103550908_1"), Some("103550915_1"),
    Some("103550917_1"), Some("103550918_1"),
    Some("103548906_1"), Some("103550465_1"),
    Some("103550466_1"), Some("103550467_1"),
    Some("103548904_1"), Some("103550459_1"),
    Some("103550460_1"), Some("103550461_1"),
    Some("103550919_1"), Some("103550920_1"),
    Some("103550921_1"), Some("103550922_1"),
    None, None,
    None, None,
    None, None,
    None, None,
    None, None,
    None, None,
    None, None,
];

impl Uid {
    /// Claims `raw` if it falls inside the CORAIL block.
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

    /// Legacy scheme constant name, e.g. `"STEM_KS_STD135_4"`.
    #[inline]
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    #[inline]
    fn index(self) -> usize {
        (self as i32 - RANGE_START) as usize
    }
}

/// Stem families of the CORAIL catalog. `Ks`/`Kho` prefixes follow the
/// vendor's collarless naming, `Ka`/`KhoA` the collared counterparts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Group {
    KhoA135,
    KsStd135,
    KaStd135,
    KhoS135,
    Kla125,
    Std125S,
    Std125A,
    SnS,
    SnA,
}

pub const GROUPS: [Group; 9] = [
    Group::KhoA135,
    Group::KsStd135,
    Group::KaStd135,
    Group::KhoS135,
    Group::Kla125,
    Group::Std125S,
    Group::Std125A,
    Group::SnS,
    Group::SnA,
];

const STEM_KHO_A_135: [Uid; 10] = [
    Uid::STEM_KHO_A_135_0, Uid::STEM_KHO_A_135_1, Uid::STEM_KHO_A_135_2,
    Uid::STEM_KHO_A_135_3, Uid::STEM_KHO_A_135_4, Uid::STEM_KHO_A_135_5,
    Uid::STEM_KHO_A_135_6, Uid::STEM_KHO_A_135_7, Uid::STEM_KHO_A_135_8,
    Uid::STEM_KHO_A_135_9,
];

const STEM_KS_STD135: [Uid; 11] = [
    Uid::STEM_KS_STD135_0, Uid::STEM_KS_STD135_1, Uid::STEM_KS_STD135_2,
    Uid::STEM_KS_STD135_3, Uid::STEM_KS_STD135_4, Uid::STEM_KS_STD135_5,
    Uid::STEM_KS_STD135_6, Uid::STEM_KS_STD135_7, Uid::STEM_KS_STD135_8,
    Uid::STEM_KS_STD135_9, Uid::STEM_KS_STD135_10,
];

const STEM_KA_STD135: [Uid; 11] = [
    Uid::STEM_KA_STD135_0, Uid::STEM_KA_STD135_1, Uid::STEM_KA_STD135_2,
    Uid::STEM_KA_STD135_3, Uid::STEM_KA_STD135_4, Uid::STEM_KA_STD135_5,
    Uid::STEM_KA_STD135_6, Uid::STEM_KA_STD135_7, Uid::STEM_KA_STD135_8,
    Uid::STEM_KA_STD135_9, Uid::STEM_KA_STD135_10,
];

const STEM_KHO_S_135: [Uid; 10] = [
    Uid::STEM_KHO_S_135_0, Uid::STEM_KHO_S_135_1, Uid::STEM_KHO_S_135_2,
    Uid::STEM_KHO_S_135_3, Uid::STEM_KHO_S_135_4, Uid::STEM_KHO_S_135_5,
    Uid::STEM_KHO_S_135_6, Uid::STEM_KHO_S_135_7, Uid::STEM_KHO_S_135_8,
    Uid::STEM_KHO_S_135_9,
];

const STEM_KLA_125: [Uid; 10] = [
    Uid::STEM_KLA_125_0, Uid::STEM_KLA_125_1, Uid::STEM_KLA_125_2,
    Uid::STEM_KLA_125_3, Uid::STEM_KLA_125_4, Uid::STEM_KLA_125_5,
    Uid::STEM_KLA_125_6, Uid::STEM_KLA_125_7, Uid::STEM_KLA_125_8,
    Uid::STEM_KLA_125_9,
];

const STEM_STD125_S: [Uid; 4] = [
    Uid::STEM_STD125_S_0, Uid::STEM_STD125_S_1, Uid::STEM_STD125_S_2,
    Uid::STEM_STD125_S_3,
];

const STEM_STD125_A: [Uid; 8] = [
    Uid::STEM_STD125_A_0, Uid::STEM_STD125_A_1, Uid::STEM_STD125_A_2,
    Uid::STEM_STD125_A_3, Uid::STEM_STD125_A_4, Uid::STEM_STD125_A_5,
    Uid::STEM_STD125_A_6, Uid::STEM_STD125_A_7,
];

const STEM_SN_S: [Uid; 4] = [
    Uid::STEM_SN_S_0, Uid::STEM_SN_S_1, Uid::STEM_SN_S_2,
    Uid::STEM_SN_S_3,
];

const STEM_SN_A: [Uid; 8] = [
    Uid::STEM_SN_A_0, Uid::STEM_SN_A_1, Uid::STEM_SN_A_2,
    Uid::STEM_SN_A_3, Uid::STEM_SN_A_4, Uid::STEM_SN_A_5,
    Uid::STEM_SN_A_6, Uid::STEM_SN_A_7,
];

const LABELS_KHO_A_135: [&str; 10] = [
    "KHO A 135 deg 9", "KHO A 135 deg 10", "KHO A 135 deg 11",
    "KHO A 135 deg 12", "KHO A 135 deg 13", "KHO A 135 deg 14",
    "KHO A 135 deg 15", "KHO A 135 deg 16", "KHO A 135 deg 18",
    "KHO A 135 deg 20",
];

const LABELS_KS_STD135: [&str; 11] = [
    "KS 135 deg 8", "KS 135 deg 9", "KS 135 deg 10",
    "KS 135 deg 11", "KS 135 deg 12", "KS 135 deg 13",
    "KS 135 deg 14", "KS 135 deg 15", "KS 135 deg 16",
    "KS 135 deg 18", "KS 135 deg 20",
];

const LABELS_KA_STD135: [&str; 11] = [
    "KA 135 deg 8", "KA 135 deg 9", "KA 135 deg 10",
    "KA 135 deg 11", "KA 135 deg 12", "KA 135 deg 13",
    "KA 135 deg 14", "KA 135 deg 15", "KA 135 deg 16",
    "KA 135 deg 18", "KA 135 deg 20",
];

const LABELS_KHO_S_135: [&str; 10] = [
    "KHO S 135 deg 9", "KHO S 135 deg 10", "KHO S 135 deg 11",
    "KHO S 135 deg 12", "KHO S 135 deg 13", "KHO S 135 deg 14",
    "KHO S 135 deg 15", "KHO S 135 deg 16", "KHO S 135 deg 18",
    "KHO S 135 deg 20",
];

const LABELS_KLA_125: [&str; 10] = [
    "KLA 125 deg 9", "KLA 125 deg 10", "KLA 125 deg 11",
    "KLA 125 deg 12", "KLA 125 deg 13", "KLA 125 deg 14",
    "KLA 125 deg 15", "KLA 125 deg 16", "KLA 125 deg 18",
    "KLA 125 deg 20",
];

const LABELS_STD125_S: [&str; 4] = [
    "STD S 125 deg 7", "STD S 125 deg 8", "STD S 125 deg 9",
    "STD S 125 deg 10",
];

const LABELS_STD125_A: [&str; 8] = [
    "STD A 125 deg 7", "STD A 125 deg 8", "STD A 125 deg 9",
    "STD A 125 deg 10", "STD A 125 deg 11", "STD A 125 deg 12",
    "STD A 125 deg 13", "STD A 125 deg 14",
];

const LABELS_SN_S: [&str; 4] = [
    "SN S 135 deg 7", "SN S 135 deg 8", "SN S 135 deg 9",
    "SN S 135 deg 10",
];

const LABELS_SN_A: [&str; 8] = [
    "SN A 135 deg 7", "SN A 135 deg 8", "SN A 135 deg 9",
    "SN A 135 deg 10", "SN A 135 deg 11", "SN A 135 deg 12",
    "SN A 135 deg 13", "SN A 135 deg 14",
];

impl Group {
    /// Stem UIDs of this family in catalog-table order.
    pub const fn uids(self) -> &'static [Uid] {
        match self {
            Group::KhoA135 => &STEM_KHO_A_135,
            Group::KsStd135 => &STEM_KS_STD135,
            Group::KaStd135 => &STEM_KA_STD135,
            Group::KhoS135 => &STEM_KHO_S_135,
            Group::Kla125 => &STEM_KLA_125,
            Group::Std125S => &STEM_STD125_S,
            Group::Std125A => &STEM_STD125_A,
            Group::SnS => &STEM_SN_S,
            Group::SnA => &STEM_SN_A,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Group::KhoA135 => "KHO_A_135",
            Group::KsStd135 => "KS_STD135",
            Group::KaStd135 => "KA_STD135",
            Group::KhoS135 => "KHO_S_135",
            Group::Kla125 => "KLA_125",
            Group::Std125S => "STD125_S",
            Group::Std125A => "STD125_A",
            Group::SnS => "SN_S",
            Group::SnA => "SN_A",
        }
    }

    const fn labels(self) -> &'static [&'static str] {
        match self {
            Group::KhoA135 => &LABELS_KHO_A_135,
            Group::KsStd135 => &LABELS_KS_STD135,
            Group::KaStd135 => &LABELS_KA_STD135,
            Group::KhoS135 => &LABELS_KHO_S_135,
            Group::Kla125 => &LABELS_KLA_125,
            Group::Std125S => &LABELS_STD125_S,
            Group::Std125A => &LABELS_STD125_A,
            Group::SnS => &LABELS_SN_S,
            Group::SnA => &LABELS_SN_A,
        }
    }

    /// Collared families carry the `A` ("avec collerette") suffix in the
    /// vendor catalog.
    pub const fn has_collar(self) -> bool {
        matches!(
            self,
            Group::KhoA135 | Group::KaStd135 | Group::Kla125 | Group::Std125A | Group::SnA
        )
    }

    /// Range marker UID of this family's CCD span.
    pub const fn range_uid(self) -> Uid {
        match self {
            Group::KhoA135 => Uid::RANGE_CCD_KHO_A_135,
            Group::KsStd135 => Uid::RANGE_CCD_KS_STD135,
            Group::KaStd135 => Uid::RANGE_CCD_KA_STD135,
            Group::KhoS135 => Uid::RANGE_CCD_KHO_S_135,
            Group::Kla125 => Uid::RANGE_CCD_KLA_125,
            Group::Std125S => Uid::RANGE_CCD_STD125_S,
            Group::Std125A => Uid::RANGE_CCD_STD125_A,
            Group::SnS => Uid::RANGE_CCD_SN_S,
            Group::SnA => Uid::RANGE_CCD_SN_A,
        }
    }

    /// Equivalence class used by the cross-family size translation.
    const fn family_class(self) -> FamilyClass {
        match self {
            Group::KsStd135 | Group::KaStd135 => FamilyClass::Std135,
            Group::KhoS135 | Group::KhoA135 | Group::Kla125 => FamilyClass::Kho,
            Group::Std125S | Group::Std125A | Group::SnS | Group::SnA => FamilyClass::Std125,
        }
    }
}

/// Size-translation classes. The three classes have staggered size
/// ladders: high-offset stems run one size larger than standard 135 deg
/// stems, which in turn run one size larger than the 125 deg and
/// short-neck stems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FamilyClass {
    Std135,
    Kho,
    Std125,
}

impl FamilyClass {
    const fn offset_delta(self, target: FamilyClass) -> i32 {
        match (self, target) {
            (FamilyClass::Std135, FamilyClass::Kho) => -1,
            (FamilyClass::Std135, FamilyClass::Std125) => 1,
            (FamilyClass::Kho, FamilyClass::Std135) => 1,
            (FamilyClass::Kho, FamilyClass::Std125) => 2,
            (FamilyClass::Std125, FamilyClass::Std135) => -1,
            (FamilyClass::Std125, FamilyClass::Kho) => -2,
            _ => 0,
        }
    }
}

const STATS: [RangeStats<Group>; 9] = [
    RangeStats {
        group: Group::KhoA135,
        catalog_index_min: 0,
        catalog_index_max: 9,
        description: "135 KHO collar",
        size_min: 0,
        size_max: 9,
    },
    RangeStats {
        group: Group::KsStd135,
        catalog_index_min: 10,
        catalog_index_max: 20,
        description: "135 STD",
        size_min: 0,
        size_max: 10,
    },
    RangeStats {
        group: Group::KaStd135,
        catalog_index_min: 21,
        catalog_index_max: 31,
        description: "135 STD collar",
        size_min: 0,
        size_max: 10,
    },
    RangeStats {
        group: Group::KhoS135,
        catalog_index_min: 32,
        catalog_index_max: 41,
        description: "135 KHO",
        size_min: 0,
        size_max: 9,
    },
    RangeStats {
        group: Group::Kla125,
        catalog_index_min: 42,
        catalog_index_max: 51,
        description: "125 KLA",
        size_min: 0,
        size_max: 9,
    },
    RangeStats {
        group: Group::Std125S,
        catalog_index_min: 52,
        catalog_index_max: 55,
        description: "125 STD",
        size_min: 0,
        size_max: 3,
    },
    RangeStats {
        group: Group::Std125A,
        catalog_index_min: 56,
        catalog_index_max: 63,
        description: "125 STD collar",
        size_min: 0,
        size_max: 7,
    },
    RangeStats {
        group: Group::SnS,
        catalog_index_min: 64,
        catalog_index_max: 67,
        description: "135 SN",
        size_min: 0,
        size_max: 3,
    },
    RangeStats {
        group: Group::SnA,
        catalog_index_min: 68,
        catalog_index_max: 75,
        description: "135 SN collar",
        size_min: 0,
        size_max: 7,
    },
];

pub const fn stats_of(group: Group) -> &'static RangeStats<Group> {
    match group {
        Group::KhoA135 => &STATS[0],
        Group::KsStd135 => &STATS[1],
        Group::KaStd135 => &STATS[2],
        Group::KhoS135 => &STATS[3],
        Group::Kla125 => &STATS[4],
        Group::Std125S => &STATS[5],
        Group::Std125A => &STATS[6],
        Group::SnS => &STATS[7],
        Group::SnA => &STATS[8],
    }
}

const HEAD_UIDS: [Uid; 4] = [Uid::HEAD_M4, Uid::HEAD_P0, Uid::HEAD_P4, Uid::HEAD_P8];

const RANGE_UIDS: [Uid; 9] = [
    Uid::RANGE_CCD_KS_STD135,
    Uid::RANGE_CCD_KA_STD135,
    Uid::RANGE_CCD_KHO_S_135,
    Uid::RANGE_CCD_KHO_A_135,
    Uid::RANGE_CCD_KLA_125,
    Uid::RANGE_CCD_STD125_S,
    Uid::RANGE_CCD_STD125_A,
    Uid::RANGE_CCD_SN_S,
    Uid::RANGE_CCD_SN_A,
];

const RES01_KS: [Pnt; 11] = [
    Pnt::new(-11.07, 0.0, 11.07), Pnt::new(-11.57, 0.0, 11.57),
    Pnt::new(-12.32, 0.0, 12.32), Pnt::new(-13.07, 0.0, 13.07),
    Pnt::new(-13.8, 0.0, 13.8), Pnt::new(-14.44, 0.0, 14.44),
    Pnt::new(-15.07, 0.0, 15.07), Pnt::new(-15.82, 0.0, 15.82),
    Pnt::new(-16.57, 0.0, 16.57), Pnt::new(-17.57, 0.0, 17.57),
    Pnt::new(-18.57, 0.0, 18.57),
];

const RES01_KHO: [Pnt; 10] = [
    Pnt::new(-15.1, 0.0, 15.1), Pnt::new(-15.85, 0.0, 15.85),
    Pnt::new(-16.6, 0.0, 16.6), Pnt::new(-17.35, 0.0, 17.35),
    Pnt::new(-17.98, 0.0, 17.98), Pnt::new(-18.6, 0.0, 18.6),
    Pnt::new(-19.35, 0.0, 19.35), Pnt::new(-20.1, 0.0, 20.1),
    Pnt::new(-21.1, 0.0, 21.1), Pnt::new(-22.1, 0.0, 22.1),
];

const RES01_KLA: [Pnt; 10] = [
    Pnt::new(-12.62, 0.0, 8.84), Pnt::new(-13.37, 0.0, 9.36),
    Pnt::new(-14.12, 0.0, 9.89), Pnt::new(-14.86, 0.0, 10.4),
    Pnt::new(-15.5, 0.0, 10.85), Pnt::new(-16.12, 0.0, 11.29),
    Pnt::new(-16.87, 0.0, 11.81), Pnt::new(-17.62, 0.0, 12.34),
    Pnt::new(-18.58, 0.0, 13.01), Pnt::new(-19.59, 0.0, 13.72),
];

const RES01_STD125_S: [Pnt; 4] = [
    Pnt::new(-8.76, 0.0, 6.13), Pnt::new(-9.26, 0.0, 6.48),
    Pnt::new(-9.76, 0.0, 6.83), Pnt::new(-10.51, 0.0, 7.36),
];

const RES01_STD125_A: [Pnt; 8] = [
    Pnt::new(-8.76, 0.0, 6.13), Pnt::new(-9.26, 0.0, 6.48),
    Pnt::new(-9.76, 0.0, 6.83), Pnt::new(-10.51, 0.0, 7.36),
    Pnt::new(-11.26, 0.0, 7.88), Pnt::new(-12.01, 0.0, 8.41),
    Pnt::new(-12.63, 0.0, 8.84), Pnt::new(-13.26, 0.0, 9.28),
];

const RES01_SN_S: [Pnt; 4] = [
    Pnt::new(-10.22, 0.0, 10.22), Pnt::new(-10.71, 0.0, 10.71),
    Pnt::new(-11.21, 0.0, 11.21), Pnt::new(-11.96, 0.0, 11.96),
];

const RES01_SN_A: [Pnt; 8] = [
    Pnt::new(-10.21, 0.0, 10.21), Pnt::new(-10.71, 0.0, 10.71),
    Pnt::new(-11.21, 0.0, 11.21), Pnt::new(-11.96, 0.0, 11.96),
    Pnt::new(-12.71, 0.0, 12.71), Pnt::new(-13.46, 0.0, 13.46),
    Pnt::new(-14.09, 0.0, 14.09), Pnt::new(-14.71, 0.0, 14.71),
];

const RES02_KS: [Pnt; 11] = [
    Pnt::new(-19.5, 0.0, 2.64), Pnt::new(-20.0, 0.0, 3.14),
    Pnt::new(-20.75, 0.0, 3.89), Pnt::new(-21.5, 0.0, 4.64),
    Pnt::new(-22.25, 0.0, 5.36), Pnt::new(-22.87, 0.0, 6.01),
    Pnt::new(-23.5, 0.0, 6.64), Pnt::new(-24.25, 0.0, 7.39),
    Pnt::new(-25.0, 0.0, 8.14), Pnt::new(-26.0, 0.0, 9.14),
    Pnt::new(-27.0, 0.0, 10.14),
];

const RES02_KHO: [Pnt; 10] = [
    Pnt::new(-20.0, 0.0, 10.21), Pnt::new(-20.75, 0.0, 10.96),
    Pnt::new(-21.5, 0.0, 11.71), Pnt::new(-22.25, 0.0, 12.46),
    Pnt::new(-22.87, 0.0, 13.08), Pnt::new(-23.5, 0.0, 13.71),
    Pnt::new(-24.25, 0.0, 14.46), Pnt::new(-25.0, 0.0, 15.21),
    Pnt::new(-26.0, 0.0, 16.21), Pnt::new(-27.0, 0.0, 17.21),
];

const RES02_KLA: [Pnt; 10] = [
    Pnt::new(-19.99, 0.0, 1.46), Pnt::new(-20.74, 0.0, 1.99),
    Pnt::new(-21.5, 0.0, 2.51), Pnt::new(-22.26, 0.0, 3.0),
    Pnt::new(-22.88, 0.0, 3.47), Pnt::new(-23.49, 0.0, 3.92),
    Pnt::new(-24.21, 0.0, 4.47), Pnt::new(-24.96, 0.0, 5.01),
    Pnt::new(-25.85, 0.0, 5.74), Pnt::new(-26.78, 0.0, 6.53),
];

const RES02_STD125_S: [Pnt; 4] = [
    Pnt::new(-19.0, 0.0, -4.11), Pnt::new(-19.5, 0.0, -3.76),
    Pnt::new(-20.0, 0.0, -3.41), Pnt::new(-20.75, 0.0, -2.89),
];

const RES02_STD125_A: [Pnt; 8] = [
    Pnt::new(-19.0, 0.0, -4.11), Pnt::new(-19.5, 0.0, -3.76),
    Pnt::new(-20.0, 0.0, -3.41), Pnt::new(-20.75, 0.0, -2.89),
    Pnt::new(-21.5, 0.0, -2.36), Pnt::new(-22.25, 0.0, -1.84),
    Pnt::new(-22.87, 0.0, -1.4), Pnt::new(-23.5, 0.0, -0.96),
];

const RES02_SN_S: [Pnt; 4] = [
    Pnt::new(-19.0, 0.0, 1.43), Pnt::new(-19.5, 0.0, 1.93),
    Pnt::new(-20.0, 0.0, 2.43), Pnt::new(-20.75, 0.0, 3.18),
];

const RES02_SN_A: [Pnt; 8] = [
    Pnt::new(-19.0, 0.0, 1.43), Pnt::new(-19.5, 0.0, 1.93),
    Pnt::new(-20.0, 0.0, 2.43), Pnt::new(-20.75, 0.0, 3.18),
    Pnt::new(-21.5, 0.0, 3.93), Pnt::new(-22.25, 0.0, 4.68),
    Pnt::new(-22.87, 0.0, 5.3), Pnt::new(-23.5, 0.0, 5.93),
];

const TPR01_KS: [Pnt; 11] = [
    Pnt::new(-38.29, 0.0, 38.29), Pnt::new(-38.79, 0.0, 38.79),
    Pnt::new(-39.54, 0.0, 39.54), Pnt::new(-40.29, 0.0, 40.29),
    Pnt::new(-41.03, 0.0, 41.03), Pnt::new(-41.67, 0.0, 41.67),
    Pnt::new(-42.29, 0.0, 42.29), Pnt::new(-43.04, 0.0, 43.04),
    Pnt::new(-43.79, 0.0, 43.79), Pnt::new(-44.78, 0.0, 44.78),
    Pnt::new(-45.79, 0.0, 45.79),
];

const TPR01_KHO: [Pnt; 10] = [
    Pnt::new(-45.65, 0.0, 45.65), Pnt::new(-46.4, 0.0, 46.4),
    Pnt::new(-47.15, 0.0, 47.15), Pnt::new(-47.9, 0.0, 47.9),
    Pnt::new(-48.53, 0.0, 48.53), Pnt::new(-49.15, 0.0, 49.15),
    Pnt::new(-49.9, 0.0, 49.9), Pnt::new(-50.65, 0.0, 50.65),
    Pnt::new(-51.83, 0.0, 51.83), Pnt::new(-52.86, 0.0, 52.86),
];

const TPR01_KLA: [Pnt; 10] = [
    Pnt::new(-45.59, 0.0, 31.92), Pnt::new(-46.35, 0.0, 32.45),
    Pnt::new(-47.09, 0.0, 32.98), Pnt::new(-47.83, 0.0, 33.49),
    Pnt::new(-48.46, 0.0, 33.93), Pnt::new(-49.08, 0.0, 34.37),
    Pnt::new(-49.83, 0.0, 34.89), Pnt::new(-50.58, 0.0, 35.41),
    Pnt::new(-51.78, 0.0, 36.26), Pnt::new(-52.79, 0.0, 36.97),
];

const TPR01_STD125_S: [Pnt; 4] = [
    Pnt::new(-37.87, 0.0, 26.52), Pnt::new(-38.37, 0.0, 26.87),
    Pnt::new(-38.87, 0.0, 27.22), Pnt::new(-39.62, 0.0, 27.74),
];

const TPR01_STD125_A: [Pnt; 8] = [
    Pnt::new(-37.87, 0.0, 26.52), Pnt::new(-38.37, 0.0, 26.87),
    Pnt::new(-38.87, 0.0, 27.22), Pnt::new(-39.62, 0.0, 27.74),
    Pnt::new(-40.37, 0.0, 28.27), Pnt::new(-41.12, 0.0, 28.79),
    Pnt::new(-41.74, 0.0, 29.23), Pnt::new(-42.37, 0.0, 29.67),
];

const TPR01_SN_S: [Pnt; 4] = [
    Pnt::new(-32.49, 0.0, 32.49), Pnt::new(-32.99, 0.0, 32.99),
    Pnt::new(-33.49, 0.0, 33.49), Pnt::new(-34.24, 0.0, 34.24),
];

const TPR01_SN_A: [Pnt; 8] = [
    Pnt::new(-32.49, 0.0, 32.49), Pnt::new(-32.99, 0.0, 32.99),
    Pnt::new(-33.49, 0.0, 33.49), Pnt::new(-34.24, 0.0, 34.24),
    Pnt::new(-34.99, 0.0, 34.99), Pnt::new(-35.74, 0.0, 35.74),
    Pnt::new(-36.36, 0.0, 36.36), Pnt::new(-36.99, 0.0, 36.99),
];

// RES01 is the neck saddle point, RES02 the distal reference used for
// frame shifts, TPR01 the head taper center. Standard and collared
// variants of a family machine the same geometry.
const fn neck_origin_table(group: Group) -> &'static [Pnt] {
    match group {
        Group::KsStd135 | Group::KaStd135 => &RES01_KS,
        Group::KhoS135 | Group::KhoA135 => &RES01_KHO,
        Group::Kla125 => &RES01_KLA,
        Group::Std125S => &RES01_STD125_S,
        Group::Std125A => &RES01_STD125_A,
        Group::SnS => &RES01_SN_S,
        Group::SnA => &RES01_SN_A,
    }
}

const fn reference_point_table(group: Group) -> &'static [Pnt] {
    match group {
        Group::KsStd135 | Group::KaStd135 => &RES02_KS,
        Group::KhoS135 | Group::KhoA135 => &RES02_KHO,
        Group::Kla125 => &RES02_KLA,
        Group::Std125S => &RES02_STD125_S,
        Group::Std125A => &RES02_STD125_A,
        Group::SnS => &RES02_SN_S,
        Group::SnA => &RES02_SN_A,
    }
}

const fn head_point_table(group: Group) -> &'static [Pnt] {
    match group {
        Group::KsStd135 | Group::KaStd135 => &TPR01_KS,
        Group::KhoS135 | Group::KhoA135 => &TPR01_KHO,
        Group::Kla125 => &TPR01_KLA,
        Group::Std125S => &TPR01_STD125_S,
        Group::Std125A => &TPR01_STD125_A,
        Group::SnS => &TPR01_SN_S,
        Group::SnA => &TPR01_SN_A,
    }
}

// A geometry row must exist for every stem of a family; anything else
// must never compile.
const _: () = {
    assert!(RES01_KS.len() == STEM_KS_STD135.len());
    assert!(RES01_KS.len() == STEM_KA_STD135.len());
    assert!(RES01_KHO.len() == STEM_KHO_S_135.len());
    assert!(RES01_KHO.len() == STEM_KHO_A_135.len());
    assert!(RES01_KLA.len() == STEM_KLA_125.len());
    assert!(RES01_STD125_S.len() == STEM_STD125_S.len());
    assert!(RES01_STD125_A.len() == STEM_STD125_A.len());
    assert!(RES01_SN_S.len() == STEM_SN_S.len());
    assert!(RES01_SN_A.len() == STEM_SN_A.len());
    assert!(RES02_KS.len() == RES01_KS.len());
    assert!(RES02_KHO.len() == RES01_KHO.len());
    assert!(RES02_KLA.len() == RES01_KLA.len());
    assert!(RES02_STD125_S.len() == RES01_STD125_S.len());
    assert!(RES02_STD125_A.len() == RES01_STD125_A.len());
    assert!(RES02_SN_S.len() == RES01_SN_S.len());
    assert!(RES02_SN_A.len() == RES01_SN_A.len());
    assert!(TPR01_KS.len() == RES01_KS.len());
    assert!(TPR01_KHO.len() == RES01_KHO.len());
    assert!(TPR01_KLA.len() == RES01_KLA.len());
    assert!(TPR01_STD125_S.len() == RES01_STD125_S.len());
    assert!(TPR01_STD125_A.len() == RES01_STD125_A.len());
    assert!(TPR01_SN_S.len() == RES01_SN_S.len());
    assert!(TPR01_SN_A.len() == RES01_SN_A.len());
    assert!(LABELS_KHO_A_135.len() == STEM_KHO_A_135.len());
    assert!(LABELS_KS_STD135.len() == STEM_KS_STD135.len());
    assert!(LABELS_KA_STD135.len() == STEM_KA_STD135.len());
    assert!(LABELS_KHO_S_135.len() == STEM_KHO_S_135.len());
    assert!(LABELS_KLA_125.len() == STEM_KLA_125.len());
    assert!(LABELS_STD125_S.len() == STEM_STD125_S.len());
    assert!(LABELS_STD125_A.len() == STEM_STD125_A.len());
    assert!(LABELS_SN_S.len() == STEM_SN_S.len());
    assert!(LABELS_SN_A.len() == STEM_SN_A.len());
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

pub fn has_collar(uid: Uid) -> bool {
    stem_slot(uid).map_or(false, |(group, _)| group.has_collar())
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

/// CCD shaft angle in degrees.
pub fn shaft_angle(uid: Uid) -> Result<f64> {
    let (group, _) = require_stem(uid)?;
    Ok(if group == Group::Kla125 { 55.0 } else { 45.0 })
}

/// Translation from `source`'s frame to `target`'s, taken between the
/// distal reference points.
pub fn shift_vector(source: Uid, target: Uid) -> Result<Vec3> {
    let from = reference_point(source)?;
    let to = reference_point(target)?;
    Ok(from.subtracted(&to))
}

/// Nearest catalog equivalent of `uid` inside `target_group`.
///
/// The size ladders of the three family classes are staggered, so the
/// translated offset moves by the class delta before clamping into the
/// target family's span.
pub fn similar_stem(uid: Uid, target_group: Group) -> Result<Uid> {
    let (source_group, source_offset) = require_stem(uid)?;
    if target_group == source_group {
        return Ok(uid);
    }

    let delta = source_group
        .family_class()
        .offset_delta(target_group.family_class());
    let translated = stats_of(target_group).clamp(source_offset as i32 + delta);

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

/// Head taper deltas in millimeters along the neck axis.
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

/// Resection plane: normal is the Y axis rotated 90 deg about X then
/// -45 deg about Y. Collared stems pull the plane 0.1 mm back along the
/// normal to clear the collar seat.
pub fn cut_plane(uid: Uid) -> Result<CutPlane> {
    let (group, _) = require_stem(uid)?;
    let angle = 45.0_f64.to_radians();
    let normal = Vec3::new(-angle.sin(), 0.0, angle.cos()).normalized();
    let mut origin = neck_origin(uid)?;
    if group.has_collar() {
        origin = origin.translated(&normal.multiplied(-0.1));
    }
    Ok(CutPlane { origin, normal })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_bounds() {
        assert_eq!(Uid::from_raw(160_090), Some(Uid::STEM_KHO_A_135_0));
        assert_eq!(Uid::from_raw(160_089), None);
        assert_eq!(Uid::from_raw(160_179), Some(Uid::RANGE_CCD_SN_A));
        assert_eq!(Uid::from_raw(160_180), None);
    }

    #[test]
    fn test_group_catalog_spans_are_contiguous() {
        let mut next = 0;
        for group in GROUPS {
            let stats = stats_of(group);
            assert_eq!(stats.catalog_index_min, next);
            assert_eq!(
                stats.catalog_index_max - stats.catalog_index_min + 1,
                group.uids().len() as i32
            );
            next = stats.catalog_index_max + 1;
        }
        assert_eq!(next, 76);
    }

    #[test]
    fn test_collar_flag() {
        assert!(has_collar(Uid::STEM_KA_STD135_3));
        assert!(has_collar(Uid::STEM_KHO_A_135_0));
        assert!(!has_collar(Uid::STEM_KS_STD135_3));
        assert!(!has_collar(Uid::STEM_SN_S_0));
        assert!(!has_collar(Uid::HEAD_P0));
    }

    #[test]
    fn test_shaft_angle() {
        assert_eq!(shaft_angle(Uid::STEM_KLA_125_2).unwrap(), 55.0);
        assert_eq!(shaft_angle(Uid::STEM_KS_STD135_2).unwrap(), 45.0);
    }

    #[test]
    fn test_similar_std_to_kho_drops_one_size() {
        assert_eq!(
            similar_stem(Uid::STEM_KS_STD135_5, Group::KhoS135).unwrap(),
            Uid::STEM_KHO_S_135_4
        );
        assert_eq!(
            similar_stem(Uid::STEM_KHO_S_135_4, Group::KsStd135).unwrap(),
            Uid::STEM_KS_STD135_5
        );
    }

    #[test]
    fn test_similar_kho_to_sn_moves_two_sizes() {
        assert_eq!(
            similar_stem(Uid::STEM_KHO_S_135_2, Group::SnS).unwrap(),
            Uid::STEM_SN_S_3
        );
    }

    #[test]
    fn test_similar_clamps_into_short_families() {
        assert_eq!(
            similar_stem(Uid::STEM_KS_STD135_10, Group::Std125S).unwrap(),
            Uid::STEM_STD125_S_3
        );
    }

    #[test]
    fn test_similar_same_class_keeps_offset() {
        assert_eq!(
            similar_stem(Uid::STEM_KS_STD135_7, Group::KaStd135).unwrap(),
            Uid::STEM_KA_STD135_7
        );
        assert_eq!(
            similar_stem(Uid::STEM_SN_A_5, Group::Std125A).unwrap(),
            Uid::STEM_STD125_A_5
        );
    }

    #[test]
    fn test_shift_vector_uses_reference_points() {
        let shift = shift_vector(Uid::STEM_KS_STD135_0, Uid::STEM_KS_STD135_1).unwrap();
        assert!((shift.x - 0.5).abs() < 1e-9);
        assert_eq!(shift.y, 0.0);
        assert!((shift.z + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_head_p0_is_neutral() {
        let stem = Uid::STEM_KA_STD135_4;
        assert_eq!(
            head_to_stem_offset(Uid::HEAD_P0, stem).unwrap(),
            head_point(stem).unwrap()
        );
    }

    #[test]
    fn test_cut_plane_normal_and_collar_offset() {
        let angle = 45.0_f64.to_radians();
        let plain = cut_plane(Uid::STEM_KS_STD135_0).unwrap();
        assert!((plain.normal.x + angle.sin()).abs() < 1e-12);
        assert_eq!(plain.normal.y, 0.0);
        assert!((plain.normal.z - angle.cos()).abs() < 1e-12);
        assert_eq!(plain.origin, neck_origin(Uid::STEM_KS_STD135_0).unwrap());

        let collared = cut_plane(Uid::STEM_KA_STD135_0).unwrap();
        let base = neck_origin(Uid::STEM_KA_STD135_0).unwrap();
        let pulled = base.translated(&collared.normal.multiplied(-0.1));
        assert!((collared.origin.x - pulled.x).abs() < 1e-12);
        assert!((collared.origin.z - pulled.z).abs() < 1e-12);
    }

    #[test]
    fn test_rcc_codes_cover_all_stems() {
        for uid in iter_stems(None) {
            assert!(rcc_code(uid).is_ok(), "missing RCC for {}", uid.name());
        }
        assert!(matches!(
            rcc_code(Uid::CUTPLANE),
            Err(CatalogError::MissingCatalogCode(_))
        ));
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(
            variant_of(Uid::STEM_KS_STD135_0).unwrap().label,
            "KS 135 deg 8"
        );
        assert_eq!(
            variant_of(Uid::STEM_KS_STD135_10).unwrap().label,
            "KS 135 deg 20"
        );
        assert_eq!(variant_of(Uid::STEM_SN_A_0).unwrap().label, "SN A 135 deg 7");
    }

    #[test]
    fn test_range_uid_per_group() {
        assert_eq!(Group::Kla125.range_uid(), Uid::RANGE_CCD_KLA_125);
        assert!(is_range(Uid::RANGE_CCD_KLA_125));
        assert!(!is_stem(Uid::RANGE_CCD_KLA_125));
    }
}
