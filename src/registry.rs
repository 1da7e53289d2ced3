//! Cross-vendor UID registry.
//!
//! Every vendor owns a disjoint UID block, so a raw integer identifies at
//! most one implant. The registry probes the vendors in a fixed order and
//! the first one to claim the id wins; ids outside every block resolve to
//! `None` rather than an error.

use serde::Serialize;

use crate::vendors::{actis, amistem, corail, ecofit, fit, optimys};

/// Resolved catalog metadata for a raw UID.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StemLookup {
    pub uid: i32,
    pub manufacturer: &'static str,
    /// Legacy scheme constant name, e.g. `"STEM_KS_STD135_4"`.
    pub enum_name: &'static str,
    /// The constant name with underscores opened up for display.
    pub friendly_name: String,
    pub rcc_id: Option<&'static str>,
}

fn friendly(name: &str) -> String {
    name.replace('_', " ").trim().to_string()
}

trait Vendor {
    fn manufacturer(&self) -> &'static str;
    fn claim(&self, raw: i32) -> Option<StemLookup>;
}

macro_rules! vendor {
    ($struct_name:ident, $module:ident, $label:expr) => {
        struct $struct_name;

        impl Vendor for $struct_name {
            fn manufacturer(&self) -> &'static str {
                $label
            }

            fn claim(&self, raw: i32) -> Option<StemLookup> {
                let uid = $module::Uid::from_raw(raw)?;
                Some(StemLookup {
                    uid: raw,
                    manufacturer: self.manufacturer(),
                    enum_name: uid.name(),
                    friendly_name: friendly(uid.name()),
                    rcc_id: $module::rcc_code(uid).ok(),
                })
            }
        }
    };
}

vendor!(Medacta, amistem, "Medacta (AMISTEM)");
vendor!(Mathys, optimys, "Mathys");
vendor!(Corail, corail, "Johnson & Johnson (Corail)");
vendor!(Actis, actis, "Johnson & Johnson (Actis)");
vendor!(Ecofit, ecofit, "Implantcast (Ecofit)");
vendor!(Lima, fit, "Lima (FIT)");

// Probe order matches the legacy registry; blocks are disjoint so order
// only decides who answers first, never what the answer is.
static VENDORS: [&(dyn Vendor + Sync); 6] =
    [&Medacta, &Mathys, &Corail, &Actis, &Ecofit, &Lima];

/// Resolves a raw UID to its owning vendor's catalog metadata.
pub fn resolve(raw: i32) -> Option<StemLookup> {
    for vendor in VENDORS {
        if let Some(lookup) = vendor.claim(raw) {
            tracing::trace!(
                uid = raw,
                manufacturer = lookup.manufacturer,
                name = lookup.enum_name,
                "resolved stem uid"
            );
            return Some(lookup);
        }
    }
    tracing::trace!(uid = raw, "uid not claimed by any vendor");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclaimed_uid_resolves_to_none() {
        assert_eq!(resolve(42), None);
        assert_eq!(resolve(-1), None);
        assert_eq!(resolve(100_799), None);
        assert_eq!(resolve(999_999), None);
    }

    #[test]
    fn test_each_block_resolves_to_its_vendor() {
        let cases = [
            (100_805, "Medacta (AMISTEM)", "STEM_STD_5"),
            (130_500, "Mathys", "STEM_STD_1"),
            (160_090, "Johnson & Johnson (Corail)", "STEM_KHO_A_135_0"),
            (161_340, "Johnson & Johnson (Actis)", "STEM_STD_0"),
            (310_840, "Implantcast (Ecofit)", "STEM_STD_133_0"),
            (60_750, "Lima (FIT)", "STEM_1_R"),
        ];
        for (raw, manufacturer, name) in cases {
            let lookup = resolve(raw).unwrap();
            assert_eq!(lookup.uid, raw);
            assert_eq!(lookup.manufacturer, manufacturer);
            assert_eq!(lookup.enum_name, name);
        }
    }

    #[test]
    fn test_friendly_name_opens_underscores() {
        let lookup = resolve(160_100).unwrap();
        assert_eq!(lookup.enum_name, "STEM_KS_STD135_0");
        assert_eq!(lookup.friendly_name, "STEM KS STD135 0");
    }

    #[test]
    fn test_marker_uids_resolve_without_rcc() {
        let lookup = resolve(100_840).unwrap();
        assert_eq!(lookup.enum_name, "CUTPLANE");
        assert_eq!(lookup.rcc_id, None);
    }

    #[test]
    fn test_stem_uids_carry_rcc() {
        let lookup = resolve(60_750).unwrap();
        assert_eq!(lookup.rcc_id, Some("4211_25_110"));
    }
}
