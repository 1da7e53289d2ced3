//! Cross-vendor contract: the per-vendor modules expose the same surface
//! and uphold the same structural invariants.

use hipstem::vendors::{actis, amistem, corail, ecofit, fit, optimys};

macro_rules! check_group_contract {
    ($module:ident) => {{
        // Offsets are dense 0..N-1 in table order within each group.
        for group in $module::GROUPS {
            let uids = group.uids();
            assert!(!uids.is_empty(), "empty group in {}", stringify!($module));
            for (expected, &uid) in uids.iter().enumerate() {
                assert_eq!(
                    $module::group_of(uid).expect("stem has a group"),
                    group
                );
                assert_eq!(
                    $module::offset_of(uid).expect("stem has an offset"),
                    expected as i32
                );
            }

            // Stats bounds match the table length.
            let stats = $module::stats_of(group);
            assert_eq!(stats.size_min, 0);
            assert_eq!(stats.size_max, uids.len() as i32 - 1);
            assert_eq!(
                stats.catalog_index_max - stats.catalog_index_min + 1,
                uids.len() as i32
            );
        }

        // iter_stems(None) visits every group's stems exactly once.
        let total: usize = $module::GROUPS.iter().map(|g| g.uids().len()).sum();
        assert_eq!($module::iter_stems(None).count(), total);

        for uid in $module::iter_stems(None) {
            // Every stem round-trips through its raw id.
            assert_eq!($module::Uid::from_raw(uid.raw()), Some(uid));
            assert!($module::is_stem(uid));
            assert!(!$module::is_head(uid));
            assert!(!$module::is_range(uid));

            // adjacent stays inside the group and saturates.
            let next = $module::adjacent(uid, true).expect("stem has a neighbor");
            let prev = $module::adjacent(uid, false).expect("stem has a neighbor");
            assert_eq!(
                $module::group_of(next).unwrap(),
                $module::group_of(uid).unwrap()
            );
            let offset = $module::offset_of(uid).unwrap();
            assert!(($module::offset_of(next).unwrap() - offset).abs() <= 1);
            assert!(($module::offset_of(prev).unwrap() - offset).abs() <= 1);
            if next == uid {
                assert_eq!(offset, $module::stats_of($module::group_of(uid).unwrap()).size_max);
            }
            if prev == uid {
                assert_eq!(offset, 0);
            }
        }
    }};
}

macro_rules! check_similar_contract {
    ($module:ident) => {{
        for uid in $module::iter_stems(None) {
            let source_group = $module::group_of(uid).unwrap();
            for target_group in $module::GROUPS {
                let similar = $module::similar_stem(uid, target_group)
                    .expect("every stem translates into every group");
                if target_group == source_group {
                    assert_eq!(similar, uid, "identity within the own group");
                } else if similar != uid {
                    // AMISTEM's boundary sizes return the input unchanged;
                    // every other translation lands in the target group.
                    assert_eq!($module::group_of(similar).unwrap(), target_group);
                }
            }
        }
    }};
}

#[test]
fn test_amistem_group_contract() {
    check_group_contract!(amistem);
}

#[test]
fn test_corail_group_contract() {
    check_group_contract!(corail);
}

#[test]
fn test_actis_group_contract() {
    check_group_contract!(actis);
}

#[test]
fn test_ecofit_group_contract() {
    check_group_contract!(ecofit);
}

#[test]
fn test_optimys_group_contract() {
    check_group_contract!(optimys);
}

#[test]
fn test_amistem_similar_contract() {
    check_similar_contract!(amistem);
}

#[test]
fn test_corail_similar_contract() {
    check_similar_contract!(corail);
}

#[test]
fn test_actis_similar_contract() {
    check_similar_contract!(actis);
}

#[test]
fn test_ecofit_similar_contract() {
    check_similar_contract!(ecofit);
}

#[test]
fn test_optimys_similar_contract() {
    check_similar_contract!(optimys);
}

#[test]
fn test_fit_side_contract() {
    for side in fit::SIDES {
        let uids = side.uids();
        assert_eq!(uids.len(), 7);
        for (slot, &uid) in uids.iter().enumerate() {
            assert_eq!(fit::side_of(uid).unwrap(), side);
            assert_eq!(fit::size_of(uid).unwrap(), slot as i32 + 1);
            assert_eq!(fit::Uid::from_raw(uid.raw()), Some(uid));
        }
    }
    assert_eq!(fit::iter_stems(None).count(), 14);
    assert_eq!(fit::iter_stems(Some(fit::Side::Left)).count(), 7);
}

#[test]
fn test_uid_blocks_are_disjoint_and_contiguous() {
    let spans = [
        (60_750, 60_768),
        (100_800, 100_849),
        (130_500, 130_534),
        (160_090, 160_179),
        (161_340, 161_372),
        (310_840, 310_903),
    ];
    for window in spans.windows(2) {
        assert!(window[0].1 < window[1].0, "blocks overlap");
    }

    for raw in 100_800..=100_849 {
        assert!(amistem::Uid::from_raw(raw).is_some());
    }
    for raw in 160_090..=160_179 {
        assert!(corail::Uid::from_raw(raw).is_some());
    }
    for raw in 161_340..=161_372 {
        assert!(actis::Uid::from_raw(raw).is_some());
    }
    for raw in 310_840..=310_903 {
        assert!(ecofit::Uid::from_raw(raw).is_some());
    }
    for raw in 130_500..=130_534 {
        assert!(optimys::Uid::from_raw(raw).is_some());
    }
    for raw in 60_750..=60_768 {
        assert!(fit::Uid::from_raw(raw).is_some());
    }
}

#[test]
fn test_variant_assembly_round_trip() {
    let variant = corail::variant_of(corail::Uid::STEM_KA_STD135_4).expect("stem variant");
    assert_eq!(variant.uid, corail::Uid::STEM_KA_STD135_4);
    assert_eq!(variant.group, corail::Group::KaStd135);
    assert_eq!(variant.offset, 4);
    assert_eq!(variant.label, "KA 135 deg 12");
    assert!(variant.rcc_id.is_some());

    let variant = amistem::variant_of(amistem::Uid::STEM_LAT_SN_0).expect("stem variant");
    assert_eq!(variant.label, "SN LAT 0");
    assert_eq!(variant.offset, 0);
}
