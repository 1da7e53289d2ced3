//! Numeric regressions against the measured catalog tables: known shift
//! vectors, head-offset compositions and resection planes.

use approx::assert_relative_eq;
use hipstem::vendors::{actis, amistem, corail, ecofit, fit, optimys};
use hipstem::{Pnt, Vec3};

fn neck_axis(neck: Pnt, head: Pnt) -> Vec3 {
    head.subtracted(&neck).normalized()
}

#[test]
fn test_amistem_shift_std_to_lat() {
    let shift =
        amistem::shift_vector(amistem::Uid::STEM_STD_5, amistem::Uid::STEM_LAT_4).unwrap();
    assert_relative_eq!(shift.x, 0.0);
    assert_relative_eq!(shift.y, 0.0);
    assert_relative_eq!(shift.z, 6.55, max_relative = 1e-4);
}

#[test]
fn test_amistem_head_p12_composition() {
    let stem = amistem::Uid::STEM_STD_5;
    let head_pt = amistem::head_point(stem).unwrap();
    let axis = neck_axis(amistem::neck_origin(stem).unwrap(), head_pt);

    let mounted = amistem::head_to_stem_offset(amistem::Uid::HEAD_P12, stem).unwrap();
    let expected = head_pt.translated(&axis.multiplied(7.071));
    assert_relative_eq!(mounted.y, expected.y, max_relative = 1e-3);
    assert_relative_eq!(mounted.z, expected.z, max_relative = 1e-3);
}

#[test]
fn test_amistem_lat_head_correction() {
    let stem = amistem::Uid::STEM_LAT_4;
    let head_pt = amistem::head_point(stem).unwrap();
    let axis = neck_axis(amistem::neck_origin(stem).unwrap(), head_pt);

    let mounted = amistem::head_to_stem_offset(amistem::Uid::HEAD_P4, stem).unwrap();
    let delta = mounted.subtracted(&head_pt);
    let expected = axis.multiplied(0.9 + 3.5355);
    assert_relative_eq!(delta.y, expected.y, max_relative = 1e-3);
    assert_relative_eq!(delta.z, expected.z, max_relative = 1e-3);
}

#[test]
fn test_amistem_small_neck_head_has_no_correction() {
    let stem = amistem::Uid::STEM_LAT_SN_4;
    let mounted = amistem::head_to_stem_offset(amistem::Uid::HEAD_P4, stem).unwrap();
    let head_pt = amistem::head_point(stem).unwrap();
    assert_relative_eq!(mounted.y, head_pt.y);
    assert_relative_eq!(mounted.z, head_pt.z);
}

#[test]
fn test_corail_similar_kho_to_collared_125() {
    assert_eq!(
        corail::similar_stem(corail::Uid::STEM_KHO_S_135_4, corail::Group::Std125A).unwrap(),
        corail::Uid::STEM_STD125_A_6
    );
}

#[test]
fn test_corail_head_p8_composition() {
    let stem = corail::Uid::STEM_KA_STD135_3;
    let head_pt = corail::head_point(stem).unwrap();
    let axis = neck_axis(corail::neck_origin(stem).unwrap(), head_pt);

    let mounted = corail::head_to_stem_offset(corail::Uid::HEAD_P8, stem).unwrap();
    let expected = head_pt.translated(&axis.multiplied(7.0));
    assert_relative_eq!(mounted.x, expected.x, max_relative = 1e-4);
    assert_relative_eq!(mounted.z, expected.z, max_relative = 1e-4);
}

#[test]
fn test_corail_cut_plane_matches_scheme() {
    let uid = corail::Uid::STEM_KS_STD135_2;
    let plane = corail::cut_plane(uid).unwrap();
    let angle = 45.0_f64.to_radians();
    assert_relative_eq!(plane.normal.x, -angle.sin(), max_relative = 1e-6);
    assert_relative_eq!(plane.normal.y, 0.0);
    assert_relative_eq!(plane.normal.z, angle.cos(), max_relative = 1e-6);
    assert_eq!(plane.origin, corail::neck_origin(uid).unwrap());
}

#[test]
fn test_corail_collared_cut_plane_clears_the_collar() {
    let uid = corail::Uid::STEM_KA_STD135_2;
    let plane = corail::cut_plane(uid).unwrap();
    let neck = corail::neck_origin(uid).unwrap();
    let expected = neck.translated(&plane.normal.multiplied(-0.1));
    assert_relative_eq!(plane.origin.x, expected.x, max_relative = 1e-9);
    assert_relative_eq!(plane.origin.z, expected.z, max_relative = 1e-9);
}

#[test]
fn test_actis_shift_matches_reference_points() {
    let source = actis::Uid::STEM_STD_2;
    let target = actis::Uid::STEM_STD_1;
    let shift = actis::shift_vector(source, target).unwrap();
    let expected = actis::reference_point(source)
        .unwrap()
        .subtracted(&actis::reference_point(target).unwrap());
    assert_relative_eq!(shift.x, expected.x, max_relative = 1e-5);
    assert_relative_eq!(shift.y, expected.y, max_relative = 1e-5);
    assert_relative_eq!(shift.z, expected.z, max_relative = 1e-5);
}

#[test]
fn test_actis_cut_plane_matches_scheme() {
    let uid = actis::Uid::STEM_STD_2;
    let plane = actis::cut_plane(uid).unwrap();
    let angle = 40.0_f64.to_radians();
    assert_relative_eq!(plane.normal.x, angle.sin(), max_relative = 1e-6);
    assert_relative_eq!(plane.normal.y, 0.0);
    assert_relative_eq!(plane.normal.z, angle.cos(), max_relative = 1e-6);
    assert_eq!(plane.origin, actis::neck_origin(uid).unwrap());
}

#[test]
fn test_ecofit_head_p8_composition() {
    let stem = ecofit::Uid::STEM_LAT_138_3;
    let head_pt = ecofit::head_point(stem).unwrap();
    let axis = neck_axis(ecofit::neck_origin(stem).unwrap(), head_pt);

    let mounted = ecofit::head_to_stem_offset(ecofit::Uid::HEAD_P8, stem).unwrap();
    let expected = head_pt.translated(&axis.multiplied(7.1));
    assert_relative_eq!(mounted.x, expected.x, max_relative = 1e-6);
    assert_relative_eq!(mounted.y, expected.y, max_relative = 1e-6);
}

#[test]
fn test_optimys_neck_origin_matches_rotated_translation() {
    let origin = optimys::neck_origin(optimys::Uid::STEM_STD_1).unwrap();
    let angle = (-45.0_f64).to_radians();
    assert_relative_eq!(origin.x, -12.5 * angle.cos(), max_relative = 1e-6);
    assert_relative_eq!(origin.y, -12.5 * angle.sin(), max_relative = 1e-6);
    assert_relative_eq!(origin.z, 0.0);
}

#[test]
fn test_optimys_head_p8_rebuilds_rotated_point() {
    let mounted =
        optimys::head_to_stem_offset(optimys::Uid::HEAD_P8, optimys::Uid::STEM_STD_1).unwrap();
    let angle = (-45.0_f64).to_radians();
    let (s, c) = (angle.sin(), angle.cos());
    // head_top XS 27.0 plus the +4 head step.
    let (x, y) = (-12.5, 31.0);
    assert_relative_eq!(mounted.x, x * c - y * s, max_relative = 1e-6);
    assert_relative_eq!(mounted.y, x * s + y * c, max_relative = 1e-6);
    assert_relative_eq!(mounted.z, 0.0);
}

#[test]
fn test_optimys_cut_plane_matches_scheme() {
    let plane = optimys::cut_plane(optimys::Uid::STEM_STD_1).unwrap();
    let angle = 45.0_f64.to_radians();
    assert_relative_eq!(plane.normal.x, angle.sin(), max_relative = 1e-6);
    assert_relative_eq!(plane.normal.y, angle.cos(), max_relative = 1e-6);
    assert_relative_eq!(plane.normal.z, 0.0);
    assert_eq!(
        plane.origin,
        optimys::neck_origin(optimys::Uid::STEM_STD_1).unwrap()
    );
}

#[test]
fn test_fit_cut_plane_lengths() {
    let expected = [-34.4, -36.5, -38.0, -39.5, -41.5, -43.4, -45.6];
    for (uid, want) in fit::Side::Right.uids().iter().zip(expected) {
        let plane = fit::cut_plane(*uid).unwrap();
        assert_relative_eq!(plane.origin.x, want);
        assert_eq!(plane.normal, Vec3::new(1.0, 0.0, 0.0));
    }
}

#[test]
fn test_neutral_heads_land_on_the_head_point() {
    // Each vendor's zero-offset head leaves the taper center untouched.
    let stem = corail::Uid::STEM_SN_A_2;
    assert_eq!(
        corail::head_to_stem_offset(corail::Uid::HEAD_P0, stem).unwrap(),
        corail::head_point(stem).unwrap()
    );
    let stem = actis::Uid::STEM_HO_5;
    assert_eq!(
        actis::head_to_stem_offset(actis::Uid::HEAD_P0, stem).unwrap(),
        actis::head_point(stem).unwrap()
    );
    let stem = ecofit::Uid::STEM_CV_4;
    assert_eq!(
        ecofit::head_to_stem_offset(ecofit::Uid::HEAD_P0, stem).unwrap(),
        ecofit::head_point(stem).unwrap()
    );
    let stem = optimys::Uid::STEM_LAT_2;
    assert_eq!(
        optimys::head_to_stem_offset(optimys::Uid::HEAD_P4, stem).unwrap(),
        optimys::head_point(stem).unwrap()
    );
    let stem = amistem::Uid::STEM_STD_3;
    assert_eq!(
        amistem::head_to_stem_offset(amistem::Uid::HEAD_P4, stem).unwrap(),
        amistem::head_point(stem).unwrap()
    );
}
