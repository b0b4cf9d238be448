use float_eq::assert_float_eq;
use proptest::prelude::*;
use rstest::rstest;

use pmotion::{
    AffineMatrix, Error, MotionVector, ProjectionMatrix, RotationMatrix,
    affine_for_export, build_rotation, corrupt_projections, par_corrupt_projections,
};
use units::deg;

fn pmat(view: usize) -> ProjectionMatrix {
    // Simple cone-beam geometry: source rotating about the z-axis
    let phi = (view as f64 * 10.0).to_radians();
    let (s, c) = phi.sin_cos();
    let (sdd, sid) = (1200.0, 800.0);
    ProjectionMatrix::from_rows(&[
        [sdd * c, sdd * s, 0.0, 0.0],
        [    0.0,     0.0, sdd, 0.0],
        [     -s,       c, 0.0, sid],
    ])
}

#[test]
fn zero_angles_build_identity() {
    assert_eq!(build_rotation(deg(0.0), deg(0.0), deg(0.0)), RotationMatrix::identity());
}

// Rz(0)·Ry(y)·Rx(x) multiplied out by hand
#[rstest(/**/ x   ,  y   ,
         case(30.0,  0.0),
         case( 0.0, 60.0),
         case(25.0, -40.0),
)]
fn rotation_composes_z_y_x(x: f64, y: f64) {
    let (sx, cx) = x.to_radians().sin_cos();
    let (sy, cy) = y.to_radians().sin_cos();
    let expected = nalgebra::Matrix4::new(
         cy, sy * sx, sy * cx, 0.0,
        0.0,      cx,     -sx, 0.0,
        -sy, cy * sx, cy * cx, 0.0,
        0.0,     0.0,     0.0, 1.0,
    );
    let got = build_rotation(deg(x), deg(y), deg(0.0));
    assert_float_eq!(got.as_matrix().iter().copied().collect::<Vec<_>>(),
                     expected       .iter().copied().collect::<Vec<_>>(),
                     abs_all <= 1e-12);
}

#[test]
fn no_motion_gives_identity_affine() {
    assert_eq!(affine_for_export(&MotionVector::zero()), AffineMatrix::identity());
}

#[test]
fn translation_remap() {
    let a = affine_for_export(&MotionVector::new([1.0, 2.0, 3.0, 0.0, 0.0, 0.0]));
    assert_eq!(a.translation(), [-2.0, 1.0, 3.0]);
}

#[test]
fn short_motion_list_fails_without_result() {
    let projections = (0..5).map(pmat).collect::<Vec<_>>();
    let motions = vec![MotionVector::zero(); 4];
    let result = corrupt_projections(&projections, &motions);
    assert!(matches!(result, Err(Error::IndexOutOfRange { index: 4, len: 4 })));
}

#[test]
fn corrupted_projections_match_independent_products() {
    let n = 36;
    let projections = (0..n).map(pmat).collect::<Vec<_>>();
    let motions = (0..n)
        .map(|i| { let t = i as f64 / n as f64; MotionVector::new([t, -t, 2.0 * t, 5.0 * t, -3.0 * t, t]) })
        .collect::<Vec<_>>();

    let out = corrupt_projections(&projections, &motions).unwrap();
    assert_eq!(out.len(), n);
    assert_eq!(out.affines.len(), n);

    for i in 0..n {
        let affine   = affine_for_export(&motions[i]);
        let expected = projections[i].as_matrix() * affine.as_matrix();
        assert_eq!(out.affines[i], affine);
        assert_float_eq!(out.projections[i].to_row_major(),
                         expected.transpose().iter().copied().collect::<Vec<_>>(),
                         abs_all <= 1e-9);
    }
}

#[test]
fn corrupting_with_no_motion_changes_nothing() {
    let projections = (0..3).map(pmat).collect::<Vec<_>>();
    let motions = vec![MotionVector::zero(); 3];
    let out = corrupt_projections(&projections, &motions).unwrap();
    assert_eq!(out.projections, projections);
}

// Projecting a point with the corrupted matrix is the same as moving the point
// and projecting it with the nominal one
#[test]
fn corrupted_projection_sees_moved_subject() {
    let p = pmat(4);
    let motion = MotionVector::new([5.0, -1.0, 2.0, 3.0, -7.0, 11.0]);
    let out = corrupt_projections(&[p.clone()], &[motion]).unwrap();
    let affine = &out.affines[0];

    let point = nalgebra::Vector4::new(10.0, 20.0, 30.0, 1.0);
    let moved = affine.as_matrix() * point;
    let nominal   = p.as_matrix() * moved;
    let corrupted = out.projections[0].as_matrix() * point;
    assert_float_eq!(nominal  .iter().copied().collect::<Vec<_>>(),
                     corrupted.iter().copied().collect::<Vec<_>>(),
                     abs_all <= 1e-9);
}

proptest! {
    #[test]
    fn pipeline_is_deterministic(
        values in proptest::collection::vec(prop::array::uniform6(-180.0 .. 180.0_f64), 1..20)
    ) {
        let motions = values.into_iter().map(MotionVector::new).collect::<Vec<_>>();
        let projections = (0..motions.len()).map(pmat).collect::<Vec<_>>();
        let first  = corrupt_projections    (&projections, &motions).unwrap();
        let second = corrupt_projections    (&projections, &motions).unwrap();
        let third  = par_corrupt_projections(&projections, &motions).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &third);
    }
}
