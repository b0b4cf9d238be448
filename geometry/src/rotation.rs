//! Homogeneous rotation matrices built from Euler angles.
//!
//! The three elementary rotations are always composed as `Rz · Ry · Rx`: in
//! the matrix-times-column-vector convention a point is rotated about `x`
//! first, then about `y`, then about `z`. Downstream geometry depends on this
//! order, so it is not configurable.

use std::ops::Mul;

use nalgebra as na;
use units::{Angle, radian, sin_cos};

/// 4×4 homogeneous matrix whose upper-left 3×3 block is a proper rotation.
///
/// The last row is `[0, 0, 0, 1]` and the translation column is zero. Values
/// of this type can only be produced by the elementary constructors, by
/// [`build_rotation`], or by composing other rotations, so the determinant of
/// the rotation block is always 1 (up to rounding).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix(na::Matrix4<f64>);

impl RotationMatrix {

    pub fn identity() -> Self { Self(na::Matrix4::identity()) }

    /// Rotation by `angle` about the `x`-axis
    pub fn rx(angle: Angle) -> Self {
        let (s, c) = sin_cos(angle);
        Self(na::Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0,  c ,  -s, 0.0,
            0.0,  s ,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Rotation by `angle` about the `y`-axis
    pub fn ry(angle: Angle) -> Self {
        let (s, c) = sin_cos(angle);
        Self(na::Matrix4::new(
             c , 0.0,   s, 0.0,
            0.0, 1.0, 0.0, 0.0,
             -s, 0.0,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Rotation by `angle` about the `z`-axis
    pub fn rz(angle: Angle) -> Self {
        let (s, c) = sin_cos(angle);
        Self(na::Matrix4::new(
             c ,  -s, 0.0, 0.0,
             s ,   c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// The upper-left 3×3 rotation block
    pub fn block(&self) -> na::Matrix3<f64> {
        self.0.fixed_view::<3, 3>(0, 0).into_owned()
    }

    pub fn determinant(&self) -> f64 { self.block().determinant() }

    pub fn as_matrix(&self) -> &na::Matrix4<f64> { &self.0 }

    pub fn into_inner(self) -> na::Matrix4<f64> { self.0 }
}

impl Mul for RotationMatrix {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output { Self(self.0 * rhs.0) }
}

/// Build the rotation `Rz(z) · Ry(y) · Rx(x)`.
///
/// Angles are unrestricted; anything outside one turn simply wraps through
/// the trigonometric functions. NaNs propagate into the result.
pub fn build_rotation(x: Angle, y: Angle, z: Angle) -> RotationMatrix {
    RotationMatrix::rz(z) * RotationMatrix::ry(y) * RotationMatrix::rx(x)
}

/// Recover the `(x, y, z)` Euler angles of a rotation built by [`build_rotation`].
///
/// Exact inverse while `|y| < 90°` and `|x|, |z| < 180°`. At `|y| = 90°` the
/// `x` and `z` rotations are degenerate and only their combination is
/// recoverable.
pub fn rotation_to_euler(r: &RotationMatrix) -> (Angle, Angle, Angle) {
    let m = r.as_matrix();
    let x = m[(2, 1)].atan2(m[(2, 2)]);
    let y = (-m[(2, 0)]).atan2(m[(2, 1)].hypot(m[(2, 2)]));
    let z = m[(1, 0)].atan2(m[(0, 0)]);
    (radian(x), radian(y), radian(z))
}
