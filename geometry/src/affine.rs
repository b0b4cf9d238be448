//! Rigid (rotation + translation) homogeneous transforms

use nalgebra as na;
use crate::RotationMatrix;

/// 4×4 homogeneous affine matrix: a [`RotationMatrix`] whose translation
/// column (rows 0–2 of column 3) holds a displacement in mm.
///
/// The bottom row is always exactly `[0, 0, 0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineMatrix(na::Matrix4<f64>);

impl AffineMatrix {

    pub fn identity() -> Self { Self(na::Matrix4::identity()) }

    /// Overwrite the translation column of `rotation` with `translation` (mm).
    ///
    /// The values are stored exactly as given.
    pub fn from_rotation_translation(rotation: RotationMatrix, translation: [f64; 3]) -> Self {
        let mut m = rotation.into_inner();
        for (row, t) in translation.into_iter().enumerate() {
            m[(row, 3)] = t;
        }
        Self(m)
    }

    /// Translation column, in mm
    pub fn translation(&self) -> [f64; 3] {
        let m = &self.0;
        [m[(0, 3)], m[(1, 3)], m[(2, 3)]]
    }

    pub fn as_matrix(&self) -> &na::Matrix4<f64> { &self.0 }

    /// Native `nalgebra` matrix with element values identical to `self`, for
    /// handing over to rendering code
    pub fn to_native(&self) -> na::Matrix4<f64> { self.0 }

    /// The same rigid motion as an `Isometry3`
    pub fn to_isometry(&self) -> na::Isometry3<f64> {
        let block = self.0.fixed_view::<3, 3>(0, 0).into_owned();
        let rotation = na::Rotation3::from_matrix_unchecked(block);
        let [x, y, z] = self.translation();
        na::Isometry3::from_parts(
            na::Translation3::new(x, y, z),
            na::UnitQuaternion::from_rotation_matrix(&rotation),
        )
    }

    /// All 16 elements, row by row
    pub fn to_row_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (i, e) in self.0.transpose().iter().enumerate() { out[i] = *e; }
        out
    }
}

impl From<RotationMatrix> for AffineMatrix {
    fn from(r: RotationMatrix) -> Self { Self(r.into_inner()) }
}

impl From<AffineMatrix> for na::Matrix4<f64> {
    fn from(a: AffineMatrix) -> Self { a.0 }
}
