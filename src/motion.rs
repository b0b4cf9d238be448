//! Rigid subject motion, as recorded per acquired view, and its conversion
//! into homogeneous affine matrices.
//!
//! A motion vector holds six numbers in a fixed order:
//!
//! | index | meaning                         |
//! |-------|---------------------------------|
//! | 0     | axial translation (mm)          |
//! | 1     | coronal translation (mm)        |
//! | 2     | sagittal translation (mm)       |
//! | 3     | axial rotation (deg)            |
//! | 4     | coronal rotation (deg)          |
//! | 5     | sagittal rotation (deg)         |
//!
//! These anatomical components do not line up with the `x, y, z` axes of
//! [`build_rotation`]. How they are relabelled depends on the frame in which
//! the resulting matrix is used, so each frame is a separate implementation
//! of [`MotionToAffine`] with its own remap table.

use ndarray::ArrayView2;

use geometry::{AffineMatrix, DimensionError, build_rotation};
use units::{Angle, Length, deg, mm};

/// Number of degrees of freedom of a rigid motion
pub const MOTION_DOF: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionVector([f64; MOTION_DOF]);

impl MotionVector {

    pub fn new(values: [f64; MOTION_DOF]) -> Self { Self(values) }

    pub fn zero() -> Self { Self([0.0; MOTION_DOF]) }

    pub fn as_array(&self) -> &[f64; MOTION_DOF] { &self.0 }

    pub fn axial_translation   (&self) -> Length { mm (self.0[0]) }
    pub fn coronal_translation (&self) -> Length { mm (self.0[1]) }
    pub fn sagittal_translation(&self) -> Length { mm (self.0[2]) }
    pub fn axial_rotation      (&self) -> Angle  { deg(self.0[3]) }
    pub fn coronal_rotation    (&self) -> Angle  { deg(self.0[4]) }
    pub fn sagittal_rotation   (&self) -> Angle  { deg(self.0[5]) }
}

impl From<[f64; MOTION_DOF]> for MotionVector {
    fn from(values: [f64; MOTION_DOF]) -> Self { Self(values) }
}

impl TryFrom<&[f64]> for MotionVector {
    type Error = DimensionError;
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let values: [f64; MOTION_DOF] = values.try_into()
            .map_err(|_| DimensionError::new("motion vector", MOTION_DOF, values.len()))?;
        Ok(Self(values))
    }
}

/// Interpret each row of an `N × 6` table as one motion vector
pub fn motions_from_array(table: ArrayView2<f64>) -> Result<Vec<MotionVector>, DimensionError> {
    DimensionError::check("motion table columns", MOTION_DOF, table.ncols())?;
    Ok(table.outer_iter()
       .map(|row| {
           let mut values = [0.0; MOTION_DOF];
           values.iter_mut().zip(row.iter()).for_each(|(v, r)| *v = *r);
           MotionVector(values)
       })
       .collect())
}

/// Builds the affine matrix describing a motion vector in some frame
pub trait MotionToAffine: Send + Sync {
    fn affine_from_motion(motion: &MotionVector) -> AffineMatrix;
}

/// Frame of stored/exported projection geometry.
///
/// The subject lies rotated by 90° relative to the acquisition frame (it would
/// otherwise be seen from below), so:
///
/// + rotations: `x ← sagittal`, `y ← coronal`, `z ← -axial`
/// + translations: `[-coronal, axial, sagittal]`
pub struct ExportFrame;

impl MotionToAffine for ExportFrame {
    fn affine_from_motion(m: &MotionVector) -> AffineMatrix {
        let rotation = build_rotation(
             m.sagittal_rotation(),
             m.coronal_rotation(),
            -m.axial_rotation(),
        );
        let [axial, coronal, sagittal, ..] = *m.as_array();
        AffineMatrix::from_rotation_translation(rotation, [-coronal, axial, sagittal])
    }
}

/// Frame used directly by the reconstruction geometry.
///
/// + rotations: `x ← [5]`, `y ← [3]`, `z ← [4]`
/// + translations: `[[1], [2], [0]]`
pub struct ReconstructionFrame;

impl MotionToAffine for ReconstructionFrame {
    fn affine_from_motion(m: &MotionVector) -> AffineMatrix {
        let rotation = build_rotation(
            m.sagittal_rotation(),
            m.axial_rotation(),
            m.coronal_rotation(),
        );
        let [axial, coronal, sagittal, ..] = *m.as_array();
        AffineMatrix::from_rotation_translation(rotation, [coronal, sagittal, axial])
    }
}

pub fn affine_for_export        (motion: &MotionVector) -> AffineMatrix { ExportFrame        ::affine_from_motion(motion) }
pub fn affine_for_reconstruction(motion: &MotionVector) -> AffineMatrix { ReconstructionFrame::affine_from_motion(motion) }
