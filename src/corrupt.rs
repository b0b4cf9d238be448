//! Apply recorded subject motion to the nominal projection matrices of an
//! acquisition.
//!
//! For view `i`, the motion-corrupted projection is `P_i · A_i`, where `A_i`
//! is the affine matrix of the `i`-th motion vector. Iteration is driven by
//! the projection list: surplus motion vectors are ignored, but running out
//! of motion vectors fails the whole batch.

use ndarray::ArrayView2;
use rayon::prelude::*;

use geometry::{AffineMatrix, ProjectionMatrix};

use crate::error::Error;
use crate::motion::{MotionToAffine, MotionVector, ExportFrame, motions_from_array};

/// Corrupted projections and the affine matrices that produced them,
/// index-aligned with the input projections
#[derive(Clone, Debug, PartialEq)]
pub struct Corrupted {
    pub projections: Vec<ProjectionMatrix>,
    pub affines: Vec<AffineMatrix>,
}

impl Corrupted {
    pub fn len(&self) -> usize { self.projections.len() }
    pub fn is_empty(&self) -> bool { self.projections.is_empty() }
}

/// Corrupt `projections` with `motions`, interpreted in the [`ExportFrame`]
pub fn corrupt_projections(projections: &[ProjectionMatrix], motions: &[MotionVector]) -> Result<Corrupted, Error> {
    corrupt_projections_in::<ExportFrame>(projections, motions)
}

/// Like [`corrupt_projections`], but with views distributed over the rayon
/// thread pool. Results are identical, bit for bit, and in input order.
pub fn par_corrupt_projections(projections: &[ProjectionMatrix], motions: &[MotionVector]) -> Result<Corrupted, Error> {
    par_corrupt_projections_in::<ExportFrame>(projections, motions)
}

pub fn corrupt_projections_in<F: MotionToAffine>(
    projections: &[ProjectionMatrix],
    motions    : &[MotionVector],
) -> Result<Corrupted, Error> {
    let motions = aligned_motions(projections, motions)?;
    let (projections, affines) = projections.iter()
        .zip(motions)
        .map(corrupt_one::<F>)
        .unzip();
    Ok(Corrupted { projections, affines })
}

pub fn par_corrupt_projections_in<F: MotionToAffine>(
    projections: &[ProjectionMatrix],
    motions    : &[MotionVector],
) -> Result<Corrupted, Error> {
    let motions = aligned_motions(projections, motions)?;
    let (projections, affines) = projections.par_iter()
        .zip(motions.par_iter())
        .map(corrupt_one::<F>)
        .unzip();
    Ok(Corrupted { projections, affines })
}

/// Corrupt `projections` with the rows of an `N × 6` motion table,
/// interpreted in the [`ExportFrame`]
pub fn corrupt_projections_from_array(projections: &[ProjectionMatrix], motions: ArrayView2<f64>) -> Result<Corrupted, Error> {
    let motions = motions_from_array(motions)?;
    corrupt_projections(projections, &motions)
}

/// The prefix of `motions` which pairs up with `projections`
fn aligned_motions<'m>(projections: &[ProjectionMatrix], motions: &'m [MotionVector]) -> Result<&'m [MotionVector], Error> {
    let len = motions.len();
    if len < projections.len() {
        return Err(Error::IndexOutOfRange { index: len, len })
    }
    Ok(&motions[..projections.len()])
}

fn corrupt_one<F: MotionToAffine>((projection, motion): (&ProjectionMatrix, &MotionVector)) -> (ProjectionMatrix, AffineMatrix) {
    let affine = F::affine_from_motion(motion);
    (projection * &affine, affine)
}
