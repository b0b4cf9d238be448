//! On-disk projection and motion lists.
//!
//! Both are stored as raw little-endian `f64` streams:
//!
//! + projections: `n_views × rows × 4` values, each matrix row by row
//! + motions: `n_views × 6` values, in [`MotionVector`] order
//! + affines (output only): `n_views × 16` values, each matrix row by row

pub mod raw;

use std::path::Path;

use geometry::{AffineMatrix, DimensionError, ProjectionMatrix};
use units::todo::Elementf64;

use crate::error::Error;
use crate::motion::{MotionVector, MOTION_DOF};

/// Split `data` into chunks of `chunk` values, insisting that nothing is left over
fn exact_chunks<'d>(what: &'static str, data: &'d [f64], chunk: usize) -> Result<std::slice::ChunksExact<'d, f64>, DimensionError> {
    let chunks = data.chunks_exact(chunk.max(1));
    if !chunks.remainder().is_empty() {
        let expected = (data.len() / chunk + 1) * chunk;
        return Err(DimensionError::new(what, expected, data.len()))
    }
    Ok(chunks)
}

pub fn read_projections(path: &Path, rows: usize) -> Result<Vec<ProjectionMatrix>, Error> {
    let data = raw::read_all::<Elementf64>(path)?;
    exact_chunks("values in projection file", &data, rows * 4)?
        .map(|m| ProjectionMatrix::from_row_slice(rows, 4, m).map_err(Error::from))
        .collect()
}

pub fn read_motions(path: &Path) -> Result<Vec<MotionVector>, Error> {
    let data = raw::read_all::<Elementf64>(path)?;
    exact_chunks("values in motion file", &data, MOTION_DOF)?
        .map(|m| MotionVector::try_from(m).map_err(Error::from))
        .collect()
}

pub fn write_projections(path: &Path, projections: &[ProjectionMatrix]) -> Result<(), Error> {
    let data = projections.iter().flat_map(ProjectionMatrix::to_row_major);
    Ok(raw::write(data, path)?)
}

pub fn write_affines(path: &Path, affines: &[AffineMatrix]) -> Result<(), Error> {
    let data = affines.iter().flat_map(AffineMatrix::to_row_major);
    Ok(raw::write(data, path)?)
}
