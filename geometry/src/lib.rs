mod error;
mod rotation;
mod affine;
mod projection;

pub use error::DimensionError;
pub use rotation::{RotationMatrix, build_rotation, rotation_to_euler};
pub use affine::AffineMatrix;
pub use projection::ProjectionMatrix;

pub use nalgebra as na;

/// Tolerance used when checking that a matrix is a proper rotation
pub const ROTATION_EPS: f64 = 1e-9;
