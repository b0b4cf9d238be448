pub use geometry::{
    AffineMatrix, ProjectionMatrix, RotationMatrix, DimensionError,
    build_rotation, rotation_to_euler,
};

pub use units::{Angle, Length};
pub use units::todo::{Intensityf32, Elementf64};

pub use crate::error::Error;
pub use crate::motion::{MotionVector, MotionToAffine, ExportFrame, ReconstructionFrame,
                        affine_for_export, affine_for_reconstruction};
pub use crate::corrupt::{Corrupted, corrupt_projections, par_corrupt_projections};

pub type Result<T> = std::result::Result<T, Error>;
