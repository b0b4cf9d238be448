use std::path::PathBuf;

use geometry::DimensionError;

#[derive(Debug, thiserror::Error)]
pub enum Error {

    /// The motion list ran out before the projection list did
    #[error("no motion vector for projection {index}: only {len} motion vectors were supplied")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    InvalidDimension(#[from] DimensionError),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not parse config file `{path:?}`: {source}")]
    Config { path: PathBuf, source: toml::de::Error },
}
