//! Configuration file parser for `corrupt_pmats`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

/// Which remap table turns motion vectors into affine matrices
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    #[default]
    Export,
    Reconstruction,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {

    /// Raw `f64` file containing the nominal projection matrices
    pub projections: PathBuf,

    /// Raw `f64` file containing one 6-element motion vector per view
    pub motions: PathBuf,

    /// Number of rows in each projection matrix
    #[serde(default = "default_rows")]
    pub rows: usize,

    #[serde(default)]
    pub frame: Frame,

    /// Directory in which the corrupted projections and affines are written
    pub output: PathBuf,

    /// Maximum number of rayon threads
    pub threads: Option<usize>,
}

fn default_rows() -> usize { 3 }

pub fn read_config_file(path: &Path) -> Result<Config, Error> {
    let config: String = fs::read_to_string(path)?;
    toml::from_str(&config).map_err(|source| Error::Config { path: path.into(), source })
}
