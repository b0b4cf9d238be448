// ----------------------------------- CLI -----------------------------------
#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "corrupt_pmats", about = "Apply recorded subject motion to projection matrices")]
pub struct Cli {

    /// TOML configuration file
    pub config_file: PathBuf,

    /// Maximum number of rayon threads, overrides `threads` in the config file
    #[clap(short = 'j', long)]
    pub threads: Option<usize>,

    /// Process views one after the other, without rayon
    #[clap(long)]
    pub serial: bool,
}

// ----- Imports -----------------------------------------------------------------------------------------
use std::path::PathBuf;
