mod exports;
pub use exports::*;

pub mod error;
pub mod motion;
pub mod corrupt;
pub mod volume;
pub mod io;
pub mod utils;
pub mod config;
