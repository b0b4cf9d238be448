mod cli;
use cli::*;

fn main() -> Result<(), Box<dyn Error>> {

    let Cli { config_file, threads, serial } = Cli::parse();

    let mut progress = Progress::new();

    progress.start(&format!("Reading config {config_file:?}"));
    let config = read_config_file(&config_file)?;
    progress.done();

    if let Some(n) = threads.or(config.threads) {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }

    progress.start(&format!("Reading projection matrices from {:?}", config.projections));
    let projections = io::read_projections(&config.projections, config.rows)?;
    progress.done();

    progress.start(&format!("Reading motion vectors from {:?}", config.motions));
    let motions = io::read_motions(&config.motions)?;
    progress.done();

    if motions.len() > projections.len() {
        println!("Ignoring {} surplus motion vectors", group_digits(motions.len() - projections.len()));
    }

    progress.start(&format!("Corrupting {} projections ({:?} frame)", group_digits(projections.len()), config.frame));
    let corrupted = match (config.frame, serial) {
        (Frame::Export        , false) => par_corrupt_projections_in::<ExportFrame        >(&projections, &motions),
        (Frame::Export        , true ) =>     corrupt_projections_in::<ExportFrame        >(&projections, &motions),
        (Frame::Reconstruction, false) => par_corrupt_projections_in::<ReconstructionFrame>(&projections, &motions),
        (Frame::Reconstruction, true ) =>     corrupt_projections_in::<ReconstructionFrame>(&projections, &motions),
    }?;
    progress.done();

    create_dir_all(&config.output)?;
    let pmats_path   = config.output.join("corrupted_pmats.raw");
    let affines_path = config.output.join("affines.raw");

    progress.start(&format!("Writing {pmats_path:?} and {affines_path:?}"));
    io::write_projections(&pmats_path  , &corrupted.projections)?;
    io::write_affines    (&affines_path, &corrupted.affines)?;
    progress.done();

    report_largest_rotation(&corrupted.affines);
    Ok(())
}

/// Summarize the motion by the view whose affine rotates furthest from the
/// nominal orientation
fn report_largest_rotation(affines: &[AffineMatrix]) {
    let angles = affines.iter()
        .map(|affine| affine.to_isometry().rotation.angle().to_degrees())
        .collect::<Vec<_>>();
    if let Some(view) = angles.iter().position_max_by(|a, b| a.total_cmp(b)) {
        println!("Largest rotation: {:.3}° in view {view}", angles[view]);
    }
}

// ----- Imports -----------------------------------------------------------------------------------------
use std::error::Error;
use std::fs::create_dir_all;

use clap::Parser;
use itertools::Itertools;

use pmotion::{
    AffineMatrix, ExportFrame, ReconstructionFrame,
    io,
    config::corrupt::{read_config_file, Frame},
    corrupt::{corrupt_projections_in, par_corrupt_projections_in},
    utils::{group_digits, timing::Progress},
};
