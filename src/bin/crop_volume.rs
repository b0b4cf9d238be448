// ----------------------------------- CLI -----------------------------------
#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "crop_volume", about = "Crop a raw volume to the bounding box of its non-zero voxels")]
pub struct Cli {

    /// Raw little-endian f32 volume
    pub input: PathBuf,

    /// Volume dimensions as 'nz,ny,nx'
    #[clap(short, long, value_parser = parse_triplet::<usize>)]
    pub shape: (usize, usize, usize),

    /// Where to write the cropped volume
    #[clap(short, long)]
    pub output: PathBuf,

    /// Turn the volume upside down before cropping
    #[clap(long)]
    pub upside_down: bool,

    /// Write 8-bit voxels, rescaled from the volume's intensity range
    #[clap(long = "u8")]
    pub eight_bit: bool,
}

fn main() -> Result<(), Box<dyn Error>> {

    let Cli { input, shape: (nz, ny, nx), output, upside_down, eight_bit } = Cli::parse();

    let mut progress = Progress::new();

    progress.start(&format!("Reading {nz}×{ny}×{nx} volume {input:?}"));
    let mut volume = RawVolume { shape: [nz, ny, nx] }.load(&input)?;
    progress.done();

    if upside_down {
        let flipped = turn_upside_down(&volume.view());
        volume = flipped;
    }

    let view = volume.view();
    let Some(cropped) = crop(&view) else {
        return Err(format!("{input:?} contains no non-zero voxels").into())
    };
    println!("Cropped to {:?}", cropped.shape());

    progress.start(&format!("Writing {output:?}"));
    if eight_bit {
        let bytes = rescale_to_u8(&cropped, None);
        std::fs::write(&output, bytes.iter().copied().collect::<Vec<u8>>())?;
    } else {
        raw::write(cropped.iter().copied(), &output)?;
    }
    progress.done();

    Ok(())
}

// ----- Imports -----------------------------------------------------------------------------------------
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use pmotion::{
    io::raw,
    utils::{parse_triplet, timing::Progress},
    volume::{RawVolume, VolumeSource, crop, rescale_to_u8, turn_upside_down},
};
