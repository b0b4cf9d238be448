//! Voxel volumes which accompany the projection geometry: loading, cropping
//! to the occupied region, flipping and intensity rescaling.
//!
//! Volumes are indexed `[z, y, x]`.

use std::path::Path;

use ndarray::{s, Array3, ArrayView3, Axis};
use num_traits::Zero;

use geometry::DimensionError;
use units::todo::Intensityf32;

use crate::error::Error;
use crate::io::raw;

/// Anything that can produce a volume of intensities from a file
pub trait VolumeSource {
    fn load(&self, path: &Path) -> Result<Array3<Intensityf32>, Error>;
}

/// Headerless little-endian `f32` voxels, `x` varying fastest
#[derive(Clone, Copy, Debug)]
pub struct RawVolume {
    /// `[nz, ny, nx]`
    pub shape: [usize; 3],
}

impl VolumeSource for RawVolume {
    fn load(&self, path: &Path) -> Result<Array3<Intensityf32>, Error> {
        let data = raw::read_all::<f32>(path)?;
        let [nz, ny, nx] = self.shape;
        DimensionError::check("voxels in volume file", nz * ny * nx, data.len())?;
        Ok(Array3::from_shape_vec((nz, ny, nx), data)?)
    }
}

/// Inclusive, axis-aligned `[z, y, x]` index bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: [usize; 3],
    pub max: [usize; 3],
}

impl BoundingBox {
    fn around(index: [usize; 3]) -> Self { Self { min: index, max: index } }

    fn include(mut self, index: [usize; 3]) -> Self {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(index[axis]);
            self.max[axis] = self.max[axis].max(index[axis]);
        }
        self
    }

    pub fn shape(&self) -> [usize; 3] {
        [0, 1, 2].map(|axis| self.max[axis] - self.min[axis] + 1)
    }
}

/// Smallest box containing every non-zero voxel, `None` if there are none.
///
/// Single pass: every non-zero voxel may widen both ends of the box on every
/// axis.
pub fn bounding_box<T: Zero>(volume: &ArrayView3<T>) -> Option<BoundingBox> {
    volume.indexed_iter()
        .filter(|(_, v)| !v.is_zero())
        .map(|((z, y, x), _)| [z, y, x])
        .fold(None, |bbox: Option<BoundingBox>, index| Some(match bbox {
            None       => BoundingBox::around(index),
            Some(bbox) => bbox.include(index),
        }))
}

/// View of the part of `volume` inside its [`bounding_box`]
pub fn crop<'a, T: Zero>(volume: &ArrayView3<'a, T>) -> Option<ArrayView3<'a, T>> {
    let BoundingBox { min, max } = bounding_box(volume)?;
    Some(volume.clone().slice_move(s![min[0]..=max[0], min[1]..=max[1], min[2]..=max[2]]))
}

/// Turn the volume on its head: reverse the `z` and `y` axes, leave `x` alone.
pub fn turn_upside_down<T: Clone>(volume: &ArrayView3<T>) -> Array3<T> {
    let mut flipped = volume.view();
    flipped.invert_axis(Axis(0));
    flipped.invert_axis(Axis(1));
    flipped.to_owned()
}

/// Map intensities linearly from `from` onto `to`, clamping values outside
/// `from`. When `from` is not given, the volume's own min/max are used.
pub fn rescale(volume: &ArrayView3<f32>, from: Option<(f32, f32)>, to: (f32, f32)) -> Array3<f32> {
    let (lo, hi) = from.unwrap_or_else(|| min_max(volume));
    let (to_lo, to_hi) = to;
    volume.mapv(|v| {
        if      v <= lo { to_lo }
        else if v >= hi { to_hi }
        else            { to_lo + (v - lo) * (to_hi - to_lo) / (hi - lo) }
    })
}

/// [`rescale`] onto `0..=255`, truncating towards zero like a C cast
pub fn rescale_to_u8(volume: &ArrayView3<f32>, from: Option<(f32, f32)>) -> Array3<u8> {
    rescale(volume, from, (0.0, 255.0)).mapv(|v| v as u8)
}

fn min_max(volume: &ArrayView3<f32>) -> (f32, f32) {
    volume.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
