/// Quantities which are simply type aliases for `f64` rather than having an
/// implementation as a `uom` `Quantity`.
///
/// Voxel intensities have no physical unit that survives the trip through an
/// arbitrary scanner export, and matrix elements mix lengths with
/// dimensionless rotation coefficients, so we use plain floats but still want
/// some clues in the source as to what they represent.

pub type Intensityf32 = f32;
pub type Elementf64   = f64;
