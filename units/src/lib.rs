//! Typed physical quantities used throughout the motion pipeline.
//!
//! Motion vectors arrive as bare `f64`s: translations in millimetres and
//! rotations in degrees. Inside the crate they travel as `uom` quantities, so
//! that a translation can never be fed to a trigonometric function, nor an
//! angle be written into a translation column.

pub mod todo;

pub use uom::si::f64::{Angle, Length};

mod units {
  pub use uom::si::{length::millimeter,
                    angle ::{degree, radian},
  };
}

// Making values from float literals is very long-winded, so provide some
// pithily-named convenience constructors.

/// Generate a function called NAME which returns QUANTITY by interpreting its
/// argument as UNIT
///
/// wrap!(NAME QUANTITY UNIT);
macro_rules! wrap {
  ($name:ident $quantity:ident $unit:ident ) => {
    pub fn $name(x: f64) -> $quantity { $quantity::new::<units::$unit>(x) }
  };
}

wrap!(mm     Length millimeter);
wrap!(deg    Angle      degree);
wrap!(radian Angle      radian);

// Reverse direction of the above.
pub fn mm_    (x: Length) -> f64 { x.get::<units::millimeter>() }
pub fn deg_   (x: Angle ) -> f64 { x.get::<units::degree>() }
pub fn radian_(x: Angle ) -> f64 { x.get::<units::radian>() }

/// Sine and cosine of `angle`, evaluated in radians
pub fn sin_cos(angle: Angle) -> (f64, f64) { radian_(angle).sin_cos() }

#[macro_export]
macro_rules! assert_uom_eq {
  ($unit:ident, $lhs:expr, $rhs:expr, $algo:ident <= $tol:expr) => {
    float_eq::assert_float_eq!($lhs.get::<$unit>(), $rhs.get::<$unit>(), $algo <= $tol)
  };
}
