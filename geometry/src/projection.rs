//! Projection matrices: one `n × 4` matrix per acquired view

use std::ops::Mul;

use nalgebra as na;

use crate::{AffineMatrix, DimensionError};

type Storage = na::OMatrix<f64, na::Dyn, na::U4>;

/// Maps homogeneous world coordinates onto (homogeneous) detector coordinates
/// for a single view. Usually 3×4, but any number of rows is accepted. The
/// column count is fixed at 4, so that every projection matrix can be
/// right-multiplied by a 4×4 [`AffineMatrix`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionMatrix(Storage);

impl ProjectionMatrix {

    /// Build from `rows × cols` elements given row by row.
    ///
    /// Fails unless `cols == 4` and `data` holds exactly `rows * cols` values.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self, DimensionError> {
        DimensionError::check("projection matrix columns", 4, cols)?;
        DimensionError::check("projection matrix elements", rows * cols, data.len())?;
        Ok(Self(Storage::from_row_slice_generic(na::Dyn(rows), na::Const::<4>, data)))
    }

    pub fn from_rows(rows: &[[f64; 4]]) -> Self {
        let data = rows.iter().flatten().copied().collect::<Vec<_>>();
        Self(Storage::from_row_slice_generic(na::Dyn(rows.len()), na::Const::<4>, &data))
    }

    pub fn nrows(&self) -> usize { self.0.nrows() }

    pub fn as_matrix(&self) -> &Storage { &self.0 }

    /// All elements, row by row
    pub fn to_row_major(&self) -> Vec<f64> {
        self.0.transpose().iter().copied().collect()
    }

    /// `self · affine`: the projection seen by a subject that has undergone
    /// the rigid motion described by `affine`
    pub fn transformed_by(&self, affine: &AffineMatrix) -> Self {
        Self(&self.0 * affine.as_matrix())
    }
}

impl From<na::Matrix3x4<f64>> for ProjectionMatrix {
    fn from(m: na::Matrix3x4<f64>) -> Self {
        Self(Storage::from_fn_generic(na::Dyn(3), na::Const::<4>, |r, c| m[(r, c)]))
    }
}

impl Mul<&AffineMatrix> for &ProjectionMatrix {
    type Output = ProjectionMatrix;
    fn mul(self, rhs: &AffineMatrix) -> Self::Output { self.transformed_by(rhs) }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::build_rotation;
    use float_eq::assert_float_eq;
    #[allow(unused)] use pretty_assertions::{assert_eq, assert_ne};
    use rstest::rstest;
    use units::deg;

    fn sample() -> ProjectionMatrix {
        ProjectionMatrix::from_rows(&[
            [1000.0,    0.0, 256.0, 0.0],
            [   0.0, 1000.0, 256.0, 0.0],
            [   0.0,    0.0,   1.0, 0.0],
        ])
    }

    #[rstest(/**/ rows, cols, len,    what                     ,
             case(  3 ,  3  ,  9 , "projection matrix columns" ),
             case(  3 ,  5  , 15 , "projection matrix columns" ),
             case(  3 ,  4  , 11 , "projection matrix elements"),
             case(  2 ,  4  , 12 , "projection matrix elements"),
    )]
    fn shape_mismatch_is_rejected(rows: usize, cols: usize, len: usize, what: &str) {
        let data = vec![0.0; len];
        let err = ProjectionMatrix::from_row_slice(rows, cols, &data).unwrap_err();
        assert_eq!(err.what, what);
    }

    #[test]
    fn row_slice_is_read_row_by_row() {
        let data = (0..12).map(f64::from).collect::<Vec<_>>();
        let p = ProjectionMatrix::from_row_slice(3, 4, &data).unwrap();
        assert_eq!(p.nrows(), 3);
        assert_eq!(p.as_matrix()[(0, 1)], 1.0);
        assert_eq!(p.as_matrix()[(1, 0)], 4.0);
        assert_eq!(p.to_row_major(), data);
    }

    #[test]
    fn any_row_count_is_accepted() {
        let p = ProjectionMatrix::from_row_slice(5, 4, &[1.0; 20]).unwrap();
        let q = &p * &AffineMatrix::identity();
        assert_eq!(q.nrows(), 5);
        assert_eq!(q, p);
    }

    #[test]
    fn from_fixed_size_matrix() {
        let m = na::Matrix3x4::new(1.0,  2.0,  3.0,  4.0,
                                   5.0,  6.0,  7.0,  8.0,
                                   9.0, 10.0, 11.0, 12.0);
        let p = ProjectionMatrix::from(m);
        assert_eq!(p.to_row_major(), (1..=12).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn product_puts_projection_on_the_left() {
        let p = sample();
        let a = AffineMatrix::from_rotation_translation(
            build_rotation(deg(0.0), deg(0.0), deg(90.0)),
            [10.0, 0.0, 0.0],
        );
        let got = &p * &a;
        let expected = p.as_matrix() * a.as_matrix();
        assert_float_eq!(got.to_row_major(),
                         expected.transpose().iter().copied().collect::<Vec<_>>(),
                         abs_all <= 1e-9);
        // Translation picks up the first column of P
        assert_float_eq!(got.as_matrix()[(0, 3)], 10_000.0, abs <= 1e-9);
    }
}
