use std::ops::{Index, IndexMut, Mul};

use lazy_static::lazy_static;

use super::{MathError, Tuple, MATRIX_EPSILON};

lazy_static! {
    /// The shared, immutable 4x4 identity matrix. Default transform for
    /// shapes and cameras.
    pub static ref IDENTITY: Matrix = Matrix::identity(4);
}

/// A rows x cols matrix of f64, stored row-major. Arbitrary dimensions are
/// supported, but everything the renderer does goes through 4x4 affine
/// transforms.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    elements: Vec<f64>,
}

impl Matrix {
    /// Instantiate a new zero-filled matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: vec![0.; rows * cols],
        }
    }

    /// Instantiate a matrix from an array of rows.
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            elements: rows.iter().flatten().copied().collect(),
        }
    }

    /// The size x size identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::new(size, size);
        for i in 0..size {
            m[(i, i)] = 1.;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// A translation by (x, y, z). Moves points, leaves vectors alone.
    #[rustfmt::skip]
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::from_rows([
            [1., 0., 0., x],
            [0., 1., 0., y],
            [0., 0., 1., z],
            [0., 0., 0., 1.],
        ])
    }

    /// A scaling by (x, y, z).
    #[rustfmt::skip]
    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        Self::from_rows([
            [x,  0., 0., 0.],
            [0., y,  0., 0.],
            [0., 0., z,  0.],
            [0., 0., 0., 1.],
        ])
    }

    /// A right-handed rotation about the x axis, in radians.
    #[rustfmt::skip]
    pub fn rotation_x(r: f64) -> Self {
        Self::from_rows([
            [1., 0.,      0.,       0.],
            [0., r.cos(), -r.sin(), 0.],
            [0., r.sin(), r.cos(),  0.],
            [0., 0.,      0.,       1.],
        ])
    }

    /// A right-handed rotation about the y axis, in radians.
    #[rustfmt::skip]
    pub fn rotation_y(r: f64) -> Self {
        Self::from_rows([
            [r.cos(),  0., r.sin(), 0.],
            [0.,       1., 0.,      0.],
            [-r.sin(), 0., r.cos(), 0.],
            [0.,       0., 0.,      1.],
        ])
    }

    /// A right-handed rotation about the z axis, in radians.
    #[rustfmt::skip]
    pub fn rotation_z(r: f64) -> Self {
        Self::from_rows([
            [r.cos(), -r.sin(), 0., 0.],
            [r.sin(), r.cos(),  0., 0.],
            [0.,      0.,       1., 0.],
            [0.,      0.,       0., 1.],
        ])
    }

    /// A shear, one coefficient per axis-pair contribution (x in proportion
    /// to y, x to z, y to x, y to z, z to x, z to y).
    #[rustfmt::skip]
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        Self::from_rows([
            [1., xy, xz, 0.],
            [yx, 1., yz, 0.],
            [zx, zy, 1., 0.],
            [0., 0., 0., 1.],
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut m = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                m[(j, i)] = self[(i, j)];
            }
        }
        m
    }

    /// Divide every element by a scalar.
    pub fn div(&self, scalar: f64) -> Result<Self, MathError> {
        if scalar == 0. {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            elements: self.elements.iter().map(|e| e / scalar).collect(),
        })
    }

    fn require_square(&self) -> Result<(), MathError> {
        if self.rows != self.cols {
            return Err(MathError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// The determinant: the 2x2 product rule at the base, cofactor
    /// expansion along the first row above that.
    pub fn determinant(&self) -> Result<f64, MathError> {
        self.require_square()?;

        if self.rows == 2 {
            return Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]);
        }

        let mut determinant = 0.;
        for col in 0..self.cols {
            determinant += self[(0, col)] * self.cofactor(0, col)?;
        }
        Ok(determinant)
    }

    /// A copy of this matrix with one row and one column deleted.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        let mut m = Self::new(self.rows - 1, self.cols - 1);
        let mut out = 0;
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                m.elements[out] = self[(i, j)];
                out += 1;
            }
        }
        m
    }

    /// The determinant of the submatrix at (row, col).
    pub fn minor(&self, row: usize, col: usize) -> Result<f64, MathError> {
        self.submatrix(row, col).determinant()
    }

    /// The minor at (row, col), negated when row + col is odd.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64, MathError> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    pub fn is_invertible(&self) -> bool {
        matches!(self.determinant(), Ok(d) if d != 0.)
    }

    /// Invert via the adjugate: the transposed cofactor matrix over the
    /// determinant. Always runs the general cofactor path, even for pure
    /// translations.
    pub fn inverse(&self) -> Result<Self, MathError> {
        self.require_square()?;

        let determinant = self.determinant()?;
        if determinant == 0. {
            return Err(MathError::NotInvertible);
        }

        let mut adjugate = Self::new(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                // transposed assignment folds the adjugate step in
                adjugate[(j, i)] = self.cofactor(i, j)?;
            }
        }
        adjugate.div(determinant)
    }

    /// Matrix product, checked: fails with a dimension mismatch when
    /// `self.cols != rhs.rows`.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MathError> {
        if self.cols != rhs.rows {
            return Err(MathError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }
        Ok(self.mul_unchecked(rhs))
    }

    /// Matrix-tuple product, checked: the matrix must be 4x4.
    pub fn try_mul_tuple(&self, rhs: Tuple) -> Result<Tuple, MathError> {
        if self.rows != 4 || self.cols != 4 {
            return Err(MathError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: 4,
                right_cols: 1,
            });
        }
        Ok(self.mul_tuple_unchecked(rhs))
    }

    fn mul_unchecked(&self, rhs: &Self) -> Self {
        let mut m = Self::new(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                for k in 0..self.cols {
                    m[(i, j)] += self[(i, k)] * rhs[(k, j)];
                }
            }
        }
        m
    }

    fn mul_tuple_unchecked(&self, rhs: Tuple) -> Tuple {
        let column = [rhs.x, rhs.y, rhs.z, rhs.w];
        let mut out = [0.; 4];
        for (i, slot) in out.iter_mut().enumerate() {
            for (k, component) in column.iter().enumerate() {
                *slot += self[(i, k)] * component;
            }
        }
        Tuple::new(out[0], out[1], out[2], out[3])
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row * self.cols + col]
    }
}

/// Equality within [`MATRIX_EPSILON`] per element.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| (a - b).abs() <= MATRIX_EPSILON)
    }
}

/// Unchecked product for the 4x4 transform path.
///
/// # Panics
///
/// Panics when the dimensions are incompatible; use [`Matrix::try_mul`] for
/// a recoverable check.
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            self.cols, rhs.rows,
            "matrix dimensions incompatible for multiplication"
        );
        self.mul_unchecked(rhs)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

/// Unchecked matrix-tuple product, treating the Tuple as a column vector.
///
/// # Panics
///
/// Panics unless the matrix is 4x4; use [`Matrix::try_mul_tuple`] for a
/// recoverable check.
impl Mul<Tuple> for &Matrix {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        assert_eq!(
            (self.rows, self.cols),
            (4, 4),
            "matrix must be 4x4 to multiply with a tuple"
        );
        self.mul_tuple_unchecked(rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn constructing_and_inspecting_a_4x4_matrix() {
        let m = Matrix::from_rows([
            [1., 2., 3., 4.],
            [5.5, 6.5, 7.5, 8.5],
            [9., 10., 11., 12.],
            [13.5, 14.5, 15.5, 16.5],
        ]);
        assert_eq!(m[(0, 0)], 1.);
        assert_eq!(m[(0, 3)], 4.);
        assert_eq!(m[(1, 0)], 5.5);
        assert_eq!(m[(1, 2)], 7.5);
        assert_eq!(m[(2, 2)], 11.);
        assert_eq!(m[(3, 0)], 13.5);
        assert_eq!(m[(3, 2)], 15.5);
    }

    #[test]
    fn smaller_matrices_are_representable() {
        let m = Matrix::from_rows([[-3., 5.], [1., -2.]]);
        assert_eq!(m[(0, 0)], -3.);
        assert_eq!(m[(1, 1)], -2.);

        let m = Matrix::from_rows([[-3., 5., 0.], [1., -2., -7.], [0., 1., 1.]]);
        assert_eq!(m[(0, 0)], -3.);
        assert_eq!(m[(1, 1)], -2.);
        assert_eq!(m[(2, 2)], 1.);
    }

    #[test]
    fn matrix_equality_with_identical_and_different_matrices() {
        let a = Matrix::from_rows([
            [1., 2., 3., 4.],
            [5., 6., 7., 8.],
            [9., 8., 7., 6.],
            [5., 4., 3., 2.],
        ]);
        let b = a.clone();
        assert_eq!(a, b);

        let c = Matrix::from_rows([
            [2., 3., 4., 5.],
            [6., 7., 8., 9.],
            [7., 6., 5., 4.],
            [3., 2., 1., 0.],
        ]);
        assert_ne!(a, c);
    }

    #[test]
    fn multiplying_two_matrices() {
        let a = Matrix::from_rows([
            [1., 2., 3., 4.],
            [5., 6., 7., 8.],
            [9., 8., 7., 6.],
            [5., 4., 3., 2.],
        ]);
        let b = Matrix::from_rows([
            [-2., 1., 2., 3.],
            [3., 2., 1., -1.],
            [4., 3., 6., 5.],
            [1., 2., 7., 8.],
        ]);
        let expected = Matrix::from_rows([
            [20., 22., 50., 48.],
            [44., 54., 114., 108.],
            [40., 58., 110., 102.],
            [16., 26., 46., 42.],
        ]);
        assert_eq!(&a * &b, expected);
    }

    #[test]
    fn multiplying_mismatched_dimensions_fails() {
        let a = Matrix::from_rows([[1., 2.], [3., 4.]]);
        let b = Matrix::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
        assert!(matches!(
            a.try_mul(&b),
            Err(MathError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn multiplying_a_matrix_by_a_tuple() {
        let a = Matrix::from_rows([
            [1., 2., 3., 4.],
            [2., 4., 4., 2.],
            [8., 6., 4., 1.],
            [0., 0., 0., 1.],
        ]);
        let b = Tuple::new(1., 2., 3., 1.);
        assert_eq!(&a * b, Tuple::new(18., 24., 33., 1.));
    }

    #[test]
    fn tuple_multiplication_requires_a_4x4_matrix() {
        let a = Matrix::from_rows([[1., 2.], [3., 4.]]);
        assert!(matches!(
            a.try_mul_tuple(Tuple::point(1., 2., 3.)),
            Err(MathError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn multiplying_by_the_identity_matrix() {
        let a = Matrix::from_rows([
            [0., 1., 2., 4.],
            [1., 2., 4., 8.],
            [2., 4., 8., 16.],
            [4., 8., 16., 32.],
        ]);
        assert_eq!(&a * &*IDENTITY, a);

        let t = Tuple::new(1., 2., 3., 4.);
        assert_eq!(&*IDENTITY * t, t);
    }

    #[test]
    fn transposing_a_matrix() {
        let a = Matrix::from_rows([
            [0., 9., 3., 0.],
            [9., 8., 0., 8.],
            [1., 8., 5., 3.],
            [0., 0., 5., 8.],
        ]);
        let expected = Matrix::from_rows([
            [0., 9., 1., 0.],
            [9., 8., 8., 0.],
            [3., 0., 5., 5.],
            [0., 8., 3., 8.],
        ]);
        assert_eq!(a.transpose(), expected);
        assert_eq!(IDENTITY.transpose(), *IDENTITY);
    }

    #[test]
    fn dividing_a_matrix_by_a_scalar() {
        let m = Matrix::from_rows([[2., 4.], [6., 8.]]);
        assert_eq!(m.div(2.).unwrap(), Matrix::from_rows([[1., 2.], [3., 4.]]));
    }

    #[test]
    fn dividing_a_matrix_by_zero_fails() {
        let m = Matrix::from_rows([[1., 2.], [3., 4.]]);
        assert_eq!(m.div(0.), Err(MathError::DivisionByZero));
    }

    #[test]
    fn determinant_of_a_2x2_matrix() {
        let m = Matrix::from_rows([[1., 5.], [-3., 2.]]);
        assert_eq!(m.determinant(), Ok(17.));
    }

    #[test]
    fn determinant_of_a_non_square_matrix_fails() {
        let m = Matrix::new(2, 3);
        assert_eq!(m.determinant(), Err(MathError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn submatrix_of_a_3x3_is_a_2x2() {
        let m = Matrix::from_rows([[1., 5., 0.], [-3., 2., 7.], [0., 6., -3.]]);
        assert_eq!(m.submatrix(0, 2), Matrix::from_rows([[-3., 2.], [0., 6.]]));
    }

    #[test]
    fn submatrix_of_a_4x4_is_a_3x3() {
        let m = Matrix::from_rows([
            [-6., 1., 1., 6.],
            [-8., 5., 8., 6.],
            [-1., 0., 8., 2.],
            [-7., 1., -1., 1.],
        ]);
        let expected = Matrix::from_rows([[-6., 1., 6.], [-8., 8., 6.], [-7., -1., 1.]]);
        assert_eq!(m.submatrix(2, 1), expected);
    }

    #[test]
    fn minor_and_cofactor_of_a_3x3_matrix() {
        let m = Matrix::from_rows([[3., 5., 0.], [2., -1., -7.], [6., -1., 5.]]);
        assert_eq!(m.minor(1, 0), Ok(25.));
        assert_eq!(m.cofactor(0, 0), Ok(-12.));
        assert_eq!(m.cofactor(1, 0), Ok(-25.));
    }

    #[test]
    fn determinants_of_larger_matrices() {
        let m = Matrix::from_rows([[1., 2., 6.], [-5., 8., -4.], [2., 6., 4.]]);
        assert_eq!(m.determinant(), Ok(-196.));

        let m = Matrix::from_rows([
            [-2., -8., 3., 5.],
            [-3., 1., 7., 3.],
            [1., 2., -9., 6.],
            [-6., 7., 7., -9.],
        ]);
        assert_eq!(m.determinant(), Ok(-4071.));
    }

    #[test]
    fn testing_matrices_for_invertibility() {
        let a = Matrix::from_rows([
            [6., 4., 4., 4.],
            [5., 5., 7., 6.],
            [4., -9., 3., -7.],
            [9., 1., 7., -6.],
        ]);
        assert_eq!(a.determinant(), Ok(-2120.));
        assert!(a.is_invertible());

        let a = Matrix::from_rows([
            [-4., 2., -2., -3.],
            [9., 6., 2., 6.],
            [0., -5., 1., -5.],
            [0., 0., 0., 0.],
        ]);
        assert_eq!(a.determinant(), Ok(0.));
        assert!(!a.is_invertible());
        assert_eq!(a.inverse(), Err(MathError::NotInvertible));
    }

    #[test]
    fn multiplying_a_product_by_an_inverse_undoes_the_product() {
        let a = Matrix::from_rows([
            [3., -9., 7., 3.],
            [3., -8., 2., -9.],
            [-4., 4., 4., 1.],
            [-6., 5., -1., 1.],
        ]);
        let b = Matrix::from_rows([
            [8., 2., 2., 2.],
            [3., -1., 7., 0.],
            [7., 0., 5., 4.],
            [6., -2., 0., 5.],
        ]);
        let c = &a * &b;
        assert_eq!(&c * &b.inverse().unwrap(), a);
    }

    #[test]
    fn a_matrix_times_its_inverse_is_the_identity() {
        let a = Matrix::from_rows([
            [3., -9., 7., 3.],
            [3., -8., 2., -9.],
            [-4., 4., 4., 1.],
            [-6., 5., -1., 1.],
        ]);
        assert_eq!(&a * &a.inverse().unwrap(), *IDENTITY);
    }

    #[test]
    fn a_translation_with_a_nonzero_rotation_block_is_not_shortcut() {
        // a rotation composed with a translation has a nonzero fourth
        // column but is not a pure translation; its inverse must still
        // round-trip
        let m = &Matrix::translation(5., -3., 2.) * &Matrix::rotation_y(PI / 3.);
        assert_eq!(&m * &m.inverse().unwrap(), *IDENTITY);
    }

    #[test]
    fn translating_a_point() {
        let transform = Matrix::translation(5., -3., 2.);
        let p = Tuple::point(-3., 4., 5.);
        assert_eq!(&transform * p, Tuple::point(2., 1., 7.));
        assert_eq!(
            &transform.inverse().unwrap() * p,
            Tuple::point(-8., 7., 3.)
        );
    }

    #[test]
    fn translation_does_not_affect_vectors() {
        let transform = Matrix::translation(5., -3., 2.);
        let v = Tuple::vector(4., -4., 3.);
        assert_eq!(&transform * v, v);
    }

    #[test]
    fn scaling_points_and_vectors() {
        let transform = Matrix::scaling(2., 3., 4.);
        assert_eq!(
            &transform * Tuple::point(-4., 6., 8.),
            Tuple::point(-8., 18., 32.)
        );
        assert_eq!(
            &transform * Tuple::vector(-4., 6., 8.),
            Tuple::vector(-8., 18., 32.)
        );
        assert_eq!(
            &transform.inverse().unwrap() * Tuple::vector(-4., 6., 8.),
            Tuple::vector(-2., 2., 2.)
        );
    }

    #[test]
    fn reflection_is_scaling_by_a_negative_value() {
        let transform = Matrix::scaling(-1., 1., 1.);
        assert_eq!(
            &transform * Tuple::point(2., 3., 4.),
            Tuple::point(-2., 3., 4.)
        );
    }

    #[test]
    fn rotating_a_point_around_the_x_axis() {
        let p = Tuple::point(0., 1., 0.);
        let half_quarter = Matrix::rotation_x(PI / 4.);
        let full_quarter = Matrix::rotation_x(PI / 2.);
        assert_eq!(
            &half_quarter * p,
            Tuple::point(0., 2f64.sqrt() / 2., 2f64.sqrt() / 2.)
        );
        assert_eq!(&full_quarter * p, Tuple::point(0., 0., 1.));
        assert_eq!(
            &half_quarter.inverse().unwrap() * p,
            Tuple::point(0., 2f64.sqrt() / 2., -(2f64.sqrt()) / 2.)
        );
    }

    #[test]
    fn rotating_a_point_around_the_y_axis() {
        let p = Tuple::point(0., 0., 1.);
        assert_eq!(
            &Matrix::rotation_y(PI / 4.) * p,
            Tuple::point(2f64.sqrt() / 2., 0., 2f64.sqrt() / 2.)
        );
        assert_eq!(&Matrix::rotation_y(PI / 2.) * p, Tuple::point(1., 0., 0.));
    }

    #[test]
    fn rotating_a_point_around_the_z_axis() {
        let p = Tuple::point(0., 1., 0.);
        assert_eq!(
            &Matrix::rotation_z(PI / 4.) * p,
            Tuple::point(-(2f64.sqrt()) / 2., 2f64.sqrt() / 2., 0.)
        );
        assert_eq!(&Matrix::rotation_z(PI / 2.) * p, Tuple::point(-1., 0., 0.));
    }

    #[test]
    fn shearing_moves_each_component_in_proportion_to_the_others() {
        let p = Tuple::point(2., 3., 4.);
        assert_eq!(
            &Matrix::shearing(1., 0., 0., 0., 0., 0.) * p,
            Tuple::point(5., 3., 4.)
        );
        assert_eq!(
            &Matrix::shearing(0., 1., 0., 0., 0., 0.) * p,
            Tuple::point(6., 3., 4.)
        );
        assert_eq!(
            &Matrix::shearing(0., 0., 1., 0., 0., 0.) * p,
            Tuple::point(2., 5., 4.)
        );
        assert_eq!(
            &Matrix::shearing(0., 0., 0., 1., 0., 0.) * p,
            Tuple::point(2., 7., 4.)
        );
        assert_eq!(
            &Matrix::shearing(0., 0., 0., 0., 1., 0.) * p,
            Tuple::point(2., 3., 6.)
        );
        assert_eq!(
            &Matrix::shearing(0., 0., 0., 0., 0., 1.) * p,
            Tuple::point(2., 3., 7.)
        );
    }

    #[test]
    fn individual_transformations_are_applied_in_sequence() {
        let p = Tuple::point(1., 0., 1.);
        let a = Matrix::rotation_x(PI / 2.);
        let b = Matrix::scaling(5., 5., 5.);
        let c = Matrix::translation(10., 5., 7.);

        let p2 = &a * p;
        assert_eq!(p2, Tuple::point(1., -1., 0.));
        let p3 = &b * p2;
        assert_eq!(p3, Tuple::point(5., -5., 0.));
        let p4 = &c * p3;
        assert_eq!(p4, Tuple::point(15., 0., 7.));
    }

    #[test]
    fn chained_transformations_are_applied_in_reverse_order() {
        let p = Tuple::point(1., 0., 1.);
        let t = &(&Matrix::translation(10., 5., 7.) * &Matrix::scaling(5., 5., 5.))
            * &Matrix::rotation_x(PI / 2.);
        assert_eq!(&t * p, Tuple::point(15., 0., 7.));
    }
}
