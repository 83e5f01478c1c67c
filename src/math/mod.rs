mod matrix;
mod ray;
mod tuple;

pub use matrix::*;
pub use ray::*;
pub use tuple::*;

use thiserror::Error;

/// Absolute tolerance for Tuple and Color equality. Transform chains drift
/// by a few ulps per multiplication, so exact comparison is useless.
pub const EPSILON: f64 = 1e-3;

/// Per-element tolerance for Matrix equality. Looser than [`EPSILON`]
/// because matrix products accumulate more error.
pub const MATRIX_EPSILON: f64 = 1e-2;

/// Offset applied along the surface normal when spawning shadow rays, so a
/// hit point rounded fractionally below its own surface does not shadow
/// itself.
pub const SHADOW_BIAS: f64 = 1e-3;

/// A ray whose direction has a y component smaller than this is treated as
/// parallel to the xz plane and never intersects it.
pub const PARALLEL_EPSILON: f64 = 1e-2;

/// A recoverable failure in tuple or matrix algebra.
#[derive(Debug, Error, PartialEq)]
pub enum MathError {
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is not invertible (determinant is zero)")]
    NotInvertible,

    #[error("matrix dimensions incompatible: {left_rows}x{left_cols} * {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot normalize a zero-magnitude tuple")]
    DegenerateVector,
}
