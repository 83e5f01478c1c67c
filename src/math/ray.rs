use super::{Matrix, Tuple};

/// A ray in world or object space. The origin is a point, the direction a
/// vector; the direction is not required to be normalized, since the shapes
/// parametrize distance along it directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    /// Instantiate a new Ray.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// The point `t` units along the ray.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Apply a transform to this ray. The direction keeps w = 0, so
    /// translation only moves the origin.
    pub fn transform(&self, matrix: &Matrix) -> Self {
        Self::new(matrix * self.origin, matrix * self.direction)
    }
}
