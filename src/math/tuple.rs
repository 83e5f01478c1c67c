use std::ops::{Add, Mul, Neg, Sub};

use super::{MathError, EPSILON};

/// A 4-component homogeneous coordinate. `w == 1` is a point, `w == 0` is a
/// vector; the distinction is what makes translation matrices move points
/// while leaving directions alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    /// Instantiate a new Tuple.
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// A point: a Tuple with `w = 1`.
    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.)
    }

    /// A vector: a Tuple with `w = 0`.
    pub fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.)
    }

    pub fn is_point(self) -> bool {
        self.w == 1.
    }

    pub fn is_vector(self) -> bool {
        self.w == 0.
    }

    /// Find the dot product of two Tuples. Only x, y and z participate; dot
    /// products are meaningful between vectors, where w is zero anyway.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross two Tuples. The result is always a vector.
    pub fn cross(self, other: Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Find the magnitude of this Tuple, the Euclidean norm over all four
    /// components.
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2) + self.w.powi(2)).sqrt()
    }

    /// Normalize this Tuple by dividing it by its own magnitude.
    pub fn normalize(self) -> Result<Self, MathError> {
        let magnitude = self.magnitude();
        if magnitude == 0. {
            return Err(MathError::DegenerateVector);
        }
        Ok(self * (1. / magnitude))
    }

    /// Divide this Tuple by a scalar.
    pub fn div(self, scalar: f64) -> Result<Self, MathError> {
        if scalar == 0. {
            return Err(MathError::DivisionByZero);
        }
        Ok(self * (1. / scalar))
    }

    /// Reflect the vector `self` about the normal `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2. * self.dot(normal))
    }
}

/// Equality within [`EPSILON`] on x, y and z. `w` must match exactly; a
/// point and a vector are never equal no matter how close their components.
impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() <= EPSILON
            && (self.y - other.y).abs() <= EPSILON
            && (self.z - other.z).abs() <= EPSILON
            && self.w == other.w
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}
