use std::ops::{Add, Mul, Sub};

use crate::math::{Tuple, EPSILON};

/// An RGB color with float channels. Channels are nominally in 0..1 but are
/// allowed to leave that range during shading; clamping happens only when a
/// color is quantized for output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    /// Instantiate a new Color.
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }

    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }

    /// Quantize to 8-bit channels: clamp to 0..1, scale to 255 and round.
    /// The single place where out-of-range channels are clamped.
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |c: f64| (c * 255.).clamp(0., 255.).round() as u8;
        [channel(self.red), channel(self.green), channel(self.blue)]
    }
}

/// Equality within [`EPSILON`] per channel.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        (self.red - other.red).abs() <= EPSILON
            && (self.green - other.green).abs() <= EPSILON
            && (self.blue - other.blue).abs() <= EPSILON
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.red + rhs.red,
            self.green + rhs.green,
            self.blue + rhs.blue,
        )
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.red - rhs.red,
            self.green - rhs.green,
            self.blue - rhs.blue,
        )
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.red * rhs, self.green * rhs, self.blue * rhs)
    }
}

/// Hadamard product, used to filter a light's intensity through a surface
/// color.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.red * rhs.red,
            self.green * rhs.green,
            self.blue * rhs.blue,
        )
    }
}

/// A surface pattern, evaluated at a point in the pattern's own local space.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// Alternates two colors in one-unit bands along the x axis.
    Stripe(Color, Color),
}

impl Pattern {
    pub fn pattern_at(&self, point: Tuple) -> Color {
        match *self {
            Pattern::Stripe(a, b) => {
                if (point.x.floor() as i64).rem_euclid(2) == 0 {
                    a
                } else {
                    b
                }
            }
        }
    }
}

/// Phong shading parameters for one shape. Every shape owns its own
/// Material; mutating one shape's material never affects another's.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub pattern: Option<Pattern>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
            pattern: None,
        }
    }
}
