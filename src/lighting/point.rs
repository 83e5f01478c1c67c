use crate::{material::Color, math::Tuple};

/// A point light: a single position radiating uniformly in all directions.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Color,
}

impl PointLight {
    /// Instantiate a new PointLight.
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
