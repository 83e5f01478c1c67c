use crate::{
    material::Material,
    math::{Matrix, Ray, Tuple, IDENTITY, PARALLEL_EPSILON},
};

use super::{Intersection, Intersections, Shape};

/// An infinite plane through the local origin with its normal along +y.
/// Orient it elsewhere through the transform.
#[derive(Clone, Debug)]
pub struct Plane {
    transform: Matrix,
    material: Material,
}

impl Plane {
    /// Instantiate a new Plane with an identity transform and its own
    /// fresh default material.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            transform: IDENTITY.clone(),
            material: Material::default(),
        }
    }
}

impl Shape for Plane {
    fn transform(&self) -> &Matrix {
        &self.transform
    }

    fn set_transform(&mut self, transform: Matrix) {
        self.transform = transform;
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    fn local_intersect(&self, ray: &Ray) -> Intersections<'_> {
        // rays parallel to the plane (coplanar included) never intersect
        if ray.direction.y.abs() < PARALLEL_EPSILON {
            return Intersections::empty();
        }

        let t = -ray.origin.y / ray.direction.y;
        Intersections::new(vec![Intersection::new(t, self)])
    }

    fn local_normal_at(&self, _point: Tuple) -> Tuple {
        Tuple::vector(0., 1., 0.)
    }
}
