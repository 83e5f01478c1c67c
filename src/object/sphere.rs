use crate::{
    material::Material,
    math::{Matrix, Ray, Tuple, IDENTITY},
};

use super::{Intersection, Intersections, Shape};

/// A unit sphere centered at the local origin. The radius field is carried
/// for generality, but intersection always solves the unit sphere; resize
/// and reposition through the transform.
#[derive(Clone, Debug)]
pub struct Sphere {
    transform: Matrix,
    material: Material,
    pub radius: f64,
}

impl Sphere {
    /// Instantiate a new Sphere with an identity transform and its own
    /// fresh default material.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            transform: IDENTITY.clone(),
            material: Material::default(),
            radius: 1.,
        }
    }
}

impl Shape for Sphere {
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
        // solve |O + tD|^2 = 1 for the unit sphere at the origin
        let sphere_to_ray = ray.origin - Tuple::point(0., 0., 0.);
        let a = ray.direction.dot(ray.direction);
        let b = 2. * ray.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. {
            return Intersections::empty();
        }

        // tangent rays yield t1 == t2, deliberately not deduplicated
        let t1 = (-b - discriminant.sqrt()) / (2. * a);
        let t2 = (-b + discriminant.sqrt()) / (2. * a);
        Intersections::new(vec![Intersection::new(t1, self), Intersection::new(t2, self)])
    }

    fn local_normal_at(&self, point: Tuple) -> Tuple {
        point - Tuple::point(0., 0., 0.)
    }
}
