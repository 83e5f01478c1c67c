mod plane;
mod sphere;

pub use plane::*;
pub use sphere::*;

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;
use std::ptr;

use crate::{
    material::Material,
    math::{MathError, Matrix, Ray, Tuple},
};

/// A geometric primitive. Implementations answer intersection and normal
/// queries in their own object space; the world-space conversions live in
/// [`intersect`] and [`normal_at`] and are shared by every shape.
pub trait Shape: fmt::Debug + Send + Sync {
    /// The object-to-world transform.
    fn transform(&self) -> &Matrix;

    fn set_transform(&mut self, transform: Matrix);

    fn material(&self) -> &Material;

    fn material_mut(&mut self) -> &mut Material;

    fn set_material(&mut self, material: Material);

    /// Intersect a ray already expressed in this shape's object space.
    fn local_intersect(&self, ray: &Ray) -> Intersections<'_>;

    /// The surface normal at a point already expressed in object space.
    fn local_normal_at(&self, point: Tuple) -> Tuple;
}

/// Intersect a world-space ray with a shape: carry the ray into object
/// space through the inverse transform and delegate. The t values come back
/// in the world ray's own parameter space, so they compare across shapes.
pub fn intersect<'a>(shape: &'a dyn Shape, ray: &Ray) -> Result<Intersections<'a>, MathError> {
    let local_ray = ray.transform(&shape.transform().inverse()?);
    Ok(shape.local_intersect(&local_ray))
}

/// The world-space surface normal at a world-space point. The local normal
/// goes back through the inverse transpose (a plain transform would skew
/// normals under non-uniform scaling), gets its w forced to zero to strip
/// any translation artifact, and is normalized.
pub fn normal_at(shape: &dyn Shape, world_point: Tuple) -> Result<Tuple, MathError> {
    let inverse = shape.transform().inverse()?;
    let local_point = &inverse * world_point;
    let local_normal = shape.local_normal_at(local_point);
    let mut world_normal = &inverse.transpose() * local_normal;
    world_normal.w = 0.;
    world_normal.normalize()
}

/// One ray-shape hit record: the parametric distance along the ray and the
/// shape that was struck.
#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a dyn Shape,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a dyn Shape) -> Self {
        Self { t, object }
    }
}

/// Same t and same shape instance (identity, not structural equality).
/// Compares data addresses only; vtable pointers are not unique across
/// codegen units, so a whole fat-pointer comparison could miss.
impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t && ptr::addr_eq(self.object, other.object)
    }
}

/// An ordered collection of intersections. Construction and every bulk
/// extend re-sort ascending by t, so callers can reason about the nearest
/// hit by position.
#[derive(Debug, Default)]
pub struct Intersections<'a> {
    items: Vec<Intersection<'a>>,
}

impl<'a> Intersections<'a> {
    pub fn new(items: Vec<Intersection<'a>>) -> Self {
        let mut xs = Self { items };
        xs.sort();
        xs
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Append another batch and restore ascending order.
    pub fn extend(&mut self, other: Intersections<'a>) {
        self.items.extend(other.items);
        self.sort();
    }

    fn sort(&mut self) {
        // stable, so records tied on t keep their insertion order
        self.items
            .sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(Ordering::Equal));
    }

    /// The visible hit: the intersection with the smallest non-negative t.
    /// A linear scan, so it gives the same answer whether or not the
    /// collection is currently sorted.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.items
            .iter()
            .filter(|i| i.t >= 0.)
            .min_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(Ordering::Equal))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.items.iter()
    }
}

impl<'a> Index<usize> for Intersections<'a> {
    type Output = Intersection<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}
