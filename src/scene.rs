use crate::{
    lighting::{lighting, PointLight},
    material::{Color, Material},
    math::{MathError, Matrix, Ray, Tuple, SHADOW_BIAS},
    object::{intersect, normal_at, Intersection, Intersections, Shape, Sphere},
};

/// A scene: every shape to render plus the single point light.
pub struct World {
    pub objects: Vec<Box<dyn Shape>>,
    pub light: PointLight,
}

impl World {
    /// Instantiate an empty World lit by the given light.
    pub fn new(light: PointLight) -> Self {
        Self {
            objects: Vec::new(),
            light,
        }
    }

    pub fn add_object(&mut self, object: Box<dyn Shape>) {
        self.objects.push(object);
    }

    /// Intersect a ray against every object, aggregated into one collection
    /// sorted ascending by t.
    pub fn intersect(&self, ray: &Ray) -> Result<Intersections<'_>, MathError> {
        let mut xs = Intersections::empty();
        for object in self.objects.iter() {
            xs.extend(intersect(object.as_ref(), ray)?);
        }
        Ok(xs)
    }

    /// Whether some object lies between the point and the light.
    pub fn is_shadowed(&self, point: Tuple) -> Result<bool, MathError> {
        let to_light = self.light.position - point;
        let distance = to_light.magnitude();
        let direction = to_light.normalize()?;

        let shadow_ray = Ray::new(point, direction);
        let xs = self.intersect(&shadow_ray)?;
        Ok(matches!(xs.hit(), Some(hit) if hit.t < distance))
    }

    /// Shade one prepared hit: the shadow test and the lighting evaluation
    /// both use the over point, never the raw surface point.
    pub fn shade_hit(&self, comps: &Computations) -> Result<Color, MathError> {
        let shadowed = self.is_shadowed(comps.over_point)?;
        lighting(
            comps.object.material(),
            &self.light,
            comps.over_point,
            comps.eyev,
            comps.normalv,
            shadowed,
        )
    }

    /// The color seen along a ray: black when the ray hits nothing.
    pub fn color_at(&self, ray: &Ray) -> Result<Color, MathError> {
        let xs = self.intersect(ray)?;
        match xs.hit() {
            Some(hit) => {
                let comps = Computations::prepare(hit, ray)?;
                self.shade_hit(&comps)
            }
            None => Ok(Color::black()),
        }
    }
}

/// The canonical two-sphere scene: an outer colored sphere with a smaller
/// sphere inside it, lit from the upper left. The fixture every shading
/// regression is phrased against.
impl Default for World {
    fn default() -> Self {
        let mut outer = Sphere::new();
        outer.set_material(Material {
            color: Color::new(0.8, 1., 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Default::default()
        });

        let mut inner = Sphere::new();
        inner.set_transform(Matrix::scaling(0.5, 0.5, 0.5));

        Self {
            objects: vec![Box::new(outer), Box::new(inner)],
            light: PointLight::new(Tuple::point(-10., 10., -10.), Color::white()),
        }
    }
}

/// Precomputed shading state for one intersection.
#[derive(Clone, Copy)]
pub struct Computations<'a> {
    pub t: f64,
    pub object: &'a dyn Shape,
    pub point: Tuple,
    pub eyev: Tuple,
    pub normalv: Tuple,
    /// True when the hit is on the inside of the surface; the normal has
    /// already been flipped to face the eye.
    pub inside: bool,
    /// The point lifted a bias along the normal, used as the shadow ray
    /// origin so the surface cannot shadow itself.
    pub over_point: Tuple,
}

impl<'a> Computations<'a> {
    pub fn prepare(intersection: &Intersection<'a>, ray: &Ray) -> Result<Self, MathError> {
        let point = ray.position(intersection.t);
        let eyev = -ray.direction;
        let mut normalv = normal_at(intersection.object, point)?;

        let inside = normalv.dot(eyev) < 0.;
        if inside {
            normalv = -normalv;
        }

        let over_point = point + normalv * SHADOW_BIAS;

        Ok(Self {
            t: intersection.t,
            object: intersection.object,
            point,
            eyev,
            normalv,
            inside,
            over_point,
        })
    }
}
