use rayon::prelude::*;

use crate::{
    canvas::Canvas,
    math::{MathError, Matrix, Ray, Tuple, IDENTITY},
    scene::World,
};

/// A pinhole camera. Looks down -z in its own space; aim it with a
/// [`view_transform`]. Half extents and the pixel size are derived once at
/// construction from the field of view and aspect ratio.
#[derive(Clone, Debug)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    pub field_of_view: f64,
    transform: Matrix,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// Instantiate a new Camera with an identity transform.
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1. {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: IDENTITY.clone(),
            half_width,
            half_height,
            pixel_size: half_width * 2. / hsize as f64,
        }
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Matrix) {
        self.transform = transform;
    }

    /// The world-space ray through the center of the given pixel.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Result<Ray, MathError> {
        let xoffset = (px as f64 + 0.5) * self.pixel_size;
        let yoffset = (py as f64 + 0.5) * self.pixel_size;

        // the untransformed canvas sits at z = -1
        let world_x = self.half_width - xoffset;
        let world_y = self.half_height - yoffset;

        let inverse = self.transform.inverse()?;
        let pixel = &inverse * Tuple::point(world_x, world_y, -1.);
        let origin = &inverse * Tuple::point(0., 0., 0.);
        let direction = (pixel - origin).normalize()?;

        Ok(Ray::new(origin, direction))
    }

    /// Render the world to a canvas, one ray per pixel. Pixels are
    /// independent, so they are evaluated on rayon's pool; the ordered
    /// collect keeps the output deterministic regardless of scheduling.
    pub fn render(&self, world: &World) -> Result<Canvas, MathError> {
        let pixels = (0..self.hsize * self.vsize)
            .into_par_iter()
            .map(|i| {
                let ray = self.ray_for_pixel(i % self.hsize, i / self.hsize)?;
                world.color_at(&ray)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut canvas = Canvas::new(self.hsize, self.vsize);
        for (i, color) in pixels.into_iter().enumerate() {
            canvas.write_pixel(i % self.hsize, i / self.hsize, color);
        }
        Ok(canvas)
    }
}

/// The transform that orients the world for an eye at `from` looking toward
/// `to`, with `up` suggesting which way is up.
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Result<Matrix, MathError> {
    let forward = (to - from).normalize()?;
    let left = forward.cross(up.normalize()?);
    let true_up = left.cross(forward);

    #[rustfmt::skip]
    let orientation = Matrix::from_rows([
        [left.x,     left.y,     left.z,     0.],
        [true_up.x,  true_up.y,  true_up.z,  0.],
        [-forward.x, -forward.y, -forward.z, 0.],
        [0.,         0.,         0.,         1.],
    ]);
    Ok(&orientation * &Matrix::translation(-from.x, -from.y, -from.z))
}
