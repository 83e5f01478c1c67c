use std::{error::Error, f64::consts::PI, time::Instant};

use lumen::{
    camera::{view_transform, Camera},
    lighting::PointLight,
    material::{Color, Material, Pattern},
    math::{Matrix, Tuple},
    object::{Plane, Shape, Sphere},
    scene::World,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("Building scene");
    let start_time = Instant::now();

    let mut world = World::new(PointLight::new(
        Tuple::point(-10., 10., -10.),
        Color::white(),
    ));

    // a striped floor
    let mut floor = Plane::new();
    floor.set_material(Material {
        pattern: Some(Pattern::Stripe(
            Color::new(1., 0.9, 0.9),
            Color::new(0.55, 0.5, 0.5),
        )),
        specular: 0.,
        ..Default::default()
    });
    world.add_object(Box::new(floor));

    // three spheres of descending size
    let mut middle = Sphere::new();
    middle.set_transform(Matrix::translation(-0.5, 1., 0.5));
    middle.set_material(Material {
        color: Color::new(0.1, 1., 0.5),
        diffuse: 0.7,
        specular: 0.3,
        ..Default::default()
    });
    world.add_object(Box::new(middle));

    let mut right = Sphere::new();
    right.set_transform(Matrix::translation(1.5, 0.5, -0.5) * Matrix::scaling(0.5, 0.5, 0.5));
    right.set_material(Material {
        color: Color::new(0.5, 1., 0.1),
        diffuse: 0.7,
        specular: 0.3,
        ..Default::default()
    });
    world.add_object(Box::new(right));

    let mut left = Sphere::new();
    left.set_transform(Matrix::translation(-1.5, 0.33, -0.75) * Matrix::scaling(0.33, 0.33, 0.33));
    left.set_material(Material {
        color: Color::new(1., 0.8, 0.1),
        diffuse: 0.7,
        specular: 0.3,
        ..Default::default()
    });
    world.add_object(Box::new(left));

    let mut camera = Camera::new(500, 250, PI / 3.);
    camera.set_transform(view_transform(
        Tuple::point(0., 1.5, -5.),
        Tuple::point(0., 1., 0.),
        Tuple::vector(0., 1., 0.),
    )?);

    println!("Rendering {}x{}", camera.hsize(), camera.vsize());
    let canvas = camera.render(&world)?;

    std::fs::write("render.ppm", canvas.to_ppm())?;
    canvas.save("render.png")?;

    println!(
        "Operation complete in {:.2}s",
        start_time.elapsed().as_secs_f32()
    );
    Ok(())
}
