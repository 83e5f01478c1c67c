mod point;

pub use point::*;

use crate::{
    material::{Color, Material},
    math::{MathError, Tuple},
};

/// Evaluate the Phong model at a point: ambient plus diffuse plus specular,
/// each weighted by the material. A shadowed point receives the ambient
/// term alone.
pub fn lighting(
    material: &Material,
    light: &PointLight,
    point: Tuple,
    eyev: Tuple,
    normalv: Tuple,
    in_shadow: bool,
) -> Result<Color, MathError> {
    let surface_color = match &material.pattern {
        Some(pattern) => pattern.pattern_at(point),
        None => material.color,
    };

    // the light's intensity filtered through the surface color
    let effective_color = light.intensity * surface_color;
    let ambient = effective_color * material.ambient;

    if in_shadow {
        return Ok(ambient);
    }

    let lightv = (light.position - point).normalize()?;
    let light_dot_normal = lightv.dot(normalv);
    if light_dot_normal < 0. {
        // surface faces away from the light
        return Ok(ambient);
    }

    let diffuse = effective_color * material.diffuse * light_dot_normal;

    let reflectv = (-lightv).reflect(normalv);
    let reflect_dot_eye = reflectv.dot(eyev);
    let specular = if reflect_dot_eye <= 0. {
        // reflection points away from the eye
        Color::black()
    } else {
        effective_color * material.specular * reflect_dot_eye.powf(material.shininess)
    };

    Ok(ambient + diffuse + specular)
}
