use crate::primitive::{point::Point, vector::Vector};

use super::{color::Color, material::Material};

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct PointLightSource {
    position: Point,
    intensity: Color,
}

impl Default for PointLightSource {
    fn default() -> Self {
        Self {
            position: Point::zero(),
            intensity: Color::white(),
        }
    }
}

impl PointLightSource {
    pub fn new(position: Point, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// Color of a surface point under the Phong reflection model.
/// The result is not clamped.
pub fn lighting(
    material: &Material,
    light: &PointLightSource,
    point: Point,
    eye_v: Vector,
    normal_v: Vector,
    in_shadow: bool,
) -> Color {
    // combine surface color with lights's intensity (color)
    let effective_color = material.color * light.intensity();

    let ambient = effective_color * material.ambient;
    if in_shadow {
        return ambient;
    }

    // direction to the light source
    let light_v = (light.position() - point).normalize();
    let light_dot_normal = light_v.dot(normal_v);

    // if cosine between light and normal vectors is negative, light is on the other side of surface
    if light_dot_normal < 0. {
        return ambient;
    }
    let diffuse = effective_color * material.diffuse * light_dot_normal;

    let reflect_v = (-light_v).reflect(normal_v);
    let reflect_dot_eye = reflect_v.dot(eye_v);

    // if cosine between reflect and eye vectors is not positive, light reflects away from the eye
    let specular = if reflect_dot_eye > 0. {
        let factor = reflect_dot_eye.powf(material.shininess);
        light.intensity() * material.specular * factor
    } else {
        Color::black()
    };

    ambient + diffuse + specular
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use super::*;
    use crate::{assert_approx_eq_low_prec, primitive::tuple::Tuple};

    fn lit(light_position: Point, eye_v: Vector, in_shadow: bool) -> Color {
        let light = PointLightSource::new(light_position, Color::white());
        let normal_v = Vector::new(0., 0., -1.);
        lighting(
            &Material::default(),
            &light,
            Point::zero(),
            eye_v,
            normal_v,
            in_shadow,
        )
    }

    #[test]
    fn point_light_has_position_and_intensity() {
        let light = PointLightSource::new(Point::new(0., 0., 0.), Color::white());

        assert_eq!(light.position(), Point::zero());
        assert_eq!(light.intensity(), Color::white());
    }

    #[test]
    fn lighting_with_eye_between_light_and_surface() {
        assert_approx_eq_low_prec!(
            lit(Point::new(0., 0., -10.), Vector::new(0., 0., -1.), false),
            Color::new(1.9, 1.9, 1.9)
        );
    }

    #[test]
    fn lighting_with_eye_between_light_and_surface_eye_offset_45() {
        assert_approx_eq_low_prec!(
            lit(
                Point::new(0., 0., -10.),
                Vector::new(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
                false
            ),
            Color::new(1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn lighting_with_eye_opposite_surface_light_offset_45() {
        let intensity = 0.1 + 0.9 * FRAC_1_SQRT_2;
        assert_approx_eq_low_prec!(
            lit(Point::new(0., 10., -10.), Vector::new(0., 0., -1.), false),
            Color::new(intensity, intensity, intensity)
        );
    }

    #[test]
    fn lighting_with_eye_in_path_of_reflection() {
        let intensity = 1. + 0.9 * FRAC_1_SQRT_2;
        assert_approx_eq_low_prec!(
            lit(
                Point::new(0., 10., -10.),
                Vector::new(0., -FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
                false
            ),
            Color::new(intensity, intensity, intensity)
        );
    }

    #[test]
    fn lighting_with_light_behind_surface() {
        assert_approx_eq_low_prec!(
            lit(Point::new(0., 0., 10.), Vector::new(0., 0., -1.), false),
            Color::new(0.1, 0.1, 0.1)
        );
    }

    #[test]
    fn lighting_with_surface_in_shadow() {
        assert_approx_eq_low_prec!(
            lit(Point::new(0., 0., -10.), Vector::new(0., 0., -1.), true),
            Color::new(0.1, 0.1, 0.1)
        );
    }

    #[test]
    fn lighting_uses_material_color_and_light_intensity() {
        let material = Material {
            color: Color::new(1., 0.5, 0.),
            ambient: 1.,
            diffuse: 0.,
            specular: 0.,
            ..Default::default()
        };
        let light = PointLightSource::new(Point::new(0., 0., -10.), Color::new(0.5, 1., 1.));

        assert_approx_eq_low_prec!(
            lighting(
                &material,
                &light,
                Point::zero(),
                Vector::new(0., 0., -1.),
                Vector::new(0., 0., -1.),
                false,
            ),
            Color::new(0.5, 0.5, 0.)
        );
    }
}
