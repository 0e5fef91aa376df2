use super::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,   // [0;1]
    pub diffuse: f64,   // [0;1]
    pub specular: f64,  // [0;1]
    pub shininess: f64, // [10;+inf) (typically up to 200.0)
}

impl Material {
    pub const DEFAULT_AMBIENT: f64 = 0.1;
    pub const DEFAULT_DIFFUSE: f64 = 0.9;
    pub const DEFAULT_SPECULAR: f64 = 0.9;
    pub const DEFAULT_SHININESS: f64 = 200.;

    pub fn new(color: Color, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn matte_with_color(color: Color) -> Self {
        Self {
            color,
            specular: 0.05,
            shininess: 15.,
            ..Default::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(
            Color::white(),
            Self::DEFAULT_AMBIENT,
            Self::DEFAULT_DIFFUSE,
            Self::DEFAULT_SPECULAR,
            Self::DEFAULT_SHININESS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn default_material() {
        let m = Material::default();

        assert_eq!(m.color, Color::white());
        assert_approx_eq_low_prec!(m.ambient, 0.1);
        assert_approx_eq_low_prec!(m.diffuse, 0.9);
        assert_approx_eq_low_prec!(m.specular, 0.9);
        assert_approx_eq_low_prec!(m.shininess, 200.0);
    }

    #[test]
    fn material_is_copied_not_shared() {
        let original = Material::with_color(Color::red());
        let mut copy = original;
        copy.diffuse = 0.2;

        assert_approx_eq_low_prec!(original.diffuse, 0.9);
        assert_eq!(copy.color, Color::red());
    }
}
