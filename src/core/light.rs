use glam::DVec3;

/// A light at a fixed position in space.
///
/// Placed far enough away it behaves like a directional light, while the math stays that of
/// a point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
}

impl PointLight {
    pub fn new(position: DVec3) -> Self {
        Self { position }
    }

    /// A light `distance` units out along `direction`.
    pub fn far_along(direction: DVec3, distance: f64) -> Self {
        Self::new(direction * distance)
    }

    /// Lambertian diffuse term in [0, 1]. Surfaces facing away get 0.
    pub fn diffuse(&self, point: DVec3, normal: DVec3) -> f64 {
        let to_light = (self.position - point).normalize_or_zero();
        let normal = normal.normalize_or_zero();
        normal.dot(to_light).max(0.0)
    }
}

impl Default for PointLight {
    fn default() -> Self {
        PointLight::far_along(DVec3::new(1.0, 1.0, -1.0), 10_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn facing_light_is_full_bright() {
        let light = PointLight::new(DVec3::new(0.0, 0.0, -10.0));
        assert_relative_eq!(light.diffuse(DVec3::ZERO, DVec3::NEG_Z), 1.0, epsilon = 1e-12);
        // Normal length doesn't matter.
        assert_relative_eq!(
            light.diffuse(DVec3::ZERO, DVec3::new(0.0, 0.0, -7.0)),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn facing_away_is_dark() {
        let light = PointLight::new(DVec3::new(0.0, 0.0, -10.0));
        assert_eq!(light.diffuse(DVec3::ZERO, DVec3::Z), 0.0);
        assert_eq!(light.diffuse(DVec3::ZERO, DVec3::X), 0.0);
    }

    #[test]
    fn follows_cosine_law() {
        let light = PointLight::new(DVec3::new(0.0, 10.0, 0.0));
        let normal = DVec3::new(1.0, 1.0, 0.0);
        assert_relative_eq!(
            light.diffuse(DVec3::ZERO, normal),
            std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn degenerate_inputs_give_zero() {
        let light = PointLight::new(DVec3::ONE);
        assert_eq!(light.diffuse(DVec3::ONE, DVec3::Z), 0.0);
        assert_eq!(light.diffuse(DVec3::ZERO, DVec3::ZERO), 0.0);
    }

    #[test]
    fn far_light_is_nearly_directional() {
        let light = PointLight::far_along(DVec3::NEG_Z, 10_000.0);
        let a = light.diffuse(DVec3::new(-1.0, -1.0, 0.0), DVec3::NEG_Z);
        let b = light.diffuse(DVec3::new(1.0, 1.0, 0.0), DVec3::NEG_Z);
        assert_relative_eq!(a, b, epsilon = 1e-9);
        assert!(a > 0.999_999);
    }
}
