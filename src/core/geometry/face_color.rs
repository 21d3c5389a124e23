use crate::core::Color;
use glam::DVec3;

/// Gradients whose endpoints are closer than this collapse to their start color.
const MIN_GRADIENT_LENGTH: f64 = 1e-4;

/// How a face is colored at a point. Evaluated in object space, before rotation.
#[derive(Clone, Debug, PartialEq)]
pub enum FaceColor {
    /// Uniform color across the whole face.
    Solid(Color),
    /// Linear gradient along the segment `start -> end`.
    Gradient {
        start: DVec3,
        end: DVec3,
        start_color: Color,
        end_color: Color,
    },
}

impl FaceColor {
    pub fn gradient(start: DVec3, end: DVec3, start_color: Color, end_color: Color) -> Self {
        FaceColor::Gradient {
            start,
            end,
            start_color,
            end_color,
        }
    }

    pub fn color_at(&self, point: DVec3) -> Color {
        match self {
            FaceColor::Solid(color) => *color,
            FaceColor::Gradient {
                start,
                end,
                start_color,
                end_color,
            } => {
                let axis = *end - *start;
                let length_squared = axis.length_squared();
                if length_squared < MIN_GRADIENT_LENGTH * MIN_GRADIENT_LENGTH {
                    return *start_color;
                }
                // Unclamped; lerp clamps.
                let t = (point - *start).dot(axis) / length_squared;
                start_color.lerp(end_color, t)
            }
        }
    }
}

impl Default for FaceColor {
    fn default() -> Self {
        FaceColor::Solid(Color::AZURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> FaceColor {
        FaceColor::gradient(
            DVec3::new(-1.0, -1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            Color::BLACK,
            Color::WHITE,
        )
    }

    #[test]
    fn solid_ignores_point() {
        let c = FaceColor::Solid(Color::ORCHID);
        assert_eq!(c.color_at(DVec3::ZERO), Color::ORCHID);
        assert_eq!(c.color_at(DVec3::new(9.0, -4.0, 100.0)), Color::ORCHID);
    }

    #[test]
    fn gradient_endpoints_and_midpoint() {
        let g = diagonal();
        assert_eq!(g.color_at(DVec3::new(-1.0, -1.0, 0.0)), Color::BLACK);
        assert_eq!(g.color_at(DVec3::new(1.0, 1.0, 0.0)), Color::WHITE);
        // Off-axis points project onto the segment.
        assert_eq!(g.color_at(DVec3::new(1.0, -1.0, 5.0)), Color::new(127, 127, 127));
    }

    #[test]
    fn gradient_saturates_past_endpoints() {
        let g = diagonal();
        assert_eq!(g.color_at(DVec3::new(-7.0, -7.0, 0.0)), Color::BLACK);
        assert_eq!(g.color_at(DVec3::new(3.0, 3.0, 0.0)), Color::WHITE);
    }

    #[test]
    fn degenerate_gradient_uses_start_color() {
        let p = DVec3::new(0.5, 0.5, 0.5);
        let g = FaceColor::gradient(p, p + DVec3::splat(1e-5), Color::RED, Color::BLUE);
        assert_eq!(g.color_at(DVec3::new(100.0, 0.0, 0.0)), Color::RED);
    }
}
