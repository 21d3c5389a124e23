//! Built-in low-poly shapes. Every face is wound so its normal points outwards.

use super::{Color, Face, FaceColor, Geometry};
use glam::DVec3;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
    #[default]
    Cube,
    TriangularPrism,
    Logo,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Cube, Shape::TriangularPrism, Shape::Logo];

    pub fn geometry(self) -> Arc<Geometry> {
        Arc::new(match self {
            Shape::Cube => cube(),
            Shape::TriangularPrism => triangular_prism(),
            Shape::Logo => logo(),
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::TriangularPrism => "prism",
            Shape::Logo => "logo",
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(Shape::Cube),
            "prism" | "triangular-prism" => Ok(Shape::TriangularPrism),
            "logo" => Ok(Shape::Logo),
            other => Err(format!("unknown shape '{}'", other)),
        }
    }
}

fn v(x: f64, y: f64, z: f64) -> DVec3 {
    DVec3::new(x, y, z)
}

fn blue_to_violet(start: DVec3, end: DVec3) -> FaceColor {
    FaceColor::gradient(start, end, Color::AZURE, Color::VIOLET)
}

fn pink_to_orange(start: DVec3, end: DVec3) -> FaceColor {
    FaceColor::gradient(start, end, Color::ORCHID, Color::TANGERINE)
}

/// The [-1, 1] cube, each face with a corner-to-corner gradient.
pub fn cube() -> Geometry {
    Geometry::new(vec![
        // +Z
        Face::new(
            vec![v(-1., -1., 1.), v(1., -1., 1.), v(1., 1., 1.), v(-1., 1., 1.)],
            blue_to_violet(v(-1., -1., 1.), v(1., 1., 1.)),
        ),
        // -Z
        Face::new(
            vec![v(-1., -1., -1.), v(-1., 1., -1.), v(1., 1., -1.), v(1., -1., -1.)],
            blue_to_violet(v(-1., -1., -1.), v(1., 1., -1.)),
        ),
        // +Y
        Face::new(
            vec![v(-1., 1., -1.), v(-1., 1., 1.), v(1., 1., 1.), v(1., 1., -1.)],
            blue_to_violet(v(-1., 1., -1.), v(1., 1., 1.)),
        ),
        // -Y
        Face::new(
            vec![v(-1., -1., -1.), v(1., -1., -1.), v(1., -1., 1.), v(-1., -1., 1.)],
            blue_to_violet(v(-1., -1., -1.), v(1., -1., 1.)),
        ),
        // +X
        Face::new(
            vec![v(1., -1., -1.), v(1., 1., -1.), v(1., 1., 1.), v(1., -1., 1.)],
            blue_to_violet(v(1., -1., -1.), v(1., 1., 1.)),
        ),
        // -X
        Face::new(
            vec![v(-1., -1., -1.), v(-1., -1., 1.), v(-1., 1., 1.), v(-1., 1., -1.)],
            blue_to_violet(v(-1., -1., -1.), v(-1., 1., 1.)),
        ),
    ])
}

/// Half of a 2 x 2 x 1 box cut along the diagonal: two right-triangle caps, three walls.
pub fn triangular_prism() -> Geometry {
    let white = || FaceColor::Solid(Color::WHITE);
    Geometry::new(vec![
        // Front cap
        Face::new(
            vec![v(-1., -1., 0.5), v(1., -1., 0.5), v(-1., 1., 0.5)],
            blue_to_violet(v(-1., -1., 0.5), v(0.5, 0.5, 0.5)),
        ),
        // Back cap
        Face::new(vec![v(-1., -1., -0.5), v(-1., 1., -0.5), v(1., -1., -0.5)], white()),
        // Bottom
        Face::new(
            vec![v(-1., -1., -0.5), v(1., -1., -0.5), v(1., -1., 0.5), v(-1., -1., 0.5)],
            white(),
        ),
        // Left
        Face::new(
            vec![v(-1., -1., -0.5), v(-1., -1., 0.5), v(-1., 1., 0.5), v(-1., 1., -0.5)],
            white(),
        ),
        // Hypotenuse
        Face::new(
            vec![v(-1., 1., -0.5), v(-1., 1., 0.5), v(1., -1., 0.5), v(1., -1., -0.5)],
            blue_to_violet(v(-1., 1., -0.5), v(1., -1., 0.5)),
        ),
    ])
}

/// An extruded "K" emblem: a blue chevron on top, a pink band through the middle and a
/// blue chevron at the bottom, 0.5 deep.
pub fn logo() -> Geometry {
    const D: f64 = 0.25;
    Geometry::new(vec![
        // Top chevron
        Face::new(
            vec![v(0., 1., D), v(-1., 1., D), v(-1., 0., D)],
            blue_to_violet(v(-1., 0., D), v(0., 1., D)),
        ),
        Face::new(
            vec![v(-1., 0., -D), v(-1., 1., -D), v(0., 1., -D)],
            blue_to_violet(v(-1., 0., -0.5), v(0., 1., -D)),
        ),
        Face::new(
            vec![v(-1., 0., D), v(-1., 1., D), v(-1., 1., -D), v(-1., 0., -D)],
            blue_to_violet(v(-1., 0., 0.), v(-1., 2., 0.)),
        ),
        Face::new(
            vec![v(-1., 1., D), v(0., 1., D), v(0., 1., -D), v(-1., 1., -D)],
            blue_to_violet(v(-1., 1., 0.), v(1., 1., 0.)),
        ),
        // Middle band
        Face::new(
            vec![v(-1., 0., D), v(-1., -1., D), v(1., 1., D), v(0., 1., D)],
            pink_to_orange(v(-1., -1., D), v(1., 1., D)),
        ),
        Face::new(
            vec![v(-1., -1., -D), v(-1., 0., -D), v(0., 1., -D), v(1., 1., -D)],
            pink_to_orange(v(-1., -1., -D), v(1., 1., -D)),
        ),
        Face::new(
            vec![v(-1., -1., D), v(-1., 0., D), v(-1., 0., -D), v(-1., -1., -D)],
            pink_to_orange(v(-1., -1., 0.), v(-1., 1., 0.)),
        ),
        Face::new(
            vec![v(0., 1., -D), v(0., 1., D), v(1., 1., D), v(1., 1., -D)],
            pink_to_orange(v(-1., 1., 0.), v(1., 1., 0.)),
        ),
        Face::new(
            vec![v(0., 0., D), v(0., 0., -D), v(1., 1., -D), v(1., 1., D)],
            pink_to_orange(v(-1., -1., 0.), v(1., 1., 0.)),
        ),
        // Bottom chevron
        Face::new(
            vec![v(1., -1., D), v(0., 0., D), v(-1., -1., D)],
            blue_to_violet(v(-1., -1., D), v(0., 0., D)),
        ),
        Face::new(
            vec![v(-1., -1., -D), v(0., 0., -D), v(1., -1., -D)],
            blue_to_violet(v(-1., -1., -D), v(0., 0., -D)),
        ),
        Face::new(
            vec![v(-1., -1., -D), v(1., -1., -D), v(1., -1., D), v(-1., -1., D)],
            blue_to_violet(v(-1., -1., 0.), v(1., -1., 0.)),
        ),
        Face::new(
            vec![v(1., -1., -D), v(0., 0., -D), v(0., 0., D), v(1., -1., D)],
            FaceColor::Solid(Color::VIOLET),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cube_normals_point_outwards() {
        for face in cube().faces() {
            let centroid = face.points.iter().copied().sum::<DVec3>() / face.points.len() as f64;
            assert_relative_eq!(face.normal.dot(centroid), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn prism_normals_point_outwards() {
        let geometry = triangular_prism();
        let inside = DVec3::new(-0.5, -0.5, 0.0);
        for face in geometry.faces() {
            assert!(face.normal.dot(face.points[0] - inside) > 0.0);
        }
    }

    #[test]
    fn prism_caps_are_triangles() {
        let geometry = triangular_prism();
        let front = &geometry.faces()[0];
        assert!(front.point_at(-1.0, -1.0).is_some());
        assert!(front.point_at(1.0, 1.0).is_none());
    }

    #[test]
    fn face_counts() {
        assert_eq!(Shape::Cube.geometry().len(), 6);
        assert_eq!(Shape::TriangularPrism.geometry().len(), 5);
        assert_eq!(Shape::Logo.geometry().len(), 13);
    }

    #[test]
    fn names_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(shape.name().parse::<Shape>(), Ok(shape));
        }
        assert!("dodecahedron".parse::<Shape>().is_err());
    }
}
