mod face;
mod face_color;

pub use face::Face;
pub use face_color::FaceColor;

/// An ordered, immutable set of faces. Order only matters for overdraw, visibility is
/// settled by the depth test.
#[derive(Clone, Debug)]
pub struct Geometry {
    faces: Vec<Face>,
}

impl Geometry {
    /// # Panics
    /// If `faces` is empty.
    pub fn new(faces: Vec<Face>) -> Self {
        assert!(!faces.is_empty(), "geometry needs at least one face");
        Self { faces }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Distance from the origin to the farthest vertex. Any rotation about the origin keeps
    /// every point within this radius.
    pub fn bounding_radius(&self) -> f64 {
        self.faces
            .iter()
            .flat_map(|face| face.points.iter())
            .map(|p| p.length())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shape;
    use approx::assert_relative_eq;

    #[test]
    fn bounding_radius_reaches_the_farthest_corner() {
        assert_relative_eq!(Shape::Cube.geometry().bounding_radius(), 3f64.sqrt());
        assert_relative_eq!(
            Shape::Logo.geometry().bounding_radius(),
            (2.0f64 + 0.25 * 0.25).sqrt()
        );
    }
}
