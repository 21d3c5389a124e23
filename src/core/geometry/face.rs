use super::FaceColor;
use glam::{DVec2, DVec3};

/// A planar polygon in 3D.
///
/// The vertices are flattened once, at construction, into a 2D frame lying on the face's
/// plane. Sampling then only needs a 2D point-in-polygon test instead of a 3D one.
///
/// The normal comes from the first three vertices, so winding and planarity are the
/// caller's job.
#[derive(Clone, Debug)]
pub struct Face {
    pub points: Vec<DVec3>,
    pub color: FaceColor,
    pub normal: DVec3,

    origin: DVec3,
    basis_u: DVec3,
    basis_v: DVec3,
    projected: Vec<DVec2>,
    min: DVec2,
    max: DVec2,
}

impl Face {
    /// # Panics
    /// If fewer than three vertices are given.
    pub fn new(points: Vec<DVec3>, color: FaceColor) -> Self {
        assert!(
            points.len() >= 3,
            "a face needs at least 3 vertices, got {}",
            points.len()
        );

        let origin = points[0];
        // Right-hand rule: (p1 - p0) x (p2 - p0)
        let normal = (points[1] - origin).cross(points[2] - origin).normalize();

        let axis = least_parallel_axis(normal);
        let basis_u = (axis - normal * axis.dot(normal)).normalize();
        let basis_v = normal.cross(basis_u).normalize();

        let projected: Vec<DVec2> = points
            .iter()
            .map(|p| {
                let rel = *p - origin;
                DVec2::new(rel.dot(basis_u), rel.dot(basis_v))
            })
            .collect();

        let (min, max) = projected.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );

        Self {
            points,
            color,
            normal,
            origin,
            basis_u,
            basis_v,
            projected,
            min,
            max,
        }
    }

    /// Maps normalized coordinates in [-1, 1] across the face's bounding box to a point on
    /// the face, or `None` when that spot of the box lies outside the polygon.
    pub fn point_at(&self, u: f64, v: f64) -> Option<DVec3> {
        let local = self.min + (DVec2::new(u, v) + 1.0) * 0.5 * (self.max - self.min);

        if !self.contains_local(local) {
            return None;
        }

        Some(self.origin + self.basis_u * local.x + self.basis_v * local.y)
    }

    /// Ray casting towards +X. Edges are half-open in Y so a ray through a shared vertex
    /// is only counted once.
    fn contains_local(&self, test: DVec2) -> bool {
        let n = self.projected.len();
        let mut crossings = 0;
        for i in 0..n {
            let a = self.projected[i];
            let b = self.projected[(i + 1) % n];

            if a.y == b.y {
                continue;
            }
            if test.y < a.y.min(b.y) || test.y >= a.y.max(b.y) {
                continue;
            }

            let x_intersect = a.x + (test.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if test.x < x_intersect {
                crossings += 1;
            }
        }
        crossings % 2 == 1
    }
}

/// World axis with the smallest component along `normal`. Ties go to X, then Y.
fn least_parallel_axis(normal: DVec3) -> DVec3 {
    let a = normal.abs();
    if a.x <= a.y && a.x <= a.z {
        DVec3::X
    } else if a.y <= a.z {
        DVec3::Y
    } else {
        DVec3::Z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Face {
        Face::new(
            vec![
                DVec3::new(-1.0, -1.0, 0.0),
                DVec3::new(1.0, -1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(-1.0, 1.0, 0.0),
            ],
            FaceColor::default(),
        )
    }

    // The lower-left half of the unit square, i.e. the `u + v <= 0` side.
    fn carved_triangle() -> Face {
        Face::new(
            vec![
                DVec3::new(-1.0, -1.0, 0.5),
                DVec3::new(1.0, -1.0, 0.5),
                DVec3::new(-1.0, 1.0, 0.5),
            ],
            FaceColor::default(),
        )
    }

    #[test]
    fn normal_follows_winding() {
        assert_eq!(unit_square().normal, DVec3::Z);

        let reversed = Face::new(
            vec![
                DVec3::new(-1.0, -1.0, 0.0),
                DVec3::new(-1.0, 1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
            ],
            FaceColor::default(),
        );
        assert_eq!(reversed.normal, DVec3::NEG_Z);
    }

    #[test]
    fn basis_is_orthonormal_and_in_plane() {
        let tilted = Face::new(
            vec![
                DVec3::new(-1.0, 1.0, -0.5),
                DVec3::new(-1.0, 1.0, 0.5),
                DVec3::new(1.0, -1.0, 0.5),
                DVec3::new(1.0, -1.0, -0.5),
            ],
            FaceColor::default(),
        );
        assert_relative_eq!(tilted.basis_u.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tilted.basis_v.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tilted.basis_u.dot(tilted.basis_v), 0.0, epsilon = 1e-12);
        assert_relative_eq!(tilted.basis_u.dot(tilted.normal), 0.0, epsilon = 1e-12);
        assert_relative_eq!(tilted.basis_v.dot(tilted.normal), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn square_centroid_is_inside() {
        let p = unit_square().point_at(0.0, 0.0).unwrap();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn square_maps_bounding_box_onto_face() {
        let face = unit_square();
        let p = face.point_at(-1.0, -1.0).unwrap();
        assert_relative_eq!(p.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-12);

        let q = face.point_at(0.5, -0.5).unwrap();
        assert_relative_eq!(q.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(q.y, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn triangle_rejects_cut_corner() {
        let face = carved_triangle();
        assert!(face.point_at(1.0, 1.0).is_none());
        assert!(face.point_at(0.5, 0.6).is_none());
    }

    #[test]
    fn triangle_keeps_far_corner() {
        let face = carved_triangle();
        let p = face.point_at(-1.0, -1.0).unwrap();
        assert_relative_eq!(p.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.5, epsilon = 1e-12);
        assert!(face.point_at(-0.5, -0.4).is_some());
    }

    #[test]
    fn points_outside_the_box_miss() {
        let face = unit_square();
        assert!(face.point_at(1.5, 0.0).is_none());
        assert!(face.point_at(0.0, -3.0).is_none());
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        // An L shape missing its upper-right quadrant.
        let face = Face::new(
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(2.0, 0.0, 0.0),
                DVec3::new(2.0, 1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(1.0, 2.0, 0.0),
                DVec3::new(0.0, 2.0, 0.0),
            ],
            FaceColor::default(),
        );
        assert!(face.point_at(0.5, 0.5).is_none());
        assert!(face.point_at(-0.5, 0.5).is_some());
        assert!(face.point_at(0.5, -0.5).is_some());
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn two_vertices_panic() {
        Face::new(vec![DVec3::ZERO, DVec3::X], FaceColor::default());
    }
}
