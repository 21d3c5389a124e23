use glam::{DMat3, DVec3};

/// Rotation about X by `angle_x`, then about Y by `angle_y` (radians).
///
/// The combined matrix is built once so a whole frame of samples can share it. There is no
/// accumulated state: the same angles always give the same matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    mat: DMat3,
}

impl Rotation {
    pub fn new(angle_x: f64, angle_y: f64) -> Self {
        // Column vectors, so Rx is applied first.
        let mat = DMat3::from_rotation_y(angle_y) * DMat3::from_rotation_x(angle_x);
        Self { mat }
    }

    pub fn apply(&self, v: DVec3) -> DVec3 {
        self.mat * v
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self { mat: DMat3::IDENTITY }
    }
}

pub fn rotate_xy(v: DVec3, angle_x: f64, angle_y: f64) -> DVec3 {
    Rotation::new(angle_x, angle_y).apply(v)
}
