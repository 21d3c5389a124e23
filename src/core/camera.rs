use glam::DVec3;

/// Perspective parameters for a terminal screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionConfig {
    /// Camera distance from the origin. Must keep `z + z_offset` well away from zero for
    /// every point of the scene.
    pub z_offset: f64,
    /// Horizontal scale. Larger means more zoomed in.
    pub scale_x: f64,
    pub screen_width: usize,
    pub screen_height: usize,
}

impl ProjectionConfig {
    pub fn new(z_offset: f64, scale_x: f64, screen_width: usize, screen_height: usize) -> Self {
        Self {
            z_offset,
            scale_x,
            screen_width,
            screen_height,
        }
    }

    /// Terminal cells are about twice as tall as they are wide.
    pub fn scale_y(&self) -> f64 {
        self.scale_x / 2.0
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::new(5.0, 140.0, 240, 80)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: usize,
    pub y: usize,
    /// `1 / (z + z_offset)`. Larger is closer.
    pub depth: f64,
}

#[derive(Clone, Debug)]
pub struct Projector {
    config: ProjectionConfig,
    center_x: f64,
    center_y: f64,
}

impl Projector {
    /// # Panics
    /// If either screen dimension is zero.
    pub fn new(config: ProjectionConfig) -> Self {
        assert!(
            config.screen_width > 0 && config.screen_height > 0,
            "projection needs a non-empty screen, got {}x{}",
            config.screen_width,
            config.screen_height
        );
        Self {
            config,
            center_x: (config.screen_width / 2) as f64,
            center_y: (config.screen_height / 2) as f64,
        }
    }

    /// Projects a point that is already in rotated (camera-relative) space. `None` when it
    /// lands outside the screen.
    pub fn project(&self, point: DVec3) -> Option<ProjectedPoint> {
        let inv_z = 1.0 / (point.z + self.config.z_offset);
        // At or behind the camera plane.
        if !(inv_z.is_finite() && inv_z > 0.0) {
            return None;
        }

        let x = (self.center_x + point.x * self.config.scale_x * inv_z).round();
        // Screen rows grow downwards.
        let y = (self.center_y - point.y * self.config.scale_y() * inv_z).round();

        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.config.screen_width || y >= self.config.screen_height {
            return None;
        }

        Some(ProjectedPoint { x, y, depth: inv_z })
    }
}
