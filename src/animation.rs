use std::time::Duration;

/// Rotation angles advancing a fixed step per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub angle_x: f64,
    pub angle_y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub frame_delay: Duration,
}

impl Animation {
    pub fn new(speed_x: f64, speed_y: f64, frame_delay: Duration) -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            speed_x,
            speed_y,
            frame_delay,
        }
    }

    pub fn angles(&self) -> (f64, f64) {
        (self.angle_x, self.angle_y)
    }

    /// Steps both angles, wrapping at a full turn so they stay small over long runs.
    pub fn advance(&mut self) {
        self.angle_x = (self.angle_x + self.speed_x) % std::f64::consts::TAU;
        self.angle_y = (self.angle_y + self.speed_y) % std::f64::consts::TAU;
    }
}

impl Default for Animation {
    fn default() -> Self {
        // 16ms ~ 60 fps
        Self::new(0.02, 0.012, Duration::from_millis(16))
    }
}
