use std::{
    collections::VecDeque,
    fmt::Display,
    time::{Duration, Instant},
};

pub mod animation;
pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod renderers;

pub use animation::Animation;
pub use self::core::geometry;
pub use self::core::Color;
pub use self::core::Shape;
pub use error::{Error, Result};
pub use pipeline::{RenderConfig, Renderer};

/// Rolling frame timing for the display loop.
#[derive(Debug)]
pub struct Metrics {
    pub last_frame: Instant,
    pub frames: u64,
    pub fps_counter: u32,
    pub fps_update_timer: Instant,
    pub current_fps: f32,
    pub frame_times: VecDeque<f32>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    const WINDOW: usize = 120;

    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frames: 0,
            fps_counter: 0,
            fps_update_timer: Instant::now(),
            current_fps: 0.0,
            frame_times: VecDeque::with_capacity(Self::WINDOW),
        }
    }

    pub fn update(&mut self, frame_delta: Duration) {
        self.frames += 1;
        self.fps_counter += 1;
        if self.frame_times.len() == Self::WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_delta.as_secs_f32() * 1000.0);

        let elapsed = self.fps_update_timer.elapsed();
        if elapsed >= Duration::from_secs(1) {
            self.current_fps = self.fps_counter as f32 / elapsed.as_secs_f32();
            self.fps_counter = 0;
            self.fps_update_timer = Instant::now();
        }
    }

    pub fn average_frame_time(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frames: {} | FPS: {:.2} | Avg: {:.2}ms | Min: {:.2}ms | Max: {:.2}ms",
            self.frames,
            self.current_fps,
            self.average_frame_time(),
            self.frame_times
                .iter()
                .copied()
                .reduce(f32::min)
                .unwrap_or(0.0),
            self.frame_times
                .iter()
                .copied()
                .reduce(f32::max)
                .unwrap_or(0.0)
        )
    }
}
