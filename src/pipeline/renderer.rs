use crate::core::{Face, Geometry, PointLight, ProjectionConfig, Projector, Rotation};
use crate::pipeline::{AsciiMapper, Fragment, FrameBuffer, RenderConfig};
use glam::DVec3;
use log::{debug, trace};
use rayon::prelude::*;
use std::sync::Arc;

/// Sample counts for the last rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Grid points that landed inside a face.
    pub samples: usize,
    /// Samples that projected onto the screen.
    pub fragments: usize,
    /// Fragments that won their depth test when submitted.
    pub written: usize,
}

/// Turns a geometry and a pair of angles into a frame of text.
///
/// Owns its projector and frame buffer. The geometry, light and configs are read-only, so
/// the output depends on nothing but them and the angles passed to
/// [`Renderer::render_frame`].
pub struct Renderer {
    geometry: Arc<Geometry>,
    light: PointLight,
    config: RenderConfig,
    projector: Projector,
    mapper: AsciiMapper,
    frame_buffer: FrameBuffer,
    grid: Vec<f64>,
    stats: FrameStats,
}

impl Renderer {
    /// # Panics
    /// If the screen is empty or the sampling step is not positive.
    pub fn new(
        geometry: Arc<Geometry>,
        projection: ProjectionConfig,
        light: PointLight,
        config: RenderConfig,
    ) -> Self {
        let grid = sample_grid(config.sampling_step);
        debug!(
            "renderer: {} faces, {}x{} screen, {} samples per axis, parallel = {}",
            geometry.len(),
            projection.screen_width,
            projection.screen_height,
            grid.len(),
            config.parallel
        );

        Self {
            geometry,
            light,
            config,
            projector: Projector::new(projection),
            mapper: AsciiMapper::new(config.min_color_brightness),
            frame_buffer: FrameBuffer::new(projection.screen_width, projection.screen_height),
            grid,
            stats: FrameStats::default(),
        }
    }

    pub fn render_frame(&mut self, angle_x: f64, angle_y: f64) -> String {
        self.frame_buffer.clear();

        let stage = FaceStage {
            rotation: Rotation::new(angle_x, angle_y),
            light: &self.light,
            projector: &self.projector,
            mapper: &self.mapper,
            grid: &self.grid,
        };

        let mut stats = FrameStats::default();
        let buffer = &mut self.frame_buffer;

        if self.config.parallel {
            // Compute in parallel, merge in face order so ties resolve exactly as in the
            // sequential path.
            let per_face: Vec<(usize, Vec<Fragment>)> = self
                .geometry
                .faces()
                .par_iter()
                .map(|face| {
                    let mut frags = Vec::new();
                    let samples = stage.sample_face(face, |f| frags.push(f));
                    (samples, frags)
                })
                .collect();

            for (samples, frags) in per_face {
                stats.samples += samples;
                stats.fragments += frags.len();
                for f in frags {
                    if buffer.try_set_pixel(f.x, f.y, f.depth, f.pixel) {
                        stats.written += 1;
                    }
                }
            }
        } else {
            for face in self.geometry.faces() {
                let (mut fragments, mut written) = (0, 0);
                let samples = stage.sample_face(face, |f| {
                    fragments += 1;
                    if buffer.try_set_pixel(f.x, f.y, f.depth, f.pixel) {
                        written += 1;
                    }
                });
                stats.samples += samples;
                stats.fragments += fragments;
                stats.written += written;
            }
        }

        trace!(
            "frame ({:.3}, {:.3}): {} samples, {} fragments, {} written, {} lit cells",
            angle_x,
            angle_y,
            stats.samples,
            stats.fragments,
            stats.written,
            self.frame_buffer.lit_cells()
        );
        self.stats = stats;

        self.frame_buffer.render()
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub fn last_stats(&self) -> FrameStats {
        self.stats
    }
}

/// Everything one face needs to turn grid points into fragments for a single frame.
struct FaceStage<'a> {
    rotation: Rotation,
    light: &'a PointLight,
    projector: &'a Projector,
    mapper: &'a AsciiMapper,
    grid: &'a [f64],
}

impl FaceStage<'_> {
    /// Walks the grid over `face`, handing every on-screen sample to `emit`. Returns how
    /// many grid points were inside the polygon.
    fn sample_face(&self, face: &Face, mut emit: impl FnMut(Fragment)) -> usize {
        let normal = self.rotation.apply(face.normal);
        let mut samples = 0;

        for &v in self.grid {
            for &u in self.grid {
                let Some(point) = face.point_at(u, v) else {
                    continue;
                };
                samples += 1;
                if let Some(fragment) = self.shade(face, point, normal) {
                    emit(fragment);
                }
            }
        }
        samples
    }

    fn shade(&self, face: &Face, point: DVec3, rotated_normal: DVec3) -> Option<Fragment> {
        let rotated = self.rotation.apply(point);
        // Color lives in object space, lighting in view space.
        let color = face.color.color_at(point);
        let brightness = self.light.diffuse(rotated, rotated_normal);
        let projected = self.projector.project(rotated)?;

        Some(Fragment {
            x: projected.x,
            y: projected.y,
            depth: projected.depth,
            pixel: self.mapper.shade(brightness, color),
        })
    }
}

/// Sample positions spanning [-1, 1]. Built from the index so the endpoints don't drift.
fn sample_grid(step: f64) -> Vec<f64> {
    assert!(
        step > 0.0 && step.is_finite(),
        "sampling step must be positive, got {}",
        step
    );
    let steps = (2.0 / step + 1e-9).floor() as usize;
    (0..=steps).map(|i| -1.0 + i as f64 * step).collect()
}
