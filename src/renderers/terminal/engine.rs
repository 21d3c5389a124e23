use super::{FrameMailbox, TerminalRenderer};
use crate::animation::Animation;
use crate::error::{Error, Result};
use crate::pipeline::Renderer;
use crate::Metrics;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, info};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Runs the render thread and the display loop.
///
/// The render thread owns the [`Renderer`] and the [`Animation`], producing whole frames
/// into a [`FrameMailbox`]. The display side only ever shows the newest one. Stopping is
/// cooperative: the stop flag is checked between frames, never inside one.
pub struct Engine {
    renderer: Renderer,
    animation: Animation,
    frame_limit: Option<u64>,
    stop: Arc<AtomicBool>,
    mailbox: Arc<FrameMailbox>,
}

impl Engine {
    pub fn new(renderer: Renderer, animation: Animation) -> Self {
        Self {
            renderer,
            animation,
            frame_limit: None,
            stop: Arc::new(AtomicBool::new(false)),
            mailbox: Arc::new(FrameMailbox::new()),
        }
    }

    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    /// Setting this flag ends [`Engine::run`] after the current frame.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn run(self, terminal: &mut TerminalRenderer) -> Result<Metrics> {
        self.run_with(|frame| terminal.present(frame), Self::handle_input)
    }

    /// Display loop with pluggable output and input, so it can be driven without a
    /// terminal. `should_quit` is polled once per iteration.
    pub fn run_with<P, Q>(self, mut present: P, mut should_quit: Q) -> Result<Metrics>
    where
        P: FnMut(&str) -> io::Result<()>,
        Q: FnMut() -> io::Result<bool>,
    {
        let Engine {
            renderer,
            animation,
            frame_limit,
            stop,
            mailbox,
        } = self;

        let poll = animation.frame_delay.max(Duration::from_millis(1));
        let producer = spawn_render_thread(
            renderer,
            animation,
            Arc::clone(&stop),
            Arc::clone(&mailbox),
        );
        info!("render thread started");

        let mut metrics = Metrics::new();
        let mut shown = 0u64;
        let result = (|| -> Result<()> {
            while !stop.load(Ordering::Acquire) {
                if frame_limit.is_some_and(|limit| shown >= limit) {
                    break;
                }
                if should_quit()? {
                    info!("quit requested");
                    break;
                }
                let Some(frame) = mailbox.wait_latest(poll) else {
                    if producer.is_finished() {
                        // Render thread died without being asked to stop.
                        return Err(Error::RenderThread);
                    }
                    continue;
                };

                present(&*frame)?;
                let now = Instant::now();
                metrics.update(now - metrics.last_frame);
                metrics.last_frame = now;
                shown += 1;
            }
            Ok(())
        })();

        stop.store(true, Ordering::Release);
        let rendered = producer.join().map_err(|_| Error::RenderThread)?;
        info!(
            "stopped: {} rendered, {} shown, {} dropped | {}",
            rendered,
            shown,
            mailbox.dropped(),
            metrics
        );
        result.map(|_| metrics)
    }

    fn handle_input() -> io::Result<bool> {
        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(false);
                }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(true)
                    }
                    _ => {}
                }
            }
        }
        Ok(false)
    }
}

/// Renders and publishes frames until `stop` is set. Returns how many frames it produced.
fn spawn_render_thread(
    mut renderer: Renderer,
    mut animation: Animation,
    stop: Arc<AtomicBool>,
    mailbox: Arc<FrameMailbox>,
) -> JoinHandle<u64> {
    thread::spawn(move || {
        let mut rendered = 0u64;
        while !stop.load(Ordering::Acquire) {
            let start = Instant::now();
            let (angle_x, angle_y) = animation.angles();
            let frame = renderer.render_frame(angle_x, angle_y);
            mailbox.publish(frame);
            rendered += 1;
            animation.advance();

            if rendered % 600 == 0 {
                debug!(
                    "{} frames rendered, last took {:.2}ms",
                    rendered,
                    start.elapsed().as_secs_f64() * 1000.0
                );
            }
            thread::sleep(animation.frame_delay);
        }
        rendered
    })
}
