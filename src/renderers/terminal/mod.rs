// src/renderers/terminal/mod.rs
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::{error, info};
use std::io::{self, stdout, Write};
use std::panic;
use std::sync::Once;

pub mod engine;
pub mod mailbox;

pub use engine::Engine;
pub use mailbox::FrameMailbox;

/// Owns the terminal while frames are shown: alternate screen, raw mode, hidden cursor.
/// Everything is restored on drop, and by a panic hook if the process panics first.
pub struct TerminalRenderer {
    _private: (),
}

static PANIC_HOOK: Once = Once::new();

/// Chains a hook that restores the terminal in front of the current panic hook. Only the
/// first call installs it, so creating several renderers never stacks cleanups.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = TerminalRenderer::cleanup_terminal();
            eprintln!("\n=== Panic Occurred ===");
            error!("Panic occurred: {:?}", panic_info);
            original_hook(panic_info);
        }));
    });
}

impl TerminalRenderer {
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        let mut stdout = stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        info!("terminal ready");

        Ok(Self { _private: () })
    }

    /// Draws a complete frame from the top-left corner.
    pub fn present(&mut self, frame: &str) -> io::Result<()> {
        let mut stdout = stdout().lock();
        queue!(stdout, MoveTo(0, 0))?;
        // Raw mode doesn't translate '\n' into a carriage return.
        for (y, row) in frame.split('\n').enumerate() {
            if y > 0 {
                stdout.write_all(b"\r\n")?;
            }
            stdout.write_all(row.as_bytes())?;
        }
        stdout.flush()
    }

    fn cleanup_terminal() -> io::Result<()> {
        let mut stdout = stdout();
        disable_raw_mode()?;
        execute!(stdout, Show, LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = Self::cleanup_terminal() {
            error!("failed to restore terminal: {}", e);
        }
    }
}
