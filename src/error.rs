use thiserror::Error;

/// Errors at the application edge. The render core itself has none: misses are `None`,
/// contract violations panic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Logger setup failed: {0}")]
    Logger(String),

    #[error("Render thread panicked")]
    RenderThread,
}

pub type Result<T> = std::result::Result<T, Error>;
