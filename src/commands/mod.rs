pub mod console;
pub mod convert;
pub mod session;

pub use console::Console;
pub use session::Session;

use thiserror::Error;

/// Errors that end an interactive session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed")]
    InputClosed,
}
