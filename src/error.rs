use std::io;

use thiserror::Error;

/// Process-boundary errors.
///
/// The game rules themselves have no recoverable error conditions (growth at
/// capacity is silently ignored and collisions reset the round), so errors
/// only arise from the terminal collaborator. All of them are fatal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal session failed: {0}")]
    Terminal(#[from] io::Error),
}
