//! Rule engine and terminal presentation for a fixed-grid Snake game.
//!
//! The core (snake state, collision, food placement, input mapping) is pure
//! and deterministic given a seeded RNG; the renderer and terminal session
//! are thin wrappers over ratatui/crossterm.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
