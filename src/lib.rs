//! Classic grid Snake: a deterministic tick simulation plus thin terminal
//! wrappers for input, rendering and terminal lifecycle.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
