//! Grid Snake - a tick-driven snake simulation with a terminal front-end
//!
//! This library provides:
//! - Core game logic (game module), free of I/O
//! - Keyboard translation for the terminal host (input module)
//! - TUI rendering (render module)
//! - Per-process play statistics (metrics module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
