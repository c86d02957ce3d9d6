//! Core game logic module for Snake
//!
//! This module contains the whole simulation without any I/O or rendering
//! dependencies. A host drives it by feeding elapsed time and input state to
//! [`GameSession::update`] and drawing [`GameSession::snapshot`].

pub mod config;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod session;
pub mod snake;
pub mod spawner;
pub mod vector;

// Re-export commonly used types
pub use config::GameConfig;
pub use error::GameError;
pub use food::{FoodCatalog, FoodEntity, FoodKind};
pub use grid::Grid;
pub use input::{InputKey, InputLatch};
pub use session::{CollisionType, GameSession, SessionSnapshot, SessionState, TickReport};
pub use snake::SnakeState;
pub use spawner::FoodSpawner;
pub use vector::{Direction, Vector2i};
