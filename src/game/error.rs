use thiserror::Error;

/// Errors raised when building a game from invalid parameters.
///
/// Only construction can fail; a running session reports collisions and
/// food through its state, never through errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidGrid { width: usize, height: usize },
    #[error("initial snake length must be at least 1")]
    InvalidLength,
    #[error("{name} must be a positive finite duration, got {value}")]
    InvalidInterval { name: &'static str, value: f64 },
    #[error("food catalog must contain at least one kind")]
    EmptyCatalog,
    #[error("food kind `{name}` must be worth at least one point")]
    WorthlessFood { name: String },
}
