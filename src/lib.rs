//! Merge2048 Core - a deterministic 2048-style sliding tile engine
//!
//! This crate provides the core game logic for a 4x4 sliding tile puzzle:
//! directional moves via a single canonical compress/merge pass reused for
//! all four directions through grid rotation, weighted random tile
//! spawning, score and max-tile tracking, and terminal detection.
//!
//! Randomness is injected: the board operations take any [`rand::Rng`],
//! and [`Game`] wraps a board with a seedable ChaCha RNG so whole games
//! are reproducible from a `u64` seed.
//!
//! ## Modules
//!
//! - [`board`] - The 4x4 board and move algorithm
//! - [`direction`] - The four move directions
//! - [`session`] - Game session management
//! - [`config`] - Game configuration
//! - [`renderer`] - Text and JSON renderers
//!
//! ## Example
//!
//! ```
//! use merge2048_core::{Direction, Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::seeded(42));
//! let result = game.step(Direction::Left);
//! println!("Score: {}, Changed: {}", game.score(), result.changed);
//! ```

pub mod board;
pub mod config;
pub mod direction;
pub mod renderer;
pub mod session;

// Core types
pub use board::{Board, Grid, FOUR_TILE_CHANCE, GRID_SIZE};
pub use config::GameConfig;
pub use direction::Direction;
pub use session::{Game, GameState, StepResult};

// Rendering
pub use renderer::{CompactJsonRenderer, JsonRenderer, Renderer, TextRenderer};
