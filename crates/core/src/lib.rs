//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has **no dependencies** on
//! UI, input devices or I/O, making it:
//!
//! - **Deterministic**: the piece source is injected, so a seed or a scripted
//!   sequence reproduces a game exactly
//! - **Testable**: every rule is a plain function or method
//! - **Portable**: the same engine can sit behind a terminal, a canvas or a
//!   headless harness
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, full-row detection and line clearing
//! - [`shape`]: square occupancy grids
//! - [`pieces`]: the seven-piece catalog (shape + color) and spawn placement
//! - [`collision`]: shape vs. board overlap test
//! - [`rotation`]: 90° grid rotation
//! - [`rng`]: injectable piece sources
//! - [`scoring`]: 100 points per cleared row
//! - [`game_state`]: the engine - active piece, gravity, locking, session
//! - [`snapshot`]: read-only views for renderers
//!
//! # Game Rules
//!
//! - Pieces are chosen uniformly at random and spawn centered on row 0
//! - Gravity moves the piece one row after 1000ms of accumulated frame time
//! - Rotation happens in place; there are no wall kicks
//! - A piece that cannot move down locks immediately
//! - The game ends when a newly spawned piece overlaps the board
//!
//! # Example
//!
//! ```
//! use tetris_core::GameState;
//! use tetris_types::{Command, SessionState};
//!
//! let mut game = GameState::with_seed(12345);
//! game.start();
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//! game.apply_command(Command::HardDrop);
//!
//! assert_eq!(game.session(), SessionState::Running);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) once per frame with
//! the milliseconds elapsed since the previous frame.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{get_shape, piece_def, spawn_offset, PieceDef, CATALOG};
pub use rng::{PieceSource, ScriptedPieces, SimpleRng};
pub use rotation::rotate;
pub use scoring::line_clear_score;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
