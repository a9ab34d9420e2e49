//! Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris::{core,engine,input,term,types}`
//! and owns the runtime configuration used by the `tetris` binary.

pub mod config;

pub use tetris_core as core;
pub use tetris_engine as engine;
pub use tetris_input as input;
pub use tetris_term as term;
pub use tetris_types as types;

pub use config::{Config, ConfigError};
