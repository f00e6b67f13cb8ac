//! This crate provides the core rule engine for the Tower of Hanoi puzzle.
//! It includes modules for the disk and tower data model, the game session that enforces
//! the puzzle's rules, a parser for textual move notation, and a plain-text board renderer.

pub mod game;
pub mod loader;
pub mod parser;
pub mod render;
pub mod tower;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `Game` and `Snapshot` structs and the `Row` alias from the game module.
pub use game::{Game, Row, Snapshot};
/// Re-exports the `ScriptLoader` struct from the loader module.
pub use loader::ScriptLoader;
/// Re-exports the notation parsing functions from the parser module.
pub use parser::{parse_move, parse_script};
/// Re-exports the board renderer and instructions text from the render module.
pub use render::{render_board, HELP_MESSAGE};
/// Re-exports the `Tower` struct from the tower module.
pub use tower::Tower;
/// Re-exports the data model and error types from the types module.
pub use types::{
    Disk, HanoiError, Move, MoveError, MoveOutcome, Slot, TowerId, DEFAULT_DISKS, MAX_DISKS,
    MIN_DISKS, TOWER_COUNT,
};
