//! This module provides the `ScriptLoader` struct, responsible for loading move scripts
//! from files and strings.

use crate::parser::parse_script;
use crate::types::{HanoiError, Move};
use std::fs;
use std::path::Path;

/// `ScriptLoader` is a utility struct for loading move scripts.
/// A script holds one move per line, for example `1 -> 3`.
pub struct ScriptLoader;

impl ScriptLoader {
    /// Loads a move script from the specified file path.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Move>)` if the file is successfully read and parsed.
    /// * `Err(HanoiError::FileError)` if the file cannot be read.
    /// * `Err(HanoiError::ParseError)` if the file content is not a valid script.
    pub fn load_script(path: &Path) -> Result<Vec<Move>, HanoiError> {
        let content = fs::read_to_string(path).map_err(|e| {
            HanoiError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Self::load_script_from_string(&content)
    }

    /// Loads a move script from the provided string content.
    pub fn load_script_from_string(content: &str) -> Result<Vec<Move>, HanoiError> {
        parse_script(content)
    }
}
