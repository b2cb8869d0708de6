//! Asset loading
//!
//! Text-format loaders that populate a [`Scene`](crate::scene::Scene): one
//! packed vertex file per model and one tile map per level. Every failure is
//! fatal for the session, so loaders either fully apply or leave the scene
//! untouched.

pub mod map_loader;
pub mod model_loader;

pub use map_loader::MapLoader;
pub use model_loader::ModelLoader;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading models or maps
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file does not exist
    #[error("Resource not found: {}", .path.display())]
    ResourceNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The file exists but could not be read
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Model file content does not match its declared float count
    #[error("Malformed model file {}: {reason}", .path.display())]
    MalformedModelFile {
        /// Model source
        path: PathBuf,
        /// What was wrong
        reason: String,
    },

    /// Map dimensions do not match the rows and columns present
    #[error("Malformed map file: {reason}")]
    MalformedMapFile {
        /// What was wrong
        reason: String,
    },

    /// Map character outside the tile vocabulary
    #[error("Unknown tile character {character:?} at row {row}, column {column}")]
    UnknownTileCharacter {
        /// Zero-based grid row
        row: usize,
        /// Zero-based grid column
        column: usize,
        /// Offending character
        character: char,
    },
}

/// Read a whole text resource, separating "missing" from other IO failures
pub(crate) fn read_resource(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::ResourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
