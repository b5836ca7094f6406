//! Error types for registry loading, installation and selection

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure is terminal for the current invocation
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Components directory not found: {}", path.display())]
    MissingRegistryDirectory { path: PathBuf },

    #[error("Invalid component registry: {reason}")]
    InvalidRegistry { reason: String },

    #[error("Component '{key}' not found.")]
    UnknownComponent { key: String, available: Vec<String> },

    #[error("Source file not found: {}", path.display())]
    MissingSourceFile { path: PathBuf },

    #[error("Failed to create directory for {dest}")]
    DirectoryCreation {
        dest: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy file to {dest}")]
    FileCopy {
        dest: String,
        #[source]
        source: io::Error,
    },

    #[error("Component selection cancelled")]
    SelectorCancelled,

    #[error("Error selecting components")]
    Prompt(#[source] io::Error),

    #[error("Unable to read package version '{version}'")]
    VersionMetadataUnreadable {
        version: String,
        #[source]
        source: semver::Error,
    },
}

impl ScaffoldError {
    /// Hint lines printed under the error message
    pub fn hints(&self) -> Vec<String> {
        match self {
            ScaffoldError::MissingRegistryDirectory { .. } => vec![
                "Make sure the package is installed correctly and the components directory exists."
                    .to_string(),
            ],
            ScaffoldError::MissingSourceFile { path } => {
                vec![format!("Expected at: {}", path.display())]
            }
            _ => Vec::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
