//! Registry manifest types and parsing

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Component, Path};

/// A source file and where it lands in the consumer project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSpec {
    /// Source path relative to the bundled template directory
    pub src: String,

    /// Destination path relative to the working directory
    pub dest: String,
}

/// One row of the registry table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Unique key used on the command line (e.g. "button")
    pub key: String,

    /// Display name of the component
    pub name: String,

    /// Description shown by `list`
    pub description: String,

    /// Third-party packages the user installs manually
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Files to copy, in order
    pub files: Vec<FileSpec>,
}

/// Registry manifest (components/registry.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryManifest {
    /// Entries in display order
    pub components: Vec<ComponentSpec>,
}

impl RegistryManifest {
    /// Parse and validate a manifest document
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: RegistryManifest =
            serde_yaml::from_str(content).map_err(|e| ScaffoldError::InvalidRegistry {
                reason: e.to_string(),
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for component in &self.components {
            if component.key.trim().is_empty() {
                return Err(invalid(format!(
                    "component '{}' has an empty key",
                    component.name
                )));
            }
            if !seen.insert(component.key.as_str()) {
                return Err(invalid(format!("duplicate key '{}'", component.key)));
            }
            if component.files.is_empty() {
                return Err(invalid(format!("'{}' lists no files", component.key)));
            }
            for file in &component.files {
                if !is_plain_relative(&file.src) || !is_plain_relative(&file.dest) {
                    return Err(invalid(format!(
                        "'{}' has a non-relative path: {} -> {}",
                        component.key, file.src, file.dest
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(reason: String) -> ScaffoldError {
    ScaffoldError::InvalidRegistry { reason }
}

/// Relative, non-empty, and never climbs out of its base directory
fn is_plain_relative(path: &str) -> bool {
    let path = Path::new(path);
    path.file_name().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
