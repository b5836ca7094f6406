//! Component registry
//!
//! The registry is a fixed table compiled into the binary. It is parsed fresh
//! on every load and is never mutated or persisted. Loading fails when the
//! bundled template directory is missing, since no entry could be installed.

pub mod manifest;

use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

pub use manifest::{ComponentSpec, FileSpec, RegistryManifest};

/// A single copy instruction with its source resolved against the template root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCopy {
    /// Absolute (or template-root-relative) path of the bundled source
    pub source: PathBuf,

    /// Destination relative to the working directory
    pub dest: String,
}

/// One component's metadata record
#[derive(Debug, Clone)]
pub struct ComponentEntry {
    pub key: String,
    pub name: String,
    pub description: String,
    pub dependencies: Vec<String>,
    pub files: Vec<FileCopy>,
}

impl ComponentEntry {
    fn from_spec(spec: ComponentSpec, template_root: &Path) -> Self {
        let files = spec
            .files
            .into_iter()
            .map(|f| FileCopy {
                source: template_root.join(&f.src),
                dest: f.dest,
            })
            .collect();

        Self {
            key: spec.key,
            name: spec.name,
            description: spec.description,
            dependencies: spec.dependencies,
            files,
        }
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

/// Ordered, immutable table of all known components
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<ComponentEntry>,
}

impl Registry {
    /// Load the product's registry, using `template_dir` instead of the bundled
    /// directory when given
    pub fn load<C: ProductConfig>(config: &C, template_dir: Option<&Path>) -> Result<Self> {
        let root = template_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.bundled_template_dir());
        Self::from_manifest(config.registry_manifest(), root)
    }

    /// Build a registry from manifest text rooted at `template_root`
    pub fn from_manifest(content: &str, template_root: PathBuf) -> Result<Self> {
        if !template_root.is_dir() {
            return Err(ScaffoldError::MissingRegistryDirectory {
                path: template_root,
            });
        }

        let manifest = RegistryManifest::parse(content)?;
        let entries = manifest
            .components
            .into_iter()
            .map(|spec| ComponentEntry::from_spec(spec, &template_root))
            .collect();

        Ok(Self { entries })
    }

    /// Find an entry by key
    pub fn lookup(&self, key: &str) -> Result<&ComponentEntry> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| ScaffoldError::UnknownComponent {
                key: key.to_string(),
                available: self.keys(),
            })
    }

    /// All entries in definition order
    pub fn entries(&self) -> &[ComponentEntry] {
        &self.entries
    }

    /// All keys in definition order
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }
}
