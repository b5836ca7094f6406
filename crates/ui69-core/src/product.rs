//! Product configuration trait for CLI binaries
//!
//! The core knows nothing about which component library it ships. Each binary
//! implements this trait to supply its identity, its registry table and the
//! location of its bundled template directory.

use std::path::PathBuf;

/// Configuration trait for component-library CLIs
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// One-line tagline shown in the splash banner
    fn tagline(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Command prefix used when printing examples
    fn runner(&self) -> &'static str {
        self.name()
    }

    /// The literal registry table (YAML), compiled into the binary
    fn registry_manifest(&self) -> &'static str;

    /// Directory holding the bundled component sources
    fn bundled_template_dir(&self) -> PathBuf;

    /// Component keys quoted in the usage examples
    fn example_components(&self) -> &'static [&'static str] {
        &[]
    }
}
