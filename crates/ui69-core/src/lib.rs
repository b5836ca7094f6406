//! ui69 Core - Shared library for copy-paste component CLIs
//!
//! This library provides the machinery behind `ui69 add` and `ui69 list`: a static
//! registry of component entries, an installer that copies bundled source files
//! into the caller's working directory, and the interactive selector.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Registry loading, file copying, version metadata
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the `commands` module
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based selector (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based selector
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use ui69_core::{ProductConfig, registry::Registry, installer};
//!
//! let registry = Registry::load(&MyConfig, None)?;
//! let entry = registry.lookup("button")?;
//! installer::install_component(entry, &std::env::current_dir()?).await?;
//! ```

pub mod commands;
pub mod error;
pub mod installer;
pub mod output;
pub mod product;
pub mod registry;
pub mod selection;
pub mod version;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use installer::{install_component, CopyResult};
pub use product::ProductConfig;
pub use registry::{ComponentEntry, FileCopy, Registry};
pub use selection::{Selection, Selector};

#[cfg(feature = "tui")]
pub use tui::ClackSelector;
