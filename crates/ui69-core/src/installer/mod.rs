//! Component installation
//!
//! Files are copied one at a time in list order. The first failure aborts the
//! install; files copied before it stay on disk. Existing destinations are
//! overwritten without comparison or backup.

pub mod copier;
pub mod dependencies;

use crate::error::Result;
use crate::output;
use crate::registry::ComponentEntry;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub use dependencies::install_command;

/// Outcome of one successful copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Copy every file of `entry` under `target_dir` and print its dependency hint
pub async fn install_component(
    entry: &ComponentEntry,
    target_dir: &Path,
) -> Result<Vec<CopyResult>> {
    output::title(&format!("Installing {} component", entry.name));

    let mut results = Vec::with_capacity(entry.files.len());

    for file in &entry.files {
        copier::verify_source(file).await?;

        let destination = copier::prepare_destination(file, target_dir).await?;
        let parent = Path::new(&file.dest)
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        output::success(&format!("Created directory for {}", parent));

        let bytes = copier::copy_source(file, &destination).await?;
        output::success(&format!("Created {}", file.dest.bold()));

        results.push(CopyResult {
            source: file.source.clone(),
            destination,
            bytes,
        });
    }

    if entry.has_dependencies() {
        print_dependencies(entry);
    }

    println!();
    output::success(&format!("{} installed successfully!", entry.name));

    Ok(results)
}

fn print_dependencies(entry: &ComponentEntry) {
    println!();
    output::info(&format!("{} requires the following dependencies:", entry.name));
    for dep in &entry.dependencies {
        output::code(&format!("  {}", dep));
    }

    println!();
    println!("Install them with:");
    output::code(&format!("  {}", install_command(&entry.dependencies)));
}
