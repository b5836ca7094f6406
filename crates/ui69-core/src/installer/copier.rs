//! Single-file copy steps

use crate::error::{Result, ScaffoldError};
use crate::registry::FileCopy;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Fail if the bundled source is missing or cannot be inspected
pub async fn verify_source(file: &FileCopy) -> Result<()> {
    match fs::try_exists(&file.source).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ScaffoldError::MissingSourceFile {
            path: file.source.clone(),
        }),
        Err(source) => Err(ScaffoldError::FileCopy {
            dest: file.dest.clone(),
            source,
        }),
    }
}

/// Create the destination's parent directory and return the full destination path
pub async fn prepare_destination(file: &FileCopy, target_dir: &Path) -> Result<PathBuf> {
    let target_path = target_dir.join(&file.dest);

    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| ScaffoldError::DirectoryCreation {
                dest: file.dest.clone(),
                source,
            })?;
    }

    Ok(target_path)
}

/// Copy the source bytes over `target_path`, replacing whatever is there
pub async fn copy_source(file: &FileCopy, target_path: &Path) -> Result<u64> {
    fs::copy(&file.source, target_path)
        .await
        .map_err(|source| ScaffoldError::FileCopy {
            dest: file.dest.clone(),
            source,
        })
}
