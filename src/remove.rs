use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::RemoveError;

/// Deletes the file in a single attempt. There is no existence pre-check:
/// a `NotFound` failure from the delete itself is the not-found case, so
/// no window exists between checking and deleting.
pub(crate) fn remove_htaccess(filepath: &Path) -> Result<()> {
    match fs::remove_file(filepath) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(RemoveError::NotFound { path: filepath.display().to_string() }.into())
        }
        Err(err) => Err(err)
            .with_context(|| format!("Failed to delete file: {}", filepath.display())),
    }
}
