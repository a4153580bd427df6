use std::env;
use std::path::{Path, PathBuf};
use anyhow::Result;

pub(crate) fn expand_home(path: &str) -> Result<PathBuf> {
    let expanded_path = if path.starts_with("~/") {
        let home = env::var("HOME")?;
        PathBuf::from(home).join(&path[2..])
    } else {
        PathBuf::from(path)
    };
    Ok(expanded_path)
}

/// Appends the literal `/.htaccess` segment to the site root.
/// Plain concatenation, no normalization of the supplied path.
pub(crate) fn htaccess_path(site_root: &Path) -> PathBuf {
    PathBuf::from(format!("{}/.htaccess", site_root.display()))
}
