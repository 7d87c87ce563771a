use crate::error::{Result, StudioError};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Milestone documents live here, relative to the project root.
pub const MILESTONES_DIR: &str = "docs/milestones";
pub const MILESTONE_EXTENSION: &str = "md";

pub const MILESTONES_DIR_ENV: &str = "STUDIO_MILESTONES_DIR";
pub const AUTO_SYNC_ENV: &str = "STUDIO_AUTO_SYNC";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn default_milestones_dir(root: &Path) -> PathBuf {
    root.join(MILESTONES_DIR)
}

/// Expand a leading `~` and make `path` absolute.
///
/// Relative paths are joined onto `cwd`. When the result exists it is
/// canonicalized so symlinks and `..` segments are resolved.
pub fn resolve_override(path: &Path, cwd: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };
    Ok(absolute.canonicalize().unwrap_or(absolute))
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = home::home_dir().ok_or(StudioError::HomeNotFound)?;
    Ok(home.join(rest))
}

pub fn is_milestone_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MILESTONE_EXTENSION)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
