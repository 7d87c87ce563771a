use std::path::{Path, PathBuf};

use studio_core::paths::MILESTONES_DIR;

/// Resolve the project root.
///
/// Priority:
/// 1. `--root` flag / `STUDIO_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `docs/milestones/`
/// 3. Walk upward from `cwd` looking for `.git`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_upward(&cwd, |dir| dir.join(MILESTONES_DIR).is_dir())
        .or_else(|| find_upward(&cwd, |dir| dir.join(".git").exists()))
        .unwrap_or(cwd)
}

fn find_upward(start: &Path, matches: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| matches(dir))
        .map(Path::to_path_buf)
}
