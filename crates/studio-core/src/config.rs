use crate::error::Result;
use crate::paths;
use std::path::{Path, PathBuf};

/// Values that steer where milestones are read from and whether git
/// auto-sync runs. Built once by the front-end and passed down; the library
/// never reads the process environment on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_root: PathBuf,
    pub milestones_override: Option<PathBuf>,
    pub auto_sync: bool,
}

impl Config {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            milestones_override: None,
            auto_sync: false,
        }
    }

    /// Read `STUDIO_MILESTONES_DIR` and `STUDIO_AUTO_SYNC` from the process
    /// environment.
    pub fn from_env(project_root: impl Into<PathBuf>) -> Self {
        Self::from_lookup(project_root, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with a caller-supplied lookup, so
    /// tests can provide values without touching the real environment.
    pub fn from_lookup<F>(project_root: impl Into<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let milestones_override = lookup(paths::MILESTONES_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let auto_sync = is_truthy(lookup(paths::AUTO_SYNC_ENV).as_deref());
        Self {
            project_root: project_root.into(),
            milestones_override,
            auto_sync,
        }
    }

    pub fn with_milestones_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.milestones_override = Some(dir.into());
        self
    }

    pub fn with_auto_sync(mut self, enabled: bool) -> Self {
        self.auto_sync = enabled;
        self
    }

    /// The directory milestone documents are read from.
    pub fn milestones_dir(&self) -> Result<PathBuf> {
        match &self.milestones_override {
            Some(dir) => {
                let cwd = std::env::current_dir()?;
                paths::resolve_override(dir, &cwd)
            }
            None => Ok(paths::default_milestones_dir(&self.project_root)),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

/// `1`, `true`, `yes` and `on` (any case, surrounding whitespace ignored).
pub fn is_truthy(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn truthy_values() {
        for v in ["1", "true", "TRUE", "Yes", " on ", "yes\n"] {
            assert!(is_truthy(Some(v)), "expected truthy: {v:?}");
        }
    }

    #[test]
    fn falsy_values() {
        for v in ["", "0", "false", "no", "off", "enabled", "y"] {
            assert!(!is_truthy(Some(v)), "expected falsy: {v:?}");
        }
        assert!(!is_truthy(None));
    }

    #[test]
    fn lookup_defaults_when_unset() {
        let config = Config::from_lookup("/proj", lookup_from(&[]));
        assert_eq!(config, Config::new("/proj"));
        assert_eq!(
            config.milestones_dir().unwrap(),
            PathBuf::from("/proj/docs/milestones")
        );
    }

    #[test]
    fn lookup_reads_override_and_flag() {
        let config = Config::from_lookup(
            "/proj",
            lookup_from(&[
                (paths::MILESTONES_DIR_ENV, "/srv/phases"),
                (paths::AUTO_SYNC_ENV, "on"),
            ]),
        );
        assert!(config.auto_sync);
        assert_eq!(config.milestones_dir().unwrap(), PathBuf::from("/srv/phases"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = Config::from_lookup("/proj", lookup_from(&[(paths::MILESTONES_DIR_ENV, "")]));
        assert!(config.milestones_override.is_none());
    }

    #[test]
    fn builder_setters() {
        let config = Config::new("/proj")
            .with_milestones_dir("/elsewhere")
            .with_auto_sync(true);
        assert_eq!(config.milestones_override, Some(PathBuf::from("/elsewhere")));
        assert!(config.auto_sync);
        assert_eq!(config.project_root(), Path::new("/proj"));
    }
}
