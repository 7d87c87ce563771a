use crate::config::Config;
use crate::error::{Result, StudioError};
use crate::parser;
use crate::paths;
use crate::phase::Phase;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads the milestone directory and turns every `*.md` file in it into a
/// [`Phase`]. Nothing is cached: each [`load_phases`](Self::load_phases)
/// call goes back to disk.
#[derive(Debug, Clone)]
pub struct PhaseRepository {
    directory: PathBuf,
}

impl PhaseRepository {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::at(config.milestones_dir()?))
    }

    pub fn at(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// All phases, sorted ascending by number.
    pub fn load_phases(&self) -> Result<Vec<Phase>> {
        if !self.directory.is_dir() {
            return Err(StudioError::DirectoryNotFound {
                path: self.directory.clone(),
            });
        }

        let mut phases = Vec::new();
        for path in self.milestone_files()? {
            phases.push(load_milestone(&path)?);
        }
        if phases.is_empty() {
            return Err(StudioError::NoMilestonesFound {
                path: self.directory.clone(),
            });
        }

        // Stable: equal numbers keep file-name order.
        phases.sort_by_key(|p| p.number);
        warn_on_duplicates(&phases);
        Ok(phases)
    }

    fn milestone_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.directory)? {
            let entry = entry?;
            let path = entry.path();
            if paths::is_milestone_file(&path) && path.is_file() {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

fn load_milestone(path: &Path) -> Result<Phase> {
    let text = std::fs::read_to_string(path).map_err(|source| StudioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let phase = parser::parse(&text).map_err(|source| StudioError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "parsed {} as phase {} ({})",
        path.display(),
        phase.number,
        phase.name
    );
    Ok(phase)
}

fn warn_on_duplicates(phases: &[Phase]) {
    let mut seen = HashSet::new();
    for phase in phases {
        if !seen.insert(phase.number) {
            warn!(
                "duplicate milestone number {}: '{}' is kept alongside an earlier phase",
                phase.number, phase.name
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) {
        std::fs::write(dir.path().join(name), body).unwrap();
    }

    fn milestone(number: &str, title: &str) -> String {
        format!("# Milestone {number} – {title}\n\n## Objective\n{title} objective.\n\n## Checklist\n- {title} task.\n")
    }

    #[test]
    fn loads_and_sorts_by_number_not_filename() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a_late.md", &milestone("10", "Late"));
        write(&dir, "b_early.md", &milestone("01", "Early"));
        write(&dir, "c_middle.md", &milestone("5", "Middle"));

        let phases = PhaseRepository::at(dir.path()).load_phases().unwrap();
        let numbers: Vec<u32> = phases.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 5, 10]);
        assert_eq!(phases[0].name, "Early");
        assert_eq!(phases[0].focus, "Early objective.");
        assert_eq!(phases[0].highlights, vec!["Early task."]);
    }

    #[test]
    fn ignores_non_markdown_entries() {
        let dir = TempDir::new().unwrap();
        write(&dir, "00_start.md", &milestone("0", "Start"));
        write(&dir, "notes.txt", "# Milestone 9 – Not a milestone\n");
        std::fs::create_dir(dir.path().join("drafts.md")).unwrap();

        let phases = PhaseRepository::at(dir.path()).load_phases().unwrap();
        assert_eq!(phases.len(), 1);
    }

    #[test]
    fn missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = PhaseRepository::at(&missing).load_phases().unwrap_err();
        assert!(matches!(err, StudioError::DirectoryNotFound { ref path } if *path == missing));
    }

    #[test]
    fn empty_directory_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "README.txt", "nothing here");
        assert!(matches!(
            PhaseRepository::at(dir.path()).load_phases(),
            Err(StudioError::NoMilestonesFound { .. })
        ));
    }

    #[test]
    fn bad_header_names_the_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "00_start.md", &milestone("0", "Start"));
        write(&dir, "01_broken.md", "# Not a milestone\n");

        let err = PhaseRepository::at(dir.path()).load_phases().unwrap_err();
        match err {
            StudioError::Parse { path, source } => {
                assert!(path.ends_with("01_broken.md"));
                assert_eq!(source, ParseError::MissingHeader);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "00_empty.md", "");
        assert!(matches!(
            PhaseRepository::at(dir.path()).load_phases(),
            Err(StudioError::Parse {
                source: ParseError::Empty,
                ..
            })
        ));
    }

    #[test]
    fn unreadable_file_names_the_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "00_start.md", &milestone("0", "Start"));
        std::fs::write(dir.path().join("01_bad.md"), b"\xff\xfe# Milestone 1 \xe2 Bad\n").unwrap();

        let err = PhaseRepository::at(dir.path()).load_phases().unwrap_err();
        assert!(matches!(err, StudioError::Read { ref path, .. } if path.ends_with("01_bad.md")));
        assert!(err.to_string().contains("01_bad.md"));
    }

    #[test]
    fn duplicate_numbers_are_kept_in_filename_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.md", &milestone("1", "Second file"));
        write(&dir, "a.md", &milestone("1", "First file"));
        write(&dir, "c.md", &milestone("0", "Zero"));

        let phases = PhaseRepository::at(dir.path()).load_phases().unwrap();
        let names: Vec<&str> = phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zero", "First file", "Second file"]);
    }

    #[test]
    fn rereads_directory_on_every_call() {
        let dir = TempDir::new().unwrap();
        write(&dir, "00.md", &milestone("0", "Start"));
        let repo = PhaseRepository::at(dir.path());
        assert_eq!(repo.load_phases().unwrap().len(), 1);

        write(&dir, "01.md", &milestone("1", "Next"));
        assert_eq!(repo.load_phases().unwrap().len(), 2);
    }

    #[test]
    fn new_uses_config_override() {
        let dir = TempDir::new().unwrap();
        let config = Config::new("/unused").with_milestones_dir(dir.path());
        let repo = PhaseRepository::new(&config).unwrap();
        assert_eq!(repo.directory(), dir.path().canonicalize().unwrap());
    }
}
