//! Opt-in git auto-sync, run before milestones are read.
//!
//! Sync is best-effort. Nothing in here returns an error to the caller: a
//! missing `git`, a directory outside a work tree or a rejected pull only
//! produces a log line and a [`SyncOutcome`] describing what happened.

use crate::config::Config;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

const WORK_TREE_CHECK: &[&str] = &["git", "rev-parse", "--is-inside-work-tree"];
const SYNC_COMMANDS: &[&[&str]] = &[
    &["git", "fetch", "--all", "--prune"],
    &["git", "pull", "--ff-only"],
];

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

/// Captured result of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(status: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an argv-style command (program first) in a working directory.
pub trait CommandRunner {
    fn run(&self, argv: &[&str], cwd: &Path) -> io::Result<CommandOutput>;
}

impl<F> CommandRunner for F
where
    F: Fn(&[&str], &Path) -> io::Result<CommandOutput>,
{
    fn run(&self, argv: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        self(argv, cwd)
    }
}

/// Spawns real processes. Never goes through a shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;
        let program = which::which(program).map_err(|e| {
            io::Error::new(io::ErrorKind::NotFound, format!("{program} not found: {e}"))
        })?;

        let output = Command::new(program).args(args).current_dir(cwd).output()?;
        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

// ---------------------------------------------------------------------------
// AutoSync
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The opt-in flag is off; no command was run.
    Disabled,
    /// The work-tree check failed or said no; fetch/pull were skipped.
    NotARepository,
    /// `command` failed; later commands were not run.
    Failed { command: String, reason: String },
    /// Fetch and pull both succeeded.
    Synced,
}

impl SyncOutcome {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncOutcome::Synced)
    }
}

pub struct AutoSync<'a> {
    enabled: bool,
    runner: &'a dyn CommandRunner,
    cwd: PathBuf,
}

impl<'a> AutoSync<'a> {
    pub fn new(config: &Config, runner: &'a dyn CommandRunner, cwd: impl Into<PathBuf>) -> Self {
        Self {
            enabled: config.auto_sync,
            runner,
            cwd: cwd.into(),
        }
    }

    pub fn run(&self) -> SyncOutcome {
        if !self.enabled {
            debug!("auto-sync skipped: {} not enabled", crate::paths::AUTO_SYNC_ENV);
            return SyncOutcome::Disabled;
        }
        if !self.inside_work_tree() {
            return SyncOutcome::NotARepository;
        }

        for argv in SYNC_COMMANDS {
            let command = argv.join(" ");
            match self.runner.run(argv, &self.cwd) {
                Ok(out) if out.success() => debug!("command succeeded: {command}"),
                Ok(out) => {
                    let reason = failure_reason(&out);
                    warn!("git command failed: '{command}': {reason}");
                    return SyncOutcome::Failed { command, reason };
                }
                Err(e) => {
                    let reason = e.to_string();
                    warn!("git command failed: '{command}': {reason}");
                    return SyncOutcome::Failed { command, reason };
                }
            }
        }
        SyncOutcome::Synced
    }

    fn inside_work_tree(&self) -> bool {
        match self.runner.run(WORK_TREE_CHECK, &self.cwd) {
            Ok(out) if out.success() => {
                let inside = out.stdout.trim().eq_ignore_ascii_case("true");
                debug!("inside git work tree: {inside}");
                inside
            }
            Ok(out) => {
                debug!("git repository check failed: {}", failure_reason(&out));
                false
            }
            Err(e) => {
                debug!("git repository check failed: {e}");
                false
            }
        }
    }
}

/// Run the gate; `true` only when fetch and pull both succeeded.
pub fn maybe_sync(config: &Config, runner: &dyn CommandRunner, cwd: &Path) -> bool {
    AutoSync::new(config, runner, cwd).run().is_synced()
}

fn failure_reason(out: &CommandOutput) -> String {
    let stderr = out.stderr.trim();
    let code = out
        .status
        .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit status {c}"));
    if stderr.is_empty() {
        code
    } else {
        format!("{code}: {stderr}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
