use std::path::PathBuf;
use thiserror::Error;

/// Why a single milestone document could not be turned into a phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("document is empty")]
    Empty,

    #[error("missing a valid '# Milestone <number> – <title>' header")]
    MissingHeader,

    #[error("milestone number '{0}' is out of range")]
    InvalidNumber(String),
}

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("invalid milestone file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to read milestone file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "milestone directory '{}' does not exist; set STUDIO_MILESTONES_DIR to override the path",
        path.display()
    )]
    DirectoryNotFound { path: PathBuf },

    #[error(
        "no milestone files found in '{}'; add documentation or override the directory",
        path.display()
    )]
    NoMilestonesFound { path: PathBuf },

    #[error("unknown phase number: {0}")]
    UnknownPhase(u32),

    #[error("no phase found after number: {0}")]
    NoPhaseAfter(u32),

    #[error("no phases to choose from")]
    NoPhases,

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StudioError>;
