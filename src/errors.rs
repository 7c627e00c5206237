//! Typed error definitions for renamer.
//! Every failure is terminal for the whole batch; variants carry the offending
//! path(s) so a message is diagnosable without re-running in verbose mode.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenameError>;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("{0}")]
    InvalidRule(String),

    #[error("unknown regex flag: {0}")]
    UnknownFlag(char),

    #[error("invalid regex: {pattern} ({source})")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("target not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot stat {}: {source}", .path.display())]
    StatError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("surpassed rename limit: {count} moves resolved, limit is {limit}")]
    LimitExceeded { count: usize, limit: usize },

    #[error(
        "two targets ({} and {}) rename to the same path {}",
        .first.display(),
        .second.display(),
        .dst.display()
    )]
    DestinationCollision {
        first: PathBuf,
        second: PathBuf,
        dst: PathBuf,
    },

    #[error(
        "move {} -> {} would overwrite an existing file, set the --overwrite flag to force",
        .src.display(),
        .dst.display()
    )]
    WouldOverwrite { src: PathBuf, dst: PathBuf },

    #[error("{message}")]
    RenameFailed {
        src: PathBuf,
        dst: PathBuf,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("{message}")]
    CreateDirFailed {
        path: PathBuf,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("at least one target is required")]
    NoTargets,
}

impl RenameError {
    /// Stable label used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            RenameError::InvalidRule(_) => "invalid_rule",
            RenameError::UnknownFlag(_) => "unknown_flag",
            RenameError::InvalidRegex { .. } => "invalid_regex",
            RenameError::NotFound(_) => "not_found",
            RenameError::StatError { .. } => "stat_error",
            RenameError::LimitExceeded { .. } => "limit_exceeded",
            RenameError::DestinationCollision { .. } => "destination_collision",
            RenameError::WouldOverwrite { .. } => "would_overwrite",
            RenameError::RenameFailed { .. } => "rename_failed",
            RenameError::CreateDirFailed { .. } => "create_dir_failed",
            RenameError::NoTargets => "no_targets",
        }
    }

    /// True for errors raised before any filesystem mutation could happen.
    pub fn is_pre_execution(&self) -> bool {
        !matches!(
            self,
            RenameError::RenameFailed { .. } | RenameError::CreateDirFailed { .. }
        )
    }
}
