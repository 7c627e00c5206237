//! Core library for `renamer`.
//!
//! A batch renamer: one find/replace rule applied to a set of targets.
//! The pipeline is strictly sequential:
//!
//! 1. [`rule::compile`] turns the rule text into a [`Rule`] (no filesystem access);
//! 2. [`fs_ops::resolve_all`] walks the targets and plans a [`MoveSet`];
//! 3. [`MoveSet::validate`] rejects colliding destinations and unwanted overwrites;
//! 4. [`MoveSet::perform`] renames (or, in dry-run, logs) each move in order.
//!
//! Every step before 4 is free of side effects, so any error up to and
//! including validation leaves the filesystem untouched. A failure during
//! step 4 stops the batch with the earlier renames already applied.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod rule;
mod utils;

pub use config::{Config, LogLevel, default_config_path, validate_and_normalize};
pub use errors::{RenameError, Result};
pub use fs_ops::{Move, MoveSet, perform, resolve, resolve_all, validate};
pub use output::MoveFormatter;
pub use rule::{Rule, compile};

/// Convenience re-exports for callers driving a full batch.
pub mod prelude {
    pub use crate::config::{Config, LogLevel, default_config_path, validate_and_normalize};
    pub use crate::errors::{RenameError as Error, Result as RnResult};
    pub use crate::fs_ops::{Move, MoveSet, perform, resolve_all, validate};
    pub use crate::output::MoveFormatter;
    pub use crate::rule::{Rule, compile};
}
