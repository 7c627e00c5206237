//! Move execution.
//! Moves run one at a time in MoveSet order. The first failure aborts the
//! batch: earlier renames stay committed, the failing one and everything after
//! it are not attempted. There is no rollback.

use std::fs;
use tracing::info;

use crate::config::Config;
use crate::errors::Result;
use crate::output::MoveFormatter;

use super::atomic::try_atomic_move;
use super::helpers::{create_dir_failed, rename_failed};
use super::moves::{Move, MoveSet};

impl Move {
    /// Perform (or, in dry-run, only log) this rename.
    pub fn perform(&self, config: &Config, fmt: &MoveFormatter) -> Result<()> {
        let action = if config.dry_run {
            "dryrun move"
        } else {
            // full-path rules may relocate into a new subtree
            if config.fullpath
                && let Some(parent) = self.dst.parent()
            {
                fs::create_dir_all(parent).map_err(create_dir_failed(parent))?;
            }
            try_atomic_move(&self.src, &self.dst).map_err(rename_failed(&self.src, &self.dst))?;
            "moved"
        };
        info!("{} {}", action, fmt.format_move(self));
        Ok(())
    }
}

impl MoveSet {
    /// Perform every move in order; returns how many were performed.
    pub fn perform(&self, config: &Config, fmt: &MoveFormatter) -> Result<usize> {
        for m in self {
            m.perform(config, fmt)?;
        }
        Ok(self.len())
    }
}

/// Free-function form of [`MoveSet::perform`].
pub fn perform(config: &Config, moves: &MoveSet, fmt: &MoveFormatter) -> Result<usize> {
    moves.perform(config, fmt)
}
