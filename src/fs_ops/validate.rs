//! Move set validation.
//!
//! Runs before any filesystem mutation:
//! 1) no two moves may share a destination;
//! 2) unless `overwrite` is set, no destination may already exist.
//!
//! Missing parent directories of full-path destinations are not checked here;
//! the executor creates them right before each rename.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::errors::{RenameError, Result};

use super::moves::MoveSet;

impl MoveSet {
    /// Validate the set against collisions and the overwrite policy.
    pub fn validate(&self, config: &Config) -> Result<()> {
        let mut seen: HashMap<&Path, &Path> = HashMap::with_capacity(self.len());
        for m in self {
            if let Some(first) = seen.get(m.dst()) {
                return Err(RenameError::DestinationCollision {
                    first: first.to_path_buf(),
                    second: m.src.clone(),
                    dst: m.dst.clone(),
                });
            }
            seen.insert(m.dst(), m.src());
        }

        if !config.overwrite {
            for m in self {
                // symlink_metadata: a dangling link still occupies the name
                if fs::symlink_metadata(m.dst()).is_ok() {
                    return Err(RenameError::WouldOverwrite {
                        src: m.src.clone(),
                        dst: m.dst.clone(),
                    });
                }
            }
        }

        debug!(moves = self.len(), overwrite = config.overwrite, "move set validated");
        Ok(())
    }
}

/// Free-function form of [`MoveSet::validate`].
pub fn validate(config: &Config, moves: &MoveSet) -> Result<()> {
    moves.validate(config)
}
