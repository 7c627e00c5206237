//! Config validation logic.

use tracing::debug;

use crate::errors::{RenameError, Result};

use super::types::Config;

impl Config {
    /// Check that the configuration describes a runnable batch.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(RenameError::NoTargets);
        }
        Ok(())
    }
}

/// Apply implied settings, then validate.
/// Dry-run is read-only plus verbose.
pub fn validate_and_normalize(cfg: &mut Config) -> Result<()> {
    if cfg.dry_run {
        cfg.verbose = true;
    }
    cfg.validate()?;
    debug!(
        rule = %cfg.rule,
        targets = cfg.targets.len(),
        limit = cfg.limit,
        dry_run = cfg.dry_run,
        "Config validated"
    );
    Ok(())
}
