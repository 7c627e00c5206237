//! Resolving targets into moves.
//! - Each target is stat'ed without following symlinks.
//! - With `recursive`, a directory target is walked (children in name order,
//!   depth-first) and only its non-directory entries become candidates.
//! - Irregular entries, untransformable names and no-op renames are skipped
//!   with a verbose log line; they are never errors.
//!
//! The rename limit is checked once, over the moves of every target combined.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

use crate::config::Config;
use crate::errors::{RenameError, Result};
use crate::utils::{absolutize, join_clean};

use super::moves::{Move, MoveSet};

/// Resolve every target into one combined, ordered MoveSet.
pub fn resolve_all(config: &Config, targets: &[PathBuf]) -> Result<MoveSet> {
    let mut combined = MoveSet::new();
    for target in targets {
        combined.extend(resolve(config, target)?);
    }
    if combined.len() > config.limit {
        return Err(RenameError::LimitExceeded {
            count: combined.len(),
            limit: config.limit,
        });
    }
    Ok(combined)
}

/// Resolve a single target (expanding it when it is a directory and
/// `recursive` is set). Does not apply the rename limit.
pub fn resolve(config: &Config, target: &Path) -> Result<MoveSet> {
    let meta = fs::symlink_metadata(target).map_err(|e| stat_error(target, e))?;
    let ftype = meta.file_type();

    if ftype.is_dir() && config.recursive {
        let mut moves = MoveSet::new();
        for entry in WalkDir::new(target).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| walk_error(target, e))?;
            let ftype = entry.file_type();
            if ftype.is_dir() {
                continue;
            }
            if let Some(m) = resolve_entry(config, entry.path(), ftype)? {
                moves.push(m);
            }
        }
        return Ok(moves);
    }

    Ok(resolve_entry(config, target, ftype)?.into_iter().collect())
}

/// Compute the move for one entry, or None when it should be skipped.
fn resolve_entry(config: &Config, target: &Path, ftype: fs::FileType) -> Result<Option<Move>> {
    if !ftype.is_file() && !ftype.is_dir() {
        info!("skip irregular file: {}", target.display());
        return Ok(None);
    }

    let src = absolutize(target).map_err(|e| stat_error(target, e))?;

    let dst = if config.fullpath {
        let Some(full) = src.to_str() else {
            info!("skip non UTF-8 path: {}", target.display());
            return Ok(None);
        };
        let renamed = config.rule.apply(full);
        absolutize(Path::new(&renamed)).map_err(|e| stat_error(target, e))?
    } else {
        let (Some(parent), Some(name)) = (src.parent(), src.file_name()) else {
            info!("skip no-op target: {}", target.display());
            return Ok(None);
        };
        let Some(name) = name.to_str() else {
            info!("skip non UTF-8 path: {}", target.display());
            return Ok(None);
        };
        join_clean(parent, &config.rule.apply(name))
    };

    if dst == src {
        info!("skip no-op target: {}", target.display());
        return Ok(None);
    }
    Ok(Some(Move::new(src, dst)))
}

fn stat_error(path: &Path, source: io::Error) -> RenameError {
    if source.kind() == io::ErrorKind::NotFound {
        RenameError::NotFound(path.to_path_buf())
    } else {
        RenameError::StatError {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> RenameError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    stat_error(&path, io::Error::from(err))
}
