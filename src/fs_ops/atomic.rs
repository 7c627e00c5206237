//! Atomic rename helper.
//! - Performs a single `rename(2)`; no copy fallback, so cross-device moves fail.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

pub(super) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    // Unix: fsync the destination directory to persist the rename (best-effort).
    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
