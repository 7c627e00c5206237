//! I/O error helpers.
//!
//! Turn io::Error into RenameError with an actionable, platform-aware hint:
//!   fs::rename(src, dst).map_err(rename_failed(src, dst))?;
//!   fs::create_dir_all(dir).map_err(create_dir_failed(dir))?;

use std::io;
use std::path::Path;

use crate::errors::RenameError;

/// Short hint for an OS error, if one is known.
fn hint(e: &io::Error) -> Option<&'static str> {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        let hint = match code {
            libc::EACCES | libc::EPERM => {
                Some("permission denied; check ownership and write permissions")
            }
            libc::EXDEV => Some("cross-filesystem; a rename cannot move between devices"),
            libc::EBUSY => Some("resource busy; ensure no other process is using it"),
            libc::ENOENT => Some("path not found; the source or destination parent is missing"),
            libc::EEXIST | libc::ENOTEMPTY => Some("destination exists and cannot be replaced"),
            libc::EISDIR => Some("cannot replace a directory with a file"),
            libc::ENOTDIR => Some("a path component is not a directory"),
            libc::EINVAL => Some("cannot move a directory into itself"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem"),
            libc::ENAMETOOLONG => Some("filename or path too long"),
            _ => None,
        };
        if hint.is_some() {
            return hint;
        }
    }

    #[cfg(windows)]
    if let Some(code) = e.raw_os_error() {
        // Common Win32 errors
        let hint = match code {
            5 => Some("access denied; check permissions"),
            17 => Some("not same device; cross-filesystem move"),
            32 => Some("sharing violation; file is in use"),
            2 | 3 => Some("path not found"),
            80 | 183 => Some("destination already exists"),
            206 => Some("filename or path too long"),
            _ => None,
        };
        if hint.is_some() {
            return hint;
        }
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions")
        }
        io::ErrorKind::NotFound => Some("path not found"),
        io::ErrorKind::AlreadyExists => Some("destination already exists"),
        _ => None,
    }
}

fn build_message(op: &str, e: &io::Error) -> String {
    let mut msg = format!("{op}: {e}");
    if let Some(h) = hint(e) {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    msg
}

/// `.map_err` adapter for a failed rename.
pub(super) fn rename_failed<'a>(
    src: &'a Path,
    dst: &'a Path,
) -> impl FnOnce(io::Error) -> RenameError + 'a {
    move |source| {
        let op = format!("rename '{}' -> '{}'", src.display(), dst.display());
        RenameError::RenameFailed {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            message: build_message(&op, &source),
            source,
        }
    }
}

/// `.map_err` adapter for a failed parent directory creation.
pub(super) fn create_dir_failed(path: &Path) -> impl FnOnce(io::Error) -> RenameError + '_ {
    move |source| RenameError::CreateDirFailed {
        path: path.to_path_buf(),
        message: build_message(&format!("create directory '{}'", path.display()), &source),
        source,
    }
}
