//! User-facing output.
//! - print_* helpers: consistent, colored messages (colors only on a TTY).
//! - MoveFormatter: renders a move as `prefix/{old -> new}` for log lines.

use owo_colors::OwoColorize;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};

use crate::fs_ops::Move;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn is_tty_err() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty_err() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty_err() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Renders moves for humans: paths relative to the working directory, the
/// shared leading directories factored out, spaces made visible.
#[derive(Debug, Clone, Default)]
pub struct MoveFormatter {
    cwd: Option<PathBuf>,
    color: bool,
}

impl MoveFormatter {
    pub fn new(cwd: Option<PathBuf>, color: bool) -> Self {
        Self { cwd, color }
    }

    /// Capture the current directory; `color` is decided by the caller
    /// (usually "stderr is a TTY and logs are not JSON").
    pub fn detect(color: bool) -> Self {
        Self::new(std::env::current_dir().ok(), color)
    }

    /// Whether stderr is a terminal.
    pub fn stderr_is_tty() -> bool {
        is_tty_err()
    }

    /// Strip the working directory when `path` lies below it.
    pub fn shorten(&self, path: &Path) -> String {
        let shown = match &self.cwd {
            Some(cwd) => path.strip_prefix(cwd).ok().filter(|rest| !rest.as_os_str().is_empty()),
            None => None,
        };
        shown.unwrap_or(path).display().to_string()
    }

    pub fn format_move(&self, m: &Move) -> String {
        let src = self.shorten(m.src());
        let dst = self.shorten(m.dst());
        let (prefix, src, dst) = trim_path_prefix(&src, &dst);
        if prefix.is_empty() {
            format!("{} -> {}", self.red(&src), self.green(&dst))
        } else {
            format!(
                "{}{}{{{} -> {}}}",
                self.blue(&prefix),
                MAIN_SEPARATOR,
                self.red(&src),
                self.green(&dst)
            )
        }
    }

    fn red(&self, s: &str) -> String {
        if self.color { s.red().to_string() } else { s.to_string() }
    }

    fn green(&self, s: &str) -> String {
        if self.color { s.green().to_string() } else { s.to_string() }
    }

    fn blue(&self, s: &str) -> String {
        if self.color { s.blue().to_string() } else { s.to_string() }
    }
}

/// Replace spaces with a visible middle dot.
fn dots(path: &str) -> String {
    path.replace(' ', "·")
}

/// Split off the leading components shared by `a` and `b`.
/// Returns `(shared, rest_of_a, rest_of_b)`, each with spaces made visible.
pub fn trim_path_prefix(a: &str, b: &str) -> (String, String, String) {
    let parts_a: Vec<&str> = a.split(MAIN_SEPARATOR).collect();
    let parts_b: Vec<&str> = b.split(MAIN_SEPARATOR).collect();
    let shared = parts_a
        .iter()
        .zip(&parts_b)
        .take_while(|(x, y)| x == y)
        .count();
    // never swallow a final component: `a/b -> a/b/c` keeps `b` on the left
    let mut shared = shared.min(parts_a.len() - 1).min(parts_b.len() - 1);
    let prefix = parts_a[..shared].join(MAIN_SEPARATOR_STR);
    // only the root is shared: keep both paths whole
    if prefix.is_empty() {
        shared = 0;
    }

    let rest_a = parts_a[shared..].join(MAIN_SEPARATOR_STR);
    let rest_b = parts_b[shared..].join(MAIN_SEPARATOR_STR);
    (dots(&prefix), dots(&rest_a), dots(&rest_b))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn trims_shared_dirs() {
        let (p, a, b) = trim_path_prefix("/home/u/old.txt", "/home/u/new.txt");
        assert_eq!(p, "/home/u");
        assert_eq!(a, "old.txt");
        assert_eq!(b, "new.txt");
    }

    #[test]
    fn no_shared_prefix() {
        let (p, a, b) = trim_path_prefix("old.txt", "new.txt");
        assert_eq!(p, "");
        assert_eq!(a, "old.txt");
        assert_eq!(b, "new.txt");
    }

    #[test]
    fn shared_root_only_keeps_full_paths() {
        let (p, a, b) = trim_path_prefix("/x/old", "/y/new");
        assert_eq!(p, "");
        assert_eq!(a, "/x/old");
        assert_eq!(b, "/y/new");
    }

    #[test]
    fn spaces_become_dots() {
        let (p, a, b) = trim_path_prefix("my dir/a b", "my dir/a_b");
        assert_eq!(p, "my·dir");
        assert_eq!(a, "a·b");
        assert_eq!(b, "a_b");
    }

    #[test]
    fn format_move_relative_to_cwd() {
        let f = MoveFormatter::new(Some(PathBuf::from("/work")), false);
        let m = Move::new("/work/photos/old.jpg", "/work/photos/new.jpg");
        assert_eq!(f.format_move(&m), "photos/{old.jpg -> new.jpg}");
    }

    #[test]
    fn format_move_without_prefix() {
        let f = MoveFormatter::new(Some(PathBuf::from("/work")), false);
        let m = Move::new("/work/old.jpg", "/work/new.jpg");
        assert_eq!(f.format_move(&m), "old.jpg -> new.jpg");
    }

    #[test]
    fn outside_cwd_keeps_absolute() {
        let f = MoveFormatter::new(Some(PathBuf::from("/work")), false);
        assert_eq!(f.shorten(Path::new("/elsewhere/x")), "/elsewhere/x");
        assert_eq!(f.shorten(Path::new("/work")), "/work");
    }

    #[test]
    fn color_wraps_segments() {
        let f = MoveFormatter::new(None, true);
        let m = Move::new("/a/old", "/a/new");
        let out = f.format_move(&m);
        assert!(out.contains("\u{1b}["), "expected ANSI codes in {out:?}");
        assert!(out.contains("old") && out.contains("new"));
    }
}
