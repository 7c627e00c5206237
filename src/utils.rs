use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and clean it lexically:
/// `.` components are dropped and `..` pops its parent. Symlinks are not
/// resolved, so the result names the entry itself rather than its target.
pub(crate) fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(clean(&joined))
}

/// Lexically normalize an absolute or relative path.
pub(crate) fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    out
}

/// Join `name` onto `dir` the way a shell user would expect: separators in
/// `name` nest, a leading separator stays inside `dir`, and `..` is resolved.
pub(crate) fn join_clean(dir: &Path, name: &str) -> PathBuf {
    let mut out = dir.to_path_buf();
    for comp in Path::new(name).components() {
        match comp {
            Component::Normal(part) => out.push(part),
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    out
}
