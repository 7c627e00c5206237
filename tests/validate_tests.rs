use std::fs;
use std::path::Path;
use tempfile::tempdir;

use renamer::{Config, Move, MoveSet, RenameError, Rule, resolve_all, validate};

fn cfg_with(rule: &str, targets: &[&Path]) -> Config {
    Config::new(Rule::parse(rule).unwrap(), targets.iter().map(|p| p.to_path_buf()))
}

#[test]
fn collision_names_both_sources() {
    let td = tempdir().unwrap();
    let a1 = td.path().join("a1.txt");
    let a2 = td.path().join("a2.txt");
    fs::write(&a1, "1").unwrap();
    fs::write(&a2, "2").unwrap();
    let cfg = cfg_with("/[0-9]//", &[&a1, &a2]);

    let moves = resolve_all(&cfg, &cfg.targets).unwrap();
    let err = moves.validate(&cfg).unwrap_err();
    match &err {
        RenameError::DestinationCollision { first, second, dst } => {
            assert_eq!(first, &a1);
            assert_eq!(second, &a2);
            assert_eq!(dst, &td.path().join("a.txt"));
        }
        other => panic!("expected collision, got {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("a1.txt") && msg.contains("a2.txt"), "{msg}");
}

#[test]
fn collision_is_reported_even_with_overwrite() {
    let moves = MoveSet::from(vec![
        Move::new("/x/one", "/x/same"),
        Move::new("/x/two", "/x/other"),
        Move::new("/x/three", "/x/same"),
    ]);
    let mut cfg = cfg_with("a:b", &[Path::new("/x")]);
    cfg.overwrite = true;

    let err = validate(&cfg, &moves).unwrap_err();
    assert!(matches!(
        err,
        RenameError::DestinationCollision { ref first, ref second, .. }
            if first == Path::new("/x/one") && second == Path::new("/x/three")
    ));
}

#[test]
fn existing_destination_requires_overwrite() {
    let td = tempdir().unwrap();
    let old = td.path().join("old.txt");
    let new = td.path().join("new.txt");
    fs::write(&old, "old").unwrap();
    fs::write(&new, "new").unwrap();
    let mut cfg = cfg_with("old:new", &[&old]);

    let moves = resolve_all(&cfg, &cfg.targets).unwrap();
    let err = moves.validate(&cfg).unwrap_err();
    assert_eq!(err.kind(), "would_overwrite");
    assert!(err.to_string().contains("--overwrite"));

    cfg.overwrite = true;
    moves.validate(&cfg).unwrap();
}

#[test]
fn missing_fullpath_parent_is_not_checked() {
    let td = tempdir().unwrap();
    let moves = MoveSet::from(vec![Move::new(
        td.path().join("f.txt"),
        td.path().join("not").join("yet").join("f.txt"),
    )]);
    let mut cfg = cfg_with("a:b", &[td.path()]);
    cfg.fullpath = true;
    validate(&cfg, &moves).unwrap();
}

#[test]
fn empty_set_is_valid() {
    let cfg = cfg_with("a:b", &[Path::new("x")]);
    MoveSet::new().validate(&cfg).unwrap();
}

#[cfg(unix)]
#[test]
fn dangling_symlink_counts_as_existing() {
    use std::os::unix::fs::symlink;
    let td = tempdir().unwrap();
    let dst = td.path().join("new.txt");
    symlink(td.path().join("gone"), &dst).unwrap();
    let moves = MoveSet::from(vec![Move::new(td.path().join("old.txt"), &dst)]);
    let cfg = cfg_with("old:new", &[td.path()]);

    let err = moves.validate(&cfg).unwrap_err();
    assert!(matches!(err, RenameError::WouldOverwrite { .. }));
}
