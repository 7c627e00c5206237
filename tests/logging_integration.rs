use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::tempdir;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

use renamer::{Config, MoveFormatter, Rule, resolve_all};

/// A simple writer that appends written bytes into an in-memory Vec<u8>.
/// We wrap the Vec in an Arc<Mutex<...>> so the MakeWriter closure can clone it.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.0.lock().unwrap();
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a scoped INFO subscriber and return everything it logged.
fn capture(level: &str, f: impl FnOnce()) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_target(false)
        .with_ansi(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new(level)).with(layer);

    // Scoped dispatch: no global subscriber is installed.
    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, f);

    let guard = buf.lock().unwrap();
    String::from_utf8_lossy(&guard[..]).to_string()
}

fn cfg_with(rule: &str, targets: &[&Path]) -> Config {
    Config::new(Rule::parse(rule).unwrap(), targets.iter().map(|p| p.to_path_buf()))
}

#[test]
fn dry_run_logs_each_move_with_shared_prefix() {
    let td = tempdir().unwrap();
    let f = td.path().join("oldfile.txt");
    fs::write(&f, "x").unwrap();
    let mut cfg = cfg_with("old:new", &[&f]);
    cfg.dry_run = true;
    let fmt = MoveFormatter::new(None, false);

    let out = capture("info", || {
        let moves = resolve_all(&cfg, &cfg.targets).unwrap();
        moves.perform(&cfg, &fmt).unwrap();
    });

    assert!(out.contains("dryrun move"), "missing action in {out}");
    assert!(out.contains("{oldfile.txt -> newfile.txt}"), "missing move in {out}");
    assert!(f.exists());
}

#[test]
fn live_run_logs_moved() {
    let td = tempdir().unwrap();
    let f = td.path().join("oldfile.txt");
    fs::write(&f, "x").unwrap();
    let cfg = cfg_with("old:new", &[&f]);
    let fmt = MoveFormatter::new(Some(td.path().to_path_buf()), false);

    let out = capture("info", || {
        let moves = resolve_all(&cfg, &cfg.targets).unwrap();
        moves.perform(&cfg, &fmt).unwrap();
    });

    assert!(out.contains("moved oldfile.txt -> newfile.txt"), "got {out}");
}

#[test]
fn skips_are_logged_at_info() {
    let td = tempdir().unwrap();
    let f = td.path().join("keep.txt");
    fs::write(&f, "x").unwrap();
    let cfg = cfg_with("zzz:yyy", &[&f]);

    let out = capture("info", || {
        assert!(resolve_all(&cfg, &cfg.targets).unwrap().is_empty());
    });
    assert!(out.contains("skip no-op target"), "got {out}");

    let quiet = capture("warn", || {
        resolve_all(&cfg, &cfg.targets).unwrap();
    });
    assert!(quiet.is_empty(), "non-verbose run should be silent, got {quiet}");
}
