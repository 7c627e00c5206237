//! Core configuration types.
//! - Config holds every run parameter; it is built once and then only read.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::rule::Rule;

use super::DEFAULT_LIMIT;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default, PartialOrd, Ord)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// One line per skip, no-op and move
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one rename batch.
#[derive(Debug, Clone)]
pub struct Config {
    /// Recurse into directories instead of renaming them
    pub recursive: bool,
    /// Log every move without touching the filesystem
    pub dry_run: bool,
    /// Apply the rule to the absolute path instead of the basename
    pub fullpath: bool,
    /// Allow existing files to be overwritten
    pub overwrite: bool,
    /// Log skips, no-ops and moves
    pub verbose: bool,
    /// Upper bound on the number of resolved moves
    pub limit: usize,
    pub log_level: LogLevel,
    /// Emit logs as JSON
    pub json: bool,
    pub rule: Rule,
    pub targets: Vec<PathBuf>,
}

impl Config {
    /// Construct a Config for `rule` over `targets`; flags use defaults.
    pub fn new(rule: Rule, targets: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            recursive: false,
            dry_run: false,
            fullpath: false,
            overwrite: false,
            verbose: false,
            limit: DEFAULT_LIMIT,
            log_level: LogLevel::default(),
            json: false,
            rule,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Log level after accounting for `verbose` (and dry-run, once normalized).
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose && self.log_level < LogLevel::Info {
            LogLevel::Info
        } else {
            self.log_level.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config::new(Rule::parse("a:b").unwrap(), ["x"])
    }

    #[test]
    fn defaults() {
        let c = cfg();
        assert_eq!(c.limit, 1000);
        assert!(!c.recursive && !c.dry_run && !c.fullpath && !c.overwrite && !c.verbose);
        assert_eq!(c.targets, vec![PathBuf::from("x")]);
    }

    #[test]
    fn verbose_raises_level() {
        let mut c = cfg();
        assert_eq!(c.effective_log_level(), LogLevel::Normal);
        c.verbose = true;
        assert_eq!(c.effective_log_level(), LogLevel::Info);
        c.log_level = LogLevel::Debug;
        assert_eq!(c.effective_log_level(), LogLevel::Debug);
    }

    #[test]
    fn log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
