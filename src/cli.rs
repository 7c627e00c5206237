//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Boolean flags can only switch a setting on; config-file values stay
//!   unless the flag is given.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

const RULE_HELP: &str = "\
<RULE> should be in the form:

  <find>:<replace>           for plain text matching, or
  /<find>/<replace>/<flags>  for regular expression matching

  by default, <find> and <replace> only operate on the input
  file's basename (the last part of the path). this ensures
  files are *renamed* and not *moved*. to operate on the full
  (absolute) path, enable the --fullpath flag.

  plain text matching only finds and replaces the first instance
  of <find>. to replace all instances, use regular expression
  matching with the 'g' flag.

  the regular expression format above uses slash / as the field
  separator, however any character may be used, as long as it
  appears exactly 3 times. regular expression groups may be
  replaced back into the result using $N placeholders ($1 for the
  first group, $2 for the second, etc).

  regular expression flags can be:
    i - enables case-insensitive matching
    g - enables global matching, instead of the
        default single-instance matching

<TARGETS> must refer to existing files or directories. by default
a directory target is renamed, however the --recursive flag makes
renamer recurse into directories and use their contents as targets.
";

/// CLI wrapper for the renamer library.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "renamer",
    author,
    version,
    about = "renamer is a regular-expression based batch file renaming tool",
    after_long_help = RULE_HELP
)]
pub struct Args {
    /// Rename rule: `<find>:<replace>` or `/<find>/<replace>/<flags>`.
    #[arg(value_name = "RULE", required_unless_present = "print_config")]
    pub rule: Option<String>,

    /// Files or directories to rename.
    #[arg(
        value_name = "TARGETS",
        value_hint = ValueHint::AnyPath,
        required_unless_present = "print_config",
        num_args = 1..
    )]
    pub targets: Vec<PathBuf>,

    /// Recurse into directories instead of renaming them.
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Read-only mode for testing renames (implies --verbose).
    #[arg(short = 'd', long)]
    pub dryrun: bool,

    /// Find and replace against the target's full path.
    #[arg(short = 'f', long)]
    pub fullpath: bool,

    /// Allow existing files to be overwritten.
    #[arg(short = 'o', long)]
    pub overwrite: bool,

    /// Enable verbose logs.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Rename limit; guards against renaming a whole file system by accident [default: 1000].
    #[arg(short = 'l', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where renamer looks for its config file (or RENAMER_CONFIG if set), then exit.
    #[arg(long, help = "Print the config file location used by renamer and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if self.recursive {
            cfg.recursive = true;
        }
        if self.dryrun {
            cfg.dry_run = true;
        }
        if self.fullpath {
            cfg.fullpath = true;
        }
        if self.overwrite {
            cfg.overwrite = true;
        }
        if self.verbose {
            cfg.verbose = true;
        }
        if self.json {
            cfg.json = true;
        }
        if let Some(limit) = self.limit {
            cfg.limit = limit;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
