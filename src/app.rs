//! Application orchestrator.
//! Compiles the rule, merges config file and CLI settings, initializes logging,
//! then runs resolve -> validate -> perform.

use anyhow::Result;
use tracing::{debug, info};

use renamer::cli::Args;
use renamer::config::{CONFIG_ENV, load_config_from_xml};
use renamer::output as out;
use renamer::{
    Config, MoveFormatter, RenameError, Rule, default_config_path, resolve_all,
    validate_and_normalize,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        print_config();
        return Ok(());
    }

    // Rule syntax errors surface before anything touches the filesystem.
    let rule = Rule::parse(args.rule.as_deref().unwrap_or_default())?;

    let mut cfg = Config::new(rule, args.targets.iter().cloned());
    if let Some(file_cfg) = load_config_from_xml()? {
        file_cfg.apply(&mut cfg);
    }
    args.apply_overrides(&mut cfg);
    validate_and_normalize(&mut cfg)?;

    let ansi = !cfg.json && MoveFormatter::stderr_is_tty();
    init_tracing(&cfg.effective_log_level(), cfg.json, ansi)?;
    debug!(rule = %cfg.rule, targets = cfg.targets.len(), "starting renamer");

    let fmt = MoveFormatter::detect(ansi);
    execute(&cfg, &fmt).map_err(|e| {
        debug!(
            kind = e.kind(),
            filesystem_untouched = e.is_pre_execution(),
            "batch aborted"
        );
        anyhow::Error::from(e)
    })
}

fn execute(cfg: &Config, fmt: &MoveFormatter) -> Result<(), RenameError> {
    let moves = resolve_all(cfg, &cfg.targets)?;
    moves.validate(cfg)?;
    info!(
        "resolved {} targets into {} validated moves",
        cfg.targets.len(),
        moves.len()
    );

    moves.perform(cfg, fmt)?;
    if cfg.dry_run {
        info!("dryrun successfully performed");
    } else {
        info!("moves successfully performed");
    }
    Ok(())
}

fn print_config() {
    if let Some(path) = std::env::var(CONFIG_ENV).ok().filter(|p| !p.is_empty()) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {path}"));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default renamer config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there; built-in defaults are used.");
            }
        }
        None => out::print_warn("Could not determine a default config path"),
    }
}
