//! Tracing initialization.
//! Builds a subscriber with EnvFilter and a compact or JSON stderr layer.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - JSON/non-JSON formatting is selected via the `json` flag.
//! - ANSI escapes only when `ansi` is set (stderr is a TTY and not JSON).

use anyhow::{Result, anyhow};
use chrono::Local;
use renamer::LogLevel;
use std::fmt as stdfmt;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
    }
}

#[inline]
fn env_filter_from_level(level_filter: LevelFilter) -> EnvFilter {
    let level_str = match level_filter {
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "warn",
    };
    EnvFilter::new(level_str)
}

/// Initialize tracing for the process.
pub fn init_tracing(lvl: &LogLevel, json: bool, ansi: bool) -> Result<()> {
    let env_filter = env_filter_from_level(to_level_filter(lvl));

    if json {
        let layer = tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(true)
            .with_writer(std::io::stderr);
        registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .map_err(|e| anyhow!("install tracing subscriber: {e}"))?;
    } else {
        let layer = tsfmt::layer()
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(std::io::stderr)
            .compact();
        registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .map_err(|e| anyhow!("install tracing subscriber: {e}"))?;
    }
    Ok(())
}
