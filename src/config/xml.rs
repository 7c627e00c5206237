//! XML configuration support.
//! - Loads default flag values from config.xml (quick_xml).
//! - A missing file means "use built-in defaults"; a malformed one is an error.
//!
//! Example:
//! <config>
//!   <recursive>false</recursive>
//!   <overwrite>false</overwrite>
//!   <limit>500</limit>
//!   <log_level>normal</log_level>
//! </config>
//!
//! `dryrun` is deliberately absent: it must be requested on each invocation.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
pub struct XmlConfig {
    pub recursive: Option<bool>,
    pub fullpath: Option<bool>,
    pub overwrite: Option<bool>,
    pub verbose: Option<bool>,
    pub json: Option<bool>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    pub limit: Option<usize>,
    pub log_level: Option<String>,
}

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<usize>()
            .map(Some)
            .map_err(<D::Error as serde::de::Error>::custom),
    }
}

impl XmlConfig {
    /// Overlay the values present in the file onto `cfg`.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(v) = self.recursive {
            cfg.recursive = v;
        }
        if let Some(v) = self.fullpath {
            cfg.fullpath = v;
        }
        if let Some(v) = self.overwrite {
            cfg.overwrite = v;
        }
        if let Some(v) = self.verbose {
            cfg.verbose = v;
        }
        if let Some(v) = self.json {
            cfg.json = v;
        }
        if let Some(v) = self.limit {
            cfg.limit = v;
        }
        if let Some(level) = self.log_level.as_deref().and_then(|s| LogLevel::parse(s.trim())) {
            cfg.log_level = level;
        }
    }
}

/// Load config values from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<XmlConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    debug!(path = %path.display(), ?parsed, "loaded config file");
    Ok(parsed)
}

/// Load the config file at [`default_config_path`]. Ok(None) when it does not exist.
pub fn load_config_from_xml() -> Result<Option<XmlConfig>> {
    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_config_from_xml_path(&path).map(Some)
}
