//! Config module.
//! Provides configuration types, the default config path, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{CONFIG_ENV, default_config_path};
pub use types::{Config, LogLevel};
pub use validate::validate_and_normalize;
pub use xml::{XmlConfig, load_config_from_xml, load_config_from_xml_path};

/// Rename limit used unless the config file or CLI sets one.
pub const DEFAULT_LIMIT: usize = 1000;
