//! Optional `.bizdoctor.toml` configuration.
//!
//! Only presentation and logging are configurable. The financial
//! constants used by the calculators are fixed.

mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BizdoctorConfig {
    #[serde(default)]
    pub output: Option<OutputConfig>,

    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// `terminal`, `json` or `markdown`
    pub default_format: Option<String>,
    /// Disable coloured terminal output
    #[serde(default)]
    pub plain: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `warn` or `bizdoctor=debug`
    pub level: Option<String>,
}

impl BizdoctorConfig {
    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref()?.default_format.as_deref()
    }

    pub fn plain(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.plain)
            .unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }
}

/// Contents written by `bizdoctor init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# bizdoctor configuration

[output]
# terminal, json or markdown
default_format = "terminal"
# disable colours in terminal reports
plain = false

[logging]
# overridden by RUST_LOG and -v
level = "warn"
"#;
