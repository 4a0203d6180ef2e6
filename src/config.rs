//! Layered configuration.
//!
//! Precedence, lowest first: built-in defaults, TOML file (`--config` or
//! `HEALTH_ASSESS_CONFIG`), environment, command line flags.
//!
//! ```toml
//! endpoint = "http://localhost:5000/predict"
//! connect_timeout_ms = 5000
//! read_timeout_ms = 30000
//!
//! [output]
//! format = "json"
//! color = false
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::cli::args::{Args, OutputFormat};
use crate::submit::{TransportConfig, DEFAULT_ENDPOINT};
use crate::AssessError;

pub const ENV_CONFIG: &str = "HEALTH_ASSESS_CONFIG";
pub const ENV_ENDPOINT: &str = "HEALTH_ASSESS_ENDPOINT";
pub const ENV_FORMAT: &str = "HEALTH_ASSESS_FORMAT";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// On-disk configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
    #[serde(default)]
    pub read_timeout_ms: Option<u64>,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub color: Option<bool>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, AssessError> {
        toml::from_str(text).map_err(|e| AssessError::Config {
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, AssessError> {
        let text = fs::read_to_string(path).map_err(|source| AssessError::Io {
            context: format!("reading config {}", path.display()),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::parse(&text)
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessConfig {
    pub endpoint: String,
    pub transport: TransportConfig,
    pub format: OutputFormat,
    pub color: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl Default for AssessConfig {
    fn default() -> Self {
        AssessConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transport: TransportConfig::default(),
            format: OutputFormat::Text,
            color: true,
            verbose: false,
            quiet: false,
        }
    }
}

impl AssessConfig {
    /// Load the config file named by the args or environment, then resolve.
    pub fn load(args: &Args) -> Result<Self, AssessError> {
        let path = args
            .config
            .clone()
            .or_else(|| std::env::var_os(ENV_CONFIG).map(Into::into));
        let file = path.as_deref().map(ConfigFile::load).transpose()?;
        Self::resolve(args, file, |key| std::env::var(key).ok())
    }

    /// Merge every layer. `env` is injected so tests stay hermetic.
    pub fn resolve(
        args: &Args,
        file: Option<ConfigFile>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AssessError> {
        let mut config = AssessConfig::default();

        if let Some(file) = file {
            if let Some(endpoint) = file.endpoint {
                config.endpoint = endpoint;
            }
            if let Some(ms) = file.connect_timeout_ms {
                config.transport.connect_timeout_ms = ms;
            }
            if let Some(ms) = file.read_timeout_ms {
                config.transport.read_timeout_ms = ms;
            }
            if let Some(format) = file.output.format {
                config.format = parse_format(&format)?;
            }
            if let Some(color) = file.output.color {
                config.color = color;
            }
        }

        if let Some(endpoint) = env(ENV_ENDPOINT).filter(|s| !s.is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(format) = env(ENV_FORMAT).filter(|s| !s.is_empty()) {
            config.format = parse_format(&format)?;
        }
        if env(ENV_NO_COLOR).is_some_and(|s| !s.is_empty()) {
            config.color = false;
        }

        if let Some(endpoint) = &args.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(ms) = args.timeout_ms {
            config.transport.read_timeout_ms = ms;
        }
        if let Some(format) = args.format {
            config.format = format;
        }
        if args.no_color {
            config.color = false;
        }
        config.verbose = args.verbose;
        config.quiet = args.quiet;

        check_endpoint(&config.endpoint)?;
        Ok(config)
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, AssessError> {
    OutputFormat::parse(s).map_err(|message| AssessError::Config { message })
}

fn check_endpoint(endpoint: &str) -> Result<(), AssessError> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(AssessError::Config {
            message: format!("endpoint must be an http(s) URL, got '{}'", endpoint),
        })
    }
}
