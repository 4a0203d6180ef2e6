//! Version and build information.

use serde::Serialize;
use std::fmt;

use crate::cli::args::OutputFormat;

/// Build information
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: &'static str,
    pub rustc_version: Option<&'static str>,
    /// Whether HTTPS endpoints are supported by this build
    pub tls: bool,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "health-assess {}", self.version)?;

        if let Some(commit) = self.commit {
            writeln!(f, "Commit: {}", commit)?;
        }

        if let Some(date) = self.build_date {
            writeln!(f, "Built: {}", date)?;
        }

        writeln!(f, "Target: {}", self.target)?;
        writeln!(f, "TLS: {}", if self.tls { "enabled" } else { "disabled" })?;

        if let Some(rustc) = self.rustc_version {
            write!(f, "Rustc: {}", rustc)?;
        }

        Ok(())
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("HEALTH_ASSESS_GIT_HASH"),
        build_date: option_env!("HEALTH_ASSESS_BUILD_DATE"),
        target: option_env!("HEALTH_ASSESS_TARGET").unwrap_or(std::env::consts::ARCH),
        rustc_version: option_env!("HEALTH_ASSESS_RUSTC_VERSION"),
        tls: cfg!(feature = "tls"),
    }
}

/// Render build information for the `version` command.
pub fn render(info: &BuildInfo, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(info).unwrap_or_else(|_| info.to_string())
        }
        OutputFormat::Text => info.to_string(),
    }
}
