mod file_config;

pub use file_config::{DashboardConfig, FileConfig};

use crate::dashboard::DashboardSettings;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub workbook_path: Option<PathBuf>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub subject: Option<String>,
    pub min_songs_per_artist: Option<usize>,
    pub strict_references: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub workbook_path: PathBuf,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    /// Fail the load when sheets reference missing rows.
    pub strict_references: bool,

    pub dashboard: DashboardSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let workbook_path = file
            .workbook_path
            .map(PathBuf::from)
            .or_else(|| cli.workbook_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "workbook_path must be specified on the command line or in config file"
                )
            })?;

        if !workbook_path.exists() {
            bail!("Workbook does not exist: {:?}", workbook_path);
        }

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);
        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        let strict_references = file.strict_references.unwrap_or(cli.strict_references);

        // Dashboard settings - merge file config with CLI and defaults
        let dashboard_file = file.dashboard.unwrap_or_default();
        let defaults = DashboardSettings::default();
        let dashboard = DashboardSettings {
            title: dashboard_file.title.unwrap_or(defaults.title),
            subject: dashboard_file
                .subject
                .or_else(|| cli.subject.clone())
                .unwrap_or(defaults.subject),
            intro: dashboard_file.intro.unwrap_or(defaults.intro),
            footnote: dashboard_file.footnote.or(defaults.footnote),
            min_songs_per_artist: dashboard_file
                .min_songs_per_artist
                .or(cli.min_songs_per_artist)
                .unwrap_or(defaults.min_songs_per_artist),
        };

        Ok(Self {
            workbook_path,
            port,
            metrics_port,
            logging_level,
            content_cache_age_sec,
            frontend_dir_path,
            strict_references,
            dashboard,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
