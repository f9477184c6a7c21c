use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import modules from the library crate
use art_dashboard_server::config;
use art_dashboard_server::dashboard::Dashboard;
use art_dashboard_server::dataset::load_dataset;
use art_dashboard_server::server::{metrics, run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON workbook, or to a directory with one JSON file per sheet.
    /// Can also be specified in config file.
    #[clap(value_parser = parse_path)]
    pub workbook: Option<PathBuf>,

    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of served pages in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// The performer of the series, whose compositions make up the originals page.
    #[clap(long)]
    pub subject: Option<String>,

    /// Minimum number of songs for an artist to appear in the songs-by-artist chart.
    #[clap(long)]
    pub min_songs_per_artist: Option<usize>,

    /// Fail when sheets reference shows, songs or artists that do not exist.
    #[clap(long)]
    pub strict_references: bool,

    /// Load and check the workbook, build every page, then exit without serving.
    #[clap(long)]
    pub check_only: bool,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            workbook_path: args.workbook.clone(),
            port: args.port,
            metrics_port: args.metrics_port,
            logging_level: args.logging_level.clone(),
            content_cache_age_sec: args.content_cache_age_sec,
            frontend_dir_path: args.frontend_dir_path.clone(),
            subject: args.subject.clone(),
            min_songs_per_artist: args.min_songs_per_artist,
            strict_references: args.strict_references,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    // Load TOML config if provided
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    info!("Configuration loaded:");
    info!("  workbook: {:?}", app_config.workbook_path);
    info!("  port: {}", app_config.port);
    info!("  subject: {}", app_config.dashboard.subject);
    info!("  strict_references: {}", app_config.strict_references);

    let dataset = load_dataset(&app_config.workbook_path, app_config.strict_references)?;
    let dashboard = Dashboard::build(&dataset, &app_config.dashboard);

    if cli_args.check_only {
        info!(
            "Check complete: {} pages built, {} unmatched artists.",
            dashboard.pages().len(),
            dashboard.unmatched_artists().len()
        );
        return Ok(());
    }

    // Initialize metrics system
    info!("Initializing metrics...");
    metrics::init_metrics();
    metrics::init_dataset_metrics(&dataset, dashboard.unmatched_artists().len());

    let server_config = ServerConfig {
        requests_logging_level: app_config.logging_level,
        port: app_config.port,
        metrics_port: app_config.metrics_port,
        content_cache_age_sec: app_config.content_cache_age_sec,
        frontend_dir_path: app_config.frontend_dir_path,
    };
    run_server(Arc::new(dashboard), server_config).await
}
