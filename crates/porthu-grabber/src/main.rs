use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use porthu_grabber::{
    assembler::{GuideAssembler, check_enabled_channels},
    config::{
        ConfigManager, ConfigReconciler, GrabberConfig, LogLevel, OptionOverrides, RunOptions,
        Verbosity, defaults::GRABBER_NAME, log_level::parse_log_level,
    },
    errors::AppError,
    fetch::{PinnedClientFactory, ReqwestFetcher, SystemResolver},
    models::Channel,
    sources::porthu::{HOST, PortHuApi, provider_today},
    xmltv::XmltvWriter,
};

const DESCRIPTION: &str = "Hungary (port.hu)";
const CAPABILITIES: &[&str] = &["baseline", "manualconfig"];

const BAN_WARNING: &str = "WARNING: a high --jobs or --ratelimit value, or a low --interval, \
can make the provider ban your address. Every job keeps its own rate limit, so the total \
request rate grows with the number of jobs.";

#[derive(Parser, Debug)]
#[command(name = GRABBER_NAME)]
#[command(version)]
#[command(about = "XMLTV grabber for the Hungarian port.hu TV guide")]
#[command(after_help = BAN_WARNING)]
struct Cli {
    /// Print the grabber description and exit
    #[arg(long)]
    description: bool,

    /// Print the supported XMLTV capabilities and exit
    #[arg(long)]
    capabilities: bool,

    /// Refresh the channel list in the config file
    #[arg(long)]
    configure: bool,

    /// Store the options given on the command line when configuring
    #[arg(long, requires = "configure")]
    save_options: bool,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    config_file: Option<PathBuf>,

    /// Write the guide to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of days to retrieve
    #[arg(long, value_name = "N")]
    days: Option<i64>,

    /// First day to retrieve, relative to today
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    offset: Option<i64>,

    /// Log level: FATAL, ERROR, WARNING, INFO, DEBUG or 10-50
    #[arg(short, long, value_name = "LEVEL", value_parser = parse_log_level)]
    loglevel: Option<LogLevel>,

    /// Same as --loglevel DEBUG
    #[arg(short, long)]
    debug: bool,

    /// Same as --loglevel INFO
    #[arg(short, long)]
    verbose: bool,

    /// No log output at all
    #[arg(short, long)]
    quiet: bool,

    /// Fetch the detail page of every programme
    #[arg(long)]
    slow: bool,

    /// Parallel detail-page workers
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Requests per interval and worker
    #[arg(long, value_name = "N")]
    ratelimit: Option<u32>,

    /// Rate limit interval in seconds
    #[arg(long, value_name = "SECONDS")]
    interval: Option<u64>,

    /// Extra attempts for timed out or rate limited detail pages
    #[arg(long, value_name = "N")]
    retries: Option<u32>,

    /// Upper bound of the rate limit backoff in seconds
    #[arg(long, value_name = "SECONDS")]
    max_interval: Option<u64>,
}

impl Cli {
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            output: self.output.clone(),
            days: self.days,
            offset: self.offset,
            slow: self.slow,
            jobs: self.jobs,
            ratelimit: self.ratelimit,
            interval: self.interval,
            retries: self.retries,
            max_interval: self.max_interval.map(Duration::from_secs),
        }
    }

    fn verbosity(&self, stored: Option<&GrabberConfig>) -> Verbosity {
        let options = stored.map(|config| &config.options);
        let quiet = self.quiet || options.and_then(|o| o.quiet).unwrap_or(false);
        let level = self
            .loglevel
            .or_else(|| options.and_then(|o| o.loglevel))
            .unwrap_or_default();
        Verbosity::resolve(quiet, self.debug, self.verbose, level)
    }
}

fn init_logging(verbosity: Verbosity) {
    let log_filter = format!("porthu_grabber={verbosity},tv_grab_hu_porthu={verbosity}");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.description {
        println!("{DESCRIPTION}");
        return Ok(ExitCode::SUCCESS);
    }
    if cli.capabilities {
        println!("{}", CAPABILITIES.join("\n"));
        return Ok(ExitCode::SUCCESS);
    }

    let manager = ConfigManager::new(cli.config_file.clone());
    let stored = match manager.read() {
        Ok(config) => Some(config),
        Err(AppError::ConfigMissing { .. }) => None,
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read config file {}", manager.path().display()));
        }
    };

    init_logging(cli.verbosity(stored.as_ref()));
    info!("Starting {GRABBER_NAME} v{}", env!("CARGO_PKG_VERSION"));

    if cli.configure {
        configure(&cli, &manager, stored).await
    } else {
        grab(&cli, &manager, stored).await
    }
}

async fn configure(
    cli: &Cli,
    manager: &ConfigManager,
    stored: Option<GrabberConfig>,
) -> Result<ExitCode> {
    let api = PortHuApi::new(Arc::new(ReqwestFetcher::new()?));
    let catalog = match api.fetch_channel_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Retrieving the channel list failed, the config file is left unchanged: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut config = stored.unwrap_or_default();
    config.channels = ConfigReconciler::merge(&config.channels, catalog, true);

    if cli.save_options {
        let options = match RunOptions::resolve(&cli.overrides(), &config.options) {
            Ok(options) => options,
            Err(e) => {
                error!("{e}");
                return Ok(ExitCode::FAILURE);
            }
        };
        let mut stored_options = options.to_stored(&config.options);
        if cli.loglevel.is_some() {
            stored_options.loglevel = cli.loglevel;
        }
        if cli.quiet {
            stored_options.quiet = Some(true);
        }
        config.options = stored_options;
    }

    manager
        .write(&config)
        .with_context(|| format!("Failed to write config file {}", manager.path().display()))?;
    info!(
        "Configuration written to {}: {} channel(s), {} enabled",
        manager.path().display(),
        config.channels.len(),
        config.enabled_channels().count()
    );
    Ok(ExitCode::SUCCESS)
}

async fn grab(cli: &Cli, manager: &ConfigManager, stored: Option<GrabberConfig>) -> Result<ExitCode> {
    let Some(config) = stored else {
        error!("Config file not found. Please run the script with the --configure parameter");
        return Ok(ExitCode::FAILURE);
    };

    let options = match RunOptions::resolve(&cli.overrides(), &config.options) {
        Ok(options) => options,
        Err(e) => {
            error!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let output = options.output.clone();

    let api = PortHuApi::new(Arc::new(ReqwestFetcher::new()?));
    let assembler = GuideAssembler::new(
        api,
        Arc::new(PinnedClientFactory::new(HOST)),
        Arc::new(SystemResolver),
        options,
    );

    let today = provider_today();
    let limits = assembler.fetch_limits(today).await;
    let enabled: Vec<Channel> = config.enabled_channels().cloned().collect();
    check_enabled_channels(&limits, &enabled);
    let window = assembler.plan_window(&limits, today);

    let guide = if enabled.is_empty() {
        warn!(
            "No channels are enabled in {}, the guide will be empty",
            manager.path().display()
        );
        Default::default()
    } else {
        assembler.retrieve_guide(&enabled, &window).await
    };

    match XmltvWriter::write(&guide, output.as_deref()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("Writing the guide failed: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
