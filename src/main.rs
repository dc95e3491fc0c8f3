use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use openxbl::config::Config;
use openxbl::{format_xbl_error, Connection, LiveClient, XblError};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Show the Xbox Live profile of an OpenXBL API key holder
#[derive(Parser, Debug)]
#[command(name = "openxbl", version, about, long_about = None)]
struct Args {
    /// OpenXBL API key (from https://xbl.io/profile)
    #[arg(short = 'k', long, env = "OPENXBL_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Also list played games
    #[arg(short, long)]
    games: bool,

    /// Save the API key and base URL to the config file
    #[arg(long)]
    save: bool,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("openxbl started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("openxbl").join("openxbl.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".openxbl").join("openxbl.log");
    }
    PathBuf::from("openxbl.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    match run(&args).await {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<XblError>() {
            Some(api_error) => {
                tracing::error!("{:#}", e);
                Err(anyhow::anyhow!(format_xbl_error(api_error)))
            },
            None => Err(e),
        },
    }
}

async fn run(args: &Args) -> Result<()> {
    let mut config = Config::load();

    let api_key = config
        .effective_api_key(args.api_key.as_deref())
        .context("No API key given. Pass --api-key or set OPENXBL_API_KEY")?;
    let base_url = config.effective_base_url(args.base_url.as_deref());

    if args.save {
        config.api_key = Some(api_key.clone());
        config.base_url = args.base_url.clone().or(config.base_url);
        config.save()?;
        tracing::info!("Saved configuration to {:?}", Config::config_path());
    }

    let client = LiveClient::with_connection(Connection::global()?, &api_key, &base_url, false)?;

    let profile = client
        .wait_current()
        .await?
        .context("Default gamer profile pull was not started")?;

    println!("{}", serde_json::to_string_pretty(&profile)?);

    if args.games {
        for game in profile.played_games(&client).await? {
            println!("{}", game.name);
        }
    }

    Ok(())
}
