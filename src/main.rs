use clap::{Parser, Subcommand};
use ost_core::config::Config;
use ost_core::{LogsCollector, PrivateDir};
use ost_fixtures::HarnessDefaults;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ost-logs", about = "Collect ansible-runner logs and show harness defaults")]
struct Cli {
    /// Write debug logs to /tmp/ost-logs-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file layered over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy raw event files and write one stdout log per host.
    Collect {
        /// Directory that receives `ansible_logs/`.
        #[arg(long)]
        target_dir: PathBuf,

        /// ansible-runner private data directory to scan for job events.
        #[arg(long, conflicts_with = "event_file", required_unless_present = "event_file")]
        private_dir: Option<PathBuf>,

        /// Explicit event data file (repeatable).
        #[arg(long)]
        event_file: Vec<PathBuf>,
    },
    /// Print the harness defaults as JSON.
    Defaults {
        /// Host name of the deployment (repeatable, in order).
        #[arg(long = "host")]
        hosts: Vec<String>,

        /// Inventory pattern VMs are deployed to.
        #[arg(long, default_value = "all")]
        ansible_all: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load user config, using defaults");
            Config::defaults()
        }),
    };

    match cli.command {
        Command::Collect {
            target_dir,
            private_dir,
            event_file,
        } => {
            let collector = LogsCollector::with_layout(config.collector.clone())?;
            let report = match private_dir {
                Some(dir) => collector.save_from(&target_dir, &PrivateDir::new(dir))?,
                None => collector.save(&target_dir, &event_file)?,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Defaults { hosts, ansible_all } => {
            let defaults = HarnessDefaults::new(&config, &hosts, &ansible_all);
            for name in defaults.unset_storage() {
                tracing::warn!(setting = name, "storage setting still holds its placeholder");
            }
            println!("{}", serde_json::to_string_pretty(&defaults)?);
        }
    }

    Ok(())
}

fn init_logging(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ost-logs-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("OST_LOGS_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ost-logs debug log started — tail -f /tmp/ost-logs-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("OST_LOGS_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }
    Ok(())
}
