//! Emit a single Chillog record from the command line.
//!
//! ```text
//! SERVICE_NAME=billing chillog error "charge failed" --full "card declined" order 42
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chillog::config::{load_config, ChillogConfig};
use chillog::logger::global;
use chillog::{convert_to_map, Level};

#[derive(Parser)]
#[command(name = "chillog")]
#[command(about = "Write one Chillog Logging Format v1 record", long_about = None)]
struct Cli {
    /// TOML file naming the host/service environment variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Severity: name (alert, critical, error, warning, notice, info, debug) or rank 1-7
    level: Level,

    /// Short message
    short_message: String,

    /// Full message
    #[arg(short, long)]
    full: Option<String>,

    /// Extra fields as KEY VALUE pairs; a trailing KEY gets an empty value.
    /// Values may start with '-'; pass --full before the pairs.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pairs: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chillog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("chillog: failed to load {}: {}", path.display(), e);
                return ExitCode::from(2);
            }
        },
        None => ChillogConfig::default(),
    };

    if let Err(e) = global::init_from(&config) {
        eprintln!("chillog: {}", e);
        return ExitCode::from(2);
    }

    let fields = convert_to_map(Some(cli.pairs.as_slice()));
    match chillog::log(cli.level, &cli.short_message, cli.full.as_deref(), &fields) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to write record");
            ExitCode::FAILURE
        }
    }
}
