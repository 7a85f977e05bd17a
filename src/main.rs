use std::path::PathBuf;

use clap::Parser;
use rsopc_config::{ConfigStore, LoggingUtils, RequiredSchema, SHUTDOWN_BANNER};
use tracing::{error, info};

/// Load and validate a RealSense OPC client configuration file
#[derive(Debug, Parser)]
#[command(name = "rsopc-config", version, about)]
struct Cli {
    /// INI configuration file
    file: PathBuf,

    /// TOML file describing required sections and keys
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Require at least one entry in the [nodes] section
    #[arg(long)]
    nodes_required: bool,

    /// Print the value of KEY in SECTION
    #[arg(long, num_args = 2, value_names = ["SECTION", "KEY"])]
    get: Option<Vec<String>>,

    /// Value printed when --get finds nothing
    #[arg(long, requires = "get")]
    fallback: Option<String>,

    /// Print the whole configuration as JSON
    #[arg(long, conflicts_with = "get")]
    dump: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = LoggingUtils::initialize(&cli.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let store = match load_store(&cli) {
        Ok(store) => {
            info!("Configuration loaded successfully");
            store
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            eprint!("{}", SHUTDOWN_BANNER);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &store) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn load_store(cli: &Cli) -> anyhow::Result<ConfigStore> {
    let mut schema = match &cli.schema {
        Some(path) => Some(RequiredSchema::from_toml_file(path)?),
        None => None,
    };

    if cli.nodes_required {
        schema = Some(
            schema
                .unwrap_or_default()
                .require_any_entry(rsopc_config::config::NODES_SECTION),
        );
    }

    Ok(ConfigStore::load(&cli.file, schema)?)
}

fn run(cli: &Cli, store: &ConfigStore) -> anyhow::Result<()> {
    if let Some([section, key]) = cli.get.as_deref() {
        let value = store.get_value(section, key, cli.fallback.as_deref())?;
        println!("{}", value);
    } else if cli.dump {
        println!("{}", serde_json::to_string_pretty(store.data())?);
    } else {
        println!("\"{}\" OK ({} sections)", store.name(), store.data().len());
    }
    Ok(())
}
