//! Whitelist Merkle tool
//!
//! 1. Load configuration (file + environment + flags)
//! 2. Read whitelist values
//! 3. Build the sorted-pair Merkle tree
//! 4. Print the root, print/export proofs, or verify a proof

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use merkle_core::{HashAlgorithm, LeafEncoding};
use whitelist_cli::config::{apply_overrides, load_config, validate_config, ConfigOverrides};
use whitelist_cli::types::WhitelistConfig;
use whitelist_cli::{build_tree, proof_for, report, source, verify_value};

/// Whitelist Merkle root and proof generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Hash algorithm (keccak256, sha256), overrides config file
    #[arg(long)]
    hash: Option<HashAlgorithm>,

    /// Leaf encoding (address, padded_address, hex), overrides config file
    #[arg(long)]
    encoding: Option<LeafEncoding>,

    /// Keep input order at level 0 instead of sorting leaves
    #[arg(long, default_value_t = false)]
    keep_order: bool,

    /// Pair the last node of an odd level with itself instead of carrying it up
    #[arg(long, default_value_t = false)]
    duplicate_odd: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the Merkle root of a whitelist
    Root {
        /// Input file containing one value per line
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the proof for one whitelisted value
    Proof {
        /// Input file containing one value per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Value to prove (e.g. an address)
        #[arg(short, long)]
        value: String,
    },

    /// Verify a proof against a published root
    Verify {
        /// Claimed value
        #[arg(short, long)]
        value: String,

        /// Merkle root (hex)
        #[arg(short, long)]
        root: String,

        /// Comma separated sibling hashes, bottom to top
        #[arg(short, long, value_delimiter = ',')]
        proof: Vec<String>,
    },

    /// Write root and proofs for every value to a JSON file
    Export {
        /// Input file containing one value per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level)?;

    info!("Whitelist Merkle tool v{}", env!("CARGO_PKG_VERSION"));

    let config = load_configuration(&args)?;

    match &args.command {
        Command::Root { input } => {
            let values = read_input(input.as_deref(), &config)?;
            let tree = build_tree(&values, &config).context("Failed to build Merkle tree")?;
            println!("{}", tree.root());
        }
        Command::Proof { input, value } => {
            let values = read_input(input.as_deref(), &config)?;
            let tree = build_tree(&values, &config).context("Failed to build Merkle tree")?;
            let entry = proof_for(&tree, &config, value)
                .with_context(|| format!("Failed to generate proof for {}", value))?;
            info!("Merkle root: {}", tree.root());
            println!("{}", serde_json::to_string_pretty(&entry.proof)?);
        }
        Command::Verify { value, root, proof } => {
            let proof: Vec<&str> = proof
                .iter()
                .map(|entry| entry.trim())
                .filter(|entry| !entry.is_empty())
                .collect();
            let valid =
                verify_value(&config, value, &proof, root).context("Failed to verify proof")?;
            if valid {
                println!("valid");
            } else {
                error!("Proof does not match root {}", root);
                println!("invalid");
                std::process::exit(1);
            }
        }
        Command::Export { input, output } => {
            let values = read_input(input.as_deref(), &config)?;
            let report = report::build_report(&values, &config)
                .context("Failed to build proof report")?;
            let output = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output_path));
            report::write_report(&report, &output).context("Failed to write proof report")?;
            println!("{}", report.merkle_root);
        }
    }

    Ok(())
}

/// Initialize logging system
fn init_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => {
            eprintln!("Unknown log level: {}, using INFO", log_level);
            tracing::Level::INFO
        }
    };

    // 日誌寫到 stderr，stdout 只輸出根和證明
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

/// Load configuration and apply command line overrides
fn load_configuration(args: &Args) -> Result<WhitelistConfig> {
    if let Some(path) = &args.config {
        info!("Loading configuration: {}", path.display());
    }

    let mut config = load_config(args.config.as_deref()).context("Failed to load configuration")?;

    apply_overrides(
        &mut config,
        &ConfigOverrides {
            hash_algorithm: args.hash,
            leaf_encoding: args.encoding,
            keep_order: args.keep_order,
            duplicate_odd: args.duplicate_odd,
        },
    );

    validate_config(&config).context("Invalid configuration")?;

    info!("   - Hash algorithm: {}", config.hash_algorithm);
    info!("   - Leaf encoding: {}", config.leaf_encoding);
    info!("   - Sort leaves: {}", config.sort_leaves);
    info!("   - Odd node policy: {:?}", config.odd_node_policy);

    Ok(config)
}

/// Read whitelist values from the given path or the configured one
fn read_input(input: Option<&Path>, config: &WhitelistConfig) -> Result<Vec<String>> {
    let path = input.unwrap_or_else(|| Path::new(&config.input_path));
    let values = source::load_values(path).context("Failed to read whitelist")?;
    if values.is_empty() {
        anyhow::bail!("Whitelist {} contains no values", path.display());
    }
    Ok(values)
}
