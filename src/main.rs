//! wrr-sim: inspect weighted selection over a pool file.
//!
//! ```text
//! wrr-sim --config pool.toml check
//! wrr-sim --config pool.toml members --group web
//! wrr-sim --config pool.toml simulate --group web --picks 20 --exclude b
//! ```
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use weighted_select::config::load_config;
use weighted_select::observability::logging::init_logging;
use weighted_select::simulate;
use weighted_select::{SelectError, SelectorPool};

#[derive(Parser)]
#[command(name = "wrr-sim")]
#[command(about = "Simulate weighted selection over a pool configuration", long_about = None)]
struct Cli {
    /// Pool configuration file (TOML).
    #[arg(short, long, default_value = "pool.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and summarize its groups
    Check,
    /// List members and weights of a group
    Members {
        #[arg(short, long)]
        group: String,
    },
    /// Run a number of picks against a group
    Simulate {
        #[arg(short, long)]
        group: String,

        #[arg(short, long, default_value_t = 100)]
        picks: usize,

        /// Member to skip on every pick (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.logging.level)?;

    tracing::debug!(
        path = %cli.config.display(),
        groups = config.groups.len(),
        members = config.members.len(),
        "Configuration loaded"
    );

    let pool = SelectorPool::from_config(&config)?;

    let output = match cli.command {
        Commands::Check => {
            let groups: Vec<_> = pool
                .groups()
                .into_iter()
                .map(|name| -> Result<serde_json::Value, SelectError> {
                    let strategy = pool.strategy(&name)?;
                    let members = pool.members(&name)?;
                    let total: i64 = members.values().sum();
                    Ok(json!({
                        "group": name,
                        "strategy": strategy,
                        "members": members.len(),
                        "total_weight": total,
                    }))
                })
                .collect::<Result<_, SelectError>>()?;
            json!({ "valid": true, "groups": groups })
        }
        Commands::Members { group } => {
            let members: std::collections::BTreeMap<_, _> = pool.members(&group)?.into_iter().collect();
            json!({ "group": group, "members": members })
        }
        Commands::Simulate {
            group,
            picks,
            exclude,
        } => serde_json::to_value(simulate::run(&pool, &group, picks, &exclude)?)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
