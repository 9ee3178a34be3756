//! mc-pricer - Monte Carlo pricing of European options from the command line
//!
//! # Commands
//!
//! - `mc-pricer calibrate` - Implied volatility from a market price
//! - `mc-pricer price` - Calibrate, simulate, then estimate delta and vega
//! - `mc-pricer simulate` - Simulate at a given volatility
//! - `mc-pricer convergence` - Price and interval across path counts
//! - `mc-pricer delta-profile` - Delta across spots around the strike
//!
//! Results are printed to stdout as JSON. Logs go to stderr, filtered by
//! `RUST_LOG`, else by the configured `log_level`; `--verbose` forces debug.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricer_models::instruments::OptionKind;
use pricer_pricing::greeks::RandomNumberPolicy;
use pricer_pricing::mc::SamplingMethod;

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliConfig, Overrides};

/// Monte Carlo European option pricer
#[derive(Parser)]
#[command(name = "mc-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: mc-pricer.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    settings: SettingsArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags overriding the configuration file and environment
#[derive(Args, Debug, Default)]
struct SettingsArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Spot price S0
    #[arg(long, global = true)]
    spot: Option<f64>,

    /// Strike K
    #[arg(long, global = true)]
    strike: Option<f64>,

    /// Time to expiry in years
    #[arg(long, global = true)]
    expiry: Option<f64>,

    /// Risk-free rate (0.05 = 5%)
    #[arg(long, global = true, allow_hyphen_values = true)]
    rate: Option<f64>,

    /// Option kind (call, put)
    #[arg(long, global = true)]
    kind: Option<OptionKind>,

    /// Observed option premium
    #[arg(long, global = true)]
    market_price: Option<f64>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long = "paths", global = true)]
    n_paths: Option<usize>,

    /// Sampling method (pseudorandom, sobol)
    #[arg(long, global = true)]
    sampling: Option<SamplingMethod>,

    /// Seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Confidence interval multiplier z
    #[arg(long = "z", global = true)]
    confidence_multiplier: Option<f64>,

    /// Finite-difference bump for delta and vega
    #[arg(long, global = true)]
    bump: Option<f64>,

    /// Random numbers for Greek legs (independent, common)
    #[arg(long, global = true)]
    random_numbers: Option<RandomNumberPolicy>,

    /// Evaluate Greek legs in parallel
    #[arg(long, global = true)]
    parallel: bool,
}

impl SettingsArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            log_level: self.log_level.clone(),
            spot: self.spot,
            strike: self.strike,
            expiry: self.expiry,
            rate: self.rate,
            kind: self.kind,
            market_price: self.market_price,
            n_paths: self.n_paths,
            sampling: self.sampling,
            seed: self.seed,
            confidence_multiplier: self.confidence_multiplier,
            bump: self.bump,
            random_numbers: self.random_numbers,
            parallel: self.parallel,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Implied volatility from the market price
    Calibrate,

    /// Calibrate, simulate and estimate delta and vega
    Price,

    /// Simulate at a given volatility
    Simulate {
        /// Volatility (default: implied from the market price)
        #[arg(long)]
        volatility: Option<f64>,

        /// Include terminal prices and payoffs in the output
        #[arg(long)]
        include_paths: bool,
    },

    /// Price and confidence interval across path counts
    Convergence {
        /// Volatility (default: implied from the market price)
        #[arg(long)]
        volatility: Option<f64>,

        /// Comma-separated path counts (default: 100 to 1,000,000)
        #[arg(long, value_delimiter = ',')]
        ladder: Vec<usize>,
    },

    /// Delta across spots from 0.5K to 1.5K
    DeltaProfile {
        /// Volatility (default: implied from the market price)
        #[arg(long)]
        volatility: Option<f64>,
    },
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.as_filter_str()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(cli.config.as_deref(), &cli.settings.overrides())?;
    init_tracing(&config, cli.verbose);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Calibrate => commands::calibrate::run(&config),
        Commands::Price => commands::price::run(&config),
        Commands::Simulate {
            volatility,
            include_paths,
        } => commands::simulate::run(&config, volatility, include_paths),
        Commands::Convergence { volatility, ladder } => {
            commands::convergence::run(&config, volatility, &ladder)
        }
        Commands::DeltaProfile { volatility } => commands::delta_profile::run(&config, volatility),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mc-pricer", "simulate", "--volatility", "0.25", "--paths", "500", "--sampling", "sobol",
            "--kind", "put", "--rate", "-0.01",
        ])
        .unwrap();
        let overrides = cli.settings.overrides();
        assert_eq!(overrides.n_paths, Some(500));
        assert_eq!(overrides.sampling, Some(SamplingMethod::QuasiRandom));
        assert_eq!(overrides.kind, Some(OptionKind::Put));
        assert_eq!(overrides.rate, Some(-0.01));
        assert!(matches!(
            cli.command,
            Commands::Simulate {
                volatility: Some(v),
                include_paths: false
            } if v == 0.25
        ));
    }

    #[test]
    fn test_convergence_ladder_parsing() {
        let cli = Cli::try_parse_from(["mc-pricer", "convergence", "--ladder", "100,1000,10000"]).unwrap();
        match cli.command {
            Commands::Convergence { ladder, volatility } => {
                assert_eq!(ladder, vec![100, 1_000, 10_000]);
                assert!(volatility.is_none());
            }
            _ => panic!("expected convergence"),
        }
    }

    #[test]
    fn test_unknown_sampling_rejected() {
        assert!(Cli::try_parse_from(["mc-pricer", "price", "--sampling", "halton"]).is_err());
    }
}
