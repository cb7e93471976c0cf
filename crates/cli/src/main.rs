//! paddockctl - Lap telemetry analysis CLI
//!
//! Runs the lap delta, track dominance and session analytics engines over
//! JSON input files.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod input;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::*;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "paddockctl")]
#[command(about = "Lap telemetry analysis - delta traces, track dominance and session analytics")]
#[command(version)]
#[command(long_about = "
paddockctl runs the paddock analysis engines over JSON exports of lap data.

Delta, dominance and channel commands read one fastest-lap record per driver.
Laps and speed commands read every lap of each driver's session; points reads
a season of round results. Use --json for machine-readable output.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(long, global = true, help = "Output in JSON format for machine parsing")]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// YAML configuration file; embedded defaults when omitted
    #[arg(long, global = true, env = "PADDOCKCTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time gap to the fastest driver along the lap
    Delta(DeltaArgs),

    /// Fastest driver in each mini-sector of the track
    Dominance(DominanceArgs),

    /// Quick laps per driver, or their distribution with --summary
    Laps(LapsArgs),

    /// Average and top speed per team
    Speed(SpeedArgs),

    /// Cumulative championship points by round
    Points(PointsArgs),

    /// Overlay one telemetry channel for every driver
    Channel(ChannelArgs),

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries results; logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "paddockctl={lvl},paddock_delta={lvl},paddock_dominance={lvl},\
                 paddock_analysis={lvl},paddock_config={lvl}",
                lvl = log_level
            )
            .into()
        }))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = input::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Delta(args) => commands::delta::execute(args, config, cli.json),
        Commands::Dominance(args) => commands::dominance::execute(args, config, cli.json),
        Commands::Laps(args) => commands::laps::execute(args, config, cli.json),
        Commands::Speed(args) => commands::speed::execute(args, config, cli.json),
        Commands::Points(args) => commands::points::execute(args, cli.json),
        Commands::Channel(args) => commands::channel::execute(args, cli.json),
        Commands::Config => commands::config::execute(&config, cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    // --- Global flag parsing ---

    #[test]
    fn parse_delta_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["paddockctl", "delta", "laps.json"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        match &cli.command {
            Commands::Delta(args) => {
                assert_eq!(args.input, PathBuf::from("laps.json"));
                assert!(args.grid_points.is_none());
            }
            _ => return Err("expected Delta command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_before_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["paddockctl", "--json", "delta", "laps.json"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["paddockctl", "dominance", "laps.json", "--json"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        for (args, expected) in [
            (vec!["paddockctl", "config"], 0),
            (vec!["paddockctl", "-v", "config"], 1),
            (vec!["paddockctl", "-vv", "config"], 2),
            (vec!["paddockctl", "-vvv", "config"], 3),
        ] {
            let cli = Cli::try_parse_from(args)?;
            assert_eq!(cli.verbose, expected);
        }
        Ok(())
    }

    #[test]
    fn parse_config_flag() -> TestResult {
        let cli = Cli::try_parse_from(["paddockctl", "--config", "paddock.yaml", "config"])?;
        assert_eq!(cli.config, Some(PathBuf::from("paddock.yaml")));
        Ok(())
    }

    // --- Command parsing ---

    #[test]
    fn parse_dominance_mini_sectors() -> TestResult {
        let cli = Cli::try_parse_from(["paddockctl", "dominance", "laps.json", "-m", "25"])?;
        match &cli.command {
            Commands::Dominance(args) => assert_eq!(args.mini_sectors, Some(25)),
            _ => return Err("expected Dominance command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_laps_summary_and_threshold() -> TestResult {
        let cli = Cli::try_parse_from([
            "paddockctl",
            "laps",
            "session.json",
            "--summary",
            "--threshold",
            "1.05",
        ])?;
        match &cli.command {
            Commands::Laps(args) => {
                assert!(args.summary);
                assert!(matches!(args.threshold, Some(t) if (t - 1.05).abs() < 1e-12));
            }
            _ => return Err("expected Laps command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_points_repeated_driver() -> TestResult {
        let cli = Cli::try_parse_from([
            "paddockctl",
            "points",
            "season.json",
            "--driver",
            "VER",
            "-d",
            "NOR",
        ])?;
        match &cli.command {
            Commands::Points(args) => assert_eq!(args.drivers, vec!["VER", "NOR"]),
            _ => return Err("expected Points command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_channel_defaults_to_speed() -> TestResult {
        let cli = Cli::try_parse_from(["paddockctl", "channel", "laps.json"])?;
        match &cli.command {
            Commands::Channel(args) => {
                assert_eq!(args.channel, "speed");
                assert!(args.grid_points.is_none());
            }
            _ => return Err("expected Channel command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_missing_input_is_rejected() {
        assert!(Cli::try_parse_from(["paddockctl", "delta"]).is_err());
    }

    #[test]
    fn parse_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["paddockctl", "telemetry"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
