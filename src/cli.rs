use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldbook", version, about = "Harvest timing for farm grow records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the harvest window and status for a grow
    Estimate(GrowArgs),
    /// Print the week-by-week harvest heat map for this season
    Calendar(GrowArgs),
    /// Run interactive setup
    Init,
    /// Validate config and print the effective tuning
    Check,
}

#[derive(Args, Debug, Clone)]
pub struct GrowArgs {
    /// Cultivar growing days, e.g. "75-85"
    #[arg(short, long)]
    pub days: Option<String>,

    /// Cultivar optimal hardiness zone or range, e.g. "5-9"
    #[arg(long)]
    pub cultivar_zone: Option<String>,

    /// Hardiness zone of the grow (defaults to the configured zone)
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Planting date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub planted: Option<NaiveDate>,

    /// Evaluate as of this date instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_estimate_args() {
        let cli = Cli::try_parse_from([
            "fieldbook",
            "estimate",
            "--days",
            "75-85",
            "--planted",
            "2024-01-01",
            "--today",
            "2024-03-20",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Estimate(args) => {
                assert_eq!(args.days.as_deref(), Some("75-85"));
                assert_eq!(args.planted, NaiveDate::from_ymd_opt(2024, 1, 1));
                assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 3, 20));
                assert!(args.json);
                assert!(args.zone.is_none());
            }
            _ => panic!("expected estimate"),
        }
    }

    #[test]
    fn rejects_bad_date() {
        let result = Cli::try_parse_from(["fieldbook", "calendar", "--planted", "03/20/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["fieldbook", "-vv", "check"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
