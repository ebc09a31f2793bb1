use anyhow::Context;
use clap::Parser;
use fieldbook::cli::{Cli, Commands, GrowArgs};
use fieldbook::config::Config;
use fieldbook::logic::HarvestEstimator;
use fieldbook::models::GrowInput;
use fieldbook::report;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init => {
            Config::setup_interactive(cli.config).context("Setup failed")?;
        }
        Commands::Check => {
            let config = Config::load(cli.config).context("Configuration check failed")?;
            println!("Configuration OK");
            println!("  Grower:          {}", config.grower.name);
            println!(
                "  USDA zone:       {}",
                config.grower.usda_zone.as_deref().unwrap_or("(not set)")
            );
            let estimator = HarvestEstimator::new(config.zone_adjustment, config.harvest_policy);
            print!("{}", report::render_tuning(&estimator));
        }
        Commands::Estimate(args) => {
            let config = Config::load_or_default(cli.config).context("Failed to load config")?;
            let (estimator, grow, today) = prepare(&config, &args);
            let estimate = estimator.estimate(&grow, today);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                print!("{}", report::render_estimate(&grow, &estimate));
            }
        }
        Commands::Calendar(args) => {
            let config = Config::load_or_default(cli.config).context("Failed to load config")?;
            let (estimator, grow, today) = prepare(&config, &args);
            let bands = estimator.calendar(&grow, today);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&bands)?);
            } else {
                print!("{}", report::render_calendar(&bands));
            }
        }
    }

    Ok(())
}

fn prepare(config: &Config, args: &GrowArgs) -> (HarvestEstimator, GrowInput, chrono::NaiveDate) {
    let estimator = HarvestEstimator::new(config.zone_adjustment, config.harvest_policy);

    let grow = GrowInput {
        growing_days: args.days.clone(),
        cultivar_zone: args.cultivar_zone.clone(),
        grow_zone: args
            .zone
            .clone()
            .or_else(|| config.grower.usda_zone.clone()),
        planted: args.planted,
    };

    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    tracing::debug!(?grow, %today, "Evaluating grow");

    (estimator, grow, today)
}
