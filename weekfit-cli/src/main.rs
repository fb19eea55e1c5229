use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use weekfit_core::{CategoryTag, PlanRequest, parse_categories, plan_week, tag};
use weekfit_ingest::{load_activity_catalog, parse_day_list};

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "weekfit",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("WEEKFIT_BUILD_SHA"), ")"),
    about = "Weekly exercise schedule planner"
)]
struct Cli {
    /// Debug-level logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a week of sessions that approximates a calorie target
    Plan {
        /// Days to train, e.g. "mon,wed,fri" or "thứ 2, thứ 4"
        #[arg(long)]
        days: String,

        /// Activity categories, comma separated (outdoor, indoor, sport, resistance, artistic)
        #[arg(long, value_delimiter = ',', required = true)]
        categories: Vec<String>,

        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Weekly calorie target in kcal
        #[arg(long)]
        target: f64,

        /// Exercise dataset CSV (defaults to the configured dataset)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Shortest session in minutes
        #[arg(long)]
        min_minutes: Option<u32>,

        /// Longest session in minutes
        #[arg(long)]
        max_minutes: Option<u32>,

        /// Session length used to rank activities
        #[arg(long)]
        reference_minutes: Option<u32>,

        /// Warn when a category matches fewer activities than this
        #[arg(long)]
        min_per_category: Option<usize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List categories and their keywords
    Categories,

    /// Show which categories an activity name falls into
    Tag {
        /// Activity name, e.g. "Running, 6 mph"
        name: String,
    },

    /// Manage ~/.weekfit/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("weekfit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("weekfit=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Plan {
            days,
            categories,
            weight,
            target,
            data,
            min_minutes,
            max_minutes,
            reference_minutes,
            min_per_category,
            format,
        } => {
            let cfg = config::load_config()?;
            let mut settings = cfg.plan;
            if let Some(m) = min_minutes {
                settings.minutes_low = m;
            }
            if let Some(m) = max_minutes {
                settings.minutes_high = m;
            }
            if let Some(m) = reference_minutes {
                settings.reference_minutes = m;
            }
            if let Some(n) = min_per_category {
                settings.min_per_category = n;
            }

            let dataset = data.unwrap_or(cfg.data.dataset);
            let catalog = load_activity_catalog(&dataset)
                .with_context(|| format!("loading {} (pass --data <csv>)", dataset.display()))?;

            let request = PlanRequest {
                days: parse_day_list(&days)?,
                categories: parse_categories(&categories)?,
                weight_kg: weight,
                weekly_target_kcal: target,
            };
            let outcome = plan_week(&catalog, &request, &settings)?;

            match format {
                OutputFormat::Table => {
                    for w in &outcome.warnings {
                        println!("[warning] {}", w);
                    }
                    if !outcome.warnings.is_empty() {
                        println!();
                    }
                    print!("{}", render::render_table(&outcome));
                    if outcome.schedule.is_undershoot() {
                        warn!(
                            deviation_kcal = outcome.schedule.deviation_kcal,
                            "target not reachable within {} minutes per day",
                            settings.minutes_high
                        );
                    }
                }
                OutputFormat::Json => {
                    println!("{}", render::render_json(&outcome)?);
                }
            }
        }

        Command::Categories => {
            for category in CategoryTag::ALL {
                println!("{:<10}  {}", category.label(), category.keywords().join(", "));
            }
        }

        Command::Tag { name } => {
            let tags: Vec<_> = tag(&name.trim().to_lowercase())
                .iter()
                .map(|t| t.label())
                .collect();
            println!("{}: {}", name.trim(), tags.join(", "));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let p = config::config_path()?;
                let cfg = config::load_config()?;
                println!("# {}", p.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}
