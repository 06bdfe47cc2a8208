use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};

use dualmon_secrets::bootstrap::{self, Bootstrap};
use dualmon_secrets::{header, lint, rust_consts, template};
use dualmon_secrets::{CurrentWeatherQuery, SecretsTable, Units};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Filled-in header the firmware includes.
    #[arg(short, long, env = "DUALMON_CONFIG", default_value = "config.h", global = true)]
    config: PathBuf,

    /// Template shipped with the firmware.
    #[arg(short, long, default_value = "config.example.h", global = true)]
    template: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy the template to the config path.
    Init {
        /// Replace an existing config.
        #[arg(long)]
        force: bool,
    },
    /// Report placeholders and empty values left in the config.
    Check,
    /// Print every setting, secrets masked.
    Show {
        #[arg(long)]
        reveal: bool,
    },
    /// Print a single setting by name.
    Get { name: String },
    /// Write the config back out with placeholders restored.
    Templatize {
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the current-weather request URL the firmware will send.
    Query {
        #[arg(short, long, default_value_t = Units::Metric)]
        units: Units,
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        reveal: bool,
    },
    /// Write the config as a Rust constants module.
    ExportRust {
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(args: &Args) -> anyhow::Result<SecretsTable> {
    header::load(&args.config).with_context(|| {
        format!(
            "Failed to load {}; run `dualmon-secrets init` and edit it first",
            args.config.display()
        )
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("{:?}", args);

    match &args.command {
        Command::Init { force } => {
            let outcome = bootstrap::instantiate_file(&args.template, &args.config, *force)?;
            match outcome {
                Bootstrap::Created => println!(
                    "Created {} from {}. Edit it before building.",
                    args.config.display(),
                    args.template.display()
                ),
                Bootstrap::Overwritten => println!(
                    "Replaced {} with {}.",
                    args.config.display(),
                    args.template.display()
                ),
                Bootstrap::AlreadyPresent => println!(
                    "{} already exists; pass --force to replace it.",
                    args.config.display()
                ),
            }
        }
        Command::Check => {
            let table = load_config(&args)?;
            let report = lint::check(&table);
            if !report.is_clean() {
                print!("{report}");
                anyhow::bail!(
                    "{} setting(s) in {} need attention",
                    report.len(),
                    args.config.display()
                );
            }
            println!("{} is ready.", args.config.display());
        }
        Command::Show { reveal } => {
            let table = load_config(&args)?;
            if *reveal {
                for (key, value) in table.iter() {
                    println!("{:<12} {:?}", key.name(), value);
                }
            } else {
                print!("{table}");
            }
        }
        Command::Get { name } => {
            let table = load_config(&args)?;
            println!("{}", table.lookup(name)?);
        }
        Command::Templatize { output } => {
            let table = load_config(&args)?;
            let (template, bindings) = template::templatize(&table);
            header::save(output, &template)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "Wrote {} ({} value(s) replaced by placeholders).",
                output.display(),
                bindings.keys().count()
            );
        }
        Command::Query {
            units,
            endpoint,
            reveal,
        } => {
            let table = load_config(&args)?;
            for finding in &lint::check(&table) {
                warn!("{finding}");
            }
            let mut query = CurrentWeatherQuery::from_table(&table)?.with_units(*units);
            if let Some(endpoint) = endpoint {
                query = query.with_endpoint(endpoint)?;
            }
            info!("Current weather for {} in {} units", query.city(), query.units());
            let url = if *reveal {
                query.url()
            } else {
                query.redacted_url()
            };
            println!("{url}");
        }
        Command::ExportRust { output } => {
            let table = load_config(&args)?;
            for finding in &lint::check(&table) {
                warn!("{finding}");
            }
            fs::write(output, rust_consts::render(&table))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Success! Constants written to {}", output.display());
        }
    }

    Ok(())
}
