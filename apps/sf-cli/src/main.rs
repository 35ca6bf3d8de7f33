use clap::{Parser, Subcommand};
use sf_core::units::as_fraction;
use sf_devices::Device;
use sf_project::{Scenario, build};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

mod error;
mod selfcheck;

use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "SepFlow CLI - stream and separation column demonstrator", long_about = None)]
struct Cli {
    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in two-feed column scenario and print every stream
    Demo {
        /// Override the column split ratio (0..=1)
        #[arg(long)]
        split_ratio: Option<f64>,
    },
    /// Run the self-check scenarios and print a pass/fail summary
    Check,
    /// Run a scenario file (YAML, or JSON by extension)
    Run {
        /// Path to the scenario file
        scenario_path: PathBuf,
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate scenario file syntax and references
    Validate {
        /// Path to the scenario file
        scenario_path: PathBuf,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Demo { split_ratio }) => cmd_demo(split_ratio),
        Some(Commands::Check) => cmd_check(),
        Some(Commands::Run {
            scenario_path,
            json,
        }) => cmd_run(&scenario_path, json),
        Some(Commands::Validate { scenario_path }) => cmd_validate(&scenario_path),
        None => cmd_demo(None).and_then(|()| {
            println!("\nRunning self-check...\n");
            cmd_check()
        }),
    };

    if let Err(e) = &result {
        error!(error = %e, "command failed");
    }
    result
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn cmd_demo(split_ratio: Option<f64>) -> CliResult<()> {
    let mut scenario = Scenario::demo();
    if let Some(ratio) = split_ratio {
        for column in &mut scenario.columns {
            column.split_ratio = Some(ratio);
        }
    }
    info!(scenario = %scenario.name, ?split_ratio, "running demo");

    let mut built = build(&scenario)?;
    built.update_all()?;

    for id in built.column_ids() {
        let column = built.column(id)?;
        println!(
            "Column {} (split ratio {})",
            column.name(),
            as_fraction(column.split_ratio())
        );
    }
    for (_, stream) in built.streams().iter() {
        println!("{}", stream.describe());
    }
    Ok(())
}

fn cmd_check() -> CliResult<()> {
    info!("running self-check");
    let summary = selfcheck::run_all();
    summary.write_to(&mut io::stdout().lock())?;

    if summary.all_passed() {
        Ok(())
    } else {
        Err(CliError::SelfCheckFailed {
            failed: summary.failed(),
            total: summary.total(),
        })
    }
}

fn cmd_run(scenario_path: &Path, json: bool) -> CliResult<()> {
    info!(path = %scenario_path.display(), "running scenario");
    let scenario = sf_project::load(scenario_path)?;
    let report = sf_project::run(&scenario)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Scenario: {}", report.name);
        for stream in &report.streams {
            println!(
                "  {:<12} {:<20} {:>12.6} kg/s",
                stream.id, stream.name, stream.mass_flow_kgps
            );
        }
    }
    Ok(())
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    info!(path = %scenario_path.display(), "validating scenario");
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = sf_project::load(scenario_path)?;
    println!(
        "✓ Scenario is valid ({} streams, {} columns)",
        scenario.streams.len(),
        scenario.columns.len()
    );
    Ok(())
}
