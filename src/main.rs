use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use areafield::cli::{CliArgs, Command, CommonArgs};
use areafield::config::{LoadedScript, ScriptConfig};
use areafield::geometry::Grid;
use areafield::output::write_json;
use areafield::runner::run_script;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();
    let common = cli.command.common();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if common.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("areafield v{}", env!("CARGO_PKG_VERSION"));

    let script = merge_script_with_args(common)?;

    match &cli.command {
        Command::Run(args) => {
            let run = run_script(&script).context("failed to run script")?;
            write_json(&run, args.output.as_deref(), !args.compact)?;
            if let Some(path) = &args.output {
                info!("Wrote {}", path.display());
            }
        }
        Command::Check(_) => {
            Grid::new(script.width, script.height).context("invalid grid")?;
            info!(
                "Script OK: {}x{} grid, {} seed value(s), {} operation(s)",
                script.width,
                script.height,
                script.areas.len(),
                script.operations.len()
            );
        }
    }

    Ok(())
}

/// Load the script and apply CLI overrides.
/// CLI arguments always take precedence over script values.
fn merge_script_with_args(args: &CommonArgs) -> Result<ScriptConfig> {
    let loaded = LoadedScript::load(&args.script)?;
    info!("Loaded {}", loaded.path.display());

    let mut script = loaded.script;
    if let Some(width) = args.width {
        script.width = width;
    }
    if let Some(height) = args.height {
        script.height = height;
    }

    Ok(script)
}
