//! covhtml CLI
//!
//! Entry point for the `covhtml` command-line tool.

use clap::Parser;
use std::path::Path;
use std::process;

use covhtml::config::{CliOverrides, EffectiveConfig, FsSource, SETTINGS_FILE};
use covhtml::filter::Filter;
use covhtml::report::Report;
use covhtml::{gomod, profile};

#[derive(Parser)]
#[command(name = "covhtml")]
#[command(about = "Generate an HTML report from a Go coverage profile", version)]
struct Cli {
    /// Cover profile to read (default: coverage.out)
    #[arg(long, short = 'i')]
    input: Option<String>,

    /// Report file to write (default: coverage.html)
    #[arg(long, short = 'o')]
    output: Option<String>,

    /// Report theme: dark or light
    #[arg(long)]
    theme: Option<String>,

    /// Comma-separated paths to include in the report
    #[arg(long)]
    include: Option<String>,

    /// Comma-separated paths to exclude from the report
    #[arg(long)]
    exclude: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = CliOverrides {
        input: cli.input,
        output: cli.output,
        theme: cli.theme,
        include: cli.include,
        exclude: cli.exclude,
    };

    let config = EffectiveConfig::resolve(&FsSource, SETTINGS_FILE, &overrides)?;
    log::debug!("effective config: {config:?}");

    let profile = profile::parse_file(Path::new(&config.input))?;
    let filter = Filter::new(&config);
    let module = gomod::module_path(Path::new("."));

    Report::new(&config, module).write(&profile, &filter)?;
    println!("report written to {}", config.output);
    Ok(())
}
