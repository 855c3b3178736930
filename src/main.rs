use anyhow::{Context, Result};
use averager::{
    Summary,
    input::{Input, check_numbers},
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Numbers to average.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,

    /// TOML file with a `numbers` array, appended after the positional values.
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    check_numbers(&args.values).context("invalid positional values")?;
    let mut numbers = args.values;
    if let Some(file) = &args.input {
        let input = Input::from_file(file).context("failed to load input")?;
        log::info!("loaded {file:?}");
        numbers.extend(input.numbers);
    }
    log::info!("collected {} values", numbers.len());

    let summary = Summary::from_values(&numbers).context("failed to compute average")?;

    match args.format {
        Format::Text => println!("{}", summary.mean),
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
            println!("{json}");
        }
    }

    Ok(())
}
