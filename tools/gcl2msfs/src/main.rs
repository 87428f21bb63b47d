use clap::Parser;
use gcl_core::{convert_file, ConvertOptions, SpacerMode};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "gcl2msfs",
    version,
    about = "Convert Garmin checklist JSON to Avionics Framework XML checklist."
)]
struct Cli {
    /// Path to the input JSON file.
    json_file: PathBuf,

    /// Path to the output XML file.
    xml_file: PathBuf,

    /// Put each branch entry's spacer inside its branch instead of the legacy placement
    #[arg(long)]
    per_entry_spacers: bool,

    /// Do not fail when two lists derive the same uid
    #[arg(long)]
    allow_uid_collisions: bool,

    /// Print conversion counts as JSON
    #[arg(long)]
    summary: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ConvertOptions {
        spacer_mode: if cli.per_entry_spacers {
            SpacerMode::PerEntry
        } else {
            SpacerMode::Legacy
        },
        detect_uid_collisions: !cli.allow_uid_collisions,
    };

    match convert_file(&cli.json_file, &cli.xml_file, &options) {
        Ok(summary) => {
            println!(
                "Checklist conversion complete. XML file created at '{}'",
                cli.xml_file.display()
            );
            if cli.summary {
                match serde_json::to_string_pretty(&summary) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("error: {}", e);
                        process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
