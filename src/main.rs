//! frd CLI - dump a 3DS friend service `mydata` file.
//!
//! With no arguments it reads `mydata` from the current directory and prints
//! every decoded field.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};

use frd::prelude::*;

/// frd - 3DS friend data dump tool
#[derive(Parser)]
#[command(name = "frd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the mydata file
    #[arg(env = "FRD_INPUT", default_value = "mydata")]
    input: PathBuf,

    /// Print the dump as JSON instead of key/value lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data = MyData::from_file(&cli.input)
        .with_context(|| format!("Failed to open file {}", cli.input.display()))?;

    let dump = Dump::from_my_data(&data);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print!("{}", dump);
    }

    Ok(())
}

/// Log to stderr so the dump on stdout stays clean. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();
}
