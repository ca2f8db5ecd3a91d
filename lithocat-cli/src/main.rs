//! Lithology catalogue inspector and editor.
//!
//! Usage:
//!   lithocat --catalogue Lithologies.xml lithologies
//!   lithocat --catalogue Lithologies.xml set Shale1 Porosity=0.4

use anyhow::Result;
use clap::Parser;
use lithocat_cli::{Cli, execute};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let output = execute(&cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
