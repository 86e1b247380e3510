//! vk-tool
//!
//! Command-line interface for PLONK verification keys and block data.

use anyhow::Context;
use clap::Parser;
use vk_cli::commands::{run, Cli};

fn main() {
    vk_cli::logging::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let name = cli.command.name();
    let output = run(cli).with_context(|| format!("{} failed", name))?;
    println!("{}", output);
    Ok(())
}
