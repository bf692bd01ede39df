mod cli;
mod color;
mod data;
mod render;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let spec = args.plot_spec()?;
    render::render(&spec)
}
