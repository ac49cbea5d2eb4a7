use anyhow::Result;
use clap::Parser;
use log::debug;

mod cli;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    debug!("starting showreel");

    match cli.command {
        Command::Slideshow(args) => cli::run_slideshow(args),
        Command::Timeline(args) => cli::run_timeline(args),
    }
}
