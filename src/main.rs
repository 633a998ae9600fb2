// src/main.rs
use anyhow::Result;
use clap::Parser;

use dateshelf::cli::{self, Args};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    cli::run(args)
}
