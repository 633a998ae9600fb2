// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::calendar::SystemClock;
use crate::config::Config;
use crate::core::output::identifier_for;
use crate::core::walker::process;
use crate::models::{FilenameField, FilenameFields, RunSummary, Structure};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root of the date-structured input tree [default: .]
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Root for organized copies; omit for a plan-only listing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input directory layout: none, year, month or day [default: none]
    #[arg(short, long, value_enum)]
    pub structure: Option<Structure>,

    /// Output directory layout (defaults to the input layout)
    #[arg(long, value_enum)]
    pub output_structure: Option<Structure>,

    /// Expect a trailing HHmm time token in filenames
    #[arg(short = 't', long)]
    pub parse_time: bool,

    /// Optional filename fragments: date, time, subject (repeatable)
    #[arg(short = 'F', long = "field", value_enum)]
    pub fields: Vec<FilenameField>,

    /// Extensions to consider, comma-separated (e.g. "eml,txt")
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Consider every file regardless of extension
    #[arg(long)]
    pub all_extensions: bool,

    /// Only files dated on or after this bound (YYYY-MM-DD[THH:MM])
    #[arg(long)]
    pub start: Option<String>,

    /// Only files dated strictly before this bound (YYYY-MM-DD[THH:MM])
    #[arg(long)]
    pub end: Option<String>,

    /// Stop after this many candidate files
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Number of files processed in flight at once [default: 1]
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Read defaults from a TOML config file (flags still win)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Copy files to their destinations instead of printing the plan
    #[arg(long)]
    pub apply: bool,
}

impl Args {
    /// Folds an optional config file and the command line into one record;
    /// any flag present on the command line overrides the file, even when
    /// its value happens to equal the built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error when the config file cannot be loaded.
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(directory) = self.directory {
            config.input_root = directory;
        }
        if self.output.is_some() {
            config.output_root = self.output;
        }
        if let Some(structure) = self.structure {
            config.structure = structure;
        }
        if self.output_structure.is_some() {
            config.output_structure = self.output_structure;
        }
        if self.parse_time {
            config.parse_time = true;
        }
        if !self.fields.is_empty() {
            config.fields = FilenameFields::from_fields(&self.fields);
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions;
        }
        if self.all_extensions {
            config.filter_extensions = false;
        }
        if self.start.is_some() {
            config.start = self.start;
        }
        if self.end.is_some() {
            config.end = self.end;
        }
        if self.limit.is_some() {
            config.limit = self.limit;
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        Ok(config)
    }
}

/// Runs one organizing pass with the configured options.
///
/// # Errors
///
/// Returns configuration and enumeration errors; per-file conditions are
/// absorbed into the printed summary.
pub fn run(args: Args) -> Result<()> {
    let apply = args.apply;
    let config = args.into_config()?;
    config.validate()?;

    let options = config.walk_options()?;
    let policy = config.output_policy();
    let clock = SystemClock;

    let summary = process(&config.input_root, &options, &clock, |path, date| {
        let Some(policy) = &policy else {
            println!("{}  {}", date.format("%Y-%m-%d %H:%M"), path.display());
            return Ok(());
        };
        let (identifier, type_tag) = identifier_for(path);
        let subject = path.file_stem().and_then(|s| s.to_str());
        let location = policy.locate(date, &type_tag, &identifier, subject)?;
        let destination = location.full_path();
        if apply {
            fs::copy(path, &destination).with_context(|| {
                format!("failed to copy {} to {}", path.display(), destination.display())
            })?;
            println!("copied {} -> {}", path.display(), destination.display());
        } else {
            println!("{} -> {}", path.display(), destination.display());
        }
        Ok(())
    })?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!(
        "{} processed ({} ok, {} failed), {} without dates, {} outside range",
        summary.invoked,
        summary.succeeded,
        summary.failures.len(),
        summary.skipped_undated,
        summary.skipped_out_of_range,
    );
    for failure in &summary.failures {
        eprintln!("failed: {}: {}", failure.path.display(), failure.error);
    }
}
