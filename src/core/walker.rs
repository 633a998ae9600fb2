// src/core/walker.rs
use anyhow::{Context as _, Result};
use chrono::NaiveDateTime;
use glob::Pattern;
use log::{debug, error, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::calendar::Clock;
use crate::core::codec::decode_file_date;
use crate::core::filter::resolve_range;
use crate::models::{FileFailure, RunSummary, Structure};
use crate::utils::{is_hidden, split_relative};

/// Everything a structured walk needs besides the root and the callback.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub structure: Structure,
    pub parse_time: bool,
    /// Extensions admitted by the enumeration pattern, without dots.
    pub extensions: Vec<String>,
    /// When false, the extension list is ignored and everything is admitted.
    pub filter_extensions: bool,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    /// Caps the number of candidates pulled from enumeration, counted
    /// before the date filter is applied.
    pub limit: Option<usize>,
    /// Number of callback workers; 1 means strictly sequential.
    pub concurrency: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            structure: Structure::default(),
            parse_time: false,
            extensions: Vec::new(),
            filter_extensions: true,
            start: None,
            end: None,
            limit: None,
            concurrency: 1,
        }
    }
}

/// Walks a structured input tree, decoding each file's date from its path,
/// filtering by the resolved date window, and invoking `callback` for every
/// accepted file.
///
/// Files whose paths do not decode are skipped with a warning; files outside
/// the window are skipped silently. Callback errors are caught, logged, and
/// recorded in the summary; they never abort the walk. With
/// `concurrency > 1` callbacks run on a bounded worker pool and their
/// completion order is unspecified.
///
/// # Errors
///
/// Returns an error for configuration problems (invalid extension pattern,
/// inverted date range) and for enumeration failures anywhere under the
/// root, such as an unreadable directory; per-file conditions are reflected
/// only in the summary and the log stream.
pub fn process<F>(
    root: &Path,
    options: &WalkOptions,
    clock: &dyn Clock,
    callback: F,
) -> Result<RunSummary>
where
    F: Fn(&Path, NaiveDateTime) -> Result<()> + Send + Sync,
{
    let patterns = extension_patterns(&options.extensions, options.filter_extensions)?;
    let range = resolve_range(clock, options.start, options.end)?;
    let candidates = collect_candidates(root, &patterns, options.limit)?;

    let mut summary = RunSummary::default();
    let mut accepted: Vec<(PathBuf, NaiveDateTime)> = Vec::new();
    for path in candidates {
        let Some((relative_dir, filename)) = split_relative(root, &path) else {
            continue;
        };
        match decode_file_date(&relative_dir, &filename, options.structure, options.parse_time) {
            None => {
                warn!("skipping {}: no date in path or filename", path.display());
                summary.skipped_undated += 1;
            }
            Some(date) if !range.contains(date) => {
                debug!("skipping {}: {date} outside date range", path.display());
                summary.skipped_out_of_range += 1;
            }
            Some(date) => accepted.push((path, date)),
        }
    }

    let run = |(path, date): (PathBuf, NaiveDateTime)| {
        let result = callback(&path, date);
        (path, result)
    };
    let results: Vec<(PathBuf, Result<()>)> = if options.concurrency > 1 {
        let pool = ThreadPoolBuilder::new()
            .num_threads(options.concurrency)
            .build()
            .context("failed to build walker thread pool")?;
        pool.install(|| accepted.into_par_iter().map(run).collect())
    } else {
        accepted.into_iter().map(run).collect()
    };

    for (path, result) in results {
        summary.invoked += 1;
        match result {
            Ok(()) => summary.succeeded += 1,
            Err(err) => {
                error!("callback failed for {}: {err:#}", path.display());
                summary.failures.push(FileFailure {
                    path,
                    error: format!("{err:#}"),
                });
            }
        }
    }
    Ok(summary)
}

/// Enumerates candidate files under `root`: regular files only, hidden
/// entries pruned, filenames matched against the extension patterns, capped
/// at `limit` matches.
fn collect_candidates(
    root: &Path,
    patterns: &[Pattern],
    limit: Option<usize>,
) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        if limit.is_some_and(|cap| candidates.len() >= cap) {
            break;
        }
        let entry = entry?;
        if !entry.file_type().is_file() || entry.path() == root {
            continue;
        }
        let matched = entry
            .file_name()
            .to_str()
            .is_some_and(|name| matches_any(patterns, name));
        if matched {
            candidates.push(entry.into_path());
        }
    }
    Ok(candidates)
}

/// One compiled pattern per extension; an empty list admits everything.
fn extension_patterns(extensions: &[String], enabled: bool) -> Result<Vec<Pattern>> {
    if !enabled {
        return Ok(Vec::new());
    }
    extensions
        .iter()
        .map(|ext| {
            let ext = ext.trim().trim_start_matches('.');
            let glob = format!("*.{ext}");
            Pattern::new(&glob).with_context(|| format!("invalid extension pattern: {glob}"))
        })
        .collect()
}

fn matches_any(patterns: &[Pattern], filename: &str) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| p.matches(filename))
}
