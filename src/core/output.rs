// src/core/output.rs
use anyhow::{bail, Context as _, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::codec::date_fragment;
use crate::models::{FilenameFields, OutputLocation, Structure};

/// Placeholder used when a requested subject sanitizes down to nothing.
const EMPTY_SUBJECT: &str = "untitled";

/// Where and how organized copies are named.
#[derive(Debug, Clone)]
pub struct OutputPolicy {
    pub root: PathBuf,
    pub structure: Structure,
    pub fields: FilenameFields,
}

impl OutputPolicy {
    /// Checks the policy once, up front, so per-file construction cannot hit
    /// a configuration error mid-walk.
    ///
    /// # Errors
    ///
    /// Returns an error when the output root is unset, or when the `date`
    /// filename field is requested under the `day` structure (the directory
    /// path already carries the full date).
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            bail!("output root is not set; pass --output or set output_root in the config file");
        }
        if self.fields.date && self.structure == Structure::Day {
            bail!(
                "filename field 'date' cannot be combined with structure 'day': \
                 the directory path already encodes the full date"
            );
        }
        Ok(())
    }

    /// Builds (and creates, idempotently) the destination directory for a
    /// date: `root`, `root/YYYY`, `root/YYYY/MM`, or `root/YYYY/MM/DD`
    /// depending on the structure.
    ///
    /// # Errors
    ///
    /// Returns an error when the policy is invalid or the directory cannot
    /// be created.
    pub fn output_directory(&self, date: NaiveDate) -> Result<PathBuf> {
        self.validate()?;
        let mut dir = self.root.clone();
        if self.structure.directory_depth() >= 1 {
            dir.push(date.format("%Y").to_string());
        }
        if self.structure.directory_depth() >= 2 {
            dir.push(date.format("%m").to_string());
        }
        if self.structure.directory_depth() >= 3 {
            dir.push(date.format("%d").to_string());
        }
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        Ok(dir)
    }

    /// Assembles an output filename from its fragments, in fixed order:
    /// date, time, identifier, type tag, subject, joined with `-`. The
    /// identifier and type tag are always present; the rest follow the
    /// configured field set.
    ///
    /// # Errors
    ///
    /// Returns an error when a date fragment is requested under the `day`
    /// structure.
    pub fn build_filename(
        &self,
        date: NaiveDateTime,
        type_tag: &str,
        identifier: &str,
        subject: Option<&str>,
    ) -> Result<String> {
        let mut parts = Vec::new();
        if self.fields.date {
            parts.push(date_fragment(date.date(), self.structure)?);
        }
        if self.fields.time {
            parts.push(date.format("%H%M").to_string());
        }
        parts.push(identifier.to_string());
        parts.push(type_tag.to_string());
        if self.fields.subject {
            parts.push(sanitize_subject(subject.unwrap_or_default()));
        }
        Ok(parts.join("-"))
    }

    /// Computes the full destination for one file, creating its directory.
    ///
    /// # Errors
    ///
    /// Propagates directory-creation and policy errors.
    pub fn locate(
        &self,
        date: NaiveDateTime,
        type_tag: &str,
        identifier: &str,
        subject: Option<&str>,
    ) -> Result<OutputLocation> {
        let directory = self.output_directory(date.date())?;
        let filename = self.build_filename(date, type_tag, identifier, subject)?;
        Ok(OutputLocation { directory, filename })
    }
}

/// Reduces a free-form subject to a filename-safe fragment: anything outside
/// `[A-Za-z0-9._-]` becomes `_`, runs of `_` collapse to one, leading and
/// trailing `_` are trimmed, and an empty result becomes `untitled`.
#[must_use]
pub fn sanitize_subject(subject: &str) -> String {
    let mut out = String::with_capacity(subject.len());
    let mut previous_underscore = false;
    for c in subject.chars() {
        let mapped = if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            c
        } else {
            '_'
        };
        if mapped == '_' {
            if previous_underscore {
                continue;
            }
            previous_underscore = true;
        } else {
            previous_underscore = false;
        }
        out.push(mapped);
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        EMPTY_SUBJECT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Derives a filename-safe identifier and a type tag from a source path,
/// for hosts that key output names off the original file.
#[must_use]
pub fn identifier_for(path: &Path) -> (String, String) {
    let identifier = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map_or_else(|| EMPTY_SUBJECT.to_string(), sanitize_subject);
    let type_tag = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("file")
        .to_ascii_lowercase();
    (identifier, type_tag)
}
