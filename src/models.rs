// src/models.rs
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

/// How many trailing date components are encoded as nested directories
/// rather than in the filename.
///
/// The filename carries exactly the date information the directory nesting
/// does not already imply, so path plus filename always reconstructs the
/// full date once, never duplicated, never missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Structure {
    /// No date directories; the filename encodes `YYYY-M-D`.
    #[default]
    #[value(name = "none")]
    #[serde(rename = "none")]
    Flat,
    /// `YYYY/` directories; the filename encodes `M-D`.
    Year,
    /// `YYYY/MM/` directories; the filename encodes `D`.
    Month,
    /// `YYYY/MM/DD/` directories; the filename carries no date component.
    Day,
}

impl Structure {
    /// Number of leading path components consumed as date parts.
    #[must_use]
    pub const fn directory_depth(self) -> usize {
        match self {
            Self::Flat => 0,
            Self::Year => 1,
            Self::Month => 2,
            Self::Day => 3,
        }
    }
}

/// A single optional fragment of a generated filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilenameField {
    Date,
    Time,
    Subject,
}

/// The set of optional fragments included when building an output filename.
///
/// Fragment order in the generated name is fixed by policy (date, time,
/// identifier, type tag, subject), not by the order fields were requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilenameFields {
    pub date: bool,
    pub time: bool,
    pub subject: bool,
}

impl FilenameFields {
    #[must_use]
    pub fn from_fields(fields: &[FilenameField]) -> Self {
        Self {
            date: fields.contains(&FilenameField::Date),
            time: fields.contains(&FilenameField::Time),
            subject: fields.contains(&FilenameField::Subject),
        }
    }
}

/// Half-open date window: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    #[must_use]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }
}

/// Destination for one organized file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    pub directory: PathBuf,
    pub filename: String,
}

impl OutputLocation {
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// A callback failure recorded during a walk.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of one walk over a structured input tree.
///
/// `invoked` counts every callback invocation, whether or not the callback
/// succeeded; `succeeded` and `failures` break that down so callers can
/// distinguish absorbed callback errors from clean runs without reading logs.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub invoked: u64,
    pub succeeded: u64,
    pub skipped_undated: u64,
    pub skipped_out_of_range: u64,
    pub failures: Vec<FileFailure>,
}
