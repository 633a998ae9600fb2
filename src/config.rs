// src/config.rs
use anyhow::{bail, Context as _, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::parse_bound;
use crate::core::output::OutputPolicy;
use crate::core::walker::WalkOptions;
use crate::models::{FilenameFields, Structure};

/// A full processing run, as the host configures it.
///
/// Loadable from a TOML file; the CLI builds the same record from flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root of the date-structured input tree.
    pub input_root: PathBuf,
    /// Root for organized copies; when unset the run is plan-only.
    pub output_root: Option<PathBuf>,
    /// Directory layout of the input tree.
    pub structure: Structure,
    /// Directory layout of the output tree; defaults to `structure`.
    pub output_structure: Option<Structure>,
    /// Whether filenames carry a trailing `HHmm` token.
    pub parse_time: bool,
    /// Optional fragments of generated filenames.
    pub fields: FilenameFields,
    /// Extensions admitted during enumeration, without dots.
    pub extensions: Vec<String>,
    /// When false, every file is a candidate regardless of extension.
    pub filter_extensions: bool,
    /// Inclusive window start, `YYYY-MM-DD[THH:MM]`.
    pub start: Option<String>,
    /// Exclusive window end, `YYYY-MM-DD[THH:MM]`.
    pub end: Option<String>,
    /// Maximum number of candidates pulled from enumeration.
    pub limit: Option<usize>,
    /// Callback workers; 1 is strictly sequential.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("."),
            output_root: None,
            structure: Structure::default(),
            output_structure: None,
            parse_time: false,
            fields: FilenameFields::default(),
            extensions: Vec::new(),
            filter_extensions: true,
            start: None,
            end: None,
            limit: None,
            concurrency: 1,
        }
    }
}

impl Config {
    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid TOML
    /// for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Checks the record as a whole before any filesystem work starts.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field for: an unreadable
    /// start/end bound, a zero concurrency, or a `date` filename field
    /// combined with a `day` output structure.
    pub fn validate(&self) -> Result<()> {
        if let Some(start) = &self.start {
            parse_bound(start).with_context(|| format!("--start {start}"))?;
        }
        if let Some(end) = &self.end {
            parse_bound(end).with_context(|| format!("--end {end}"))?;
        }
        if self.concurrency == 0 {
            bail!("--concurrency must be at least 1");
        }
        if let Some(policy) = self.output_policy() {
            policy.validate()?;
        } else if self.fields.date && self.output_structure() == Structure::Day {
            bail!(
                "filename field 'date' cannot be combined with structure 'day': \
                 the directory path already encodes the full date"
            );
        }
        Ok(())
    }

    /// The layout organized copies are written in.
    #[must_use]
    pub fn output_structure(&self) -> Structure {
        self.output_structure.unwrap_or(self.structure)
    }

    /// Output policy for this run, when an output root is configured.
    #[must_use]
    pub fn output_policy(&self) -> Option<OutputPolicy> {
        self.output_root.as_ref().map(|root| OutputPolicy {
            root: root.clone(),
            structure: self.output_structure(),
            fields: self.fields,
        })
    }

    /// Walk options for this run.
    ///
    /// # Errors
    ///
    /// Returns an error when a bound string does not parse; `validate`
    /// reports the same failure with the flag name attached.
    pub fn walk_options(&self) -> Result<WalkOptions> {
        Ok(WalkOptions {
            structure: self.structure,
            parse_time: self.parse_time,
            extensions: self.extensions.clone(),
            filter_extensions: self.filter_extensions,
            start: self.parsed_bound(self.start.as_deref())?,
            end: self.parsed_bound(self.end.as_deref())?,
            limit: self.limit,
            concurrency: self.concurrency.max(1),
        })
    }

    fn parsed_bound(&self, value: Option<&str>) -> Result<Option<NaiveDateTime>> {
        value.map(parse_bound).transpose()
    }
}
