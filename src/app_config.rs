use anyhow::{anyhow, Result};
use log::LevelFilter;
use std::default::Default;
use std::path::PathBuf;

use crate::merge::MergeOptions;

/// Application configuration module
/// This module holds the settings of a single merge run, as assembled from
/// the command line.
/// Represents the configuration of one merge run
#[derive(Debug, Clone, PartialEq)]
pub struct MergeConfig {
    /// Files to merge, in command-line order
    pub inputs: Vec<InputFile>,

    /// Replace style names with per-file digests
    pub rename_styles: bool,

    /// Title to set on the merged document
    pub title: Option<String>,

    /// Sync applied to files without their own, in microseconds
    pub global_sync_us: i64,

    /// Log level
    pub log_level: LogLevel,
}

/// A subtitle file to merge
#[derive(Debug, Clone, PartialEq)]
pub struct InputFile {
    // @field: Path as given on the command line
    pub path: PathBuf,

    // @field: Sync from `-s`, overriding the global sync
    pub sync_us: Option<i64>,
}

impl InputFile {
    // @creates: Input using the global sync
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            sync_us: None,
        }
    }

    // @creates: Input with its own sync
    pub fn with_sync<P: Into<PathBuf>>(path: P, sync_us: i64) -> Self {
        Self {
            path: path.into(),
            sync_us: Some(sync_us),
        }
    }

    // @returns: Sync to apply to this file
    pub fn resolved_sync(&self, global_sync_us: i64) -> i64 {
        self.sync_us.unwrap_or(global_sync_us)
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log crate
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl MergeConfig {
    // @returns: Options for the merge engine
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            rename_styles: self.rename_styles,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(anyhow!("At least one input file is required"));
        }

        if let Some(input) = self.inputs.iter().find(|i| i.path.as_os_str().is_empty()) {
            return Err(anyhow!("Input file name is empty: {:?}", input));
        }

        Ok(())
    }
}

/// Default implementation for MergeConfig
impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            rename_styles: false,
            title: None,
            global_sync_us: 0,
            log_level: LogLevel::default(),
        }
    }
}
