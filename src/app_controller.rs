use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::Path;

use crate::app_config::MergeConfig;
use crate::document::Document;
use crate::merge::{self, ShiftBounds};
use crate::subtitle_processor;

// @module: Application controller for subtitle merging

/// Main application controller: load, shift, merge and write
pub struct Controller {
    // @field: Merge run configuration
    config: MergeConfig,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: MergeConfig) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Load every input file in order, applying its resolved sync.
    ///
    /// A progress block naming each file and its sync is written to
    /// `progress` before the file is read, whatever the log level.
    pub fn load_documents<E: Write>(&self, progress: &mut E) -> Result<Vec<Document>> {
        let mut docs = Vec::with_capacity(self.config.inputs.len());

        for input in &self.config.inputs {
            let sync_us = input.resolved_sync(self.config.global_sync_us);

            write_progress(progress, &input.path, sync_us)
                .context("Failed to write progress")?;

            let doc = subtitle_processor::load_ass_file(&input.path)?;
            let doc = if sync_us != 0 {
                merge::shift(&doc, sync_us, ShiftBounds::BOTH).with_context(|| {
                    format!("Failed to shift subtitle file: {}", input.path.display())
                })?
            } else {
                doc
            };

            debug!("Loaded {} from {}", doc, input.path.display());
            docs.push(doc);
        }

        Ok(docs)
    }

    /// Merge already loaded documents and apply the title override
    pub fn merge_documents(&self, docs: &[Document]) -> Result<Document> {
        let mut merged = merge::merge(docs, self.config.merge_options())
            .context("Failed to merge subtitle documents")?;

        if let Some(title) = &self.config.title {
            merged.info.insert("Title", title.as_str());
        }

        info!(
            "Merged {} file(s) into {} event(s) and {} style(s)",
            docs.len(),
            merged.events.len(),
            merged.styles.len()
        );
        Ok(merged)
    }

    /// Run the whole merge, writing the result to `out` and per-file
    /// progress to `progress`
    pub fn run<W: Write, E: Write>(&self, out: &mut W, progress: &mut E) -> Result<()> {
        let docs = self.load_documents(progress)?;
        let merged = self.merge_documents(&docs)?;

        subtitle_processor::write_ass(&merged, out).context("Failed to write merged subtitles")?;
        Ok(())
    }
}

// @writes: Progress block for one input file
fn write_progress<E: Write>(progress: &mut E, path: &Path, sync_us: i64) -> std::io::Result<()> {
    writeln!(progress)?;
    writeln!(progress, "File: {}", path.display())?;
    writeln!(progress, "  Sync: {}", sync_us)?;
    writeln!(progress)?;
    progress.flush()
}
