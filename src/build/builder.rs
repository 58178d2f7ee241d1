use std::path::PathBuf;

use crate::config::Config;

use super::output::{OutputError, prepare_output_dir};
use super::pipeline::{Pipeline, PipelineContext, PipelineError, ProcessingDocument};
use super::records::{RecordError, SkippedLine, load_records};
use super::render::{RenderError, Renderer};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Records(#[from] RecordError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

pub struct BuildResult {
    pub output_dir: PathBuf,
    /// Pages written
    pub pages: usize,
    /// CSV lines dropped for having the wrong field count
    pub skipped: Vec<SkippedLine>,
    /// Stale entries removed from the output directory
    pub removed: usize,
}

pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn build(&self) -> Result<BuildResult, BuildError> {
        // Build pipeline:
        // 1. Load records (missing CSV aborts before anything is touched)
        // 2. Load template
        // 3. Create or clear the output directory
        // 4. Render and write each record, in input order

        // Step 1: Records
        let csv_path = &self.config.input.csv;
        let loaded = load_records(csv_path)?;
        tracing::info!(
            "loaded {} record(s) from {} ({} skipped)",
            loaded.records.len(),
            csv_path.display(),
            loaded.skipped.len()
        );

        // Step 2: Template
        let template_path = &self.config.input.template;
        let renderer =
            Renderer::load(template_path)?.with_escape_html(self.config.render.escape_html);
        tracing::info!("found template at {}", template_path.display());
        for token in renderer.missing_placeholders() {
            tracing::warn!("template {} never uses {token}", template_path.display());
        }

        // Step 3: Output directory. Must finish before the first write.
        let output_dir = self.config.output.dir.clone();
        let removed = prepare_output_dir(&output_dir)?;
        tracing::info!(
            "prepared output directory {} ({} stale entries removed)",
            output_dir.display(),
            removed
        );

        // Step 4: One pipeline run per record
        let pipeline = Pipeline::default_pipeline();
        tracing::debug!("pipeline stages: {}", pipeline.stage_names().join(" -> "));
        let mut ctx = PipelineContext::new(&output_dir, &renderer);
        for record in loaded.records {
            let mut docs = [ProcessingDocument::new(record)];
            pipeline.run(&mut docs, &mut ctx)?;
        }

        Ok(BuildResult {
            pages: ctx.written,
            output_dir,
            skipped: loaded.skipped,
            removed,
        })
    }
}
