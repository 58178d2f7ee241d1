//! Page pipeline.
//!
//! Each record is turned into a page through a series of stages:
//! 1. Render (template substitution)
//! 2. Write (output to disk)
//!
//! The builder runs the pipeline once per record, in input order, so a
//! rendered page only lives until it has been written.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::ProcessingDocument;
pub use error::PipelineError;

use stages::{RenderStage, WriteStage};

/// A stage in the page pipeline.
///
/// Stages transform documents sequentially. Each stage receives the
/// documents of one run and can modify them in place before passing them
/// to the next stage.
pub trait Stage: Send + Sync {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Process documents through this stage.
    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// The page pipeline.
///
/// The default pipeline is: render → write.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default pipeline with standard stages.
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(RenderStage);
        pipeline.add_stage(WriteStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run the pipeline on a set of documents. Stops at the first failing stage.
    pub fn run(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            stage.process(docs, ctx)?;
        }

        Ok(())
    }

    /// Get the names of all stages in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::records::Record;
    use crate::build::render::Renderer;

    #[test]
    fn test_default_stage_order() {
        assert_eq!(Pipeline::default().stage_names(), vec!["render", "write"]);
    }

    #[test]
    fn test_run_renders_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::new("<h1>%%2%%</h1>");
        let mut ctx = PipelineContext::new(dir.path(), &renderer);

        let record = Record::from_line("3,Blade Runner,1982,Scott,SciFi").unwrap();
        let mut docs = [ProcessingDocument::new(record)];
        Pipeline::default().run(&mut docs, &mut ctx).unwrap();

        let path = dir.path().join("Blade_Runner - 3.html");
        assert!(docs[0].output_html.is_none());
        assert_eq!(ctx.written, 1);
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "<h1>Blade Runner</h1>"
        );
    }

    #[test]
    fn test_write_without_render_fails() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::new("");
        let mut ctx = PipelineContext::new(dir.path(), &renderer);

        let mut pipeline = Pipeline::new();
        pipeline.add_stage(WriteStage);

        let record = Record::from_line("1,A,2000,B,C").unwrap();
        let mut docs = [ProcessingDocument::new(record)];
        let err = pipeline.run(&mut docs, &mut ctx).unwrap_err();

        assert!(matches!(err, PipelineError::Stage { ref stage, .. } if stage == "write"));
        assert_eq!(ctx.written, 0);
    }
}
