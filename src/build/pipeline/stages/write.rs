//! File writing stage.

use crate::build::output::write_page;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that writes rendered pages to the output directory.
///
/// The rendered HTML is taken out of the document, so it is dropped as
/// soon as it is on disk. A file with the same name is overwritten.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let html = doc.output_html.take().ok_or_else(|| {
                PipelineError::stage(
                    "write",
                    format!(
                        "page '{}' has no output HTML (was render stage run?)",
                        doc.file_name
                    ),
                )
            })?;

            let path = write_page(ctx.output_dir, &doc.file_name, &html)?;
            tracing::debug!("wrote {}", path.display());

            ctx.written += 1;
        }

        Ok(())
    }
}
