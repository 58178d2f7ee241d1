//! Pipeline context for sharing state across stages.

use std::path::Path;

use crate::build::render::Renderer;

/// Shared context for pipeline stages.
pub struct PipelineContext<'a> {
    /// Directory where pages are written. Already prepared (created or
    /// cleared) before the first stage runs.
    pub output_dir: &'a Path,

    /// Page renderer holding the shared template
    pub renderer: &'a Renderer,

    /// Pages written so far in this build
    pub written: usize,
}

impl<'a> PipelineContext<'a> {
    pub fn new(output_dir: &'a Path, renderer: &'a Renderer) -> Self {
        Self {
            output_dir,
            renderer,
            written: 0,
        }
    }
}
