//! Default pipeline stages.
//!
//! 1. **RenderStage** - Substitute record fields into the page template
//! 2. **WriteStage** - Write the page to the output directory

mod render;
mod write;

pub use render::RenderStage;
pub use write::WriteStage;
