//! Document types for pipeline processing.

use crate::build::records::Record;

/// A page being processed through the pipeline.
///
/// 1. Initially: only the record and its output file name
/// 2. After render: `output_html` = the rendered page
/// 3. After write: `output_html` is taken again
#[derive(Debug)]
pub struct ProcessingDocument {
    /// The movie this page is for
    pub record: Record,

    /// File name inside the output directory
    pub file_name: String,

    /// Rendered HTML, held only between the render and write stages.
    pub output_html: Option<String>,
}

impl ProcessingDocument {
    pub fn new(record: Record) -> Self {
        let file_name = record.file_name();
        Self {
            record,
            file_name,
            output_html: None,
        }
    }
}
