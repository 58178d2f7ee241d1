//! Movie record loading.
//!
//! Records come from a plain comma-separated file with no header row and no
//! quoting: every comma is a separator, so a title containing a comma makes
//! its line malformed. Lines with a field count other than five are skipped
//! with a warning and never fail the load.

use std::path::{Path, PathBuf};

/// Number of fields in a well-formed line.
pub const FIELD_COUNT: usize = 5;

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read CSV file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One movie. All fields stay text; nothing is coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub year: String,
    pub director: String,
    pub genre: String,
}

impl Record {
    /// Split a line on commas. Returns the field count on mismatch.
    ///
    /// Trailing empty fields are dropped before counting, so
    /// `1,Up,2009,Docter,` has four fields and `1,Up,2009,Docter,Family,`
    /// has five.
    pub fn from_line(line: &str) -> Result<Self, usize> {
        let mut fields: Vec<&str> = line.split(',').collect();
        while fields.last() == Some(&"") {
            fields.pop();
        }
        match fields.as_slice() {
            [id, title, year, director, genre] => Ok(Self {
                id: id.to_string(),
                title: title.to_string(),
                year: year.to_string(),
                director: director.to_string(),
                genre: genre.to_string(),
            }),
            _ => Err(fields.len()),
        }
    }

    /// Fields in column order: id, title, year, director, genre.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.id,
            &self.title,
            &self.year,
            &self.director,
            &self.genre,
        ]
    }

    /// Output file name: `{title with spaces as underscores} - {id}.html`.
    ///
    /// Nothing else is sanitized, so a title containing `/` or other
    /// characters the filesystem rejects produces an unusable name.
    pub fn file_name(&self) -> String {
        format!("{} - {}.html", self.title.replace(' ', "_"), self.id)
    }
}

/// A line dropped during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line_number: usize,
    /// How many fields the line split into
    pub field_count: usize,
    pub text: String,
}

/// Result of loading a CSV file.
#[derive(Debug, Default)]
pub struct LoadedRecords {
    /// Valid records, in input order
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedLine>,
}

/// Load records from a CSV file.
pub fn load_records(path: &Path) -> Result<LoadedRecords, RecordError> {
    if !path.exists() {
        return Err(RecordError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_records(&String::from_utf8_lossy(&bytes)))
}

/// Parse CSV text into records, skipping malformed lines.
pub fn parse_records(content: &str) -> LoadedRecords {
    let mut loaded = LoadedRecords::default();

    for (index, line) in split_lines(content).enumerate() {
        if line.is_empty() {
            continue;
        }

        match Record::from_line(line) {
            Ok(record) => loaded.records.push(record),
            Err(field_count) => {
                let line_number = index + 1;
                tracing::warn!(
                    line_number,
                    fields = field_count,
                    "skipping malformed line (expected {FIELD_COUNT} fields): {line}"
                );
                loaded.skipped.push(SkippedLine {
                    line_number,
                    field_count,
                    text: line.to_string(),
                });
            }
        }
    }

    loaded
}

/// Split text into lines terminated by `\n`, `\r\n` or a lone `\r`.
///
/// A trailing terminator does not produce an extra empty line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
