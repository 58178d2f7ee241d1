use std::path::{Path, PathBuf};

use super::records::{FIELD_COUNT, Record};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("failed to read template {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Placeholder tokens, indexed like `Record::fields`:
/// id, title, year, director, genre.
pub const PLACEHOLDERS: [&str; FIELD_COUNT] = ["%%1%%", "%%2%%", "%%3%%", "%%4%%", "%%5%%"];

/// The page renderer, wrapping the shared template text.
///
/// Rendering is literal token substitution. There are no conditionals,
/// loops or includes, and values are inserted verbatim unless HTML
/// escaping is switched on.
#[derive(Debug, Clone)]
pub struct Renderer {
    template: String,
    escape_html: bool,
}

impl Renderer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            escape_html: false,
        }
    }

    /// Load the template from a file.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        if !path.exists() {
            return Err(RenderError::TemplateNotFound(path.to_path_buf()));
        }

        let template = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(template))
    }

    /// Escape `& < > " '` in field values before inserting them.
    pub fn with_escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    /// Tokens that never occur in the template.
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDERS
            .into_iter()
            .filter(|token| !self.template.contains(token))
            .collect()
    }

    /// Render a page for one record.
    ///
    /// The template is scanned once, left to right. Inserted values are
    /// never rescanned, so a value that contains a token is kept as-is and
    /// the result does not depend on substitution order.
    pub fn render(&self, record: &Record) -> String {
        let fields = record.fields();
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("%%") {
            let candidate = &rest[start..];
            match PLACEHOLDERS.iter().position(|token| candidate.starts_with(token)) {
                Some(index) => {
                    out.push_str(&rest[..start]);
                    self.push_value(&mut out, fields[index]);
                    rest = &candidate[PLACEHOLDERS[index].len()..];
                }
                None => {
                    // Not a token; step past one '%' so "%%%1%%" still matches.
                    out.push_str(&rest[..=start]);
                    rest = &rest[start + 1..];
                }
            }
        }
        out.push_str(rest);

        out
    }

    fn push_value(&self, out: &mut String, value: &str) {
        if self.escape_html {
            push_escaped(out, value);
        } else {
            out.push_str(value);
        }
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
