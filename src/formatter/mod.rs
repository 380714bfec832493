pub mod issue_list;
pub mod issue_table;

use chrono::{DateTime, Utc};

pub use issue_list::*;
pub use issue_table::*;

/// Render failure: the output stream rejected a write.
#[derive(Debug)]
pub struct RenderError(pub std::io::Error);

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to write rendered output: {}", self.0)
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        Self(err)
    }
}

/// Escape text for interpolation into HTML.
///
/// The escape set covers both text nodes and double-quoted attribute
/// values, so the same function guards issue titles and link targets.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Whole days elapsed since the given instant
pub fn days_since(t: DateTime<Utc>) -> i64 {
    (Utc::now() - t).num_days()
}
