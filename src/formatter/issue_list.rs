use std::io::Write;

use crate::types::SearchResult;

use super::{RenderError, days_since};

/// Maximum number of characters of a title shown in the plain-text report
const MAX_TITLE_LENGTH: usize = 64;

const SEPARATOR: &str = "-------------------------------------------------------------------";

/// Renders a search result as a compact plain-text report, one block per
/// issue with its number, author, truncated title, and age in days.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueListRenderer;

impl IssueListRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the result as a plain-text listing
    pub fn render(&self, result: &SearchResult, out: &mut impl Write) -> Result<(), RenderError> {
        writeln!(out, "{} issues:", result.total_count)?;

        for issue in &result.items {
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "Number: {}", issue.number)?;
            writeln!(out, "User: {}", issue.user.login)?;
            writeln!(out, "Title: {}", truncate_title(&issue.title))?;
            writeln!(out, "Age: {} days", days_since(issue.created_at))?;
        }
        Ok(())
    }
}

/// Truncate a title to MAX_TITLE_LENGTH characters
fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_LENGTH {
        title.chars().take(MAX_TITLE_LENGTH).collect()
    } else {
        title.to_string()
    }
}
