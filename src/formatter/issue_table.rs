use std::io::Write;

use crate::types::SearchResult;

use super::{RenderError, escape_html};

/// Renders a search result as an HTML report: a heading with the total
/// match count, then a table with one row per returned issue.
///
/// The table layout is fixed at compile time, so a malformed template is a
/// build failure rather than a runtime one. The renderer is constructed
/// once at startup and reused unchanged for the life of the process. All
/// interpolated fields are escaped here, link targets included; callers
/// never make escaping decisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueTableRenderer;

impl IssueTableRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the result as an HTML heading plus table
    pub fn render(&self, result: &SearchResult, out: &mut impl Write) -> Result<(), RenderError> {
        writeln!(out, "<h1>{} issues</h1>", result.total_count)?;
        writeln!(out, "<table>")?;
        writeln!(out, "  <tr style=\"text-align: left\">")?;
        writeln!(out, "    <th>#</th>")?;
        writeln!(out, "    <th>State</th>")?;
        writeln!(out, "    <th>User</th>")?;
        writeln!(out, "    <th>Title</th>")?;
        writeln!(out, "  </tr>")?;

        for issue in &result.items {
            let issue_href = escape_html(issue.url.as_str());
            writeln!(out, "  <tr>")?;
            writeln!(
                out,
                "    <td><a href=\"{}\">{}</a></td>",
                issue_href, issue.number
            )?;
            writeln!(out, "    <td>{}</td>", issue.state)?;
            writeln!(
                out,
                "    <td><a href=\"{}\">{}</a></td>",
                escape_html(&issue.user.profile_url),
                escape_html(&issue.user.login)
            )?;
            writeln!(
                out,
                "    <td><a href=\"{}\">{}</a></td>",
                issue_href,
                escape_html(&issue.title)
            )?;
            writeln!(out, "  </tr>")?;
        }

        writeln!(out, "</table>")?;
        Ok(())
    }
}
