//! Integration tests for the HTML and plain-text renderers
//!
//! These tests render in-memory search results into a buffer and assert on
//! the produced markup: heading, row structure, link targets, and escaping.

use chrono::{Duration, Utc};

use issue_insight::formatter::{IssueListRenderer, IssueTableRenderer};
use issue_insight::types::{Issue, IssueNumber, IssueState, IssueUrl, SearchResult, User};

fn sample_issue(number: u64, title: &str, state: IssueState) -> Issue {
    Issue {
        number: IssueNumber::new(number),
        url: IssueUrl(format!("https://github.com/acme/widget/issues/{}", number)),
        title: title.to_string(),
        state,
        user: User::new(
            "alice".to_string(),
            "https://github.com/alice".to_string(),
        ),
        created_at: Utc::now() - Duration::days(3),
        body: Some("Reproduced on the latest release.".to_string()),
    }
}

fn render_html(result: &SearchResult) -> String {
    let mut buf = Vec::new();
    IssueTableRenderer::new()
        .render(result, &mut buf)
        .expect("Rendering into a buffer should succeed");
    String::from_utf8(buf).expect("Rendered HTML should be valid UTF-8")
}

fn render_text(result: &SearchResult) -> String {
    let mut buf = Vec::new();
    IssueListRenderer::new()
        .render(result, &mut buf)
        .expect("Rendering into a buffer should succeed");
    String::from_utf8(buf).expect("Rendered text should be valid UTF-8")
}

#[test]
fn test_render_empty_result() {
    let result = SearchResult {
        total_count: 0,
        items: vec![],
    };

    let html = render_html(&result);

    assert!(
        html.contains("<h1>0 issues</h1>"),
        "Heading must show the zero count: {}",
        html
    );
    // Only the header row may be present.
    assert_eq!(
        html.matches("<tr").count(),
        1,
        "Empty result must render no rows beyond the header: {}",
        html
    );
}

#[test]
fn test_render_heading_uses_total_count() {
    // total_count counts all matches, not just the returned page.
    let result = SearchResult {
        total_count: 1200,
        items: vec![sample_issue(1, "One of many", IssueState::Open)],
    };

    let html = render_html(&result);
    assert!(html.contains("<h1>1200 issues</h1>"));
    assert_eq!(html.matches("<tr").count(), 2);
}

#[test]
fn test_render_row_fields_and_links() {
    let result = SearchResult {
        total_count: 2,
        items: vec![
            sample_issue(42, "Widget crashes on resize", IssueState::Open),
            sample_issue(7, "Feature request: dark mode", IssueState::Closed),
        ],
    };

    let html = render_html(&result);

    // Number and title cells link to the issue page.
    assert!(html.contains("<a href=\"https://github.com/acme/widget/issues/42\">42</a>"));
    assert!(html.contains(
        "<a href=\"https://github.com/acme/widget/issues/42\">Widget crashes on resize</a>"
    ));
    // Author cell links to the profile page.
    assert!(html.contains("<a href=\"https://github.com/alice\">alice</a>"));
    // State is rendered in its wire spelling.
    assert!(html.contains("<td>open</td>"));
    assert!(html.contains("<td>closed</td>"));
}

#[test]
fn test_render_escapes_title_markup() {
    let result = SearchResult {
        total_count: 1,
        items: vec![sample_issue(
            3,
            "Broken <input> & \"select\" tags",
            IssueState::Open,
        )],
    };

    let html = render_html(&result);

    assert!(
        html.contains("Broken &lt;input&gt; &amp; &quot;select&quot; tags"),
        "Title markup must be escaped: {}",
        html
    );
    assert!(
        !html.contains("<input>"),
        "Raw title markup must never reach the output: {}",
        html
    );
}

#[test]
fn test_render_escapes_link_targets() {
    let mut issue = sample_issue(9, "Escapes in URLs", IssueState::Open);
    issue.url = IssueUrl("https://github.com/acme/widget/issues/9?a=\"b\"&c=d".to_string());
    issue.user.profile_url = "https://github.com/alice?tab=\"repos\"".to_string();

    let result = SearchResult {
        total_count: 1,
        items: vec![issue],
    };

    let html = render_html(&result);

    assert!(
        html.contains("href=\"https://github.com/acme/widget/issues/9?a=&quot;b&quot;&amp;c=d\""),
        "Issue link target must be escaped as attribute content: {}",
        html
    );
    assert!(
        html.contains("href=\"https://github.com/alice?tab=&quot;repos&quot;\""),
        "Profile link target must be escaped as attribute content: {}",
        html
    );
}

#[test]
fn test_render_untruncated_titles_in_html() {
    let long_title = "a".repeat(200);
    let result = SearchResult {
        total_count: 1,
        items: vec![sample_issue(5, &long_title, IssueState::Open)],
    };

    let html = render_html(&result);
    assert!(
        html.contains(&long_title),
        "The HTML report must render titles untruncated"
    );
}

#[test]
fn test_render_text_listing() {
    let result = SearchResult {
        total_count: 2,
        items: vec![
            sample_issue(42, "Widget crashes on resize", IssueState::Open),
            sample_issue(7, &"t".repeat(100), IssueState::Closed),
        ],
    };

    let text = render_text(&result);

    assert!(text.starts_with("2 issues:\n"));
    assert!(text.contains("Number: 42"));
    assert!(text.contains("User: alice"));
    assert!(text.contains("Title: Widget crashes on resize"));
    assert!(text.contains("Age: 3 days"));
    // Long titles are cut to 64 characters in the text listing.
    assert!(text.contains(&format!("Title: {}\n", "t".repeat(64))));
    assert!(!text.contains(&"t".repeat(65)));
}

#[test]
fn test_render_text_empty_result() {
    let result = SearchResult {
        total_count: 0,
        items: vec![],
    };

    let text = render_text(&result);
    assert_eq!(text, "0 issues:\n");
}
