//! Issue domain types
//!
//! This module contains the issue records decoded from the search API
//! response. The serde attributes on each field are the explicit mapping
//! between record fields and wire keys, defined alongside the model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::User;

/// Wrapper type for issue numbers providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueNumber(pub u64);

impl IssueNumber {
    /// Create a new issue number
    pub fn new(number: u64) -> Self {
        Self(number)
    }

    /// Get the inner value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wrapper type for the HTML page URL of an issue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueUrl(pub String);

impl IssueUrl {
    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IssueUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents the state of a GitHub issue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")] // For REST API compatibility
pub enum IssueState {
    /// Issue is open and active
    Open,
    /// Issue is closed
    Closed,
}

/// A single issue returned by the search API.
///
/// Decoded directly from the response payload; immutable after decode.
/// `body` is optional because the API sends `null` for issues filed
/// without a description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: IssueNumber,
    #[serde(rename = "html_url")]
    pub url: IssueUrl,
    pub title: String,
    pub state: IssueState,
    pub user: User,
    pub created_at: DateTime<Utc>,
    /// Markdown text
    pub body: Option<String>,
}
