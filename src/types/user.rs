//! User types for issue search results
//!
//! This module provides the author record attached to every issue
//! returned by the search API.

use serde::{Deserialize, Serialize};

/// Author of an issue as returned by the search API.
///
/// The wire key for the profile page URL is `html_url`; the serde
/// attribute next to the field is the field-to-wire mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(rename = "html_url")]
    pub profile_url: String,
}

impl User {
    /// Creates a new user with the specified login and profile URL
    pub fn new(login: String, profile_url: String) -> Self {
        Self { login, profile_url }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.login)
    }
}
