//! Turning already-located profile text into [`ProfileAttributes`].
//!
//! The extraction collaborator finds the text on the page; these helpers only
//! interpret it. Nothing here touches a document tree.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::age::parse_profile_age;
use super::types::ProfileAttributes;

/// Separator between employer and location in "Acme · Seattle, WA".
pub const COMPANY_SEPARATOR: char = '·';

static CONNECTIONS_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d[\d,]*)\s*connections?").expect("Invalid connections regex")
});

static CONNECTIONS_PLUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d[\d,]*)\+").expect("Invalid connections-plus regex"));

static TITLE_COMPANY_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bat\s+.+?\s+in\s+(.+)$").expect("Invalid title location regex")
});

/// Raw text fields as scraped, before interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProfileText {
    pub name: String,
    pub title: String,
    pub description: String,
    /// "Joined LinkedIn in 2020", "September 2022", "Joined 5 days ago", ...
    pub joined_text: String,
    /// "500+ connections", "42 connections", ...
    pub connections_text: String,
    pub location_text: String,
    /// "Company" or "Company · Location".
    pub company_text: String,
}

impl RawProfileText {
    /// Interpret every field. `now` anchors absolute join dates.
    pub fn into_attributes(&self, now: DateTime<Utc>) -> ProfileAttributes {
        let title = self.title.trim().to_string();
        let (company_name, mut company_location) = split_company_text(&self.company_text);
        if company_location.is_empty() {
            company_location = company_location_from_title(&title).unwrap_or_default();
        }

        ProfileAttributes {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            profile_age_days: parse_profile_age(&self.joined_text, now),
            connection_count: parse_connection_count(&self.connections_text),
            profile_location: self.location_text.trim().to_string(),
            company_location,
            company_name,
            title,
        }
    }
}

/// Read a connection count from text like "42 connections" or "500+".
/// Thousands separators are accepted.
pub fn parse_connection_count(text: &str) -> Option<u32> {
    [&*CONNECTIONS_WORD, &*CONNECTIONS_PLUS]
        .into_iter()
        .filter_map(|re| re.captures(text))
        .find_map(|caps| caps[1].replace(',', "").parse().ok())
}

/// Split "Company · Location" at the first separator. Text without a
/// separator is all company name.
pub fn split_company_text(text: &str) -> (String, String) {
    let (company, location) = text.split_once(COMPANY_SEPARATOR).unwrap_or((text, ""));
    (company.trim().to_string(), location.trim().to_string())
}

/// Pull the location out of headlines like "Engineer at Acme in Boston, MA".
pub fn company_location_from_title(title: &str) -> Option<String> {
    TITLE_COMPANY_LOCATION
        .captures(title)
        .map(|caps| caps[1].trim().to_string())
        .filter(|location| !location.is_empty())
}
