use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::DetectorError;

/// Markers that identify the tool's own demo and fixture pages.
/// Text containing any of them is never reported as suspicious.
pub const ALLOW_LIST_MARKERS: &[&str] = &["linkedin ai detector", "test profiles", "🤖"];

/// Names shorter than this are suspicious.
pub const MIN_NAME_CHARS: usize = 3;
/// Titles shorter than this are suspicious.
pub const MIN_TITLE_CHARS: usize = 5;
/// Repetition checks skip text shorter than this.
const MIN_REPETITION_CHECK_CHARS: usize = 5;
/// Same character this many times in a row counts as repetition.
const REPEATED_CHAR_RUN: usize = 4;

/// Upper bound on compiled size for user-supplied patterns.
const CUSTOM_PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// What a catalog entry is meant to catch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    GenericName,
    GenericTitle,
    BoilerplateBio,
    FakeCompany,
    Custom,
}

impl PatternCategory {
    /// Generic-name entries are anchored to the name alone.
    pub fn targets_name(self) -> bool {
        matches!(self, PatternCategory::GenericName)
    }
}

/// A compiled pattern with its catalog metadata.
#[derive(Debug, Clone)]
pub struct TextPattern {
    regex: Regex,
    pub category: PatternCategory,
    pub description: String,
}

impl TextPattern {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Built-in entries, in evaluation order. Generic-name anchors apply to the
/// trimmed name; every other anchor applies to the combined
/// `name title description` text.
static BUILTIN_PATTERNS: LazyLock<Vec<TextPattern>> = LazyLock::new(|| {
    vec![
        builtin(r"(?i)^user\d+$", PatternCategory::GenericName, "Numbered user name"),
        builtin(r"(?i)^test\s+user", PatternCategory::GenericName, "Test user name"),
        builtin(r"(?i)^demo\s+account", PatternCategory::GenericName, "Demo account name"),
        builtin(r"(?i)^bot\d+$", PatternCategory::GenericName, "Numbered bot name"),
        builtin(r"(?i)^ai\s+assistant$", PatternCategory::GenericName, "AI assistant name"),
        builtin(r"(?i)^automated\s+user$", PatternCategory::GenericName, "Automated user name"),
        builtin(r"(?i)^software engineer$", PatternCategory::GenericTitle, "Bare 'software engineer' title"),
        builtin(r"(?i)^developer$", PatternCategory::GenericTitle, "Bare 'developer' title"),
        builtin(r"(?i)^consultant$", PatternCategory::GenericTitle, "Bare 'consultant' title"),
        builtin(r"(?i)^freelancer$", PatternCategory::GenericTitle, "Bare 'freelancer' title"),
        builtin(r"^$", PatternCategory::BoilerplateBio, "Empty text"),
        builtin(r"(?i)^looking for opportunities$", PatternCategory::BoilerplateBio, "Boilerplate 'looking for opportunities'"),
        builtin(r"(?i)^open to new opportunities$", PatternCategory::BoilerplateBio, "Boilerplate 'open to new opportunities'"),
        builtin(r"(?i)^seeking new challenges$", PatternCategory::BoilerplateBio, "Boilerplate 'seeking new challenges'"),
        builtin(r"(?i)^test company$", PatternCategory::FakeCompany, "Placeholder company 'test company'"),
        builtin(r"(?i)^demo corp$", PatternCategory::FakeCompany, "Placeholder company 'demo corp'"),
        builtin(r"(?i)^sample inc$", PatternCategory::FakeCompany, "Placeholder company 'sample inc'"),
    ]
});

static SEQUENTIAL_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:abc|def|ghi|jkl|mno|pqr|stu|vwx|yz)\d+").expect("Invalid sequential regex")
});

fn builtin(regex_str: &str, category: PatternCategory, description: &str) -> TextPattern {
    TextPattern {
        regex: Regex::new(regex_str).expect("Invalid profile text regex pattern"),
        category,
        description: description.to_string(),
    }
}

/// The ordered suspicious-text catalog: built-in entries followed by any
/// custom patterns from settings.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    custom: Vec<TextPattern>,
}

impl PatternCatalog {
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Extend the built-in catalog with case-insensitive custom patterns.
    pub fn with_custom<S: AsRef<str>>(patterns: &[S]) -> Result<Self, DetectorError> {
        let custom = patterns
            .iter()
            .map(|p| compile_custom(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { custom })
    }

    pub fn entries(&self) -> impl Iterator<Item = &TextPattern> {
        BUILTIN_PATTERNS.iter().chain(self.custom.iter())
    }

    pub fn len(&self) -> usize {
        BUILTIN_PATTERNS.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First entry, in catalog order, that matches `text`.
    pub fn first_match(&self, text: &str) -> Option<&TextPattern> {
        self.entries().find(|p| p.is_match(text))
    }

    /// First entry that matches its own subject: the name for generic-name
    /// entries, the combined text for the rest.
    pub fn first_profile_match(&self, name: &str, combined: &str) -> Option<&TextPattern> {
        self.entries().find(|p| {
            let subject = if p.category.targets_name() { name } else { combined };
            p.is_match(subject)
        })
    }
}

fn compile_custom(pattern: &str) -> Result<TextPattern, DetectorError> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(CUSTOM_PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|source| DetectorError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
    Ok(TextPattern {
        regex,
        category: PatternCategory::Custom,
        description: format!("Custom pattern '{pattern}'"),
    })
}

/// Why the scanner considered profile text suspicious.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFinding {
    /// A catalog entry matched the name or the combined text.
    Pattern {
        category: PatternCategory,
        description: String,
    },
    /// Name or title is implausibly short.
    TooShort,
    /// Name or title contains a run like "aaaa" or "abc123".
    Repetition,
}

/// Run every suspicious-text heuristic over the profile's name, title and
/// description. Returns the first heuristic that fired, or `None` when the
/// text looks ordinary or carries an allow-list marker.
pub fn scan_profile_text(
    name: &str,
    title: &str,
    description: &str,
    catalog: &PatternCatalog,
) -> Option<ScanFinding> {
    let combined = format!("{name} {title} {description}").to_lowercase();

    if ALLOW_LIST_MARKERS.iter().any(|m| combined.contains(m)) {
        return None;
    }

    if let Some(p) = catalog.first_profile_match(name.trim(), &combined) {
        return Some(ScanFinding::Pattern {
            category: p.category,
            description: p.description.clone(),
        });
    }

    if name.chars().count() < MIN_NAME_CHARS || title.chars().count() < MIN_TITLE_CHARS {
        return Some(ScanFinding::TooShort);
    }

    if has_repeated_patterns(name) || has_repeated_patterns(title) {
        return Some(ScanFinding::Repetition);
    }

    None
}

/// Boolean form of [`scan_profile_text`].
pub fn has_suspicious_patterns(
    name: &str,
    title: &str,
    description: &str,
    catalog: &PatternCatalog,
) -> bool {
    scan_profile_text(name, title, description, catalog).is_some()
}

/// True for text with a character repeated 4+ times in a row, or a short
/// alphabetic run followed by digits ("abc123").
pub fn has_repeated_patterns(text: &str) -> bool {
    if text.chars().count() < MIN_REPETITION_CHECK_CHARS {
        return false;
    }
    has_char_run(text, REPEATED_CHAR_RUN) || SEQUENTIAL_RUN.is_match(text)
}

fn has_char_run(text: &str, run: usize) -> bool {
    let mut prev = None;
    let mut count = 0;
    for c in text.chars() {
        if Some(c) == prev {
            count += 1;
        } else {
            prev = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}
