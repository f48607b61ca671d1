//! Detector settings supplied by the settings collaborator.
//!
//! Defaults mirror what the browser extension writes on install: detection
//! enabled, notifications on, medium sensitivity, no custom patterns, empty
//! allow-list, test mode off. Field aliases accept the extension's camelCase
//! storage keys so a synced settings blob can be loaded as-is.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DetectorError;

// ═══════════════════════════════════════════════════════════
// Sensitivity
// ═══════════════════════════════════════════════════════════

/// How many signals each verdict needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    /// Flag only with strong evidence; verify readily.
    Low,
    #[default]
    Medium,
    /// Flag on any single suspicious signal; verify only with all four.
    High,
}

/// Signal counts required by the classifier rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierThresholds {
    /// Minimum suspicious signals for a Suspicious verdict.
    pub suspicious: usize,
    /// Minimum verified signals for a Verified verdict.
    pub verified: usize,
}

impl Sensitivity {
    pub fn thresholds(self) -> ClassifierThresholds {
        match self {
            Sensitivity::Low => ClassifierThresholds {
                suspicious: 3,
                verified: 2,
            },
            Sensitivity::Medium => ClassifierThresholds {
                suspicious: 2,
                verified: 3,
            },
            Sensitivity::High => ClassifierThresholds {
                suspicious: 1,
                verified: 4,
            },
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Signal cutoffs
// ═══════════════════════════════════════════════════════════

/// Numeric cutoffs used when turning attributes into signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalThresholds {
    /// Profiles younger than this many days are suspicious.
    pub young_age_days: u32,
    /// Profiles older than this many days count toward verification.
    pub established_age_days: u32,
    /// Fewer connections than this is suspicious.
    pub few_connections: u32,
    /// At least this many connections counts toward verification.
    pub many_connections: u32,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            young_age_days: 30,
            established_age_days: 365,
            few_connections: 10,
            many_connections: 500,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorSettings {
    pub enabled: bool,
    #[serde(alias = "showNotifications")]
    pub show_notifications: bool,
    #[serde(alias = "detectionSensitivity")]
    pub sensitivity: Sensitivity,
    /// Flag every profile whose name starts with "a" instead of running heuristics.
    #[serde(alias = "testMode")]
    pub test_mode: bool,
    /// Extra suspicious-text regexes, matched case-insensitively.
    #[serde(alias = "customPatterns")]
    pub custom_patterns: Vec<String>,
    /// Profile names that are never flagged.
    pub whitelist: Vec<String>,
    pub thresholds: SignalThresholds,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_notifications: true,
            sensitivity: Sensitivity::Medium,
            test_mode: false,
            custom_patterns: Vec::new(),
            whitelist: Vec::new(),
            thresholds: SignalThresholds::default(),
        }
    }
}

impl DetectorSettings {
    /// Parse and validate settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, DetectorError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DetectorError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject cutoffs that would let opposing signals fire together.
    pub fn validate(&self) -> Result<(), DetectorError> {
        let t = &self.thresholds;
        if t.young_age_days > t.established_age_days {
            return Err(DetectorError::InvalidSettings(format!(
                "young_age_days ({}) exceeds established_age_days ({})",
                t.young_age_days, t.established_age_days
            )));
        }
        if t.few_connections > t.many_connections {
            return Err(DetectorError::InvalidSettings(format!(
                "few_connections ({}) exceeds many_connections ({})",
                t.few_connections, t.many_connections
            )));
        }
        if self.custom_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(DetectorError::InvalidSettings(
                "custom_patterns contains an empty pattern".into(),
            ));
        }
        Ok(())
    }

    /// Whether `name` is on the allow-list (trimmed, case-insensitive).
    pub fn is_allowlisted(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        !name.is_empty()
            && self
                .whitelist
                .iter()
                .any(|entry| entry.trim().to_lowercase() == name)
    }
}
