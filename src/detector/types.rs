use serde::{Deserialize, Serialize};

use super::settings::DetectorSettings;

/// Already-extracted profile summary handed to the engine.
///
/// Strings are never absent (empty when unknown) and numeric fields are
/// `None` when unknown, so every heuristic is total over this record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileAttributes {
    /// Display name.
    pub name: String,
    /// Headline / occupation text.
    pub title: String,
    /// Secondary bio text.
    pub description: String,
    /// Days since the profile was created.
    pub profile_age_days: Option<u32>,
    /// Declared connection count.
    pub connection_count: Option<u32>,
    /// Location declared on the profile.
    pub profile_location: String,
    /// Location declared for the current employer.
    pub company_location: String,
    /// Current employer name.
    pub company_name: String,
}

/// Which side of the verdict a signal counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalPolarity {
    Suspicious,
    Verified,
}

/// A single named observation about a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    AgeTooYoung,
    AgeVeryOld,
    FewConnections,
    ManyConnections,
    LocationMismatch,
    LocationConsistent,
    SuspiciousText,
    ProfessionalText,
}

impl SignalKind {
    pub fn polarity(self) -> SignalPolarity {
        match self {
            SignalKind::AgeTooYoung
            | SignalKind::FewConnections
            | SignalKind::LocationMismatch
            | SignalKind::SuspiciousText => SignalPolarity::Suspicious,
            SignalKind::AgeVeryOld
            | SignalKind::ManyConnections
            | SignalKind::LocationConsistent
            | SignalKind::ProfessionalText => SignalPolarity::Verified,
        }
    }
}

/// A signal paired with the human-readable reason that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub reason: String,
}

impl Signal {
    pub fn new(kind: SignalKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

/// Three-way classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictLabel {
    Suspicious,
    Verified,
    Undetermined,
}

/// Final classification plus the reasons that produced it, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: VerdictLabel,
    pub reasons: Vec<String>,
}

impl Verdict {
    pub fn undetermined() -> Self {
        Self {
            label: VerdictLabel::Undetermined,
            reasons: Vec::new(),
        }
    }

    pub fn is_suspicious(&self) -> bool {
        self.label == VerdictLabel::Suspicious
    }

    pub fn is_verified(&self) -> bool {
        self.label == VerdictLabel::Verified
    }
}

/// Which path through the detector produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningSource {
    /// Detection is switched off in settings.
    Disabled,
    /// The profile name is on the allow-list.
    Allowlisted,
    /// Test mode flagged the profile by name prefix.
    TestModeOverride,
    /// Signals were aggregated and classified.
    Heuristics,
}

/// What the detector hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub verdict: Verdict,
    pub source: ScreeningSource,
}

impl ScreeningResult {
    /// Whether the presentation layer should raise a notification.
    pub fn should_notify(&self, settings: &DetectorSettings) -> bool {
        settings.show_notifications && self.verdict.is_suspicious()
    }
}

/// Screens one profile at a time; implementations must be pure per call.
pub trait ProfileScreen {
    fn screen(&self, attrs: &ProfileAttributes) -> ScreeningResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_default_to_empty_and_unknown() {
        let attrs = ProfileAttributes::default();
        assert!(attrs.name.is_empty());
        assert!(attrs.company_name.is_empty());
        assert_eq!(attrs.profile_age_days, None);
        assert_eq!(attrs.connection_count, None);
    }

    #[test]
    fn attributes_deserialize_with_missing_fields() {
        let attrs: ProfileAttributes =
            serde_json::from_str(r#"{"name": "Sarah Johnson", "connection_count": 750}"#).unwrap();
        assert_eq!(attrs.name, "Sarah Johnson");
        assert_eq!(attrs.connection_count, Some(750));
        assert!(attrs.title.is_empty());
        assert_eq!(attrs.profile_age_days, None);
    }

    #[test]
    fn negative_age_is_rejected_at_the_boundary() {
        let parsed: Result<ProfileAttributes, _> =
            serde_json::from_str(r#"{"profile_age_days": -4}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn polarity_splits_kinds_evenly() {
        let all = [
            SignalKind::AgeTooYoung,
            SignalKind::AgeVeryOld,
            SignalKind::FewConnections,
            SignalKind::ManyConnections,
            SignalKind::LocationMismatch,
            SignalKind::LocationConsistent,
            SignalKind::SuspiciousText,
            SignalKind::ProfessionalText,
        ];
        let suspicious = all
            .iter()
            .filter(|k| k.polarity() == SignalPolarity::Suspicious)
            .count();
        assert_eq!(suspicious, 4);
    }

    #[test]
    fn verdict_label_serializes_snake_case() {
        let json = serde_json::to_string(&VerdictLabel::Undetermined).unwrap();
        assert_eq!(json, "\"undetermined\"");
        let json = serde_json::to_string(&ScreeningSource::TestModeOverride).unwrap();
        assert_eq!(json, "\"test_mode_override\"");
    }

    #[test]
    fn notification_only_for_suspicious_when_enabled() {
        let flagged = ScreeningResult {
            verdict: Verdict {
                label: VerdictLabel::Suspicious,
                reasons: vec!["Only 3 connections".into()],
            },
            source: ScreeningSource::Heuristics,
        };
        let quiet = DetectorSettings {
            show_notifications: false,
            ..Default::default()
        };
        assert!(flagged.should_notify(&DetectorSettings::default()));
        assert!(!flagged.should_notify(&quiet));

        let verified = ScreeningResult {
            verdict: Verdict {
                label: VerdictLabel::Verified,
                reasons: vec![],
            },
            source: ScreeningSource::Heuristics,
        };
        assert!(!verified.should_notify(&DetectorSettings::default()));
    }

    #[test]
    fn undetermined_verdict_has_no_reasons() {
        let verdict = Verdict::undetermined();
        assert!(!verdict.is_suspicious());
        assert!(!verdict.is_verified());
        assert!(verdict.reasons.is_empty());
    }
}
