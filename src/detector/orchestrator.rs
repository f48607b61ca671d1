use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::attributes::RawProfileText;
use super::classifier::classify;
use super::observer::{DetectionObserver, TracingObserver};
use super::patterns::PatternCatalog;
use super::settings::DetectorSettings;
use super::signals::aggregate_signals;
use super::types::{
    ProfileAttributes, ProfileScreen, ScreeningResult, ScreeningSource, Verdict, VerdictLabel,
};
use super::DetectorError;

/// Reason reported when test mode flags a profile.
pub const TEST_MODE_REASON: &str = "Test mode: name starts with 'A'";

/// The production detector: settings, compiled catalog and an observer.
///
/// Holds no per-profile state, so one instance can be shared across threads
/// and screening the same attributes twice gives the same result.
pub struct ProfileDetector {
    settings: DetectorSettings,
    catalog: PatternCatalog,
    observer: Arc<dyn DetectionObserver>,
}

impl ProfileDetector {
    /// Validate settings and compile custom patterns.
    pub fn new(settings: DetectorSettings) -> Result<Self, DetectorError> {
        settings.validate()?;
        let catalog = PatternCatalog::with_custom(&settings.custom_patterns)?;
        tracing::debug!(
            sensitivity = ?settings.sensitivity,
            test_mode = settings.test_mode,
            catalog_size = catalog.len(),
            "Profile detector configured"
        );
        Ok(Self {
            settings,
            catalog,
            observer: Arc::new(TracingObserver),
        })
    }

    /// Replace the default tracing observer.
    pub fn with_observer(mut self, observer: Arc<dyn DetectionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn settings(&self) -> &DetectorSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Interpret raw scraped text, then screen it.
    pub fn screen_raw(&self, raw: &RawProfileText, now: DateTime<Utc>) -> ScreeningResult {
        self.screen(&raw.into_attributes(now))
    }

    fn evaluate(&self, attrs: &ProfileAttributes) -> ScreeningResult {
        if !self.settings.enabled {
            return ScreeningResult {
                verdict: Verdict::undetermined(),
                source: ScreeningSource::Disabled,
            };
        }

        if self.settings.is_allowlisted(&attrs.name) {
            return ScreeningResult {
                verdict: Verdict::undetermined(),
                source: ScreeningSource::Allowlisted,
            };
        }

        if self.settings.test_mode && is_test_mode_profile(&attrs.name) {
            return ScreeningResult {
                verdict: Verdict {
                    label: VerdictLabel::Suspicious,
                    reasons: vec![TEST_MODE_REASON.to_string()],
                },
                source: ScreeningSource::TestModeOverride,
            };
        }

        let signals = aggregate_signals(attrs, &self.settings.thresholds, &self.catalog);
        self.observer.on_signals(attrs, &signals);

        ScreeningResult {
            verdict: classify(&signals, self.settings.sensitivity),
            source: ScreeningSource::Heuristics,
        }
    }
}

impl ProfileScreen for ProfileDetector {
    fn screen(&self, attrs: &ProfileAttributes) -> ScreeningResult {
        let result = self.evaluate(attrs);
        self.observer.on_result(&result);
        result
    }
}

/// Test-mode rule: flag names whose first non-blank letter is "a" or "A".
pub fn is_test_mode_profile(name: &str) -> bool {
    name.trim().to_lowercase().starts_with('a')
}
