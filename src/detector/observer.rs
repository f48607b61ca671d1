use super::types::{ProfileAttributes, ScreeningResult, ScreeningSource, Signal, VerdictLabel};

/// Receives detector events. Injected into [`super::ProfileDetector`] so the
/// engine itself has no logging side channel.
pub trait DetectionObserver: Send + Sync {
    /// Called after signals are aggregated, before classification.
    fn on_signals(&self, _attrs: &ProfileAttributes, _signals: &[Signal]) {}

    /// Called once per screening with the final result.
    fn on_result(&self, _result: &ScreeningResult) {}
}

/// Default observer: structured `tracing` events, no profile names above
/// debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DetectionObserver for TracingObserver {
    fn on_signals(&self, attrs: &ProfileAttributes, signals: &[Signal]) {
        for s in signals {
            tracing::debug!(
                kind = ?s.kind,
                reason = %s.reason,
                "Profile signal"
            );
        }
        tracing::debug!(
            name = %attrs.name,
            signal_count = signals.len(),
            age_known = attrs.profile_age_days.is_some(),
            connections_known = attrs.connection_count.is_some(),
            "Signals aggregated"
        );
    }

    fn on_result(&self, result: &ScreeningResult) {
        match (result.verdict.label, result.source) {
            (VerdictLabel::Suspicious, ScreeningSource::TestModeOverride) => {
                tracing::info!(source = "test_mode", "Profile flagged by test mode");
            }
            (VerdictLabel::Suspicious, _) => {
                tracing::warn!(
                    label = "suspicious",
                    reason_count = result.verdict.reasons.len(),
                    "Suspicious profile detected"
                );
            }
            (VerdictLabel::Verified, _) => {
                tracing::info!(
                    label = "verified",
                    reason_count = result.verdict.reasons.len(),
                    "Verified profile"
                );
            }
            (VerdictLabel::Undetermined, source) => {
                tracing::debug!(label = "undetermined", source = ?source, "Profile undetermined");
            }
        }
    }
}
