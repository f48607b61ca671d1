use super::settings::Sensitivity;
use super::types::{Signal, SignalPolarity, Verdict, VerdictLabel};

/// Combine aggregated signals into a single verdict.
///
/// Suspicious wins first when enough suspicious signals fired; otherwise
/// Verified when enough verified signals fired; otherwise Undetermined with no
/// reasons. Reasons are only those of the contributing side, in signal order.
pub fn classify(signals: &[Signal], sensitivity: Sensitivity) -> Verdict {
    let thresholds = sensitivity.thresholds();

    let suspicious = reasons_for(signals, SignalPolarity::Suspicious);
    if suspicious.len() >= thresholds.suspicious {
        return Verdict {
            label: VerdictLabel::Suspicious,
            reasons: suspicious,
        };
    }

    let verified = reasons_for(signals, SignalPolarity::Verified);
    if verified.len() >= thresholds.verified {
        return Verdict {
            label: VerdictLabel::Verified,
            reasons: verified,
        };
    }

    Verdict::undetermined()
}

fn reasons_for(signals: &[Signal], polarity: SignalPolarity) -> Vec<String> {
    signals
        .iter()
        .filter(|s| s.kind.polarity() == polarity)
        .map(|s| s.reason.clone())
        .collect()
}
