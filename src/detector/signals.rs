use super::location::locations_match;
use super::patterns::{scan_profile_text, PatternCatalog};
use super::settings::SignalThresholds;
use super::types::{ProfileAttributes, Signal, SignalKind};

/// Keywords in a title or bio that suggest a real professional role.
/// Matched as lowercase substrings.
pub const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "manager", "director", "senior", "lead", "principal", "head of",
    "ceo", "cto", "cfo", "vp", "vice president", "president",
    "engineer", "developer", "architect", "consultant", "specialist",
    "analyst", "coordinator", "supervisor", "executive",
];

/// Evaluate every heuristic over `attrs`, in fixed order, and return the
/// signals that fired.
///
/// Suspicious signals come first (young age, few connections, location
/// mismatch, suspicious text), then verified ones (old age, many connections,
/// location consistency, professional text). Unknown fields contribute nothing.
pub fn aggregate_signals(
    attrs: &ProfileAttributes,
    thresholds: &SignalThresholds,
    catalog: &PatternCatalog,
) -> Vec<Signal> {
    let mut signals = Vec::new();
    let both_locations = !attrs.profile_location.is_empty() && !attrs.company_location.is_empty();
    let locations_agree =
        both_locations && locations_match(&attrs.profile_location, &attrs.company_location);

    if let Some(days) = attrs.profile_age_days.filter(|d| *d < thresholds.young_age_days) {
        signals.push(Signal::new(
            SignalKind::AgeTooYoung,
            format!("Profile created {days} days ago"),
        ));
    }

    if let Some(count) = attrs.connection_count.filter(|c| *c < thresholds.few_connections) {
        signals.push(Signal::new(
            SignalKind::FewConnections,
            format!("Only {count} connections"),
        ));
    }

    if both_locations && !locations_agree {
        signals.push(Signal::new(
            SignalKind::LocationMismatch,
            format!(
                "Location mismatch: Profile ({}) vs Company ({})",
                attrs.profile_location, attrs.company_location
            ),
        ));
    }

    if let Some(finding) =
        scan_profile_text(&attrs.name, &attrs.title, &attrs.description, catalog)
    {
        tracing::trace!(?finding, "Suspicious text heuristic fired");
        signals.push(Signal::new(
            SignalKind::SuspiciousText,
            "Suspicious profile patterns detected",
        ));
    }

    if let Some(days) = attrs.profile_age_days.filter(|d| *d > thresholds.established_age_days) {
        signals.push(Signal::new(
            SignalKind::AgeVeryOld,
            format!("Profile older than 1 year ({days} days)"),
        ));
    }

    if let Some(count) = attrs.connection_count.filter(|c| *c >= thresholds.many_connections) {
        signals.push(Signal::new(
            SignalKind::ManyConnections,
            format!("High connection count ({count} connections)"),
        ));
    }

    if locations_agree {
        signals.push(Signal::new(
            SignalKind::LocationConsistent,
            format!(
                "Location consistency: Profile ({}) matches Company ({})",
                attrs.profile_location, attrs.company_location
            ),
        ));
    }

    if let Some(keyword) = professional_keyword(&attrs.title, &attrs.description) {
        signals.push(Signal::new(
            SignalKind::ProfessionalText,
            format!("Professional indicators ({keyword})"),
        ));
    }

    signals
}

/// First professional keyword found in the title or description.
pub fn professional_keyword(title: &str, description: &str) -> Option<&'static str> {
    let text = format!("{title} {description}").to_lowercase();
    PROFESSIONAL_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| text.contains(keyword))
}
