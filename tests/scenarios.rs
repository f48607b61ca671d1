use chrono::{DateTime, TimeZone, Utc};

use profile_sentinel::detector::{
    aggregate_signals, classify, locations_match, parse_profile_age, PatternCatalog,
    RawProfileText, ScreeningSource, Sensitivity, SignalThresholds,
};
use profile_sentinel::{
    DetectorSettings, ProfileAttributes, ProfileDetector, ProfileScreen, Verdict, VerdictLabel,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn verdict_for(attrs: &ProfileAttributes) -> Verdict {
    let signals = aggregate_signals(attrs, &SignalThresholds::default(), &PatternCatalog::builtin());
    classify(&signals, Sensitivity::Medium)
}

fn jordan_miller() -> ProfileAttributes {
    ProfileAttributes {
        name: "Jordan Miller".into(),
        title: "Software Engineer".into(),
        profile_age_days: Some(5),
        connection_count: Some(3),
        profile_location: "New York".into(),
        company_location: "San Francisco".into(),
        ..Default::default()
    }
}

fn sarah_johnson() -> ProfileAttributes {
    ProfileAttributes {
        name: "Sarah Johnson".into(),
        title: "Senior Software Engineer".into(),
        profile_age_days: Some(730),
        connection_count: Some(750),
        profile_location: "Seattle".into(),
        company_location: "Seattle".into(),
        ..Default::default()
    }
}

#[test]
fn suspicious_scenario() {
    let verdict = verdict_for(&jordan_miller());
    assert_eq!(verdict.label, VerdictLabel::Suspicious);
    assert_eq!(
        verdict.reasons,
        vec![
            "Profile created 5 days ago".to_string(),
            "Only 3 connections".to_string(),
            "Location mismatch: Profile (New York) vs Company (San Francisco)".to_string(),
        ]
    );
}

#[test]
fn verified_scenario() {
    let verdict = verdict_for(&sarah_johnson());
    assert_eq!(verdict.label, VerdictLabel::Verified);
    assert_eq!(
        verdict.reasons,
        vec![
            "Profile older than 1 year (730 days)".to_string(),
            "High connection count (750 connections)".to_string(),
            "Location consistency: Profile (Seattle) matches Company (Seattle)".to_string(),
            "Professional indicators (senior)".to_string(),
        ]
    );
}

#[test]
fn empty_profile_is_undetermined() {
    let verdict = verdict_for(&ProfileAttributes::default());
    assert_eq!(verdict, Verdict::undetermined());
}

#[test]
fn classification_is_idempotent() {
    for attrs in [jordan_miller(), sarah_johnson(), ProfileAttributes::default()] {
        assert_eq!(verdict_for(&attrs), verdict_for(&attrs));
    }
}

#[test]
fn verdict_never_mixes_sides() {
    let mixed = ProfileAttributes {
        profile_age_days: Some(5),
        connection_count: Some(900),
        ..sarah_johnson()
    };
    let verdict = verdict_for(&mixed);
    assert_eq!(verdict.label, VerdictLabel::Verified);
    assert!(verdict
        .reasons
        .iter()
        .all(|r| !r.starts_with("Profile created") && !r.starts_with("Only")));
}

#[test]
fn location_properties() {
    assert!(locations_match("Seattle, WA", "Seattle, WA"));
    assert!(!locations_match("New York", "San Francisco"));
    assert!(locations_match("Seattle, Washington", "Seattle, WA"));
    assert!(locations_match("", "Boston"));
}

#[test]
fn age_properties() {
    assert!(parse_profile_age("Joined LinkedIn in 2020", fixed_now()).unwrap() > 365);
    assert_eq!(parse_profile_age("Joined 5 days ago", fixed_now()), Some(5));
    assert_eq!(parse_profile_age("About this profile", fixed_now()), None);
}

#[test]
fn test_mode_override() {
    let detector = ProfileDetector::new(DetectorSettings {
        test_mode: true,
        ..Default::default()
    })
    .unwrap();

    let andrew = ProfileAttributes {
        name: "Andrew Wilson".into(),
        ..sarah_johnson()
    };
    let result = detector.screen(&andrew);
    assert_eq!(result.source, ScreeningSource::TestModeOverride);
    assert!(result.verdict.is_suspicious());

    let ben = ProfileAttributes {
        name: "Ben Wilson".into(),
        ..sarah_johnson()
    };
    let result = detector.screen(&ben);
    assert_eq!(result.source, ScreeningSource::Heuristics);
    assert!(result.verdict.is_verified());
}

#[test]
fn raw_text_end_to_end() {
    let detector = ProfileDetector::new(DetectorSettings::default()).unwrap();
    let raw = RawProfileText {
        name: "Jordan Miller".into(),
        title: "Software Engineer".into(),
        joined_text: "Joined 5 days ago".into(),
        connections_text: "3 connections".into(),
        location_text: "New York".into(),
        company_text: "StartupCorp · San Francisco".into(),
        ..Default::default()
    };
    let result = detector.screen_raw(&raw, fixed_now());
    assert_eq!(result.verdict.label, VerdictLabel::Suspicious);
    assert_eq!(result.verdict.reasons.len(), 3);
    assert!(result.should_notify(detector.settings()));
}

#[test]
fn settings_json_drives_detector() {
    let settings = DetectorSettings::from_json_str(
        r#"{"detectionSensitivity": "low", "thresholds": {"many_connections": 30}}"#,
    )
    .unwrap();
    let detector = ProfileDetector::new(settings).unwrap();
    let result = detector.screen(&ProfileAttributes {
        connection_count: Some(45),
        profile_age_days: Some(400),
        title: "Curator".into(),
        name: "Maria Lopez".into(),
        ..Default::default()
    });
    assert_eq!(result.verdict.label, VerdictLabel::Verified);
    assert_eq!(result.verdict.reasons.len(), 2);
}

#[test]
fn numbered_user_name_raises_suspicious_text() {
    let attrs = ProfileAttributes {
        name: "user123".into(),
        title: "Marketing Specialist".into(),
        profile_age_days: Some(12),
        ..Default::default()
    };
    let verdict = verdict_for(&attrs);
    assert_eq!(verdict.label, VerdictLabel::Suspicious);
    assert_eq!(
        verdict.reasons,
        vec![
            "Profile created 12 days ago".to_string(),
            "Suspicious profile patterns detected".to_string(),
        ]
    );
}
