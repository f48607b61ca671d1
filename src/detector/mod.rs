pub mod types;
pub mod age;
pub mod location;
pub mod patterns;
pub mod signals;
pub mod classifier;
pub mod settings;
pub mod attributes;
pub mod observer;
pub mod orchestrator;

pub use types::*;
pub use age::parse_profile_age;
pub use location::locations_match;
pub use patterns::{has_suspicious_patterns, PatternCatalog};
pub use signals::aggregate_signals;
pub use classifier::classify;
pub use settings::{DetectorSettings, Sensitivity, SignalThresholds};
pub use attributes::RawProfileText;
pub use observer::{DetectionObserver, TracingObserver};
pub use orchestrator::ProfileDetector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Invalid custom pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Settings parsing error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
