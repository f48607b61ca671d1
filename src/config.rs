/// Application-level constants
pub const APP_NAME: &str = "profile-sentinel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming a settings file, used when `--settings` is not given.
pub const SETTINGS_ENV_VAR: &str = "PROFILE_SENTINEL_SETTINGS";

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "profile_sentinel=info".to_string()
}
