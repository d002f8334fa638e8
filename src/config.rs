//! Optional user configuration.
//!
//! Settings act as defaults for CLI flags and are read from
//! `partget/config.json` under the platform config directory, e.g.
//! `~/.config/partget/config.json` on Linux:
//!
//! ```json
//! {
//!   "concurrency": 8,
//!   "default_dir": "/home/me/downloads",
//!   "quiet": false
//! }
//! ```

use serde::Deserialize;
use std::path::PathBuf;

/// User-provided defaults. Every field is optional; flags given on the
/// command line win over the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Default number of parallel segments.
    pub concurrency: Option<usize>,
    /// Default directory to save files in.
    pub default_dir: Option<String>,
    /// Suppress the progress bar.
    pub quiet: Option<bool>,
}

impl Settings {
    /// Loads settings from the user config directory.
    ///
    /// Returns `None` when there is no config directory, no config file,
    /// or the file does not parse; callers fall back to the defaults.
    pub fn load() -> Option<Settings> {
        let content = std::fs::read_to_string(config_path()?).ok()?;
        serde_json::from_str(&content).ok()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("partget").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{ "concurrency": 8, "default_dir": "/tmp/downloads", "quiet": true }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.concurrency, Some(8));
        assert_eq!(settings.default_dir.as_deref(), Some("/tmp/downloads"));
        assert_eq!(settings.quiet, Some(true));
    }

    #[test]
    fn test_missing_fields_stay_unset() {
        let settings: Settings = serde_json::from_str("{}").unwrap();

        assert!(settings.concurrency.is_none());
        assert!(settings.default_dir.is_none());
        assert!(settings.quiet.is_none());
    }
}
