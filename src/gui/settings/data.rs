use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    source::{
        DataSource,
        DEFAULT_BASE_URL,
    },
    KaramoveError,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsData {
    /// Overrides the base path compiled into the binary.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub last_route: Option<String>,
}

impl SettingsData {
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn source(&self) -> Result<DataSource, KaramoveError> {
        DataSource::parse(self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{
        load_json_in,
        save_json_in,
    };

    #[test]
    fn test_default_base_url() {
        let settings = SettingsData::default();
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);

        let blank = SettingsData { base_url: Some("  ".to_string()), last_route: None };
        assert_eq!(blank.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_override_base_url() {
        let settings =
            SettingsData { base_url: Some("https://example.org/k".to_string()), last_route: None };
        assert_eq!(
            settings.source().unwrap().data().unwrap().href(),
            "https://example.org/k/data.json"
        );
    }

    #[test]
    fn test_settings_persist() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsData {
            base_url: Some("public".to_string()),
            last_route: Some("/known-techniques".to_string()),
        };

        save_json_in(dir.path(), &settings, SETTINGS_FILE).unwrap();
        let loaded: SettingsData = load_json_in(dir.path(), SETTINGS_FILE).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_older_settings_file_still_loads() {
        let loaded: SettingsData = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded, SettingsData::default());
    }
}
