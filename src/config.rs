use serde::Deserialize;

use crate::error::{BoardError, Result};

/// Id of the `<script type="application/json">` tag carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    pub log_level: String,
    pub banner: BannerTimings,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: "info".to_string(),
            banner: BannerTimings::default(),
        }
    }
}

/// How long each kind of banner stays up, in milliseconds.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct BannerTimings {
    /// Signup outcome, accepted or rejected.
    pub signup_ms: u32,
    /// Successful unregister.
    pub unregister_ms: u32,
    /// Rejected unregister and every transport failure. `None` leaves the
    /// banner up until the next message replaces it.
    pub sticky_error_ms: Option<u32>,
}

impl Default for BannerTimings {
    fn default() -> Self {
        Self {
            signup_ms: 5000,
            unregister_ms: 4000,
            sticky_error_ms: None,
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| BoardError::Config(e.to_string()))
    }

    /// Unknown level names fall back to `Info`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Reads the embedded config tag. A page without one gets the defaults.
    pub fn load_from_dom() -> Result<Self> {
        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| BoardError::Config("no document".into()))?;

        match doc.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(el) => Self::from_json(&el.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = BoardConfig::from_json("{}").unwrap();
        assert_eq!(cfg, BoardConfig::default());
        assert_eq!(cfg.banner.signup_ms, 5000);
        assert_eq!(cfg.banner.unregister_ms, 4000);
        assert_eq!(cfg.banner.sticky_error_ms, None);
    }

    #[test]
    fn partial_banner_override_keeps_other_defaults() {
        let cfg = BoardConfig::from_json(
            r#"{ "api_base": "https://api.example.edu", "banner": { "sticky_error_ms": 4000 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.api_base, "https://api.example.edu");
        assert_eq!(cfg.banner.sticky_error_ms, Some(4000));
        assert_eq!(cfg.banner.signup_ms, 5000);
    }

    #[test]
    fn log_level_parses_and_falls_back() {
        let mut cfg = BoardConfig::default();
        cfg.log_level = "debug".into();
        assert_eq!(cfg.level(), log::Level::Debug);
        cfg.log_level = "chatty".into();
        assert_eq!(cfg.level(), log::Level::Info);
    }

    #[test]
    fn garbage_is_a_config_error() {
        let err = BoardConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }
}
