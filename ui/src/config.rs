//! Site configuration.
//!
//! Pages may embed a JSON block to override the defaults:
//! ```html
//! <script type="application/json" id="duosite-config">
//!   { "toggle": { "mode": "fixed-urls", "en": "/en/index.html", "zh": "/zh/index.html" },
//!     "logLevel": "debug" }
//! </script>
//! ```
//! Every field is optional. Without the block the toggle rewrites the current
//! path (`path-rewrite`), which is what prefixed deployments want.
//!
//! The configuration is resolved once at start-up ([`register`]) and read
//! everywhere else through [`current`].

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::core::storage::PREFERENCE_KEY;
use crate::error::SiteError;
use crate::lang::Lang;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "duosite-config";

/// Default selector marking language toggle links.
pub const TOGGLE_SELECTOR: &str = ".lang-toggle";

/// How toggle hrefs are produced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ToggleMode {
    /// Swap or insert the language segment of the current path.
    #[default]
    PathRewrite,
    /// Always link to one fixed URL per language (e.g. each language's home).
    FixedUrls { en: String, zh: String },
}

impl ToggleMode {
    /// Configured URL for `lang` in fixed mode.
    pub fn fixed_url(&self, lang: Lang) -> Option<&str> {
        match self {
            ToggleMode::PathRewrite => None,
            ToggleMode::FixedUrls { en, zh } => Some(match lang {
                Lang::En => en.as_str(),
                Lang::Zh => zh.as_str(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub toggle: ToggleMode,
    pub toggle_selector: String,
    pub storage_key: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            toggle: ToggleMode::default(),
            toggle_selector: TOGGLE_SELECTOR.to_string(),
            storage_key: PREFERENCE_KEY.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SiteError> {
        if let ToggleMode::FixedUrls { en, zh } = &self.toggle {
            if en.trim().is_empty() || zh.trim().is_empty() {
                return Err(SiteError::InvalidConfig(
                    "fixed-urls mode needs both `en` and `zh` URLs".into(),
                ));
            }
        }
        if self.toggle_selector.trim().is_empty() {
            return Err(SiteError::InvalidConfig("toggleSelector is empty".into()));
        }
        if self.storage_key.is_empty() {
            return Err(SiteError::InvalidConfig("storageKey is empty".into()));
        }
        Ok(())
    }
}

static CONFIG: OnceCell<SiteConfig> = OnceCell::new();

/// Installs the process-wide configuration. The first call wins; later calls
/// return the already installed value.
pub fn register(config: SiteConfig) -> &'static SiteConfig {
    CONFIG.get_or_init(|| config)
}

/// Installed configuration, or the defaults if nothing was registered.
pub fn current() -> &'static SiteConfig {
    CONFIG.get_or_init(SiteConfig::default)
}

/// Reads the page's embedded configuration block. `Ok(None)` when the page
/// has none (or outside a browser).
pub fn from_page() -> Result<Option<SiteConfig>, SiteError> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = crate::core::platform::document()?;
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };
        let raw = element.text_content().unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(None);
        }
        SiteConfig::from_json(&raw).map(Some)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.toggle, ToggleMode::PathRewrite);
        assert_eq!(config.storage_key, "preferredLanguage");
        assert_eq!(config.toggle_selector, ".lang-toggle");
    }

    #[test]
    fn parses_fixed_urls() {
        let config = SiteConfig::from_json(
            r#"{"toggle":{"mode":"fixed-urls","en":"/en/index.html","zh":"/zh/index.html"},"logLevel":"debug"}"#,
        )
        .unwrap();
        assert_eq!(config.toggle.fixed_url(Lang::Zh), Some("/zh/index.html"));
        assert_eq!(config.toggle.fixed_url(Lang::En), Some("/en/index.html"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn path_rewrite_has_no_fixed_url() {
        assert_eq!(ToggleMode::PathRewrite.fixed_url(Lang::En), None);
    }

    #[test]
    fn rejects_blank_fixed_url() {
        let err = SiteConfig::from_json(r#"{"toggle":{"mode":"fixed-urls","en":"","zh":"/zh/"}}"#)
            .unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = SiteConfig::from_json(r#"{"toggle":{"mode":"guess"}}"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn first_registration_wins() {
        let first = SiteConfig {
            log_level: "debug".into(),
            ..SiteConfig::default()
        };
        assert_eq!(register(first.clone()), &first);
        assert_eq!(register(SiteConfig::default()), &first);
        assert_eq!(current(), &first);
    }

    #[test]
    fn outside_browser_page_has_no_config() {
        assert!(from_page().unwrap().is_none());
    }
}
