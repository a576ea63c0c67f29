//! Language toggle wiring.
//!
//! [`ToggleController`] decides what every toggle link points at and records
//! the visitor's choice when one is clicked; it only sees a [`PageContext`] and
//! a [`PreferenceStore`], so it runs the same under `cargo test` as in the
//! browser. [`install`] is the thin DOM adapter around it.

use crate::config::{SiteConfig, ToggleMode};
use crate::core::resolver::{classify_target, current_language, resolve_counterpart_path};
use crate::core::storage::{load_preference, PreferenceStore};
use crate::error::SiteError;
use crate::lang::Lang;

/// What the page says about itself at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub path: String,
    /// Lowercased `<html lang>`, if non-empty.
    pub declared_lang: Option<String>,
}

impl PageContext {
    pub fn new<T: Into<String>>(path: T) -> Self {
        Self {
            path: path.into(),
            declared_lang: None,
        }
    }

    pub fn with_declared_lang<T: Into<String>>(mut self, lang: T) -> Self {
        let lang = lang.into().to_lowercase();
        self.declared_lang = (!lang.is_empty()).then_some(lang);
        self
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_browser(document: &web_sys::Document) -> Result<Self, SiteError> {
        let path = crate::core::platform::window()?
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string());
        let page = Self::new(path);
        Ok(
            match document
                .document_element()
                .and_then(|root| root.get_attribute("lang"))
            {
                Some(lang) => page.with_declared_lang(lang),
                None => page,
            },
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToggleController {
    mode: ToggleMode,
}

impl ToggleController {
    pub fn new(mode: ToggleMode) -> Self {
        Self { mode }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.toggle.clone())
    }

    pub fn mode(&self) -> &ToggleMode {
        &self.mode
    }

    /// Href every toggle on `page` should carry.
    pub fn target_href(&self, page: &PageContext, store: &dyn PreferenceStore) -> String {
        let stored = load_preference(store);
        let declared = page.declared_lang.as_deref();

        if let ToggleMode::PathRewrite = self.mode {
            return resolve_counterpart_path(&page.path, stored.as_deref(), declared);
        }

        let target = current_language(&page.path, stored.as_deref(), declared).counterpart();
        self.mode.fixed_url(target).unwrap_or_default().to_string()
    }

    /// Records the language `href` leads to. Storage failures are ignored so
    /// the click always proceeds.
    pub fn on_toggle_activated(&self, href: &str, store: &dyn PreferenceStore) -> Lang {
        let lang = classify_target(href);
        if let Err(err) = store.save(lang.code()) {
            tracing::debug!(%err, %lang, "could not persist language choice");
        }
        lang
    }
}

/// Points every toggle on the current page at its counterpart and listens for
/// clicks. Returns how many toggles were wired; a page without toggles is a
/// successful no-op.
pub fn install(config: &SiteConfig) -> Result<usize, SiteError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        use crate::core::platform;
        use crate::core::storage::LocalStore;

        let document = platform::document()?;
        let toggles = document
            .query_selector_all(&config.toggle_selector)
            .map_err(SiteError::dom)?;
        if toggles.length() == 0 {
            tracing::debug!(selector = %config.toggle_selector, "no language toggles on page");
            return Ok(0);
        }

        let page = PageContext::from_browser(&document)?;
        let store = LocalStore::new(config.storage_key.clone());
        let controller = ToggleController::from_config(config);
        let href = controller.target_href(&page, &store);
        tracing::debug!(path = %page.path, %href, "resolved language toggle target");

        let mut wired = 0;
        for index in 0..toggles.length() {
            let Some(element) = toggles
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            element.set_attribute("href", &href).map_err(SiteError::dom)?;

            let link = element.clone();
            let store = store.clone();
            let controller = controller.clone();
            let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                let current = link.get_attribute("href").unwrap_or_default();
                let lang = controller.on_toggle_activated(&current, &store);
                tracing::debug!(%lang, "language choice recorded");
            });
            element
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(SiteError::dom)?;
            // Toggles live as long as the page.
            on_click.forget();
            wired += 1;
        }
        Ok(wired)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config;
        Err(SiteError::BrowserUnavailable)
    }
}
