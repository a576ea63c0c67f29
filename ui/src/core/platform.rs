//! Browser handles shared by the DOM adapters.

use crate::error::SiteError;

pub fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::BrowserUnavailable)
}

pub fn document() -> Result<web_sys::Document, SiteError> {
    window()?
        .document()
        .ok_or_else(|| SiteError::Dom("document unavailable".into()))
}
