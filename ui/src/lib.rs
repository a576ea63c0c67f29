//! Shared crate for the bilingual site. The language toggle logic lives here;
//! the `web` crate only boots it in the browser.

pub mod config;
pub mod core;
pub mod error;
pub mod lang;
pub mod logging;
pub mod toggle;

pub use config::{SiteConfig, ToggleMode};
pub use error::{SiteError, StorageError};
pub use lang::Lang;
pub use toggle::{PageContext, ToggleController};
