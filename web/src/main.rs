//! Browser entry point. Built with `trunk` (see `index.html`); runs once when
//! the page's wasm module loads.

use ui::config;

fn main() {
    let loaded = config::from_page();
    let site = config::register(loaded.as_ref().ok().cloned().flatten().unwrap_or_default());
    ui::logging::init(&site.log_level);

    if let Err(err) = &loaded {
        tracing::warn!(%err, "ignoring page configuration, using defaults");
    }

    match ui::toggle::install(site) {
        Ok(count) => tracing::debug!(count, "language toggles wired"),
        Err(err) => tracing::warn!(%err, "language toggle setup skipped"),
    }
}
