//! Tracing setup.
//!
//! In the browser, formatted events go to the devtools console (warnings and
//! errors through `console.warn` / `console.error` so they stand out). On
//! native hosts `RUST_LOG` is honoured and the configured level is the
//! fallback.

use tracing::Level;

/// Installs the global subscriber. Safe to call more than once.
pub fn init(level: &str) {
    let level = parse_level(level);

    #[cfg(target_arch = "wasm32")]
    {
        let installed = tracing_subscriber::fmt()
            .with_writer(console::ConsoleMakeWriter)
            .with_max_level(level)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(%level, "console logging ready");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

/// Unknown levels fall back to `info`.
pub fn parse_level(raw: &str) -> Level {
    raw.trim().parse().unwrap_or(Level::INFO)
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it when dropped.
    pub struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.buf);
            let line = text.trim_end();
            if line.is_empty() {
                return;
            }
            let value = JsValue::from_str(line);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&value),
                Level::WARN => web_sys::console::warn_1(&value),
                _ => web_sys::console::log_1(&value),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buf: Vec::new(),
            }
        }
    }
}
