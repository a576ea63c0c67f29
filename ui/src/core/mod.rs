//! Platform-agnostic building blocks: path resolution and preference storage.

#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod resolver;
pub mod storage;
