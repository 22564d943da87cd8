//! Browser-hosted WASM frontend for the profile actor.
//!
//! This crate is intentionally a stub by default so it builds on native targets
//! without requiring wasm toolchains. The submit flow, view state, and reply
//! decoding live outside the wasm gate and are unit-tested on the host.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

pub mod error;
pub mod flow;
pub mod reply;
pub mod ui_model;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
