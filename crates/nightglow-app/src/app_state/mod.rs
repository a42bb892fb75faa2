//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the config, the explicit program state, input polling
//! and the renderer.

mod core;
mod event_handler;
mod init;
mod input;
mod paths;
mod program;
mod render;
mod shutdown;

pub use core::NightglowApp;
pub use paths::AppPaths;
