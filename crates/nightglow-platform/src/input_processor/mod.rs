//! Per-frame input polling.
//!
//! The [`InputProcessor`] sits between winit keyboard events and the program
//! state. It keeps the set of held keys and, once per frame, resolves them
//! into [`Action`](nightglow_common::Action)s through the
//! [`KeybindRegistry`](crate::input::KeybindRegistry).

mod processor;

pub use processor::InputProcessor;
