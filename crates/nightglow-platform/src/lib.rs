pub mod input;
pub mod input_processor;
pub mod keymap;
pub mod mouse;
pub mod paths;
pub mod winit_keys;

pub use input::{KeyCombo, KeybindRegistry, Modifiers};
pub use input_processor::InputProcessor;
pub use keymap::{KeyBind, Modifier};
pub use paths::{config_dir, config_file, resolve_asset};
pub use winit_keys::normalize_winit_key;
