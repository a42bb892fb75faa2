//! NightglowApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use nightglow_common::Action;
use nightglow_config::NightglowConfig;
use nightglow_platform::input::KeybindRegistry;
use nightglow_platform::input_processor::InputProcessor;
use nightglow_renderer::{FrameTimer, RenderState};

use super::paths::AppPaths;
use super::program::ProgramState;

/// Top-level application state.
pub struct NightglowApp {
    pub(super) config: NightglowConfig,
    pub(super) registry: KeybindRegistry,
    pub(super) input: InputProcessor,
    pub(super) paths: AppPaths,
    pub(super) program: ProgramState,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    pub(super) timer: FrameTimer,
    /// `(key, label)` pairs shown on the overlay help line.
    pub(super) key_hints: Vec<(String, &'static str)>,

    pub(super) should_exit: bool,
    pub(super) init_failed: bool,
    pub(super) shut_down: bool,
}

impl NightglowApp {
    pub fn new(config: NightglowConfig, registry: KeybindRegistry, paths: AppPaths) -> Self {
        let program = ProgramState::from_config(&config);
        let key_hints = key_hints(&registry);
        Self {
            config,
            registry,
            input: InputProcessor::new(),
            paths,
            program,
            window: None,
            render_state: None,
            timer: FrameTimer::new(),
            key_hints,
            should_exit: false,
            init_failed: false,
            shut_down: false,
        }
    }

    /// Whether window or renderer creation failed.
    pub fn init_failed(&self) -> bool {
        self.init_failed
    }
}

fn key_hints(registry: &KeybindRegistry) -> Vec<(String, &'static str)> {
    Action::ALL
        .iter()
        .filter_map(|action| {
            registry
                .keybind_for_action(*action)
                .map(|key| (key, action.label()))
        })
        .collect()
}
