//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::Key;
use winit::window::WindowId;

use nightglow_platform::input::Modifiers;
use nightglow_platform::winit_keys::normalize_winit_key;

use super::core::NightglowApp;

impl ApplicationHandler for NightglowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        self.restore_program_state();

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("Initialization failed: {e}");
            self.init_failed = true;
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Poll);
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::Focused(false) => {
                // release events for keys held now will never arrive
                self.input.clear();
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                let state = new_modifiers.state();
                self.input.set_modifiers(Modifiers {
                    ctrl: state.control_key(),
                    alt: state.alt_key(),
                    shift: state.shift_key(),
                    super_key: state.super_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_scroll(delta);
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
                if self.should_exit {
                    self.shutdown();
                    event_loop.exit();
                    return;
                }
                self.request_redraw();
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.handle_mouse_motion(dx, dy);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
        }
    }
}

impl NightglowApp {
    /// Record a key press or release in the held-key set.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let normalized = normalize_winit_key(&key_name);
        self.input
            .process_key(&normalized, state == ElementState::Pressed);
    }

    fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
