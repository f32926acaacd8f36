//! GLFW-based window management for OpenGL rendering
//!
//! Provides cross-platform window creation, context binding and event
//! handling. GLFW reference counts its own initialization, so dropping the
//! last [`GlfwHost`] (including the clone held by each surface) terminates
//! the library.

use glfw::Context;

use crate::core::ContextConfig;
use crate::input::{ButtonAction, KeyCode, MouseButton, MouseEvent};
use crate::render::window::backend::{HostSurface, WindowHost};
use crate::render::window::monitor::Monitor;
use crate::render::window::{WindowError, WindowResult};

fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {error:?}: {description}");
}

/// Initialized GLFW library
pub struct GlfwHost {
    glfw: glfw::Glfw,
}

impl WindowHost for GlfwHost {
    type Monitor = glfw::Monitor;
    type Surface = GlfwSurface;

    fn init() -> WindowResult<Self> {
        let glfw = glfw::init(log_glfw_error).map_err(|e| {
            log::error!("Failed to initialize GLFW: {e:?}");
            WindowError::InitializationFailed
        })?;
        Ok(Self { glfw })
    }

    fn apply_context_hints(&mut self, context: &ContextConfig) {
        let (major, minor) = context.version;
        self.glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        self.glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
        self.glfw
            .window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        // macOS only hands out core profiles to forward-compatible contexts
        #[cfg(target_os = "macos")]
        self.glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let samples = (context.samples > 0).then_some(context.samples);
        self.glfw.window_hint(glfw::WindowHint::Samples(samples));
    }

    fn with_primary_monitor<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Self, Monitor<'_, Self::Monitor>) -> T,
    {
        let mut glfw = self.glfw.clone();
        glfw.with_primary_monitor(|_, monitor| {
            let resolved = monitor
                .as_deref()
                .and_then(|m| m.get_video_mode().map(|mode| Monitor::new(m, mode.width, mode.height)))
                .unwrap_or_else(Monitor::none);
            f(self, resolved)
        })
    }

    fn create_surface(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        monitor: Option<&Self::Monitor>,
    ) -> Option<Self::Surface> {
        let mode = monitor.map_or(glfw::WindowMode::Windowed, glfw::WindowMode::FullScreen);
        let (window, events) = self.glfw.create_window(width, height, title, mode)?;
        Some(GlfwSurface {
            glfw: self.glfw.clone(),
            window,
            events,
        })
    }

    fn time(&self) -> f64 {
        self.glfw.get_time()
    }
}

/// GLFW window and its OpenGL context
pub struct GlfwSurface {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwSurface {
    fn translate(&self, event: glfw::WindowEvent) -> Option<MouseEvent> {
        match event {
            glfw::WindowEvent::CursorPos(x, y) => Some(MouseEvent::Moved { x, y }),
            glfw::WindowEvent::MouseButton(button, action, _) => {
                let (x, y) = self.window.get_cursor_pos();
                Some(MouseEvent::Button {
                    button: mouse_button(button),
                    action: button_action(action),
                    x,
                    y,
                })
            }
            glfw::WindowEvent::Scroll(dx, dy) => Some(MouseEvent::Scroll { dx, dy }),
            _ => None,
        }
    }
}

impl HostSurface for GlfwSurface {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self, sink: &mut dyn FnMut(MouseEvent)) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let Some(event) = self.translate(event) {
                sink(event);
            }
        }
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.window.get_key(glfw_key(key)) == glfw::Action::Press
    }

    fn set_cursor_captured(&mut self, captured: bool) {
        let mode = if captured {
            glfw::CursorMode::Disabled
        } else {
            glfw::CursorMode::Normal
        };
        self.window.set_cursor_mode(mode);
    }

    fn set_mouse_polling(&mut self, enabled: bool) {
        self.window.set_cursor_pos_polling(enabled);
        self.window.set_mouse_button_polling(enabled);
        self.window.set_scroll_polling(enabled);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width.max(0) as u32, height.max(0) as u32)
    }
}

const fn glfw_key(key: KeyCode) -> glfw::Key {
    match key {
        KeyCode::A => glfw::Key::A,
        KeyCode::B => glfw::Key::B,
        KeyCode::C => glfw::Key::C,
        KeyCode::D => glfw::Key::D,
        KeyCode::E => glfw::Key::E,
        KeyCode::F => glfw::Key::F,
        KeyCode::G => glfw::Key::G,
        KeyCode::H => glfw::Key::H,
        KeyCode::I => glfw::Key::I,
        KeyCode::J => glfw::Key::J,
        KeyCode::K => glfw::Key::K,
        KeyCode::L => glfw::Key::L,
        KeyCode::M => glfw::Key::M,
        KeyCode::N => glfw::Key::N,
        KeyCode::O => glfw::Key::O,
        KeyCode::P => glfw::Key::P,
        KeyCode::Q => glfw::Key::Q,
        KeyCode::R => glfw::Key::R,
        KeyCode::S => glfw::Key::S,
        KeyCode::T => glfw::Key::T,
        KeyCode::U => glfw::Key::U,
        KeyCode::V => glfw::Key::V,
        KeyCode::W => glfw::Key::W,
        KeyCode::X => glfw::Key::X,
        KeyCode::Y => glfw::Key::Y,
        KeyCode::Z => glfw::Key::Z,
        KeyCode::Space => glfw::Key::Space,
        KeyCode::Enter => glfw::Key::Enter,
        KeyCode::Escape => glfw::Key::Escape,
        KeyCode::Up => glfw::Key::Up,
        KeyCode::Down => glfw::Key::Down,
        KeyCode::Left => glfw::Key::Left,
        KeyCode::Right => glfw::Key::Right,
    }
}

const fn mouse_button(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        glfw::MouseButton::Button3 => MouseButton::Middle,
        other => MouseButton::Other(other as u8),
    }
}

const fn button_action(action: glfw::Action) -> ButtonAction {
    match action {
        glfw::Action::Release => ButtonAction::Release,
        glfw::Action::Press | glfw::Action::Repeat => ButtonAction::Press,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(mouse_button(glfw::MouseButton::Button1), MouseButton::Left);
        assert_eq!(mouse_button(glfw::MouseButton::Button2), MouseButton::Right);
        assert_eq!(mouse_button(glfw::MouseButton::Button3), MouseButton::Middle);
        assert_eq!(mouse_button(glfw::MouseButton::Button5), MouseButton::Other(4));
    }

    #[test]
    fn test_button_action_mapping() {
        assert_eq!(button_action(glfw::Action::Press), ButtonAction::Press);
        assert_eq!(button_action(glfw::Action::Repeat), ButtonAction::Press);
        assert_eq!(button_action(glfw::Action::Release), ButtonAction::Release);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(glfw_key(KeyCode::Escape), glfw::Key::Escape);
        assert_eq!(glfw_key(KeyCode::W), glfw::Key::W);
        assert_eq!(glfw_key(KeyCode::Left), glfw::Key::Left);
    }
}
