//! Mouse-driven orbit camera state
//!
//! Receives the window's mouse callbacks and turns them into yaw/pitch/zoom.

use gl_window::{ButtonAction, MouseButton};

const SENSITIVITY: f64 = 0.1;
const MIN_ZOOM: f64 = 1.0;
const MAX_ZOOM: f64 = 45.0;

/// Orbit camera angles accumulated from mouse input
#[derive(Debug, Clone, PartialEq)]
pub struct MouseHandler {
    last_position: Option<(f64, f64)>,
    dragging: bool,
    /// Horizontal angle in degrees
    pub yaw: f64,
    /// Vertical angle in degrees, clamped to avoid flipping over the poles
    pub pitch: f64,
    /// Field of view in degrees
    pub zoom: f64,
}

impl Default for MouseHandler {
    fn default() -> Self {
        Self {
            last_position: None,
            dragging: false,
            yaw: -90.0,
            pitch: 0.0,
            zoom: MAX_ZOOM,
        }
    }
}

impl MouseHandler {
    /// Cursor moved; rotates the camera while the left button is held
    pub fn on_move(&mut self, x: f64, y: f64) {
        let Some((last_x, last_y)) = self.last_position.replace((x, y)) else {
            return;
        };
        if !self.dragging {
            return;
        }

        self.yaw += (x - last_x) * SENSITIVITY;
        self.pitch = (self.pitch + (last_y - y) * SENSITIVITY).clamp(-89.0, 89.0);
    }

    /// Button pressed or released at (x, y)
    pub fn on_click(&mut self, button: MouseButton, action: ButtonAction, x: f64, y: f64) {
        if button == MouseButton::Left {
            self.dragging = action == ButtonAction::Press;
            self.last_position = Some((x, y));
        }
    }

    /// Scroll wheel zooms in and out
    pub fn on_scroll(&mut self, _dx: f64, dy: f64) {
        self.zoom = (self.zoom - dy).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_rotates() {
        let mut handler = MouseHandler::default();
        handler.on_click(MouseButton::Left, ButtonAction::Press, 100.0, 100.0);
        handler.on_move(110.0, 90.0);

        assert!((handler.yaw - -89.0).abs() < 1e-9);
        assert!((handler.pitch - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_without_drag_does_not_rotate() {
        let mut handler = MouseHandler::default();
        handler.on_move(0.0, 0.0);
        handler.on_move(500.0, 500.0);
        assert_eq!(handler, MouseHandler {
            last_position: Some((500.0, 500.0)),
            ..MouseHandler::default()
        });
    }

    #[test]
    fn test_pitch_and_zoom_are_clamped() {
        let mut handler = MouseHandler::default();
        handler.on_click(MouseButton::Left, ButtonAction::Press, 0.0, 10_000.0);
        handler.on_move(0.0, 0.0);
        assert!((handler.pitch - 89.0).abs() < 1e-9);

        handler.on_scroll(0.0, -100.0);
        assert!((handler.zoom - MAX_ZOOM).abs() < 1e-9);
        handler.on_scroll(0.0, 100.0);
        assert!((handler.zoom - MIN_ZOOM).abs() < 1e-9);
    }
}
