//! Host windowing system contract
//!
//! This module defines the narrow set of operations the [`Window`](super::Window)
//! needs from the platform windowing library. The production implementation
//! is GLFW (`render::opengl`); tests drive the window through a headless host
//! with a simulated clock.
//!
//! The contract is split in two:
//! - [`WindowHost`]: process-wide library state (init, hints, monitors, surface creation, time)
//! - [`HostSurface`]: one native window and its OpenGL context

use crate::core::ContextConfig;
use crate::input::{KeyCode, MouseEvent};
use crate::render::window::monitor::Monitor;
use crate::render::window::WindowResult;

/// Process-wide windowing library handle
///
/// Acquiring a host initializes the library; dropping the last host tears it
/// down. Hosts are not `Send`: every call happens on the thread that created it.
pub trait WindowHost: Sized {
    /// Native monitor type lent out while resolving the primary display
    type Monitor;

    /// Native window plus context created by this host
    type Surface: HostSurface;

    /// Initialize the windowing library
    fn init() -> WindowResult<Self>;

    /// Apply OpenGL context hints for surfaces created afterwards
    ///
    /// The profile is always core; `context` supplies version and sample count.
    fn apply_context_hints(&mut self, context: &ContextConfig);

    /// Run `f` with the primary monitor
    ///
    /// The monitor handle is only valid inside `f`. When no display is
    /// available `f` receives [`Monitor::none`].
    fn with_primary_monitor<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Self, Monitor<'_, Self::Monitor>) -> T;

    /// Create a surface, fullscreen on `monitor` when one is given
    ///
    /// Returns `None` when the library refuses to create the window.
    fn create_surface(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        monitor: Option<&Self::Monitor>,
    ) -> Option<Self::Surface>;

    /// Monotonic time in seconds since the library was initialized
    fn time(&self) -> f64;
}

/// One native window and its rendering context
pub trait HostSurface {
    /// Whether a close was requested by the user or the application
    fn should_close(&self) -> bool;

    /// Set or clear the close request flag
    fn set_should_close(&mut self, should_close: bool);

    /// Bind this surface's context to the calling thread
    fn make_current(&mut self);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Pump pending events, handing each mouse event to `sink` in arrival order
    fn poll_events(&mut self, sink: &mut dyn FnMut(MouseEvent));

    /// Whether `key` is currently held down
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Hide the cursor and allow unbounded movement (`true`), or restore it
    fn set_cursor_captured(&mut self, captured: bool);

    /// Start or stop delivering mouse events from [`poll_events`](Self::poll_events)
    fn set_mouse_polling(&mut self, enabled: bool);

    /// Replace the title bar text
    fn set_title(&mut self, title: &str);

    /// Current client area size in pixels
    fn size(&self) -> (u32, u32);
}
