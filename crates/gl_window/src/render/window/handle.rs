//! Application window with an OpenGL context
//!
//! [`Window`] wraps one native window and the context bound to it. A render
//! loop looks like this:
//!
//! ```rust,no_run
//! use gl_window::{KeyCode, Window};
//!
//! let mut window = Window::new("Demo", false);
//! if window.is_null() {
//!     return;
//! }
//!
//! window.make_context();
//! window.init_timer();
//! while !window.is_closed() {
//!     window.process_events();
//!     if window.is_key_pressed(KeyCode::Escape) {
//!         window.close();
//!     }
//!     // draw here
//!     window.show_fps();
//!     window.render();
//! }
//! window.destroy();
//! ```
//!
//! # Failed construction
//!
//! Construction makes a single attempt. If the windowing subsystem cannot be
//! initialized or the surface cannot be created, an error is logged and the
//! window is left in the null state: [`Window::is_null`] returns `true`,
//! [`Window::is_closed`] returns `true` and every other operation does
//! nothing. Use [`Window::try_new`] to get the error instead.
//!
//! # Threading
//!
//! The window is neither `Send` nor `Sync`. The context is made current on,
//! and presented from, the thread that created the window.

use crate::core::WindowConfig;
use crate::foundation::time::{fps_title, FpsCounter};
use crate::input::{ButtonAction, KeyCode, MouseButton, MouseListeners};
use crate::render::opengl::GlfwHost;
use crate::render::window::backend::{HostSurface, WindowHost};
use crate::render::window::monitor::{self, Monitor};
use crate::render::window::subsystem::Subsystem;
use crate::render::window::{WindowError, WindowResult};

/// The application window and its rendering context
pub struct Window<H: WindowHost = GlfwHost> {
    title: String,
    width: u32,
    height: u32,
    fps: FpsCounter,
    last_fps: Option<u32>,
    reported_untimed_fps: bool,
    listeners: Option<MouseListeners>,
    // declared before `subsystem` so the surface is dropped first
    surface: Option<H::Surface>,
    subsystem: Option<Subsystem<H>>,
}

impl Window<GlfwHost> {
    /// Create a GLFW window, fullscreen on the primary monitor or windowed at
    /// the default resolution
    pub fn new(title: &str, is_fullscreen: bool) -> Self {
        Self::from_config(&WindowConfig::new(title).with_fullscreen(is_fullscreen))
    }

    /// Create a GLFW window from a full configuration
    pub fn from_config(config: &WindowConfig) -> Self {
        Self::create_with(config, GlfwHost::init)
    }

    /// Create a GLFW window, returning the failure instead of a null window
    pub fn try_new(config: &WindowConfig) -> WindowResult<Self> {
        Self::try_create_with(config, GlfwHost::init)
    }
}

impl<H: WindowHost> Window<H> {
    /// Create a window on the host produced by `init`
    ///
    /// Failures are logged and produce a null window.
    pub fn create_with<F>(config: &WindowConfig, init: F) -> Self
    where
        F: FnOnce() -> WindowResult<H>,
    {
        match Self::try_create_with(config, init) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create window '{}': {e}", config.title);
                Self::null(&config.title)
            }
        }
    }

    /// Create a window on the host produced by `init`
    pub fn try_create_with<F>(config: &WindowConfig, init: F) -> WindowResult<Self>
    where
        F: FnOnce() -> WindowResult<H>,
    {
        let mut subsystem = Subsystem::acquire_with(init)?;
        let host = subsystem.host_mut();
        host.apply_context_hints(&config.context);

        let surface = monitor::resolve_primary(host, |host, monitor| {
            let (width, height, target) = placement(config, &monitor)?;
            host.create_surface(width, height, &config.title, target)
                .ok_or(WindowError::CreationFailed)
        })?;

        let (width, height) = surface.size();
        log::info!(
            "Created window '{}' ({width}x{height}, {}, OpenGL {}.{} core)",
            config.title,
            if config.fullscreen { "fullscreen" } else { "windowed" },
            config.context.version.0,
            config.context.version.1,
        );

        Ok(Self {
            title: config.title.clone(),
            width,
            height,
            fps: FpsCounter::new(),
            last_fps: None,
            reported_untimed_fps: false,
            listeners: None,
            surface: Some(surface),
            subsystem: Some(subsystem),
        })
    }

    fn null(title: &str) -> Self {
        Self {
            title: title.to_string(),
            width: 0,
            height: 0,
            fps: FpsCounter::new(),
            last_fps: None,
            reported_untimed_fps: false,
            listeners: None,
            surface: None,
            subsystem: None,
        }
    }

    /// Whether construction failed
    pub const fn is_null(&self) -> bool {
        self.surface.is_none()
    }

    /// Whether a close was requested, by the user or through [`close`](Self::close)
    pub fn is_closed(&self) -> bool {
        self.surface.as_ref().map_or(true, HostSurface::should_close)
    }

    /// Request the window to close
    ///
    /// Resources stay alive until [`destroy`](Self::destroy).
    pub fn close(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_should_close(true);
        }
    }

    /// Bind the window's OpenGL context to the calling thread
    pub fn make_context(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.make_current();
        }
    }

    /// Present the back buffer
    pub fn render(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.swap_buffers();
        }
    }

    /// Pump pending events
    ///
    /// Attached mouse listeners are called from inside this method, in the
    /// order the events arrived.
    pub fn process_events(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let listeners = &mut self.listeners;
        surface.poll_events(&mut |event| {
            if let Some(listeners) = listeners.as_mut() {
                listeners.dispatch(event);
            }
        });
    }

    /// Release the window, its context and the subsystem lease
    pub fn destroy(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(surface) = self.surface.take() {
            drop(surface);
            log::info!("Destroyed window '{}'", self.title);
        }
        self.listeners = None;
        if let Some(subsystem) = self.subsystem.take() {
            subsystem.release();
        }
    }

    /// Whether `key` is currently held down
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|surface| surface.is_key_pressed(key))
    }

    /// Capture the cursor and route mouse input to the given handlers
    ///
    /// The cursor is hidden and unbounded while listeners are attached.
    /// Attaching again replaces the previous handlers.
    pub fn attach_mouse_listeners<M, C, S>(&mut self, on_move: M, on_click: C, on_scroll: S)
    where
        M: FnMut(f64, f64) + 'static,
        C: FnMut(MouseButton, ButtonAction, f64, f64) + 'static,
        S: FnMut(f64, f64) + 'static,
    {
        self.set_mouse_listeners(MouseListeners::new(on_move, on_click, on_scroll));
    }

    /// Capture the cursor and route mouse input to `listeners`
    pub fn set_mouse_listeners(&mut self, listeners: MouseListeners) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.set_cursor_captured(true);
        surface.set_mouse_polling(true);
        if self.listeners.replace(listeners).is_some() {
            log::debug!("Replaced mouse listeners on '{}'", self.title);
        }
    }

    /// Drop the mouse listeners and release the cursor
    pub fn detach_mouse_listeners(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if self.listeners.take().is_some() {
            surface.set_mouse_polling(false);
            surface.set_cursor_captured(false);
        }
    }

    /// Whether mouse listeners are attached
    pub const fn has_mouse_listeners(&self) -> bool {
        self.listeners.is_some()
    }

    /// Start FPS sampling now
    ///
    /// Call right before entering the render loop so loading time does not
    /// drag down the first sample.
    pub fn init_timer(&mut self) {
        if let Some(now) = self.now() {
            self.fps.start(now);
        }
    }

    /// Count a rendered frame and refresh the title at most once per second
    ///
    /// Once at least a second has passed since the last refresh, the title
    /// becomes `"<title> (FPS: <frames>)"` where `<frames>` is the number of
    /// calls since then, including this one.
    pub fn show_fps(&mut self) {
        let Some(now) = self.now() else {
            return;
        };
        if !self.fps.is_sampling() {
            if !self.reported_untimed_fps {
                log::debug!("show_fps called before init_timer, ignoring");
                self.reported_untimed_fps = true;
            }
            return;
        }

        if let Some(fps) = self.fps.frame(now) {
            self.last_fps = Some(fps);
            if let Some(surface) = self.surface.as_mut() {
                surface.set_title(&fps_title(&self.title, fps));
            }
            log::trace!("'{}' at {fps} FPS", self.title);
        }
    }

    fn now(&self) -> Option<f64> {
        self.subsystem.as_ref().map(|subsystem| subsystem.host().time())
    }

    /// Width in pixels, fixed at creation
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels, fixed at creation
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Base title, without the FPS overlay
    pub fn title(&self) -> &str {
        &self.title
    }

    /// FPS shown by the most recent title refresh
    pub const fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }

    /// Frame timing state
    pub const fn timer(&self) -> &FpsCounter {
        &self.fps
    }
}

impl<H: WindowHost> Drop for Window<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<H: WindowHost> std::fmt::Debug for Window<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("title", &self.title)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("null", &self.is_null())
            .field("fps", &self.fps)
            .finish_non_exhaustive()
    }
}

/// Pick the surface size and target monitor for `config`
fn placement<'m, M>(
    config: &WindowConfig,
    monitor: &Monitor<'m, M>,
) -> WindowResult<(u32, u32, Option<&'m M>)> {
    if !config.fullscreen {
        return Ok((config.width, config.height, None));
    }

    match monitor.handle() {
        Some(handle) => Ok((monitor.width(), monitor.height(), Some(handle))),
        None if config.fullscreen_fallback => {
            log::warn!(
                "No monitor for fullscreen window '{}', falling back to {}x{} windowed",
                config.title,
                config.width,
                config.height
            );
            Ok((config.width, config.height, None))
        }
        None => Err(WindowError::NoMonitor),
    }
}
