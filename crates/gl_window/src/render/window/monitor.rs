//! Primary monitor resolution
//!
//! A [`Monitor`] is a short-lived, read-only view of the primary display. The
//! native handle is borrowed from the host and only lives for the duration of
//! [`resolve_primary`]'s closure, which is exactly how long window creation
//! needs it.

use crate::render::window::backend::WindowHost;

/// Primary display descriptor
#[derive(Debug)]
pub struct Monitor<'a, M> {
    handle: Option<&'a M>,
    width: u32,
    height: u32,
}

impl<M> Clone for Monitor<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Monitor<'_, M> {}

impl<'a, M> Monitor<'a, M> {
    /// Monitor with a usable handle and resolution
    ///
    /// A zero dimension yields the "no monitor" sentinel instead.
    pub const fn new(handle: &'a M, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::none();
        }
        Self {
            handle: Some(handle),
            width,
            height,
        }
    }

    /// The "no monitor" sentinel: no handle, 0x0
    pub const fn none() -> Self {
        Self {
            handle: None,
            width: 0,
            height: 0,
        }
    }

    /// Whether a display was found
    pub const fn is_available(&self) -> bool {
        self.handle.is_some()
    }

    /// Native handle, `None` for the sentinel
    pub const fn handle(&self) -> Option<&'a M> {
        self.handle
    }

    /// Horizontal resolution in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Vertical resolution in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// Resolve the primary monitor and run `f` with it
pub fn resolve_primary<H, T, F>(host: &mut H, f: F) -> T
where
    H: WindowHost,
    F: FnOnce(&mut H, Monitor<'_, H::Monitor>) -> T,
{
    host.with_primary_monitor(|host, monitor| {
        if monitor.is_available() {
            log::debug!("Primary monitor: {}x{}", monitor.width(), monitor.height());
        } else {
            log::debug!("No primary monitor available");
        }
        f(host, monitor)
    })
}
