//! In-memory window host for tests
//!
//! Simulates the clock, the primary monitor, the close flag, key state and
//! mouse events. Every clone of a [`HeadlessHost`] shares the same state, so a
//! test keeps one clone to inspect what the window did with the others.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::core::ContextConfig;
use crate::input::{KeyCode, MouseEvent};
use crate::render::window::backend::{HostSurface, WindowHost};
use crate::render::window::monitor::Monitor;
use crate::render::window::{WindowError, WindowResult};

#[derive(Debug, Default)]
struct HeadlessState {
    time: f64,
    monitor: Option<(u32, u32)>,
    refuse_surfaces: bool,
    hints: Option<ContextConfig>,
    requested_monitor: Option<bool>,
    title: Option<String>,
    title_updates: usize,
    should_close: bool,
    current: bool,
    swaps: usize,
    pressed: HashSet<KeyCode>,
    cursor_captured: bool,
    mouse_polling: bool,
    queued: Vec<MouseEvent>,
    surface_destroyed: bool,
}

/// Native monitor stand-in
#[derive(Debug)]
pub(crate) struct HeadlessMonitor;

#[derive(Debug, Clone)]
pub(crate) struct HeadlessHost {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessHost {
    pub(crate) fn with_monitor(width: u32, height: u32) -> Self {
        Self::from_state(HeadlessState {
            monitor: Some((width, height)),
            ..HeadlessState::default()
        })
    }

    pub(crate) fn without_monitor() -> Self {
        Self::from_state(HeadlessState::default())
    }

    fn from_state(state: HeadlessState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub(crate) fn refuse_surfaces(&self) {
        self.state.borrow_mut().refuse_surfaces = true;
    }

    pub(crate) fn set_time(&self, time: f64) {
        self.state.borrow_mut().time = time;
    }

    pub(crate) fn advance(&self, seconds: f64) {
        self.state.borrow_mut().time += seconds;
    }

    pub(crate) fn request_close(&self) {
        self.state.borrow_mut().should_close = true;
    }

    pub(crate) fn press(&self, key: KeyCode) {
        self.state.borrow_mut().pressed.insert(key);
    }

    pub(crate) fn release(&self, key: KeyCode) {
        self.state.borrow_mut().pressed.remove(&key);
    }

    pub(crate) fn queue(&self, event: MouseEvent) {
        self.state.borrow_mut().queued.push(event);
    }

    pub(crate) fn context_hints(&self) -> Option<ContextConfig> {
        self.state.borrow().hints.clone()
    }

    /// `Some(true)` if the last surface was requested fullscreen
    pub(crate) fn requested_monitor(&self) -> Option<bool> {
        self.state.borrow().requested_monitor
    }

    pub(crate) fn title(&self) -> Option<String> {
        self.state.borrow().title.clone()
    }

    pub(crate) fn title_updates(&self) -> usize {
        self.state.borrow().title_updates
    }

    pub(crate) fn is_current(&self) -> bool {
        self.state.borrow().current
    }

    pub(crate) fn swaps(&self) -> usize {
        self.state.borrow().swaps
    }

    pub(crate) fn cursor_captured(&self) -> bool {
        self.state.borrow().cursor_captured
    }

    pub(crate) fn surface_destroyed(&self) -> bool {
        self.state.borrow().surface_destroyed
    }

    /// Hosts and surfaces sharing this state, not counting `self`
    pub(crate) fn outstanding_handles(&self) -> usize {
        Rc::strong_count(&self.state) - 1
    }
}

impl WindowHost for HeadlessHost {
    type Monitor = HeadlessMonitor;
    type Surface = HeadlessSurface;

    fn init() -> WindowResult<Self> {
        Err(WindowError::InitializationFailed)
    }

    fn apply_context_hints(&mut self, context: &ContextConfig) {
        self.state.borrow_mut().hints = Some(context.clone());
    }

    fn with_primary_monitor<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Self, Monitor<'_, Self::Monitor>) -> T,
    {
        let native = HeadlessMonitor;
        let dimensions = self.state.borrow().monitor;
        let monitor = match dimensions {
            Some((width, height)) => Monitor::new(&native, width, height),
            None => Monitor::none(),
        };
        f(self, monitor)
    }

    fn create_surface(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        monitor: Option<&Self::Monitor>,
    ) -> Option<Self::Surface> {
        let mut state = self.state.borrow_mut();
        state.requested_monitor = Some(monitor.is_some());
        if state.refuse_surfaces {
            return None;
        }
        state.title = Some(title.to_string());
        drop(state);

        Some(HeadlessSurface {
            state: self.state.clone(),
            size: (width, height),
        })
    }

    fn time(&self) -> f64 {
        self.state.borrow().time
    }
}

#[derive(Debug)]
pub(crate) struct HeadlessSurface {
    state: Rc<RefCell<HeadlessState>>,
    size: (u32, u32),
}

impl HostSurface for HeadlessSurface {
    fn should_close(&self) -> bool {
        self.state.borrow().should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.state.borrow_mut().should_close = should_close;
    }

    fn make_current(&mut self) {
        self.state.borrow_mut().current = true;
    }

    fn swap_buffers(&mut self) {
        self.state.borrow_mut().swaps += 1;
    }

    fn poll_events(&mut self, sink: &mut dyn FnMut(MouseEvent)) {
        let events = {
            let mut state = self.state.borrow_mut();
            let events = std::mem::take(&mut state.queued);
            if state.mouse_polling {
                events
            } else {
                Vec::new()
            }
        };
        // the borrow is released so listeners may inspect the host
        for event in events {
            sink(event);
        }
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.state.borrow().pressed.contains(&key)
    }

    fn set_cursor_captured(&mut self, captured: bool) {
        self.state.borrow_mut().cursor_captured = captured;
    }

    fn set_mouse_polling(&mut self, enabled: bool) {
        self.state.borrow_mut().mouse_polling = enabled;
    }

    fn set_title(&mut self, title: &str) {
        let mut state = self.state.borrow_mut();
        state.title = Some(title.to_string());
        state.title_updates += 1;
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl Drop for HeadlessSurface {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.surface_destroyed = true;
        state.current = false;
    }
}
