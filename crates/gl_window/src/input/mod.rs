//! Input types and mouse listener dispatch
//!
//! Backend-neutral key and mouse types. Hosts translate their native events
//! into [`MouseEvent`]s; the window hands them to the attached
//! [`MouseListeners`] while events are being processed.

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Any extra button, numbered from 0 like the host does
    Other(u8),
}

/// Transition reported for a mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Button went down
    Press,
    /// Button went up
    Release,
}

/// Mouse input delivered by the host during event processing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    /// Cursor moved to window coordinates (x, y)
    Moved {
        /// Horizontal position
        x: f64,
        /// Vertical position
        y: f64,
    },
    /// Button pressed or released while the cursor was at (x, y)
    Button {
        /// Which button
        button: MouseButton,
        /// Press or release
        action: ButtonAction,
        /// Cursor x at the time of the event
        x: f64,
        /// Cursor y at the time of the event
        y: f64,
    },
    /// Scroll wheel or trackpad delta
    Scroll {
        /// Horizontal offset
        dx: f64,
        /// Vertical offset
        dy: f64,
    },
}

type MoveListener = Box<dyn FnMut(f64, f64)>;
type ClickListener = Box<dyn FnMut(MouseButton, ButtonAction, f64, f64)>;
type ScrollListener = Box<dyn FnMut(f64, f64)>;

/// The three mouse handlers attached to a window
///
/// Handlers run synchronously on the thread that processes events, so they
/// may capture non-`Send` state such as `Rc<RefCell<_>>`.
pub struct MouseListeners {
    on_move: MoveListener,
    on_click: ClickListener,
    on_scroll: ScrollListener,
}

impl MouseListeners {
    /// Bundle the move, click and scroll handlers
    pub fn new<M, C, S>(on_move: M, on_click: C, on_scroll: S) -> Self
    where
        M: FnMut(f64, f64) + 'static,
        C: FnMut(MouseButton, ButtonAction, f64, f64) + 'static,
        S: FnMut(f64, f64) + 'static,
    {
        Self {
            on_move: Box::new(on_move),
            on_click: Box::new(on_click),
            on_scroll: Box::new(on_scroll),
        }
    }

    /// Route one event to the matching handler
    pub fn dispatch(&mut self, event: MouseEvent) {
        match event {
            MouseEvent::Moved { x, y } => (self.on_move)(x, y),
            MouseEvent::Button { button, action, x, y } => (self.on_click)(button, action, x, y),
            MouseEvent::Scroll { dx, dy } => (self.on_scroll)(dx, dy),
        }
    }
}

impl std::fmt::Debug for MouseListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseListeners").finish_non_exhaustive()
    }
}
