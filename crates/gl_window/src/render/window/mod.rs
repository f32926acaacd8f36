//! Window management subsystem
//!
//! This module owns the application window: one native window, its OpenGL
//! context, and the FPS overlay in its title bar.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Public API (handle.rs)
//!         └─────┬─────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ WindowHost /    │ ← Host contract (backend.rs)
//!      │ HostSurface     │
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ opengl::GlfwHost      │ ← GLFW backend (../opengl/window.rs)
//!   └───────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`handle`**: the [`Window`] lifecycle, input and FPS overlay
//! - **`backend`**: the host contract
//! - **`monitor`**: primary monitor resolution
//! - **`subsystem`**: counted acquire/release of the host library

pub mod handle;
pub mod backend;
pub mod monitor;
pub mod subsystem;

#[cfg(test)]
pub(crate) mod headless;

use thiserror::Error;

// Re-export the main public type for convenience
pub use handle::Window;
pub use monitor::Monitor;
pub use subsystem::Subsystem;

/// Window management errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The host windowing library could not be initialized
    #[error("Windowing subsystem initialization failed")]
    InitializationFailed,

    /// The host refused to create the window or its context
    #[error("Window creation failed")]
    CreationFailed,

    /// Fullscreen was requested without an available monitor
    #[error("No monitor available for a fullscreen window")]
    NoMonitor,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;
