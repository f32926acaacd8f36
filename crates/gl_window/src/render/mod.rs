//! # Rendering System
//!
//! Window and context management for OpenGL rendering. Drawing itself is left
//! to the application; this module owns everything between the render loop
//! and the platform: the native window, context binding, buffer
//! presentation, event pumping and the FPS title overlay.
//!
//! ## Architecture
//!
//! - **Window**: lifecycle, input queries, mouse listeners, FPS overlay
//! - **OpenGL Backend**: GLFW implementation of the host contract

// Public modules for application use
pub mod window;

/// Graphics backend implementations
///
/// Contains the platform windowing implementation. Currently GLFW with
/// OpenGL core profile contexts.
pub mod opengl;

// High-level APIs that applications should use
pub use window::{Window, WindowError, WindowResult, Monitor, Subsystem};
pub use window::backend::{WindowHost, HostSurface};
pub use opengl::{GlfwHost, GlfwSurface};
