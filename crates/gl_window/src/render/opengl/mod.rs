//! OpenGL backend
//!
//! GLFW-based implementation of the window host contract, creating core
//! profile OpenGL contexts.

pub mod window;

pub use window::{GlfwHost, GlfwSurface};
