//! # gl_window
//!
//! Single-window OpenGL context management on top of GLFW.
//!
//! ## Features
//!
//! - **Window Lifecycle**: windowed or exclusive fullscreen creation, close, destroy
//! - **OpenGL Context**: core profile 3.3+ with multisampling, bound per thread
//! - **Input**: key state queries and mouse move/click/scroll listeners
//! - **FPS Overlay**: frames per second shown in the title bar once a second
//! - **Configuration**: TOML and RON config files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_window::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     gl_window::foundation::logging::init_with_level("info");
//!
//!     let config = WindowConfig::new("Demo");
//!     let mut window = Window::try_new(&config)?;
//!
//!     window.make_context();
//!     window.init_timer();
//!     while !window.is_closed() {
//!         window.process_events();
//!         window.show_fps();
//!         window.render();
//!     }
//!     window.destroy();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core configuration
pub mod core;

pub mod config;
pub mod foundation;
pub mod input;
pub mod render;

pub use crate::core::config::{ApplicationConfig, ContextConfig, WindowConfig};
pub use input::{ButtonAction, KeyCode, MouseButton, MouseEvent, MouseListeners};
pub use render::{Window, WindowError, WindowResult};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        Window, WindowError, WindowResult,
        core::config::{ApplicationConfig, WindowConfig, ContextConfig, Config, ConfigError},
        foundation::time::FpsCounter,
        input::{KeyCode, MouseButton, ButtonAction, MouseEvent, MouseListeners},
        render::{WindowHost, HostSurface, GlfwHost},
    };
}
