//! # Window Configuration
//!
//! Configuration types for window creation, the OpenGL context request and
//! application-wide settings such as logging.
//!
//! ## Configuration Categories
//!
//! - **Context Config**: OpenGL version and multisampling requested at creation
//! - **Window Config**: title, fullscreen request and the windowed resolution
//! - **Application Config**: window plus logging settings, loadable from TOML/RON

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};

/// Lowest OpenGL version a core profile context may request.
pub const MIN_CORE_VERSION: (u32, u32) = (3, 3);

/// Highest multisample count accepted by validation.
pub const MAX_SAMPLES: u32 = 16;

/// Resolution used for windowed surfaces unless configured otherwise.
pub const DEFAULT_RESOLUTION: (u32, u32) = (800, 600);

/// # Context Configuration
///
/// Creation-time hints for the OpenGL context. The profile is always core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested OpenGL version (major, minor)
    pub version: (u32, u32),
    /// Samples per pixel for the default framebuffer, 0 disables MSAA
    pub samples: u32,
}

impl ContextConfig {
    /// Create the default context request: OpenGL 3.3 core with 4x MSAA
    pub const fn new() -> Self {
        Self {
            version: MIN_CORE_VERSION,
            samples: 4,
        }
    }

    /// Set the requested OpenGL version
    pub const fn with_version(mut self, major: u32, minor: u32) -> Self {
        self.version = (major, minor);
        self
    }

    /// Set the multisample count
    pub const fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Validate the context request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version < MIN_CORE_VERSION {
            return Err(ConfigError::Invalid(format!(
                "OpenGL core profile needs at least {}.{}, got {}.{}",
                MIN_CORE_VERSION.0, MIN_CORE_VERSION.1, self.version.0, self.version.1
            )));
        }
        if !(self.samples == 0 || self.samples.is_power_of_two()) || self.samples > MAX_SAMPLES {
            return Err(ConfigError::Invalid(format!(
                "Sample count must be 0 or a power of two up to {MAX_SAMPLES}, got {}",
                self.samples
            )));
        }
        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Window Configuration
///
/// Everything needed to create the application window. `width`/`height` only
/// apply to windowed mode; a fullscreen window takes the monitor resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Base window caption, also used by the FPS overlay
    pub title: String,
    /// Request an exclusive fullscreen surface on the primary monitor
    pub fullscreen: bool,
    /// Windowed width in pixels
    pub width: u32,
    /// Windowed height in pixels
    pub height: u32,
    /// Create a windowed surface when fullscreen is requested but no monitor is found
    pub fullscreen_fallback: bool,
    /// OpenGL context request
    pub context: ContextConfig,
}

impl WindowConfig {
    /// Create a windowed configuration with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fullscreen: false,
            width: DEFAULT_RESOLUTION.0,
            height: DEFAULT_RESOLUTION.1,
            fullscreen_fallback: true,
            context: ContextConfig::default(),
        }
    }

    /// Request fullscreen or windowed mode
    pub const fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Set the windowed resolution
    pub const fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set whether a missing monitor downgrades fullscreen to windowed mode
    pub const fn with_fullscreen_fallback(mut self, fallback: bool) -> Self {
        self.fullscreen_fallback = fallback;
        self
    }

    /// Set the OpenGL context request
    pub const fn with_context(mut self, context: ContextConfig) -> Self {
        self.context = context;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Invalid("Window title cannot be empty".to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "Windowed resolution must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        self.context.validate()
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("gl_window")
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration applications load from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Window creation settings
    pub window: WindowConfig,
}

impl ApplicationConfig {
    /// Create a new application configuration with defaults
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::new(title),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self::new("gl_window")
    }
}

impl Config for ApplicationConfig {}

impl Config for WindowConfig {}
