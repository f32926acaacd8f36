//! # Core Module
//!
//! Shared configuration types used by the window and by applications.
//!
//! ## Organization
//!
//! - **Config**: window, context and application configuration

pub mod config;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    WindowConfig,
    ContextConfig,
    Config,
    ConfigError,
};
