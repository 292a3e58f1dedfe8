//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the playback core:
//! - Logging and tracing infrastructure
//! - Configuration management with fail-fast bridge validation
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the playback cache depends
//! on. It decides which platform bridges get injected and how diagnostics
//! reach the host.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder, DEFAULT_THROTTLE_WINDOW_MS};
pub use error::{Error, Result};
