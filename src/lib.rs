//! inferd - Minimal model-serving HTTP service
//!
//! Loads a pre-trained, serialized regression artifact from disk at startup
//! and exposes it through a single prediction endpoint plus a health check.
//!
//! # Modules
//!
//! - [`artifact`] - Model artifact loading and the prediction capability
//! - [`schema`] - Wire-payload schemas mapping JSON bodies to feature rows
//! - [`server`] - HTTP server with the prediction REST API
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types

// Core error handling
pub mod error;

// Model artifact
pub mod artifact;

// Wire schemas
pub mod schema;

// Services
pub mod server;
pub mod cli;

pub use error::{InferdError, Result};
