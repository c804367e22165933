//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - A test server over an in-memory credential store
//! - Authentication test helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;

// Re-export commonly used utilities
pub use auth_helpers::*;
