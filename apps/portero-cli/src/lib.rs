//! portero CLI library
//!
//! Exposes internal modules for integration testing. The CLI binary
//! entry point stays in main.rs.

// Error types and exit-code mapping
pub mod error;

// Configuration paths and settings
pub mod config;

// Stored login session and its credential provider
pub mod session;
