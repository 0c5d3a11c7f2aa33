//! # Meeting Time Planner
//!
//! A timezone comparison core for scheduling meetings across locations.
//!
//! ## Features
//! - Ordered list of timezone selections with add/edit/remove operations
//! - A shared base hour interpreted in the first selection's timezone
//! - Per-location wall-clock times with good/warning/bad suitability
//! - Graceful degradation for unrecognized timezone identifiers
//! - Deterministic dates through an injectable clock

/// Configuration management and environment variables
pub mod config;
/// Event facade owning the selection list and base hour
pub mod planner;
/// Time conversion, classification, and clock providers
pub mod services;
/// The ordered timezone selection list and common-zone catalog
pub mod store;
/// Utility functions for formatting and logging
pub mod utils;
