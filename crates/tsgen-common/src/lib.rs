//! Common types and utilities for the tsgen crates.
//!
//! This crate provides foundational types used across all tsgen crates:
//! - Source locations (`TextLocation`) for diagnostics
//! - Common enums (`NewLineKind`)
//! - Numeric and recursion limits

// Line/column source locations
pub mod location;
pub use location::TextLocation;

// Common types shared by the scanner and the emitter
pub mod common;
pub use common::NewLineKind;

// Centralized limits and thresholds
pub mod limits;
