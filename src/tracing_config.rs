//! Tracing configuration for debugging the lexer, parser and emitter.
//!
//! Supports three output formats controlled by `TSGEN_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, which shows
//!   speculative parses nested under the production that started them
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Human-readable tree of parser spans
//! TSGEN_LOG=trace TSGEN_LOG_FORMAT=tree cargo test -p tsgen --test round_trip_tests
//!
//! # Fine-grained filtering
//! TSGEN_LOG="tsgen_scanner=debug,tsgen_parser=trace" TSGEN_LOG_FORMAT=json ...
//! ```
//!
//! The subscriber is only initialised when `TSGEN_LOG` (or `RUST_LOG`) is
//! set, so there is no overhead in normal use.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `TSGEN_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TSGEN_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `TSGEN_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("TSGEN_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TSGEN_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with emitted source on stdout. Calling
/// this more than once is harmless; later calls leave the first subscriber
/// in place.
pub fn init_tracing() {
    let has_tsgen_log = std::env::var("TSGEN_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_tsgen_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tests;
