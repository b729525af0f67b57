//! Pretty-printer for tsgen ASTs.
//!
//! This crate provides:
//! - `EmitOptions` - Line endings, indentation and comment layout, loadable
//!   from JSON
//! - `SourceWriter` - Indentation-aware output buffer
//! - `Printer` and the `Emit` trait - Precedence-aware rendering of every
//!   node family
//! - `CodeDisplay` - `to_string`-style rendering with default options
//!
//! Output is deterministic: the same tree and options always produce the same
//! text. Parentheses are inserted wherever operator precedence, `new` callee
//! rules or statement-position ambiguities require them.

pub mod options;
pub use options::EmitOptions;

pub mod source_writer;
pub use source_writer::SourceWriter;

mod emitter;
pub use emitter::{Emit, Printer};

mod display;
pub use display::CodeDisplay;

use tracing::trace;

/// Render `node` as source text.
#[tracing::instrument(level = "trace", skip_all)]
pub fn emit<T: Emit + ?Sized>(node: &T, options: &EmitOptions) -> String {
    let mut printer = Printer::new(options);
    node.emit_to(&mut printer);
    let output = printer.finish();
    trace!(bytes = output.len(), "emitted");
    output
}
