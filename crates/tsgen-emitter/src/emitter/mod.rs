//! The printer: walks AST nodes and writes them through a [`SourceWriter`].
//!
//! Node families are split across submodules the same way the parser splits
//! its grammar:
//! - `expressions` - precedence-aware expression output
//! - `types` - type annotations and object type members
//! - `statements` - statements and embedded statement layout
//! - `declarations` - functions, classes, interfaces, enums, namespaces,
//!   imports
//! - `comments` - comment and JSDoc trivia
//! - `helpers` - writer delegation and list/modifier helpers

mod comments;
mod declarations;
mod expressions;
mod helpers;
mod statements;
mod types;

use crate::options::EmitOptions;
use crate::source_writer::SourceWriter;
use tsgen_parser::ast::{
    CallSignature, ClassElement, Declaration, EntityName, Expression, Identifier, Module,
    Parameter, PropertyName, Statement, TriviaNode, Type, TypeMember,
};

/// A node that can be written as source text.
pub trait Emit {
    fn emit_to(&self, printer: &mut Printer<'_>);
}

/// Emitter state for one output buffer.
pub struct Printer<'o> {
    writer: SourceWriter,
    options: &'o EmitOptions,
}

impl<'o> Printer<'o> {
    pub fn new(options: &'o EmitOptions) -> Self {
        Printer {
            writer: SourceWriter::new(options.indentation(), options.new_line()),
            options,
        }
    }

    pub fn options(&self) -> &EmitOptions {
        self.options
    }

    /// The text written so far.
    pub fn output(&self) -> &str {
        self.writer.output()
    }

    pub fn finish(self) -> String {
        self.writer.into_output()
    }
}

impl Emit for Expression {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_expression(self);
    }
}

impl Emit for Type {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_type(self);
    }
}

impl Emit for Statement {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_statement(self);
    }
}

impl Emit for Declaration {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_declaration_statement(self);
    }
}

impl Emit for Module {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        for statement in &self.statements {
            printer.emit_statement(statement);
        }
    }
}

impl Emit for ClassElement {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_class_element(self);
    }
}

impl Emit for TypeMember {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_type_member(self);
    }
}

impl Emit for CallSignature {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_call_signature(self);
    }
}

impl Emit for Parameter {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_parameter(self);
    }
}

impl Emit for PropertyName {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_property_name(self);
    }
}

impl Emit for Identifier {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.write(self.as_str());
    }
}

impl Emit for EntityName {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.write_display(self);
    }
}

impl Emit for TriviaNode {
    fn emit_to(&self, printer: &mut Printer<'_>) {
        printer.emit_trivia_node(self);
    }
}

#[cfg(test)]
#[path = "../../tests/emitter_tests.rs"]
mod tests;
