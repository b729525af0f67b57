use super::Printer;
use std::fmt::Display;
use tsgen_parser::ast::{
    Accessibility, Block, CallSignature, ModifierFlags, Parameter, ParameterAnnotation,
    ParameterList, Precedence, PropertyName, RestParameter, TypeParameter,
};

impl Printer<'_> {
    // =========================================================================
    // Output helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_verbatim(&mut self, text: &str) {
        self.writer.write_verbatim(text);
    }

    /// Write a leaf node through its `Display` rendering.
    pub(super) fn write_display(&mut self, value: &impl Display) {
        self.writer.write(&value.to_string());
    }

    pub(super) fn write_space(&mut self) {
        self.writer.write_space();
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn ensure_line_start(&mut self) {
        self.writer.ensure_line_start();
    }

    pub(super) fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    pub(super) fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Emit `items` separated by `", "`.
    pub(super) fn emit_comma_list<T>(&mut self, items: &[T], mut emit: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            emit(self, item);
        }
    }

    // =========================================================================
    // Modifiers
    // =========================================================================

    /// Modifier keywords, each followed by a space.
    pub(super) fn emit_modifiers(&mut self, modifiers: ModifierFlags) {
        for keyword in modifiers.keywords() {
            self.write(keyword);
            self.write_space();
        }
    }

    pub(super) fn emit_accessibility(&mut self, accessibility: Option<Accessibility>) {
        if let Some(accessibility) = accessibility {
            self.write(accessibility.as_str());
            self.write_space();
        }
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// `{ ... }` with one statement per line; an empty block is `{ }`. The
    /// closing brace ends the current line only when a caller writes one.
    pub(super) fn emit_block(&mut self, block: &Block) {
        if block.statements.is_empty() {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for statement in &block.statements {
            self.emit_statement(statement);
        }
        self.decrease_indent();
        self.write("}");
    }

    /// The opening of a declaration body that is always multi-line.
    pub(super) fn open_body(&mut self) {
        self.write(" {");
        self.write_line();
        self.increase_indent();
    }

    pub(super) fn close_body(&mut self) {
        self.ensure_line_start();
        self.decrease_indent();
        self.write("}");
    }

    // =========================================================================
    // Names
    // =========================================================================

    pub(super) fn emit_property_name(&mut self, name: &PropertyName) {
        match name {
            PropertyName::Identifier(identifier) => self.write(identifier.as_str()),
            PropertyName::String(literal) => self.write_display(literal),
            PropertyName::Numeric(literal) => self.write_display(literal),
            PropertyName::Computed(expression) => {
                self.write("[");
                self.emit_operand(expression, Precedence::Assignment);
                self.write("]");
            }
        }
    }

    // =========================================================================
    // Signatures and parameters
    // =========================================================================

    pub(super) fn emit_type_parameters(&mut self, type_parameters: &[TypeParameter]) {
        if type_parameters.is_empty() {
            return;
        }
        self.write("<");
        self.emit_comma_list(type_parameters, |p, type_parameter| {
            p.write(type_parameter.name.as_str());
            if let Some(constraint) = &type_parameter.constraint {
                p.write(" extends ");
                p.emit_type(constraint);
            }
            if let Some(default) = &type_parameter.default {
                p.write(" = ");
                p.emit_type(default);
            }
        });
        self.write(">");
    }

    /// `<T>(params): R`
    pub(super) fn emit_call_signature(&mut self, signature: &CallSignature) {
        self.emit_type_parameters(&signature.type_parameters);
        self.emit_parameter_list(&signature.parameters);
        if let Some(return_type) = &signature.return_type {
            self.write(": ");
            self.emit_type(return_type);
        }
    }

    pub(super) fn emit_parameter_list(&mut self, parameters: &ParameterList) {
        self.write("(");
        let mut first = true;
        for parameter in parameters.iter() {
            if !first {
                self.write(", ");
            }
            first = false;
            self.emit_parameter(parameter);
        }
        if let Some(rest) = parameters.rest() {
            if !first {
                self.write(", ");
            }
            self.emit_rest_parameter(rest);
        }
        self.write(")");
    }

    pub(super) fn emit_parameter(&mut self, parameter: &Parameter) {
        self.emit_accessibility(parameter.accessibility);
        if parameter.readonly {
            self.write("readonly ");
        }
        self.write(parameter.name.as_str());
        if parameter.question {
            self.write("?");
        }
        match &parameter.annotation {
            Some(ParameterAnnotation::Type(ty)) => {
                self.write(": ");
                self.emit_type(ty);
            }
            Some(ParameterAnnotation::StringLiteral(literal)) => {
                self.write(": ");
                self.write_display(literal);
            }
            None => {}
        }
        if let Some(initializer) = &parameter.initializer {
            self.write(" = ");
            self.emit_operand(initializer, Precedence::Assignment);
        }
    }

    fn emit_rest_parameter(&mut self, rest: &RestParameter) {
        self.write("...");
        self.write(rest.name.as_str());
        if let Some(ty) = &rest.ty {
            self.write(": ");
            self.emit_type(ty);
        }
    }
}
