use super::Printer;
use tsgen_parser::ast::{
    Block, ClassDeclaration, ClassElement, ClassMember, Declaration, EnumDeclaration,
    FunctionDeclaration, ImportDeclaration, InterfaceDeclaration, NamedImportBindings,
    NamespaceDeclaration, Precedence, TypeAliasDeclaration, TypeReference,
};

impl Printer<'_> {
    // =========================================================================
    // Declarations
    // =========================================================================

    /// Emit a declaration with its trivia and end its line.
    pub(super) fn emit_declaration_statement(&mut self, declaration: &Declaration) {
        self.emit_declaration_inline(declaration);
        self.ensure_line_start();
    }

    pub(super) fn emit_declaration_inline(&mut self, declaration: &Declaration) {
        let trivia = declaration.trivia();
        self.emit_leading_trivia(&trivia.leading);
        match declaration {
            Declaration::Function(function) => self.emit_function_declaration(function),
            Declaration::Class(class) => self.emit_class_declaration(class),
            Declaration::Interface(interface) => self.emit_interface_declaration(interface),
            Declaration::TypeAlias(alias) => self.emit_type_alias_declaration(alias),
            Declaration::Enum(enum_declaration) => self.emit_enum_declaration(enum_declaration),
            Declaration::Namespace(namespace) => self.emit_namespace_declaration(namespace),
            Declaration::Import(import) => self.emit_import_declaration(import),
        }
        self.emit_trailing_trivia(&trivia.trailing);
    }

    fn emit_function_declaration(&mut self, function: &FunctionDeclaration) {
        self.emit_modifiers(function.modifiers);
        self.write("function");
        if let Some(name) = &function.name {
            self.write_space();
            self.write(name.as_str());
        }
        self.emit_call_signature(&function.signature);
        match &function.body {
            Some(body) => {
                self.write_space();
                self.emit_block(body);
            }
            None => self.write(";"),
        }
    }

    fn emit_heritage(&mut self, keyword: &str, references: &[TypeReference]) {
        if references.is_empty() {
            return;
        }
        self.write_space();
        self.write(keyword);
        self.write_space();
        self.emit_comma_list(references, |p, reference| p.emit_type_reference(reference));
    }

    // =========================================================================
    // Classes
    // =========================================================================

    fn emit_class_declaration(&mut self, class: &ClassDeclaration) {
        self.emit_modifiers(class.modifiers);
        self.write("class");
        if let Some(name) = &class.name {
            self.write_space();
            self.write(name.as_str());
        }
        self.emit_type_parameters(&class.type_parameters);
        if let Some(extends) = &class.extends {
            self.emit_heritage("extends", std::slice::from_ref(extends));
        }
        self.emit_heritage("implements", &class.implements);
        self.open_body();
        for element in &class.members {
            self.emit_class_element(element);
        }
        self.close_body();
    }

    /// One class member on its own line, with its comments and modifiers.
    pub(super) fn emit_class_element(&mut self, element: &ClassElement) {
        self.emit_leading_trivia(&element.trivia.leading);
        self.emit_accessibility(element.accessibility);
        self.emit_modifiers(element.modifiers);
        match &element.member {
            ClassMember::Constructor(constructor) => {
                self.write("constructor");
                self.emit_parameter_list(&constructor.parameters);
                self.emit_optional_body(constructor.body.as_ref());
            }
            ClassMember::Property(property) => {
                self.emit_property_name(&property.name);
                if property.optional {
                    self.write("?");
                }
                if let Some(ty) = &property.ty {
                    self.write(": ");
                    self.emit_type(ty);
                }
                if let Some(initializer) = &property.initializer {
                    self.write(" = ");
                    self.emit_operand(initializer, Precedence::Assignment);
                }
                self.write(";");
            }
            ClassMember::Method(method) => {
                self.emit_property_name(&method.name);
                if method.optional {
                    self.write("?");
                }
                self.emit_call_signature(&method.signature);
                self.emit_optional_body(method.body.as_ref());
            }
            ClassMember::GetAccessor(accessor) => {
                self.write("get ");
                self.emit_property_name(&accessor.name);
                self.write("()");
                if let Some(return_type) = &accessor.return_type {
                    self.write(": ");
                    self.emit_type(return_type);
                }
                self.write_space();
                self.emit_block(&accessor.body);
            }
            ClassMember::SetAccessor(accessor) => {
                self.write("set ");
                self.emit_property_name(&accessor.name);
                self.write("(");
                self.emit_parameter(&accessor.parameter);
                self.write(") ");
                self.emit_block(&accessor.body);
            }
            ClassMember::Index(index) => {
                self.emit_index_signature(index);
                self.write(";");
            }
        }
        self.emit_trailing_trivia(&element.trivia.trailing);
        self.ensure_line_start();
    }

    fn emit_optional_body(&mut self, body: Option<&Block>) {
        match body {
            Some(body) => {
                self.write_space();
                self.emit_block(body);
            }
            None => self.write(";"),
        }
    }

    // =========================================================================
    // Interfaces, type aliases, enums
    // =========================================================================

    fn emit_interface_declaration(&mut self, interface: &InterfaceDeclaration) {
        self.emit_modifiers(interface.modifiers);
        self.write("interface ");
        self.write(interface.name.as_str());
        self.emit_type_parameters(&interface.type_parameters);
        self.emit_heritage("extends", &interface.extends);
        self.open_body();
        for member in &interface.members {
            self.emit_type_member(member);
            self.write(";");
            self.write_line();
        }
        self.close_body();
    }

    fn emit_type_alias_declaration(&mut self, alias: &TypeAliasDeclaration) {
        self.emit_modifiers(alias.modifiers);
        self.write("type ");
        self.write(alias.name.as_str());
        self.emit_type_parameters(&alias.type_parameters);
        self.write(" = ");
        self.emit_type(&alias.ty);
        self.write(";");
    }

    fn emit_enum_declaration(&mut self, enum_declaration: &EnumDeclaration) {
        self.emit_modifiers(enum_declaration.modifiers);
        if enum_declaration.is_const {
            self.write("const ");
        }
        self.write("enum ");
        self.write(enum_declaration.name.as_str());
        self.open_body();
        let count = enum_declaration.members.len();
        for (i, member) in enum_declaration.members.iter().enumerate() {
            self.emit_leading_trivia(&member.trivia.leading);
            self.emit_property_name(&member.name);
            if let Some(initializer) = &member.initializer {
                self.write(" = ");
                self.emit_operand(initializer, Precedence::Assignment);
            }
            if i + 1 < count {
                self.write(",");
            }
            self.emit_trailing_trivia(&member.trivia.trailing);
            self.ensure_line_start();
        }
        self.close_body();
    }

    // =========================================================================
    // Namespaces and imports
    // =========================================================================

    fn emit_namespace_declaration(&mut self, namespace: &NamespaceDeclaration) {
        self.emit_modifiers(namespace.modifiers);
        self.write("namespace ");
        self.write_display(&namespace.name);
        self.open_body();
        for statement in &namespace.body {
            self.emit_statement(statement);
        }
        self.close_body();
    }

    /// `import d, { a as b } from 'm';`, `import * as ns from 'm';` or the
    /// side-effect form `import 'm';`.
    fn emit_import_declaration(&mut self, import: &ImportDeclaration) {
        self.write("import ");
        if let Some(clause) = &import.clause {
            if let Some(default) = clause.default_binding() {
                self.write(default.as_str());
                if clause.bindings().is_some() {
                    self.write(", ");
                }
            }
            match clause.bindings() {
                Some(NamedImportBindings::Namespace(name)) => {
                    self.write("* as ");
                    self.write(name.as_str());
                }
                Some(NamedImportBindings::Named(specifiers)) if specifiers.is_empty() => {
                    self.write("{}");
                }
                Some(NamedImportBindings::Named(specifiers)) => {
                    self.write("{ ");
                    self.emit_comma_list(specifiers, |p, specifier| {
                        if let Some(property_name) = &specifier.property_name {
                            p.write(property_name.as_str());
                            p.write(" as ");
                        }
                        p.write(specifier.name.as_str());
                    });
                    self.write(" }");
                }
                None => {}
            }
            self.write(" from ");
        }
        self.write_display(&import.module_specifier);
        self.write(";");
    }
}
