//! Parser state - declarations (functions, classes, interfaces, type
//! aliases, enums, namespaces, imports) and their modifiers

use super::state_expressions::string_literal_from;
use super::{ParseResult, Parser};
use crate::ast::*;
use tsgen_scanner::TokenKind;

impl Parser {
    /// Whether the current token starts a declaration. Contextual keywords
    /// (`interface`, `type`, `namespace`, ...) only count when followed by
    /// what the declaration needs next.
    pub(crate) fn is_start_of_declaration(&self) -> bool {
        match self.token() {
            TokenKind::Function
            | TokenKind::Class
            | TokenKind::Enum
            | TokenKind::Export => true,
            TokenKind::Import => self.token_at(1) != TokenKind::OpenParen,
            TokenKind::Const => self.token_at(1) == TokenKind::Enum,
            TokenKind::Interface | TokenKind::Type | TokenKind::Namespace | TokenKind::Module => {
                self.token_at(1).is_identifier_like()
            }
            TokenKind::Abstract => self.token_at(1) == TokenKind::Class,
            TokenKind::Declare => matches!(
                self.token_at(1),
                TokenKind::Var
                    | TokenKind::Let
                    | TokenKind::Const
                    | TokenKind::Function
                    | TokenKind::Class
                    | TokenKind::Abstract
                    | TokenKind::Enum
                    | TokenKind::Interface
                    | TokenKind::Type
                    | TokenKind::Namespace
                    | TokenKind::Module
            ),
            _ => false,
        }
    }

    pub(crate) fn parse_declaration_statement(&mut self) -> ParseResult<Statement> {
        let modifiers = self.parse_declaration_modifiers()?;
        let declaration = match self.token() {
            TokenKind::Var | TokenKind::Let => return self.parse_variable_statement(modifiers),
            TokenKind::Const if self.token_at(1) != TokenKind::Enum => {
                return self.parse_variable_statement(modifiers);
            }
            TokenKind::Function => self.parse_function_declaration(modifiers)?,
            TokenKind::Class => self.parse_class_declaration(modifiers)?,
            TokenKind::Interface => self.parse_interface_declaration(modifiers)?,
            TokenKind::Type => self.parse_type_alias_declaration(modifiers)?,
            TokenKind::Enum | TokenKind::Const => self.parse_enum_declaration(modifiers)?,
            TokenKind::Namespace | TokenKind::Module => {
                self.parse_namespace_declaration(modifiers)?
            }
            TokenKind::Import if modifiers.is_empty() => self.parse_import_declaration()?,
            _ => return Err(self.error(format!("Declaration expected, found {}", self.reader.peek()))),
        };
        Ok(Statement::Declaration(declaration))
    }

    /// `export`, `export default`, `declare`, `abstract`, in that order.
    fn parse_declaration_modifiers(&mut self) -> ParseResult<ModifierFlags> {
        let mut modifiers = ModifierFlags::empty();

        if self.is_token(TokenKind::Export) {
            let is_export_clause = match self.token_at(1) {
                TokenKind::OpenBrace | TokenKind::Asterisk | TokenKind::Equals | TokenKind::Import => {
                    true
                }
                TokenKind::Default => !matches!(
                    self.token_at(2),
                    TokenKind::Function | TokenKind::Class | TokenKind::Abstract | TokenKind::Interface
                ),
                _ => false,
            };
            if is_export_clause {
                return Err(self.not_yet_implemented("Export clauses"));
            }
            self.next_token();
            modifiers |= ModifierFlags::EXPORT;
            if self.parse_optional(TokenKind::Default) {
                modifiers |= ModifierFlags::DEFAULT;
            }
        }
        if self.parse_optional(TokenKind::Declare) {
            modifiers |= ModifierFlags::DECLARE;
        }
        if self.is_token(TokenKind::Abstract) && self.token_at(1) == TokenKind::Class {
            self.next_token();
            modifiers |= ModifierFlags::ABSTRACT;
        }

        Ok(modifiers)
    }

    /// The declaration name, which `export default` functions and classes
    /// may omit.
    fn parse_optional_declaration_name(
        &mut self,
        modifiers: ModifierFlags,
    ) -> ParseResult<Option<Identifier>> {
        if self.is_identifier() && !self.is_token(TokenKind::Implements) {
            Ok(Some(self.parse_identifier()?))
        } else if modifiers.contains(ModifierFlags::DEFAULT) {
            Ok(None)
        } else {
            Err(self.error("Identifier expected"))
        }
    }

    fn parse_optional_type_parameters(&mut self) -> ParseResult<Vec<TypeParameter>> {
        if self.is_token(TokenKind::LessThan) {
            self.parse_type_parameters()
        } else {
            Ok(Vec::new())
        }
    }

    // =========================================================================
    // Functions
    // =========================================================================

    fn parse_function_declaration(&mut self, modifiers: ModifierFlags) -> ParseResult<Declaration> {
        self.parse_expected(TokenKind::Function)?;
        let name = self.parse_optional_declaration_name(modifiers)?;
        let signature = self.parse_call_signature()?;
        let body = if self.is_token(TokenKind::OpenBrace) {
            Some(self.parse_function_body()?)
        } else {
            self.parse_semicolon()?;
            None
        };
        Ok(Declaration::Function(FunctionDeclaration {
            trivia: Trivia::default(),
            modifiers,
            name,
            signature,
            body,
        }))
    }

    // =========================================================================
    // Classes
    // =========================================================================

    fn parse_class_declaration(&mut self, modifiers: ModifierFlags) -> ParseResult<Declaration> {
        self.parse_expected(TokenKind::Class)?;
        let name = self.parse_optional_declaration_name(modifiers)?;
        let type_parameters = self.parse_optional_type_parameters()?;

        let extends = if self.parse_optional(TokenKind::Extends) {
            Some(self.parse_type_reference()?)
        } else {
            None
        };
        let implements = if self.parse_optional(TokenKind::Implements) {
            self.parse_heritage_list()?
        } else {
            Vec::new()
        };

        self.parse_expected(TokenKind::OpenBrace)?;
        let mut members = Vec::new();
        while !self.is_token(TokenKind::CloseBrace) {
            if self.parse_optional(TokenKind::Semicolon) {
                continue;
            }
            if self.is_token(TokenKind::EndOfFile) {
                return Err(self.error("'}' expected, found end of input"));
            }
            members.push(self.parse_class_element()?);
        }
        self.parse_expected(TokenKind::CloseBrace)?;

        Ok(Declaration::Class(ClassDeclaration {
            trivia: Trivia::default(),
            modifiers,
            name,
            type_parameters,
            extends,
            implements,
            members,
        }))
    }

    fn parse_heritage_list(&mut self) -> ParseResult<Vec<TypeReference>> {
        let mut types = vec![self.parse_type_reference()?];
        while self.parse_optional(TokenKind::Comma) {
            types.push(self.parse_type_reference()?);
        }
        Ok(types)
    }

    fn parse_class_element(&mut self) -> ParseResult<ClassElement> {
        let mut accessibility = None;
        let mut modifiers = ModifierFlags::empty();

        // A modifier keyword followed by something other than a member name
        // is itself the member name (`static: number`, `readonly() {}`).
        while self.next_is_property_name() {
            match self.token() {
                TokenKind::Public if accessibility.is_none() => {
                    accessibility = Some(Accessibility::Public);
                }
                TokenKind::Protected if accessibility.is_none() => {
                    accessibility = Some(Accessibility::Protected);
                }
                TokenKind::Private if accessibility.is_none() => {
                    accessibility = Some(Accessibility::Private);
                }
                TokenKind::Static => modifiers |= ModifierFlags::STATIC,
                TokenKind::Abstract => modifiers |= ModifierFlags::ABSTRACT,
                TokenKind::Readonly => modifiers |= ModifierFlags::READONLY,
                _ => break,
            }
            self.next_token();
        }

        let member = self.parse_class_member(&mut modifiers)?;
        Ok(ClassElement {
            trivia: Trivia::default(),
            accessibility,
            modifiers,
            member,
        })
    }

    fn parse_class_member(&mut self, modifiers: &mut ModifierFlags) -> ParseResult<ClassMember> {
        if self.is_token(TokenKind::Constructor) && self.token_at(1) == TokenKind::OpenParen {
            self.next_token();
            let parameters = self.parse_parameter_list()?;
            let body = self.parse_optional_method_body()?;
            return Ok(ClassMember::Constructor(ConstructorDeclaration {
                parameters,
                body,
            }));
        }

        if self.is_index_signature() {
            let readonly = modifiers.contains(ModifierFlags::READONLY);
            modifiers.remove(ModifierFlags::READONLY);
            let signature = self.parse_index_signature(readonly)?;
            self.parse_semicolon()?;
            return Ok(ClassMember::Index(signature));
        }

        if self.is_token(TokenKind::Get) && self.next_is_property_name() {
            return Ok(ClassMember::GetAccessor(self.parse_get_accessor()?));
        }
        if self.is_token(TokenKind::Set) && self.next_is_property_name() {
            return Err(self.not_yet_implemented("Set accessors"));
        }

        let name = self.parse_property_name()?;
        let optional = self.parse_optional(TokenKind::Question);

        if self.is_token(TokenKind::OpenParen) || self.is_token(TokenKind::LessThan) {
            let signature = self.parse_call_signature()?;
            let body = self.parse_optional_method_body()?;
            return Ok(ClassMember::Method(MethodDeclaration {
                name,
                optional,
                signature,
                body,
            }));
        }

        let ty = self.parse_type_annotation()?;
        let initializer = if self.parse_optional(TokenKind::Equals) {
            Some(self.with_in_allowed(true, |p| p.parse_assignment_expression())?)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(ClassMember::Property(PropertyDeclaration {
            name,
            optional,
            ty,
            initializer,
        }))
    }

    /// A block, or `;` for an overload or abstract member.
    fn parse_optional_method_body(&mut self) -> ParseResult<Option<Block>> {
        if self.is_token(TokenKind::OpenBrace) {
            Ok(Some(self.parse_function_body()?))
        } else {
            self.parse_semicolon()?;
            Ok(None)
        }
    }

    // =========================================================================
    // Interfaces, type aliases, enums
    // =========================================================================

    fn parse_interface_declaration(&mut self, modifiers: ModifierFlags) -> ParseResult<Declaration> {
        self.parse_expected(TokenKind::Interface)?;
        let name = self.parse_identifier()?;
        let type_parameters = self.parse_optional_type_parameters()?;
        let extends = if self.parse_optional(TokenKind::Extends) {
            self.parse_heritage_list()?
        } else {
            Vec::new()
        };
        let members = self.parse_type_member_list()?;
        Ok(Declaration::Interface(InterfaceDeclaration {
            trivia: Trivia::default(),
            modifiers,
            name,
            type_parameters,
            extends,
            members,
        }))
    }

    fn parse_type_alias_declaration(&mut self, modifiers: ModifierFlags) -> ParseResult<Declaration> {
        self.parse_expected(TokenKind::Type)?;
        let name = self.parse_identifier()?;
        let type_parameters = self.parse_optional_type_parameters()?;
        self.parse_expected(TokenKind::Equals)?;
        let ty = self.parse_type()?;
        self.parse_semicolon()?;
        Ok(Declaration::TypeAlias(TypeAliasDeclaration {
            trivia: Trivia::default(),
            modifiers,
            name,
            type_parameters,
            ty,
        }))
    }

    /// `enum E { A, B = 2 }` or `const enum E { ... }`
    fn parse_enum_declaration(&mut self, modifiers: ModifierFlags) -> ParseResult<Declaration> {
        let is_const = self.parse_optional(TokenKind::Const);
        self.parse_expected(TokenKind::Enum)?;
        let name = self.parse_identifier()?;

        self.parse_expected(TokenKind::OpenBrace)?;
        let mut members = Vec::new();
        while !self.is_token(TokenKind::CloseBrace) {
            if self.is_token(TokenKind::OpenBracket) {
                return Err(self.error("Computed property names are not allowed in enums"));
            }
            let name = self.parse_property_name()?;
            let initializer = if self.parse_optional(TokenKind::Equals) {
                Some(self.with_in_allowed(true, |p| p.parse_assignment_expression())?)
            } else {
                None
            };
            members.push(EnumMember {
                trivia: Trivia::default(),
                name,
                initializer,
            });
            if !self.parse_optional(TokenKind::Comma) {
                break;
            }
        }
        self.parse_expected(TokenKind::CloseBrace)?;

        Ok(Declaration::Enum(EnumDeclaration {
            trivia: Trivia::default(),
            modifiers,
            is_const,
            name,
            members,
        }))
    }

    // =========================================================================
    // Namespaces and imports
    // =========================================================================

    /// `namespace A.B { ... }`; `module` is accepted as a synonym.
    fn parse_namespace_declaration(&mut self, modifiers: ModifierFlags) -> ParseResult<Declaration> {
        self.next_token();
        let name = self.parse_entity_name()?;

        self.parse_expected(TokenKind::OpenBrace)?;
        let mut body = Vec::new();
        while !self.is_token(TokenKind::CloseBrace) {
            if self.is_token(TokenKind::EndOfFile) {
                return Err(self.error("'}' expected, found end of input"));
            }
            body.push(self.parse_statement()?);
        }
        self.parse_expected(TokenKind::CloseBrace)?;

        Ok(Declaration::Namespace(NamespaceDeclaration {
            trivia: Trivia::default(),
            modifiers,
            name,
            body,
        }))
    }

    /// `import 'm'`, `import d from 'm'`, `import * as ns from 'm'`,
    /// `import d, { a as b } from 'm'`, ...
    fn parse_import_declaration(&mut self) -> ParseResult<Declaration> {
        let location = self.location();
        self.parse_expected(TokenKind::Import)?;

        if self.is_token(TokenKind::StringLiteral) {
            let token = self.reader.read();
            self.parse_semicolon()?;
            return Ok(Declaration::Import(ImportDeclaration {
                trivia: Trivia::default(),
                clause: None,
                module_specifier: string_literal_from(&token)?,
            }));
        }

        let default = if self.is_identifier() {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let bindings = if default.is_none() || self.parse_optional(TokenKind::Comma) {
            Some(self.parse_named_import_bindings()?)
        } else {
            None
        };
        let clause = self.build(ImportClause::new(default, bindings), location)?;

        self.parse_expected(TokenKind::From)?;
        let token = self.parse_expected(TokenKind::StringLiteral)?;
        self.parse_semicolon()?;

        Ok(Declaration::Import(ImportDeclaration {
            trivia: Trivia::default(),
            clause: Some(clause),
            module_specifier: string_literal_from(&token)?,
        }))
    }

    fn parse_named_import_bindings(&mut self) -> ParseResult<NamedImportBindings> {
        if self.parse_optional(TokenKind::Asterisk) {
            self.parse_expected(TokenKind::As)?;
            return Ok(NamedImportBindings::Namespace(self.parse_identifier()?));
        }

        self.parse_expected(TokenKind::OpenBrace)?;
        let mut specifiers = Vec::new();
        while !self.is_token(TokenKind::CloseBrace) {
            let is_reserved = self.token().is_reserved_word();
            let first = self.parse_identifier_name()?;
            let specifier = if self.parse_optional(TokenKind::As) {
                ImportSpecifier {
                    property_name: Some(first),
                    name: self.parse_identifier()?,
                }
            } else if is_reserved {
                return Err(self.error("'as' expected"));
            } else {
                ImportSpecifier {
                    property_name: None,
                    name: first,
                }
            };
            specifiers.push(specifier);
            if !self.parse_optional(TokenKind::Comma) {
                break;
            }
        }
        self.parse_expected(TokenKind::CloseBrace)?;
        Ok(NamedImportBindings::Named(specifiers))
    }
}
