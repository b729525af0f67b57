//! Parser state - type annotations and object type members

use super::state_expressions::string_literal_from;
use super::{ParseResult, Parser};
use crate::ast::*;
use tsgen_scanner::TokenKind;

impl Parser {
    /// `Type: FunctionType | ConstructorType | UnionType`
    pub fn parse_type(&mut self) -> ParseResult<Type> {
        self.with_depth(|p| match p.token() {
            TokenKind::LessThan => Ok(Type::Function(Box::new(p.parse_function_type()?))),
            TokenKind::New => {
                p.next_token();
                Ok(Type::Constructor(Box::new(p.parse_function_type()?)))
            }
            TokenKind::OpenParen if p.look_ahead_is_function_type() => {
                Ok(Type::Function(Box::new(p.parse_function_type()?)))
            }
            _ => p.parse_union_type(),
        })
    }

    /// `: Type`, if present.
    pub(crate) fn parse_type_annotation(&mut self) -> ParseResult<Option<Type>> {
        if self.parse_optional(TokenKind::Colon) {
            Ok(Some(self.parse_type()?))
        } else {
            Ok(None)
        }
    }

    fn parse_function_type(&mut self) -> ParseResult<FunctionType> {
        let type_parameters = if self.is_token(TokenKind::LessThan) {
            self.parse_type_parameters()?
        } else {
            Vec::new()
        };
        let parameters = self.parse_parameter_list()?;
        self.parse_expected(TokenKind::EqualsGreaterThan)?;
        let return_type = self.parse_type()?;
        Ok(FunctionType {
            type_parameters,
            parameters,
            return_type,
        })
    }

    /// `(` starts a function type when the parentheses are empty, hold a
    /// rest parameter, or hold a parameter name followed by `:`, `,`, `?`
    /// or `=`, or a lone name followed by `) =>`. Anything else is a
    /// parenthesized type.
    fn look_ahead_is_function_type(&mut self) -> bool {
        let is_function_type = self.look_ahead(|p| {
            p.next_token();
            if p.is_token(TokenKind::CloseParen) || p.is_token(TokenKind::DotDotDot) {
                return true;
            }
            if p.token().is_parameter_modifier() && p.token_at(1).is_identifier_like() {
                p.next_token();
            }
            if !p.is_identifier() {
                return false;
            }
            p.next_token();
            match p.token() {
                TokenKind::Colon | TokenKind::Comma | TokenKind::Question | TokenKind::Equals => {
                    true
                }
                TokenKind::CloseParen => {
                    p.next_token();
                    p.is_token(TokenKind::EqualsGreaterThan)
                }
                _ => false,
            }
        });
        tracing::trace!(is_function_type, location = %self.location(), "parenthesized type");
        is_function_type
    }

    fn parse_union_type(&mut self) -> ParseResult<Type> {
        let location = self.location();
        let first = self.parse_intersection_type()?;
        if !self.is_token(TokenKind::Bar) {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.parse_optional(TokenKind::Bar) {
            types.push(self.parse_intersection_type()?);
        }
        Ok(Type::Union(self.build(UnionType::new(types), location)?))
    }

    fn parse_intersection_type(&mut self) -> ParseResult<Type> {
        let location = self.location();
        let first = self.parse_array_type()?;
        if !self.is_token(TokenKind::Ampersand) {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.parse_optional(TokenKind::Ampersand) {
            types.push(self.parse_array_type()?);
        }
        Ok(Type::Intersection(
            self.build(IntersectionType::new(types), location)?,
        ))
    }

    /// `T[]`, `T[][]`, ...
    fn parse_array_type(&mut self) -> ParseResult<Type> {
        let mut ty = self.parse_primary_type()?;
        while self.is_token(TokenKind::OpenBracket)
            && self.token_at(1) == TokenKind::CloseBracket
            && !self.has_preceding_line_break()
        {
            self.next_token();
            self.next_token();
            ty = Type::array(ty);
        }
        Ok(ty)
    }

    fn parse_primary_type(&mut self) -> ParseResult<Type> {
        if let Some(predefined) = PredefinedType::from_token(self.token()) {
            self.next_token();
            return Ok(Type::Predefined(predefined));
        }

        match self.token() {
            TokenKind::This => {
                self.next_token();
                Ok(Type::This)
            }
            TokenKind::StringLiteral => {
                let token = self.reader.read();
                Ok(Type::StringLiteral(string_literal_from(&token)?))
            }
            TokenKind::OpenParen => {
                self.next_token();
                let ty = self.parse_type()?;
                self.parse_expected(TokenKind::CloseParen)?;
                Ok(Type::Parenthesized(Box::new(ty)))
            }
            TokenKind::OpenBracket => self.parse_tuple_type(),
            TokenKind::OpenBrace => Ok(Type::Object(ObjectType {
                members: self.parse_type_member_list()?,
            })),
            TokenKind::Typeof => {
                self.next_token();
                Ok(Type::Query(self.parse_entity_name()?))
            }
            _ if self.is_identifier() => Ok(Type::Reference(self.parse_type_reference()?)),
            _ => Err(self.error(format!("Type expected, found {}", self.reader.peek()))),
        }
    }

    fn parse_tuple_type(&mut self) -> ParseResult<Type> {
        self.parse_expected(TokenKind::OpenBracket)?;
        let mut elements = Vec::new();
        while !self.is_token(TokenKind::CloseBracket) {
            elements.push(self.parse_type()?);
            if !self.parse_optional(TokenKind::Comma) {
                break;
            }
        }
        self.parse_expected(TokenKind::CloseBracket)?;
        Ok(Type::Tuple(TupleType { elements }))
    }

    /// `a.b.C<T>`
    pub(crate) fn parse_type_reference(&mut self) -> ParseResult<TypeReference> {
        let name = self.parse_entity_name()?;
        let type_arguments = if self.is_token(TokenKind::LessThan) && !self.has_preceding_line_break()
        {
            self.parse_type_arguments()?
        } else {
            Vec::new()
        };
        Ok(TypeReference {
            name,
            type_arguments,
        })
    }

    pub(crate) fn parse_entity_name(&mut self) -> ParseResult<EntityName> {
        let location = self.location();
        let mut segments = vec![self.parse_identifier()?];
        while self.parse_optional(TokenKind::Dot) {
            segments.push(self.parse_identifier_name()?);
        }
        self.build(EntityName::new(segments), location)
    }

    /// `<A, B<C>>`. The closing `>` of a nested list is its own token, so no
    /// splitting of `>>` is needed here.
    pub(crate) fn parse_type_arguments(&mut self) -> ParseResult<Vec<Type>> {
        self.parse_expected(TokenKind::LessThan)?;
        if self.is_token(TokenKind::GreaterThan) {
            return Err(self.error("Type argument list cannot be empty"));
        }
        let mut type_arguments = vec![self.parse_type()?];
        while self.parse_optional(TokenKind::Comma) {
            type_arguments.push(self.parse_type()?);
        }
        self.parse_expected(TokenKind::GreaterThan)?;
        Ok(type_arguments)
    }

    // =========================================================================
    // Object type members
    // =========================================================================

    /// `{ member; member, member \n member }`
    pub(crate) fn parse_type_member_list(&mut self) -> ParseResult<Vec<TypeMember>> {
        self.parse_expected(TokenKind::OpenBrace)?;
        let mut members = Vec::new();
        while !self.is_token(TokenKind::CloseBrace) {
            members.push(self.parse_type_member()?);
            if !self.parse_optional(TokenKind::Semicolon)
                && !self.parse_optional(TokenKind::Comma)
                && !self.is_token(TokenKind::CloseBrace)
                && !self.has_preceding_line_break()
            {
                return Err(self.error(format!("';' expected, found {}", self.reader.peek())));
            }
        }
        self.parse_expected(TokenKind::CloseBrace)?;
        Ok(members)
    }

    fn parse_type_member(&mut self) -> ParseResult<TypeMember> {
        match self.token() {
            TokenKind::OpenParen | TokenKind::LessThan => {
                return Ok(TypeMember::Call(self.parse_call_signature()?));
            }
            TokenKind::New
                if matches!(self.token_at(1), TokenKind::OpenParen | TokenKind::LessThan) =>
            {
                self.next_token();
                return Ok(TypeMember::Construct(self.parse_call_signature()?));
            }
            _ => {}
        }

        let readonly = self.is_token(TokenKind::Readonly) && self.next_is_property_name();
        if readonly {
            self.next_token();
        }
        if self.is_index_signature() {
            return Ok(TypeMember::Index(self.parse_index_signature(readonly)?));
        }

        let name = self.parse_property_name()?;
        let optional = self.parse_optional(TokenKind::Question);
        if self.is_token(TokenKind::OpenParen) || self.is_token(TokenKind::LessThan) {
            if readonly {
                return Err(self.error("'readonly' modifier can only appear on a property declaration"));
            }
            let signature = self.parse_call_signature()?;
            return Ok(TypeMember::Method(MethodSignature {
                name,
                optional,
                signature,
            }));
        }

        let ty = self.parse_type_annotation()?;
        Ok(TypeMember::Property(PropertySignature {
            readonly,
            name,
            optional,
            ty,
        }))
    }

    /// `[name: T]`, as opposed to a computed property name.
    pub(crate) fn is_index_signature(&self) -> bool {
        self.is_token(TokenKind::OpenBracket)
            && self.token_at(1).is_identifier_like()
            && self.token_at(2) == TokenKind::Colon
    }

    /// `[key: string]: T`
    pub(crate) fn parse_index_signature(&mut self, readonly: bool) -> ParseResult<IndexSignature> {
        self.parse_expected(TokenKind::OpenBracket)?;
        let parameter_name = self.parse_identifier()?;
        self.parse_expected(TokenKind::Colon)?;
        let parameter_type = self.parse_type()?;
        self.parse_expected(TokenKind::CloseBracket)?;
        self.parse_expected(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        Ok(IndexSignature {
            readonly,
            parameter_name,
            parameter_type,
            ty,
        })
    }
}
