//! Parser state - parameter lists, type parameters and call signatures

use super::state_expressions::string_literal_from;
use super::{ParseError, ParseResult, Parser};
use crate::ast::*;
use tsgen_scanner::TokenKind;

impl Parser {
    /// `<T, U extends C = D>`
    pub(crate) fn parse_type_parameters(&mut self) -> ParseResult<Vec<TypeParameter>> {
        self.parse_expected(TokenKind::LessThan)?;
        if self.is_token(TokenKind::GreaterThan) {
            return Err(self.error("Type parameter list cannot be empty"));
        }

        let mut type_parameters = Vec::new();
        loop {
            let name = self.parse_identifier()?;
            let constraint = if self.parse_optional(TokenKind::Extends) {
                Some(self.parse_type()?)
            } else {
                None
            };
            let default = if self.parse_optional(TokenKind::Equals) {
                Some(self.parse_type()?)
            } else {
                None
            };
            type_parameters.push(TypeParameter {
                name,
                constraint,
                default,
            });
            if !self.parse_optional(TokenKind::Comma) {
                break;
            }
        }
        self.parse_expected(TokenKind::GreaterThan)?;
        Ok(type_parameters)
    }

    /// `<T>(params): R`; type parameters and return type are optional.
    pub(crate) fn parse_call_signature(&mut self) -> ParseResult<CallSignature> {
        let type_parameters = if self.is_token(TokenKind::LessThan) {
            self.parse_type_parameters()?
        } else {
            Vec::new()
        };
        let parameters = self.parse_parameter_list()?;
        let return_type = self.parse_type_annotation()?;
        Ok(CallSignature {
            type_parameters,
            parameters,
            return_type,
        })
    }

    /// `(a, b?: T, c = 1, ...rest: T[])`
    ///
    /// Once a parameter is optional (`?` or an initializer) every following
    /// non-rest parameter must be optional too. The rest parameter, if any,
    /// comes last.
    pub(crate) fn parse_parameter_list(&mut self) -> ParseResult<ParameterList> {
        let location = self.location();
        self.parse_expected(TokenKind::OpenParen)?;

        let mut parameters: Vec<Parameter> = Vec::new();
        let mut rest = None;
        while !self.is_token(TokenKind::CloseParen) {
            if self.is_token(TokenKind::DotDotDot) {
                rest = Some(self.parse_rest_parameter()?);
                if !self.is_token(TokenKind::CloseParen) {
                    return Err(self.error("A rest parameter must be last in a parameter list"));
                }
                break;
            }

            let parameter_location = self.location();
            let parameter = self.parse_parameter()?;
            if !parameter.is_optional() && parameters.last().is_some_and(Parameter::is_optional) {
                return Err(ParseError::syntax(
                    "A required parameter cannot follow an optional parameter",
                    parameter_location,
                ));
            }
            parameters.push(parameter);

            if !self.parse_optional(TokenKind::Comma) {
                break;
            }
        }
        self.parse_expected(TokenKind::CloseParen)?;

        self.build(ParameterList::from_parameters(parameters, rest), location)
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let accessibility = match self.token() {
            TokenKind::Public => Some(Accessibility::Public),
            TokenKind::Protected => Some(Accessibility::Protected),
            TokenKind::Private => Some(Accessibility::Private),
            _ => None,
        }
        .filter(|_| self.token_at(1).is_identifier_like());
        if accessibility.is_some() {
            self.next_token();
        }
        let readonly = self.is_token(TokenKind::Readonly) && self.token_at(1).is_identifier_like();
        if readonly {
            self.next_token();
        }

        if self.is_token(TokenKind::OpenBracket) || self.is_token(TokenKind::OpenBrace) {
            return Err(self.not_yet_implemented("Destructuring binding patterns"));
        }

        let name = self.parse_identifier()?;
        let question = self.parse_optional(TokenKind::Question);
        let annotation = if self.parse_optional(TokenKind::Colon) {
            Some(self.parse_parameter_annotation()?)
        } else {
            None
        };
        let initializer = if self.is_token(TokenKind::Equals) {
            if question {
                return Err(self.error("Parameter cannot have question mark and initializer"));
            }
            self.next_token();
            Some(self.with_in_allowed(true, |p| p.parse_assignment_expression())?)
        } else {
            None
        };

        Ok(Parameter {
            accessibility,
            readonly,
            name,
            question,
            annotation,
            initializer,
        })
    }

    /// A string literal directly closing the annotation is a specialized
    /// signature (`kind: 'div'`); anything else is a type.
    fn parse_parameter_annotation(&mut self) -> ParseResult<ParameterAnnotation> {
        if self.is_token(TokenKind::StringLiteral)
            && matches!(
                self.token_at(1),
                TokenKind::Comma | TokenKind::CloseParen | TokenKind::Equals
            )
        {
            let token = self.reader.read();
            return Ok(ParameterAnnotation::StringLiteral(string_literal_from(&token)?));
        }
        Ok(ParameterAnnotation::Type(self.parse_type()?))
    }

    fn parse_rest_parameter(&mut self) -> ParseResult<RestParameter> {
        self.parse_expected(TokenKind::DotDotDot)?;
        if self.is_token(TokenKind::OpenBracket) || self.is_token(TokenKind::OpenBrace) {
            return Err(self.not_yet_implemented("Destructuring binding patterns"));
        }
        let name = self.parse_identifier()?;
        if self.is_token(TokenKind::Question) {
            return Err(self.error("A rest parameter cannot be optional"));
        }
        let ty = self.parse_type_annotation()?;
        if self.is_token(TokenKind::Equals) {
            return Err(self.error("A rest parameter cannot have an initializer"));
        }
        Ok(RestParameter { name, ty })
    }
}
