//! Parameters, type parameters and call signatures.

use super::{Accessibility, ConstructionError, Expression, Identifier, StringLiteral, Type};

/// `<T extends C = D>`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeParameter {
    pub name: Identifier,
    pub constraint: Option<Type>,
    pub default: Option<Type>,
}

impl TypeParameter {
    pub fn new(name: Identifier) -> Self {
        TypeParameter {
            name,
            constraint: None,
            default: None,
        }
    }
}

/// The annotation after a parameter's `:`.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterAnnotation {
    Type(Type),
    /// A specialized signature parameter, `kind: 'div'`.
    StringLiteral(StringLiteral),
}

/// A non-rest parameter. It is optional if it has a `?` marker or an
/// initializer.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub accessibility: Option<Accessibility>,
    pub readonly: bool,
    pub name: Identifier,
    pub question: bool,
    pub annotation: Option<ParameterAnnotation>,
    pub initializer: Option<Expression>,
}

impl Parameter {
    pub fn new(name: Identifier, annotation: Option<ParameterAnnotation>) -> Self {
        Parameter {
            accessibility: None,
            readonly: false,
            name,
            question: false,
            annotation,
            initializer: None,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.question || self.initializer.is_some()
    }
}

/// `...name: T`
#[derive(Clone, Debug, PartialEq)]
pub struct RestParameter {
    pub name: Identifier,
    pub ty: Option<Type>,
}

/// An ordered parameter list: required parameters, then optional ones, then
/// at most one rest parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterList {
    required: Vec<Parameter>,
    optional: Vec<Parameter>,
    rest: Option<RestParameter>,
}

impl ParameterList {
    pub fn new(
        required: Vec<Parameter>,
        optional: Vec<Parameter>,
        rest: Option<RestParameter>,
    ) -> Result<Self, ConstructionError> {
        if let Some(parameter) = required.iter().find(|p| p.is_optional()) {
            return Err(ConstructionError::OptionalInRequiredPosition {
                name: parameter.name.to_string(),
            });
        }
        if let Some(parameter) = optional.iter().find(|p| !p.is_optional()) {
            return Err(ConstructionError::RequiredAfterOptional {
                name: parameter.name.to_string(),
            });
        }
        Ok(ParameterList {
            required,
            optional,
            rest,
        })
    }

    /// Split parameters in declaration order into the required and optional
    /// runs, rejecting a required parameter after an optional one.
    pub fn from_parameters(
        parameters: Vec<Parameter>,
        rest: Option<RestParameter>,
    ) -> Result<Self, ConstructionError> {
        let split = parameters
            .iter()
            .position(Parameter::is_optional)
            .unwrap_or(parameters.len());
        let mut required = parameters;
        let optional = required.split_off(split);
        Self::new(required, optional, rest)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn required(&self) -> &[Parameter] {
        &self.required
    }

    pub fn optional(&self) -> &[Parameter] {
        &self.optional
    }

    pub fn rest(&self) -> Option<&RestParameter> {
        self.rest.as_ref()
    }

    /// Required then optional parameters, excluding the rest parameter.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.required.iter().chain(self.optional.iter())
    }

    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len() + usize::from(self.rest.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Type parameters, parameters and an optional return type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallSignature {
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: ParameterList,
    pub return_type: Option<Type>,
}

impl CallSignature {
    pub fn new(parameters: ParameterList, return_type: Option<Type>) -> Self {
        CallSignature {
            type_parameters: Vec::new(),
            parameters,
            return_type,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/parameter_tests.rs"]
mod tests;
