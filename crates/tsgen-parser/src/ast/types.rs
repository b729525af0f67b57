use super::{
    CallSignature, ConstructionError, EntityName, Identifier, ParameterList, PropertyName,
    StringLiteral, TypeParameter,
};
use std::fmt;
use tsgen_scanner::TokenKind;

/// A type annotation.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Predefined(PredefinedType),
    Reference(TypeReference),
    Parenthesized(Box<Type>),
    Union(UnionType),
    Intersection(IntersectionType),
    /// `T[]`
    Array(Box<Type>),
    Tuple(TupleType),
    Function(Box<FunctionType>),
    /// `new (...) => T`
    Constructor(Box<FunctionType>),
    Object(ObjectType),
    /// `typeof a.b`
    Query(EntityName),
    This,
    StringLiteral(StringLiteral),
}

impl Type {
    pub fn reference(name: impl Into<EntityName>) -> Self {
        Type::Reference(TypeReference {
            name: name.into(),
            type_arguments: Vec::new(),
        })
    }

    pub fn array(element: Type) -> Self {
        Type::Array(Box::new(element))
    }
}

impl From<PredefinedType> for Type {
    fn from(predefined: PredefinedType) -> Self {
        Type::Predefined(predefined)
    }
}

/// The keyword types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredefinedType {
    Any,
    Unknown,
    Number,
    Boolean,
    String,
    Symbol,
    Object,
    Void,
    Undefined,
    Null,
    Never,
}

impl PredefinedType {
    pub fn as_str(self) -> &'static str {
        match self {
            PredefinedType::Any => "any",
            PredefinedType::Unknown => "unknown",
            PredefinedType::Number => "number",
            PredefinedType::Boolean => "boolean",
            PredefinedType::String => "string",
            PredefinedType::Symbol => "symbol",
            PredefinedType::Object => "object",
            PredefinedType::Void => "void",
            PredefinedType::Undefined => "undefined",
            PredefinedType::Null => "null",
            PredefinedType::Never => "never",
        }
    }

    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Any => PredefinedType::Any,
            TokenKind::Unknown => PredefinedType::Unknown,
            TokenKind::Number => PredefinedType::Number,
            TokenKind::Boolean => PredefinedType::Boolean,
            TokenKind::String => PredefinedType::String,
            TokenKind::Symbol => PredefinedType::Symbol,
            TokenKind::Object => PredefinedType::Object,
            TokenKind::Void => PredefinedType::Void,
            TokenKind::Undefined => PredefinedType::Undefined,
            TokenKind::Null => PredefinedType::Null,
            TokenKind::Never => PredefinedType::Never,
            _ => return None,
        })
    }
}

impl fmt::Display for PredefinedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Name<Args>`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeReference {
    pub name: EntityName,
    pub type_arguments: Vec<Type>,
}

/// `A | B | ...`, always at least two constituents.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    types: Vec<Type>,
}

impl UnionType {
    pub fn new(types: Vec<Type>) -> Result<Self, ConstructionError> {
        if types.len() < 2 {
            return Err(ConstructionError::TooFewElements {
                what: "a union type",
                min: 2,
            });
        }
        Ok(UnionType { types })
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }
}

/// `A & B & ...`, always at least two constituents.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionType {
    types: Vec<Type>,
}

impl IntersectionType {
    pub fn new(types: Vec<Type>) -> Result<Self, ConstructionError> {
        if types.len() < 2 {
            return Err(ConstructionError::TooFewElements {
                what: "an intersection type",
                min: 2,
            });
        }
        Ok(IntersectionType { types })
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TupleType {
    pub elements: Vec<Type>,
}

/// `<T>(params) => ReturnType`. Also used for constructor types.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionType {
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: ParameterList,
    pub return_type: Type,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectType {
    pub members: Vec<TypeMember>,
}

/// A member of an object type or interface body.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeMember {
    Property(PropertySignature),
    Method(MethodSignature),
    /// `(x: T): R`
    Call(CallSignature),
    /// `new (x: T): R`
    Construct(CallSignature),
    Index(IndexSignature),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertySignature {
    pub readonly: bool,
    pub name: PropertyName,
    pub optional: bool,
    pub ty: Option<Type>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodSignature {
    pub name: PropertyName,
    pub optional: bool,
    pub signature: CallSignature,
}

/// `[key: string]: T`
#[derive(Clone, Debug, PartialEq)]
pub struct IndexSignature {
    pub readonly: bool,
    pub parameter_name: Identifier,
    pub parameter_type: Type,
    pub ty: Type,
}
