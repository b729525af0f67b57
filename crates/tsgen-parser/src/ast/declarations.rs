use super::{
    Accessibility, Block, CallSignature, ConstructionError, EntityName, Expression, GetAccessor,
    Identifier, IndexSignature, ModifierFlags, ParameterList, PropertyName, SetAccessor,
    Statement, StringLiteral, Trivia, Type, TypeMember, TypeParameter, TypeReference,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Function(FunctionDeclaration),
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    TypeAlias(TypeAliasDeclaration),
    Enum(EnumDeclaration),
    Namespace(NamespaceDeclaration),
    Import(ImportDeclaration),
}

impl Declaration {
    pub fn trivia(&self) -> &Trivia {
        match self {
            Declaration::Function(d) => &d.trivia,
            Declaration::Class(d) => &d.trivia,
            Declaration::Interface(d) => &d.trivia,
            Declaration::TypeAlias(d) => &d.trivia,
            Declaration::Enum(d) => &d.trivia,
            Declaration::Namespace(d) => &d.trivia,
            Declaration::Import(d) => &d.trivia,
        }
    }
}

/// `function name<T>(params): R { ... }`; without a body this is an overload
/// or ambient signature.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDeclaration {
    pub trivia: Trivia,
    pub modifiers: ModifierFlags,
    /// Absent only for `export default function`.
    pub name: Option<Identifier>,
    pub signature: CallSignature,
    pub body: Option<Block>,
}

// =============================================================================
// Classes
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ClassDeclaration {
    pub trivia: Trivia,
    pub modifiers: ModifierFlags,
    /// Absent only for `export default class`.
    pub name: Option<Identifier>,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Option<TypeReference>,
    pub implements: Vec<TypeReference>,
    pub members: Vec<ClassElement>,
}

/// A class member with its modifiers and attached comments.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassElement {
    pub trivia: Trivia,
    pub accessibility: Option<Accessibility>,
    /// Only `STATIC`, `ABSTRACT` and `READONLY` are meaningful here.
    pub modifiers: ModifierFlags,
    pub member: ClassMember,
}

impl ClassElement {
    pub fn new(member: ClassMember) -> Self {
        ClassElement {
            trivia: Trivia::default(),
            accessibility: None,
            modifiers: ModifierFlags::empty(),
            member,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClassMember {
    Constructor(ConstructorDeclaration),
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
    GetAccessor(GetAccessor),
    SetAccessor(SetAccessor),
    Index(IndexSignature),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstructorDeclaration {
    pub parameters: ParameterList,
    pub body: Option<Block>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDeclaration {
    pub name: PropertyName,
    pub optional: bool,
    pub ty: Option<Type>,
    pub initializer: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodDeclaration {
    pub name: PropertyName,
    pub optional: bool,
    pub signature: CallSignature,
    pub body: Option<Block>,
}

// =============================================================================
// Interfaces, type aliases, enums
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDeclaration {
    pub trivia: Trivia,
    pub modifiers: ModifierFlags,
    pub name: Identifier,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Vec<TypeReference>,
    pub members: Vec<TypeMember>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeAliasDeclaration {
    pub trivia: Trivia,
    pub modifiers: ModifierFlags,
    pub name: Identifier,
    pub type_parameters: Vec<TypeParameter>,
    pub ty: Type,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumDeclaration {
    pub trivia: Trivia,
    pub modifiers: ModifierFlags,
    pub is_const: bool,
    pub name: Identifier,
    pub members: Vec<EnumMember>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumMember {
    pub trivia: Trivia,
    pub name: PropertyName,
    pub initializer: Option<Expression>,
}

// =============================================================================
// Namespaces and imports
// =============================================================================

/// `namespace A.B { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct NamespaceDeclaration {
    pub trivia: Trivia,
    pub modifiers: ModifierFlags,
    pub name: EntityName,
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportDeclaration {
    pub trivia: Trivia,
    /// Absent for a side-effect import, `import 'module'`.
    pub clause: Option<ImportClause>,
    pub module_specifier: StringLiteral,
}

/// `a`, `a, * as ns`, `{ a as b }` and the other binding combinations.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportClause {
    default: Option<Identifier>,
    bindings: Option<NamedImportBindings>,
}

impl ImportClause {
    pub fn new(
        default: Option<Identifier>,
        bindings: Option<NamedImportBindings>,
    ) -> Result<Self, ConstructionError> {
        if default.is_none() && bindings.is_none() {
            return Err(ConstructionError::EmptyImportClause);
        }
        Ok(ImportClause { default, bindings })
    }

    pub fn default_binding(&self) -> Option<&Identifier> {
        self.default.as_ref()
    }

    pub fn bindings(&self) -> Option<&NamedImportBindings> {
        self.bindings.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NamedImportBindings {
    /// `* as ns`
    Namespace(Identifier),
    /// `{ a, b as c }`
    Named(Vec<ImportSpecifier>),
}

/// `property_name as name`, or just `name`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportSpecifier {
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}
