use super::{
    AssignmentOperator, BinaryOperator, Block, CallSignature, ConstructionError, Identifier,
    NumericLiteral, Parameter, PostfixUnaryOperator, Precedence, PrefixUnaryOperator,
    PropertyName, RegularExpressionLiteral, StringLiteral, TemplateLiteral, Type,
};

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    This,
    Super,
    Identifier(Identifier),
    Null,
    Boolean(bool),
    Numeric(NumericLiteral),
    String(StringLiteral),
    Template(Box<TemplateLiteral>),
    RegularExpression(RegularExpressionLiteral),
    Array(ArrayLiteral),
    Object(ObjectLiteral),
    Parenthesized(Box<Expression>),
    Function(Box<FunctionExpression>),
    Arrow(Box<ArrowFunction>),
    PropertyAccess(Box<PropertyAccess>),
    ElementAccess(Box<ElementAccess>),
    Call(Box<CallExpression>),
    PrefixUnary(Box<PrefixUnaryExpression>),
    PostfixUnary(Box<PostfixUnaryExpression>),
    Binary(Box<BinaryExpression>),
    Conditional(Box<ConditionalExpression>),
    Assignment(Box<AssignmentExpression>),
    Comma(CommaExpression),
    TypeAssertion(Box<TypeAssertion>),
}

impl Expression {
    /// How tightly this expression binds when it appears as an operand.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expression::Comma(_) => Precedence::Comma,
            Expression::Assignment(_) | Expression::Arrow(_) => Precedence::Assignment,
            Expression::Conditional(_) => Precedence::Conditional,
            Expression::Binary(binary) => binary.operator.precedence(),
            Expression::PrefixUnary(_) | Expression::TypeAssertion(_) => Precedence::Unary,
            Expression::PostfixUnary(_) => Precedence::Postfix,
            Expression::PropertyAccess(_) | Expression::ElementAccess(_) | Expression::Call(_) => {
                Precedence::LeftHandSide
            }
            Expression::This
            | Expression::Super
            | Expression::Identifier(_)
            | Expression::Null
            | Expression::Boolean(_)
            | Expression::Numeric(_)
            | Expression::String(_)
            | Expression::Template(_)
            | Expression::RegularExpression(_)
            | Expression::Array(_)
            | Expression::Object(_)
            | Expression::Parenthesized(_)
            | Expression::Function(_) => Precedence::Primary,
        }
    }

    /// Whether the expression can appear on the left of `=` or as the operand
    /// of `++`/`--`.
    pub fn is_assignment_target(&self) -> bool {
        match self {
            Expression::Identifier(_)
            | Expression::PropertyAccess(_)
            | Expression::ElementAccess(_) => true,
            Expression::Parenthesized(inner) => inner.is_assignment_target(),
            _ => false,
        }
    }

    /// Whether the printed text begins with `{` or `function`, which at the
    /// start of a statement would be read as a block or a declaration.
    pub fn starts_with_brace_or_function(&self) -> bool {
        match self {
            Expression::Object(_) | Expression::Function(_) => true,
            Expression::PropertyAccess(access) => access.expression.starts_with_brace_or_function(),
            Expression::ElementAccess(access) => access.expression.starts_with_brace_or_function(),
            Expression::Call(call) if call.kind() == CallKind::Call => {
                call.callee().starts_with_brace_or_function()
            }
            Expression::PostfixUnary(unary) => unary.operand.starts_with_brace_or_function(),
            Expression::Binary(binary) => binary.left.starts_with_brace_or_function(),
            Expression::Conditional(conditional) => {
                conditional.condition.starts_with_brace_or_function()
            }
            Expression::Assignment(assignment) => assignment.target.starts_with_brace_or_function(),
            Expression::Comma(comma) => comma
                .expressions()
                .first()
                .is_some_and(Expression::starts_with_brace_or_function),
            _ => false,
        }
    }

    /// Whether a call appears in the member chain, so that as the callee of
    /// `new` the first argument list would end the callee early.
    pub fn has_call_in_member_chain(&self) -> bool {
        match self {
            Expression::Call(_) => true,
            Expression::PropertyAccess(access) => access.expression.has_call_in_member_chain(),
            Expression::ElementAccess(access) => access.expression.has_call_in_member_chain(),
            _ => false,
        }
    }

    pub fn identifier(text: &str) -> Result<Self, ConstructionError> {
        Identifier::new(text).map(Expression::Identifier)
    }
}

impl From<Identifier> for Expression {
    fn from(identifier: Identifier) -> Self {
        Expression::Identifier(identifier)
    }
}

impl From<NumericLiteral> for Expression {
    fn from(literal: NumericLiteral) -> Self {
        Expression::Numeric(literal)
    }
}

impl From<StringLiteral> for Expression {
    fn from(literal: StringLiteral) -> Self {
        Expression::String(literal)
    }
}

// =============================================================================
// Literals with children
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum ArrayElement {
    Expression(Expression),
    Spread(Expression),
    /// An elided element, as in `[a, , b]`.
    Hole,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<ArrayElement>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectLiteral {
    pub properties: Vec<ObjectLiteralElement>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectLiteralElement {
    /// `name: value`
    Property(PropertyAssignment),
    /// `name` or `name = initializer`
    Shorthand(ShorthandProperty),
    Method(MethodDefinition),
    GetAccessor(GetAccessor),
    SetAccessor(SetAccessor),
    /// `...expression`
    Spread(Expression),
}

impl ObjectLiteralElement {
    /// Methods and accessors force an object literal onto multiple lines.
    pub fn has_body(&self) -> bool {
        matches!(
            self,
            ObjectLiteralElement::Method(_)
                | ObjectLiteralElement::GetAccessor(_)
                | ObjectLiteralElement::SetAccessor(_)
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyAssignment {
    pub name: PropertyName,
    pub value: Expression,
}

/// A shorthand property. With an initializer this is the cover grammar of a
/// destructuring default (`{ a = 1 }`).
#[derive(Clone, Debug, PartialEq)]
pub struct ShorthandProperty {
    pub name: Identifier,
    pub initializer: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodDefinition {
    pub name: PropertyName,
    pub signature: CallSignature,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GetAccessor {
    pub name: PropertyName,
    pub return_type: Option<Type>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SetAccessor {
    pub name: PropertyName,
    pub parameter: Parameter,
    pub body: Block,
}

// =============================================================================
// Functions
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionExpression {
    pub name: Option<Identifier>,
    pub signature: CallSignature,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrowFunction {
    pub signature: CallSignature,
    pub body: ArrowBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArrowBody {
    Expression(Expression),
    Block(Block),
}

// =============================================================================
// Member access and calls
// =============================================================================

/// `expression.name`
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyAccess {
    pub expression: Expression,
    pub name: Identifier,
}

/// `expression[argument]`
#[derive(Clone, Debug, PartialEq)]
pub struct ElementAccess {
    pub expression: Expression,
    pub argument: Expression,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// `f(x)`
    Call,
    /// `new C(x)`
    New,
    /// `super(x)` inside a constructor.
    Super,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    Expression(Expression),
    Spread(Expression),
}

impl From<Expression> for Argument {
    fn from(expression: Expression) -> Self {
        Argument::Expression(expression)
    }
}

/// A call, `new` or `super` call. A `super` call always has
/// [`Expression::Super`] as its callee and nothing else does.
#[derive(Clone, Debug, PartialEq)]
pub struct CallExpression {
    kind: CallKind,
    callee: Expression,
    type_arguments: Vec<Type>,
    arguments: Vec<Argument>,
}

impl CallExpression {
    pub fn new(
        kind: CallKind,
        callee: Expression,
        type_arguments: Vec<Type>,
        arguments: Vec<Argument>,
    ) -> Result<Self, ConstructionError> {
        let is_super_callee = callee == Expression::Super;
        if is_super_callee != (kind == CallKind::Super) {
            return Err(ConstructionError::MismatchedSuperCall);
        }
        Ok(CallExpression {
            kind,
            callee,
            type_arguments,
            arguments,
        })
    }

    pub fn super_call(arguments: Vec<Argument>) -> Self {
        CallExpression {
            kind: CallKind::Super,
            callee: Expression::Super,
            type_arguments: Vec::new(),
            arguments,
        }
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    pub fn callee(&self) -> &Expression {
        &self.callee
    }

    pub fn type_arguments(&self) -> &[Type] {
        &self.type_arguments
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct PrefixUnaryExpression {
    pub operator: PrefixUnaryOperator,
    pub operand: Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostfixUnaryExpression {
    pub operand: Expression,
    pub operator: PostfixUnaryOperator,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpression {
    pub left: Expression,
    pub operator: BinaryOperator,
    pub right: Expression,
}

/// `condition ? when_true : when_false`
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionalExpression {
    pub condition: Expression,
    pub when_true: Expression,
    pub when_false: Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentExpression {
    pub target: Expression,
    pub operator: AssignmentOperator,
    pub value: Expression,
}

/// `a, b, c`
#[derive(Clone, Debug, PartialEq)]
pub struct CommaExpression {
    expressions: Vec<Expression>,
}

impl CommaExpression {
    pub fn new(expressions: Vec<Expression>) -> Result<Self, ConstructionError> {
        if expressions.len() < 2 {
            return Err(ConstructionError::TooFewElements {
                what: "a comma expression",
                min: 2,
            });
        }
        Ok(CommaExpression { expressions })
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }
}

/// `<T>expression`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAssertion {
    pub ty: Type,
    pub expression: Expression,
}
