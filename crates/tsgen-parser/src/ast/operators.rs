//! Operators and the precedence ladder shared by the parser and the emitter.

use std::fmt;

/// Expression precedence, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Precedence {
    Comma,
    Assignment,
    Conditional,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
    Unary,
    Postfix,
    LeftHandSide,
    Primary,
}

impl Precedence {
    /// The next tighter-binding level. `Primary` is its own successor.
    pub fn next(self) -> Precedence {
        match self {
            Precedence::Comma => Precedence::Assignment,
            Precedence::Assignment => Precedence::Conditional,
            Precedence::Conditional => Precedence::LogicalOr,
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::BitwiseOr,
            Precedence::BitwiseOr => Precedence::BitwiseXor,
            Precedence::BitwiseXor => Precedence::BitwiseAnd,
            Precedence::BitwiseAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Shift,
            Precedence::Shift => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Exponent,
            Precedence::Exponent => Precedence::Unary,
            Precedence::Unary => Precedence::Postfix,
            Precedence::Postfix => Precedence::LeftHandSide,
            Precedence::LeftHandSide | Precedence::Primary => Precedence::Primary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Exponent,
    Multiply,
    Divide,
    Modulo,
    Add,
    Subtract,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    InstanceOf,
    In,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Exponent => "**",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::SignedRightShift => ">>",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::InstanceOf => "instanceof",
            BinaryOperator::In => "in",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOperator::Exponent => Precedence::Exponent,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => {
                Precedence::Multiplicative
            }
            BinaryOperator::Add | BinaryOperator::Subtract => Precedence::Additive,
            BinaryOperator::LeftShift
            | BinaryOperator::SignedRightShift
            | BinaryOperator::UnsignedRightShift => Precedence::Shift,
            BinaryOperator::LessThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::LessThanOrEqual
            | BinaryOperator::GreaterThanOrEqual
            | BinaryOperator::InstanceOf
            | BinaryOperator::In => Precedence::Relational,
            BinaryOperator::Equal
            | BinaryOperator::NotEqual
            | BinaryOperator::StrictEqual
            | BinaryOperator::StrictNotEqual => Precedence::Equality,
            BinaryOperator::BitwiseAnd => Precedence::BitwiseAnd,
            BinaryOperator::BitwiseXor => Precedence::BitwiseXor,
            BinaryOperator::BitwiseOr => Precedence::BitwiseOr,
            BinaryOperator::LogicalAnd => Precedence::LogicalAnd,
            BinaryOperator::LogicalOr => Precedence::LogicalOr,
        }
    }

    /// Only `**` groups to the right.
    pub fn is_right_associative(self) -> bool {
        self == BinaryOperator::Exponent
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponent,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,
}

impl AssignmentOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::Add => "+=",
            AssignmentOperator::Subtract => "-=",
            AssignmentOperator::Multiply => "*=",
            AssignmentOperator::Divide => "/=",
            AssignmentOperator::Modulo => "%=",
            AssignmentOperator::Exponent => "**=",
            AssignmentOperator::LeftShift => "<<=",
            AssignmentOperator::SignedRightShift => ">>=",
            AssignmentOperator::UnsignedRightShift => ">>>=",
            AssignmentOperator::BitwiseAnd => "&=",
            AssignmentOperator::BitwiseXor => "^=",
            AssignmentOperator::BitwiseOr => "|=",
        }
    }
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixUnaryOperator {
    Increment,
    Decrement,
    Plus,
    Minus,
    BitwiseNot,
    LogicalNot,
    Delete,
    Void,
    Typeof,
}

impl PrefixUnaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixUnaryOperator::Increment => "++",
            PrefixUnaryOperator::Decrement => "--",
            PrefixUnaryOperator::Plus => "+",
            PrefixUnaryOperator::Minus => "-",
            PrefixUnaryOperator::BitwiseNot => "~",
            PrefixUnaryOperator::LogicalNot => "!",
            PrefixUnaryOperator::Delete => "delete",
            PrefixUnaryOperator::Void => "void",
            PrefixUnaryOperator::Typeof => "typeof",
        }
    }

    /// Keyword operators are separated from their operand by a space.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            PrefixUnaryOperator::Delete | PrefixUnaryOperator::Void | PrefixUnaryOperator::Typeof
        )
    }
}

impl fmt::Display for PrefixUnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostfixUnaryOperator {
    Increment,
    Decrement,
}

impl PostfixUnaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            PostfixUnaryOperator::Increment => "++",
            PostfixUnaryOperator::Decrement => "--",
        }
    }
}

impl fmt::Display for PostfixUnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
