use super::{ConstructionError, Declaration, Expression, Identifier, ModifierFlags, Trivia, Type};

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Block(Block),
    Variable(VariableStatement),
    Empty,
    Expression(Expression),
    If(Box<IfStatement>),
    DoWhile(Box<DoWhileStatement>),
    While(Box<WhileStatement>),
    For(Box<ForStatement>),
    ForIn(Box<ForInStatement>),
    ForOf(Box<ForOfStatement>),
    Continue(Option<Identifier>),
    Break(Option<Identifier>),
    Return(Option<Expression>),
    Switch(Box<SwitchStatement>),
    Labeled(Box<LabeledStatement>),
    Throw(Expression),
    Try(Box<TryStatement>),
    Debugger,
    Declaration(Declaration),
}

impl From<Declaration> for Statement {
    fn from(declaration: Declaration) -> Self {
        Statement::Declaration(declaration)
    }
}

/// A unit of statements built by calling code.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Module {
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Block { statements }
    }
}

// =============================================================================
// Variables
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclaration {
    pub name: Identifier,
    pub ty: Option<Type>,
    pub initializer: Option<Expression>,
}

/// `let a = 1, b`; never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclarationList {
    kind: VariableKind,
    declarations: Vec<VariableDeclaration>,
}

impl VariableDeclarationList {
    pub fn new(
        kind: VariableKind,
        declarations: Vec<VariableDeclaration>,
    ) -> Result<Self, ConstructionError> {
        if declarations.is_empty() {
            return Err(ConstructionError::TooFewElements {
                what: "a variable declaration list",
                min: 1,
            });
        }
        Ok(VariableDeclarationList { kind, declarations })
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn declarations(&self) -> &[VariableDeclaration] {
        &self.declarations
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableStatement {
    pub trivia: Trivia,
    pub modifiers: ModifierFlags,
    pub declaration_list: VariableDeclarationList,
}

// =============================================================================
// Control flow
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_statement: Statement,
    pub else_statement: Option<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoWhileStatement {
    pub body: Statement,
    pub condition: Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Statement,
}

/// The part of a `for` head before `;`, `in` or `of`.
#[derive(Clone, Debug, PartialEq)]
pub enum ForInitializer {
    Variable(VariableDeclarationList),
    Expression(Expression),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForStatement {
    pub initializer: Option<ForInitializer>,
    pub condition: Option<Expression>,
    pub incrementor: Option<Expression>,
    pub body: Statement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForInStatement {
    pub initializer: ForInitializer,
    pub expression: Expression,
    pub body: Statement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForOfStatement {
    pub initializer: ForInitializer,
    pub expression: Expression,
    pub body: Statement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchStatement {
    pub expression: Expression,
    pub clauses: Vec<CaseClause>,
}

/// `case test:` or, without a test, `default:`.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseClause {
    pub test: Option<Expression>,
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabeledStatement {
    pub label: Identifier,
    pub statement: Statement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatchClause {
    pub variable: Option<Identifier>,
    pub block: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TryStatement {
    try_block: Block,
    catch_clause: Option<CatchClause>,
    finally_block: Option<Block>,
}

impl TryStatement {
    pub fn new(
        try_block: Block,
        catch_clause: Option<CatchClause>,
        finally_block: Option<Block>,
    ) -> Result<Self, ConstructionError> {
        if catch_clause.is_none() && finally_block.is_none() {
            return Err(ConstructionError::TryWithoutHandler);
        }
        Ok(TryStatement {
            try_block,
            catch_clause,
            finally_block,
        })
    }

    pub fn try_block(&self) -> &Block {
        &self.try_block
    }

    pub fn catch_clause(&self) -> Option<&CatchClause> {
        self.catch_clause.as_ref()
    }

    pub fn finally_block(&self) -> Option<&Block> {
        self.finally_block.as_ref()
    }
}
