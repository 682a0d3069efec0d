use super::{Expression, TypeDecl, Variable, family_from, family_kind, fixed_kind};

/// Any statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    Assert(Assert),
    Block(Block),
    Break(Break),
    Continue(Continue),
    DoWhileLoop(DoWhileLoop),
    Empty(EmptyStatement),
    EnhancedForLoop(EnhancedForLoop),
    Expression(ExpressionStatement),
    ForLoop(ForLoop),
    If(If),
    Labeled(LabeledStatement),
    Return(Return),
    Switch(Switch),
    Synchronized(Synchronized),
    Throw(Throw),
    Try(Try),
    /// A local class, interface, enum or record.
    TypeDecl(Box<TypeDecl>),
    /// A local variable declaration, written with its `;`.
    Variable(Variable),
    WhileLoop(WhileLoop),
    Yield(Yield),
}

family_kind!(Statement {
    Assert,
    Block,
    Break,
    Continue,
    DoWhileLoop,
    Empty,
    EnhancedForLoop,
    Expression,
    ForLoop,
    If,
    Labeled,
    Return,
    Switch,
    Synchronized,
    Throw,
    Try,
    TypeDecl,
    Variable,
    WhileLoop,
    Yield,
});

family_from!(Statement {
    Assert(Assert),
    Block(Block),
    Break(Break),
    Continue(Continue),
    DoWhileLoop(DoWhileLoop),
    Empty(EmptyStatement),
    EnhancedForLoop(EnhancedForLoop),
    Expression(ExpressionStatement),
    ForLoop(ForLoop),
    If(If),
    Labeled(LabeledStatement),
    Return(Return),
    Switch(Switch),
    Synchronized(Synchronized),
    Throw(Throw),
    Try(Try),
    Variable(Variable),
    WhileLoop(WhileLoop),
    Yield(Yield),
});

impl From<TypeDecl> for Statement {
    fn from(decl: TypeDecl) -> Self {
        Self::TypeDecl(Box::new(decl))
    }
}

impl Statement {
    /// An expression statement.
    pub fn expr(expression: Expression) -> Self {
        Self::Expression(ExpressionStatement { expression })
    }

    pub fn block(statements: Vec<Statement>) -> Self {
        Self::Block(Block::new(statements))
    }

    pub fn ret(expression: Option<Expression>) -> Self {
        Self::Return(Return { expression })
    }
}

/// `assert condition [: detail] ;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assert {
    pub condition: Expression,
    pub detail: Option<Expression>,
}

/// `{ statements }`, or `static { … }` as a static initializer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub is_static: bool,
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            is_static: false,
            statements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Break {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Continue {
    pub label: Option<String>,
}

/// `do statement while ( condition ) ;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoWhileLoop {
    pub condition: Expression,
    pub statement: Box<Statement>,
}

/// A lone `;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmptyStatement;

/// `for ( variable : expression ) statement`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnhancedForLoop {
    pub variable: Variable,
    pub expression: Expression,
    pub statement: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpressionStatement {
    pub expression: Expression,
}

/// `for ( init ; condition ; update ) statement`
///
/// Every header part is optional. Initializers that declare several
/// variables list them all; the type and modifiers of the first are written
/// once and later ones contribute only `name = init`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForLoop {
    pub initializer: Vec<ForInit>,
    pub condition: Option<Expression>,
    pub update: Vec<Expression>,
    pub statement: Box<Statement>,
}

/// One item of a `for` initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForInit {
    Variable(Variable),
    Expression(Expression),
}

family_kind!(ForInit { Variable, Expression });

/// `if ( condition ) then [else otherwise]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct If {
    pub condition: Expression,
    pub then_statement: Box<Statement>,
    pub else_statement: Option<Box<Statement>>,
}

/// `label : statement`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledStatement {
    pub label: String,
    pub statement: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Return {
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Switch {
    pub expression: Expression,
    pub cases: Vec<Case>,
}

/// `synchronized ( expression ) block`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Synchronized {
    pub expression: Expression,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throw {
    pub expression: Expression,
}

/// `try [( resources )] block catches [finally block]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Try {
    pub resources: Vec<Resource>,
    pub block: Block,
    pub catches: Vec<Catch>,
    pub finally_block: Option<Block>,
}

/// A try-with-resources resource: a declaration or an effectively final
/// variable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resource {
    Variable(Variable),
    Expression(Expression),
}

family_kind!(Resource { Variable, Expression });

/// `catch ( parameter ) block`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catch {
    pub parameter: Variable,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhileLoop {
    pub condition: Expression,
    pub statement: Box<Statement>,
}

/// `yield value ;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Yield {
    pub value: Expression,
}

/// One arm of a `switch`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Case {
    /// `case expression :` or `default :`, then statements.
    Statement(StatementCase),
    /// `case labels -> body` or `default -> body`.
    Rule(RuleCase),
}

family_kind!(Case { Statement, Rule });
family_from!(Case {
    Statement(StatementCase),
    Rule(RuleCase),
});

/// The syntactic form of a [`Case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseKind {
    Statement,
    Rule,
}

impl Case {
    pub fn case_kind(&self) -> CaseKind {
        match self {
            Self::Statement(_) => CaseKind::Statement,
            Self::Rule(_) => CaseKind::Rule,
        }
    }
}

/// Old-style case. `expression: None` is the `default` arm.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatementCase {
    pub expression: Option<Expression>,
    pub statements: Vec<Statement>,
}

/// Arrow case.
///
/// An empty label list, or one holding only [`CaseLabel::Default`], is the
/// `default ->` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleCase {
    pub labels: Vec<CaseLabel>,
    pub body: Box<Statement>,
}

impl RuleCase {
    /// `true` when this arm is written as `default ->`.
    pub fn is_default(&self) -> bool {
        matches!(self.labels.as_slice(), [] | [CaseLabel::Default(_)])
    }
}

/// Anything that can label a `case`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseLabel {
    Expression(Expression),
    Pattern(Pattern),
    Default(DefaultCaseLabel),
}

family_kind!(CaseLabel {
    Expression,
    Pattern,
    Default,
});
family_from!(CaseLabel {
    Expression(Expression),
    Pattern(Pattern),
    Default(DefaultCaseLabel),
});

/// The `default` label inside a rule case's label list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultCaseLabel;

/// A pattern in `instanceof` or a case label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    Binding(BindingPattern),
    Guarded(GuardedPattern),
    Parenthesized(ParenthesizedPattern),
}

family_kind!(Pattern {
    Binding,
    Guarded,
    Parenthesized,
});
family_from!(Pattern {
    Binding(BindingPattern),
    Guarded(GuardedPattern),
    Parenthesized(ParenthesizedPattern),
});

/// `Type name`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingPattern {
    pub variable: Variable,
}

/// `pattern && guard`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardedPattern {
    pub pattern: Box<Pattern>,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParenthesizedPattern {
    pub pattern: Box<Pattern>,
}

fixed_kind! {
    Assert => Assert,
    Block => Block,
    Break => Break,
    Continue => Continue,
    DoWhileLoop => DoWhileLoop,
    EmptyStatement => EmptyStatement,
    EnhancedForLoop => EnhancedForLoop,
    ExpressionStatement => ExpressionStatement,
    ForLoop => ForLoop,
    If => If,
    LabeledStatement => LabeledStatement,
    Return => Return,
    Switch => Switch,
    Synchronized => Synchronized,
    Throw => Throw,
    Try => Try,
    Catch => Catch,
    WhileLoop => WhileLoop,
    Yield => Yield,
    StatementCase => Case,
    RuleCase => Case,
    DefaultCaseLabel => DefaultCaseLabel,
    BindingPattern => BindingPattern,
    GuardedPattern => GuardedPattern,
    ParenthesizedPattern => ParenthesizedPattern,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Kind, Node};

    fn rule(labels: Vec<CaseLabel>) -> RuleCase {
        RuleCase {
            labels,
            body: Box::new(Statement::Empty(EmptyStatement)),
        }
    }

    #[test]
    fn test_rule_default_detection() {
        assert!(rule(vec![]).is_default());
        assert!(rule(vec![CaseLabel::Default(DefaultCaseLabel)]).is_default());
        assert!(!rule(vec![Expression::int("1").into()]).is_default());
        assert!(
            !rule(vec![
                Expression::int("1").into(),
                CaseLabel::Default(DefaultCaseLabel)
            ])
            .is_default()
        );
    }

    #[test]
    fn test_case_kinds_share_tag() {
        let a: Case = StatementCase::default().into();
        let b: Case = rule(vec![]).into();
        assert_eq!(a.kind(), Kind::Case);
        assert_eq!(b.kind(), Kind::Case);
        assert_eq!(a.case_kind(), CaseKind::Statement);
        assert_eq!(b.case_kind(), CaseKind::Rule);
    }

    #[test]
    fn test_statement_kind_delegates() {
        assert_eq!(Statement::expr(Expression::ident("x")).kind(), Kind::ExpressionStatement);
        assert_eq!(Statement::ret(None).kind(), Kind::Return);
        assert_eq!(Statement::block(vec![]).kind(), Kind::Block);
    }
}
