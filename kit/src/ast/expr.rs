use super::{Case, ClassBody, Kind, Node, Pattern, Tree, Type, Variable, family_from, fixed_kind};
use super::{Block, family_kind};
use crate::token::{AssignmentOperator, BinaryOperator, UnaryOperator};

/// Any expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    Annotation(Annotation),
    ArrayAccess(ArrayAccess),
    Assignment(Assignment),
    Binary(Binary),
    CompoundAssignment(CompoundAssignment),
    Conditional(Conditional),
    Erroneous(Erroneous),
    Identifier(Identifier),
    InstanceOf(InstanceOf),
    Lambda(Lambda),
    Literal(Literal),
    MemberReference(MemberReference),
    MemberSelect(MemberSelect),
    MethodInvocation(MethodInvocation),
    NewArray(NewArray),
    NewClass(NewClass),
    Parenthesized(Parenthesized),
    SwitchExpression(SwitchExpression),
    TypeCast(TypeCast),
    Unary(Unary),
}

family_kind!(Expression {
    Annotation,
    ArrayAccess,
    Assignment,
    Binary,
    CompoundAssignment,
    Conditional,
    Erroneous,
    Identifier,
    InstanceOf,
    Lambda,
    Literal,
    MemberReference,
    MemberSelect,
    MethodInvocation,
    NewArray,
    NewClass,
    Parenthesized,
    SwitchExpression,
    TypeCast,
    Unary,
});

family_from!(Expression {
    Annotation(Annotation),
    ArrayAccess(ArrayAccess),
    Assignment(Assignment),
    Binary(Binary),
    CompoundAssignment(CompoundAssignment),
    Conditional(Conditional),
    Erroneous(Erroneous),
    Identifier(Identifier),
    InstanceOf(InstanceOf),
    Lambda(Lambda),
    Literal(Literal),
    MemberReference(MemberReference),
    MemberSelect(MemberSelect),
    MethodInvocation(MethodInvocation),
    NewArray(NewArray),
    NewClass(NewClass),
    Parenthesized(Parenthesized),
    SwitchExpression(SwitchExpression),
    TypeCast(TypeCast),
    Unary(Unary),
});

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Identifier::new(name).into()
    }

    /// Builds a member-select chain from a dotted name.
    ///
    /// `"java.util.List"` becomes `java . util . List`.
    pub fn qualified(name: &str) -> Self {
        let mut parts = name.split('.');
        let first = Self::ident(parts.next().unwrap_or_default());
        parts.fold(first, |expr, part| Self::select(expr, part))
    }

    pub fn select(expression: Expression, identifier: impl Into<String>) -> Self {
        MemberSelect {
            expression: Box::new(expression),
            identifier: identifier.into(),
        }
        .into()
    }

    pub fn call(method_select: Expression, arguments: Vec<Expression>) -> Self {
        MethodInvocation {
            type_arguments: Vec::new(),
            method_select: Box::new(method_select),
            arguments,
        }
        .into()
    }

    pub fn int(text: impl Into<String>) -> Self {
        Literal::Int(text.into()).into()
    }

    /// A string literal. `text` is the escaped body, without quotes.
    pub fn string(text: impl Into<String>) -> Self {
        Literal::String(text.into()).into()
    }

    pub fn null() -> Self {
        Literal::Null.into()
    }

    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
        .into()
    }

    pub fn unary(operator: UnaryOperator, expression: Expression) -> Self {
        Unary {
            operator,
            expression: Box::new(expression),
        }
        .into()
    }

    pub fn assign(variable: Expression, expression: Expression) -> Self {
        Assignment {
            variable: Box::new(variable),
            expression: Box::new(expression),
        }
        .into()
    }

    pub fn paren(expression: Expression) -> Self {
        Parenthesized {
            expression: Box::new(expression),
        }
        .into()
    }
}

/// An annotation, `@Name` or `@Name(args)`.
///
/// Arguments are usually assignments (`key = value`) or a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    pub flavour: AnnotationFlavour,
    pub annotation_type: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// Whether an annotation applies to a declaration or to a type use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationFlavour {
    #[default]
    Declaration,
    Type,
}

impl Annotation {
    /// A declaration annotation without arguments.
    pub fn marker(name: &str) -> Self {
        Self {
            flavour: AnnotationFlavour::Declaration,
            annotation_type: Box::new(Expression::qualified(name)),
            arguments: Vec::new(),
        }
    }
}

impl Node for Annotation {
    fn kind(&self) -> Kind {
        match self.flavour {
            AnnotationFlavour::Declaration => Kind::Annotation,
            AnnotationFlavour::Type => Kind::TypeAnnotation,
        }
    }
}

/// `expression [ index ]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayAccess {
    pub expression: Box<Expression>,
    pub index: Box<Expression>,
}

/// `variable = expression`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub variable: Box<Expression>,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binary {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl Node for Binary {
    fn kind(&self) -> Kind {
        self.operator.kind()
    }
}

/// `variable op= expression`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundAssignment {
    pub operator: AssignmentOperator,
    pub variable: Box<Expression>,
    pub expression: Box<Expression>,
}

impl Node for CompoundAssignment {
    fn kind(&self) -> Kind {
        self.operator.kind()
    }
}

/// `condition ? true_expression : false_expression`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conditional {
    pub condition: Box<Expression>,
    pub true_expression: Box<Expression>,
    pub false_expression: Box<Expression>,
}

/// Placeholder for malformed input.
///
/// Keeps whatever could be salvaged. Serializing it always fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Erroneous {
    pub error_nodes: Vec<Tree>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// `expression instanceof Type` or `expression instanceof Pattern`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceOf {
    pub expression: Box<Expression>,
    pub test: InstanceOfTest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstanceOfTest {
    Type(Box<Type>),
    Pattern(Box<Pattern>),
}

/// `( params ) -> body`
///
/// Implicitly typed parameters are [`Variable`]s without a type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lambda {
    pub parameters: Vec<Variable>,
    pub body: LambdaBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LambdaBody {
    Expression(Box<Expression>),
    Block(Block),
}

/// The two lambda forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyKind {
    Expression,
    Statement,
}

impl LambdaBody {
    pub fn body_kind(&self) -> BodyKind {
        match self {
            Self::Expression(_) => BodyKind::Expression,
            Self::Block(_) => BodyKind::Statement,
        }
    }
}

impl Lambda {
    #[inline]
    pub fn body_kind(&self) -> BodyKind {
        self.body.body_kind()
    }
}

/// A literal, stored as its source text.
///
/// Numeric text keeps its suffix (`10L`, `1.5f`). `Char` and `String` hold
/// the escaped contents; the quotes are added when the literal is written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Int(String),
    Long(String),
    Float(String),
    Double(String),
    Boolean(bool),
    Char(String),
    String(String),
    Null,
}

impl Node for Literal {
    fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::IntLiteral,
            Self::Long(_) => Kind::LongLiteral,
            Self::Float(_) => Kind::FloatLiteral,
            Self::Double(_) => Kind::DoubleLiteral,
            Self::Boolean(_) => Kind::BooleanLiteral,
            Self::Char(_) => Kind::CharLiteral,
            Self::String(_) => Kind::StringLiteral,
            Self::Null => Kind::NullLiteral,
        }
    }
}

/// `qualifier :: name` or `qualifier :: new`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberReference {
    pub qualifier: Box<Expression>,
    pub type_arguments: Vec<Type>,
    pub target: ReferenceTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceTarget {
    /// A method reference.
    Invoke(String),
    /// A constructor reference.
    New,
}

/// The two member reference modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceMode {
    Invoke,
    New,
}

impl MemberReference {
    pub fn mode(&self) -> ReferenceMode {
        match self.target {
            ReferenceTarget::Invoke(_) => ReferenceMode::Invoke,
            ReferenceTarget::New => ReferenceMode::New,
        }
    }
}

/// `expression . identifier`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberSelect {
    pub expression: Box<Expression>,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodInvocation {
    pub type_arguments: Vec<Type>,
    pub method_select: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// Array creation.
///
/// `new int [ n ]`, `new int [] { 1 , 2 }` or a bare initializer `{ 1 , 2 }`
/// when `ty` is absent. `initializers: None` writes no braces at all, while
/// `Some(vec![])` writes `{ }`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewArray {
    pub annotations: Vec<Annotation>,
    pub ty: Option<Box<Type>>,
    pub dimensions: Vec<Expression>,
    /// Annotations per dimension, matched to `dimensions` by position.
    pub dim_annotations: Vec<Vec<Annotation>>,
    pub initializers: Option<Vec<Expression>>,
}

/// `[outer .] new [<targs>] Type ( args ) [body]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewClass {
    pub enclosing_expression: Option<Box<Expression>>,
    pub type_arguments: Vec<Type>,
    pub identifier: Box<Type>,
    pub arguments: Vec<Expression>,
    pub class_body: Option<ClassBody>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parenthesized {
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchExpression {
    pub expression: Box<Expression>,
    pub cases: Vec<Case>,
}

/// `( Type ) expression`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCast {
    pub ty: Box<Type>,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unary {
    pub operator: UnaryOperator,
    pub expression: Box<Expression>,
}

impl Node for Unary {
    fn kind(&self) -> Kind {
        self.operator.kind()
    }
}

fixed_kind! {
    ArrayAccess => ArrayAccess,
    Assignment => Assignment,
    Conditional => ConditionalExpression,
    Erroneous => Erroneous,
    Identifier => Identifier,
    InstanceOf => InstanceOf,
    Lambda => LambdaExpression,
    MemberReference => MemberReference,
    MemberSelect => MemberSelect,
    MethodInvocation => MethodInvocation,
    NewArray => NewArray,
    NewClass => NewClass,
    Parenthesized => Parenthesized,
    SwitchExpression => SwitchExpression,
    TypeCast => TypeCast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_operator() {
        let e = Expression::binary(
            BinaryOperator::UnsignedRightShift,
            Expression::ident("a"),
            Expression::int("3"),
        );
        assert_eq!(e.kind(), Kind::UnsignedRightShift);

        let e = Expression::unary(UnaryOperator::PostfixIncrement, Expression::ident("i"));
        assert_eq!(e.kind(), Kind::PostfixIncrement);
    }

    #[test]
    fn test_literal_kinds() {
        assert_eq!(Literal::Long("10L".into()).kind(), Kind::LongLiteral);
        assert_eq!(Literal::Boolean(true).kind(), Kind::BooleanLiteral);
        assert_eq!(Literal::Null.kind(), Kind::NullLiteral);
    }

    #[test]
    fn test_qualified_builds_select_chain() {
        let e = Expression::qualified("java.util.List");
        let Expression::MemberSelect(outer) = &e else {
            panic!("expected member select, got {e:?}");
        };
        assert_eq!(outer.identifier, "List");
        let Expression::MemberSelect(inner) = outer.expression.as_ref() else {
            panic!("expected member select");
        };
        assert_eq!(inner.identifier, "util");
        assert_eq!(*inner.expression, Expression::ident("java"));
    }

    #[test]
    fn test_annotation_flavour_kind() {
        let mut a = Annotation::marker("Override");
        assert_eq!(a.kind(), Kind::Annotation);
        a.flavour = AnnotationFlavour::Type;
        assert_eq!(a.kind(), Kind::TypeAnnotation);
    }

    #[test]
    fn test_lambda_body_kind() {
        let l = Lambda {
            parameters: Vec::new(),
            body: LambdaBody::Block(Block::default()),
        };
        assert_eq!(l.body_kind(), BodyKind::Statement);
    }
}
