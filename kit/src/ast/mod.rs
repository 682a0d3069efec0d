//! Java abstract syntax tree.
//!
//! The tree is made of plain owned structs grouped into closed family enums:
//! [`Expression`], [`Statement`], [`Type`], [`Pattern`], [`CaseLabel`],
//! [`Case`], [`Directive`], [`TypeDecl`], [`Member`] and [`Resource`]. A
//! position that accepts "any expression" is typed as `Expression`, so the
//! compiler rejects a statement where an expression belongs.
//!
//! Every struct and family enum implements [`Node`], which gives its
//! [`Kind`] and, through [`ToTokens`], its source text.
//!
//! ```ignore
//! use javast::ast::*;
//! use javast::ToTokens;
//!
//! let stmt = Statement::expr(Expression::assign(
//!     Expression::ident("a"),
//!     Expression::int("5"),
//! ));
//! assert_eq!(stmt.to_spaced()?, "a = 5 ;");
//! ```

mod decl;
mod expr;
mod stmt;
mod tree;
mod ty;
mod unit;

pub use decl::*;
pub use expr::*;
pub use stmt::*;
pub use tree::*;
pub use ty::*;
pub use unit::*;

use javast_core::ToTokens;

/// One tag per concrete node shape.
///
/// Operator, literal, wildcard and annotation nodes carry their own tag per
/// flavour, so the kind of a [`Binary`] is the kind of its operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    AnnotatedType,
    /// Declaration annotation.
    Annotation,
    /// Type annotation.
    TypeAnnotation,
    ArrayAccess,
    ArrayType,
    Assert,
    Assignment,
    Block,
    Break,
    Case,
    Catch,
    Class,
    ClassBody,
    CompilationUnit,
    ConditionalExpression,
    Continue,
    DoWhileLoop,
    EnhancedForLoop,
    EnumConstant,
    ExpressionStatement,
    MemberSelect,
    MemberReference,
    ForLoop,
    Identifier,
    If,
    Import,
    InstanceOf,
    LabeledStatement,
    Method,
    MethodInvocation,
    Modifiers,
    NewArray,
    NewClass,
    LambdaExpression,
    Package,
    Parenthesized,
    BindingPattern,
    GuardedPattern,
    ParenthesizedPattern,
    DefaultCaseLabel,
    PrimitiveType,
    Return,
    EmptyStatement,
    Switch,
    SwitchExpression,
    Synchronized,
    Throw,
    Try,
    ParameterizedType,
    UnionType,
    IntersectionType,
    TypeCast,
    TypeParameter,
    Variable,
    WhileLoop,
    PostfixIncrement,
    PostfixDecrement,
    PrefixIncrement,
    PrefixDecrement,
    UnaryPlus,
    UnaryMinus,
    BitwiseComplement,
    LogicalComplement,
    Multiply,
    Divide,
    Remainder,
    Plus,
    Minus,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    EqualTo,
    NotEqualTo,
    And,
    Xor,
    Or,
    ConditionalAnd,
    ConditionalOr,
    MultiplyAssignment,
    DivideAssignment,
    RemainderAssignment,
    PlusAssignment,
    MinusAssignment,
    LeftShiftAssignment,
    RightShiftAssignment,
    UnsignedRightShiftAssignment,
    AndAssignment,
    XorAssignment,
    OrAssignment,
    IntLiteral,
    LongLiteral,
    FloatLiteral,
    DoubleLiteral,
    BooleanLiteral,
    CharLiteral,
    StringLiteral,
    NullLiteral,
    UnboundedWildcard,
    ExtendsWildcard,
    SuperWildcard,
    Erroneous,
    Interface,
    Enum,
    AnnotationType,
    Module,
    Exports,
    Opens,
    Provides,
    Record,
    Requires,
    Uses,
    Yield,
}

impl Kind {
    /// `true` for the per-operator tags of [`Unary`].
    pub const fn is_unary(self) -> bool {
        matches!(
            self,
            Self::PostfixIncrement
                | Self::PostfixDecrement
                | Self::PrefixIncrement
                | Self::PrefixDecrement
                | Self::UnaryPlus
                | Self::UnaryMinus
                | Self::BitwiseComplement
                | Self::LogicalComplement
        )
    }

    /// `true` for the per-operator tags of [`Binary`].
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            Self::Multiply
                | Self::Divide
                | Self::Remainder
                | Self::Plus
                | Self::Minus
                | Self::LeftShift
                | Self::RightShift
                | Self::UnsignedRightShift
                | Self::LessThan
                | Self::GreaterThan
                | Self::LessThanEqual
                | Self::GreaterThanEqual
                | Self::EqualTo
                | Self::NotEqualTo
                | Self::And
                | Self::Xor
                | Self::Or
                | Self::ConditionalAnd
                | Self::ConditionalOr
        )
    }

    /// `true` for the per-operator tags of [`CompoundAssignment`].
    pub const fn is_compound_assignment(self) -> bool {
        matches!(
            self,
            Self::MultiplyAssignment
                | Self::DivideAssignment
                | Self::RemainderAssignment
                | Self::PlusAssignment
                | Self::MinusAssignment
                | Self::LeftShiftAssignment
                | Self::RightShiftAssignment
                | Self::UnsignedRightShiftAssignment
                | Self::AndAssignment
                | Self::XorAssignment
                | Self::OrAssignment
        )
    }

    /// `true` for the per-variant tags of [`Literal`].
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IntLiteral
                | Self::LongLiteral
                | Self::FloatLiteral
                | Self::DoubleLiteral
                | Self::BooleanLiteral
                | Self::CharLiteral
                | Self::StringLiteral
                | Self::NullLiteral
        )
    }

    /// `true` for the five type declaration tags.
    pub const fn is_type_decl(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Interface | Self::Enum | Self::Record | Self::AnnotationType
        )
    }
}

/// Universal supertype of every tree node.
pub trait Node: ToTokens {
    /// The node's tag. Total and constant for the node's lifetime.
    fn kind(&self) -> Kind;
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn kind(&self) -> Kind {
        self.as_ref().kind()
    }
}

impl<T: Node + ?Sized> Node for &T {
    fn kind(&self) -> Kind {
        (*self).kind()
    }
}

/// Implements [`Node`] for structs whose kind never varies.
macro_rules! fixed_kind {
    ($( $ty:ty => $kind:ident ),* $(,)?) => {
        $(
            impl $crate::ast::Node for $ty {
                #[inline]
                fn kind(&self) -> $crate::ast::Kind {
                    $crate::ast::Kind::$kind
                }
            }
        )*
    };
}

/// Implements [`Node`] for a family enum whose variants each hold a node.
macro_rules! family_kind {
    ($family:ident { $( $variant:ident ),* $(,)? }) => {
        impl $crate::ast::Node for $family {
            fn kind(&self) -> $crate::ast::Kind {
                match self {
                    $( Self::$variant(node) => $crate::ast::Node::kind(node), )*
                }
            }
        }
    };
}

/// `From<Node>` conversions into a family enum.
macro_rules! family_from {
    ($family:ident { $( $variant:ident($ty:ty) ),* $(,)? }) => {
        $(
            impl From<$ty> for $family {
                #[inline]
                fn from(node: $ty) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

pub(crate) use {family_from, family_kind, fixed_kind};
