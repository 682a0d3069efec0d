//! Keyword, punctuation and operator tables.
//!
//! Every piece of fixed text the serializer emits comes from one of the enums
//! in this module, so spellings live in exactly one place. All of them
//! implement `AsRef<str>` and can be handed to
//! [`Printer::token`](javast_core::Printer::token) directly.

use std::fmt;

use crate::ast::Kind;

macro_rules! spelled {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$( Self::$variant, )*];

            /// Source spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )*
                }
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

spelled! {
    /// Fixed tokens: keywords and punctuation.
    ///
    /// Generic angle brackets and the relational operators are separate
    /// variants even though they are spelled the same.
    pub enum Token {
        Assert => "assert",
        Break => "break",
        Case => "case",
        Catch => "catch",
        Class => "class",
        Continue => "continue",
        Default => "default",
        Do => "do",
        Else => "else",
        Enum => "enum",
        Exports => "exports",
        Extends => "extends",
        Finally => "finally",
        For => "for",
        If => "if",
        Implements => "implements",
        Import => "import",
        InstanceOf => "instanceof",
        Interface => "interface",
        /// Annotation type declarations: `@interface`.
        AtInterface => "@interface",
        Module => "module",
        New => "new",
        Open => "open",
        Opens => "opens",
        Package => "package",
        Permits => "permits",
        Provides => "provides",
        Record => "record",
        Requires => "requires",
        Return => "return",
        Static => "static",
        Super => "super",
        Switch => "switch",
        Synchronized => "synchronized",
        Throw => "throw",
        Throws => "throws",
        To => "to",
        Transitive => "transitive",
        Try => "try",
        Uses => "uses",
        While => "while",
        With => "with",
        Yield => "yield",
        True => "true",
        False => "false",
        Null => "null",

        At => "@",
        LParen => "(",
        RParen => ")",
        LBrace => "{",
        RBrace => "}",
        LBracket => "[",
        RBracket => "]",
        /// Array type suffix, a single token.
        Brackets => "[]",
        /// Opens a type argument or type parameter list.
        LAngle => "<",
        /// Closes a type argument or type parameter list.
        RAngle => ">",
        Comma => ",",
        Semi => ";",
        Colon => ":",
        ColonColon => "::",
        Dot => ".",
        Question => "?",
        Arrow => "->",
        Eq => "=",
        /// Intersection types and type parameter bounds.
        Amp => "&",
        /// Union types in multi-catch.
        Pipe => "|",
        /// Guards in patterns.
        AmpAmp => "&&",
    }
}

spelled! {
    /// Declaration modifier flags.
    pub enum Modifier {
        Public => "public",
        Protected => "protected",
        Private => "private",
        Abstract => "abstract",
        Default => "default",
        Static => "static",
        Sealed => "sealed",
        NonSealed => "non-sealed",
        Final => "final",
        Transient => "transient",
        Volatile => "volatile",
        Synchronized => "synchronized",
        Native => "native",
        Strictfp => "strictfp",
    }
}

spelled! {
    /// Binary operators.
    pub enum BinaryOperator {
        Multiply => "*",
        Divide => "/",
        Remainder => "%",
        Plus => "+",
        Minus => "-",
        LeftShift => "<<",
        RightShift => ">>",
        UnsignedRightShift => ">>>",
        LessThan => "<",
        GreaterThan => ">",
        LessThanEqual => "<=",
        GreaterThanEqual => ">=",
        EqualTo => "==",
        NotEqualTo => "!=",
        And => "&",
        Xor => "^",
        Or => "|",
        ConditionalAnd => "&&",
        ConditionalOr => "||",
    }
}

spelled! {
    /// Unary operators, prefix and postfix.
    pub enum UnaryOperator {
        PostfixIncrement => "++",
        PostfixDecrement => "--",
        PrefixIncrement => "++",
        PrefixDecrement => "--",
        UnaryPlus => "+",
        UnaryMinus => "-",
        BitwiseComplement => "~",
        LogicalComplement => "!",
    }
}

spelled! {
    /// Compound assignment operators.
    pub enum AssignmentOperator {
        Multiply => "*=",
        Divide => "/=",
        Remainder => "%=",
        Plus => "+=",
        Minus => "-=",
        LeftShift => "<<=",
        RightShift => ">>=",
        UnsignedRightShift => ">>>=",
        And => "&=",
        Xor => "^=",
        Or => "|=",
    }
}

impl BinaryOperator {
    pub const fn kind(self) -> Kind {
        match self {
            Self::Multiply => Kind::Multiply,
            Self::Divide => Kind::Divide,
            Self::Remainder => Kind::Remainder,
            Self::Plus => Kind::Plus,
            Self::Minus => Kind::Minus,
            Self::LeftShift => Kind::LeftShift,
            Self::RightShift => Kind::RightShift,
            Self::UnsignedRightShift => Kind::UnsignedRightShift,
            Self::LessThan => Kind::LessThan,
            Self::GreaterThan => Kind::GreaterThan,
            Self::LessThanEqual => Kind::LessThanEqual,
            Self::GreaterThanEqual => Kind::GreaterThanEqual,
            Self::EqualTo => Kind::EqualTo,
            Self::NotEqualTo => Kind::NotEqualTo,
            Self::And => Kind::And,
            Self::Xor => Kind::Xor,
            Self::Or => Kind::Or,
            Self::ConditionalAnd => Kind::ConditionalAnd,
            Self::ConditionalOr => Kind::ConditionalOr,
        }
    }
}

impl UnaryOperator {
    pub const fn kind(self) -> Kind {
        match self {
            Self::PostfixIncrement => Kind::PostfixIncrement,
            Self::PostfixDecrement => Kind::PostfixDecrement,
            Self::PrefixIncrement => Kind::PrefixIncrement,
            Self::PrefixDecrement => Kind::PrefixDecrement,
            Self::UnaryPlus => Kind::UnaryPlus,
            Self::UnaryMinus => Kind::UnaryMinus,
            Self::BitwiseComplement => Kind::BitwiseComplement,
            Self::LogicalComplement => Kind::LogicalComplement,
        }
    }

    /// `true` when the operator follows its operand.
    #[inline]
    pub const fn is_postfix(self) -> bool {
        matches!(self, Self::PostfixIncrement | Self::PostfixDecrement)
    }
}

impl AssignmentOperator {
    pub const fn kind(self) -> Kind {
        match self {
            Self::Multiply => Kind::MultiplyAssignment,
            Self::Divide => Kind::DivideAssignment,
            Self::Remainder => Kind::RemainderAssignment,
            Self::Plus => Kind::PlusAssignment,
            Self::Minus => Kind::MinusAssignment,
            Self::LeftShift => Kind::LeftShiftAssignment,
            Self::RightShift => Kind::RightShiftAssignment,
            Self::UnsignedRightShift => Kind::UnsignedRightShiftAssignment,
            Self::And => Kind::AndAssignment,
            Self::Xor => Kind::XorAssignment,
            Self::Or => Kind::OrAssignment,
        }
    }
}

/// The kind of a type.
///
/// Only the primitive kinds and the `void` and `null` pseudo-types have a
/// keyword. The rest exist so that a type kind coming from a compiler can be
/// stored unchanged; asking such a type to serialize itself is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
    None,
    Null,
    Array,
    Declared,
    Error,
    TypeVar,
    Wildcard,
    Package,
    Executable,
    Union,
    Intersection,
    Module,
    Other,
}

impl TypeKind {
    /// Keyword for this kind, if it has one.
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Boolean => Some("boolean"),
            Self::Byte => Some("byte"),
            Self::Short => Some("short"),
            Self::Int => Some("int"),
            Self::Long => Some("long"),
            Self::Char => Some("char"),
            Self::Float => Some("float"),
            Self::Double => Some("double"),
            Self::Void => Some("void"),
            Self::Null => Some("null"),
            _ => None,
        }
    }

    /// `true` for the eight primitive types.
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Byte
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::Char
                | Self::Float
                | Self::Double
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_and_relational_share_spelling() {
        assert_ne!(Token::LAngle, Token::RAngle);
        assert_eq!(Token::LAngle.as_str(), BinaryOperator::LessThan.as_str());
        assert_eq!(Token::RAngle.as_str(), BinaryOperator::GreaterThan.as_str());
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(Modifier::ALL.len(), 14);
        assert_eq!(BinaryOperator::ALL.len(), 19);
        assert_eq!(UnaryOperator::ALL.len(), 8);
        assert_eq!(AssignmentOperator::ALL.len(), 11);
    }

    #[test]
    fn test_operator_kinds_are_distinct() {
        let mut kinds: Vec<Kind> = BinaryOperator::ALL.iter().map(|op| op.kind()).collect();
        kinds.extend(UnaryOperator::ALL.iter().map(|op| op.kind()));
        kinds.extend(AssignmentOperator::ALL.iter().map(|op| op.kind()));
        let total = kinds.len();
        kinds.sort_by_key(|k| *k as u16);
        kinds.dedup();
        assert_eq!(kinds.len(), total);
    }

    #[test]
    fn test_type_kind_keywords() {
        assert_eq!(TypeKind::Void.keyword(), Some("void"));
        assert_eq!(TypeKind::Null.keyword(), Some("null"));
        assert_eq!(TypeKind::Declared.keyword(), None);
        assert!(TypeKind::Int.is_primitive());
        assert!(!TypeKind::Void.is_primitive());
    }

    #[test]
    fn test_non_sealed_spelling() {
        assert_eq!(Modifier::NonSealed.to_string(), "non-sealed");
    }
}
