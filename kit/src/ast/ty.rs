use super::{Annotation, Expression, Kind, Node, family_from, family_kind, fixed_kind};
use crate::token::TypeKind;

/// Any type, as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Primitive(PrimitiveType),
    Array(ArrayType),
    Parameterized(ParameterizedType),
    Union(UnionType),
    Intersection(IntersectionType),
    Wildcard(Wildcard),
    Annotated(AnnotatedType),
    /// A class or interface name: an identifier or a member-select chain.
    Name(Expression),
}

family_kind!(Type {
    Primitive,
    Array,
    Parameterized,
    Union,
    Intersection,
    Wildcard,
    Annotated,
    Name,
});

family_from!(Type {
    Primitive(PrimitiveType),
    Array(ArrayType),
    Parameterized(ParameterizedType),
    Union(UnionType),
    Intersection(IntersectionType),
    Wildcard(Wildcard),
    Annotated(AnnotatedType),
});

impl Type {
    pub fn primitive(kind: TypeKind) -> Self {
        Self::Primitive(PrimitiveType { kind })
    }

    /// A simple type name.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(Expression::ident(name))
    }

    /// A dotted type name, `"java.util.List"`.
    pub fn qualified(name: &str) -> Self {
        Self::Name(Expression::qualified(name))
    }

    /// `Self []`
    pub fn array(self) -> Self {
        Self::Array(ArrayType {
            element: Box::new(self),
        })
    }

    /// `Self < arguments >`
    pub fn parameterized(self, arguments: Vec<Type>) -> Self {
        Self::Parameterized(ParameterizedType {
            ty: Box::new(self),
            arguments,
        })
    }
}

/// A primitive type or the `void` / `null` pseudo-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimitiveType {
    pub kind: TypeKind,
}

/// `element []`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayType {
    pub element: Box<Type>,
}

/// `Type < arguments >`. An empty argument list writes no angle brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterizedType {
    pub ty: Box<Type>,
    pub arguments: Vec<Type>,
}

/// `A | B`, as in a multi-catch parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnionType {
    pub alternatives: Vec<Type>,
}

/// `A & B`, as in a cast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionType {
    pub bounds: Vec<Type>,
}

/// A wildcard type argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wildcard {
    /// `?`
    Unbounded,
    /// `? extends bound`
    Extends(Box<Type>),
    /// `? super bound`
    Super(Box<Type>),
}

impl Wildcard {
    pub fn bound(&self) -> Option<&Type> {
        match self {
            Self::Unbounded => None,
            Self::Extends(ty) | Self::Super(ty) => Some(ty),
        }
    }
}

impl Node for Wildcard {
    fn kind(&self) -> Kind {
        match self {
            Self::Unbounded => Kind::UnboundedWildcard,
            Self::Extends(_) => Kind::ExtendsWildcard,
            Self::Super(_) => Kind::SuperWildcard,
        }
    }
}

/// `@A @B underlying`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotatedType {
    pub annotations: Vec<Annotation>,
    pub underlying: Box<Type>,
}

fixed_kind! {
    PrimitiveType => PrimitiveType,
    ArrayType => ArrayType,
    ParameterizedType => ParameterizedType,
    UnionType => UnionType,
    IntersectionType => IntersectionType,
    AnnotatedType => AnnotatedType,
}
