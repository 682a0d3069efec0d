use super::{
    Annotation, Block, EmptyStatement, Expression, Type, family_from, family_kind, fixed_kind,
};
use crate::token::Modifier;

/// Annotations and flags in front of a declaration.
///
/// Annotations are written first, then the flags in list order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    pub flags: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
}

impl Modifiers {
    pub fn flags(flags: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            flags: flags.into_iter().collect(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.annotations.is_empty()
    }
}

/// `@A T extends B & C`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeParameter {
    pub annotations: Vec<Annotation>,
    pub name: String,
    pub bounds: Vec<Type>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded(name: impl Into<String>, bounds: Vec<Type>) -> Self {
        Self {
            bounds,
            ..Self::new(name)
        }
    }
}

/// A variable declaration: field, local, parameter, record component,
/// resource, catch parameter or lambda parameter.
///
/// Writes no terminating `;`; the enclosing statement or member adds it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    pub modifiers: Modifiers,
    /// `None` for implicitly typed lambda parameters.
    pub ty: Option<Type>,
    pub name: String,
    /// Written instead of `name` when present, e.g. `Outer.this` for a
    /// receiver parameter.
    pub name_expression: Option<Expression>,
    pub initializer: Option<Expression>,
}

impl Variable {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self {
            modifiers: Modifiers::default(),
            ty: Some(ty),
            name: name.into(),
            name_expression: None,
            initializer: None,
        }
    }

    /// A lambda parameter with no declared type.
    pub fn inferred(name: impl Into<String>) -> Self {
        Self {
            modifiers: Modifiers::default(),
            ty: None,
            name: name.into(),
            name_expression: None,
            initializer: None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_initializer(mut self, initializer: Expression) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

/// A method or constructor.
///
/// Constructors have no return type. A method without a body writes no
/// `;`, matching interface and abstract declarations as they are listed
/// inside a body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Method {
    pub modifiers: Modifiers,
    pub type_parameters: Vec<TypeParameter>,
    pub return_type: Option<Type>,
    pub name: String,
    pub receiver_parameter: Option<Variable>,
    pub parameters: Vec<Variable>,
    pub throws: Vec<Expression>,
    pub body: Option<Block>,
    /// Default value of an annotation type element.
    pub default_value: Option<Expression>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Modifiers::default(),
            type_parameters: Vec::new(),
            return_type: None,
            name: name.into(),
            receiver_parameter: None,
            parameters: Vec::new(),
            throws: Vec::new(),
            body: None,
            default_value: None,
        }
    }
}

/// A class-like declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeDecl {
    Class(Class),
    Interface(Interface),
    Enum(Enum),
    Record(Record),
    AnnotationType(AnnotationType),
}

family_kind!(TypeDecl {
    Class,
    Interface,
    Enum,
    Record,
    AnnotationType,
});
family_from!(TypeDecl {
    Class(Class),
    Interface(Interface),
    Enum(Enum),
    Record(Record),
    AnnotationType(AnnotationType),
});

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(d) => &d.name,
            Self::Interface(d) => &d.name,
            Self::Enum(d) => &d.name,
            Self::Record(d) => &d.name,
            Self::AnnotationType(d) => &d.name,
        }
    }

    pub fn modifiers(&self) -> &Modifiers {
        match self {
            Self::Class(d) => &d.modifiers,
            Self::Interface(d) => &d.modifiers,
            Self::Enum(d) => &d.modifiers,
            Self::Record(d) => &d.modifiers,
            Self::AnnotationType(d) => &d.modifiers,
        }
    }

    pub fn members(&self) -> &[Member] {
        match self {
            Self::Class(d) => &d.members,
            Self::Interface(d) => &d.members,
            Self::Enum(d) => &d.members,
            Self::Record(d) => &d.members,
            Self::AnnotationType(d) => &d.members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Class {
    pub modifiers: Modifiers,
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Option<Type>,
    pub implements: Vec<Type>,
    pub permits: Vec<Type>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interface {
    pub modifiers: Modifiers,
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Vec<Type>,
    pub permits: Vec<Type>,
    pub members: Vec<Member>,
}

/// `enum Name implements … { CONSTANTS ; members }`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enum {
    pub modifiers: Modifiers,
    pub name: String,
    pub implements: Vec<Type>,
    pub constants: Vec<EnumConstant>,
    pub members: Vec<Member>,
}

/// `record Name < T > ( components ) implements … { members }`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub modifiers: Modifiers,
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub components: Vec<Variable>,
    pub implements: Vec<Type>,
    pub members: Vec<Member>,
}

/// `@interface Name { members }`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationType {
    pub modifiers: Modifiers,
    pub name: String,
    pub members: Vec<Member>,
}

/// `@A NAME ( args ) { body }`
///
/// `arguments: None` writes no parentheses; `Some(vec![])` writes `( )`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumConstant {
    pub annotations: Vec<Annotation>,
    pub name: String,
    pub arguments: Option<Vec<Expression>>,
    pub body: Option<ClassBody>,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            name: name.into(),
            arguments: None,
            body: None,
        }
    }
}

/// `{ members }` of an anonymous class or an enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassBody {
    pub members: Vec<Member>,
}

/// A member of a type body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Member {
    Method(Method),
    /// A field, written with its `;`.
    Field(Variable),
    Type(Box<TypeDecl>),
    /// An instance or static initializer block.
    Initializer(Block),
    Empty(EmptyStatement),
}

family_kind!(Member {
    Method,
    Field,
    Type,
    Initializer,
    Empty,
});
family_from!(Member {
    Method(Method),
    Field(Variable),
    Initializer(Block),
});

impl From<TypeDecl> for Member {
    fn from(decl: TypeDecl) -> Self {
        Self::Type(Box::new(decl))
    }
}

fixed_kind! {
    Modifiers => Modifiers,
    TypeParameter => TypeParameter,
    Variable => Variable,
    Method => Method,
    Class => Class,
    Interface => Interface,
    Enum => Enum,
    Record => Record,
    AnnotationType => AnnotationType,
    EnumConstant => EnumConstant,
    ClassBody => ClassBody,
}
