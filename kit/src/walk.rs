//! Depth-first traversal.
//!
//! [`NodeRef`] is a borrowed view of any concrete node. Its
//! [`children`](NodeRef::children) are listed in the order the node writes
//! them, for every kind, so [`walk`] reaches every node of a tree.
//!
//! # Example
//!
//! ```ignore
//! use javast::ast::Kind;
//! use javast::walk::{walk, NodeRef, Walk};
//!
//! let mut names = Vec::new();
//! walk(&mut |node: NodeRef<'_>| {
//!     if let NodeRef::Identifier(id) = node {
//!         names.push(id.name.clone());
//!     }
//!     // Do not look inside lambdas.
//!     if node.kind() == Kind::LambdaExpression { Walk::Skip } else { Walk::Continue }
//! }, (&unit).into());
//! ```

use javast_core::{Error, Printer, ToTokens};

use crate::ast::*;

/// What to do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Walk {
    /// Visit the node's children, then call [`Visitor::leave`].
    Continue,
    /// Skip the children. `leave` is not called.
    Skip,
}

/// Callback for [`walk`].
pub trait Visitor<'ast> {
    /// Called before a node's children, in pre-order.
    fn visit(&mut self, node: NodeRef<'ast>) -> Walk;

    /// Called after the children of a node that was descended into.
    fn leave(&mut self, node: NodeRef<'ast>) {
        let _ = node;
    }
}

impl<'ast, F> Visitor<'ast> for F
where
    F: FnMut(NodeRef<'ast>) -> Walk,
{
    fn visit(&mut self, node: NodeRef<'ast>) -> Walk {
        self(node)
    }
}

/// Visits `node` and, unless pruned, everything below it.
pub fn walk<'ast, V>(visitor: &mut V, node: NodeRef<'ast>)
where
    V: Visitor<'ast> + ?Sized,
{
    if visitor.visit(node) == Walk::Skip {
        return;
    }
    for child in node.children() {
        walk(visitor, child);
    }
    visitor.leave(node);
}

macro_rules! node_ref {
    ($( $variant:ident ),* $(,)?) => {
        /// A borrowed concrete node.
        ///
        /// Family enums are looked through: converting a `&Expression`
        /// yields the variant it holds. Writing a `NodeRef` writes the node
        /// alone, so a variable reached from a statement has no `;`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum NodeRef<'a> {
            $( $variant(&'a $variant), )*
        }

        impl Node for NodeRef<'_> {
            fn kind(&self) -> Kind {
                match self {
                    $( Self::$variant(node) => node.kind(), )*
                }
            }
        }

        impl ToTokens for NodeRef<'_> {
            fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
                match self {
                    $( Self::$variant(node) => node.write(p), )*
                }
            }
        }

        $(
            impl<'a> From<&'a $variant> for NodeRef<'a> {
                #[inline]
                fn from(node: &'a $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

node_ref! {
    CompilationUnit,
    Package,
    Import,
    Module,
    Requires,
    Exports,
    Opens,
    Uses,
    Provides,
    Class,
    Interface,
    Enum,
    Record,
    AnnotationType,
    EnumConstant,
    ClassBody,
    Method,
    Variable,
    Modifiers,
    TypeParameter,
    Block,
    Assert,
    Break,
    Continue,
    DoWhileLoop,
    EmptyStatement,
    EnhancedForLoop,
    ExpressionStatement,
    ForLoop,
    If,
    LabeledStatement,
    Return,
    Switch,
    Synchronized,
    Throw,
    Try,
    Catch,
    WhileLoop,
    Yield,
    StatementCase,
    RuleCase,
    DefaultCaseLabel,
    BindingPattern,
    GuardedPattern,
    ParenthesizedPattern,
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
    PrimitiveType,
    ArrayType,
    ParameterizedType,
    UnionType,
    IntersectionType,
    Wildcard,
    AnnotatedType,
}

/// Looks through a family enum to the node it holds.
macro_rules! family_ref {
    ($( $family:ident { $( $variant:ident ),* $(,)? } )*) => {
        $(
            impl<'a> From<&'a $family> for NodeRef<'a> {
                fn from(node: &'a $family) -> Self {
                    match node {
                        $( $family::$variant(inner) => NodeRef::from(inner), )*
                    }
                }
            }
        )*
    };
}

family_ref! {
    Expression {
        Annotation, ArrayAccess, Assignment, Binary, CompoundAssignment, Conditional,
        Erroneous, Identifier, InstanceOf, Lambda, Literal, MemberReference, MemberSelect,
        MethodInvocation, NewArray, NewClass, Parenthesized, SwitchExpression, TypeCast, Unary,
    }
    Statement {
        Assert, Block, Break, Continue, DoWhileLoop, Empty, EnhancedForLoop, Expression,
        ForLoop, If, Labeled, Return, Switch, Synchronized, Throw, Try, TypeDecl, Variable,
        WhileLoop, Yield,
    }
    Type { Primitive, Array, Parameterized, Union, Intersection, Wildcard, Annotated, Name }
    Pattern { Binding, Guarded, Parenthesized }
    CaseLabel { Expression, Pattern, Default }
    Case { Statement, Rule }
    Directive { Requires, Exports, Opens, Uses, Provides }
    TypeDecl { Class, Interface, Enum, Record, AnnotationType }
    Member { Method, Field, Type, Initializer, Empty }
    Resource { Variable, Expression }
    ForInit { Variable, Expression }
    InstanceOfTest { Type, Pattern }
    LambdaBody { Expression, Block }
    Tree {
        CompilationUnit, Package, Import, Module, Directive, TypeDecl, Member, Method,
        Variable, Modifiers, TypeParameter, EnumConstant, ClassBody, Statement, Case,
        CaseLabel, Catch, Resource, ForInit, Expression, Pattern, Type,
    }
}

/// Looks through the boxes that hold recursive children.
macro_rules! boxed_ref {
    ($( $ty:ident ),* $(,)?) => {
        $(
            impl<'a> From<&'a Box<$ty>> for NodeRef<'a> {
                #[inline]
                fn from(node: &'a Box<$ty>) -> Self {
                    NodeRef::from(node.as_ref())
                }
            }
        )*
    };
}

boxed_ref!(Expression, Statement, Type, Pattern, TypeDecl);

/// Accumulates children in order.
struct Children<'a>(Vec<NodeRef<'a>>);

impl<'a> Children<'a> {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn node(mut self, node: impl Into<NodeRef<'a>>) -> Self {
        self.0.push(node.into());
        self
    }

    /// Every item of a list, or the item of an `Option`.
    fn list<T>(mut self, items: impl IntoIterator<Item = &'a T>) -> Self
    where
        T: 'a + ?Sized,
        &'a T: Into<NodeRef<'a>>,
    {
        self.0.extend(items.into_iter().map(Into::into));
        self
    }

    fn done(self) -> Vec<NodeRef<'a>> {
        self.0
    }
}

impl<'a> NodeRef<'a> {
    /// Direct children, in the order the node writes them.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let c = Children::new();
        match *self {
            Self::CompilationUnit(n) => c
                .list(&n.package)
                .list(&n.imports)
                .list(&n.module)
                .list(&n.type_decls),
            Self::Package(n) => c.list(&n.annotations).node(&n.package_name),
            Self::Import(n) => c.node(&n.qualified_identifier),
            Self::Module(n) => c.list(&n.annotations).node(&n.name).list(&n.directives),
            Self::Requires(n) => c.node(&n.module_name),
            Self::Exports(n) => c.node(&n.package_name).list(&n.module_names),
            Self::Opens(n) => c.node(&n.package_name).list(&n.module_names),
            Self::Uses(n) => c.node(&n.service_name),
            Self::Provides(n) => c.node(&n.service_name).list(&n.implementation_names),
            Self::Class(n) => c
                .node(&n.modifiers)
                .list(&n.type_parameters)
                .list(&n.extends)
                .list(&n.implements)
                .list(&n.permits)
                .list(&n.members),
            Self::Interface(n) => c
                .node(&n.modifiers)
                .list(&n.type_parameters)
                .list(&n.extends)
                .list(&n.permits)
                .list(&n.members),
            Self::Enum(n) => c
                .node(&n.modifiers)
                .list(&n.implements)
                .list(&n.constants)
                .list(&n.members),
            Self::Record(n) => c
                .node(&n.modifiers)
                .list(&n.type_parameters)
                .list(&n.components)
                .list(&n.implements)
                .list(&n.members),
            Self::AnnotationType(n) => c.node(&n.modifiers).list(&n.members),
            Self::EnumConstant(n) => c
                .list(&n.annotations)
                .list(n.arguments.iter().flatten())
                .list(&n.body),
            Self::ClassBody(n) => c.list(&n.members),
            Self::Method(n) => c
                .node(&n.modifiers)
                .list(&n.type_parameters)
                .list(&n.return_type)
                .list(&n.receiver_parameter)
                .list(&n.parameters)
                .list(&n.throws)
                .list(&n.body)
                .list(&n.default_value),
            Self::Variable(n) => c
                .node(&n.modifiers)
                .list(&n.ty)
                .list(&n.name_expression)
                .list(&n.initializer),
            Self::Modifiers(n) => c.list(&n.annotations),
            Self::TypeParameter(n) => c.list(&n.annotations).list(&n.bounds),
            Self::Block(n) => c.list(&n.statements),
            Self::Assert(n) => c.node(&n.condition).list(&n.detail),
            Self::Break(_) | Self::Continue(_) | Self::EmptyStatement(_) => c,
            Self::DoWhileLoop(n) => c.node(&n.statement).node(&n.condition),
            Self::EnhancedForLoop(n) => c
                .node(&n.variable)
                .node(&n.expression)
                .node(&n.statement),
            Self::ExpressionStatement(n) => c.node(&n.expression),
            Self::ForLoop(n) => c
                .list(&n.initializer)
                .list(&n.condition)
                .list(&n.update)
                .node(&n.statement),
            Self::If(n) => c
                .node(&n.condition)
                .node(&n.then_statement)
                .list(&n.else_statement),
            Self::LabeledStatement(n) => c.node(&n.statement),
            Self::Return(n) => c.list(&n.expression),
            Self::Switch(n) => c.node(&n.expression).list(&n.cases),
            Self::Synchronized(n) => c.node(&n.expression).node(&n.block),
            Self::Throw(n) => c.node(&n.expression),
            Self::Try(n) => c
                .list(&n.resources)
                .node(&n.block)
                .list(&n.catches)
                .list(&n.finally_block),
            Self::Catch(n) => c.node(&n.parameter).node(&n.block),
            Self::WhileLoop(n) => c.node(&n.condition).node(&n.statement),
            Self::Yield(n) => c.node(&n.value),
            Self::StatementCase(n) => c.list(&n.expression).list(&n.statements),
            Self::RuleCase(n) => c.list(&n.labels).node(&n.body),
            Self::DefaultCaseLabel(_) => c,
            Self::BindingPattern(n) => c.node(&n.variable),
            Self::GuardedPattern(n) => c.node(&n.pattern).node(&n.expression),
            Self::ParenthesizedPattern(n) => c.node(&n.pattern),
            Self::Annotation(n) => c.node(&n.annotation_type).list(&n.arguments),
            Self::ArrayAccess(n) => c.node(&n.expression).node(&n.index),
            Self::Assignment(n) => c.node(&n.variable).node(&n.expression),
            Self::Binary(n) => c.node(&n.left).node(&n.right),
            Self::CompoundAssignment(n) => c.node(&n.variable).node(&n.expression),
            Self::Conditional(n) => c
                .node(&n.condition)
                .node(&n.true_expression)
                .node(&n.false_expression),
            Self::Erroneous(n) => c.list(&n.error_nodes),
            Self::Identifier(_) | Self::Literal(_) | Self::PrimitiveType(_) => c,
            Self::InstanceOf(n) => c.node(&n.expression).node(&n.test),
            Self::Lambda(n) => c.list(&n.parameters).node(&n.body),
            Self::MemberReference(n) => c.node(&n.qualifier).list(&n.type_arguments),
            Self::MemberSelect(n) => c.node(&n.expression),
            // With type arguments, a member-select callee writes its qualifier first.
            Self::MethodInvocation(n) => match &*n.method_select {
                Expression::MemberSelect(_) if !n.type_arguments.is_empty() => c
                    .node(&n.method_select)
                    .list(&n.type_arguments)
                    .list(&n.arguments),
                _ => c
                    .list(&n.type_arguments)
                    .node(&n.method_select)
                    .list(&n.arguments),
            },
            Self::NewArray(n) => {
                let mut c = c.list(&n.annotations).list(&n.ty);
                for (idx, dimension) in n.dimensions.iter().enumerate() {
                    if let Some(annotations) = n.dim_annotations.get(idx) {
                        c = c.list(annotations);
                    }
                    c = c.node(dimension);
                }
                c.list(n.initializers.iter().flatten())
            }
            Self::NewClass(n) => c
                .list(&n.enclosing_expression)
                .list(&n.type_arguments)
                .node(&n.identifier)
                .list(&n.arguments)
                .list(&n.class_body),
            Self::Parenthesized(n) => c.node(&n.expression),
            Self::SwitchExpression(n) => c.node(&n.expression).list(&n.cases),
            Self::TypeCast(n) => c.node(&n.ty).node(&n.expression),
            Self::Unary(n) => c.node(&n.expression),
            Self::ArrayType(n) => c.node(&n.element),
            Self::ParameterizedType(n) => c.node(&n.ty).list(&n.arguments),
            Self::UnionType(n) => c.list(&n.alternatives),
            Self::IntersectionType(n) => c.list(&n.bounds),
            Self::Wildcard(n) => c.list(n.bound()),
            Self::AnnotatedType(n) => c.list(&n.annotations).node(&n.underlying),
        }
        .done()
    }
}
