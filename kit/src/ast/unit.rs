use super::{Annotation, Expression, TypeDecl, family_from, family_kind, fixed_kind};

/// A source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompilationUnit {
    pub module: Option<Module>,
    pub package: Option<Package>,
    pub imports: Vec<Import>,
    pub type_decls: Vec<TypeDecl>,
}

/// `@A package name ;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub annotations: Vec<Annotation>,
    pub package_name: Expression,
}

impl Package {
    pub fn new(name: &str) -> Self {
        Self {
            annotations: Vec::new(),
            package_name: Expression::qualified(name),
        }
    }
}

/// `import [static] name ;`
///
/// An on-demand import ends its name with the identifier `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Import {
    pub is_static: bool,
    pub qualified_identifier: Expression,
}

impl Import {
    pub fn new(name: &str) -> Self {
        Self {
            is_static: false,
            qualified_identifier: Expression::qualified(name),
        }
    }

    pub fn new_static(name: &str) -> Self {
        Self {
            is_static: true,
            ..Self::new(name)
        }
    }
}

/// `[open] module name { directives }`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    pub annotations: Vec<Annotation>,
    pub module_kind: ModuleKind,
    pub name: Expression,
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModuleKind {
    Open,
    #[default]
    Strong,
}

/// A module directive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directive {
    Requires(Requires),
    Exports(Exports),
    Opens(Opens),
    Uses(Uses),
    Provides(Provides),
}

family_kind!(Directive {
    Requires,
    Exports,
    Opens,
    Uses,
    Provides,
});
family_from!(Directive {
    Requires(Requires),
    Exports(Exports),
    Opens(Opens),
    Uses(Uses),
    Provides(Provides),
});

/// `requires [static] [transitive] module ;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requires {
    pub is_static: bool,
    pub is_transitive: bool,
    pub module_name: Expression,
}

/// `exports package [to modules] ;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exports {
    pub package_name: Expression,
    pub module_names: Vec<Expression>,
}

/// `opens package [to modules] ;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opens {
    pub package_name: Expression,
    pub module_names: Vec<Expression>,
}

/// `uses service ;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uses {
    pub service_name: Expression,
}

/// `provides service [with implementations] ;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Provides {
    pub service_name: Expression,
    pub implementation_names: Vec<Expression>,
}

fixed_kind! {
    CompilationUnit => CompilationUnit,
    Package => Package,
    Import => Import,
    Module => Module,
    Requires => Requires,
    Exports => Exports,
    Opens => Opens,
    Uses => Uses,
    Provides => Provides,
}
