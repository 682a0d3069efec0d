use super::*;

/// Any node, owned.
///
/// Used where a position accepts a node of no particular family, such as
/// the salvaged children of an [`Erroneous`] expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tree {
    CompilationUnit(CompilationUnit),
    Package(Package),
    Import(Import),
    Module(Module),
    Directive(Directive),
    TypeDecl(TypeDecl),
    Member(Member),
    Method(Method),
    Variable(Variable),
    Modifiers(Modifiers),
    TypeParameter(TypeParameter),
    EnumConstant(EnumConstant),
    ClassBody(ClassBody),
    Statement(Statement),
    Case(Case),
    CaseLabel(CaseLabel),
    Catch(Catch),
    Resource(Resource),
    ForInit(ForInit),
    Expression(Expression),
    Pattern(Pattern),
    Type(Type),
}

family_kind!(Tree {
    CompilationUnit,
    Package,
    Import,
    Module,
    Directive,
    TypeDecl,
    Member,
    Method,
    Variable,
    Modifiers,
    TypeParameter,
    EnumConstant,
    ClassBody,
    Statement,
    Case,
    CaseLabel,
    Catch,
    Resource,
    ForInit,
    Expression,
    Pattern,
    Type,
});

family_from!(Tree {
    CompilationUnit(CompilationUnit),
    Package(Package),
    Import(Import),
    Module(Module),
    Directive(Directive),
    TypeDecl(TypeDecl),
    Member(Member),
    Method(Method),
    Variable(Variable),
    Modifiers(Modifiers),
    TypeParameter(TypeParameter),
    EnumConstant(EnumConstant),
    ClassBody(ClassBody),
    Statement(Statement),
    Case(Case),
    CaseLabel(CaseLabel),
    Catch(Catch),
    Resource(Resource),
    ForInit(ForInit),
    Expression(Expression),
    Pattern(Pattern),
    Type(Type),
});
