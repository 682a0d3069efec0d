use javast_core::{Error, Printer, ToTokens};

use super::family_tokens;
use crate::ast::*;
use crate::token::Token;

family_tokens!(Directive {
    Requires,
    Exports,
    Opens,
    Uses,
    Provides,
});

family_tokens!(Tree {
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

impl ToTokens for CompilationUnit {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.package.write(p)?;
        n += self.imports.write(p)?;
        n += self.module.write(p)?;
        n += self.type_decls.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Package {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.annotations.write(p)?;
        n += p.token(Token::Package)?;
        n += self.package_name.write(p)?;
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}

impl ToTokens for Import {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Import)?;
        if self.is_static {
            n += p.token(Token::Static)?;
        }
        n += self.qualified_identifier.write(p)?;
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}

impl ToTokens for Module {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.annotations.write(p)?;
        if self.module_kind == ModuleKind::Open {
            n += p.token(Token::Open)?;
        }
        n += p.token(Token::Module)?;
        n += self.name.write(p)?;
        n += p.token(Token::LBrace)?;
        n += self.directives.write(p)?;
        n += p.token(Token::RBrace)?;
        Ok(n)
    }
}

impl ToTokens for Requires {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Requires)?;
        if self.is_static {
            n += p.token(Token::Static)?;
        }
        if self.is_transitive {
            n += p.token(Token::Transitive)?;
        }
        n += self.module_name.write(p)?;
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}

/// `keyword name [lead targets] ;`, the shape shared by `exports`, `opens`
/// and `provides`.
fn write_targeted<P: Printer>(
    p: &mut P,
    keyword: Token,
    name: &Expression,
    lead: Token,
    targets: &[Expression],
) -> Result<usize, Error> {
    let mut n = p.token(keyword)?;
    n += name.write(p)?;
    n += p.write_clause(lead, targets, Token::Comma)?;
    n += p.token(Token::Semi)?;
    Ok(n)
}

impl ToTokens for Exports {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        write_targeted(p, Token::Exports, &self.package_name, Token::To, &self.module_names)
    }
}

impl ToTokens for Opens {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        write_targeted(p, Token::Opens, &self.package_name, Token::To, &self.module_names)
    }
}

impl ToTokens for Provides {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        write_targeted(
            p,
            Token::Provides,
            &self.service_name,
            Token::With,
            &self.implementation_names,
        )
    }
}

impl ToTokens for Uses {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Uses)?;
        n += self.service_name.write(p)?;
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}
