use javast_core::{Error, Printer, ToTokens};

use super::family_tokens;
use crate::ast::*;
use crate::token::Token;

family_tokens!(TypeDecl {
    Class,
    Interface,
    Enum,
    Record,
    AnnotationType,
});

impl ToTokens for Member {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        match self {
            Self::Method(m) => m.write(p),
            Self::Field(var) => {
                let mut n = var.write(p)?;
                n += p.token(Token::Semi)?;
                Ok(n)
            }
            Self::Type(decl) => decl.write(p),
            Self::Initializer(block) => block.write(p),
            Self::Empty(empty) => empty.write(p),
        }
    }
}

/// `{ members }`
pub(super) fn write_body<P: Printer>(p: &mut P, members: &[Member]) -> Result<usize, Error> {
    let mut n = p.token(Token::LBrace)?;
    for member in members {
        n += member.write(p)?;
    }
    n += p.token(Token::RBrace)?;
    Ok(n)
}

/// `name [= init]`, a variable without its modifiers and type.
pub(super) fn write_declarator<P: Printer>(p: &mut P, var: &Variable) -> Result<usize, Error> {
    let mut n = match &var.name_expression {
        Some(expr) => expr.write(p)?,
        None => p.word(&var.name)?,
    };
    if let Some(init) = &var.initializer {
        n += p.token(Token::Eq)?;
        n += init.write(p)?;
    }
    Ok(n)
}

/// Everything of a type declaration before its body.
///
/// Each declaration kind fills in only the clauses it can have.
struct Header<'a> {
    modifiers: &'a Modifiers,
    keyword: Token,
    name: &'a str,
    type_parameters: &'a [TypeParameter],
    components: Option<&'a [Variable]>,
    extends: &'a [Type],
    implements: &'a [Type],
    permits: &'a [Type],
}

impl<'a> Header<'a> {
    fn new(modifiers: &'a Modifiers, keyword: Token, name: &'a str) -> Self {
        Self {
            modifiers,
            keyword,
            name,
            type_parameters: &[],
            components: None,
            extends: &[],
            implements: &[],
            permits: &[],
        }
    }
}

impl ToTokens for Header<'_> {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.modifiers.write(p)?;
        n += p.token(self.keyword)?;
        n += p.word(self.name)?;
        n += p.write_enclosed(Token::LAngle, self.type_parameters, Token::Comma, Token::RAngle)?;
        if let Some(components) = self.components {
            n += p.token(Token::LParen)?;
            n += p.write_separated(components, Token::Comma)?;
            n += p.token(Token::RParen)?;
        }
        n += p.write_clause(Token::Extends, self.extends, Token::Comma)?;
        n += p.write_clause(Token::Implements, self.implements, Token::Comma)?;
        n += p.write_clause(Token::Permits, self.permits, Token::Comma)?;
        Ok(n)
    }
}

impl ToTokens for Class {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let header = Header {
            type_parameters: &self.type_parameters,
            extends: self.extends.as_slice(),
            implements: &self.implements,
            permits: &self.permits,
            ..Header::new(&self.modifiers, Token::Class, &self.name)
        };
        let mut n = header.write(p)?;
        n += write_body(p, &self.members)?;
        Ok(n)
    }
}

impl ToTokens for Interface {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let header = Header {
            type_parameters: &self.type_parameters,
            extends: &self.extends,
            permits: &self.permits,
            ..Header::new(&self.modifiers, Token::Interface, &self.name)
        };
        let mut n = header.write(p)?;
        n += write_body(p, &self.members)?;
        Ok(n)
    }
}

impl ToTokens for Enum {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let header = Header {
            implements: &self.implements,
            ..Header::new(&self.modifiers, Token::Enum, &self.name)
        };
        let mut n = header.write(p)?;
        n += p.token(Token::LBrace)?;
        n += p.write_separated(&self.constants, Token::Comma)?;
        if !self.members.is_empty() {
            n += p.token(Token::Semi)?;
            n += self.members.write(p)?;
        }
        n += p.token(Token::RBrace)?;
        Ok(n)
    }
}

impl ToTokens for Record {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let header = Header {
            type_parameters: &self.type_parameters,
            components: Some(self.components.as_slice()),
            implements: &self.implements,
            ..Header::new(&self.modifiers, Token::Record, &self.name)
        };
        let mut n = header.write(p)?;
        n += write_body(p, &self.members)?;
        Ok(n)
    }
}

impl ToTokens for AnnotationType {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = Header::new(&self.modifiers, Token::AtInterface, &self.name).write(p)?;
        n += write_body(p, &self.members)?;
        Ok(n)
    }
}

impl ToTokens for EnumConstant {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.annotations.write(p)?;
        n += p.word(&self.name)?;
        if let Some(arguments) = &self.arguments {
            n += p.token(Token::LParen)?;
            n += p.write_separated(arguments, Token::Comma)?;
            n += p.token(Token::RParen)?;
        }
        n += self.body.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Modifiers {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.annotations.write(p)?;
        for flag in &self.flags {
            n += p.token(flag)?;
        }
        Ok(n)
    }
}

impl ToTokens for TypeParameter {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.annotations.write(p)?;
        n += p.word(&self.name)?;
        n += p.write_clause(Token::Extends, &self.bounds, Token::Amp)?;
        Ok(n)
    }
}

impl ToTokens for Variable {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.modifiers.write(p)?;
        n += self.ty.write(p)?;
        n += write_declarator(p, self)?;
        Ok(n)
    }
}

impl ToTokens for Method {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.modifiers.write(p)?;
        n += p.write_enclosed(Token::LAngle, &self.type_parameters, Token::Comma, Token::RAngle)?;
        n += self.return_type.write(p)?;
        n += p.word(&self.name)?;
        n += p.token(Token::LParen)?;
        n += p.write_separated(
            self.receiver_parameter.iter().chain(&self.parameters),
            Token::Comma,
        )?;
        n += p.token(Token::RParen)?;
        n += p.write_clause(Token::Throws, &self.throws, Token::Comma)?;
        n += self.body.write(p)?;
        if let Some(value) = &self.default_value {
            n += p.token(Token::Default)?;
            n += value.write(p)?;
        }
        Ok(n)
    }
}
