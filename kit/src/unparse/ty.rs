use javast_core::{Error, Printer, StructuralError, ToTokens};

use super::{family_tokens, structural};
use crate::ast::*;
use crate::token::Token;

family_tokens!(Type {
    Primitive,
    Array,
    Parameterized,
    Union,
    Intersection,
    Wildcard,
    Annotated,
    Name,
});

impl ToTokens for PrimitiveType {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        match self.kind.keyword() {
            Some(keyword) => p.word(keyword),
            None => Err(structural(
                Kind::PrimitiveType,
                StructuralError::UnexpectedKind {
                    table: "primitive type",
                    kind: format!("{:?}", self.kind),
                },
            )),
        }
    }
}

impl ToTokens for ArrayType {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.element.write(p)?;
        n += p.token(Token::Brackets)?;
        Ok(n)
    }
}

impl ToTokens for ParameterizedType {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.ty.write(p)?;
        n += p.write_enclosed(Token::LAngle, &self.arguments, Token::Comma, Token::RAngle)?;
        Ok(n)
    }
}

impl ToTokens for UnionType {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        p.write_separated(&self.alternatives, Token::Pipe)
    }
}

impl ToTokens for IntersectionType {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        p.write_separated(&self.bounds, Token::Amp)
    }
}

impl ToTokens for Wildcard {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Question)?;
        match self {
            Self::Unbounded => {}
            Self::Extends(bound) => {
                n += p.token(Token::Extends)?;
                n += bound.write(p)?;
            }
            Self::Super(bound) => {
                n += p.token(Token::Super)?;
                n += bound.write(p)?;
            }
        }
        Ok(n)
    }
}

impl ToTokens for AnnotatedType {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.annotations.write(p)?;
        n += self.underlying.write(p)?;
        Ok(n)
    }
}
