use javast_core::{Error, Printer, StructuralError, ToTokens};

use super::{family_tokens, structural};
use crate::ast::*;
use crate::token::Token;

family_tokens!(Expression {
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
});

family_tokens!(InstanceOfTest { Type, Pattern });
family_tokens!(LambdaBody { Expression, Block });

impl ToTokens for Annotation {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::At)?;
        n += self.annotation_type.write(p)?;
        n += p.write_enclosed(Token::LParen, &self.arguments, Token::Comma, Token::RParen)?;
        Ok(n)
    }
}

impl ToTokens for ArrayAccess {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.expression.write(p)?;
        n += p.token(Token::LBracket)?;
        n += self.index.write(p)?;
        n += p.token(Token::RBracket)?;
        Ok(n)
    }
}

impl ToTokens for Assignment {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.variable.write(p)?;
        n += p.token(Token::Eq)?;
        n += self.expression.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Binary {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.left.write(p)?;
        n += p.token(self.operator)?;
        n += self.right.write(p)?;
        Ok(n)
    }
}

impl ToTokens for CompoundAssignment {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.variable.write(p)?;
        n += p.token(self.operator)?;
        n += self.expression.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Conditional {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.condition.write(p)?;
        n += p.token(Token::Question)?;
        n += self.true_expression.write(p)?;
        n += p.token(Token::Colon)?;
        n += self.false_expression.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Erroneous {
    fn write<P: Printer>(&self, _p: &mut P) -> Result<usize, Error> {
        Err(structural(Kind::Erroneous, StructuralError::Erroneous))
    }
}

impl ToTokens for Identifier {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        p.word(&self.name)
    }
}

impl ToTokens for InstanceOf {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.expression.write(p)?;
        n += p.token(Token::InstanceOf)?;
        n += self.test.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Lambda {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::LParen)?;
        n += p.write_separated(&self.parameters, Token::Comma)?;
        n += p.token(Token::RParen)?;
        n += p.token(Token::Arrow)?;
        n += self.body.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Literal {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        match self {
            Self::Int(text) | Self::Long(text) | Self::Float(text) | Self::Double(text) => {
                p.word(text)
            }
            Self::Boolean(true) => p.token(Token::True),
            Self::Boolean(false) => p.token(Token::False),
            Self::Char(text) => p.word(&format!("'{text}'")),
            Self::String(text) => p.word(&format!("\"{text}\"")),
            Self::Null => p.token(Token::Null),
        }
    }
}

impl ToTokens for MemberReference {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.qualifier.write(p)?;
        n += p.token(Token::ColonColon)?;
        n += p.write_enclosed(Token::LAngle, &self.type_arguments, Token::Comma, Token::RAngle)?;
        n += match &self.target {
            ReferenceTarget::Invoke(name) => p.word(name)?,
            ReferenceTarget::New => p.token(Token::New)?,
        };
        Ok(n)
    }
}

impl ToTokens for MemberSelect {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.expression.write(p)?;
        n += p.token(Token::Dot)?;
        n += p.word(&self.identifier)?;
        Ok(n)
    }
}

impl ToTokens for MethodInvocation {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = 0;
        match &*self.method_select {
            // Explicit type arguments go between the qualifier and the name.
            Expression::MemberSelect(select) if !self.type_arguments.is_empty() => {
                n += select.expression.write(p)?;
                n += p.token(Token::Dot)?;
                n += p.write_enclosed(
                    Token::LAngle,
                    &self.type_arguments,
                    Token::Comma,
                    Token::RAngle,
                )?;
                n += p.word(&select.identifier)?;
            }
            select => {
                n += p.write_enclosed(
                    Token::LAngle,
                    &self.type_arguments,
                    Token::Comma,
                    Token::RAngle,
                )?;
                n += select.write(p)?;
            }
        }
        n += p.token(Token::LParen)?;
        n += p.write_separated(&self.arguments, Token::Comma)?;
        n += p.token(Token::RParen)?;
        Ok(n)
    }
}

impl ToTokens for NewArray {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = 0;
        // Array layers of the element type that trail the sized dimensions,
        // as in `new int [ n ] []`.
        let mut trailing = 0;
        if let Some(ty) = &self.ty {
            n += p.token(Token::New)?;
            n += self.annotations.write(p)?;
            if self.dimensions.is_empty() {
                n += ty.write(p)?;
                n += p.token(Token::Brackets)?;
            } else {
                let mut element: &Type = ty;
                while let Type::Array(array) = element {
                    element = &array.element;
                    trailing += 1;
                }
                n += element.write(p)?;
            }
        }
        for (idx, dimension) in self.dimensions.iter().enumerate() {
            if let Some(annotations) = self.dim_annotations.get(idx) {
                n += annotations.write(p)?;
            }
            n += p.token(Token::LBracket)?;
            n += dimension.write(p)?;
            n += p.token(Token::RBracket)?;
        }
        for _ in 0..trailing {
            n += p.token(Token::Brackets)?;
        }
        if let Some(initializers) = &self.initializers {
            n += p.token(Token::LBrace)?;
            n += p.write_separated(initializers, Token::Comma)?;
            n += p.token(Token::RBrace)?;
        }
        Ok(n)
    }
}

impl ToTokens for NewClass {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = 0;
        if let Some(outer) = &self.enclosing_expression {
            n += outer.write(p)?;
            n += p.token(Token::Dot)?;
        }
        n += p.token(Token::New)?;
        n += p.write_enclosed(Token::LAngle, &self.type_arguments, Token::Comma, Token::RAngle)?;
        n += self.identifier.write(p)?;
        n += p.token(Token::LParen)?;
        n += p.write_separated(&self.arguments, Token::Comma)?;
        n += p.token(Token::RParen)?;
        n += self.class_body.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Parenthesized {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::LParen)?;
        n += self.expression.write(p)?;
        n += p.token(Token::RParen)?;
        Ok(n)
    }
}

impl ToTokens for SwitchExpression {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        super::stmt::write_switch(p, &self.expression, &self.cases)
    }
}

impl ToTokens for TypeCast {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::LParen)?;
        n += self.ty.write(p)?;
        n += p.token(Token::RParen)?;
        n += self.expression.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Unary {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = 0;
        if self.operator.is_postfix() {
            n += self.expression.write(p)?;
            n += p.token(self.operator)?;
        } else {
            n += p.token(self.operator)?;
            n += self.expression.write(p)?;
        }
        Ok(n)
    }
}

impl ToTokens for ClassBody {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        super::decl::write_body(p, &self.members)
    }
}
