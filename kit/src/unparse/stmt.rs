use javast_core::{Error, Printer, ToTokens};

use super::family_tokens;
use crate::ast::*;
use crate::token::Token;

impl ToTokens for Statement {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        match self {
            Self::Assert(s) => s.write(p),
            Self::Block(s) => s.write(p),
            Self::Break(s) => s.write(p),
            Self::Continue(s) => s.write(p),
            Self::DoWhileLoop(s) => s.write(p),
            Self::Empty(s) => s.write(p),
            Self::EnhancedForLoop(s) => s.write(p),
            Self::Expression(s) => s.write(p),
            Self::ForLoop(s) => s.write(p),
            Self::If(s) => s.write(p),
            Self::Labeled(s) => s.write(p),
            Self::Return(s) => s.write(p),
            Self::Switch(s) => s.write(p),
            Self::Synchronized(s) => s.write(p),
            Self::Throw(s) => s.write(p),
            Self::Try(s) => s.write(p),
            Self::TypeDecl(s) => s.write(p),
            Self::Variable(s) => {
                let mut n = s.write(p)?;
                n += p.token(Token::Semi)?;
                Ok(n)
            }
            Self::WhileLoop(s) => s.write(p),
            Self::Yield(s) => s.write(p),
        }
    }
}

family_tokens!(Resource { Variable, Expression });
family_tokens!(Case { Statement, Rule });
family_tokens!(CaseLabel {
    Expression,
    Pattern,
    Default,
});
family_tokens!(Pattern {
    Binding,
    Guarded,
    Parenthesized,
});

/// `switch ( selector ) { cases }`, shared by the statement and the
/// expression form.
pub(super) fn write_switch<P: Printer>(
    p: &mut P,
    selector: &Expression,
    cases: &[Case],
) -> Result<usize, Error> {
    let mut n = p.token(Token::Switch)?;
    n += p.token(Token::LParen)?;
    n += selector.write(p)?;
    n += p.token(Token::RParen)?;
    n += p.token(Token::LBrace)?;
    for case in cases {
        n += case.write(p)?;
    }
    n += p.token(Token::RBrace)?;
    Ok(n)
}

/// `keyword [label] ;`
fn write_jump<P: Printer>(p: &mut P, keyword: Token, label: Option<&str>) -> Result<usize, Error> {
    let mut n = p.token(keyword)?;
    if let Some(label) = label {
        n += p.word(label)?;
    }
    n += p.token(Token::Semi)?;
    Ok(n)
}

impl ToTokens for Assert {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Assert)?;
        n += self.condition.write(p)?;
        if let Some(detail) = &self.detail {
            n += p.token(Token::Colon)?;
            n += detail.write(p)?;
        }
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}

impl ToTokens for Block {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = 0;
        if self.is_static {
            n += p.token(Token::Static)?;
        }
        n += p.token(Token::LBrace)?;
        n += self.statements.write(p)?;
        n += p.token(Token::RBrace)?;
        Ok(n)
    }
}

impl ToTokens for Break {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        write_jump(p, Token::Break, self.label.as_deref())
    }
}

impl ToTokens for Continue {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        write_jump(p, Token::Continue, self.label.as_deref())
    }
}

impl ToTokens for DoWhileLoop {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Do)?;
        n += self.statement.write(p)?;
        n += p.token(Token::While)?;
        n += p.token(Token::LParen)?;
        n += self.condition.write(p)?;
        n += p.token(Token::RParen)?;
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}

impl ToTokens for EmptyStatement {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        p.token(Token::Semi)
    }
}

impl ToTokens for EnhancedForLoop {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::For)?;
        n += p.token(Token::LParen)?;
        n += self.variable.write(p)?;
        n += p.token(Token::Colon)?;
        n += self.expression.write(p)?;
        n += p.token(Token::RParen)?;
        n += self.statement.write(p)?;
        Ok(n)
    }
}

impl ToTokens for ExpressionStatement {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.expression.write(p)?;
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}

impl ToTokens for ForLoop {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::For)?;
        n += p.token(Token::LParen)?;
        for (idx, init) in self.initializer.iter().enumerate() {
            if idx > 0 {
                n += p.token(Token::Comma)?;
            }
            n += match init {
                // `int i = 0 , j = 0`: the type belongs to the first declarator.
                ForInit::Variable(var) if idx > 0 => super::decl::write_declarator(p, var)?,
                init => init.write(p)?,
            };
        }
        n += p.token(Token::Semi)?;
        n += self.condition.write(p)?;
        n += p.token(Token::Semi)?;
        n += p.write_separated(&self.update, Token::Comma)?;
        n += p.token(Token::RParen)?;
        n += self.statement.write(p)?;
        Ok(n)
    }
}

family_tokens!(ForInit { Variable, Expression });

impl ToTokens for If {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::If)?;
        n += p.token(Token::LParen)?;
        n += self.condition.write(p)?;
        n += p.token(Token::RParen)?;
        n += self.then_statement.write(p)?;
        if let Some(otherwise) = &self.else_statement {
            n += p.token(Token::Else)?;
            n += otherwise.write(p)?;
        }
        Ok(n)
    }
}

impl ToTokens for LabeledStatement {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.word(&self.label)?;
        n += p.token(Token::Colon)?;
        n += self.statement.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Return {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Return)?;
        n += self.expression.write(p)?;
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}

impl ToTokens for Switch {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        write_switch(p, &self.expression, &self.cases)
    }
}

impl ToTokens for Synchronized {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Synchronized)?;
        n += p.token(Token::LParen)?;
        n += self.expression.write(p)?;
        n += p.token(Token::RParen)?;
        n += self.block.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Throw {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Throw)?;
        n += self.expression.write(p)?;
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}

impl ToTokens for Try {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Try)?;
        n += p.write_enclosed(Token::LParen, &self.resources, Token::Semi, Token::RParen)?;
        n += self.block.write(p)?;
        n += self.catches.write(p)?;
        if let Some(finally) = &self.finally_block {
            n += p.token(Token::Finally)?;
            n += finally.write(p)?;
        }
        Ok(n)
    }
}

impl ToTokens for Catch {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Catch)?;
        n += p.token(Token::LParen)?;
        n += self.parameter.write(p)?;
        n += p.token(Token::RParen)?;
        n += self.block.write(p)?;
        Ok(n)
    }
}

impl ToTokens for WhileLoop {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::While)?;
        n += p.token(Token::LParen)?;
        n += self.condition.write(p)?;
        n += p.token(Token::RParen)?;
        n += self.statement.write(p)?;
        Ok(n)
    }
}

impl ToTokens for Yield {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::Yield)?;
        n += self.value.write(p)?;
        n += p.token(Token::Semi)?;
        Ok(n)
    }
}

impl ToTokens for StatementCase {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = 0;
        match &self.expression {
            Some(label) => {
                n += p.token(Token::Case)?;
                n += label.write(p)?;
            }
            None => n += p.token(Token::Default)?,
        }
        n += p.token(Token::Colon)?;
        n += self.statements.write(p)?;
        Ok(n)
    }
}

impl ToTokens for RuleCase {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = 0;
        if self.is_default() {
            n += p.token(Token::Default)?;
        } else {
            n += p.token(Token::Case)?;
            n += p.write_separated(&self.labels, Token::Comma)?;
        }
        n += p.token(Token::Arrow)?;
        n += self.body.write(p)?;
        Ok(n)
    }
}

impl ToTokens for DefaultCaseLabel {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        p.token(Token::Default)
    }
}

impl ToTokens for BindingPattern {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        self.variable.write(p)
    }
}

impl ToTokens for GuardedPattern {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = self.pattern.write(p)?;
        n += p.token(Token::AmpAmp)?;
        n += self.expression.write(p)?;
        Ok(n)
    }
}

impl ToTokens for ParenthesizedPattern {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = p.token(Token::LParen)?;
        n += self.pattern.write(p)?;
        n += p.token(Token::RParen)?;
        Ok(n)
    }
}
