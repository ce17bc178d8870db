use crate::CalcError;
use lexers::{tokenize, MathToken};
use log::{debug, trace};
use std::ops::Deref;
use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum ParseError {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
}

/// Rank of a binary operator, higher binds tighter. All of them associate
/// to the left. Unary operators have no rank, they always bind tightest.
pub const fn precedence(op: char) -> usize {
    match op {
        '+' | '-' => 10,
        '*' | '/' => 20,
        _ => 0,
    }
}

/// An expression in postfix order, free of brackets and commas.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<MathToken>);

impl Deref for RPNExpr {
    type Target = [MathToken];
    fn deref(&self) -> &[MathToken] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, CalcError> {
        Ok(Self::parse(tokenize(expr)?)?)
    }

    pub fn parse(tokens: impl IntoIterator<Item = MathToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in tokens {
            trace!("shunting {:?} stack={:?}", token, stack);
            match token {
                MathToken::Number(_) => out.push(token),
                MathToken::UOp(_) => stack.push(token),
                MathToken::Function(_) => stack.push(token),
                MathToken::OParen => stack.push(token),
                MathToken::BOp(op) => {
                    while let Some(&top) = stack.last() {
                        match top {
                            MathToken::UOp(_) => (),
                            MathToken::BOp(lhs) if precedence(lhs) >= precedence(op) => (),
                            _ => break,
                        }
                        out.push(top);
                        stack.pop();
                    }
                    stack.push(token);
                }
                MathToken::Comma | MathToken::CParen => {
                    while let Some(&top) = stack.last() {
                        if top == MathToken::OParen {
                            break;
                        }
                        out.push(top);
                        stack.pop();
                    }
                    // end of grouping: check if this is a function call
                    if token == MathToken::CParen {
                        if stack.pop() != Some(MathToken::OParen) {
                            return Err(ParseError::MismatchedParentheses);
                        }
                        if let Some(&MathToken::Function(_)) = stack.last() {
                            out.extend(stack.pop());
                        }
                    } // a Comma outside of any group is let through
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                MathToken::OParen => return Err(ParseError::MismatchedParentheses),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn.to_postfix_string());
        Ok(rpn)
    }
}
