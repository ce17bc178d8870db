#![deny(warnings)]

use crate::scanner::Scanner;
use log::{debug, trace};
use std::fmt;
use strum::{Display, EnumString};
use thiserror::Error;

/// The functions the tokenizer recognizes, by their lowercase name.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Func {
    Pow,
    Abs,
    Max,
    Min,
}

impl Func {
    /// How many values the function takes off the stack.
    pub const fn arity(&self) -> usize {
        match *self {
            Func::Abs => 1,
            Func::Pow | Func::Max | Func::Min => 2,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MathToken {
    Number(f64),
    UOp(char), BOp(char),
    Function(Func),
    OParen, CParen, Comma,
}

impl MathToken {
    pub fn is_unary(&self) -> bool {
        matches!(*self, MathToken::UOp(_))
    }
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MathToken::Number(n) => write!(f, "{}", n),
            MathToken::UOp(op) | MathToken::BOp(op) => write!(f, "{}", op),
            MathToken::Function(func) => write!(f, "{}", func),
            MathToken::OParen => write!(f, "("),
            MathToken::CParen => write!(f, ")"),
            MathToken::Comma => write!(f, ","),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum LexError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Unknown character")]
    UnknownCharacter(char),
    #[error("Unknown function")]
    UnknownFunction(String),
    #[error("Invalid number")]
    BadNumber(String),
}

pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<MathToken>
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source), prev: None}
    }

    // when would an operator be unary? when no operand can precede it
    fn makes_unary(prev: &Option<MathToken>) -> bool {
        match *prev {
            Some(MathToken::Number(_)) => false,
            Some(MathToken::CParen) => false,
            Some(MathToken::Function(_)) => false,
            _ => true
        }
    }

    fn get_token(&mut self) -> Option<Result<MathToken, LexError>> {
        self.src.ignore_ws(); // discard spaces before the token
        if let Some(op) = self.src.scan_math_op() {
            Some(Ok(match op {
                '(' => MathToken::OParen,
                ')' => MathToken::CParen,
                ',' => MathToken::Comma,
                _ if Self::makes_unary(&self.prev) => MathToken::UOp(op),
                _ => MathToken::BOp(op),
            }))
        } else if let Some(id) = self.src.scan_identifier() {
            Some(match id.parse::<Func>() {
                Ok(func) => Ok(MathToken::Function(func)),
                Err(_) => Err(LexError::UnknownFunction(id)),
            })
        } else if let Some(num) = self.src.scan_number() {
            Some(match num.parse::<f64>() {
                Ok(n) => Ok(MathToken::Number(n)),
                Err(_) => Err(LexError::BadNumber(num)),
            })
        } else if let Some(c) = self.src.next() {
            self.src.ignore();
            Some(Err(LexError::UnknownCharacter(c)))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = Result<MathToken, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        if let Some(Ok(t)) = token {
            trace!("token {:?}", t);
            self.prev = Some(t);
        }
        token
    }
}

/// Split `text` into tokens, failing on the first lexical error.
pub fn tokenize(text: &str) -> Result<Vec<MathToken>, LexError> {
    let tokens = MathTokenizer::new(text.chars()).collect::<Result<Vec<_>, _>>()?;
    if tokens.is_empty() {
        return Err(LexError::EmptyInput);
    }
    debug!("tokenized {:?} into {} tokens", text, tokens.len());
    Ok(tokens)
}

///////////////////////////////////////////////////////////////////////////////
