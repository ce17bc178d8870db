//! Evaluate arithmetic expressions by converting them to postfix order
//! with the shunting-yard algorithm.
//!
//! ```
//! let rpn = rpncalc::ShuntingParser::parse_str("pow(2, 3) * -(1 + 1)").unwrap();
//! assert_eq!(rpn.to_postfix_string(), "2 3 pow 1 1 + - *");
//! assert_eq!(rpn.eval(), Ok(-16.0));
//! ```

pub use lexers::{tokenize, Func, LexError, MathToken};

pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;
#[cfg(test)]
mod parser_test;

pub use self::rpneval::evaluate;
pub use self::rpneval::EvalErr;

mod rpnprint;
mod rpneval;

use thiserror::Error;

/// The first failure of any of the three stages.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalErr),
}

/// Reorder infix tokens into postfix.
pub fn to_postfix(tokens: Vec<MathToken>) -> Result<RPNExpr, ParseError> {
    ShuntingParser::parse(tokens)
}

/// Tokenize, convert and evaluate `expr`.
pub fn eval_str(expr: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(expr)?;
    let rpn = to_postfix(tokens)?;
    Ok(evaluate(&rpn)?)
}
