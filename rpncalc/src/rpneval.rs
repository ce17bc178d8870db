use crate::parser::RPNExpr;
use lexers::{Func, MathToken};
use log::{debug, trace};
use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum EvalErr {
    /// An operator or function found fewer operands than it needs.
    #[error("Incorrect syntax")]
    IncorrectSyntax,
    /// Evaluation didn't end with exactly one value.
    #[error("Invalid expression")]
    InvalidExpression,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unknown operator")]
    UnknownOperator(char),
    #[error("Unknown unary operator")]
    UnknownUnaryOperator(char),
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in self.iter() {
            match *token {
                MathToken::Number(num) => operands.push(num),
                MathToken::BOp(op) => {
                    let r = operands.pop().ok_or(EvalErr::IncorrectSyntax)?;
                    let l = operands.pop().ok_or(EvalErr::IncorrectSyntax)?;
                    operands.push(eval_binary(op, l, r)?);
                }
                MathToken::UOp(op) => {
                    let o = operands.pop().ok_or(EvalErr::IncorrectSyntax)?;
                    match op {
                        '+' => operands.push(o),
                        '-' => operands.push(-o),
                        _ => return Err(EvalErr::UnknownUnaryOperator(op)),
                    }
                }
                MathToken::Function(func) => {
                    if func.arity() > operands.len() {
                        return Err(EvalErr::IncorrectSyntax);
                    }
                    // split_off keeps the arguments in call order
                    let cut = operands.len() - func.arity();
                    let args = operands.split_off(cut);
                    operands.push(eval_fn(func, &args)?);
                }
                MathToken::OParen | MathToken::CParen | MathToken::Comma => {
                    return Err(EvalErr::InvalidExpression)
                }
            }
            trace!("{} -> {:?}", token, operands);
        }
        match operands[..] {
            [result] => {
                debug!("{} evaluates to {}", self.to_postfix_string(), result);
                Ok(result)
            }
            _ => Err(EvalErr::InvalidExpression),
        }
    }
}

/// Evaluate a postfix expression.
pub fn evaluate(rpn: &RPNExpr) -> Result<f64, EvalErr> {
    rpn.eval()
}

fn eval_binary(op: char, l: f64, r: f64) -> Result<f64, EvalErr> {
    match op {
        '+' => Ok(l + r),
        '-' => Ok(l - r),
        '*' => Ok(l * r),
        '/' if r == 0.0 => Err(EvalErr::DivisionByZero),
        '/' => Ok(l / r),
        _ => Err(EvalErr::UnknownOperator(op)),
    }
}

fn eval_fn(func: Func, args: &[f64]) -> Result<f64, EvalErr> {
    match (func, args) {
        (Func::Pow, &[base, exp]) => Ok(base.powf(exp)),
        (Func::Abs, &[x]) => Ok(x.abs()),
        (Func::Max, &[a, b]) => Ok(a.max(b)),
        (Func::Min, &[a, b]) => Ok(a.min(b)),
        _ => Err(EvalErr::IncorrectSyntax),
    }
}
