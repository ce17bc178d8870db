use crate::parser::{precedence, RPNExpr};
use lexers::MathToken;
use std::fmt;

// binding strength of things that never need parens around them
const ATOM: usize = usize::MAX;
const UNARY: usize = 30;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a MathToken),
    Node(&'a MathToken, Vec<AST<'a>>),
}

impl RPNExpr {
    // None if the postfix sequence doesn't reduce to a single tree
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for token in self.iter() {
            let arity = match *token {
                MathToken::Number(_) => {
                    ops.push(AST::Leaf(token));
                    continue;
                }
                MathToken::Function(func) => func.arity(),
                MathToken::BOp(_) => 2,
                MathToken::UOp(_) => 1,
                MathToken::OParen | MathToken::CParen | MathToken::Comma => return None,
            };
            let n = ops.len().checked_sub(arity)?;
            let operands = ops.split_off(n);
            ops.push(AST::Node(token, operands));
        }
        match (ops.pop(), ops.is_empty()) {
            (Some(root), true) => Some(root),
            _ => None,
        }
    }

    /// Tokens joined by spaces, eg: `2 3 pow`.
    pub fn to_postfix_string(&self) -> String {
        self.iter()
            .map(|token| token.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// Prints the expression back in infix form, with only the parens
/// needed to keep its meaning.
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn printer(root: &AST) -> (String, usize) {
            match root {
                AST::Leaf(token) => (token.to_string(), ATOM),
                AST::Node(token, args) => match **token {
                    MathToken::UOp(op) => {
                        let (sub, rank) = printer(&args[0]);
                        if rank < UNARY {
                            (format!("{}({})", op, sub), UNARY)
                        } else {
                            (format!("{}{}", op, sub), UNARY)
                        }
                    }
                    MathToken::BOp(op) => {
                        let prec = precedence(op);
                        let (lhs, lrank) = printer(&args[0]);
                        let (rhs, rrank) = printer(&args[1]);
                        let lh = if lrank < prec { format!("({})", lhs) } else { lhs };
                        // everything is left associative: 8 - (3 - 2) keeps its parens
                        let rh = if rrank <= prec { format!("({})", rhs) } else { rhs };
                        (format!("{} {} {}", lh, op, rh), prec)
                    }
                    MathToken::Function(func) => {
                        let expr = args
                            .iter()
                            .map(|leaf| printer(leaf).0)
                            .collect::<Vec<String>>()
                            .join(", ");
                        (format!("{}({})", func, expr), ATOM)
                    }
                    _ => (token.to_string(), ATOM),
                },
            }
        }

        match self.build_ast() {
            Some(root) => write!(f, "{}", printer(&root).0),
            None => write!(f, "{}", self.to_postfix_string()),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
