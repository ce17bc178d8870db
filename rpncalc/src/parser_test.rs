use crate::parser::{ParseError, ShuntingParser};
use crate::CalcError;
use lexers::{Func, MathToken};

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("3+4*2/-(1-5)").unwrap();
    let expect = [
        MathToken::Number(3.0),
        MathToken::Number(4.0),
        MathToken::Number(2.0),
        MathToken::BOp('*'),
        MathToken::Number(1.0),
        MathToken::Number(5.0),
        MathToken::BOp('-'),
        MathToken::UOp('-'),
        MathToken::BOp('/'),
        MathToken::BOp('+'),
    ];
    assert_eq!(rpn.len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }
}

#[test]
fn test_parse2() {
    let rpn = ShuntingParser::parse_str("max(2 + 3, pow(2, abs(-3))) * 4").unwrap();
    let expect = [
        MathToken::Number(2.0),
        MathToken::Number(3.0),
        MathToken::BOp('+'),
        MathToken::Number(2.0),
        MathToken::Number(3.0),
        MathToken::UOp('-'),
        MathToken::Function(Func::Abs),
        MathToken::Function(Func::Pow),
        MathToken::Function(Func::Max),
        MathToken::Number(4.0),
        MathToken::BOp('*'),
    ];
    assert_eq!(rpn.len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }
}

#[test]
fn left_associative() {
    let rpn = ShuntingParser::parse_str("8-3-2").unwrap();
    assert_eq!(rpn.to_postfix_string(), "8 3 - 2 -");
    let rpn = ShuntingParser::parse_str("16/4*2").unwrap();
    assert_eq!(rpn.to_postfix_string(), "16 4 / 2 *");
}

#[test]
fn unary_binds_tightest() {
    let rpn = ShuntingParser::parse_str("-5+3").unwrap();
    assert_eq!(rpn.to_postfix_string(), "5 - 3 +");
    let rpn = ShuntingParser::parse_str("3*-2+1").unwrap();
    assert_eq!(rpn.to_postfix_string(), "3 2 - * 1 +");
    let rpn = ShuntingParser::parse_str("--2").unwrap();
    assert_eq!(&rpn[..], &[MathToken::Number(2.0), MathToken::UOp('-'), MathToken::UOp('-')]);
}

#[test]
fn no_brackets_in_output() {
    let rpn = ShuntingParser::parse_str("(((5)))").unwrap();
    assert_eq!(&rpn[..], &[MathToken::Number(5.0)]);
    let rpn = ShuntingParser::parse_str("min((1), (2, 3))").unwrap();
    assert!(rpn.iter().all(|t| !matches!(t,
        MathToken::OParen | MathToken::CParen | MathToken::Comma)));
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("(2+3");
    assert_eq!(rpn, Err(CalcError::Parse(ParseError::MismatchedParentheses)));

    let rpn = ShuntingParser::parse_str("2+3)");
    assert_eq!(rpn, Err(CalcError::Parse(ParseError::MismatchedParentheses)));

    let rpn = ShuntingParser::parse_str("max(2, 3");
    assert_eq!(rpn, Err(CalcError::Parse(ParseError::MismatchedParentheses)));

    let rpn = ShuntingParser::parse_str(")(");
    assert_eq!(rpn, Err(CalcError::Parse(ParseError::MismatchedParentheses)));
}

#[test]
fn stray_comma_is_tolerated() {
    let rpn = ShuntingParser::parse_str("1 + 2, 3").unwrap();
    assert_eq!(rpn.to_postfix_string(), "1 2 + 3");
    let rpn = ShuntingParser::parse_str(",").unwrap();
    assert!(rpn.is_empty());
}

#[test]
fn lex_errors_pass_through() {
    assert_eq!(ShuntingParser::parse_str("foo(1)"),
               Err(CalcError::Lex(lexers::LexError::UnknownFunction("foo".to_string()))));
    assert_eq!(ShuntingParser::parse_str(""), Err(CalcError::Lex(lexers::LexError::EmptyInput)));
}

#[test]
fn parse_token_vec() {
    let tokens = vec![
        MathToken::Function(Func::Pow),
        MathToken::OParen,
        MathToken::Number(2.0),
        MathToken::Comma,
        MathToken::Number(3.0),
        MathToken::CParen,
    ];
    let rpn = ShuntingParser::parse(tokens).unwrap();
    assert_eq!(rpn.to_postfix_string(), "2 3 pow");
}
