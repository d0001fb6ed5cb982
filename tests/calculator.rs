use rpn::{calculator::ErrorKind, evaluate, stack, Calculator, Error, Operator};
use test_case::test_case;

mod common;

#[test_case("1", Ok(1); "single operand")]
#[test_case("1 1 +", Ok(2); "simple addition")]
#[test_case("15 5 +", Ok(20); "addition")]
#[test_case("15 5 -", Ok(10); "subtraction")]
#[test_case("5 15 -", Ok(-10); "subtraction order")]
#[test_case("15 -5 *", Ok(-75); "multiply negative")]
#[test_case("15 4 //", Ok(3); "floor division")]
#[test_case("4 15 //", Ok(0); "floor division order")]
#[test_case("-7 2 //", Ok(-4); "floor division rounds down")]
#[test_case("1 1 1 + -", Ok(-1); "nested right operand")]
#[test_case("15 7 1 1 + - // 3 * 2 1 1 + + -", Ok(5); "complex expression")]
#[test_case("  3\t4\n+  ", Ok(7); "surrounding whitespace")]
#[test_case("+3 -0 -", Ok(3); "signed literals")]
#[test_case("9223372036854775807", Ok(i64::MAX); "maximum integer")]
#[test_case("-9223372036854775808", Ok(i64::MIN); "minimum integer")]
fn valid(source: &str, expected: Result<i64, String>) {
    assert_eq!(common::eval(source), expected);
}

#[test_case("-5 27 *", Ok(-135); "negative times positive")]
#[test_case("5 -27 *", Ok(-135); "positive times negative")]
#[test_case("-5 -27 *", Ok(135); "both negative")]
#[test_case("-5 0 *", Ok(0); "negative times zero")]
#[test_case("0 5 *", Ok(0); "zero times positive")]
#[test_case("0 0 *", Ok(0); "zero times zero")]
fn multiply(source: &str, expected: Result<i64, String>) {
    assert_eq!(common::eval(source), expected);
}

#[test_case("", Err(ErrorKind::Stack(stack::Error::Underflow)); "empty")]
#[test_case("   ", Err(ErrorKind::Stack(stack::Error::Underflow)); "only whitespace")]
#[test_case("1 1", Err(ErrorKind::MalformedExpression { remaining: 2 }); "missing operator")]
#[test_case("1 2 3 +", Err(ErrorKind::MalformedExpression { remaining: 2 }); "operand left over")]
#[test_case("1 2 3 4", Err(ErrorKind::MalformedExpression { remaining: 4 }); "even number left over")]
#[test_case("1 1 + +", Err(ErrorKind::Stack(stack::Error::Underflow)); "too many operators")]
#[test_case("+", Err(ErrorKind::Stack(stack::Error::Underflow)); "lone operator")]
#[test_case("1 1 &", Err(ErrorKind::UnknownOperator("&".to_string())); "unknown operator")]
#[test_case("1 1 /", Err(ErrorKind::UnknownOperator("/".to_string())); "true division")]
#[test_case("Random Junk", Err(ErrorKind::Stack(stack::Error::Underflow)); "junk")]
#[test_case("0 kk *", Err(ErrorKind::Stack(stack::Error::Underflow)); "junk operand")]
#[test_case("7 0 //", Err(ErrorKind::DivisionByZero); "division by zero")]
#[test_case("9223372036854775807 1 +", Err(ErrorKind::ArithmeticOverflow { op: Operator::Add }); "add overflow")]
#[test_case("-9223372036854775808 1 -", Err(ErrorKind::ArithmeticOverflow { op: Operator::Sub }); "sub overflow")]
#[test_case("9223372036854775807 2 *", Err(ErrorKind::ArithmeticOverflow { op: Operator::Mul }); "mul overflow")]
#[test_case("-9223372036854775808 -1 //", Err(ErrorKind::ArithmeticOverflow { op: Operator::FloorDiv }); "div overflow")]
fn invalid(source: &str, expected: Result<i64, ErrorKind>) {
    assert_eq!(common::eval_kind(source), expected);
}

#[test]
fn test_error_predicates() {
    assert!(evaluate("").unwrap_err().is_underflow());
    assert!(evaluate("1 1").unwrap_err().is_malformed());
    assert!(evaluate("1 1 &").unwrap_err().is_unknown_operator());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        common::eval("1 1 &"),
        Err("unknown operator: &".to_string())
    );
    assert_eq!(
        common::eval(""),
        Err("stack underflow: no item on stack".to_string())
    );
}

#[test]
fn test_eval_lines_skips_blank_lines() {
    let input = "1 2 +\n\n   \t\n3\n\n";
    let mut out = Vec::new();

    Calculator::default()
        .eval_lines(input.as_bytes(), &mut out)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "3\n3\n");
}

#[test]
fn test_eval_lines_stops_at_first_error() {
    let input = "1 2 +\n1 1\n4\n";
    let mut out = Vec::new();

    let err = Calculator::default()
        .eval_lines(input.as_bytes(), &mut out)
        .unwrap_err();

    assert!(matches!(err, Error::Eval(e) if e.is_malformed()));
    assert_eq!(String::from_utf8(out).unwrap(), "3\n");
}
