//! Arithmetic expression grammar: an engine consumer that evaluates infix
//! expressions over `+ - * % / ( )` eagerly during parsing, with no AST
//! stage. Each precedence tier is a left-associative loop over the tier
//! below it; numeric values are `f64` throughout.

use parsnip::{Parser, between, choice, float, literal, optional};

fn apply_op(op: &str, lhs: f64, rhs: f64) -> f64 {
    match op {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "%" => lhs % rhs,
        "*" => lhs * rhs,
        "/" => lhs / rhs,
        _ => unreachable!("unknown operator {op}"),
    }
}

/// Left-associative loop: one part, then (operator, part) pairs folded as
/// they are parsed. A matched operator with no operand after it is a hard
/// mismatch.
fn tier(
    name: &'static str,
    part: impl Fn() -> Parser<f64> + Send + Sync + 'static,
    operators: &'static [&'static str],
) -> Parser<f64> {
    Parser::from_fn(name, move |cursor| {
        let mut value = part().apply(cursor)?;
        let operator = choice(operators.iter().map(|op| literal(*op)).collect());
        while let Some(op) = optional(operator.clone()).apply(cursor)? {
            let rhs = part().apply(cursor)?;
            value = apply_op(&op, value, rhs);
        }
        Ok(value)
    })
}

fn group_expr() -> Parser<f64> {
    Parser::from_fn("group_expr", |cursor| {
        let part = choice(vec![
            add_expr(),
            mod_expr(),
            multiply_expr(),
            group_expr(),
            float(),
        ])
        .name("group_part");
        between(literal("("), part, literal(")")).apply(cursor)
    })
}

fn multiply_expr() -> Parser<f64> {
    tier(
        "multiply_expr",
        || choice(vec![group_expr(), float()]).name("multiply_part"),
        &["*", "/"],
    )
}

fn mod_expr() -> Parser<f64> {
    tier(
        "mod_expr",
        || choice(vec![multiply_expr(), group_expr(), float()]).name("mod_part"),
        &["%"],
    )
}

fn add_expr() -> Parser<f64> {
    tier(
        "add_expr",
        || choice(vec![mod_expr(), multiply_expr(), group_expr(), float()]).name("add_part"),
        &["+", "-"],
    )
}

fn calc() -> Parser<f64> {
    add_expr()
}

fn verify(expr: &str, expected: f64) {
    assert_eq!(calc().parse(expr).unwrap(), expected, "for {expr:?}");
}

#[test]
fn test_add_and_subtract() {
    verify("1 + 2", 3.0);
    verify("1 - 2", -1.0);
    verify("1 + 2 + 3", 6.0);
    verify("1+2-3", 0.0);
}

#[test]
fn test_single_number() {
    verify("1", 1.0);
    verify("-4.5", -4.5);
}

#[test]
fn test_mod() {
    verify("3 % 5", 3.0);
    verify("3 % 5 % 7", 3.0);
    verify("5 % 2", 1.0);
}

#[test]
fn test_multiply_and_divide() {
    verify("3 * 5", 15.0);
    verify("3 / 5", 0.6);
    verify("10 / 4", 2.5);
    verify("1 * 2 * 3 / 6 / 7 * 8", 1.0 * 2.0 * 3.0 / 6.0 / 7.0 * 8.0);
}

#[test]
fn test_left_associativity() {
    verify("8 - 3 - 2", 3.0);
    verify("16 / 4 / 2", 2.0);
}

#[test]
fn test_precedence() {
    verify("1 + 2 * 3", 7.0);
    verify("2 * 3 + 1", 7.0);
    verify("3 + 10 % 4", 5.0);
}

#[test]
fn test_groups() {
    verify("(3 + 2)", 5.0);
    verify("3 + (5 % 2)", 4.0);
    verify("(1 + 2) * 3", 9.0);
    verify("((1 + 2) * 3)", 9.0);
}

#[test]
fn test_empty_group_is_mismatch() {
    assert!(calc().parse("()").is_err());
}

#[test]
fn test_mismatch_reports_name_and_offset() {
    let error = calc().parse("()").unwrap_err();
    assert_eq!(error.offset, 0);
    assert!(error.name.contains("add_part"), "got {}", error.name);
}

#[test]
fn test_same_grammar_value_reusable() {
    let parser = calc();
    assert_eq!(parser.parse("2 + 2").unwrap(), 4.0);
    assert_eq!(parser.parse("2 + 2").unwrap(), 4.0);
}
