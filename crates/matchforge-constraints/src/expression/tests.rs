//! Tests for expression building and resolution.

use std::sync::Arc;

use matchforge_core::{MatchError, Value};

use super::*;
use crate::leaf::EqualConstraint;
use crate::test_utils::{even, evens_and_seven, explodes};

fn equal(v: i32) -> crate::SharedConstraint {
    Arc::new(EqualConstraint::new(v))
}

fn build(tokens: Vec<Token>) -> ExpressionBuilder {
    let mut builder = ExpressionBuilder::new();
    for token in tokens {
        match token {
            Token::Operator(op) => builder.append_operator(op).unwrap(),
            Token::Operand(c) => builder.append_operand(c).unwrap(),
        }
    }
    builder
}

fn op(op: Operator) -> Token {
    Token::Operator(op)
}

fn operand(c: crate::SharedConstraint) -> Token {
    Token::Operand(c)
}

// ============================================================================
// Builder state machine
// ============================================================================

#[test]
fn test_state_transitions() {
    let mut builder = ExpressionBuilder::new();
    assert_eq!(builder.state(), BuilderState::Empty);

    builder.append_operand(equal(1)).unwrap();
    assert_eq!(builder.state(), BuilderState::Accumulating);

    builder.resolve().unwrap();
    assert_eq!(builder.state(), BuilderState::Resolved);
}

#[test]
fn test_operand_after_operand_is_rejected() {
    let mut builder = ExpressionBuilder::new();
    builder.append_operand(equal(1)).unwrap();
    let err = builder.append_operand(equal(2)).unwrap_err();
    assert!(matches!(err, MatchError::Construction(_)));
    assert_eq!(builder.tokens().len(), 1);
}

#[test]
fn test_binary_operator_needs_left_operand() {
    let mut builder = ExpressionBuilder::new();
    assert!(builder.append_operator(Operator::And).is_err());

    builder.append_operator(Operator::Not).unwrap();
    assert!(builder.append_operator(Operator::Or).is_err());
}

#[test]
fn test_prefix_operator_after_operand_is_rejected() {
    let mut builder = ExpressionBuilder::new();
    builder.append_operand(equal(1)).unwrap();
    assert!(builder.append_operator(Operator::Not).is_err());
    assert!(builder.append_operator(Operator::All).is_err());
}

#[test]
fn test_exactly_zero_operator_is_rejected() {
    let mut builder = ExpressionBuilder::new();
    assert!(matches!(
        builder.append_operator(Operator::Exactly(0)),
        Err(MatchError::Construction(_))
    ));
}

#[test]
fn test_incomplete_expressions_do_not_resolve() {
    assert!(ExpressionBuilder::new().resolve().is_err());

    let builder = build(vec![operand(equal(1)), op(Operator::And)]);
    assert!(matches!(
        builder.resolve(),
        Err(MatchError::Construction(_))
    ));
}

#[test]
fn test_resolved_builder_is_frozen() {
    let mut builder = build(vec![operand(equal(1))]);
    builder.resolve().unwrap();
    assert!(builder.append_operator(Operator::Or).is_err());
    assert!(builder.replace_tail(equal(2)).is_err());
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_resolve_is_idempotent() {
    let builder = build(vec![
        op(Operator::Not),
        operand(equal(3)),
        op(Operator::And),
        operand(even()),
    ]);
    let first = builder.resolve().unwrap();
    let second = builder.resolve().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(builder.tokens().len(), 4);

    for v in [2, 3, 4, 5] {
        let v = Value::from(v);
        assert_eq!(
            first.apply(&v).unwrap().status(),
            second.apply(&v).unwrap().status()
        );
    }
}

#[test]
fn test_not_binds_tighter_than_and() {
    let root = build(vec![
        op(Operator::Not),
        operand(equal(1)),
        op(Operator::And),
        operand(equal(2)),
    ])
    .resolve()
    .unwrap();
    assert_eq!(root.representation(), "<and <not <equal 1>> <equal 2>>");
}

#[test]
fn test_and_binds_tighter_than_or() {
    let root = build(vec![
        operand(equal(1)),
        op(Operator::Or),
        operand(equal(2)),
        op(Operator::And),
        operand(equal(3)),
    ])
    .resolve()
    .unwrap();
    assert_eq!(
        root.representation(),
        "<or <equal 1> <and <equal 2> <equal 3>>>"
    );

    let root = build(vec![
        operand(equal(1)),
        op(Operator::And),
        operand(equal(2)),
        op(Operator::Or),
        operand(equal(3)),
    ])
    .resolve()
    .unwrap();
    assert_eq!(
        root.representation(),
        "<or <and <equal 1> <equal 2>> <equal 3>>"
    );
}

#[test]
fn test_equal_precedence_groups_to_the_right() {
    let root = build(vec![
        operand(equal(1)),
        op(Operator::Or),
        operand(equal(2)),
        op(Operator::Or),
        operand(equal(3)),
    ])
    .resolve()
    .unwrap();
    assert_eq!(
        root.representation(),
        "<or <equal 1> <or <equal 2> <equal 3>>>"
    );
    assert_eq!(root.description(), "1 or 2 or 3");

    let root = build(vec![
        operand(equal(1)),
        op(Operator::And),
        operand(equal(2)),
        op(Operator::And),
        operand(equal(3)),
    ])
    .resolve()
    .unwrap();
    assert_eq!(
        root.representation(),
        "<and <equal 1> <and <equal 2> <equal 3>>>"
    );
}

#[test]
fn test_quantifier_scopes_over_rest() {
    let root = build(vec![
        op(Operator::All),
        operand(equal(1)),
        op(Operator::Or),
        operand(equal(2)),
    ])
    .resolve()
    .unwrap();
    assert_eq!(root.representation(), "<all <or <equal 1> <equal 2>>>");
}

#[test]
fn test_quantifier_on_right_of_binary_operator() {
    let root = build(vec![
        op(Operator::Not),
        operand(Arc::new(crate::leaf::EmptyConstraint)),
        op(Operator::And),
        op(Operator::All),
        operand(even()),
    ])
    .resolve()
    .unwrap();
    assert_eq!(root.representation(), "<and <not <empty>> <all <even>>>");
    assert!(!root.apply(&evens_and_seven()).unwrap().is_success());
    assert!(root.apply(&Value::from(vec![2, 4])).unwrap().is_success());
}

#[test]
fn test_with_is_identity() {
    let root = build(vec![op(Operator::With), operand(equal(1))])
        .resolve()
        .unwrap();
    assert_eq!(root.representation(), "<equal 1>");
}

#[test]
fn test_exactly_operator_resolves_to_counted_quantifier() {
    let root = build(vec![op(Operator::Exactly(3)), operand(even())])
        .resolve()
        .unwrap();
    assert_eq!(root.description(), "exactly 3 items even");
    assert!(root.apply(&evens_and_seven()).unwrap().is_success());
}

// ============================================================================
// Tail replacement
// ============================================================================

#[test]
fn test_replace_tail_touches_only_last_operand() {
    let mut builder = build(vec![
        operand(equal(1)),
        op(Operator::Or),
        operand(equal(2)),
    ]);
    let old = builder.replace_tail(equal(5)).unwrap();
    assert_eq!(old.representation(), "<equal 2>");
    assert_eq!(
        builder.resolve().unwrap().representation(),
        "<or <equal 1> <equal 5>>"
    );
}

#[test]
fn test_replace_tail_requires_operand_tail() {
    let mut builder = build(vec![op(Operator::Not)]);
    assert!(builder.replace_tail(equal(1)).is_err());
    assert!(ExpressionBuilder::new().replace_tail(equal(1)).is_err());
}

// ============================================================================
// Fluent surface
// ============================================================================

#[test]
fn test_fluent_not_equal_or_greater() {
    let root = Is::not().equal_to(5).or().greater_than(10).resolve().unwrap();
    assert_eq!(root.description(), "not 5 or greater than 10");
    assert!(root.apply(&Value::from(4)).unwrap().is_success());
    assert!(!root.apply(&Value::from(5)).unwrap().is_success());
    assert!(root.apply(&Value::from(11)).unwrap().is_success());
}

#[test]
fn test_fluent_within_refines_only_tail() {
    let expr = Is::equal_to(1.0)
        .or()
        .equal_to(10.0)
        .within(0.05)
        .unwrap();
    let root = expr.resolve().unwrap();
    assert_eq!(root.description(), "1.0d or 10.0d +/- 0.05d");
    assert!(root.apply(&Value::from(10.04)).unwrap().is_success());
    assert!(!root.apply(&Value::from(1.04)).unwrap().is_success());
}

#[test]
fn test_fluent_tolerance_errors_surface() {
    let expr = Is::equal_to(1.0).within(1).unwrap().percent().unwrap();
    assert!(matches!(
        expr.ulps(),
        Err(MatchError::AmbiguousTolerance { .. })
    ));
    assert!(Is::equal_to(1.0).within(-1).is_err());
    assert!(matches!(
        Is::equal_to(1.0).within(0).unwrap().within(5),
        Err(MatchError::Construction(_))
    ));
}

#[test]
fn test_fluent_has_quantifiers() {
    let v = evens_and_seven();
    let even_expr = || {
        Is::satisfying("even", |v: &Value| {
            v.as_number()
                .and_then(|n| n.as_i128())
                .is_some_and(|n| n % 2 == 0)
        })
    };

    let all = Has::all().matches(&even_expr()).unwrap().resolve().unwrap();
    let result = all.apply(&v).unwrap();
    assert_eq!(result.failing_item(), Some((3, &Value::from(7))));

    let some = Has::some().matches(&even_expr()).unwrap().resolve().unwrap();
    assert!(some.apply(&v).unwrap().is_success());

    let none = Has::none().matches(&even_expr()).unwrap().resolve().unwrap();
    assert_eq!(
        none.apply(&v).unwrap().failing_item(),
        Some((0, &Value::from(2)))
    );

    let exactly = Has::exactly(3)
        .unwrap()
        .matches(&even_expr())
        .unwrap()
        .resolve()
        .unwrap();
    assert!(exactly.apply(&v).unwrap().is_success());
}

#[test]
fn test_fluent_exactly_items() {
    let root = Has::exactly(4).unwrap().items().resolve().unwrap();
    assert_eq!(root.description(), "exactly 4 items");
    assert!(root.apply(&evens_and_seven()).unwrap().is_success());
    assert!(Has::exactly(0).is_err());
}

#[test]
fn test_fluent_all_with_and_chain() {
    let root = Has::all()
        .greater_than(0)
        .and()
        .less_than(10)
        .resolve()
        .unwrap();
    assert_eq!(root.description(), "all items greater than 0 and less than 10");
    assert!(root.apply(&Value::from(vec![1, 9])).unwrap().is_success());
    assert!(!root.apply(&Value::from(vec![1, 10])).unwrap().is_success());
}

#[test]
fn test_fluent_matches_embeds_shared_constraint() {
    let shared = explodes();
    let root = Is::true_value()
        .or()
        .matches(&shared)
        .unwrap()
        .resolve()
        .unwrap();
    assert!(root.apply(&Value::from(true)).unwrap().is_success());
}

#[test]
fn test_fluent_resolve_twice_returns_same_root() {
    let expr = Is::not().null();
    let first = expr.resolve().unwrap();
    let second = expr.resolve().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_fluent_extension_after_resolve_rebuilds() {
    let expr = Is::greater_than(1);
    let before = expr.resolve().unwrap();
    let extended = expr.clone().and().less_than(3).resolve().unwrap();
    assert_eq!(before.representation(), "<greaterthan 1>");
    assert_eq!(
        extended.representation(),
        "<and <greaterthan 1> <lessthan 3>>"
    );
    assert_eq!(expr.resolve().unwrap().representation(), "<greaterthan 1>");
}

#[test]
fn test_fluent_kinds() {
    let root = Has::all().type_of::<Option<i32>>().resolve().unwrap();
    assert!(root
        .apply(&Value::from(vec![Some(1), Some(2)]))
        .unwrap()
        .is_success());
    assert_eq!(
        Is::type_of::<String>().resolve().unwrap().description(),
        "type string"
    );
}
