//! Tests for combinators.

use std::num::NonZeroUsize;
use std::sync::Arc;

use matchforge_core::{MatchError, Value, ValueKind};

use super::*;
use crate::constraint::Constraint;
use crate::leaf::{EqualConstraint, KindConstraint, NullConstraint};
use crate::result::{ConstraintStatus, ResultContext};
use crate::test_utils::{even, evens_and_seven, explodes, Counting};

fn equal(v: i32) -> crate::SharedConstraint {
    Arc::new(EqualConstraint::new(v))
}

// ============================================================================
// Not
// ============================================================================

#[test]
fn test_not_negates_status() {
    let c = not(even());
    assert!(c.apply(&Value::from(3)).unwrap().is_success());
    assert!(!c.apply(&Value::from(4)).unwrap().is_success());
}

#[test]
fn test_double_negation_matches_inner() {
    let inner = even();
    let twice = not(not(inner.clone()));
    for v in [-2, -1, 0, 1, 2, 7] {
        let v = Value::from(v);
        assert_eq!(
            twice.apply(&v).unwrap().status(),
            inner.apply(&v).unwrap().status()
        );
    }
}

#[test]
fn test_not_applies_inner_once_and_keeps_actual() {
    let counting = Counting::new(even());
    let c = not(counting.clone());
    let result = c.apply(&Value::from(5)).unwrap();
    assert_eq!(counting.calls(), 1);
    assert_eq!(result.actual(), &Value::from(5));
}

#[test]
fn test_not_description_and_representation() {
    let c = not(equal(5));
    assert_eq!(c.description(), "not 5");
    assert_eq!(c.representation(), "<not <equal 5>>");
}

// ============================================================================
// And
// ============================================================================

#[test]
fn test_and_truth_table() {
    let v = Value::from(4);
    assert!(and(even(), equal(4)).apply(&v).unwrap().is_success());
    assert!(!and(even(), equal(6)).apply(&v).unwrap().is_success());
    assert!(!and(equal(6), even()).apply(&v).unwrap().is_success());
}

#[test]
fn test_and_skips_right_when_left_fails() {
    let c = and(equal(1), explodes());
    let result = c.apply(&Value::from(2)).unwrap();
    assert_eq!(result.status(), ConstraintStatus::Failure);
}

#[test]
fn test_and_failure_nests_failing_operand() {
    let c = and(even(), equal(6));
    let result = c.apply(&Value::from(4)).unwrap();
    let nested = result.nested().unwrap();
    assert_eq!(nested.description(), "6");
    assert!(!nested.is_success());
}

#[test]
fn test_and_description() {
    let c = and(even(), equal(4));
    assert_eq!(c.description(), "even and 4");
    assert_eq!(c.representation(), "<and <even> <equal 4>>");
}

// ============================================================================
// Or
// ============================================================================

#[test]
fn test_or_skips_right_when_left_succeeds() {
    let c = or(even(), explodes());
    assert!(c.apply(&Value::from(2)).unwrap().is_success());
}

#[test]
fn test_or_takes_right_status_when_left_fails() {
    let c = or(even(), equal(3));
    assert!(c.apply(&Value::from(3)).unwrap().is_success());

    let result = c.apply(&Value::from(5)).unwrap();
    assert!(!result.is_success());
    assert_eq!(result.nested().unwrap().description(), "3");
}

#[test]
fn test_or_description() {
    assert_eq!(or(equal(1), equal(2)).description(), "1 or 2");
}

// ============================================================================
// Item quantifiers
// ============================================================================

#[test]
fn test_all_stops_at_first_failure() {
    let c = all_items(even());
    let result = c.apply(&evens_and_seven()).unwrap();
    assert!(!result.is_success());
    assert_eq!(result.failing_item(), Some((3, &Value::from(7))));
    assert_eq!(result.actual(), &evens_and_seven());
}

#[test]
fn test_some_succeeds_on_first_match() {
    let counting = Counting::new(even());
    let c = some_item(counting.clone());
    assert!(c.apply(&evens_and_seven()).unwrap().is_success());
    assert_eq!(counting.calls(), 1);
}

#[test]
fn test_some_failure_carries_no_item() {
    let c = some_item(equal(9));
    let result = c.apply(&evens_and_seven()).unwrap();
    assert!(!result.is_success());
    assert!(matches!(result.context(), ResultContext::None));
}

#[test]
fn test_none_fails_at_first_match() {
    let c = no_item(even());
    let result = c.apply(&evens_and_seven()).unwrap();
    assert!(!result.is_success());
    assert_eq!(result.failing_item(), Some((0, &Value::from(2))));
}

#[test]
fn test_exactly_counts_every_item() {
    let counting = Counting::new(even());
    let c = exactly_items(3, counting.clone()).unwrap();
    assert!(c.apply(&evens_and_seven()).unwrap().is_success());
    assert_eq!(counting.calls(), 4);
}

#[test]
fn test_exactly_caps_captured_items() {
    let c = exactly_items(1, even()).unwrap();
    let result = c.apply(&evens_and_seven()).unwrap();
    assert!(!result.is_success());
    match result.context() {
        ResultContext::MatchSummary {
            expected,
            count,
            items,
        } => {
            assert_eq!(*expected, 1);
            assert_eq!(*count, 3);
            assert_eq!(items.len(), 2);
            assert_eq!(items[0], Value::from(2));
            assert_eq!(items[1], Value::from(4));
        }
        other => panic!("unexpected context {:?}", other),
    }
}

#[test]
fn test_exactly_with_one_more_match_fails() {
    let c = exactly_items(2, even()).unwrap();
    let result = c.apply(&Value::from(vec![2, 4, 6])).unwrap();
    assert!(!result.is_success());
    match result.context() {
        ResultContext::MatchSummary { items, .. } => assert_eq!(items.len(), 3),
        other => panic!("unexpected context {:?}", other),
    }
}

#[test]
fn test_exactly_zero_is_rejected() {
    assert!(matches!(
        exactly_items(0, even()),
        Err(MatchError::Construction(_))
    ));
}

#[test]
fn test_counted_quantifier_through_new() {
    let two = NonZeroUsize::new(2).unwrap();
    let c = ItemsConstraint::new(Quantifier::Exactly(two), even());
    assert_eq!(c.quantifier(), Quantifier::Exactly(two));
    assert!(c.apply(&Value::from(vec![2, 3, 4])).unwrap().is_success());
    assert!(!c.apply(&Value::from(vec![1, 3])).unwrap().is_success());

    assert!(NonZeroUsize::new(0).is_none());
    assert!(matches!(
        ItemsConstraint::exactly(0, even()),
        Err(MatchError::Construction(_))
    ));
}

#[test]
fn test_quantifiers_over_empty_sequence() {
    let empty = Value::list(Vec::<i32>::new());
    assert!(all_items(explodes()).apply(&empty).unwrap().is_success());
    assert!(!some_item(explodes()).apply(&empty).unwrap().is_success());
    assert!(no_item(explodes()).apply(&empty).unwrap().is_success());
}

#[test]
fn test_quantifier_rejects_non_sequence() {
    let err = all_items(even()).apply(&Value::from(4)).unwrap_err();
    assert!(matches!(err, MatchError::TypeMismatch { .. }));

    let err = some_item(even()).apply(&Value::Null).unwrap_err();
    assert!(matches!(err, MatchError::TypeMismatch { .. }));
}

#[test]
fn test_null_items_reach_inner_unchanged() {
    let items = Value::list(vec![Value::Null, Value::from(1)]);
    let c = all_items(Arc::new(NullConstraint));
    let result = c.apply(&items).unwrap();
    assert_eq!(result.failing_item(), Some((1, &Value::from(1))));
}

#[test]
fn test_raw_items_of_nullable_sequence_are_rewrapped() {
    let items = Value::typed_list(
        ValueKind::I32.nullable(),
        vec![Value::from(1), Value::Null, Value::some(3)],
    );
    let nullable_i32 = KindConstraint::new(ValueKind::I32.nullable());
    let c = all_items(Arc::new(
        OrConstraint::new(Arc::new(nullable_i32), Arc::new(NullConstraint)),
    ));
    assert!(c.apply(&items).unwrap().is_success());

    let untyped = Value::list(vec![Value::from(1)]);
    let raw = all_items(Arc::new(KindConstraint::new(ValueKind::I32.nullable())));
    assert!(!raw.apply(&untyped).unwrap().is_success());
}

#[test]
fn test_quantifier_descriptions() {
    assert_eq!(all_items(even()).description(), "all items even");
    assert_eq!(some_item(even()).description(), "some item even");
    assert_eq!(no_item(even()).description(), "no item even");
    assert_eq!(
        exactly_items(1, even()).unwrap().description(),
        "exactly one item even"
    );
    assert_eq!(
        exactly_items(3, even()).unwrap().description(),
        "exactly 3 items even"
    );
    assert_eq!(
        exactly_items(3, equal(1)).unwrap().representation(),
        "<exactly 3 <equal 1>>"
    );
    assert_eq!(all_items(equal(1)).representation(), "<all <equal 1>>");
}

#[test]
fn test_shared_subtree_in_two_parents() {
    let shared = even();
    let a = all_items(shared.clone());
    let b = no_item(shared);
    let v = evens_and_seven();
    assert!(!a.apply(&v).unwrap().is_success());
    assert!(!b.apply(&v).unwrap().is_success());
}

#[test]
fn test_apply_is_repeatable() {
    let c = and(not(equal(3)), some_item(even()));
    let v = evens_and_seven();
    let first = c.apply(&v).unwrap().status();
    let second = c.apply(&v).unwrap().status();
    assert_eq!(first, second);
}
