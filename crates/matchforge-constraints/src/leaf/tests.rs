//! Tests for leaf constraints.

use matchforge_core::{MatchError, Tolerance, ToleranceMode, Value, ValueKind};

use super::*;
use crate::constraint::Constraint;

fn holds(c: &dyn Constraint, v: impl Into<Value>) -> bool {
    c.apply(&v.into()).unwrap().is_success()
}

// ============================================================================
// Equal
// ============================================================================

#[test]
fn test_equal_across_numeric_kinds() {
    let c = EqualConstraint::new(5i32);
    assert!(holds(&c, 5u8));
    assert!(holds(&c, 5.0f64));
    assert!(!holds(&c, 6i64));
    assert!(!holds(&c, "5"));
}

#[test]
fn test_equal_within_linear() {
    let c = EqualConstraint::new(10.0).within(0.05).unwrap();
    assert!(holds(&c, 10.04));
    assert!(!holds(&c, 10.06));
    assert_eq!(c.tolerance().effective_mode(), ToleranceMode::Linear);
}

#[test]
fn test_equal_within_percent() {
    let c = EqualConstraint::new(100).within(5).unwrap().percent().unwrap();
    assert!(holds(&c, 105));
    assert!(holds(&c, 95));
    assert!(!holds(&c, 106));
    assert_eq!(c.description(), "100 +/- 5 Percent");
}

#[test]
fn test_equal_within_ulps() {
    let next = f64::from_bits(1.0f64.to_bits() + 2);
    let c = EqualConstraint::new(1.0).within(2).unwrap().ulps().unwrap();
    assert!(holds(&c, next));

    let err = c.apply(&Value::from(1.0f32)).unwrap_err();
    assert!(matches!(err, MatchError::TypeMismatch { .. }));
}

#[test]
fn test_equal_rejects_second_tolerance() {
    let c = EqualConstraint::new(1.0).within(0.1).unwrap();
    assert!(matches!(c.within(0.2), Err(MatchError::Construction(_))));

    let zero = EqualConstraint::new(1.0).within(0).unwrap();
    assert!(matches!(zero.within(5), Err(MatchError::Construction(_))));

    let exact = EqualConstraint::new(1.0).with_tolerance(Tolerance::exact());
    assert!(exact.within(1).is_err());
}

#[test]
fn test_equal_rejects_conflicting_modes() {
    let c = EqualConstraint::new(1.0).within(1).unwrap().percent().unwrap();
    assert!(matches!(
        c.ulps(),
        Err(MatchError::AmbiguousTolerance {
            current: ToleranceMode::Percent,
            requested: ToleranceMode::Ulps,
        })
    ));
}

#[test]
fn test_equal_with_exact_tolerance() {
    let c = EqualConstraint::new(2).with_tolerance(Tolerance::exact());
    assert!(holds(&c, 2u64));
    assert!(!holds(&c, 3));
}

#[test]
fn test_equal_null_and_sequences() {
    assert!(holds(&EqualConstraint::new(Value::Null), Value::Null));
    assert!(!holds(&EqualConstraint::new(Value::Null), 0));
    assert!(holds(&EqualConstraint::new(vec![1, 2]), vec![1u8, 2u8]));
}

#[test]
fn test_equal_representation() {
    assert_eq!(EqualConstraint::new(5).representation(), "<equal 5>");
    assert_eq!(EqualConstraint::new("a").representation(), "<equal \"a\">");
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_comparisons() {
    assert!(holds(&ComparisonConstraint::less_than(5), 4.5));
    assert!(!holds(&ComparisonConstraint::less_than(5), 5));
    assert!(holds(&ComparisonConstraint::less_than_or_equal(5), 5u64));
    assert!(holds(&ComparisonConstraint::greater_than(-1i64), u64::MAX));
    assert!(holds(&ComparisonConstraint::greater_than_or_equal(2.0), 2));
    assert!(!holds(&ComparisonConstraint::greater_than_or_equal(2.0), 1));
}

#[test]
fn test_comparison_null_orders_first() {
    assert!(holds(&ComparisonConstraint::less_than(0), Value::Null));
}

#[test]
fn test_comparison_not_comparable_is_error() {
    let err = ComparisonConstraint::less_than(5)
        .apply(&Value::from("five"))
        .unwrap_err();
    assert!(matches!(err, MatchError::NotComparable { .. }));
}

#[test]
fn test_comparison_description() {
    let c = ComparisonConstraint::greater_than_or_equal(3);
    assert_eq!(c.description(), "greater than or equal to 3");
    assert_eq!(c.representation(), "<greaterthanorequal 3>");
    assert_eq!(c.op(), ComparisonOp::GreaterThanOrEqual);
}

// ============================================================================
// Simple leaves
// ============================================================================

#[test]
fn test_null_true_false() {
    assert!(holds(&NullConstraint, Value::Null));
    assert!(!holds(&NullConstraint, 0));
    assert!(holds(&TrueConstraint, true));
    assert!(holds(&TrueConstraint, Some(true)));
    assert!(!holds(&TrueConstraint, 1));
    assert!(holds(&FalseConstraint, false));
    assert!(!holds(&FalseConstraint, Value::Null));
}

#[test]
fn test_empty() {
    assert!(holds(&EmptyConstraint, ""));
    assert!(holds(&EmptyConstraint, Vec::<i32>::new()));
    assert!(!holds(&EmptyConstraint, vec![1]));
    let err = EmptyConstraint.apply(&Value::from(1)).unwrap_err();
    assert!(matches!(err, MatchError::TypeMismatch { .. }));
}

#[test]
fn test_anything() {
    assert!(holds(&AnythingConstraint, Value::Null));
    assert!(holds(&AnythingConstraint, "x"));
    assert_eq!(AnythingConstraint.description(), "");
}

// ============================================================================
// Kind and predicate
// ============================================================================

#[test]
fn test_kind_is_exact() {
    assert!(holds(&KindConstraint::of::<i32>(), 1i32));
    assert!(!holds(&KindConstraint::of::<i32>(), 1i64));
    assert!(holds(&KindConstraint::of::<Option<i32>>(), Some(1i32)));
    assert!(!holds(&KindConstraint::of::<i32>(), Some(1i32)));
    assert_eq!(
        KindConstraint::new(ValueKind::String).description(),
        "type string"
    );
}

#[test]
fn test_predicate() {
    let c = PredicateConstraint::new("odd", |v: &Value| {
        v.as_number()
            .and_then(|n| n.as_i128())
            .is_some_and(|n| n % 2 != 0)
    });
    assert!(holds(&c, 3));
    assert!(!holds(&c, 4));
    assert_eq!(c.description(), "odd");
    assert_eq!(c.representation(), "<predicate>");
}
