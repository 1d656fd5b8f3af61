//! Property-based tests for tessera-validator.

use futures::executor::block_on;
use proptest::prelude::*;
use tessera_validator::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn comparison_idempotent(n in any::<i64>(), bound in any::<i64>()) {
        let v = greater_than_or_equals(bound);
        prop_assert_eq!(v.validate(&n), v.validate(&n));
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let v = email();
        prop_assert_eq!(v.validate(&*s), v.validate(&*s));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(n in -100i32..100, low in -50i32..50, high in -50i32..50) {
        let a_ok = greater_than(low).validate(&n).is_ok();
        let b_ok = less_than(high).validate(&n).is_ok();
        let combined = greater_than(low).and(less_than(high));

        prop_assert_eq!(combined.validate(&n).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(n in -100i32..100, low in -50i32..50, high in -50i32..50) {
        let a_ok = greater_than(low).validate(&n).is_ok();
        let b_ok = less_than(high).validate(&n).is_ok();
        let combined = greater_than(low).or(less_than(high));

        prop_assert_eq!(combined.validate(&n).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn accumulate_collects_one_error_per_failing_child(n in -100i32..100, bounds in prop::collection::vec(-100i32..100, 0..8)) {
        let failing = bounds.iter().filter(|&&b| n <= b).count();
        let v = accumulate_all(bounds.iter().map(|&b| greater_than(b)).collect());

        match v.validate(&n) {
            Ok(()) => prop_assert_eq!(failing, 0),
            Err(error) => {
                prop_assert_eq!(error.errors().len(), failing);
                prop_assert_eq!(error.total_error_count(), failing);
            }
        }
    }

    #[test]
    fn sequence_reports_first_failure(n in -100i32..100, bounds in prop::collection::vec(-100i32..100, 1..8)) {
        let v = and_all(bounds.iter().map(|&b| greater_than(b)).collect());
        let first = bounds.iter().find(|&&b| n <= b).map(|&b| greater_than(b).validate(&n));

        match first {
            Some(expected) => prop_assert_eq!(v.validate(&n), expected),
            None => prop_assert!(v.validate(&n).is_ok()),
        }
    }

    #[test]
    fn not_inverts_outcome(n in any::<i32>(), bound in any::<i32>()) {
        let inner_ok = equals(bound).validate(&n).is_ok();
        prop_assert_eq!(not(equals(bound)).validate(&n).is_ok(), !inner_ok);
    }

    #[test]
    fn double_not_preserves_outcome(n in any::<i32>(), bound in any::<i32>()) {
        let inner_ok = less_than(bound).validate(&n).is_ok();
        prop_assert_eq!(less_than(bound).not().not().validate(&n).is_ok(), inner_ok);
    }

    #[test]
    fn inclusive_is_strict_or_equal(n in -20i32..20, bound in -20i32..20) {
        prop_assert_eq!(
            greater_than_or_equals(bound).validate(&n),
            greater_than(bound).or(equals(bound)).validate(&n)
        );
        prop_assert_eq!(
            less_than_or_equals(bound).validate(&n),
            less_than(bound).or(equals(bound)).validate(&n)
        );
    }

    #[test]
    fn optional_ignores_none(value in proptest::option::of(any::<i32>()), bound in any::<i32>()) {
        let v = greater_than(bound).optional();
        match value {
            None => prop_assert!(v.validate(&None).is_ok()),
            Some(n) => prop_assert_eq!(v.validate(&value), greater_than(bound).validate(&n)),
        }
    }

    #[test]
    fn erasure_preserves_results(n in any::<i32>(), bound in any::<i32>()) {
        let concrete = greater_than(bound).accumulate(not(equals(0)));
        let erased = greater_than(bound).accumulate(not(equals(0))).erase();
        prop_assert_eq!(erased.validate(&n), concrete.validate(&n));
    }
}

// ============================================================================
// COLLECTIONS
// ============================================================================

proptest! {
    #[test]
    fn contains_agrees_with_str(haystack in "[a-c]{0,10}", needle in "[a-c]{1,2}") {
        let v = contains::<str, _>(needle.clone());
        prop_assert_eq!(v.validate(&*haystack).is_ok(), haystack.contains(needle.as_str()));
    }

    #[test]
    fn empty_and_not_empty_are_complementary(items in prop::collection::vec(any::<u8>(), 0..4)) {
        let empty_ok = empty::<Vec<u8>>().validate(&items).is_ok();
        prop_assert_eq!(empty_ok, items.is_empty());
        prop_assert_eq!(not_empty::<Vec<u8>>().validate(&items).is_ok(), !empty_ok);
    }
}

// ============================================================================
// ASYNC PARITY: validate_async(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn async_matches_sync(n in -100i32..100, low in -50i32..50, high in -50i32..50) {
        let v = accumulate((
            greater_than(low).labeled_inline("low"),
            one_of((less_than(high), equals(0))),
            greater_than(n).not(),
        ));
        prop_assert_eq!(block_on(v.validate_async(&n)), v.validate(&n));
        prop_assert_eq!(block_on(lift(&v).validate_async(&n)), v.validate(&n));
    }

    #[test]
    fn email_async_matches_sync(s in ".{0,40}") {
        let v = email();
        prop_assert_eq!(block_on(v.validate_async(&*s)), v.validate(&*s));
    }
}
