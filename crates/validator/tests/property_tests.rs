//! Property-based tests for shapeguard-validator.

use proptest::prelude::*;
use shapeguard_validator::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// STRATEGIES
// ============================================================================

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        Just(Value::Number(f64::NAN)),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        ".{0,8}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4).prop_map(Value::object),
        ]
    })
}

/// A validator with a fixed outcome that counts its invocations.
fn outcome(ok: bool, calls: &Arc<AtomicUsize>) -> SharedValidator {
    let calls = Arc::clone(calls);
    shared(from_fn(move |_, _| {
        calls.fetch_add(1, Ordering::SeqCst);
        if ok {
            Ok(())
        } else {
            Err(ValidationError::custom("fixed failure"))
        }
    }))
}

fn outcomes(pattern: &[bool], calls: &Arc<AtomicUsize>) -> Vec<SharedValidator> {
    pattern.iter().map(|&ok| outcome(ok, calls)).collect()
}

// ============================================================================
// TRUTH TABLES: lazy and eager forms agree on validity
// ============================================================================

proptest! {
    #[test]
    fn and_passes_iff_all_pass(pattern in prop::collection::vec(any::<bool>(), 0..8)) {
        let calls = Arc::new(AtomicUsize::new(0));
        let lazy = and_all(outcomes(&pattern, &calls));
        let eager = eager_and(outcomes(&pattern, &calls));
        let expected = pattern.iter().all(|&ok| ok);

        prop_assert_eq!(lazy.validate(&Value::Null).is_ok(), expected);
        prop_assert_eq!(eager.validate(&Value::Null).is_ok(), expected);
    }

    #[test]
    fn or_passes_iff_any_passes(pattern in prop::collection::vec(any::<bool>(), 0..8)) {
        let calls = Arc::new(AtomicUsize::new(0));
        let lazy = or_any(outcomes(&pattern, &calls));
        let eager = eager_or(outcomes(&pattern, &calls));
        let expected = pattern.iter().any(|&ok| ok);

        prop_assert_eq!(lazy.validate(&Value::Null).is_ok(), expected);
        prop_assert_eq!(eager.validate(&Value::Null).is_ok(), expected);
    }
}

// ============================================================================
// INVOCATION COUNTS: lazy stops early, eager runs everything
// ============================================================================

proptest! {
    #[test]
    fn lazy_and_stops_at_first_failure(pattern in prop::collection::vec(any::<bool>(), 0..8)) {
        let calls = Arc::new(AtomicUsize::new(0));
        let _ = and_all(outcomes(&pattern, &calls)).validate(&Value::Null);
        let expected = pattern.iter().position(|&ok| !ok).map_or(pattern.len(), |i| i + 1);
        prop_assert_eq!(calls.load(Ordering::SeqCst), expected);
    }

    #[test]
    fn lazy_or_stops_at_first_success(pattern in prop::collection::vec(any::<bool>(), 0..8)) {
        let calls = Arc::new(AtomicUsize::new(0));
        let _ = or_any(outcomes(&pattern, &calls)).validate(&Value::Null);
        let expected = pattern.iter().position(|&ok| ok).map_or(pattern.len(), |i| i + 1);
        prop_assert_eq!(calls.load(Ordering::SeqCst), expected);
    }

    #[test]
    fn eager_runs_every_validator_once(pattern in prop::collection::vec(any::<bool>(), 0..8)) {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = eager_and(outcomes(&pattern, &calls)).validate(&Value::Null);
        prop_assert_eq!(calls.load(Ordering::SeqCst), pattern.len());
        let failures = pattern.iter().filter(|&&ok| !ok).count();
        match result {
            Ok(()) => prop_assert_eq!(failures, 0),
            Err(err) => prop_assert_eq!(err.as_sequence().map(<[_]>::len), Some(failures)),
        }

        let calls = Arc::new(AtomicUsize::new(0));
        let _ = eager_or(outcomes(&pattern, &calls)).validate(&Value::Null);
        prop_assert_eq!(calls.load(Ordering::SeqCst), pattern.len());
    }

    #[test]
    fn or_collects_every_branch_error(n in 0usize..8) {
        let calls = Arc::new(AtomicUsize::new(0));
        let err = or_any(outcomes(&vec![false; n], &calls))
            .validate(&Value::Null)
            .unwrap_err();
        prop_assert_eq!(err.as_sequence().map(<[_]>::len), Some(n));
    }
}

// ============================================================================
// SINGLE-ARGUMENT COMPOSITION
// ============================================================================

proptest! {
    #[test]
    fn single_and_is_identity(v in value()) {
        let single = and![is_number()];
        prop_assert_eq!(single.validate(&v), is_number().validate(&v));
    }

    #[test]
    fn single_or_agrees_with_inner(v in value()) {
        let single = or![is_number()];
        prop_assert_eq!(single.validate(&v).is_ok(), is_number().validate(&v).is_ok());
    }
}

// ============================================================================
// OPTIONAL: ill-defined values never reach the inner validator
// ============================================================================

proptest! {
    #[test]
    fn optional_skips_ill_defined(v in value()) {
        let calls = Arc::new(AtomicUsize::new(0));
        let validator = outcome(false, &calls).optional();
        let result = validator.validate(&v);

        prop_assert_eq!(result.is_ok(), v.is_ill_defined());
        let expected_calls = usize::from(!v.is_ill_defined());
        prop_assert_eq!(calls.load(Ordering::SeqCst), expected_calls);
    }
}

// ============================================================================
// STRUCTURE: error keys match failing positions
// ============================================================================

proptest! {
    #[test]
    fn list_error_keys_are_failing_indices(items in prop::collection::vec(any::<i32>(), 0..16)) {
        let non_negative = from_fn(|value, _| match value.as_f64() {
            Some(n) if n >= 0.0 => Ok(()),
            _ => Err(ValidationError::custom("negative")),
        });
        let failing: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, n)| **n < 0)
            .map(|(i, _)| i)
            .collect();

        match list_checker(non_negative).validate(&Value::from(items)) {
            Ok(()) => prop_assert!(failing.is_empty()),
            Err(err) => {
                let keys: Vec<usize> = err.as_indices().unwrap().keys().copied().collect();
                prop_assert_eq!(keys, failing);
            }
        }
    }

    #[test]
    fn unknown_keys_do_not_change_the_outcome(
        display in value(),
        extra in prop::collection::vec(("[a-z]{4,6}", value()), 0..4),
    ) {
        let checker = ObjectSchema::new()
            .field("display", is_string())
            .build()
            .unwrap();
        let base = Value::object([("display", display.clone())]);
        let mut members = vec![("display".to_owned(), display)];
        members.extend(extra.into_iter().filter(|(k, _)| k != "display"));
        let widened = Value::object(members);

        prop_assert_eq!(checker.validate(&base), checker.validate(&widened));
    }

    #[test]
    fn tuple_arity_mismatch_is_terminal(len in 0usize..6) {
        let checker = tuple![is_number(), is_number(), is_number()];
        let result = checker.validate(&Value::from(vec![0; len]));
        if len == 3 {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            prop_assert!(err.is_terminal());
            prop_assert_eq!(err.code(), Some("arity_mismatch"));
        }
    }
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validation_is_idempotent(v in value()) {
        let checker = list_checker(or![is_string(), is_number()]).optional();
        prop_assert_eq!(checker.validate(&v), checker.validate(&v));
    }
}
