//! Laws shared by `Maybe`, `Outcome`, and the conversions between them

use sundry_types::{Fault, Maybe, Outcome, maybe_to_outcome, outcome_to_maybe};

fn samples() -> Vec<i64> {
    vec![0, 1, -1, 42, i64::MAX, i64::MIN]
}

#[test]
fn present_unwraps_to_its_value() {
    for v in samples() {
        assert_eq!(Maybe::present(v).unwrap(), v);
    }
    assert!(!Maybe::<i64>::absent().is_present());
}

#[test]
fn maybe_is_exactly_one_state() {
    let cases = [Maybe::present(0), Maybe::present(5), Maybe::absent()];
    for maybe in cases {
        assert_ne!(maybe.is_present(), maybe.is_absent());
    }
}

#[test]
fn outcome_is_exactly_one_state() {
    let cases = [
        Outcome::success(1),
        Outcome::success(0),
        Outcome::failure("broken"),
        Outcome::failure(""),
    ];
    for outcome in cases {
        assert_ne!(outcome.is_success(), outcome.is_failure());
    }
}

#[test]
fn present_round_trips_through_outcome() {
    for v in samples() {
        let back = outcome_to_maybe(maybe_to_outcome(Maybe::present(v), "unused"));
        assert_eq!(back.unwrap(), v);
    }
}

#[test]
fn absent_round_trips_to_absent() {
    for fault in ["missing", "", "   "] {
        let back = outcome_to_maybe(maybe_to_outcome(Maybe::<i64>::absent(), fault));
        assert!(back.is_absent());
    }
}

#[test]
fn outcome_to_maybe_drops_the_fault() {
    let original = Outcome::<i64>::failure("first cause");
    let rebuilt = maybe_to_outcome(outcome_to_maybe(original), "second cause");

    let fault = rebuilt.fault().expect("still a failure");
    assert_eq!(fault.message(), "second cause");
    assert_ne!(fault.message(), "first cause");
}

#[test]
fn blank_causes_never_leave_a_failure_unexplained() {
    let outcome = maybe_to_outcome(Maybe::<i64>::absent(), "");
    let fault = outcome.fault().expect("failure");
    assert!(fault.is_unspecified());
    assert_eq!(fault.to_string(), "None value");

    let inferred = Outcome::inferred(0_i64, Some(Fault::new(" ")));
    assert_eq!(inferred.fault(), Some(&Fault::unspecified()));
}

#[test]
fn interop_with_std() {
    let parsed: Outcome<i64> = "12".parse::<i64>().into();
    assert_eq!(parsed.unwrap(), 12);

    let bad: Outcome<i64> = "x".parse::<i64>().into();
    let err = bad.into_result().unwrap_err();
    assert!(err.message().contains("invalid digit"));

    let maybe: Maybe<&str> = Some("v").into();
    assert_eq!(maybe.into_option(), Some("v"));
}

#[test]
fn default_fallbacks() {
    assert_eq!(Maybe::<i64>::absent().unwrap_or_default(), 0);
    assert_eq!(Outcome::<String>::failure("x").unwrap_or_default(), "");
    assert_eq!(Maybe::<i64>::absent().destructure(), (0, false));

    let (value, fault) = Outcome::<i64>::failure("gone").destructure();
    assert_eq!(value, 0);
    assert_eq!(fault.map(Fault::into_message).as_deref(), Some("gone"));
}
