//! End-to-end comparator behaviour on two differently-shaped records
//!
//! Covers binding errors, the null-pairing rule, sequence comparison and the
//! short-circuit once a comparator has gone invalid.

use pc_comparator::{CompareError, Comparator, Side};
use std::cell::Cell;

#[derive(Debug, Clone)]
struct Booking {
    x: i64,
    y: Option<String>,
    z: Option<Vec<i32>>,
}

#[derive(Debug, Clone)]
struct Receipt {
    x: i64,
    y: Option<String>,
    z: Option<Vec<i32>>,
}

fn matching_pair() -> (Booking, Receipt) {
    (
        Booking {
            x: 1,
            y: Some("t".to_string()),
            z: Some(vec![1, 2]),
        },
        Receipt {
            x: 1,
            y: Some("t".to_string()),
            z: Some(vec![1, 2]),
        },
    )
}

fn bound(booking: Booking, receipt: Receipt) -> Comparator<Booking, Receipt> {
    Comparator::<Booking, Receipt>::with_instances(booking, receipt).unwrap()
}

fn full_chain(comparator: &Comparator<Booking, Receipt>) -> bool {
    comparator
        .compare_present(|b| b.x, |r| r.x)
        .unwrap()
        .compare_equal(|b| b.y.clone(), |r| r.y.clone())
        .unwrap()
        .compare_equal_sequence(|b| b.z.clone(), |r| r.z.clone())
        .unwrap()
        .is_valid()
        .unwrap()
}

#[test]
fn test_all_fields_equal() {
    let (booking, receipt) = matching_pair();
    assert!(full_chain(&bound(booking, receipt)));
}

#[test]
fn test_first_field_differs() {
    let (booking, mut receipt) = matching_pair();
    receipt.x = 999;
    let comparator = bound(booking, receipt);

    comparator.compare_present(|b| b.x, |r| r.x).unwrap();
    assert!(!comparator.is_valid().unwrap());

    // The remaining checks match but cannot restore validity
    comparator
        .compare_equal(|b| b.y.clone(), |r| r.y.clone())
        .unwrap()
        .compare_equal_sequence(|b| b.z.clone(), |r| r.z.clone())
        .unwrap();
    assert!(!comparator.is_valid().unwrap());
}

#[test]
fn test_validity_readable_mid_chain() {
    let (booking, receipt) = matching_pair();
    let comparator = bound(booking, receipt);

    let mid = comparator
        .compare_present(|b| b.x, |r| r.x)
        .unwrap()
        .is_valid()
        .unwrap();
    assert!(mid);
    assert!(full_chain(&comparator));
}

#[test]
fn test_unbound_comparator_rejects_everything() {
    let comparator = Comparator::<Booking, Receipt>::new();

    assert!(matches!(
        comparator.is_valid(),
        Err(CompareError::UnboundInstance)
    ));
    assert!(matches!(
        comparator.compare_present(|b| b.x, |r| r.x),
        Err(CompareError::UnboundInstance)
    ));
    assert!(matches!(
        comparator.compare_equal_sequence(|b| b.z.clone(), |r| r.z.clone()),
        Err(CompareError::UnboundInstance)
    ));
}

#[test]
fn test_bind_absent_instance() {
    let (booking, receipt) = matching_pair();

    let err = Comparator::<Booking, Receipt>::with_instances(None, receipt.clone()).unwrap_err();
    assert!(matches!(err, CompareError::NullInstance { side: Side::First }));

    let mut comparator = Comparator::<Booking, Receipt>::new();
    let err = comparator.bind(booking, None).unwrap_err();
    assert!(matches!(err, CompareError::NullInstance { side: Side::Second }));
    assert!(matches!(
        comparator.is_valid(),
        Err(CompareError::UnboundInstance)
    ));
}

#[test]
fn test_one_value_absent_is_unequal() {
    let (booking, mut receipt) = matching_pair();
    receipt.y = None;
    let comparator = bound(booking, receipt);

    comparator
        .compare_equal(|b| b.y.clone(), |r| r.y.clone())
        .unwrap();
    assert!(!comparator.is_valid().unwrap());

    // Equal values afterwards do not bring it back
    comparator.compare_present(|b| b.x, |r| r.x).unwrap();
    assert!(!comparator.is_valid().unwrap());
}

#[test]
fn test_both_values_absent_leaves_validity() {
    let (mut booking, mut receipt) = matching_pair();
    booking.y = None;
    receipt.y = None;
    let comparator = bound(booking, receipt);

    comparator
        .compare_equal(|b| b.y.as_deref(), |r| r.y.as_deref())
        .unwrap();
    assert!(comparator.is_valid().unwrap());
}

#[test]
fn test_both_values_absent_on_invalid_stays_invalid() {
    let (mut booking, mut receipt) = matching_pair();
    booking.y = None;
    receipt.y = None;
    receipt.x = 2;
    let comparator = bound(booking, receipt);

    comparator
        .compare_present(|b| b.x, |r| r.x)
        .unwrap()
        .compare_equal(|b| b.y.clone(), |r| r.y.clone())
        .unwrap();
    assert!(!comparator.is_valid().unwrap());
}

#[test]
fn test_sequence_cases() {
    let cases: [(Vec<i32>, Vec<i32>, bool); 4] = [
        (vec![1, 2, 3], vec![1, 2, 3], true),
        (vec![1, 2, 3], vec![1, 2], false),
        (vec![1, 2, 3], vec![1, 9, 3], false),
        (vec![], vec![], true),
    ];

    for (left, right, expected) in cases {
        let comparator = Comparator::<Vec<i32>, Vec<i32>>::with_instances(left.clone(), right.clone())
            .unwrap();
        comparator
            .compare_present_sequence(|l| l.iter(), |r| r.iter())
            .unwrap();
        assert_eq!(
            comparator.is_valid().unwrap(),
            expected,
            "{:?} vs {:?}",
            left,
            right
        );
    }
}

#[test]
fn test_sequence_one_absent() {
    let (booking, mut receipt) = matching_pair();
    receipt.z = None;
    let comparator = bound(booking, receipt);

    comparator
        .compare_equal_sequence(|b| b.z.as_ref(), |r| r.z.as_ref())
        .unwrap();
    assert!(!comparator.is_valid().unwrap());
}

#[test]
fn test_sequence_both_absent() {
    let (mut booking, mut receipt) = matching_pair();
    booking.z = None;
    receipt.z = None;
    let comparator = bound(booking, receipt);

    comparator
        .compare_equal_sequence(|b| b.z.as_ref(), |r| r.z.as_ref())
        .unwrap();
    assert!(comparator.is_valid().unwrap());
}

#[test]
fn test_sequence_accepts_lazy_iterators() {
    let (booking, receipt) = matching_pair();
    let comparator = bound(booking, receipt);

    comparator
        .compare_equal_sequence(
            |b| b.z.as_ref().map(|z| z.iter().map(|v| v * 10)),
            |r| r.z.as_ref().map(|z| z.iter().map(|v| v * 10)),
        )
        .unwrap();
    assert!(comparator.is_valid().unwrap());
}

#[test]
fn test_invalid_comparator_skips_selectors() {
    let (booking, mut receipt) = matching_pair();
    receipt.x = 5;
    let comparator = bound(booking, receipt);
    comparator.compare_present(|b| b.x, |r| r.x).unwrap();

    let calls = Cell::new(0);
    comparator
        .compare_present(
            |_| -> i64 {
                calls.set(calls.get() + 1);
                panic!("selector must not run on an invalid comparator")
            },
            |r| r.x,
        )
        .unwrap()
        .compare_present_sequence(
            |_| -> Vec<i32> { panic!("selector must not run on an invalid comparator") },
            |r| r.z.clone().unwrap_or_default(),
        )
        .unwrap();

    assert_eq!(calls.get(), 0);
    assert!(!comparator.is_valid().unwrap());
}

#[test]
fn test_absent_selector() {
    let (booking, receipt) = matching_pair();
    let comparator = bound(booking, receipt);

    let err = comparator
        .compare_selected(
            None::<fn(&Booking) -> Result<Option<i64>, CompareError>>,
            Some(|r: &Receipt| Ok::<_, CompareError>(Some(r.x))),
        )
        .unwrap_err();
    assert!(matches!(err, CompareError::NullSelector { side: Side::First }));

    let err = comparator
        .compare_selected_sequence(
            Some(|b: &Booking| Ok::<_, CompareError>(b.z.clone())),
            None::<fn(&Receipt) -> Result<Option<Vec<i32>>, CompareError>>,
        )
        .unwrap_err();
    assert!(matches!(err, CompareError::NullSelector { side: Side::Second }));

    // Precondition failures never touch the flag
    assert!(comparator.is_valid().unwrap());
}

#[test]
fn test_absent_selector_reported_on_invalid_comparator() {
    let (booking, mut receipt) = matching_pair();
    receipt.x = 5;
    let comparator = bound(booking, receipt);
    comparator.compare_present(|b| b.x, |r| r.x).unwrap();

    let err = comparator
        .compare_selected(
            Some(|b: &Booking| Ok::<_, CompareError>(Some(b.x))),
            None::<fn(&Receipt) -> Result<Option<i64>, CompareError>>,
        )
        .unwrap_err();
    assert!(matches!(err, CompareError::NullSelector { side: Side::Second }));
}

#[test]
fn test_failing_selector_is_distinct() {
    let (booking, receipt) = matching_pair();
    let comparator = bound(booking, receipt);

    let err = comparator
        .compare_selected(
            Some(|b: &Booking| Ok::<_, anyhow::Error>(Some(b.x))),
            Some(|_: &Receipt| -> anyhow::Result<Option<i64>> {
                Err(anyhow::anyhow!("receipt lookup failed"))
            }),
        )
        .unwrap_err();

    match err {
        CompareError::SelectorEvaluation { side, source } => {
            assert_eq!(side, Side::Second);
            assert_eq!(source.to_string(), "receipt lookup failed");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(comparator.is_valid().unwrap());
}

#[test]
fn test_failing_first_selector_skips_second() {
    let (booking, receipt) = matching_pair();
    let comparator = bound(booking, receipt);

    let err = comparator
        .compare_selected_sequence(
            Some(|_: &Booking| -> anyhow::Result<Option<Vec<i32>>> {
                Err(anyhow::anyhow!("booking unreadable"))
            }),
            Some(|_: &Receipt| -> anyhow::Result<Option<Vec<i32>>> {
                panic!("second selector must not run after the first failed")
            }),
        )
        .unwrap_err();
    assert_eq!(err.side(), Some(Side::First));
}

#[test]
fn test_rebind_starts_over() {
    let (booking, mut receipt) = matching_pair();
    receipt.x = 2;
    let mut comparator = bound(booking, receipt);
    assert!(!full_chain(&comparator));

    let (booking, receipt) = matching_pair();
    comparator.bind(booking, receipt).unwrap();
    assert!(full_chain(&comparator));
}
