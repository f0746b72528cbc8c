use super::reference::{canonical, exhaustive_combinations};
use super::*;
use proptest::prelude::*;

const SAMPLE: [i64; 8] = [8, 91, 9, 10, 1, 99, 1, 103];

#[test]
fn sample_finds_all_five_in_discovery_order() {
    let found = find_combinations(100, &SAMPLE).unwrap();
    assert_eq!(
        found,
        vec![
            vec![1, 2],
            vec![4, 5],
            vec![5, 6],
            vec![0, 1, 4],
            vec![0, 1, 6]
        ]
    );
    for c in &found {
        assert_eq!(combination_values(&SAMPLE, c).iter().sum::<i64>(), 100);
    }
}

#[test]
fn equal_values_are_distinguished_by_index() {
    let found = find_combinations(2, &[1, 1, 1, 1]).unwrap();
    assert_eq!(
        canonical(found),
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3]
        ]
    );
}

#[test]
fn no_subset_reaches_target() {
    assert!(find_combinations(4, &[3, 5, 7]).unwrap().is_empty());
    assert!(find_combinations(10, &[]).unwrap().is_empty());
}

#[test]
fn elements_above_target_are_inert() {
    let found = find_combinations(100, &[150, 40, 60, 101]).unwrap();
    assert_eq!(found, vec![vec![1, 2]]);
}

#[test]
fn single_element_equal_to_target() {
    let found = find_combinations(5, &[5, 3, 2]).unwrap();
    assert_eq!(found, vec![vec![0], vec![1, 2]]);
}

#[test]
fn target_zero_follows_policy() {
    // Default: a combination selects at least one element.
    assert!(find_combinations(0, &[1, 2, 3]).unwrap().is_empty());
    assert!(find_combinations(0, &[]).unwrap().is_empty());

    let cfg = FinderCfg {
        zero_target: ZeroTarget::EmptyCombination,
        ..FinderCfg::default()
    };
    let res = find_combinations_with(0, &[1, 2, 3], cfg).unwrap();
    assert_eq!(res.combinations, vec![Vec::<usize>::new()]);
    assert!(!res.truncated);

    let capped = FinderCfg {
        max_combinations: Some(0),
        ..cfg
    };
    let res = find_combinations_with(0, &[1, 2, 3], capped).unwrap();
    assert!(res.combinations.is_empty());
    assert!(res.truncated);
}

#[test]
fn rejects_negative_target_and_non_positive_elements() {
    assert_eq!(
        find_combinations(-1, &[1, 2]),
        Err(FinderError::NegativeTarget { target: -1 })
    );
    assert_eq!(
        find_combinations(3, &[1, 0, -3]),
        Err(FinderError::NonPositiveElement { index: 1, value: 0 })
    );
    assert_eq!(
        find_combinations(3, &[1, 2, -3]),
        Err(FinderError::NonPositiveElement {
            index: 2,
            value: -3
        })
    );
    let msg = FinderError::NonPositiveElement { index: 2, value: -3 }.to_string();
    assert!(msg.contains("element 2"));
}

#[test]
fn large_values_do_not_overflow() {
    let found = find_combinations(i64::MAX, &[i64::MAX, 1, i64::MAX - 1]).unwrap();
    assert_eq!(found, vec![vec![0], vec![1, 2]]);
}

#[test]
fn cap_truncates_in_discovery_order() {
    let cfg = FinderCfg {
        max_combinations: Some(2),
        ..FinderCfg::default()
    };
    let res = find_combinations_with(100, &SAMPLE, cfg).unwrap();
    assert_eq!(res.combinations, vec![vec![1, 2], vec![4, 5]]);
    assert!(res.truncated);

    // A cap equal to the full count is not a truncation.
    let exact = FinderCfg {
        max_combinations: Some(5),
        ..FinderCfg::default()
    };
    let res = find_combinations_with(100, &SAMPLE, exact).unwrap();
    assert_eq!(res.combinations.len(), 5);
    assert!(!res.truncated);
}

#[test]
fn repeated_calls_are_identical() {
    let a = find_combinations(100, &SAMPLE).unwrap();
    let b = find_combinations(100, &SAMPLE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn marks_never_reuse_the_current_element() {
    // 5 + 5 would need index 0 twice.
    let marks = Marks::build(10, &[5]);
    assert_eq!(marks.points().collect::<Vec<_>>(), vec![5]);
    assert!(!marks.is_reachable(10));
}

#[test]
fn marks_record_direct_predecessors() {
    let marks = Marks::build(10, &[3, 4, 5]);
    assert_eq!(marks.target(), 10);
    assert_eq!(marks.points().collect::<Vec<_>>(), vec![3, 4, 5, 7, 8, 9]);
    assert_eq!(marks.indices_at(7), Some(&[1][..]));
    assert_eq!(marks.indices_at(8), Some(&[2][..]));
    assert_eq!(marks.indices_at(9), Some(&[2][..]));
    // 3 + 4 + 5 = 12 lies beyond the stick.
    assert_eq!(marks.len(), 6);
    assert!(marks.indices_at(12).is_none());
}

#[test]
fn marks_at_a_point_are_ascending() {
    let marks = Marks::build(2, &[1, 1, 1, 1]);
    assert_eq!(marks.indices_at(1), Some(&[0, 1, 2, 3][..]));
    assert_eq!(marks.indices_at(2), Some(&[1, 2, 3][..]));
    assert!(Marks::build(2, &[]).is_empty());
}

#[test]
fn enumerate_reports_missing_marks() {
    // Hand-built inconsistent input: marks from one sequence, values from another.
    let marks = Marks::build(10, &[4, 6]);
    let res = enumerate(&marks, &[4, 5], FinderCfg::default());
    assert_eq!(res, Err(FinderError::MissingMark { point: 5 }));
}

#[test]
fn exhaustive_reference_guards_length() {
    assert!(exhaustive_combinations(1, &[1; 21]).is_none());
    assert_eq!(
        exhaustive_combinations(3, &[1, 2, 3]),
        Some(vec![vec![2], vec![0, 1]])
    );
}

proptest! {
    #[test]
    fn matches_exhaustive_enumeration(
        elements in prop::collection::vec(1i64..=12, 0..=10),
        target in 0i64..=40,
    ) {
        let found = find_combinations(target, &elements).unwrap();
        for c in &found {
            prop_assert!(c.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(combination_values(&elements, c).iter().sum::<i64>(), target);
        }
        let expected = exhaustive_combinations(target, &elements).unwrap();
        prop_assert_eq!(canonical(found), expected);
    }

    #[test]
    fn reachability_matches_subset_sums(
        elements in prop::collection::vec(1i64..=9, 0..=8),
        target in 1i64..=30,
    ) {
        let (t, values) = validate(target, &elements).unwrap();
        let marks = Marks::build(t, &values);
        for p in 1..=target {
            let reachable = !exhaustive_combinations(p, &elements).unwrap().is_empty();
            prop_assert_eq!(marks.is_reachable(p as u64), reachable);
        }
    }
}
