use keyscout_match::{CompareOptions, MatchError, RESULT_COLUMNS, Side, compare_frames};
use polars::df;
use polars::prelude::DataFrame;

/// Two small tables with one obvious key pair and one noise column each,
/// mirroring the kind of undocumented exports this tool is aimed at.
fn orders() -> DataFrame {
    df! {
        "order_id" => &[1i64, 1, 2, 3, 4, 5],
        "amount" => &[4i64, 5, 62, 7, 48, 9],
    }
    .unwrap()
}

fn customers() -> DataFrame {
    df! {
        "customer_id" => &[1i64, 2, 3, 4, 5, 5],
        "score" => &[4i64, 5, 6, 74, 8, 100],
    }
    .unwrap()
}

#[test]
fn ranks_the_key_pair_first() {
    let outcome = compare_frames(&orders(), &customers(), &CompareOptions::default()).unwrap();

    assert_eq!(outcome.candidates.len(), 4);
    assert!(outcome.warnings.is_empty());

    let best = &outcome.candidates[0];
    assert_eq!(best.left_column, "order_id");
    assert_eq!(best.right_column, "customer_id");
    assert_eq!(best.matched_count, 6);
    assert!((best.matched_percent - 1.0).abs() < f64::EPSILON);
    // order_id 5 matches both customer_id 5 rows, the rest match one row each
    assert_eq!(best.joined_rows, 7);
    assert!((best.fan_out.unwrap() - 7.0 / 6.0).abs() < 1e-12);
    assert_eq!(best.unmatched_count, 0);
    assert!((best.unmatched_percent - 0.0).abs() < f64::EPSILON);
}

#[test]
fn results_are_sorted_by_percent_then_fan_out() {
    let outcome = compare_frames(&orders(), &customers(), &CompareOptions::default()).unwrap();

    for pair in outcome.candidates.windows(2) {
        assert!(pair[0].matched_percent >= pair[1].matched_percent);
        if (pair[0].matched_percent - pair[1].matched_percent).abs() < f64::EPSILON {
            match (pair[0].fan_out, pair[1].fan_out) {
                (Some(a), Some(b)) => assert!(a <= b),
                // Undefined ratios sort after defined ones
                (None, Some(_)) => panic!("undefined fan-out ranked before a defined one"),
                _ => {}
            }
        }
    }

    // Among the three 1/3-percent pairs, the fan-out 1.5 pair comes last.
    let last = &outcome.candidates[3];
    assert_eq!(last.left_column, "amount");
    assert_eq!(last.right_column, "customer_id");
    assert!((last.fan_out.unwrap() - 1.5).abs() < 1e-12);
}

#[test]
fn unmatched_values_are_counted_per_row() {
    // amount holds 4 and 5 (present on the right) plus four absent values
    let outcome = compare_frames(
        &orders(),
        &customers(),
        &CompareOptions::default()
            .with_left_columns(vec!["amount".to_string()])
            .with_right_columns(vec!["customer_id".to_string()]),
    )
    .unwrap();

    assert_eq!(outcome.candidates.len(), 1);
    let candidate = &outcome.candidates[0];
    assert_eq!(candidate.matched_count, 2);
    assert_eq!(candidate.unmatched_count, 4);
    assert!((candidate.unmatched_percent - 4.0 / 6.0).abs() < 1e-12);
    assert_eq!(candidate.joined_rows, 3);
}

#[test]
fn misspelled_selection_entry_warns_and_continues() {
    let options = CompareOptions::default()
        .with_left_columns(vec!["order_id".to_string(), "order_idd".to_string()]);
    let outcome = compare_frames(&orders(), &customers(), &options).unwrap();

    // Only the valid name participates: 1 left column x 2 right columns
    assert_eq!(outcome.candidates.len(), 2);
    assert!(
        outcome
            .candidates
            .iter()
            .all(|candidate| candidate.left_column == "order_id")
    );

    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].side, Side::Left);
    assert_eq!(outcome.warnings[0].dropped, vec!["order_idd".to_string()]);
}

#[test]
fn warnings_cover_both_sides_left_first() {
    let options = CompareOptions::default()
        .with_left_columns(vec!["order_id".to_string(), "bogus".to_string()])
        .with_right_columns(vec!["customer_id".to_string(), "customer_id".to_string()]);
    let outcome = compare_frames(&orders(), &customers(), &options).unwrap();

    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.warnings.len(), 2);
    assert_eq!(outcome.warnings[0].side, Side::Left);
    assert_eq!(outcome.warnings[1].side, Side::Right);
    assert_eq!(
        outcome.warnings[1].dropped,
        vec!["customer_id".to_string()]
    );
}

#[test]
fn fully_unknown_selection_is_fatal() {
    let options = CompareOptions::default()
        .with_right_columns(vec!["nope".to_string(), "also_nope".to_string()]);
    let error = compare_frames(&orders(), &customers(), &options).unwrap_err();

    assert!(matches!(
        error,
        MatchError::EmptySelection { side: Side::Right }
    ));
}

#[test]
fn empty_selection_list_is_fatal_without_warning() {
    let options = CompareOptions::default().with_left_columns(Vec::new());
    let error = compare_frames(&orders(), &customers(), &options).unwrap_err();

    assert!(matches!(
        error,
        MatchError::EmptySelection { side: Side::Left }
    ));
}

#[test]
fn zero_row_input_is_fatal() {
    let empty = df! {
        "id" => Vec::<i64>::new(),
    }
    .unwrap();

    let error = compare_frames(&empty, &customers(), &CompareOptions::default()).unwrap_err();
    assert!(matches!(error, MatchError::EmptyInput { side: Side::Left }));

    let error = compare_frames(&orders(), &empty, &CompareOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        MatchError::EmptyInput { side: Side::Right }
    ));
}

#[test]
fn disjoint_columns_have_undefined_fan_out() {
    let left = df! {
        "a" => &[10i64, 20, 30],
    }
    .unwrap();
    let right = df! {
        "b" => &[1i64, 2, 3],
    }
    .unwrap();

    let outcome = compare_frames(&left, &right, &CompareOptions::default()).unwrap();
    let candidate = &outcome.candidates[0];
    assert_eq!(candidate.matched_count, 0);
    assert_eq!(candidate.joined_rows, 0);
    assert_eq!(candidate.fan_out, None);
    assert_eq!(candidate.unmatched_count, 3);
}

#[test]
fn integer_and_float_columns_match_through_canonical_keys() {
    let left = df! {
        "id" => &[1i64, 2, 3],
    }
    .unwrap();
    let right = df! {
        "ref" => &[1.0f64, 2.0, 4.5],
    }
    .unwrap();

    let outcome = compare_frames(&left, &right, &CompareOptions::default()).unwrap();
    let candidate = &outcome.candidates[0];
    assert_eq!(candidate.matched_count, 2);
    assert_eq!(candidate.joined_rows, 2);
}

#[test]
fn null_cells_never_match() {
    let left = df! {
        "id" => &[Some(1i64), None, Some(2)],
    }
    .unwrap();
    let right = df! {
        "ref" => &[Some(1i64), None, None],
    }
    .unwrap();

    let outcome = compare_frames(&left, &right, &CompareOptions::default()).unwrap();
    let candidate = &outcome.candidates[0];
    // Only the 1/1 pair matches; the nulls on both sides drop out entirely
    assert_eq!(candidate.matched_count, 1);
    assert_eq!(candidate.joined_rows, 1);
    assert_eq!(candidate.unmatched_count, 2);
}

#[test]
fn outcome_projects_into_the_fixed_frame_layout() {
    let outcome = compare_frames(&orders(), &customers(), &CompareOptions::default()).unwrap();
    let frame = outcome.to_frame().unwrap();

    assert_eq!(frame.height(), 4);
    let names: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, RESULT_COLUMNS.to_vec());
}

#[test]
fn inputs_are_not_mutated() {
    let left = orders();
    let right = customers();
    let left_before = left.clone();
    let right_before = right.clone();

    compare_frames(&left, &right, &CompareOptions::default()).unwrap();

    assert!(left.equals_missing(&left_before));
    assert!(right.equals_missing(&right_before));
}
