use nalgebra::dmatrix;
use unitraj::unification::format::Unify;
use unitraj::{normalize, CanonicalTrajectoryTable, ColumnSelector, UnifyError};

fn assert_rows(canonical: &CanonicalTrajectoryTable, expected: &[[f64; 5]]) {
    assert_eq!(canonical.nrows(), expected.len());
    for (row, expected_row) in expected.iter().enumerate() {
        for (col, expected_value) in expected_row.iter().enumerate() {
            assert_eq!(
                canonical[(row, col)],
                *expected_value,
                "mismatch at row {row}, column {col}"
            );
        }
    }
}

#[test]
fn test_three_row_scenario_with_stable_tie_break() {
    // Two rows share the (id, x) sort key (1, 0); the stable Pass-1 sort
    // keeps their input order, so y = 5 receives frame 0 and y = 3 frame 1.
    let raw = dmatrix![
        1.0, 0.0, 5.0;
        1.0, 0.0, 3.0;
        2.0, 0.0, 9.0;
    ];
    let columns = ColumnSelector::new(Some(0), None, Some(1), Some(2), None).unwrap();

    let canonical = normalize(&raw, &columns).unwrap();
    assert_rows(
        &canonical,
        &[
            [1.0, 0.0, 0.0, 5.0, 0.0],
            [1.0, 1.0, 0.0, 3.0, 0.0],
            [2.0, 0.0, 0.0, 9.0, 0.0],
        ],
    );
}

#[test]
fn test_row_count_and_column_order_preserved() {
    let raw = dmatrix![
        3.0, 7.0, 1.1, 2.2;
        1.0, 5.0, 0.5, 0.6;
        2.0, 6.0, 9.9, 8.8;
        1.0, 4.0, 0.7, 0.8;
        3.0, 2.0, 1.0, 1.0;
    ];
    let columns = ColumnSelector::new(Some(0), Some(1), Some(2), Some(3), None).unwrap();

    let canonical = raw.unify(&columns).unwrap();
    assert_eq!(canonical.nrows(), raw.nrows());
    assert_eq!(canonical.ncols(), 5);

    // id 1 appears twice, frames sorted ascending regardless of x order.
    assert_rows(
        &canonical,
        &[
            [1.0, 4.0, 0.7, 0.8, 0.0],
            [1.0, 5.0, 0.5, 0.6, 0.0],
            [2.0, 6.0, 9.9, 8.8, 0.0],
            [3.0, 2.0, 1.0, 1.0, 0.0],
            [3.0, 7.0, 1.1, 2.2, 0.0],
        ],
    );
}

#[test]
fn test_adjacent_row_sort_invariant() {
    let raw = dmatrix![
        4.0, 9.0, 3.0, 0.0;
        2.0, 1.0, 7.0, 0.0;
        4.0, 2.0, 1.0, 0.0;
        2.0, 8.0, 2.0, 0.0;
        1.0, 3.0, 5.0, 0.0;
        4.0, 2.0, 9.0, 0.0;
    ];
    let columns = ColumnSelector::new(Some(0), Some(1), Some(2), Some(3), None).unwrap();
    let canonical = normalize(&raw, &columns).unwrap();

    for row in 1..canonical.nrows() {
        let (prev_id, prev_frame) = (canonical[(row - 1, 0)], canonical[(row - 1, 1)]);
        let (id, frame) = (canonical[(row, 0)], canonical[(row, 1)]);
        assert!(
            prev_id < id || (prev_id == id && prev_frame <= frame),
            "rows {row} and {} violate the (id, frame) ordering",
            row - 1
        );
    }
}

#[test]
fn test_frame_synthesis_is_dense_per_pedestrian() {
    let raw = dmatrix![
        7.0, 3.0, 0.0;
        5.0, 1.0, 0.0;
        7.0, 1.0, 0.0;
        5.0, 2.0, 0.0;
        7.0, 2.0, 0.0;
    ];
    let columns = ColumnSelector::new(Some(0), None, Some(1), Some(2), None).unwrap();
    let canonical = normalize(&raw, &columns).unwrap();

    for (id, group_size) in [(5.0, 2), (7.0, 3)] {
        let mut frames: Vec<f64> = (0..canonical.nrows())
            .filter(|&row| canonical[(row, 0)] == id)
            .map(|row| canonical[(row, 1)])
            .collect();
        frames.sort_by(f64::total_cmp);
        let expected: Vec<f64> = (0..group_size).map(|k| k as f64).collect();
        assert_eq!(frames, expected, "frames of pedestrian {id} are not dense");
    }
}

#[test]
fn test_idempotence_on_canonical_input() {
    let raw = dmatrix![
        1.0, 0.0, 2.5, 3.5, 0.1;
        1.0, 1.0, 2.6, 3.6, 0.2;
        2.0, 0.0, 4.5, 5.5, 0.3;
        2.0, 1.0, 4.4, 5.4, 0.4;
    ];
    let columns = ColumnSelector::new(Some(0), Some(1), Some(2), Some(3), Some(4)).unwrap();

    let canonical = normalize(&raw, &columns).unwrap();
    assert_rows(
        &canonical,
        &[
            [1.0, 0.0, 2.5, 3.5, 0.1],
            [1.0, 1.0, 2.6, 3.6, 0.2],
            [2.0, 0.0, 4.5, 5.5, 0.3],
            [2.0, 1.0, 4.4, 5.4, 0.4],
        ],
    );
}

#[test]
fn test_frame_and_z_are_independent_when_both_present() {
    // The frame column must come through verbatim even when a z column is
    // also selected; neither synthesis may clobber the other.
    let raw = dmatrix![
        1.0, 10.0, 0.3, 0.4, 9.5;
        1.0, 12.0, 0.1, 0.2, 9.7;
    ];
    let columns = ColumnSelector::new(Some(0), Some(1), Some(2), Some(3), Some(4)).unwrap();
    let canonical = normalize(&raw, &columns).unwrap();

    assert_rows(
        &canonical,
        &[
            [1.0, 10.0, 0.3, 0.4, 9.5],
            [1.0, 12.0, 0.1, 0.2, 9.7],
        ],
    );
}

#[test]
fn test_synthesized_z_with_real_frames() {
    let raw = dmatrix![
        2.0, 1.0, 0.5, 0.6;
        2.0, 0.0, 0.7, 0.8;
    ];
    let columns = ColumnSelector::new(Some(0), Some(1), Some(2), Some(3), None).unwrap();
    let canonical = normalize(&raw, &columns).unwrap();

    assert_rows(
        &canonical,
        &[
            [2.0, 0.0, 0.7, 0.8, 0.0],
            [2.0, 1.0, 0.5, 0.6, 0.0],
        ],
    );
}

#[test]
fn test_missing_mandatory_column_fails_before_any_io() {
    let result = ColumnSelector::new(None, Some(1), Some(2), Some(3), None);
    assert!(matches!(result, Err(UnifyError::MissingColumn("id"))));
}
