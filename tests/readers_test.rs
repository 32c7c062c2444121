use camino::Utf8PathBuf;
use rusqlite::Connection;
use tempfile::TempDir;
use unitraj::trajectories::raw_source::RawTableSource;
use unitraj::{Delimiter, RawTrajectoryTable, UnifyError};

fn temp_file(dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_read_whitespace_delimited_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(
        &dir,
        "run_01.txt",
        "id frame x y\n1 0 0.50 1.25\n1 1 0.55 1.30\n2 0 3.00 4.00\n",
    );

    let raw = RawTrajectoryTable::new_from_text(&path, Delimiter::Whitespace).unwrap();
    assert_eq!((raw.nrows(), raw.ncols()), (3, 4));
    assert_eq!(raw[(0, 2)], 0.50);
    assert_eq!(raw[(2, 3)], 4.00);
}

#[test]
fn test_read_char_delimited_file_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "run_02.csv", "id;x;y\n1;0.5;1.5\n\n2;2.5;3.5\n");

    let raw = RawTrajectoryTable::new_from_text(&path, Delimiter::Char(';')).unwrap();
    assert_eq!((raw.nrows(), raw.ncols()), (2, 3));
    assert_eq!(raw[(1, 0)], 2.0);
    assert_eq!(raw[(1, 2)], 3.5);
}

#[test]
fn test_ragged_row_is_rejected_with_line_number() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "ragged.txt", "id x y\n1 0.5 1.5\n2 2.5\n");

    let result = RawTrajectoryTable::new_from_text(&path, Delimiter::Whitespace);
    assert!(matches!(
        result,
        Err(UnifyError::RaggedRow {
            line: 3,
            expected: 3,
            found: 2,
            ..
        })
    ));
}

#[test]
fn test_empty_cell_is_rejected_not_shifted() {
    // A missing cell between two separators must fail the row, never be
    // dropped so that the remaining values slide into the wrong columns.
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "missing_cell.csv", "id;x;y\n1;;2.0\n");

    let result = RawTrajectoryTable::new_from_text(&path, Delimiter::Char(';'));
    match result {
        Err(UnifyError::NonNumericCell { line, token, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "");
        }
        other => panic!("expected NonNumericCell, got {other:?}"),
    }
}

#[test]
fn test_non_numeric_cell_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "bad_cell.txt", "id x y\n1 0.5 oops\n");

    let result = RawTrajectoryTable::new_from_text(&path, Delimiter::Whitespace);
    match result {
        Err(UnifyError::NonNumericCell { line, token, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "oops");
        }
        other => panic!("expected NonNumericCell, got {other:?}"),
    }
}

#[test]
fn test_header_only_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "empty.txt", "id x y\n");

    let result = RawTrajectoryTable::new_from_text(&path, Delimiter::Whitespace);
    assert!(matches!(result, Err(UnifyError::EmptySource { .. })));
}

fn capture_database(dir: &TempDir, name: &str, rows: &[(i64, i64, f64, f64)]) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap();
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE trajectory_data (
            frame INTEGER NOT NULL,
            id INTEGER NOT NULL,
            pos_x REAL NOT NULL,
            pos_y REAL NOT NULL,
            ori_x REAL NOT NULL,
            ori_y REAL NOT NULL
        );",
    )
    .unwrap();
    for (frame, id, x, y) in rows {
        conn.execute(
            "INSERT INTO trajectory_data VALUES (?1, ?2, ?3, ?4, 0.0, 1.0)",
            rusqlite::params![frame, id, x, y],
        )
        .unwrap();
    }
    path
}

#[test]
fn test_read_sqlite_capture() {
    let dir = TempDir::new().unwrap();
    let path = capture_database(
        &dir,
        "capture.sqlite",
        &[(0, 1, 0.5, 1.5), (1, 1, 0.6, 1.6), (0, 2, 3.5, 4.5)],
    );

    let raw = RawTrajectoryTable::new_from_sqlite(&path).unwrap();
    assert_eq!((raw.nrows(), raw.ncols()), (3, 6));
    // Projection order: frame, id, pos_x, pos_y, ori_x, ori_y.
    assert_eq!(raw[(1, 0)], 1.0);
    assert_eq!(raw[(1, 1)], 1.0);
    assert_eq!(raw[(2, 2)], 3.5);
    assert_eq!(raw[(0, 5)], 1.0);
}

#[test]
fn test_sqlite_without_capture_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("bare.sqlite")).unwrap();
    Connection::open(&path)
        .unwrap()
        .execute_batch("CREATE TABLE unrelated (a INTEGER);")
        .unwrap();

    let result = RawTrajectoryTable::new_from_sqlite(&path);
    assert!(matches!(result, Err(UnifyError::RelationalSource { .. })));
}

#[test]
fn test_empty_capture_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = capture_database(&dir, "empty.sqlite", &[]);

    let result = RawTrajectoryTable::new_from_sqlite(&path);
    assert!(matches!(result, Err(UnifyError::EmptySource { .. })));
}

#[test]
fn test_extension_dispatch_picks_the_right_adapter() {
    let dir = TempDir::new().unwrap();

    let sqlite_path = capture_database(&dir, "run.sqlite", &[(0, 1, 0.5, 1.5)]);
    let raw = RawTrajectoryTable::new_from_path(&sqlite_path, Delimiter::Whitespace).unwrap();
    assert_eq!(raw.ncols(), 6);

    let text_path = temp_file(&dir, "run.txt", "id x y\n1 0.5 1.5\n");
    let raw = RawTrajectoryTable::new_from_path(&text_path, Delimiter::Whitespace).unwrap();
    assert_eq!(raw.ncols(), 3);
}
