//! # Workspace Layout Unit Tests / 工作目录布局单元测试
//!
//! Tests for `infra::fs`: case persistence round trips, numeric index
//! enumeration order and manual-case index assignment.
//!
//! `infra::fs` 的测试：用例持久化往返、数字编号的枚举顺序
//! 和手动用例的编号分配。

use case_runner::core::models::TestCase;
use case_runner::infra::fs::{
    expected_path, input_path, list_case_indices, next_case_index, read_case, read_trimmed,
    write_case,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn case(index: u32, input: &str, output: &str) -> TestCase {
    TestCase {
        index,
        input: input.to_string(),
        expected_output: output.to_string(),
    }
}

fn write(dir: &Path, index: u32, input: &str, output: &str) {
    write_case(dir, &case(index, input, output)).unwrap();
}

#[test]
fn test_write_case_round_trip_is_trimmed_and_exact() {
    let dir = TempDir::new().unwrap();

    write(dir.path(), 1, "2 7 11 15\n9\n", "  0 1 \n");

    assert_eq!(
        fs::read_to_string(input_path(dir.path(), 1)).unwrap(),
        "2 7 11 15\n9"
    );
    assert_eq!(
        fs::read_to_string(expected_path(dir.path(), 1)).unwrap(),
        "0 1"
    );

    let restored = read_case(dir.path(), 1).unwrap();
    assert_eq!(restored.index, 1);
    assert_eq!(restored.input, "2 7 11 15\n9");
    assert_eq!(restored.expected_output, "0 1");
}

#[test]
fn test_write_case_creates_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("testcases");

    write(&nested, 3, "1", "2");

    assert!(nested.join("input3.txt").is_file());
    assert!(nested.join("output3.txt").is_file());
}

#[test]
fn test_indices_sorted_numerically_not_lexically() {
    let dir = TempDir::new().unwrap();
    // Created deliberately out of order; lexical order would give 1, 10, 2.
    for index in [10u32, 2, 1] {
        write(dir.path(), index, "in", "out");
    }

    assert_eq!(list_case_indices(dir.path()).unwrap(), vec![1, 2, 10]);
}

#[test]
fn test_unrelated_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), 1, "in", "out");
    fs::write(dir.path().join("output1_tested.txt"), "stale").unwrap();
    fs::write(dir.path().join("notes.txt"), "n").unwrap();
    fs::write(dir.path().join("inputX.txt"), "n").unwrap();

    assert_eq!(list_case_indices(dir.path()).unwrap(), vec![1]);
}

#[test]
fn test_next_case_index_on_missing_directory_is_one() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("testcases");

    assert_eq!(next_case_index(&missing).unwrap(), 1);
}

#[test]
fn test_next_case_index_counts_existing_inputs() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), 1, "a", "b");
    write(dir.path(), 2, "c", "d");

    assert_eq!(next_case_index(dir.path()).unwrap(), 3);
}

#[test]
fn test_read_trimmed_strips_trailing_whitespace_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "0 1\n\n").unwrap();

    assert_eq!(read_trimmed(&path).unwrap(), "0 1");
}
