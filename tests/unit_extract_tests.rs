//! # Extractor Unit Tests / 用例提取器单元测试
//!
//! Tests for `core::extract`: label-bounded slicing, the lossy numeric
//! cleaning filter, discard rules and block ordering.
//!
//! `core::extract` 的测试：按标签切片、有损的数字化清理过滤、
//! 丢弃规则和块顺序。

use case_runner::core::extract::{clean_segment, extract_cases};

#[test]
fn test_simple_numeric_pair() {
    let blocks = ["Input: 2 7 11 15 Output: 0 1".to_string()];
    let pairs = extract_cases(&blocks);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].input, "2 7 11 15");
    assert_eq!(pairs[0].output, "0 1");
}

#[test]
fn test_array_notation_reduced_to_numbers() {
    let blocks = ["Input: nums = [2,7,11,15], target = 9 Output: [0,1]".to_string()];
    let pairs = extract_cases(&blocks);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].input, "2 7 11 15 9");
    assert_eq!(pairs[0].output, "0 1");
}

#[test]
fn test_explanation_bounds_the_output_segment() {
    let blocks =
        ["Input: 1 2 Output: 3 Explanation: Because 1 + 2 equals 3 we return 3.".to_string()];
    let pairs = extract_cases(&blocks);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].output, "3");
}

#[test]
fn test_missing_explanation_marker_takes_whole_remainder() {
    // With no boundary marker the rest of the block is treated as output,
    // digits in trailing prose included.
    let blocks = ["Input: 1 2 Output: 3 the answer has 4 digits".to_string()];
    let pairs = extract_cases(&blocks);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].input, "1 2");
    assert_eq!(pairs[0].output, "3 4");
}

#[test]
fn test_block_without_input_label_yields_no_pair() {
    let blocks = ["Output: 0 1".to_string(), "just some prose 1 2 3".to_string()];
    assert!(extract_cases(&blocks).is_empty());
}

#[test]
fn test_block_without_output_label_yields_no_pair() {
    let blocks = ["Input: 2 7 11 15".to_string()];
    assert!(extract_cases(&blocks).is_empty());
}

#[test]
fn test_string_valued_example_is_discarded() {
    // Known precision limitation: letters and quotes are noise, so a
    // string-valued input cleans to nothing and the pair is dropped.
    let blocks = ["Input: \"abc\" Output: 3".to_string()];
    assert!(extract_cases(&blocks).is_empty());
}

#[test]
fn test_newline_between_digit_runs_becomes_a_separator() {
    // Blocks reach the extractor with their line structure intact; a line
    // break between two numbers must separate them, not merge them.
    let blocks = ["Input: 12\n34 Output: 5".to_string()];
    let pairs = extract_cases(&blocks);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].input, "12 34");
    assert_eq!(pairs[0].output, "5");
}

#[test]
fn test_block_order_is_preserved() {
    let blocks = [
        "Input: 1 Output: 10".to_string(),
        "Input: 2 Output: 20".to_string(),
        "Input: 3 Output: 30".to_string(),
    ];
    let pairs = extract_cases(&blocks);

    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].output, "10");
    assert_eq!(pairs[1].output, "20");
    assert_eq!(pairs[2].output, "30");
}

#[test]
fn test_lowercase_labels_are_not_recognized() {
    // Labels are literal and case-sensitive.
    let blocks = ["input: 1 2 output: 3".to_string()];
    assert!(extract_cases(&blocks).is_empty());
}

mod clean_segment_tests {
    use super::*;

    #[test]
    fn test_strips_noise_characters() {
        assert_eq!(clean_segment("nums = [2,7,11,15], target = 9"), "2 7 11 15 9");
        assert_eq!(clean_segment("x<=3; y->4 | z%5"), "3 4 5");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(clean_segment("  1   2 \n 3  "), "1 2 3");
    }

    #[test]
    fn test_pure_prose_cleans_to_empty() {
        assert_eq!(clean_segment("\"hello world\""), "");
        assert_eq!(clean_segment(""), "");
    }

    #[test]
    fn test_negative_numbers_lose_their_sign() {
        // The minus sign is in the noise class. Deliberate, inherited
        // behavior of the filter.
        assert_eq!(clean_segment("-1 -2 3"), "1 2 3");
    }
}
