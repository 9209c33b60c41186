//! # Test-Case Extractor / 测试用例提取器
//!
//! Turns loosely structured example blocks ("Input: ... Output: ...
//! Explanation: ...") into discrete (input, output) pairs.
//!
//! The cleaning step is deliberately lossy: letters, punctuation and operator
//! symbols are all treated as prose noise, so only digits and whitespace
//! survive. That is exactly right for array/number problems and silently
//! yields an empty segment for string- or object-valued examples, in which
//! case the pair is discarded. This precision trade-off is part of the
//! contract, not an accident.
//!
//! 将松散结构的示例块（"Input: ... Output: ... Explanation: ..."）
//! 转换为离散的（输入、输出）对。清理步骤刻意有损：
//! 字母、标点和运算符都按噪声处理，只保留数字和空白。
//! 对字符串或对象类型的示例会得到空段并丢弃该对，这是约定的一部分。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::CasePair;

const INPUT_LABEL: &str = "Input:";
const OUTPUT_LABEL: &str = "Output:";
const EXPLANATION_LABEL: &str = "Explanation:";

/// Characters treated as noise inside a labeled segment. Everything not in
/// this class (in practice: digits and whitespace) is kept.
static NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[=+\-*/a-zA-Z!@#$%^&()_{}\[\]:;'"<>?,.~`\\|]"#).expect("NOISE character class")
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN"));

/// Extracts (input, output) pairs from a sequence of raw example blocks.
/// Pairs are unindexed at this stage; indices are assigned at write time.
/// Blocks from which either side cleans to an empty string yield no pair.
///
/// 从一组原始示例块中提取（输入、输出）对。此阶段不分配编号；
/// 编号在写入时分配。任一侧清理后为空的块不产生用例。
pub fn extract_cases<S: AsRef<str>>(blocks: &[S]) -> Vec<CasePair> {
    blocks
        .iter()
        .filter_map(|block| extract_block(block.as_ref()))
        .collect()
}

fn extract_block(block: &str) -> Option<CasePair> {
    let text = block.trim();
    let input = clean_segment(input_segment(text));
    let output = clean_segment(output_segment(text));

    if input.is_empty() || output.is_empty() {
        return None;
    }
    Some(CasePair { input, output })
}

/// The raw text following the first `Input:` label, up to (but excluding) the
/// next `Output:` label or the end of the block. No label means an empty
/// segment, which discards the pair downstream.
fn input_segment(text: &str) -> &str {
    let Some(start) = text.find(INPUT_LABEL) else {
        return "";
    };
    let rest = &text[start + INPUT_LABEL.len()..];
    match rest.find(OUTPUT_LABEL) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// The raw text following the first `Output:` label, up to the next
/// `Explanation:` marker. The boundary marker is literal text and
/// case-sensitive; when it is absent the whole remainder of the block counts
/// as output.
fn output_segment(text: &str) -> &str {
    let Some(start) = text.find(OUTPUT_LABEL) else {
        return "";
    };
    let rest = &text[start + OUTPUT_LABEL.len()..];
    match rest.find(EXPLANATION_LABEL) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Replaces every noise character with a space, collapses whitespace runs to
/// a single space and trims the ends.
///
/// 将所有噪声字符替换为空格，把连续空白压缩为单个空格并去除首尾空白。
pub fn clean_segment(segment: &str) -> String {
    let without_noise = NOISE.replace_all(segment, " ");
    WHITESPACE_RUN
        .replace_all(&without_noise, " ")
        .trim()
        .to_string()
}
