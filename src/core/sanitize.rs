//! Text sanitizer for scraped page content.
//!
//! Pages mix non-breaking spaces, typographic quotes and stray control
//! characters into what should be plain text. `sanitize` maps all of that to
//! a canonical ASCII-friendly form before the code template is written.
//! Example blocks are not sanitized; the extractor consumes them raw.
//!
//! 抓取页面内容的文本清理器。
//! 页面文本会混入不间断空格、弯引号和零散控制字符；
//! `sanitize` 在写入代码模板之前将其规范化。
//! 示例块不经过清理，提取器直接消费原文。

/// Normalizes scraped text into a canonical string.
///
/// - Non-breaking spaces become ordinary spaces.
/// - Curly double and single quotation marks become their straight ASCII
///   equivalents.
/// - ASCII control characters (below 0x20, plus DEL) are removed. Note this
///   includes newlines and tabs: scraped segments are treated as one logical
///   line of text.
///
/// Total and pure: no error conditions, no I/O. Idempotent, so a second pass
/// is a no-op.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '\u{00A0}' => Some(' '),
            '\u{201C}' | '\u{201D}' => Some('"'),
            '\u{2018}' | '\u{2019}' => Some('\''),
            c if (c as u32) < 0x20 || c == '\u{7F}' => None,
            c => Some(c),
        })
        .collect()
}
