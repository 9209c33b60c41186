//! Problem-page loading and block selection.
//!
//! The page is fetched over HTTP (or read from a saved HTML file for sites
//! that only render through a browser) and reduced to the raw text the core
//! cares about: one string per `<pre>` example block, plus the code template
//! text behind a configurable CSS selector. No further DOM work happens here.
//!
//! 题目页面的加载与文本块选择。页面通过 HTTP 抓取
//! （或从保存的 HTML 文件读取，用于只能在浏览器中渲染的站点），
//! 并化简为核心所需的原始文本：每个 `<pre>` 示例块一个字符串，
//! 以及可配置 CSS 选择器对应的代码模板文本。

use scraper::{Html, Selector};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::error::CoreError;

/// Where the problem page comes from.
/// 题目页面的来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    Url(String),
    File(PathBuf),
}

impl PageSource {
    /// Treats anything with an http(s) scheme as a URL, everything else as a
    /// local file path.
    pub fn parse(arg: &str) -> PageSource {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            PageSource::Url(arg.to_string())
        } else {
            PageSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for PageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSource::Url(url) => write!(f, "{}", url),
            PageSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads the raw HTML of the problem page. Network or page failures abort
/// the fetch operation only, surfaced as [`CoreError::Fetch`].
///
/// 加载题目页面的原始 HTML。网络或页面错误只中止本次抓取，
/// 以 [`CoreError::Fetch`] 形式上报。
pub async fn load_page(source: &PageSource) -> Result<String, CoreError> {
    match source {
        PageSource::Url(url) => {
            let response = reqwest::get(url)
                .await
                .map_err(|e| CoreError::Fetch(e.to_string()))?
                .error_for_status()
                .map_err(|e| CoreError::Fetch(e.to_string()))?;
            response
                .text()
                .await
                .map_err(|e| CoreError::Fetch(e.to_string()))
        }
        PageSource::File(path) => fs::read_to_string(path)
            .map_err(|e| CoreError::Fetch(format!("{}: {}", path.display(), e))),
    }
}

/// Collects the text of every `<pre>` element on the page, in document
/// order. These are the raw blocks handed to the extractor.
pub fn example_blocks(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("pre").expect("pre selector");
    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}

/// Returns the text of the first element matching the configured template
/// selector, or `None` when the page carries no recognizable template.
///
/// 返回匹配模板选择器的第一个元素的文本；
/// 页面没有可识别模板时返回 `None`。
pub fn code_template(html: &str, selector: &str) -> Result<Option<String>, CoreError> {
    let parsed = Selector::parse(selector)
        .map_err(|e| CoreError::Fetch(format!("invalid template selector '{selector}': {e}")))?;
    let document = Html::parse_document(html);
    Ok(document
        .select(&parsed)
        .next()
        .map(|element| element.text().collect::<String>()))
}
