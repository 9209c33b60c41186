// src/commands/fetch.rs

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{
    core::{
        config::RunnerConfig,
        extract,
        models::{Language, TestCase},
        sanitize::sanitize,
        template,
    },
    infra::{self, fetch, t},
};

/// Fetches a problem page, extracts template and test cases, and persists
/// both into the working directory.
///
/// 抓取题目页面，提取模板和测试用例，并保存到工作目录。
pub async fn execute(source: String, language: String, dir: PathBuf) -> Result<()> {
    let language = Language::from_str(&language)
        .map_err(|value| anyhow::anyhow!(t!("fetch_invalid_language", value = value)))?;

    let config = RunnerConfig::load(&dir)?;
    rust_i18n::set_locale(&config.language);

    let source = fetch::PageSource::parse(&source);
    println!("{}", t!("fetch_loading", source = source).blue());

    let html = fetch::load_page(&source).await?;

    // Example blocks go to the extractor raw: its whitespace collapsing
    // treats newlines and non-breaking spaces as separators. Only the
    // template text below is sanitized.
    // 示例块原样交给提取器：其空白压缩将换行和不间断空格视为分隔符。
    // 只有下方的模板文本会被清理。
    let blocks = fetch::example_blocks(&html);
    let pairs = extract::extract_cases(&blocks);

    if pairs.is_empty() {
        println!("{}", t!("fetch_no_cases").yellow());
    } else {
        let case_dir = dir.join(&config.testcases_dir);
        let count = pairs.len();
        for (i, pair) in pairs.into_iter().enumerate() {
            let case = TestCase {
                index: (i + 1) as u32,
                input: pair.input,
                expected_output: pair.output,
            };
            infra::fs::write_case(&case_dir, &case)?;
        }
        println!(
            "{}",
            t!("fetch_cases_saved", count = count, path = case_dir.display()).green()
        );
    }

    match fetch::code_template(&html, &config.template_selector)? {
        Some(raw) => {
            let path = template::write_template(language, &sanitize(&raw), &dir)?;
            println!(
                "{}",
                t!(
                    "fetch_template_written",
                    language = language.to_string(),
                    path = path.display()
                )
                .green()
            );
        }
        None => println!("{}", t!("fetch_no_template").yellow()),
    }

    Ok(())
}
