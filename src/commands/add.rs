// src/commands/add.rs

use anyhow::Result;
use colored::*;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

use crate::{
    core::{CoreError, config::RunnerConfig, models::TestCase},
    infra::{self, t},
};

/// Appends a manual test case. Input and expected output come from the
/// `--input`/`--output` flags when given, otherwise from interactive
/// prompts. Empty values abort before anything is written.
///
/// 追加一个手动测试用例。输入和期望输出优先取自 `--input`/`--output`
/// 参数，否则来自交互式提示。空值在写入任何文件前中止操作。
pub fn execute(dir: PathBuf, input: Option<String>, output: Option<String>) -> Result<()> {
    let config = RunnerConfig::load(&dir)?;
    rust_i18n::set_locale(&config.language);
    let theme = ColorfulTheme::default();

    let input = prompt_or_flag(input, &theme, &t!("add_input_prompt"))?;
    let output = prompt_or_flag(output, &theme, &t!("add_output_prompt"))?;

    if let Err(CoreError::Validation { field }) = validate(&input, &output) {
        match field {
            "input" => anyhow::bail!(t!("add_empty_input")),
            _ => anyhow::bail!(t!("add_empty_output")),
        }
    }

    let case_dir = dir.join(&config.testcases_dir);
    let case = TestCase {
        index: infra::fs::next_case_index(&case_dir)?,
        input,
        expected_output: output,
    };
    infra::fs::write_case(&case_dir, &case)?;

    println!("{}", t!("add_case_added", index = case.index).green());
    Ok(())
}

fn prompt_or_flag(
    value: Option<String>,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::with_theme(theme)
            .with_prompt(prompt.to_string())
            .allow_empty(true)
            .interact_text()?),
    }
}

/// Both fields must be non-empty after trimming; nothing is written when
/// either is not.
fn validate(input: &str, output: &str) -> Result<(), CoreError> {
    if input.trim().is_empty() {
        return Err(CoreError::Validation { field: "input" });
    }
    if output.trim().is_empty() {
        return Err(CoreError::Validation { field: "output" });
    }
    Ok(())
}
