//! # Configuration Unit Tests / 配置单元测试
//!
//! Tests for `core::config`: defaults, partial overrides from
//! `CaseRunner.toml` and parse-error propagation.
//!
//! `core::config` 的测试：默认值、来自 `CaseRunner.toml` 的
//! 部分覆盖以及解析错误的传播。

use case_runner::core::config::{CONFIG_FILE, RunnerConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();

    let config = RunnerConfig::load(dir.path()).unwrap();

    assert_eq!(config.language, "en");
    assert_eq!(config.compile_command, "g++ {src} -o {bin}");
    assert_eq!(config.run_command, "python3 {src}");
    assert_eq!(config.testcases_dir, "testcases");
    assert_eq!(config.template_selector, "pre code");
    assert_eq!(config.timeout_secs, None);
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        "compile_command = \"clang++ {src} -O2 -o {bin}\"\ntimeout_secs = 5\n",
    )
    .unwrap();

    let config = RunnerConfig::load(dir.path()).unwrap();

    assert_eq!(config.compile_command, "clang++ {src} -O2 -o {bin}");
    assert_eq!(config.timeout_secs, Some(5));
    assert_eq!(config.testcases_dir, "testcases");
    assert_eq!(config.language, "en");
}

#[test]
fn test_invalid_toml_is_an_error_not_a_fallback() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "compile_command = [not toml").unwrap();

    assert!(RunnerConfig::load(dir.path()).is_err());
}
