//! Runner configuration, loaded from an optional `CaseRunner.toml` in the
//! working directory. Every field has a default so the file can be absent.
//!
//! 运行器配置，从工作目录中可选的 `CaseRunner.toml` 加载。
//! 所有字段都有默认值，配置文件可以不存在。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::infra::t;

/// File name of the optional configuration file.
pub const CONFIG_FILE: &str = "CaseRunner.toml";

/// Configuration for fetching and running, passed explicitly into the core
/// instead of being read from ambient process state.
/// 抓取与运行的配置，显式传入核心，而不是从进程级环境状态读取。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// Command used to compile the compiled-language source. `{src}` and
    /// `{bin}` are replaced with the source and executable paths; the result
    /// is `~`/env expanded and tokenized shell-style.
    /// 用于编译编译型源文件的命令。`{src}` 和 `{bin}` 会被替换为
    /// 源文件和可执行文件路径；结果按 shell 规则展开并分词。
    #[serde(default = "default_compile_command")]
    pub compile_command: String,

    /// Command used to run the interpreted-language source. `{src}` is
    /// replaced with the source path.
    /// 用于运行解释型源文件的命令。`{src}` 会被替换为源文件路径。
    #[serde(default = "default_run_command")]
    pub run_command: String,

    /// Subdirectory holding `input<N>.txt` / `output<N>.txt` pairs.
    /// 存放 `input<N>.txt` / `output<N>.txt` 的子目录。
    #[serde(default = "default_testcases_dir")]
    pub testcases_dir: String,

    /// CSS selector for the code template on the problem page.
    /// 题目页面上代码模板的 CSS 选择器。
    #[serde(default = "default_template_selector")]
    pub template_selector: String,

    /// Optional per-case (and per-compile) timeout in seconds. Off by
    /// default: without it a hung solution blocks the run, matching the
    /// historical behavior of the tool.
    /// 可选的单用例（及编译）超时秒数。默认关闭：
    /// 不设置时挂起的解答会阻塞整个运行，与工具的历史行为一致。
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_compile_command() -> String {
    "g++ {src} -o {bin}".to_string()
}

fn default_run_command() -> String {
    "python3 {src}".to_string()
}

fn default_testcases_dir() -> String {
    "testcases".to_string()
}

fn default_template_selector() -> String {
    "pre code".to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            compile_command: default_compile_command(),
            run_command: default_run_command(),
            testcases_dir: default_testcases_dir(),
            template_selector: default_template_selector(),
            timeout_secs: None,
        }
    }
}

impl RunnerConfig {
    /// Loads the configuration from `dir/CaseRunner.toml`, falling back to
    /// the defaults when the file does not exist. A file that exists but does
    /// not parse is an error, not a silent fallback.
    ///
    /// 从 `dir/CaseRunner.toml` 加载配置，文件不存在时使用默认值。
    /// 文件存在但无法解析时报错，而不是静默回退。
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| t!("config_read_failed", path = path.display()))?;
        let config: RunnerConfig = toml::from_str(&content)
            .with_context(|| t!("config_parse_failed", path = path.display()))?;
        Ok(config)
    }
}
