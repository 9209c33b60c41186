//! Error taxonomy for the extraction and verification core.
//!
//! Commands wrap these in `anyhow` at the boundary; inside the core the
//! variants stay distinguishable so one bad test case never masks the rest.
//!
//! 提取与验证核心的错误分类。
//! 命令层在边界处用 `anyhow` 包装；核心内部各变体保持可区分，
//! 以保证单个坏用例不会掩盖其它用例的结果。

use std::path::PathBuf;
use thiserror::Error;

/// Failures the core can surface to the host shell.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The problem page could not be downloaded or read.
    /// 无法下载或读取题目页面。
    #[error("failed to fetch problem page: {0}")]
    Fetch(String),

    /// The external compiler exited with a non-zero status.
    /// The captured compiler log is kept verbatim for display.
    /// 外部编译器以非零状态退出。保留编译日志原文用于展示。
    #[error("compilation failed")]
    Compile { log: String },

    /// Neither the compiled-language nor the interpreted-language source file
    /// exists in the working directory.
    /// 工作目录中既没有编译型也没有解释型源文件。
    #[error("no solution file found in {}", dir.display())]
    NoArtifact { dir: PathBuf },

    /// The test-case directory does not exist yet.
    /// 测试用例目录尚不存在。
    #[error("test case directory not found: {}", dir.display())]
    MissingTestcases { dir: PathBuf },

    /// A configured command line could not be expanded or tokenized.
    /// 配置的命令行无法展开或分词。
    #[error("could not parse command: {0}")]
    Command(String),

    /// A manually supplied test-case field was empty after trimming.
    /// 手动提供的测试用例字段在去除空白后为空。
    #[error("empty {field} for manual test case")]
    Validation { field: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
