//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the runner:
//! the solution languages and fixed file names, the extracted and persisted
//! test cases, the resolved solution artifact, and per-case run results.
//!
//! 此模块定义整个运行器使用的核心数据结构：
//! 解答语言和固定文件名、提取与持久化的测试用例、
//! 解析后的解答产物，以及单用例的运行结果。

use crate::infra::t;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Fixed name of the compiled-language source file in the working directory.
/// 工作目录中编译型源文件的固定名称。
pub const CPP_SOURCE: &str = "code.cpp";
/// Fixed name of the interpreted-language source file in the working directory.
/// 工作目录中解释型源文件的固定名称。
pub const PY_SOURCE: &str = "code.py";

/// Fixed name of the compiled executable produced by the harness.
#[cfg(windows)]
pub const BINARY_NAME: &str = "code.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "code";

/// The solution languages the template writer and harness understand.
/// 模板写入器和执行器支持的解答语言。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Compiled with an external compiler before running.
    /// 运行前由外部编译器编译。
    Cpp,
    /// Run directly through an interpreter.
    /// 直接通过解释器运行。
    Python,
}

impl Language {
    /// The fixed source file name for this language.
    pub fn source_file(&self) -> &'static str {
        match self {
            Language::Cpp => CPP_SOURCE,
            Language::Python => PY_SOURCE,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "cxx" => Ok(Language::Cpp),
            "python" | "py" => Ok(Language::Python),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Cpp => write!(f, "C++"),
            Language::Python => write!(f, "Python"),
        }
    }
}

/// An (input, expected output) pair as produced by the extractor, before an
/// index is assigned at write time. Both sides are guaranteed non-empty.
///
/// 提取器产出的（输入、期望输出）对，写入时才分配编号。
/// 两侧均保证非空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePair {
    pub input: String,
    pub output: String,
}

/// A persisted test case: a 1-based index plus the trimmed input and expected
/// output read back from `input<N>.txt` / `output<N>.txt`.
/// Never mutated after creation; only superseded or deleted externally.
///
/// 已持久化的测试用例：1 起始的编号，加上从 `input<N>.txt` / `output<N>.txt`
/// 读回的输入和期望输出。创建后不再修改，只会被覆盖或在外部删除。
#[derive(Debug, Clone)]
pub struct TestCase {
    pub index: u32,
    pub input: String,
    pub expected_output: String,
}

/// The active solution, resolved once at harness start.
///
/// Whichever of the two fixed file names exists wins, compiled first. This
/// replaces re-checking the file system ad hoc at every step.
///
/// 当前生效的解答，在执行器启动时一次性解析。
/// 两个固定文件名中存在者生效，编译型优先。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// A source file that must be compiled before it can run.
    Compiled { source: PathBuf },
    /// A source file handed to an interpreter as-is.
    Interpreted { source: PathBuf },
}

impl Artifact {
    /// Resolves the active artifact in `root`, checking the compiled-language
    /// source first, then the interpreted one.
    ///
    /// 在 `root` 中解析当前生效的产物，先查编译型源文件，再查解释型。
    pub fn resolve(root: &Path) -> Option<Artifact> {
        let cpp = root.join(CPP_SOURCE);
        if cpp.is_file() {
            return Some(Artifact::Compiled { source: cpp });
        }
        let py = root.join(PY_SOURCE);
        if py.is_file() {
            return Some(Artifact::Interpreted { source: py });
        }
        None
    }

    /// The path of the underlying source file.
    pub fn source(&self) -> &Path {
        match self {
            Artifact::Compiled { source } => source,
            Artifact::Interpreted { source } => source,
        }
    }
}

/// The outcome of running the solution against a single test case.
/// 针对单个测试用例运行解答的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Trimmed actual output matched the trimmed expected output exactly.
    Passed,
    /// The solution ran but its output differed from the expectation.
    /// Both sides are kept for display.
    Failed { expected: String, actual: String },
    /// The solution could not be run for this case (spawn failure, non-zero
    /// exit, timeout, missing expected-output file). Isolated to this case;
    /// the run continues.
    /// 该用例的解答无法运行（派生失败、非零退出、超时、期望输出文件缺失）。
    /// 仅影响本用例，运行会继续。
    Error { message: String },
}

/// The result of one test case within a harness run. Derived and transient:
/// recomputed every run, retained only for the report.
///
/// 一次执行中单个测试用例的结果。派生且短暂：每次运行重新计算，
/// 仅用于报告。
#[derive(Debug, Clone)]
pub struct RunResult {
    pub index: u32,
    pub outcome: CaseOutcome,
    pub duration: Duration,
}

impl RunResult {
    pub fn is_passed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Passed)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_passed()
    }

    /// Gets the status of the result as a localized string for display.
    /// 以本地化字符串形式获取结果状态以供显示。
    pub fn status_str(&self) -> String {
        match &self.outcome {
            CaseOutcome::Passed => t!("status_passed").to_string(),
            CaseOutcome::Failed { .. } => t!("status_failed").to_string(),
            CaseOutcome::Error { .. } => t!("status_error").to_string(),
        }
    }
}
