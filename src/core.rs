//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Case Runner:
//! text sanitization, test-case extraction, template writing and
//! the harness that runs a solution against the stored cases.
//!
//! 此模块包含 Case Runner 的核心功能：
//! 文本清理、测试用例提取、模板写入，
//! 以及针对已保存用例运行解答的执行器。

pub mod config;
pub mod error;
pub mod extract;
pub mod harness;
pub mod models;
pub mod sanitize;
pub mod template;

// Re-exports
pub use config::RunnerConfig;
pub use error::CoreError;
pub use harness::run_all;
pub use models::{Artifact, CaseOutcome, RunResult, TestCase};
