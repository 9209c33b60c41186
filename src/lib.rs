//! # Case Runner Library / Case Runner 库
//!
//! This library provides the core functionality for the Case Runner tool,
//! a command-line helper for coding-practice problems. It fetches a problem
//! page, extracts the code template and the example test cases, and runs a
//! local solution against them.
//!
//! 此库为 Case Runner 工具提供核心功能，
//! 这是一个面向刷题练习的命令行助手。它抓取题目页面，
//! 提取代码模板和示例测试用例，并针对它们运行本地解答。
//!
//! ## Modules / 模块
//!
//! - `core` - Sanitizer, extractor, template writer and the test harness
//! - `infra` - Infrastructure services like subprocess execution, page fetching and workspace layout
//! - `reporting` - Per-case and summary result reporting
//! - `cli` - Command-line interface
//! - `commands` - The individual subcommand implementations
//!
//! - `core` - 文本清理器、用例提取器、模板写入器和测试执行器
//! - `infra` - 基础设施服务，如子进程执行、页面抓取和工作目录布局
//! - `reporting` - 单用例和汇总结果报告
//! - `cli` - 命令行接口
//! - `commands` - 各子命令的实现

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::harness;
pub use core::models;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
