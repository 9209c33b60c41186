//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Case Runner,
//! including subprocess execution, problem-page fetching and the
//! working-directory layout.
//!
//! 此模块为 Case Runner 提供基础设施服务，
//! 包括子进程执行、题目页面抓取和工作目录布局。

pub mod command;
pub mod fetch;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
