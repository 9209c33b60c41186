//! # Reporting Module / 报告模块
//!
//! Console reporting for harness runs: per-case pass/fail lines, a final
//! summary table and detailed expected-versus-actual dumps for failures.
//!
//! 执行结果的控制台报告：单用例通过/失败行、最终汇总表格，
//! 以及失败用例的期望值与实际值详情。

pub mod console;

// Re-export common reporting functions
pub use console::{print_case_result, print_failure_details, print_summary};
