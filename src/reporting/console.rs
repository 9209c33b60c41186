//! # Console Reporting Module / 控制台报告模块
//!
//! Colorful, formatted reporting for harness runs: one line per case as it
//! finishes, a summary table at the end, and expected-versus-actual dumps
//! for every case that did not pass.
//!
//! 执行过程的彩色格式化报告：每个用例完成时输出一行，
//! 结束时输出汇总表格，并为所有未通过的用例打印期望值与实际值。

use colored::*;

use crate::core::models::{CaseOutcome, RunResult};
use crate::infra::t;

/// Prints the one-line verdict for a just-finished case.
/// 打印刚完成用例的单行结论。
pub fn print_case_result(result: &RunResult) {
    match &result.outcome {
        CaseOutcome::Passed => {
            println!("{}", t!("case_passed", index = result.index).green());
        }
        CaseOutcome::Failed { .. } => {
            println!("{}", t!("case_failed", index = result.index).red());
        }
        CaseOutcome::Error { message } => {
            println!(
                "{}",
                t!("case_error", index = result.index, message = message).yellow()
            );
        }
    }
}

/// Prints a formatted summary of all results.
///
/// # Output Format / 输出格式
/// ```text
/// --- Run Summary ---
///   - Passed  | case 1  |     12.34ms
///   - Failed  | case 2  |      8.70ms
///   - Error   | case 3  |      1.02ms
/// ```
pub fn print_summary(results: &[RunResult]) {
    println!("\n{}", t!("run_summary_banner").bold());

    for result in results {
        let status_colored = match &result.outcome {
            CaseOutcome::Passed => result.status_str().green(),
            CaseOutcome::Failed { .. } => result.status_str().red(),
            CaseOutcome::Error { .. } => result.status_str().yellow(),
        };
        let duration_str = format!("{:.2?}", result.duration);

        println!(
            "  - {:<8} | {:<8} | {:>10}",
            status_colored,
            format!("case {}", result.index),
            duration_str
        );
    }
}

/// Prints detailed information for every case that did not pass: the
/// expected and actual outputs for mismatches, the error message for cases
/// that could not run. Returns early when everything passed.
///
/// 为所有未通过的用例打印详情：不匹配用例的期望与实际输出，
/// 无法运行用例的错误消息。全部通过时直接返回。
pub fn print_failure_details(results: &[RunResult]) {
    let failures: Vec<&RunResult> = results.iter().filter(|r| r.is_failure()).collect();
    if failures.is_empty() {
        return;
    }

    println!("\n{}", t!("failure_details_banner").red().bold());
    println!("{}", "-".repeat(60));

    for (i, result) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {}",
            i + 1,
            failures.len(),
            t!("failure_header", index = result.index).cyan()
        );

        match &result.outcome {
            CaseOutcome::Failed { expected, actual } => {
                println!("  {} {}", t!("case_expected").yellow(), expected);
                println!("  {} {}", t!("case_actual").yellow(), actual);
            }
            CaseOutcome::Error { message } => {
                println!("  {}", message);
            }
            CaseOutcome::Passed => {}
        }
        println!("{}", "-".repeat(60));
    }
}
