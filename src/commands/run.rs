// src/commands/run.rs

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::PathBuf;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{CoreError, config::RunnerConfig, harness::RunContext, run_all},
    infra::t,
    reporting::{print_failure_details, print_summary},
};

/// Runs the stored test cases against the active solution and reports the
/// results. `timeout` overrides the configured per-case timeout when given.
///
/// 针对当前解答运行已保存的测试用例并报告结果。
/// 提供 `timeout` 时覆盖配置中的单用例超时。
pub async fn execute(dir: PathBuf, timeout: Option<u64>) -> Result<()> {
    let mut config = RunnerConfig::load(&dir)?;
    rust_i18n::set_locale(&config.language);
    if timeout.is_some() {
        config.timeout_secs = timeout;
    }

    let root = fs::canonicalize(&dir)
        .with_context(|| t!("workdir_not_found", path = dir.display()))?;
    println!("{}", t!("run_workdir", path = root.display()).cyan());

    let ctx = RunContext::new(root, config);
    setup_signal_handler(&ctx)?;

    let results = match run_all(&ctx).await {
        Ok(results) => results,
        // The two expected "nothing to do" states get a remediation hint
        // instead of a bare error.
        // 两种可预期的"无事可做"状态给出修复提示，而不是裸错误。
        Err(CoreError::NoArtifact { .. }) => {
            anyhow::bail!(t!("run_no_artifact"));
        }
        Err(CoreError::MissingTestcases { .. }) => {
            anyhow::bail!(t!("run_no_testcases"));
        }
        Err(CoreError::Compile { log }) => {
            if !log.trim().is_empty() {
                eprintln!("{}", log.trim());
            }
            anyhow::bail!(t!("run_compile_failed"));
        }
        Err(e) => return Err(e.into()),
    };

    print_summary(&results);
    print_failure_details(&results);
    println!("\n{}", t!("run_complete").bold());

    if results.iter().any(|r| r.is_failure()) {
        anyhow::bail!(t!("run_failures_present"));
    }
    println!("{}", t!("run_all_passed").green().bold());
    Ok(())
}

/// Installs a Ctrl-C handler that trips the run's cancellation token; the
/// harness finishes the current case and skips the rest.
///
/// 安装 Ctrl-C 处理器触发取消令牌；执行器完成当前用例后跳过其余用例。
fn setup_signal_handler(ctx: &RunContext) -> Result<()> {
    let token: CancellationToken = ctx.cancel.clone();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            println!("\n{}", t!("run_cancelled").yellow());
            token.cancel();
        }
    });

    Ok(())
}
