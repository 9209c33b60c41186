//! # Test Harness Module / 测试执行器模块
//!
//! Runs the active solution against every persisted test case: resolve the
//! artifact once, compile it when the language needs it, then execute it per
//! case with the stored input on stdin and diff the captured output against
//! the expectation.
//!
//! The flow is strictly linear. A compile failure aborts the whole run before
//! any case is attempted; a failure while running one case is isolated to
//! that case and the loop continues.
//!
//! 针对所有已保存的测试用例运行当前解答：一次性解析产物，
//! 需要时编译，然后逐用例执行，将保存的输入接到标准输入，
//! 并将捕获的输出与期望输出对比。流程严格线性：
//! 编译失败在任何用例执行前中止整个运行；
//! 单个用例的运行失败只影响该用例，循环继续。

use colored::*;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::core::config::RunnerConfig;
use crate::core::error::CoreError;
use crate::core::models::{Artifact, BINARY_NAME, CaseOutcome, RunResult};
use crate::infra::{command, fs as layout, t};
use crate::reporting::console::print_case_result;

/// Everything a harness run needs, passed explicitly instead of being read
/// from ambient process state: the working directory, the configuration and
/// a cancellation token the host shell may trip on Ctrl-C.
///
/// 一次执行所需的全部内容，显式传入而非读取进程级环境状态：
/// 工作目录、配置，以及宿主可在 Ctrl-C 时触发的取消令牌。
pub struct RunContext {
    pub root: PathBuf,
    pub config: RunnerConfig,
    pub cancel: CancellationToken,
}

impl RunContext {
    pub fn new(root: PathBuf, config: RunnerConfig) -> Self {
        Self {
            root,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// The directory holding the persisted `input<N>.txt` / `output<N>.txt`
    /// pairs.
    pub fn testcases_dir(&self) -> PathBuf {
        self.root.join(&self.config.testcases_dir)
    }
}

/// A ready-to-run solution: the program to spawn and its fixed arguments.
/// For compiled artifacts this is the freshly built executable; for
/// interpreted ones, the configured interpreter plus the source file.
struct Invocation {
    program: String,
    args: Vec<String>,
}

/// Runs the full harness: locate artifact, build if needed, then execute
/// every stored case in ascending index order. Returns one [`RunResult`] per
/// attempted case.
///
/// 运行完整执行流程：定位产物，按需构建，然后按编号升序执行
/// 每个已保存的用例。每个尝试过的用例返回一个 [`RunResult`]。
pub async fn run_all(ctx: &RunContext) -> Result<Vec<RunResult>, CoreError> {
    let artifact = Artifact::resolve(&ctx.root).ok_or_else(|| CoreError::NoArtifact {
        dir: ctx.root.clone(),
    })?;

    let case_dir = ctx.testcases_dir();
    if !case_dir.is_dir() {
        return Err(CoreError::MissingTestcases { dir: case_dir });
    }

    let invocation = prepare_invocation(&artifact, ctx).await?;
    let indices = layout::list_case_indices(&case_dir)?;

    let mut results = Vec::with_capacity(indices.len());
    for (position, index) in indices.iter().copied().enumerate() {
        if ctx.cancel.is_cancelled() {
            println!(
                "{}",
                t!("run_skipped_remaining", count = indices.len() - position).yellow()
            );
            break;
        }

        let result = run_case(&invocation, ctx, &case_dir, index).await;
        print_case_result(&result);
        results.push(result);
    }

    Ok(results)
}

/// Turns the resolved artifact into something spawnable. Compiled artifacts
/// are built here with the configured compiler command; a non-zero compiler
/// exit aborts the whole run with the captured log.
///
/// 将解析后的产物转换为可派生的调用。编译型产物在这里用配置的
/// 编译命令构建；编译器非零退出会携带日志中止整个运行。
async fn prepare_invocation(
    artifact: &Artifact,
    ctx: &RunContext,
) -> Result<Invocation, CoreError> {
    match artifact {
        Artifact::Compiled { source } => {
            let binary = ctx.root.join(BINARY_NAME);
            let src = source.to_string_lossy();
            let bin = binary.to_string_lossy();
            let parts = command::expand_and_split(
                &ctx.config.compile_command,
                &[("{src}", src.as_ref()), ("{bin}", bin.as_ref())],
            )?;

            println!(
                "{}",
                t!("run_compiling", path = source.display()).blue()
            );

            let mut cmd = tokio::process::Command::new(&parts[0]);
            cmd.args(&parts[1..])
                .kill_on_drop(true)
                .current_dir(&ctx.root);

            let compile_future = command::spawn_and_capture(cmd);
            let (status_res, log) = match ctx.config.timeout_secs {
                Some(secs) => tokio::time::timeout(Duration::from_secs(secs), compile_future)
                    .await
                    .map_err(|_| CoreError::Compile {
                        log: t!("case_timeout", secs = secs).to_string(),
                    })?,
                None => compile_future.await,
            };

            let status = status_res.map_err(CoreError::Io)?;
            if !status.success() {
                return Err(CoreError::Compile { log });
            }

            println!("{}", t!("run_compile_success").green());
            Ok(Invocation {
                program: bin.into_owned(),
                args: vec![],
            })
        }
        Artifact::Interpreted { source } => {
            let src = source.to_string_lossy();
            let parts =
                command::expand_and_split(&ctx.config.run_command, &[("{src}", src.as_ref())])?;
            Ok(Invocation {
                program: parts[0].clone(),
                args: parts[1..].to_vec(),
            })
        }
    }
}

async fn run_case(
    invocation: &Invocation,
    ctx: &RunContext,
    case_dir: &Path,
    index: u32,
) -> RunResult {
    let start = Instant::now();
    let outcome = execute_case(invocation, ctx, case_dir, index).await;
    RunResult {
        index,
        outcome,
        duration: start.elapsed(),
    }
}

/// Runs one case end to end. Every failure path returns
/// [`CaseOutcome::Error`] so the caller's loop can keep going.
///
/// 端到端运行一个用例。所有失败路径都返回 [`CaseOutcome::Error`]，
/// 调用方的循环得以继续。
async fn execute_case(
    invocation: &Invocation,
    ctx: &RunContext,
    case_dir: &Path,
    index: u32,
) -> CaseOutcome {
    let input_path = layout::input_path(case_dir, index);
    let stdin_file = match std::fs::File::open(&input_path) {
        Ok(file) => file,
        Err(e) => {
            return CaseOutcome::Error {
                message: format!("{}: {}", input_path.display(), e),
            };
        }
    };

    let mut cmd = tokio::process::Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::from(stdin_file))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .current_dir(&ctx.root);

    let output_future = cmd.output();
    let output = match ctx.config.timeout_secs {
        Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), output_future).await {
            Ok(res) => res,
            Err(_) => {
                return CaseOutcome::Error {
                    message: t!("case_timeout", secs = secs).to_string(),
                };
            }
        },
        None => output_future.await,
    };

    let output = match output {
        Ok(output) => output,
        Err(e) => {
            return CaseOutcome::Error {
                message: e.to_string(),
            };
        }
    };

    let actual = String::from_utf8_lossy(&output.stdout).into_owned();

    // The actual output file is overwritten on every run.
    // 实际输出文件每次运行都会被覆盖。
    if let Err(e) = std::fs::write(layout::actual_path(case_dir, index), &actual) {
        return CaseOutcome::Error {
            message: e.to_string(),
        };
    }

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut message =
            t!("case_exit_status", status = output.status.to_string()).to_string();
        if !stderr.trim().is_empty() {
            message.push_str(": ");
            message.push_str(stderr.trim());
        }
        return CaseOutcome::Error { message };
    }

    let expected = match layout::read_trimmed(&layout::expected_path(case_dir, index)) {
        Ok(expected) => expected,
        Err(e) => {
            return CaseOutcome::Error {
                message: format!(
                    "{}: {}",
                    layout::expected_path(case_dir, index).display(),
                    e
                ),
            };
        }
    };

    let actual = actual.trim_end().to_string();
    if expected == actual {
        CaseOutcome::Passed
    } else {
        CaseOutcome::Failed { expected, actual }
    }
}
