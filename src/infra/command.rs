//! Subprocess plumbing: turning configured command templates into argument
//! vectors and capturing the combined output of spawned processes.
//!
//! 子进程相关的基础设施：将配置的命令模板转换为参数向量，
//! 并捕获派生进程的合并输出。

use std::process::{ExitStatus, Stdio};
use tokio::io::AsyncReadExt;

use crate::core::error::CoreError;

/// Substitutes `{marker}` placeholders in a configured command template,
/// expands `~` and environment variables, and tokenizes the result
/// shell-style.
///
/// # Arguments
/// * `template` - The command template, e.g. `g++ {src} -o {bin}`.
/// * `replacements` - Placeholder/value pairs substituted before expansion.
///
/// 替换配置命令模板中的 `{marker}` 占位符，展开 `~` 和环境变量，
/// 并按 shell 规则分词。
pub fn expand_and_split(
    template: &str,
    replacements: &[(&str, &str)],
) -> Result<Vec<String>, CoreError> {
    let mut command = template.to_string();
    for (marker, value) in replacements {
        command = command.replace(marker, value);
    }

    let expanded = shellexpand::full(&command)
        .map_err(|_| CoreError::Command(command.clone()))?
        .to_string();

    let parts = shlex::split(&expanded).ok_or_else(|| CoreError::Command(expanded.clone()))?;
    if parts.is_empty() {
        return Err(CoreError::Command(expanded));
    }
    Ok(parts)
}

/// Spawns a command and captures its stdout and stderr into a single log
/// string (stdout first, then stderr).
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined output as a `String`.
///
/// 派生一个命令并将其 stdout 与 stderr 捕获为一个日志字符串
/// （先 stdout，后 stderr）。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<ExitStatus>, String) {
    let mut child = match cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).spawn() {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, return the error and an empty log.
            // 如果派生失败，返回错误和空日志。
            return (Err(e), String::new());
        }
    };

    let Some(mut stdout) = child.stdout.take() else {
        return (
            Err(std::io::Error::other("failed to capture stdout")),
            String::new(),
        );
    };
    let Some(mut stderr) = child.stderr.take() else {
        return (
            Err(std::io::Error::other("failed to capture stderr")),
            String::new(),
        );
    };

    // Drain both pipes before waiting so a full stderr buffer cannot stall
    // the child while we block on stdout.
    // 等待前先读空两个管道，避免 stderr 缓冲区写满时子进程卡住。
    let mut out = String::new();
    let mut err = String::new();
    let _ = tokio::join!(stdout.read_to_string(&mut out), stderr.read_to_string(&mut err));

    let status = child.wait().await;

    let mut log = out;
    log.push_str(&err);
    (status, log)
}
