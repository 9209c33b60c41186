//! Subcommand implementations. Each submodule is the thin host-shell layer for
//! one CLI verb; the actual work happens in `core` and `infra`.
//!
//! 子命令实现。每个子模块是某个 CLI 命令的宿主层；
//! 实际工作在 `core` 和 `infra` 中完成。

pub mod add;
pub mod fetch;
pub mod run;
