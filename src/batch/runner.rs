//! # 进程执行器
//!
//! 启动目标命令并等待其结束。
//!
//! ## 功能
//! - 继承父进程的 stdin/stdout/stderr，不捕获子进程输出
//! - 非零退出码映射为 `SpawnError`，启动失败映射为 `SpawnFailed`
//! - Windows 下通过命令解释器启动，并逐字传递命令行
//!
//! 每次 `run` 只返回一次结果，调用方拿到结果时子进程已经结束。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `utils/output.rs` 输出命令行

use crate::error::{GlobRunError, Result};
use crate::utils::Logger;

use std::process::{Command, ExitStatus, Stdio};

/// 命令启动器
pub trait Launcher {
    /// 运行命令直到结束
    fn run(&self, command: &str, args: &[String]) -> Result<()>;
}

/// 基于操作系统子进程的启动器
pub struct ProcessRunner<'a> {
    logger: &'a Logger,
}

impl<'a> ProcessRunner<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }
}

impl Launcher for ProcessRunner<'_> {
    fn run(&self, command: &str, args: &[String]) -> Result<()> {
        self.logger.verbose(&format!(
            "Running: {}",
            format_command_line(command, args)
        ));

        let status = build_command(command, args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| GlobRunError::SpawnFailed {
                command: command.to_string(),
                source: e,
            })?;

        check_status(command, status)
    }
}

/// 将退出状态映射为结果
fn check_status(command: &str, status: ExitStatus) -> Result<()> {
    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(GlobRunError::SpawnError {
            command: command.to_string(),
            status: code,
        }),
        None => Err(GlobRunError::Terminated {
            command: command.to_string(),
        }),
    }
}

#[cfg(not(windows))]
fn build_command(command: &str, args: &[String]) -> Command {
    let mut cmd = Command::new(command);
    cmd.args(args);
    cmd
}

#[cfg(windows)]
fn build_command(command: &str, args: &[String]) -> Command {
    use std::os::windows::process::CommandExt;

    let shell = std::env::var("ComSpec").unwrap_or_else(|_| "cmd.exe".to_string());
    let mut cmd = Command::new(shell);
    cmd.args(["/d", "/s", "/c"])
        .raw_arg(windows_command_line(command, args));
    cmd
}

/// cmd.exe `/s /c` 下的命令行：整体加引号，命令本身也加引号
#[cfg(any(windows, test))]
fn windows_command_line(command: &str, args: &[String]) -> String {
    let mut line = format!("\"{}\"", command);
    for arg in args {
        line.push(' ');
        line.push_str(&quote_arg(arg));
    }
    format!("\"{}\"", line)
}

/// 用于日志显示的命令行
fn format_command_line(command: &str, args: &[String]) -> String {
    std::iter::once(command)
        .chain(args.iter().map(String::as_str))
        .map(quote_arg)
        .collect::<Vec<_>>()
        .join(" ")
}

/// cmd.exe 会解释的元字符
const CMD_METACHARS: &[char] = &['&', '|', '^', '(', ')', '<', '>'];

/// 含空白、cmd 元字符或为空的参数加双引号
fn quote_arg(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains(CMD_METACHARS) {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}
