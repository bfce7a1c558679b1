//! # globrun - 展开 glob 参数后执行命令
//!
//! 调用方的 shell 不展开（或不支持递归 `**`）的 glob 参数，由本工具展开后
//! 交给目标命令：bulk 模式执行一次，each 模式每个匹配执行一次。
//!
//! ## 退出码
//! - `0`：成功，或 `--help` / `--version`
//! - 子进程的非零退出码原样返回
//! - `1`：其他错误（参数错误、each 多 glob、命令无法启动）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义与校验)
//!   ├── commands/   (执行流程编排)
//!   │     └── batch/     (展开与子进程执行)
//!   ├── models/     (调用描述与匹配选项)
//!   ├── utils/      (分级诊断输出)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use batch::ProcessRunner;
use clap::{CommandFactory, Parser};
use cli::Cli;
use error::GlobRunError;
use models::Verbosity;
use utils::Logger;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let logger = Logger::new(Verbosity::Info);
            fail(&GlobRunError::Configuration(clap_message(&e)), &logger);
        }
    };

    let verbosity = cli.verbosity();
    let (spec, options) = match cli.into_invocation() {
        Ok(invocation) => invocation,
        Err(e) => fail(&e, &Logger::new(verbosity)),
    };

    let logger = Logger::new(spec.verbosity);
    let runner = ProcessRunner::new(&logger);

    if let Err(e) = commands::run(&spec, &options, &runner, &logger) {
        fail(&e, &logger);
    }
}

/// 报告错误并以对应退出码结束进程
fn fail(err: &GlobRunError, logger: &Logger) -> ! {
    // 子进程非零退出是预期结果，只传递退出码
    if !matches!(err, GlobRunError::SpawnError { .. }) {
        logger.report(err);
        if err.is_configuration() {
            logger.info(&Cli::command().render_usage().to_string());
            logger.info("Run 'globrun --help' for more information.");
        }
    }
    std::process::exit(err.exit_code());
}

/// clap 错误的首行，去掉 `error: ` 前缀
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}
