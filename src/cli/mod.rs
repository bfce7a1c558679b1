//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数，并在启动时一次性校验为强类型配置。
//!
//! ## 参数结构
//! - `COMMAND [ARG...]`：目标命令及参数模板（建议以 `--` 与自身选项分隔）
//! - `--nodir` / `-i` / `-n` / `--dot`：glob 匹配选项
//! - `-e`：each 模式
//! - `-v`：诊断输出级别（可重复）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 构建 `models/` 中的 `InvocationSpec` 与 `GlobOptions`

use crate::error::{GlobRunError, Result};
use crate::models::{GlobOptions, InvocationSpec, Mode, Verbosity};

use clap::{ArgAction, Parser};

/// `--node` 追加的排除模式
pub const NODE_MODULES_IGNORE: &str = "**/node_modules/**";

/// globrun - 展开 glob 参数后执行命令
#[derive(Parser, Debug)]
#[command(name = "globrun")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Run a command with glob arguments expanded, including recursive '**' patterns", long_about = None)]
#[command(after_help = "Examples:\n  globrun -- prettier --write \"src/**/*.md\"\n  globrun -e -n -- eslint --fix \"**/*.js\"")]
pub struct Cli {
    /// Do not match directories
    #[arg(long, default_value_t = false)]
    pub nodir: bool,

    /// Exclude paths matching this glob (repeatable)
    #[arg(short, long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Exclude anything under node_modules
    #[arg(short, long, default_value_t = false)]
    pub node: bool,

    /// Let wildcards match files starting with '.'
    #[arg(long, default_value_t = false)]
    pub dot: bool,

    /// Run COMMAND once per match of the single glob argument
    #[arg(short, long, default_value_t = false)]
    pub each: bool,

    /// Increase diagnostic output (-v echoes commands, -vv dumps options and full errors)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run, followed by its arguments; glob patterns are expanded.
    /// Everything from COMMAND onward is passed to the command untouched
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// 诊断输出级别
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_occurrences(self.verbose)
    }

    /// 校验参数并构建调用描述与匹配选项
    pub fn into_invocation(self) -> Result<(InvocationSpec, GlobOptions)> {
        let verbosity = self.verbosity();

        let mut tokens = self.command.into_iter();
        let command = tokens.next().ok_or_else(|| {
            GlobRunError::Configuration("Missing required argument: COMMAND".to_string())
        })?;
        let arguments: Vec<String> = tokens.collect();

        let mut options = GlobOptions::new()
            .match_directories(!self.nodir)
            .match_dotfiles(self.dot);
        for pattern in &self.ignore {
            options = options.ignore(pattern)?;
        }
        if self.node {
            options = options.ignore(NODE_MODULES_IGNORE)?;
        }

        let mode = if self.each { Mode::Each } else { Mode::Bulk };
        let spec = InvocationSpec::new(command, arguments)
            .with_mode(mode)
            .with_verbosity(verbosity);

        Ok((spec, options))
    }
}
