//! # 命令执行模块
//!
//! 驱动一次完整调用：选择 bulk / each 模式、展开参数、顺序执行子进程。
//!
//! ## 执行约定
//! - bulk 模式只启动一次子进程
//! - each 模式严格按匹配顺序逐个执行，前一个结束后才启动下一个
//! - 首个失败立即中止，剩余匹配不再执行
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `batch/`, `models/`, `utils/`

use crate::batch::{build_bulk, build_each, Launcher, PatternExpander};
use crate::error::Result;
use crate::models::{GlobOptions, InvocationSpec, Mode};
use crate::utils::Logger;

/// 执行调用
pub fn run(
    spec: &InvocationSpec,
    options: &GlobOptions,
    launcher: &dyn Launcher,
    logger: &Logger,
) -> Result<()> {
    logger.silly(&format!("{} mode, glob options {}", spec.mode, options));

    let expander = PatternExpander::new(options, logger);

    match spec.mode {
        Mode::Bulk => {
            let args = build_bulk(&spec.arguments, &expander);
            launcher.run(&spec.command, &args)
        }
        Mode::Each => {
            let runs = build_each(&spec.arguments, &expander)?;
            let total = runs.len();
            for (i, args) in runs.iter().enumerate() {
                logger.verbose(&format!("Match {}/{}", i + 1, total));
                launcher.run(&spec.command, args)?;
            }
            Ok(())
        }
    }
}
