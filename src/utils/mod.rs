//! # 工具函数模块
//!
//! 提供分级的终端诊断输出。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`commands/`、`batch/` 使用
//! - 子模块: output

pub mod output;

pub use output::Logger;
