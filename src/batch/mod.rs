//! # 展开与执行模块
//!
//! 提供参数展开和子进程执行能力。
//!
//! ## 功能
//! - 单个参数的 glob 展开
//! - bulk / each 两种参数构建方式
//! - 顺序执行子进程并映射退出状态
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 使用
//! - 使用 `glob` 进行文件匹配

pub mod builder;
pub mod expander;
pub mod runner;

pub use builder::{build_bulk, build_each};
pub use expander::PatternExpander;
pub use runner::{Launcher, ProcessRunner};
