//! # 数据模型模块
//!
//! 定义单次调用的强类型配置：要执行的命令和 glob 匹配选项。
//!
//! ## 依赖关系
//! - 由 `cli/` 构建，被 `batch/` 和 `commands/` 只读使用
//! - 子模块: invocation, glob_options

pub mod glob_options;
pub mod invocation;

pub use glob_options::GlobOptions;
pub use invocation::{InvocationSpec, Mode, Verbosity};
