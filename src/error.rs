//! # 统一错误处理模块
//!
//! 定义 globrun 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 配置错误：缺少命令、each 模式下多个 glob、非法 ignore 模式
//! - `SpawnError`：子进程启动成功但以非零状态退出
//! - 启动失败：子进程无法启动，或被信号终止（无退出码）
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// globrun 统一错误类型
#[derive(Error, Debug)]
pub enum GlobRunError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Configuration(String),

    #[error("each cannot accept multiple globs: {}", patterns.join(", "))]
    MultipleGlobs { patterns: Vec<String> },

    #[error("Invalid ignore pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 子进程错误
    // ─────────────────────────────────────────────────────────────
    #[error("Command '{command}' exited with status {status}")]
    SpawnError { command: String, status: i32 },

    #[error("Failed to start command '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' was terminated by a signal")]
    Terminated { command: String },
}

impl GlobRunError {
    /// 该错误对应的进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            GlobRunError::SpawnError { status, .. } => *status,
            _ => 1,
        }
    }

    /// 是否属于用户输入错误（需要提示查看 --help）
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GlobRunError::Configuration(_)
                | GlobRunError::MultipleGlobs { .. }
                | GlobRunError::InvalidPattern { .. }
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GlobRunError>;
