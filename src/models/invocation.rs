//! # 调用描述数据模型
//!
//! 描述一次 globrun 调用：目标命令、参数模板、执行模式和日志级别。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 构建
//! - 被 `commands/mod.rs` 使用

use std::fmt;

/// 执行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 展开全部参数后只执行一次命令
    #[default]
    Bulk,
    /// 每个匹配执行一次命令
    Each,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Bulk => write!(f, "bulk"),
            Mode::Each => write!(f, "each"),
        }
    }
}

/// 诊断输出级别
///
/// 只影响输出内容，不影响控制流程。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Info,
    Verbose,
    Silly,
}

impl Verbosity {
    /// 根据 `-v` 出现次数确定级别，超过两次按 Silly 处理
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Verbosity::Info,
            1 => Verbosity::Verbose,
            _ => Verbosity::Silly,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Info => write!(f, "info"),
            Verbosity::Verbose => write!(f, "verbose"),
            Verbosity::Silly => write!(f, "silly"),
        }
    }
}

/// 单次调用描述，构建后只读
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    /// 目标命令
    pub command: String,

    /// 参数模板（可能包含 glob 模式）
    pub arguments: Vec<String>,

    /// 执行模式
    pub mode: Mode,

    /// 诊断输出级别
    pub verbosity: Verbosity,
}

impl InvocationSpec {
    pub fn new(command: impl Into<String>, arguments: Vec<String>) -> Self {
        InvocationSpec {
            command: command.into(),
            arguments,
            mode: Mode::default(),
            verbosity: Verbosity::default(),
        }
    }

    /// 设置执行模式
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// 设置诊断输出级别
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_occurrences() {
        assert_eq!(Verbosity::from_occurrences(0), Verbosity::Info);
        assert_eq!(Verbosity::from_occurrences(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_occurrences(2), Verbosity::Silly);
        assert_eq!(Verbosity::from_occurrences(7), Verbosity::Silly);
        assert!(Verbosity::Silly > Verbosity::Verbose);
    }

    #[test]
    fn test_invocation_defaults() {
        let spec = InvocationSpec::new("ls", vec!["-l".to_string()]);
        assert_eq!(spec.mode, Mode::Bulk);
        assert_eq!(spec.verbosity, Verbosity::Info);

        let spec = spec.with_mode(Mode::Each).with_verbosity(Verbosity::Silly);
        assert_eq!(spec.mode, Mode::Each);
        assert_eq!(spec.verbosity, Verbosity::Silly);
    }
}
