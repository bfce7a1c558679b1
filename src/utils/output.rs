//! # 分级诊断输出
//!
//! 提供统一的终端输出样式。`Logger` 在启动时根据 `-v` 次数构建一次，
//! 之后以引用方式传给各组件，不存在全局日志级别。
//!
//! 所有诊断信息写到 stderr，子进程的 stdout 保持干净。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`commands/`、`batch/` 使用
//! - 使用 `colored` crate

use crate::models::Verbosity;

use colored::Colorize;
use std::error::Error;
use std::io::Write;
#[cfg(test)]
use std::sync::Mutex;

/// 诊断输出目标
enum Sink {
    Stderr,
    #[cfg(test)]
    Buffer(Mutex<Vec<String>>),
}

/// 分级日志输出
pub struct Logger {
    verbosity: Verbosity,
    sink: Sink,
}

impl Logger {
    /// 创建写到 stderr 的日志器
    pub fn new(verbosity: Verbosity) -> Self {
        Logger {
            verbosity,
            sink: Sink::Stderr,
        }
    }

    /// 创建写到内存的日志器（不带颜色），用于测试
    #[cfg(test)]
    pub fn buffered(verbosity: Verbosity) -> Self {
        Logger {
            verbosity,
            sink: Sink::Buffer(Mutex::new(Vec::new())),
        }
    }

    /// 已记录的内存日志行
    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stderr => Vec::new(),
            Sink::Buffer(lines) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
        }
    }

    pub fn enabled(&self, level: Verbosity) -> bool {
        level <= self.verbosity
    }

    /// 打印错误消息
    pub fn error(&self, msg: &str) {
        self.emit("[ERR]".red().bold(), "[ERR]", msg);
    }

    /// 打印信息消息
    pub fn info(&self, msg: &str) {
        self.emit("[*]".blue().bold(), "[*]", msg);
    }

    /// 打印详细消息（-v）
    pub fn verbose(&self, msg: &str) {
        if self.enabled(Verbosity::Verbose) {
            self.emit("[VERB]".cyan(), "[VERB]", msg);
        }
    }

    /// 打印调试消息（-vv）
    pub fn silly(&self, msg: &str) {
        if self.enabled(Verbosity::Silly) {
            self.emit("[SILLY]".dimmed(), "[SILLY]", msg);
        }
    }

    /// 报告致命错误
    ///
    /// Silly 级别下输出完整的 `Debug` 结构和 source 链，否则只输出消息。
    pub fn report<E: Error>(&self, err: &E) {
        if self.enabled(Verbosity::Silly) {
            self.error(&format!("{:#?}", err));
            let mut source = err.source();
            while let Some(cause) = source {
                self.error(&format!("caused by: {}", cause));
                source = cause.source();
            }
        } else {
            self.error(&err.to_string());
        }
    }

    #[cfg_attr(not(test), allow(unused_variables))]
    fn emit(&self, tag: colored::ColoredString, plain: &str, msg: &str) {
        match &self.sink {
            Sink::Stderr => {
                let mut stderr = std::io::stderr().lock();
                let _ = writeln!(stderr, "{} {}", tag, msg);
            }
            #[cfg(test)]
            Sink::Buffer(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(format!("{} {}", plain, msg));
                }
            }
        }
    }
}
