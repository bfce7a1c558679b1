//! # 模式展开器
//!
//! 把单个参数展开为匹配的文件系统路径。
//!
//! ## 功能
//! - 判断参数是否为 glob 模式（`*`、`?`、`[`，且能被 glob 引擎编译）
//! - 递归 `**` 匹配
//! - 排除目录 / 排除模式过滤
//! - 未匹配时返回模式字面量本身
//!
//! ## 依赖关系
//! - 被 `batch/builder.rs` 调用
//! - 使用 `models/glob_options.rs` 的匹配选项
//! - 使用 `glob` 进行文件系统匹配

use crate::models::glob_options::NoMatch;
use crate::models::GlobOptions;
use crate::utils::Logger;

use glob::Pattern;
use std::path::Path;

const GLOB_METACHARS: &[char] = &['*', '?', '['];

/// 模式展开器
pub struct PatternExpander<'a> {
    options: &'a GlobOptions,
    logger: &'a Logger,
}

impl<'a> PatternExpander<'a> {
    pub fn new(options: &'a GlobOptions, logger: &'a Logger) -> Self {
        Self { options, logger }
    }

    /// 参数在语法上是否为 glob 模式（不检查是否有匹配）
    pub fn is_glob(token: &str) -> bool {
        token.contains(GLOB_METACHARS) && Pattern::new(token).is_ok()
    }

    /// 展开单个参数，结果至少包含一个元素
    pub fn expand(&self, token: &str) -> Vec<String> {
        if !Self::is_glob(token) {
            return vec![token.to_string()];
        }

        self.logger
            .silly(&format!("glob '{}' with options {}", token, self.options));

        let paths = match glob::glob_with(token, self.options.match_options()) {
            Ok(paths) => paths,
            Err(e) => {
                self.logger
                    .silly(&format!("glob '{}' rejected: {}", token, e));
                return self.unmatched(token);
            }
        };

        let mut matches = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) => {
                    if let Some(m) = self.accept(&path) {
                        matches.push(m);
                    }
                }
                Err(e) => {
                    self.logger
                        .silly(&format!("skipping unreadable entry: {}", e));
                }
            }
        }

        if matches.is_empty() {
            return self.unmatched(token);
        }

        matches
    }

    /// 过滤单个匹配路径
    fn accept(&self, path: &Path) -> Option<String> {
        if !self.options.matches_directories() && path.is_dir() {
            return None;
        }

        let rendered = path.to_string_lossy().into_owned();
        if self.options.is_ignored(&rendered) {
            return None;
        }

        Some(rendered)
    }

    fn unmatched(&self, token: &str) -> Vec<String> {
        match self.options.no_match() {
            NoMatch::ReturnLiteral => vec![token.to_string()],
        }
    }
}
