//! # glob 匹配选项
//!
//! 强类型的匹配选项：是否匹配目录、是否匹配点文件、排除模式列表。
//! 未匹配的模式始终返回其自身（见 `NoMatch`）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 构建
//! - 被 `batch/expander.rs` 使用
//! - 使用 `glob` 编译排除模式

use crate::error::{GlobRunError, Result};

use glob::{MatchOptions, Pattern};
use std::fmt;

/// 模式未匹配任何路径时的行为
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoMatch {
    /// 返回模式字面量本身
    #[default]
    ReturnLiteral,
}

/// glob 匹配选项
#[derive(Debug, Clone)]
pub struct GlobOptions {
    match_directories: bool,
    match_dotfiles: bool,
    ignore: Vec<Pattern>,
    /// 以 `/**` 结尾的排除模式去掉该后缀后的形式，用于排除目录本身
    ignore_roots: Vec<Pattern>,
    no_match: NoMatch,
}

impl Default for GlobOptions {
    fn default() -> Self {
        GlobOptions {
            match_directories: true,
            match_dotfiles: false,
            ignore: Vec::new(),
            ignore_roots: Vec::new(),
            no_match: NoMatch::default(),
        }
    }
}

impl GlobOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置是否匹配目录
    pub fn match_directories(mut self, enabled: bool) -> Self {
        self.match_directories = enabled;
        self
    }

    /// 设置 `*` 等通配符是否匹配以 `.` 开头的文件
    pub fn match_dotfiles(mut self, enabled: bool) -> Self {
        self.match_dotfiles = enabled;
        self
    }

    /// 追加一个排除模式
    ///
    /// `dir/**` 同时排除 `dir` 本身。
    pub fn ignore(mut self, pattern: &str) -> Result<Self> {
        let normalized = strip_dot_prefix(pattern);
        let compile = |text: &str| {
            Pattern::new(text).map_err(|e| GlobRunError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.msg.to_string(),
            })
        };

        self.ignore.push(compile(normalized)?);
        if let Some(root) = normalized.strip_suffix("/**") {
            if !root.is_empty() {
                self.ignore_roots.push(compile(root)?);
            }
        }
        Ok(self)
    }

    pub fn matches_directories(&self) -> bool {
        self.match_directories
    }

    pub fn matches_dotfiles(&self) -> bool {
        self.match_dotfiles
    }

    pub fn no_match(&self) -> NoMatch {
        self.no_match
    }

    /// 排除模式（按添加顺序）
    pub fn ignore_patterns(&self) -> impl Iterator<Item = &str> {
        self.ignore.iter().map(Pattern::as_str)
    }

    /// 传给 glob 引擎的匹配选项
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: !self.match_dotfiles,
        }
    }

    /// 路径是否被任一排除模式命中
    pub fn is_ignored(&self, path: &str) -> bool {
        let path = strip_dot_prefix(path);
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        self.ignore
            .iter()
            .chain(&self.ignore_roots)
            .any(|pattern| pattern.matches_with(path, options))
    }
}

impl fmt::Display for GlobOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ignore: Vec<&str> = self.ignore_patterns().collect();
        write!(
            f,
            "{{ nodir: {}, dot: {}, ignore: {:?}, nonull: {} }}",
            !self.matches_directories(),
            self.matches_dotfiles(),
            ignore,
            self.no_match() == NoMatch::ReturnLiteral
        )
    }
}

/// 去掉前导 `./`（可能重复）
fn strip_dot_prefix(path: &str) -> &str {
    let mut path = path;
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path
}
