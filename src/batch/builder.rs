//! # 参数构建器
//!
//! 把参数模板展开成最终传给命令的参数列表。
//!
//! ## 模式
//! - bulk：逐个展开所有参数并按顺序拼接，只生成一组参数
//! - each：最多允许一个 glob 参数，每个匹配生成一组参数，其余参数保持不变
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/expander.rs` 展开单个参数

use super::expander::PatternExpander;
use crate::error::{GlobRunError, Result};

/// bulk 模式：展开全部参数并拼接
pub fn build_bulk(tokens: &[String], expander: &PatternExpander) -> Vec<String> {
    tokens
        .iter()
        .flat_map(|token| expander.expand(token))
        .collect()
}

/// each 模式：每个匹配生成一组参数
///
/// 多于一个 glob 参数时在展开前直接报错。
pub fn build_each(tokens: &[String], expander: &PatternExpander) -> Result<Vec<Vec<String>>> {
    let globs: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| PatternExpander::is_glob(token))
        .map(|(i, _)| i)
        .collect();

    match globs.as_slice() {
        [] => Ok(vec![tokens.to_vec()]),
        [index] => Ok(expander
            .expand(&tokens[*index])
            .into_iter()
            .map(|matched| {
                let mut args = tokens.to_vec();
                args[*index] = matched;
                args
            })
            .collect()),
        _ => Err(GlobRunError::MultipleGlobs {
            patterns: globs.iter().map(|&i| tokens[i].clone()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GlobOptions, Verbosity};
    use crate::utils::Logger;

    use glob::Pattern;
    use std::fs;
    use std::path::Path;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fixture() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/a.js"), "").unwrap();
        fs::write(dir.path().join("src/b.js"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();
        let prefix = Pattern::escape(&dir.path().to_string_lossy());
        (dir, prefix)
    }

    fn path(root: &Path, rel: &str) -> String {
        root.join(rel).to_string_lossy().into_owned()
    }

    #[test]
    fn test_bulk_literal_tokens() {
        let options = GlobOptions::default();
        let logger = Logger::buffered(Verbosity::Info);
        let expander = PatternExpander::new(&options, &logger);
        let tokens = strings(&["build", "--release", "out dir"]);
        assert_eq!(build_bulk(&tokens, &expander), tokens);
    }

    #[test]
    fn test_bulk_concatenates_in_order() {
        let (dir, prefix) = fixture();
        let options = GlobOptions::default();
        let logger = Logger::buffered(Verbosity::Info);
        let expander = PatternExpander::new(&options, &logger);

        let tokens = vec![
            "build".to_string(),
            format!("{}/src/*.js", prefix),
            "--".to_string(),
            format!("{}/*.md", prefix),
            format!("{}/*.none", prefix),
        ];
        let args = build_bulk(&tokens, &expander);
        assert_eq!(
            args,
            vec![
                "build".to_string(),
                path(dir.path(), "src/a.js"),
                path(dir.path(), "src/b.js"),
                "--".to_string(),
                path(dir.path(), "README.md"),
                format!("{}/*.none", prefix),
            ]
        );
    }

    #[test]
    fn test_each_without_glob_runs_once() {
        let options = GlobOptions::default();
        let logger = Logger::buffered(Verbosity::Info);
        let expander = PatternExpander::new(&options, &logger);
        let tokens = strings(&["lint", "src/a.js"]);
        assert_eq!(build_each(&tokens, &expander).unwrap(), vec![tokens]);
    }

    #[test]
    fn test_each_empty_arguments() {
        let options = GlobOptions::default();
        let logger = Logger::buffered(Verbosity::Info);
        let expander = PatternExpander::new(&options, &logger);
        let runs = build_each(&[], &expander).unwrap();
        assert_eq!(runs, vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_each_substitutes_single_glob() {
        let (dir, prefix) = fixture();
        let options = GlobOptions::default();
        let logger = Logger::buffered(Verbosity::Info);
        let expander = PatternExpander::new(&options, &logger);

        let tokens = vec![
            "--fix".to_string(),
            format!("{}/src/*.js", prefix),
            "--quiet".to_string(),
        ];
        let runs = build_each(&tokens, &expander).unwrap();
        assert_eq!(
            runs,
            vec![
                vec![
                    "--fix".to_string(),
                    path(dir.path(), "src/a.js"),
                    "--quiet".to_string()
                ],
                vec![
                    "--fix".to_string(),
                    path(dir.path(), "src/b.js"),
                    "--quiet".to_string()
                ],
            ]
        );
    }

    #[test]
    fn test_each_unmatched_glob_runs_with_literal() {
        let (_dir, prefix) = fixture();
        let options = GlobOptions::default();
        let logger = Logger::buffered(Verbosity::Info);
        let expander = PatternExpander::new(&options, &logger);
        let tokens = vec!["cat".to_string(), format!("{}/*.none", prefix)];
        assert_eq!(build_each(&tokens, &expander).unwrap(), vec![tokens]);
    }

    #[test]
    fn test_each_rejects_multiple_globs() {
        let options = GlobOptions::default();
        let logger = Logger::buffered(Verbosity::Silly);
        let expander = PatternExpander::new(&options, &logger);
        let tokens = strings(&["cp", "*.txt", "*.md"]);
        let err = build_each(&tokens, &expander).unwrap_err();
        match err {
            GlobRunError::MultipleGlobs { patterns } => {
                assert_eq!(patterns, strings(&["*.txt", "*.md"]));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        // 报错发生在展开之前
        assert!(logger.lines().is_empty());
    }
}
