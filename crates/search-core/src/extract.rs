// search-core/src/extract.rs
//! 文档提取模块
//!
//! 遍历语料目录，读取 Markdown 文件并解析 front-matter 中的标题与描述

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Result;
use chardetng::EncodingDetector;
use ignore::{Walk, WalkBuilder};
use regex::Regex;

use crate::config::WalkerConfig;
use crate::models::CorpusDocument;

/// 标题解析失败时使用的占位标题
pub const FAILED_TITLE: &str = "-Failed Parsing Title-";

/// front-matter 分隔行
const FRONT_MATTER_DELIMITER: &str = "---";

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"title: (.*?)\r?\n").expect("title regex"));

static DESCRIPTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"description: (.*?)\r?\n").expect("description regex"));

/// 提取统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub documents: usize,
    pub failed_titles: usize,
    pub unreadable: usize,
}

/// 语料遍历器
///
/// 惰性地逐个产出 [`CorpusDocument`]，只能遍历一次
pub struct CorpusWalker {
    root: PathBuf,
    walk: Walk,
    extensions: Vec<String>,
    stats: ExtractStats,
}

impl CorpusWalker {
    pub fn new(root: &Path, config: &WalkerConfig) -> Result<Self> {
        let root = absolute_root(root)?;
        if !root.is_dir() {
            anyhow::bail!("语料目录不存在或不是目录: {:?}", root);
        }

        let mut builder = WalkBuilder::new(&root);
        builder
            .standard_filters(false)
            .hidden(config.skip_hidden)
            .follow_links(config.follow_symlinks);

        if config.max_depth > 0 {
            builder.max_depth(Some(config.max_depth));
        }

        tracing::debug!("开始遍历语料目录: {:?}", root);

        Ok(Self {
            walk: builder.build(),
            root,
            extensions: config.extensions.clone(),
            stats: ExtractStats::default(),
        })
    }

    /// 规范化后的语料根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn stats(&self) -> ExtractStats {
        self.stats
    }

    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(&ext))
            })
    }

    fn extract(&mut self, path: &Path) -> CorpusDocument {
        let text = match read_text_lenient(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("读取文件失败，按空内容处理 {:?}: {}", path, e);
                self.stats.unreadable += 1;
                String::new()
            }
        };

        let title = match parse_title(&text) {
            Some(title) => {
                tracing::debug!("解析到标题 {:?}: {}", path, title);
                title
            }
            None => {
                tracing::debug!("未找到标题: {:?}", path);
                self.stats.failed_titles += 1;
                FAILED_TITLE.to_string()
            }
        };

        let description = parse_description(&text);
        let (_, body) = split_front_matter(&text);
        self.stats.documents += 1;

        CorpusDocument {
            source_path: path.to_path_buf(),
            title,
            description,
            body: body.to_string(),
        }
    }
}

impl Iterator for CorpusWalker {
    type Item = CorpusDocument;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("遍历错误: {}", e);
                    continue;
                }
            };

            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if !is_file || !self.is_supported(entry.path()) {
                continue;
            }

            return Some(self.extract(entry.path()));
        }
    }
}

pub(crate) fn absolute_root(root: &Path) -> Result<PathBuf> {
    match root.canonicalize() {
        Ok(path) => Ok(path),
        Err(_) => Ok(std::path::absolute(root)?),
    }
}

/// 读取文本文件，非 UTF-8 时自动检测编码
pub fn read_text_lenient(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;

    if let Ok(text) = std::str::from_utf8(&bytes) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let detected_encoding = detector.guess(None, true);

    let (decoded, encoding_used, had_errors) = detected_encoding.decode(&bytes);
    if had_errors {
        tracing::warn!("文件 {:?} 使用 {} 解码时有部分错误", path, encoding_used.name());
    } else {
        tracing::debug!("检测到文件编码 {}: {:?}", encoding_used.name(), path);
    }

    Ok(decoded.into_owned())
}

/// 解析 `title:` 行，`-` 与 `_` 替换为空格
pub fn parse_title(text: &str) -> Option<String> {
    let captures = TITLE_REGEX.captures(text)?;
    let title = captures.get(1)?.as_str();
    Some(normalize_title(title))
}

/// 解析 `description:` 行，缺失时为空串
pub fn parse_description(text: &str) -> String {
    DESCRIPTION_REGEX
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn normalize_title(title: &str) -> String {
    title.replace(['-', '_'], " ")
}

/// 拆分 front-matter 与正文
///
/// 文本必须以分隔行开头，且存在闭合分隔行，否则整段视为正文
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = strip_delimiter_line(text) else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FRONT_MATTER_DELIMITER {
            let front_matter = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(front_matter), body);
        }
        offset += line.len();
    }

    (None, text)
}

fn strip_delimiter_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FRONT_MATTER_DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}
