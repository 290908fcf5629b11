// search-core/src/models.rs
//! 数据模型定义

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// 从语料文件中提取出的文档（仅在索引构建期间存在）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusDocument {
    /// 文件绝对路径
    pub source_path: PathBuf,
    pub title: String,
    pub description: String,
    /// front-matter 之后的正文
    pub body: String,
}

/// 单次构建的统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// 写入索引的文档数
    pub indexed: usize,
    /// 标题解析失败的文档数
    pub failed_titles: usize,
    /// 读取失败、以空内容代替的文件数
    pub unreadable: usize,
    /// 是否直接复用了已有索引（未遍历语料）
    pub reused: bool,
}
