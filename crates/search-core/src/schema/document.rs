// search-core/src/schema/document.rs
//! 文档结构定义
//! 
//! 定义索引文档的结构化表示，用于创建 Tantivy 文档

use serde::{Serialize, Deserialize};
use tantivy::schema::{Field, Value};
use tantivy::{doc, TantivyDocument};

use super::builder::SchemaFields;
use crate::models::CorpusDocument;

/// 索引记录 - 写入 Tantivy 的文档投影
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// 文档标题
    pub title: String,
    
    /// 正文内容
    pub content: String,
    
    /// 完整文件路径（唯一标识，位于语料根目录之下）
    pub path: String,
    
    /// 文档描述
    pub description: String,
}

impl IndexRecord {
    /// 转换为 Tantivy 文档
    pub fn to_document(&self, fields: &SchemaFields) -> TantivyDocument {
        doc!(
            fields.title => self.title.as_str(),
            fields.content => self.content.as_str(),
            fields.path => self.path.as_str(),
            fields.description => self.description.as_str()
        )
    }

    /// 从存储的 Tantivy 文档还原，缺失字段以空串代替
    pub fn from_stored(doc: &TantivyDocument, fields: &SchemaFields) -> Self {
        let text = |field: Field| {
            doc.get_first(field)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };

        Self {
            title: text(fields.title),
            content: text(fields.content),
            path: text(fields.path),
            description: text(fields.description),
        }
    }
}

impl From<CorpusDocument> for IndexRecord {
    fn from(document: CorpusDocument) -> Self {
        Self {
            title: document.title,
            content: document.body,
            path: document.source_path.to_string_lossy().into_owned(),
            description: document.description,
        }
    }
}
