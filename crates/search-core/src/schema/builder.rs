// search-core/src/schema/builder.rs
//! Schema 构建器
//! 
//! 构建 Tantivy 索引 Schema，统一管理字段配置

use tantivy::schema::*;
use super::fields::*;

/// 文本字段使用的分词器（Tantivy 内置）
pub const TEXT_TOKENIZER: &str = "default";

/// 构建 Tantivy Schema
/// 
/// - `title`: 文档标题，分词，存储
/// - `content`: 正文，分词，存储
/// - `description`: 描述，分词，存储
/// - `path`: 文件绝对路径，精确匹配，存储
pub fn build_schema() -> Schema {
    let mut schema_builder = Schema::builder();

    let text_options = TextOptions::default()
        .set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(TEXT_TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions)
        )
        .set_stored();

    schema_builder.add_text_field(FIELD_TITLE, text_options.clone());
    schema_builder.add_text_field(FIELD_CONTENT, text_options.clone());
    schema_builder.add_text_field(FIELD_DESCRIPTION, text_options);

    // 路径字段（精确匹配，不分词）
    schema_builder.add_text_field(FIELD_PATH, STRING | STORED);

    schema_builder.build()
}

/// Schema 字段辅助结构
/// 
/// 缓存字段引用，避免重复查找
#[derive(Debug, Clone, Copy)]
pub struct SchemaFields {
    pub title: Field,
    pub content: Field,
    pub path: Field,
    pub description: Field,
}

impl SchemaFields {
    /// 从 Schema 中提取所有字段引用
    ///
    /// 打开一个旧版本（字段不全）的索引目录时返回错误
    pub fn from_schema(schema: &Schema) -> tantivy::Result<Self> {
        Ok(Self {
            title: schema.get_field(FIELD_TITLE)?,
            content: schema.get_field(FIELD_CONTENT)?,
            path: schema.get_field(FIELD_PATH)?,
            description: schema.get_field(FIELD_DESCRIPTION)?,
        })
    }

    /// 按配置选择查询字段
    pub fn target(&self, field: crate::config::TargetField) -> Field {
        match field {
            crate::config::TargetField::Title => self.title,
            crate::config::TargetField::Content => self.content,
        }
    }
}
