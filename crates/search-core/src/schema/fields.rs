// search-core/src/schema/fields.rs
//! 字段名常量定义
//! 
//! 统一管理所有 Schema 字段名，避免魔法字符串

/// 文档标题（来自 front-matter 的 `title:` 行）
pub const FIELD_TITLE: &str = "title";

/// 正文内容（全文检索主字段）
pub const FIELD_CONTENT: &str = "content";

/// 完整文件路径（唯一标识符，不分词）
pub const FIELD_PATH: &str = "path";

/// 文档描述（来自 front-matter 的 `description:` 行）
pub const FIELD_DESCRIPTION: &str = "description";
