// search-core/src/error.rs
//! 查询错误类型

use thiserror::Error;

/// 查询阶段的错误
#[derive(Error, Debug)]
pub enum SearchError {
    /// 索引尚未初始化就收到查询，说明启动顺序有误
    #[error("索引尚未初始化")]
    IndexNotInitialized,

    /// 查询字符串无法解析（客户端错误）
    #[error("查询解析错误 '{query}': {source}")]
    MalformedQuery {
        query: String,
        #[source]
        source: tantivy::query::QueryParserError,
    },

    /// 索引读取失败
    #[error("搜索执行错误: {0}")]
    Index(#[from] tantivy::TantivyError),

    #[error("结果序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SearchError {
    /// 是否应以客户端错误（而非服务端故障）对待
    pub fn is_client_error(&self) -> bool {
        matches!(self, SearchError::MalformedQuery { .. })
    }
}
