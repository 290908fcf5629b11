// search-core/src/lib.rs
//! 文档镜像搜索核心库
//!
//! 提供基于 Tantivy 的全文搜索：
//! - 遍历 Markdown 语料并解析 front-matter
//! - 一次性构建持久化索引（或复用已有索引）
//! - 单字段查询并输出固定的 JSON 结果契约

use std::path::PathBuf;
use std::sync::OnceLock;

pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod models;
pub mod query;
pub mod schema;
pub mod store;

// 重导出核心类型
pub use builder::{build_index, build_index_with_progress, DocumentSource};
pub use config::{IndexConfig, QueryConfig, RebuildPolicy, SearchConfig, TargetField, WalkerConfig};
pub use error::SearchError;
pub use extract::{CorpusWalker, ExtractStats, FAILED_TITLE};
pub use format::{create_search_result, SearchOutcome, SearchResponse, SearchResult};
pub use models::{BuildReport, CorpusDocument};
pub use query::{execute_search, web_relative_url, QueryContext};
pub use schema::{build_schema, IndexRecord, SchemaFields, FIELD_CONTENT, FIELD_DESCRIPTION, FIELD_PATH, FIELD_TITLE};
pub use store::{IndexStore, StoredHit, StoreWriter};

/// 搜索引擎统一入口
///
/// 构造完成即代表索引已就绪，之后不再修改
pub struct SearchEngine {
    store: IndexStore,
    config: SearchConfig,
    corpus_root: PathBuf,
    site_root: PathBuf,
    report: BuildReport,
}

impl SearchEngine {
    /// 构建（或打开）索引并创建搜索引擎实例
    pub fn new(config: SearchConfig) -> anyhow::Result<Self> {
        Self::new_with_progress(config, |_| {})
    }

    /// 同 [`SearchEngine::new`]，构建过程中回报已写入的文档数
    pub fn new_with_progress<F>(config: SearchConfig, progress_callback: F) -> anyhow::Result<Self>
    where
        F: Fn(usize),
    {
        let walker = CorpusWalker::new(&config.corpus_root, &config.walker)?;
        let corpus_root = walker.root().to_path_buf();
        let site_root = extract::absolute_root(config.site_root())?;

        let (store, report) = build_index_with_progress(walker, &config.index, progress_callback)?;
        tracing::info!(
            "索引就绪: {} 个文档 (复用: {})",
            store.num_docs(),
            report.reused
        );

        Ok(Self {
            store,
            config,
            corpus_root,
            site_root,
            report,
        })
    }

    /// 执行搜索
    pub fn search(&self, query: Option<&str>) -> Result<SearchOutcome, SearchError> {
        let ctx = QueryContext {
            store: &self.store,
            field: self.config.query.field,
            limit: self.config.query.limit,
            corpus_root: &self.corpus_root,
            site_root: &self.site_root,
        };
        execute_search(&ctx, query)
    }

    /// 执行搜索并渲染响应体（空查询得到空串）
    pub fn search_body(&self, query: Option<&str>) -> Result<String, SearchError> {
        Ok(self.search(query)?.to_body()?)
    }

    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    pub fn report(&self) -> BuildReport {
        self.report
    }
}

/// 初始化闸门
///
/// 由启动流程在索引构建完成后显式安装一次；安装前的查询一律失败
#[derive(Default)]
pub struct SearchGate {
    engine: OnceLock<SearchEngine>,
}

impl SearchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 安装已初始化的引擎；重复安装时原样退回
    pub fn install(&self, engine: SearchEngine) -> Result<(), SearchEngine> {
        self.engine.set(engine)
    }

    pub fn is_ready(&self) -> bool {
        self.engine.get().is_some()
    }

    pub fn engine(&self) -> Result<&SearchEngine, SearchError> {
        self.engine.get().ok_or(SearchError::IndexNotInitialized)
    }

    pub fn search(&self, query: Option<&str>) -> Result<SearchOutcome, SearchError> {
        self.engine()?.search(query)
    }

    pub fn search_body(&self, query: Option<&str>) -> Result<String, SearchError> {
        self.engine()?.search_body(query)
    }
}
