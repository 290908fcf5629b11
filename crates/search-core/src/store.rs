// search-core/src/store.rs
//! 索引存储 - 持久化倒排索引的创建、打开、写入与检索

use std::fs;
use std::path::{Path, PathBuf};

use tantivy::collector::TopDocs;
use tantivy::directory::MmapDirectory;
use tantivy::query::Query;
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, Score, TantivyDocument, Term};

use crate::schema::{build_schema, IndexRecord, SchemaFields};

/// 检索命中（含相关度分数）
#[derive(Debug, Clone)]
pub struct StoredHit {
    pub score: Score,
    pub record: IndexRecord,
}

/// 持久化索引句柄
///
/// 读取器使用手动刷新策略：只有 [`StoreWriter::commit`] 之后新文档才对检索可见
pub struct IndexStore {
    index: Index,
    reader: IndexReader,
    fields: SchemaFields,
    location: PathBuf,
}

impl IndexStore {
    /// 在指定目录创建空索引（目录不存在时自动创建）
    pub fn create_empty(location: &Path) -> tantivy::Result<Self> {
        fs::create_dir_all(location)?;
        let index = Index::create_in_dir(location, build_schema())?;
        Self::from_index(index, location)
    }

    /// 打开已有索引
    pub fn open_existing(location: &Path) -> tantivy::Result<Self> {
        let index = Index::open_in_dir(location)?;
        Self::from_index(index, location)
    }

    /// 目录下是否已有可打开的索引
    pub fn exists(location: &Path) -> tantivy::Result<bool> {
        if !location.is_dir() {
            return Ok(false);
        }
        let directory = MmapDirectory::open(location)?;
        Ok(Index::exists(&directory)?)
    }

    fn from_index(index: Index, location: &Path) -> tantivy::Result<Self> {
        let fields = SchemaFields::from_schema(&index.schema())?;
        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        Ok(Self {
            index,
            reader,
            fields,
            location: location.to_path_buf(),
        })
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn fields(&self) -> &SchemaFields {
        &self.fields
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// 创建写入句柄（同一时间只允许一个）
    pub fn writer(&self, memory_budget: usize) -> tantivy::Result<StoreWriter<'_>> {
        let inner: IndexWriter = self.index.writer(memory_budget)?;
        Ok(StoreWriter {
            store: self,
            inner,
            pending: 0,
        })
    }

    /// 当前对检索可见的文档数
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    /// 按相关度降序执行查询
    ///
    /// searcher 只在本次调用内持有，返回（包括出错返回）时释放
    ///
    /// `limit` 为 0 时按 1 处理（TopDocs 不接受 0），配置层会拒绝 0
    pub fn search(&self, query: &dyn Query, limit: usize) -> tantivy::Result<Vec<StoredHit>> {
        let searcher = self.reader.searcher();
        let top_docs = searcher.search(query, &TopDocs::with_limit(limit.max(1)))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            hits.push(StoredHit {
                score,
                record: IndexRecord::from_stored(&doc, &self.fields),
            });
        }

        Ok(hits)
    }
}

/// 批量写入句柄
///
/// 未 commit 的文档在丢弃句柄时一并丢弃
pub struct StoreWriter<'a> {
    store: &'a IndexStore,
    inner: IndexWriter,
    pending: usize,
}

impl StoreWriter<'_> {
    /// 添加文档；同一路径的旧文档先被删除，保证 path 唯一
    pub fn add_document(&mut self, record: &IndexRecord) -> tantivy::Result<()> {
        let fields = self.store.fields();
        self.inner.delete_term(Term::from_field_text(fields.path, &record.path));
        self.inner.add_document(record.to_document(fields))?;
        self.pending += 1;
        Ok(())
    }

    /// 原子提交全部已添加的文档，并刷新读取器使其立即可见
    pub fn commit(mut self) -> tantivy::Result<usize> {
        self.inner.commit()?;
        self.store.reader.reload()?;
        tracing::debug!("已提交 {} 个文档到 {:?}", self.pending, self.store.location);
        Ok(self.pending)
    }
}
