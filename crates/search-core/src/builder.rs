// search-core/src/builder.rs
//! 索引构建模块
//!
//! 启动时一次性把语料写入索引；已有索引时按策略复用或重建

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::config::{IndexConfig, RebuildPolicy};
use crate::extract::ExtractStats;
use crate::models::{BuildReport, CorpusDocument};
use crate::schema::IndexRecord;
use crate::store::IndexStore;

/// 临时构建目录名前缀
const STAGING_PREFIX: &str = ".index-build-";

/// 可报告提取统计的文档来源
pub trait DocumentSource: Iterator<Item = CorpusDocument> {
    fn stats(&self) -> ExtractStats;
}

impl DocumentSource for crate::extract::CorpusWalker {
    fn stats(&self) -> ExtractStats {
        crate::extract::CorpusWalker::stats(self)
    }
}

/// 构建（或打开）索引
pub fn build_index<S>(documents: S, config: &IndexConfig) -> Result<(IndexStore, BuildReport)>
where
    S: DocumentSource,
{
    build_index_with_progress(documents, config, |_| {})
}

/// 构建（或打开）索引（带进度回调，参数为已写入的文档数）
///
/// 新索引先写入同级的临时目录，提交后再整体改名到目标位置；
/// 构建中途失败、panic 或进程被杀时，目标位置不会出现半成品索引
pub fn build_index_with_progress<S, F>(
    documents: S,
    config: &IndexConfig,
    progress_callback: F,
) -> Result<(IndexStore, BuildReport)>
where
    S: DocumentSource,
    F: Fn(usize),
{
    let location = config.storage_path.as_path();

    if config.rebuild == RebuildPolicy::IfMissing && IndexStore::exists(location)? {
        tracing::info!("索引已存在，直接打开: {:?}", location);
        let store = IndexStore::open_existing(location)
            .with_context(|| format!("无法打开索引 {:?}", location))?;
        let report = BuildReport { reused: true, ..Default::default() };
        return Ok((store, report));
    }

    let staging = staging_dir(location)?;
    let report = match populate(documents, staging.path(), config.writer_memory, &progress_callback) {
        Ok(report) => report,
        Err(e) => {
            let staging_path = staging.path().to_path_buf();
            if let Err(cleanup) = staging.close() {
                tracing::warn!("无法清理临时索引目录 {:?}: {}", staging_path, cleanup);
            }
            return Err(e);
        }
    };

    // Always 策略下旧索引保留到新索引提交完成为止
    if location.exists() {
        tracing::info!("替换旧索引: {:?}", location);
        fs::remove_dir_all(location)
            .with_context(|| format!("无法删除旧索引 {:?}", location))?;
    }
    fs::rename(staging.path(), location)
        .with_context(|| format!("无法将索引移动到 {:?}", location))?;

    let store = IndexStore::open_existing(location)
        .with_context(|| format!("无法打开索引 {:?}", location))?;
    Ok((store, report))
}

/// 在目标位置的同级目录下创建临时构建目录（保证 rename 不跨文件系统）
fn staging_dir(location: &Path) -> Result<TempDir> {
    let parent = match location.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("无法创建索引父目录 {:?}", parent))?;

    tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(parent)
        .with_context(|| format!("无法在 {:?} 下创建临时索引目录", parent))
}

fn populate<S, F>(
    mut documents: S,
    location: &Path,
    writer_memory: usize,
    progress_callback: &F,
) -> Result<BuildReport>
where
    S: DocumentSource,
    F: Fn(usize),
{
    let store = IndexStore::create_empty(location)
        .with_context(|| format!("无法创建索引 {:?}", location))?;
    tracing::info!("正在构建索引: {:?}", location);

    let mut writer = store.writer(writer_memory)?;
    let mut indexed = 0;
    for document in documents.by_ref() {
        let record = IndexRecord::from(document);
        writer
            .add_document(&record)
            .with_context(|| format!("写入索引失败: {}", record.path))?;
        indexed += 1;
        progress_callback(indexed);
    }

    // 整个遍历结束后只提交一次
    writer.commit().context("提交索引失败")?;

    let stats = documents.stats();
    if stats.failed_titles > 0 {
        tracing::warn!("{} 个文档未能解析标题", stats.failed_titles);
    }
    if stats.unreadable > 0 {
        tracing::warn!("{} 个文件读取失败，已按空内容索引", stats.unreadable);
    }
    tracing::info!("初始索引完成，共处理 {} 个文件", indexed);

    Ok(BuildReport {
        indexed,
        failed_titles: stats.failed_titles,
        unreadable: stats.unreadable,
        reused: false,
    })
}
