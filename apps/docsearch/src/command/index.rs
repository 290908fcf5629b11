use super::{initialize_engine, Command};
use crate::error::Result;
use crate::config::Config;
use std::path::PathBuf;
use tracing::info;

pub struct IndexCommand {
    config: Config,
    corpus_root: Option<PathBuf>,
    rebuild: bool,
}

impl IndexCommand {
    pub fn new(cfg: Config, corpus_root: Option<PathBuf>, rebuild: bool) -> Self {
        Self {
            config: cfg,
            corpus_root,
            rebuild,
        }
    }
}

#[async_trait::async_trait]
impl Command for IndexCommand {
    async fn execute(&self) -> Result<()> {
        let search_config = self.config.search_config(self.corpus_root.clone(), None, self.rebuild)?;
        info!("语料目录: {:?}", search_config.corpus_root);
        info!("索引目录: {:?}", search_config.index.storage_path);

        let engine = initialize_engine(search_config).await?;
        let report = engine.report();

        if report.reused {
            println!("索引已存在，未重新构建（使用 --rebuild 强制重建）");
        } else {
            println!("索引完成: {} 个文档", report.indexed);
            if report.failed_titles > 0 {
                println!("  标题解析失败: {}", report.failed_titles);
            }
            if report.unreadable > 0 {
                println!("  读取失败: {}", report.unreadable);
            }
        }
        println!("索引位置: {:?} ({} 个文档)", engine.store().location(), engine.store().num_docs());

        Ok(())
    }
}
