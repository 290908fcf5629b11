pub mod clear_index;
pub mod index;
pub mod search;

use crate::error::Result;

pub use clear_index::ClearIndexCommand;
pub use index::IndexCommand;
pub use search::SearchCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// 在阻塞线程中构建（或打开）索引，期间显示进度
pub(crate) async fn initialize_engine(
    search_config: search_core::SearchConfig,
) -> Result<search_core::SearchEngine> {
    use crate::error::WrapErr;
    use indicatif::{ProgressBar, ProgressStyle};

    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{elapsed}]") {
        progress.set_style(style);
    }
    progress.enable_steady_tick(std::time::Duration::from_millis(120));
    progress.set_message("正在初始化索引...");

    let bar = progress.clone();
    let engine = tokio::task::spawn_blocking(move || {
        search_core::SearchEngine::new_with_progress(search_config, |n| {
            bar.set_message(format!("已索引 {} 个文档", n));
        })
    })
    .await
    .wrap_err("索引构建任务异常退出")?
    .map_err(|e| crate::error::error!("创建搜索引擎失败: {:#}", e))?;

    progress.finish_and_clear();
    Ok(engine)
}
