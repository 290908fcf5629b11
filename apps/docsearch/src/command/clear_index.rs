// apps/docsearch/src/command/clear_index.rs
//! 清除索引命令

use super::Command;
use crate::config::Config;
use crate::error::Result;
use std::fs;
use std::path::Path;

pub struct ClearIndexCommand {
    config: Config,
}

impl ClearIndexCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 删除目录，返回删除的文件数与字节数
    fn remove_dir(path: &Path) -> Result<(usize, u64)> {
        if !path.exists() {
            return Ok((0, 0));
        }

        let (file_count, total_size) = Self::count_dir_size(path);
        fs::remove_dir_all(path)?;

        Ok((file_count, total_size))
    }

    fn count_dir_size(path: &Path) -> (usize, u64) {
        let mut file_count = 0;
        let mut total_size = 0u64;

        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                if let Ok(metadata) = entry.metadata() {
                    if metadata.is_file() {
                        total_size += metadata.len();
                        file_count += 1;
                    } else if metadata.is_dir() {
                        let (sub_count, sub_size) = Self::count_dir_size(&entry.path());
                        file_count += sub_count;
                        total_size += sub_size;
                    }
                }
            }
        }

        (file_count, total_size)
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.2} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.2} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.2} KB", bytes as f64 / KB as f64)
        } else {
            format!("{} bytes", bytes)
        }
    }
}

#[async_trait::async_trait]
impl Command for ClearIndexCommand {
    async fn execute(&self) -> Result<()> {
        let index_path = self.config.index_dir();
        println!("🗑️  清除索引: {:?}", index_path);

        let (count, size) = Self::remove_dir(&index_path)?;
        if count > 0 || size > 0 {
            println!("✅ 已删除 {} 个文件, {}", count, Self::format_size(size));
        } else {
            println!("⏭️  索引目录为空或不存在");
        }
        println!("💡 提示: 运行 'cargo run -p docsearch -- index' 重新建立索引");

        Ok(())
    }
}
