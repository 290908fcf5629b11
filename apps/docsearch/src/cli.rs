use clap::{ArgAction, Parser, Subcommand};
use search_core::TargetField;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the full-text index for the documentation corpus
    Index {
        /// 语料根目录（可选，不提供则使用配置文件中的 corpus-root）
        corpus_root: Option<PathBuf>,

        /// Delete any existing index and rebuild it from scratch
        #[arg(long)]
        rebuild: bool,
    },
    /// Run a single query and print the response body
    Search {
        /// 查询字符串；为空时输出空响应
        query: Option<String>,

        /// Field to search (title or content)
        #[arg(short, long)]
        field: Option<TargetField>,

        /// Delete any existing index and rebuild it before searching
        #[arg(long)]
        rebuild: bool,
    },
    /// Delete the on-disk index so the next start rebuilds it
    ClearIndex,
}
