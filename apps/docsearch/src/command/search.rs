use super::{initialize_engine, Command};
use crate::error::{error, Result};
use crate::config::Config;
use search_core::{SearchGate, TargetField};
use tracing::info;

pub struct SearchCommand {
    config: Config,
    query: Option<String>,
    field: Option<TargetField>,
    rebuild: bool,
}

impl SearchCommand {
    pub fn new(cfg: Config, query: Option<String>, field: Option<TargetField>, rebuild: bool) -> Self {
        Self {
            config: cfg,
            query,
            field,
            rebuild,
        }
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let search_config = self.config.search_config(None, self.field, self.rebuild)?;

        // 索引就绪后才安装，安装前的查询会得到 IndexNotInitialized
        let gate = SearchGate::new();
        let engine = initialize_engine(search_config).await?;
        if gate.install(engine).is_err() {
            return Err(error!("搜索引擎重复初始化"));
        }

        info!("收到搜索请求: {:?}", self.query);
        // 查询错误原样返回，由 main 决定退出码
        let body = gate.search_body(self.query.as_deref())?;
        println!("{}", body);
        Ok(())
    }
}
