use crate::error::{error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use ::config::{create_strategy, resolve_dir, AppStrategy};
use search_core::{IndexConfig, QueryConfig, RebuildPolicy, SearchConfig, TargetField, WalkerConfig};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default="default_config", deny_unknown_fields)]
pub struct Config {
    pub cache_dir: PathBuf,
    /// 文档语料根目录
    pub corpus_root: Option<PathBuf>,
    /// 站点根目录（url 相对于它），默认与 corpus-root 相同
    pub site_root: Option<PathBuf>,
    /// 索引目录，默认 `<cache-dir>/index`
    pub index_dir: Option<PathBuf>,
    pub target_field: TargetField,
    pub result_limit: usize,
    pub rebuild: RebuildPolicy,
}


fn default_config() -> Config {
    let cache_dir = match create_strategy() {
        Ok(strategy) => resolve_dir("CACHE_DIRECTORY", &strategy, |s| {
            Some(s.cache_dir())
        }),
        Err(_) => std::env::temp_dir().join(::config::constants::APP_NAME),
    };

    Config {
        cache_dir,
        corpus_root: None,  // 默认为空，要求用户配置
        site_root: None,
        index_dir: None,
        target_field: TargetField::default(),
        result_limit: QueryConfig::default().limit,
        rebuild: RebuildPolicy::default(),
    }
}
    

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        if user_config.result_limit == 0 {
            return Err(error!("result-limit 必须大于 0"));
        }
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = strategy.config_dir().join(::config::constants::CONFIG_FILE_NAME);
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Config> {
        match std::fs::read_to_string(config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // 配置文件不存在，创建示例配置文件
                Self::create_example_config(config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn index_dir(&self) -> PathBuf {
        self.index_dir
            .clone()
            .unwrap_or_else(|| ::config::default_index_dir(&self.cache_dir))
    }

    /// 转换为搜索核心配置，命令行参数优先于配置文件
    pub fn search_config(
        &self,
        corpus_root: Option<PathBuf>,
        field: Option<TargetField>,
        force_rebuild: bool,
    ) -> Result<SearchConfig> {
        let corpus_root = corpus_root
            .or_else(|| self.corpus_root.clone())
            .ok_or_else(|| error!("未配置语料目录：请在配置文件中设置 corpus-root 或在命令行中指定"))?;

        let rebuild = if force_rebuild { RebuildPolicy::Always } else { self.rebuild };

        Ok(SearchConfig {
            corpus_root,
            site_root: self.site_root.clone(),
            index: IndexConfig {
                storage_path: self.index_dir(),
                rebuild,
                ..Default::default()
            },
            query: QueryConfig {
                field: field.unwrap_or(self.target_field),
                limit: self.result_limit,
            },
            walker: WalkerConfig::default(),
        })
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        use std::io::Write;
        
        // 确保配置目录存在
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# docsearch 配置文件
#
# 此文件在首次运行时自动创建
# 配置修改后重启生效

# 文档语料根目录（Markdown 文件所在目录）
# corpus-root = "/srv/sdk-api-docs/sdk-api-src/content/psapi"

# 可选：站点根目录，结果中的 url 相对于它计算
# site-root = "/srv/sdk-api-docs/sdk-api-src/content"

# 查询字段："title" 或 "content"
# target-field = "title"

# 单次查询返回的最大结果数
# result-limit = 10

# 索引策略："if-missing"（已有索引时直接复用）或 "always"（每次重建）
# rebuild = "if-missing"

# 可选：自定义索引目录
# index-dir = "/custom/index/path"

# 可选：自定义缓存目录
# cache-dir = "/custom/cache/path"
"#;

        let mut file = std::fs::File::create(config_path)?;
        file.write_all(example_config.as_bytes())?;
        
        eprintln!("\n📝 已创建配置文件: {:?}", config_path);
        eprintln!("💡 请编辑配置文件，设置 corpus-root");
        eprintln!("   然后运行: cargo run -p docsearch -- index\n");
        
        Ok(())
    }
}
