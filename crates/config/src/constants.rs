pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "docsearch";
pub const APP_NAME: &str = "docsearch";

/// 应用配置文件名（位于配置目录下）
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// 索引目录名（位于缓存目录下）
pub const INDEX_DIR_NAME: &str = "index";
