// search-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 搜索引擎配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 文档语料根目录（遍历起点，也是 displayUrl 的基准目录）
    pub corpus_root: PathBuf,
    /// 站点根目录，用于计算 url；不设置时与 corpus_root 相同
    pub site_root: Option<PathBuf>,
    pub index: IndexConfig,
    pub query: QueryConfig,
    pub walker: WalkerConfig,
}

/// 索引配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexConfig {
    pub storage_path: PathBuf,
    pub writer_memory: usize,
    pub rebuild: RebuildPolicy,
}

/// 索引重建策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RebuildPolicy {
    /// 索引已存在时直接打开，不检测内容是否过期
    #[default]
    IfMissing,
    /// 每次启动都删除旧索引并全量重建
    Always,
}

/// 查询配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryConfig {
    /// 查询解析器使用的字段（一次只搜索一个字段）
    pub field: TargetField,
    /// 单次查询返回的最大结果数
    pub limit: usize,
}

/// 可查询字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetField {
    #[default]
    Title,
    Content,
}

/// Walker 配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalkerConfig {
    pub skip_hidden: bool,
    pub follow_symlinks: bool,
    /// 0 表示不限制深度
    pub max_depth: usize,
    pub extensions: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            corpus_root: PathBuf::from("./docs"),
            site_root: None,
            index: IndexConfig::default(),
            query: QueryConfig::default(),
            walker: WalkerConfig::default(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("./storage"),
            writer_memory: 50_000_000,
            rebuild: RebuildPolicy::default(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            field: TargetField::default(),
            limit: 10,
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            skip_hidden: false,
            follow_symlinks: false,
            max_depth: 0,
            extensions: vec!["md".to_string()],
        }
    }
}

impl SearchConfig {
    /// 计算 url 时使用的根目录
    pub fn site_root(&self) -> &Path {
        self.site_root.as_deref().unwrap_or(&self.corpus_root)
    }
}

impl TargetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetField::Title => crate::schema::FIELD_TITLE,
            TargetField::Content => crate::schema::FIELD_CONTENT,
        }
    }
}

impl std::str::FromStr for TargetField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(TargetField::Title),
            "content" | "body" => Ok(TargetField::Content),
            other => Err(format!("不支持的查询字段: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SearchConfig = toml::from_str(
            r#"
corpus_root = "/docs"

[query]
field = "content"
"#,
        )
        .unwrap();

        assert_eq!(config.corpus_root, PathBuf::from("/docs"));
        assert_eq!(config.query.field, TargetField::Content);
        assert_eq!(config.query.limit, 10);
        assert_eq!(config.index.rebuild, RebuildPolicy::IfMissing);
        assert_eq!(config.walker.extensions, vec!["md"]);
    }

    #[test]
    fn test_rebuild_policy_kebab_case() {
        let config: SearchConfig = toml::from_str("[index]\nrebuild = \"always\"\n").unwrap();
        assert_eq!(config.index.rebuild, RebuildPolicy::Always);
    }

    #[test]
    fn test_site_root_defaults_to_corpus_root() {
        let mut config = SearchConfig {
            corpus_root: PathBuf::from("/docs/psapi"),
            ..Default::default()
        };
        assert_eq!(config.site_root(), Path::new("/docs/psapi"));

        config.site_root = Some(PathBuf::from("/docs"));
        assert_eq!(config.site_root(), Path::new("/docs"));
    }

    #[rstest]
    #[case("title", TargetField::Title)]
    #[case("Content", TargetField::Content)]
    #[case("body", TargetField::Content)]
    fn test_target_field_from_str(#[case] input: &str, #[case] expected: TargetField) {
        assert_eq!(input.parse::<TargetField>().unwrap(), expected);
    }

    #[test]
    fn test_target_field_rejects_unknown() {
        assert!("path".parse::<TargetField>().is_err());
    }
}
