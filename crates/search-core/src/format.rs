// search-core/src/format.rs
//! 结果格式化 - 对外 JSON 结果契约

use serde::{Deserialize, Serialize};

/// 固定的更新时间占位（不跟踪文档时间戳）
pub const LAST_UPDATED_PLACEHOLDER: &str = "2000-01-01T00:00:00+00:00";

/// 文档没有描述时使用的占位文本
pub const DESCRIPTION_PLACEHOLDER: &str = "description";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub products: Vec<String>,
    pub category: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitHighlight {
    pub start: usize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedText {
    pub content: String,
    pub hit_highlights: Vec<HitHighlight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub display_url: HighlightedText,
    pub description: String,
    pub descriptions: Vec<HighlightedText>,
    pub last_updated_date: String,
    pub breadcrumbs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub facets: Facets,
    pub results: Vec<SearchResult>,
}

/// 一次查询的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 未提供查询字符串（区别于"没有匹配"）
    Empty,
    Results(SearchResponse),
}

/// 构造单条结果
///
/// 高亮、更新时间与面包屑均为固定占位
pub fn create_search_result(
    title: impl Into<String>,
    url: impl Into<String>,
    display_url: impl Into<String>,
    description: impl Into<String>,
) -> SearchResult {
    let description = description.into();

    SearchResult {
        title: title.into(),
        url: url.into(),
        display_url: HighlightedText {
            content: display_url.into(),
            hit_highlights: vec![],
        },
        descriptions: vec![HighlightedText {
            content: description.clone(),
            hit_highlights: vec![HitHighlight { start: 0, length: 0 }],
        }],
        description,
        last_updated_date: LAST_UPDATED_PLACEHOLDER.to_string(),
        breadcrumbs: vec![],
    }
}

impl SearchResponse {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            facets: Facets::default(),
            results,
        }
    }
}

impl SearchOutcome {
    pub fn is_empty_query(&self) -> bool {
        matches!(self, SearchOutcome::Empty)
    }

    /// 渲染响应体：空查询返回空串，否则返回 JSON
    pub fn to_body(&self) -> serde_json::Result<String> {
        match self {
            SearchOutcome::Empty => Ok(String::new()),
            SearchOutcome::Results(response) => serde_json::to_string(response),
        }
    }
}
