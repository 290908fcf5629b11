// search-core/src/query.rs
//! 查询引擎
//!
//! 将原始查询字符串按单一字段解析，在索引上执行并整理为结果契约

use std::path::{Component, Path};

use tantivy::query::QueryParser;

use crate::config::TargetField;
use crate::error::SearchError;
use crate::format::{create_search_result, SearchOutcome, SearchResponse, DESCRIPTION_PLACEHOLDER};
use crate::store::IndexStore;

/// 查询执行上下文
pub struct QueryContext<'a> {
    pub store: &'a IndexStore,
    pub field: TargetField,
    pub limit: usize,
    /// 语料根目录，displayUrl 相对于它
    pub corpus_root: &'a Path,
    /// 站点根目录，url 相对于它
    pub site_root: &'a Path,
}

/// 执行查询
///
/// 查询为空（或只有空白）时返回 [`SearchOutcome::Empty`]，
/// 没有匹配时返回结果列表为空的完整响应
pub fn execute_search(ctx: &QueryContext, raw_query: Option<&str>) -> Result<SearchOutcome, SearchError> {
    let query_str = match raw_query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Ok(SearchOutcome::Empty),
    };

    tracing::debug!("[搜索] 字段: {}, 查询字符串: '{}'", ctx.field.as_str(), query_str);

    let target = ctx.store.fields().target(ctx.field);
    let mut query_parser = QueryParser::for_index(ctx.store.index(), vec![target]);
    // 多个词默认取交集
    query_parser.set_conjunction_by_default();

    let query = query_parser.parse_query(query_str).map_err(|source| {
        tracing::warn!("[搜索] 查询语法错误: '{}' - {}", query_str, source);
        SearchError::MalformedQuery {
            query: query_str.to_string(),
            source,
        }
    })?;

    let hits = ctx.store.search(query.as_ref(), ctx.limit)?;
    tracing::debug!("[搜索] 找到 {} 个文档", hits.len());

    let results = hits
        .into_iter()
        .map(|hit| {
            let path = Path::new(&hit.record.path);
            let description = if hit.record.description.is_empty() {
                DESCRIPTION_PLACEHOLDER.to_string()
            } else {
                hit.record.description
            };

            create_search_result(
                hit.record.title,
                web_relative_url(path, ctx.site_root),
                web_relative_url(path, ctx.corpus_root),
                description,
            )
        })
        .collect();

    Ok(SearchOutcome::Results(SearchResponse::new(results)))
}

/// 计算站内 URL：去掉根目录前缀，用 `/` 连接，并保证以 `/` 开头
///
/// 不在根目录之下的路径保留完整路径
pub fn web_relative_url(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::IndexRecord;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("/docs/psapi/foo.md", "/docs", "/psapi/foo.md")]
    #[case("/docs/psapi/foo.md", "/docs/", "/psapi/foo.md")]
    #[case("/docs/a.md", "/docs", "/a.md")]
    #[case("/docs", "/docs", "/")]
    #[case("/elsewhere/b.md", "/docs", "/elsewhere/b.md")]
    #[case("/docs-old/c.md", "/docs", "/docs-old/c.md")]
    fn test_web_relative_url(#[case] path: &str, #[case] root: &str, #[case] expected: &str) {
        assert_eq!(web_relative_url(Path::new(path), Path::new(root)), expected);
    }

    fn store_with(records: &[IndexRecord]) -> (TempDir, IndexStore) {
        let dir = TempDir::new().unwrap();
        let store = IndexStore::create_empty(dir.path()).unwrap();
        let mut writer = store.writer(50_000_000).unwrap();
        for record in records {
            writer.add_document(record).unwrap();
        }
        writer.commit().unwrap();
        (dir, store)
    }

    fn record(path: &str, title: &str, content: &str, description: &str) -> IndexRecord {
        IndexRecord {
            title: title.to_string(),
            content: content.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        }
    }

    fn context<'a>(store: &'a IndexStore, field: TargetField) -> QueryContext<'a> {
        QueryContext {
            store,
            field,
            limit: 10,
            corpus_root: Path::new("/docs/psapi"),
            site_root: Path::new("/docs"),
        }
    }

    fn results(outcome: SearchOutcome) -> SearchResponse {
        match outcome {
            SearchOutcome::Results(response) => response,
            SearchOutcome::Empty => panic!("期望得到结果列表"),
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn test_empty_query(#[case] raw: Option<&str>) {
        let (_dir, store) = store_with(&[]);
        let outcome = execute_search(&context(&store, TargetField::Title), raw).unwrap();
        assert_eq!(outcome, SearchOutcome::Empty);
    }

    #[test]
    fn test_no_match_is_not_empty_query() {
        let (_dir, store) = store_with(&[record("/docs/psapi/a.md", "Process Status API", "", "")]);
        let outcome = execute_search(&context(&store, TargetField::Title), Some("xyzzy-no-such-term")).unwrap();
        assert!(!outcome.is_empty_query());
        assert!(results(outcome).results.is_empty());
    }

    #[test]
    fn test_urls_and_description() {
        let (_dir, store) = store_with(&[
            record("/docs/psapi/nf-psapi-enumprocesses.md", "EnumProcesses function", "", "Retrieves process identifiers."),
            record("/docs/psapi/index.md", "Process Status API", "", ""),
        ]);

        let response = results(
            execute_search(&context(&store, TargetField::Title), Some("EnumProcesses")).unwrap(),
        );
        assert_eq!(response.results.len(), 1);
        let hit = &response.results[0];
        assert_eq!(hit.url, "/psapi/nf-psapi-enumprocesses.md");
        assert_eq!(hit.display_url.content, "/nf-psapi-enumprocesses.md");
        assert_eq!(hit.description, "Retrieves process identifiers.");

        let response = results(
            execute_search(&context(&store, TargetField::Title), Some("Status")).unwrap(),
        );
        assert_eq!(response.results[0].description, DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    fn test_single_field_parsing() {
        let (_dir, store) = store_with(&[
            record("/docs/psapi/a.md", "Process Status API", "EnumProcesses lists running processes.", ""),
        ]);

        let by_title = execute_search(&context(&store, TargetField::Title), Some("EnumProcesses")).unwrap();
        assert!(results(by_title).results.is_empty());

        let by_content = execute_search(&context(&store, TargetField::Content), Some("EnumProcesses")).unwrap();
        assert_eq!(results(by_content).results.len(), 1);
    }

    #[rstest]
    #[case("Process Tool", 0)]
    #[case("Process Status", 1)]
    #[case("Tool Functions", 1)]
    #[case("Process OR Tool", 2)]
    fn test_terms_are_combined_with_and(#[case] raw: &str, #[case] expected: usize) {
        let (_dir, store) = store_with(&[
            record("/docs/psapi/a.md", "Process Status API", "", ""),
            record("/docs/psapi/b.md", "Tool Help Functions", "", ""),
        ]);
        let response = results(execute_search(&context(&store, TargetField::Title), Some(raw)).unwrap());
        assert_eq!(response.results.len(), expected);
    }

    #[test]
    fn test_limit_caps_results() {
        let records: Vec<IndexRecord> = (0..5)
            .map(|i| record(&format!("/docs/psapi/{}.md", i), "Module Function", "", ""))
            .collect();
        let (_dir, store) = store_with(&records);

        let mut ctx = context(&store, TargetField::Title);
        ctx.limit = 3;
        let response = results(execute_search(&ctx, Some("module")).unwrap());
        assert_eq!(response.results.len(), 3);
    }

    #[test]
    fn test_malformed_query_is_client_error() {
        let (_dir, store) = store_with(&[]);
        let err = execute_search(&context(&store, TargetField::Title), Some("nosuchfield:abc")).unwrap_err();
        assert!(matches!(err, SearchError::MalformedQuery { .. }));
        assert!(err.is_client_error());
    }
}
