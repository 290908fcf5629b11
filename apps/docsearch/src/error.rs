pub type Result<T> = color_eyre::Result<T>;

pub use color_eyre::eyre::WrapErr;
pub use color_eyre::eyre::eyre as error;

use color_eyre::Report;
use search_core::SearchError;

/// 客户端错误（如查询语法错误）使用的退出码
pub const CLIENT_ERROR_EXIT_CODE: u8 = 2;

/// 取出应按客户端错误处理的查询错误
pub fn client_error(report: &Report) -> Option<&SearchError> {
    report
        .downcast_ref::<SearchError>()
        .filter(|e| e.is_client_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tantivy::query::QueryParserError;

    #[test]
    fn test_malformed_query_is_client_error() {
        let report: Report = SearchError::MalformedQuery {
            query: "nosuchfield:abc".to_string(),
            source: QueryParserError::FieldDoesNotExist("nosuchfield".to_string()),
        }
        .into();
        assert!(client_error(&report).is_some());
    }

    #[test]
    fn test_other_errors_are_not_client_errors() {
        let report: Report = SearchError::IndexNotInitialized.into();
        assert!(client_error(&report).is_none());

        let report = error!("配置错误");
        assert!(client_error(&report).is_none());
    }
}
