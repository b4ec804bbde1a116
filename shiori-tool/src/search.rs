//! Keyword book search.
//!
//! Queries carry their search terms inside full-width corner brackets
//! (「…」); everything between a bracket pair is matched verbatim against
//! each book's content. Both operations are pure: identical inputs give
//! identical outputs, so concurrent callers need no coordination.

use crate::books::{BookMatch, BookRecord};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static KEYWORD_RE: OnceLock<Regex> = OnceLock::new();

fn keyword_re() -> &'static Regex {
    KEYWORD_RE.get_or_init(|| Regex::new("「(.*?)」").expect("keyword pattern is valid"))
}

/// Extracts every 「…」-quoted substring from a query.
///
/// Non-greedy: each bracket pair captures the shortest enclosed span.
/// Order of appearance is preserved and duplicates are kept. A query
/// without bracket pairs yields an empty vec; any string is valid input.
pub fn extract_keywords(query: &str) -> Vec<String> {
    keyword_re().captures_iter(query).map(|caps| caps[1].to_string()).collect()
}

/// Why a search produced no result. Display strings are the user-facing
/// failure messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("検索クエリが空です。")]
    EmptyQuery,

    #[error("書籍データの読み込みに失敗しました。")]
    NoData,

    #[error("検索中にエラーが発生しました: {0}")]
    Internal(String),
}

/// Scans `books` for entries whose content contains any 「…」-quoted
/// keyword of `query` as a literal, case-sensitive substring.
///
/// Matches come back in corpus order as `{id, title}` pairs. A query with
/// no quoted keywords succeeds with zero matches; a blank query or an
/// empty corpus is an error.
pub fn search_books(
    query: &str,
    books: &[BookRecord],
) -> std::result::Result<Vec<BookMatch>, SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    if books.is_empty() {
        return Err(SearchError::NoData);
    }

    let keywords = extract_keywords(query);
    tracing::debug!(?keywords, "extracted search keywords");

    Ok(books
        .iter()
        .filter(|book| keywords.iter().any(|keyword| book.content.contains(keyword.as_str())))
        .map(BookMatch::from)
        .collect())
}

/// The structured result object handed back over the tool-call interface:
/// `{"status":"success","books":[...]}` or
/// `{"status":"failure","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchOutcome {
    Success { books: Vec<BookMatch> },
    Failure { message: String },
}

impl From<SearchError> for SearchOutcome {
    fn from(err: SearchError) -> Self {
        SearchOutcome::Failure { message: err.to_string() }
    }
}

impl From<std::result::Result<Vec<BookMatch>, SearchError>> for SearchOutcome {
    fn from(result: std::result::Result<Vec<BookMatch>, SearchError>) -> Self {
        match result {
            Ok(books) => SearchOutcome::Success { books },
            Err(err) => err.into(),
        }
    }
}
