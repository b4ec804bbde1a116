use crate::books::BookProvider;
use crate::search::{search_books, SearchError, SearchOutcome};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shiori_core::{Result, Tool, ToolContext};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct RecommendParams {
    /// ユーザーからの質問。検索キーワードは「」で囲んで指定します。
    query: String,
}

/// Recommends books from an injected corpus by 「…」-quoted keyword match.
///
/// Every failure path comes back as a well-formed
/// `{"status":"failure","message":...}` envelope; `execute` itself never
/// errors.
pub struct RecommendTool {
    books: Arc<dyn BookProvider>,
}

impl RecommendTool {
    pub fn new(books: Arc<dyn BookProvider>) -> Self {
        Self { books }
    }
}

#[async_trait]
impl Tool for RecommendTool {
    fn name(&self) -> &str {
        "recommend"
    }

    fn description(&self) -> &str {
        "ユーザーからの質問に対して、おすすめの文学作品の情報を提供します。\
         キーワードは「」で囲んで指定してください。"
    }

    fn parameters_schema(&self) -> Option<Value> {
        serde_json::to_value(schemars::schema_for!(RecommendParams)).ok()
    }

    fn response_schema(&self) -> Option<Value> {
        serde_json::to_value(schemars::schema_for!(SearchOutcome)).ok()
    }

    async fn execute(&self, _ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
        // A missing or non-string argument behaves as a blank query.
        let query = args.get("query").and_then(Value::as_str).unwrap_or_default();

        let books = self.books.load().await;
        let outcome = SearchOutcome::from(search_books(query, &books));

        match serde_json::to_value(&outcome) {
            Ok(value) => Ok(value),
            Err(err) => Ok(json!({
                "status": "failure",
                "message": SearchError::Internal(err.to_string()).to_string(),
            })),
        }
    }
}
