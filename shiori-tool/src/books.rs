use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Opaque book identifier. Corpora in the wild use both numeric and string
/// ids, so both deserialize without the search layer caring which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum BookId {
    Number(i64),
    Text(String),
}

/// A single entry of the search corpus. Read-only for the lifetime of a
/// search; `content` is the body the keyword match runs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// The `{id, title}` pair returned for a matching book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BookMatch {
    pub id: BookId,
    pub title: String,
}

impl From<&BookRecord> for BookMatch {
    fn from(book: &BookRecord) -> Self {
        Self { id: book.id.clone(), title: book.title.clone() }
    }
}

/// Source of the book corpus, injected into tools that search it.
///
/// Infallible by contract: any load problem surfaces as an empty collection,
/// which the search layer reports as missing data. Whether a provider
/// reloads per call or caches is its own choice.
#[async_trait]
pub trait BookProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn load(&self) -> Vec<BookRecord>;
}

/// Reads a JSON array of book records from a file on every load.
pub struct JsonFileBooks {
    path: PathBuf,
}

impl JsonFileBooks {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BookProvider for JsonFileBooks {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn load(&self) -> Vec<BookRecord> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "book corpus unreadable");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(books) => books,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "book corpus malformed");
                Vec::new()
            }
        }
    }
}

/// Fixed in-memory corpus, for tests and demos.
pub struct StaticBooks {
    books: Vec<BookRecord>,
}

impl StaticBooks {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }
}

#[async_trait]
impl BookProvider for StaticBooks {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> Vec<BookRecord> {
        self.books.clone()
    }
}
