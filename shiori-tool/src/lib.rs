//! # shiori-tool
//!
//! Tool system for shiori agents.
//!
//! - [`FunctionTool`] - adapt async closures into tools
//! - [`ToolRegistry`] - named tool lookup and dispatch
//! - [`builtin`] - the book recommender and the weather mock
//! - [`books`] - the corpus model and [`BookProvider`] implementations
//! - [`search`] - the keyword-matching core

pub mod books;
pub mod builtin;
pub mod context;
pub mod function_tool;
pub mod registry;
pub mod search;

pub use books::{BookId, BookMatch, BookProvider, BookRecord, JsonFileBooks, StaticBooks};
pub use builtin::{RecommendTool, WeatherTool};
pub use context::LocalContext;
pub use function_tool::FunctionTool;
pub use registry::ToolRegistry;
pub use search::{extract_keywords, search_books, SearchError, SearchOutcome};
