use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Read-only view of the invocation a tool runs inside.
///
/// This is the whole context surface: shiori has no sessions, memory or
/// artifacts, so tools only see who is calling them and under which
/// invocation.
pub trait ReadonlyContext: Send + Sync {
    fn invocation_id(&self) -> &str;
    fn agent_name(&self) -> &str;
    fn app_name(&self) -> &str;
}

pub trait ToolContext: ReadonlyContext {
    fn function_call_id(&self) -> &str;
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    fn parameters_schema(&self) -> Option<Value> {
        None
    }
    fn response_schema(&self) -> Option<Value> {
        None
    }
    async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value>;
}

/// A named collection of tools an orchestration layer can enumerate
/// before deciding what to expose to a model.
#[async_trait]
pub trait Toolset: Send + Sync {
    fn name(&self) -> &str;
    async fn tools(&self, ctx: Arc<dyn ReadonlyContext>) -> Result<Vec<Arc<dyn Tool>>>;
}
