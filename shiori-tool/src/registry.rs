use async_trait::async_trait;
use serde_json::Value;
use shiori_core::{ReadonlyContext, Result, ShioriError, Tool, ToolContext, Toolset};
use std::collections::HashMap;
use std::sync::Arc;

/// Named capability set: maps tool names to callables and dispatches
/// invocations by name. Registration order is preserved for listing.
pub struct ToolRegistry {
    name: String,
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), tools: Vec::new(), index: HashMap::new() }
    }

    /// Registers a tool under its own name. Names are unique per registry.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let name = tool.name().to_string();
        if self.index.contains_key(&name) {
            return Err(ShioriError::Config(format!("Duplicate tool name: {name}")));
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.index.get(name).map(|&i| self.tools[i].clone())
    }

    /// Tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invokes a registered tool by name.
    pub async fn dispatch(
        &self,
        name: &str,
        ctx: Arc<dyn ToolContext>,
        args: Value,
    ) -> Result<Value> {
        let tool = self.get(name).ok_or_else(|| {
            ShioriError::Tool(format!(
                "Tool '{}' not found. Available tools: {:?}",
                name,
                self.tool_names()
            ))
        })?;

        tracing::debug!(
            tool = name,
            function_call_id = ctx.function_call_id(),
            agent = ctx.agent_name(),
            "dispatching tool call"
        );
        tool.execute(ctx, args).await
    }
}

#[async_trait]
impl Toolset for ToolRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    async fn tools(&self, _ctx: Arc<dyn ReadonlyContext>) -> Result<Vec<Arc<dyn Tool>>> {
        Ok(self.tools.clone())
    }
}
