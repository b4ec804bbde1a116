use shiori_core::{ReadonlyContext, ToolContext};
use uuid::Uuid;

/// Concrete [`ToolContext`] for orchestration layers that dispatch tools
/// directly, without a surrounding conversation runtime. Invocation and
/// call ids are fresh v4 uuids.
pub struct LocalContext {
    invocation_id: String,
    function_call_id: String,
    app_name: String,
    agent_name: String,
}

impl LocalContext {
    pub fn new(app_name: impl Into<String>, agent_name: impl Into<String>) -> Self {
        Self {
            invocation_id: Uuid::new_v4().to_string(),
            function_call_id: Uuid::new_v4().to_string(),
            app_name: app_name.into(),
            agent_name: agent_name.into(),
        }
    }
}

impl ReadonlyContext for LocalContext {
    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    fn agent_name(&self) -> &str {
        &self.agent_name
    }

    fn app_name(&self) -> &str {
        &self.app_name
    }
}

impl ToolContext for LocalContext {
    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_context_ids_are_unique() {
        let a = LocalContext::new("app", "agent");
        let b = LocalContext::new("app", "agent");
        assert_ne!(a.invocation_id(), b.invocation_id());
        assert_ne!(a.function_call_id(), b.function_call_id());
        assert_eq!(a.agent_name(), "agent");
        assert_eq!(a.app_name(), "app");
    }
}
