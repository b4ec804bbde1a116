use serde_json::json;
use shiori_core::{ReadonlyContext, ShioriError, Tool, ToolContext, Toolset};
use shiori_tool::{FunctionTool, LocalContext, ToolRegistry, WeatherTool};
use std::sync::Arc;

fn echo_tool(name: &str) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(name, "Echoes its arguments", |_ctx, args| async move {
        Ok(args)
    }))
}

#[tokio::test]
async fn test_register_and_dispatch() {
    let mut registry = ToolRegistry::new("test_registry");
    registry.register(echo_tool("echo")).unwrap();

    let ctx = Arc::new(LocalContext::new("test-app", "test-agent")) as Arc<dyn ToolContext>;
    let result = registry.dispatch("echo", ctx, json!({"x": 1})).await.unwrap();
    assert_eq!(result, json!({"x": 1}));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut registry = ToolRegistry::new("test_registry");
    registry.register(echo_tool("echo")).unwrap();

    let err = registry.register(echo_tool("echo")).unwrap_err();
    assert!(matches!(err, ShioriError::Config(_)));
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn test_dispatch_unknown_tool_fails() {
    let registry = ToolRegistry::new("test_registry");
    let ctx = Arc::new(LocalContext::new("test-app", "test-agent")) as Arc<dyn ToolContext>;

    let err = registry.dispatch("missing", ctx, json!({})).await.unwrap_err();
    assert!(matches!(err, ShioriError::Tool(_)));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_tool_names_preserve_registration_order() {
    let mut registry = ToolRegistry::new("test_registry");
    registry.register(echo_tool("zeta")).unwrap();
    registry.register(Arc::new(WeatherTool::new())).unwrap();
    registry.register(echo_tool("alpha")).unwrap();

    assert_eq!(registry.tool_names(), vec!["zeta", "get_weather", "alpha"]);
}

#[tokio::test]
async fn test_registry_as_toolset() {
    let mut registry = ToolRegistry::new("capabilities");
    registry.register(echo_tool("echo")).unwrap();
    registry.register(Arc::new(WeatherTool::new())).unwrap();

    assert_eq!(Toolset::name(&registry), "capabilities");
    let ctx = Arc::new(LocalContext::new("test-app", "test-agent")) as Arc<dyn ReadonlyContext>;
    let tools = registry.tools(ctx).await.unwrap();
    assert_eq!(tools.len(), 2);
}
