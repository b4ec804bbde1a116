use anyhow::Result;
use serde_json::json;
use shiori_agent::AgentDefinition;
use shiori_core::{init_telemetry, ToolContext};
use shiori_tool::{LocalContext, ToolRegistry, WeatherTool};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry("weather-lookup");

    let weather = Arc::new(WeatherTool::new());
    let mut registry = ToolRegistry::new("weather_tools");
    registry.register(weather.clone())?;

    let _agent = AgentDefinition::builder("weather_agent")
        .description("A agent that can answer questions about the weather in the city which user asked.")
        .model("claude-3-5-sonnet-20240620")
        .instruction(
            "You are a helpful weather assistant. You can use the get_weather tool \
             to get the weather information for the city which user asked.",
        )
        .tool(weather)
        .build()?;

    let city = std::env::args().nth(1).unwrap_or_else(|| "Tokyo".to_string());

    let ctx = Arc::new(LocalContext::new("shiori-demos", "weather_agent")) as Arc<dyn ToolContext>;
    let result = registry.dispatch("get_weather", ctx, json!({"city": city})).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
