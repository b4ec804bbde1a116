use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shiori_core::{Result, Tool, ToolContext};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct WeatherParams {
    /// The name of the city (e.g., "New York", "London", "Paris", "Tokyo").
    city: String,
}

/// Mock weather lookup over a fixed four-city table.
#[derive(Default)]
pub struct WeatherTool;

impl WeatherTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Retrieves the current weather report for a specified city."
    }

    fn parameters_schema(&self) -> Option<Value> {
        serde_json::to_value(schemars::schema_for!(WeatherParams)).ok()
    }

    async fn execute(&self, _ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
        let city = args.get("city").and_then(Value::as_str).unwrap_or_default();
        tracing::info!(city, "get_weather called");

        let normalized = city.to_lowercase().replace(' ', "");
        let report = match normalized.as_str() {
            "newyork" => {
                "The weather in New York is sunny with a temperature of 25 degrees celsius."
            }
            "london" => "It's cloudy in London with a temperature of 18 degrees celsius.",
            "paris" => "It's sunny in Paris with a temperature of 22 degrees celsius.",
            "tokyo" => "It's rainy in Tokyo with a temperature of 28 degrees celsius.",
            _ => {
                return Ok(json!({
                    "status": "error",
                    "error_message": format!("Weather information for '{city}' is not available."),
                }));
            }
        };

        Ok(json!({"status": "success", "report": report}))
    }
}
