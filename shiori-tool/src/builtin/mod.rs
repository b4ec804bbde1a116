mod recommend;
mod weather;

pub use recommend::RecommendTool;
pub use weather::WeatherTool;
