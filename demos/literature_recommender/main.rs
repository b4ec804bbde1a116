use anyhow::Result;
use serde_json::json;
use shiori_agent::AgentDefinition;
use shiori_core::{init_telemetry, Agent, ToolContext};
use shiori_tool::{JsonFileBooks, LocalContext, RecommendTool, ToolRegistry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry("literature-recommender");

    let books_path = std::env::var("SHIORI_BOOKS_FILE")
        .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/books.json").to_string());
    let recommend = Arc::new(RecommendTool::new(Arc::new(JsonFileBooks::new(&books_path))));

    let mut registry = ToolRegistry::new("literature_tools");
    registry.register(recommend.clone())?;

    let agent = AgentDefinition::builder("literature_agent")
        .description("文学作品の中から気に入ったものを探すエージェントです。")
        .model("gemini-2.0-flash")
        .instruction(
            "あなたはおすすめの文学作品の情報を教えてくれるエージェントです。\
             recommend ツールでユーザーの質問にマッチする文学作品を検索してください。",
        )
        .tool(recommend)
        .build()?;

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "「海」や「冒険」が出てくる物語を読みたい".to_string());
    tracing::info!(agent = agent.name(), query, "dispatching query");

    let ctx = Arc::new(LocalContext::new("shiori-demos", "literature_agent")) as Arc<dyn ToolContext>;
    let result = registry.dispatch("recommend", ctx, json!({"query": query})).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
