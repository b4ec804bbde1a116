use anyhow::Result;
use shiori_agent::{AgentDefinition, AgentLoader, MultiAgentLoader};
use shiori_core::{init_telemetry, Agent};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry("playground");

    let greeting = Arc::new(
        AgentDefinition::builder("greeting_agent")
            .description("ユーザーからの挨拶に応答します。")
            .model("gemini-2.5-flash")
            .build()?,
    );

    let root = Arc::new(
        AgentDefinition::builder("playground_agent")
            .description("A playground agent for exploration and experimentation")
            .model("gemini-2.5-flash")
            .instruction(
                "あなたは優れたAIアシスタントです。sub_agentsやtoolsを利用して、\
                 得られた回答を加工して、ユーザーに返答してください。",
            )
            .sub_agent(greeting.clone() as Arc<dyn Agent>)
            .build()?,
    );

    let loader = MultiAgentLoader::new(vec![
        root.clone() as Arc<dyn Agent>,
        greeting as Arc<dyn Agent>,
    ])?;

    println!("root agent: {} ({})", root.name(), root.description());
    for sub in root.sub_agents() {
        println!("  sub-agent: {} ({})", sub.name(), sub.description());
    }

    let delegate = root.find_sub_agent("greeting_agent").expect("greeting agent is registered");
    tracing::info!(delegate = delegate.name(), "resolved delegation target");

    let loaded = loader.load_agent("").await?;
    println!("loader root: {}", loaded.name());

    Ok(())
}
