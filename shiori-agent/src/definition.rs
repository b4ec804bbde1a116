use shiori_core::{Agent, Result, ShioriError, Tool};
use std::collections::HashSet;
use std::sync::Arc;

/// Declarative configuration of one conversational agent: name, model id,
/// instruction, tools and sub-agents. The orchestration layer that talks
/// to the model consumes this; the definition itself never invokes
/// anything.
pub struct AgentDefinition {
    name: String,
    description: String,
    model: String,
    instruction: Option<String>,
    tools: Vec<Arc<dyn Tool>>,
    sub_agents: Vec<Arc<dyn Agent>>,
}

impl std::fmt::Debug for AgentDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("model", &self.model)
            .field("instruction", &self.instruction)
            .field("tools_count", &self.tools.len())
            .field("sub_agents_count", &self.sub_agents.len())
            .finish()
    }
}

impl AgentDefinition {
    pub fn builder(name: impl Into<String>) -> AgentBuilder {
        AgentBuilder::new(name)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Depth-first lookup of a named agent anywhere below this one.
    pub fn find_sub_agent(&self, name: &str) -> Option<Arc<dyn Agent>> {
        fn walk(agents: &[Arc<dyn Agent>], name: &str) -> Option<Arc<dyn Agent>> {
            for agent in agents {
                if agent.name() == name {
                    return Some(agent.clone());
                }
                if let Some(found) = walk(agent.sub_agents(), name) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.sub_agents, name)
    }
}

impl Agent for AgentDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn sub_agents(&self) -> &[Arc<dyn Agent>] {
        &self.sub_agents
    }
}

pub struct AgentBuilder {
    name: String,
    description: Option<String>,
    model: Option<String>,
    instruction: Option<String>,
    tools: Vec<Arc<dyn Tool>>,
    sub_agents: Vec<Arc<dyn Agent>>,
}

impl AgentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            model: None,
            instruction: None,
            tools: Vec::new(),
            sub_agents: Vec::new(),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn sub_agent(mut self, agent: Arc<dyn Agent>) -> Self {
        self.sub_agents.push(agent);
        self
    }

    pub fn build(self) -> Result<AgentDefinition> {
        if self.name.trim().is_empty() {
            return Err(ShioriError::Agent("Agent name is required".to_string()));
        }
        let model = self
            .model
            .ok_or_else(|| ShioriError::Agent("Model is required".to_string()))?;

        let mut seen = HashSet::new();
        for agent in &self.sub_agents {
            if !seen.insert(agent.name().to_string()) {
                return Err(ShioriError::Agent(format!(
                    "Duplicate sub-agent name: {}",
                    agent.name()
                )));
            }
        }

        Ok(AgentDefinition {
            name: self.name,
            description: self.description.unwrap_or_default(),
            model,
            instruction: self.instruction,
            tools: self.tools,
            sub_agents: self.sub_agents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> Arc<dyn Agent> {
        Arc::new(
            AgentDefinition::builder(name)
                .description("leaf agent")
                .model("gemini-2.0-flash")
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_builder_requires_model() {
        let err = AgentDefinition::builder("agent").build().unwrap_err();
        assert!(matches!(err, ShioriError::Agent(_)));
    }

    #[test]
    fn test_builder_requires_name() {
        let err = AgentDefinition::builder("  ").model("gemini-2.0-flash").build().unwrap_err();
        assert!(matches!(err, ShioriError::Agent(_)));
    }

    #[test]
    fn test_builder_rejects_duplicate_sub_agents() {
        let err = AgentDefinition::builder("root")
            .model("gemini-2.0-flash")
            .sub_agent(leaf("child"))
            .sub_agent(leaf("child"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate sub-agent name"));
    }

    #[test]
    fn test_find_sub_agent_walks_the_tree() {
        let grandchild = leaf("grandchild");
        let child = Arc::new(
            AgentDefinition::builder("child")
                .model("gemini-2.0-flash")
                .sub_agent(grandchild)
                .build()
                .unwrap(),
        ) as Arc<dyn Agent>;
        let root = AgentDefinition::builder("root")
            .model("gemini-2.0-flash")
            .sub_agent(child)
            .build()
            .unwrap();

        assert_eq!(root.find_sub_agent("grandchild").unwrap().name(), "grandchild");
        assert!(root.find_sub_agent("stranger").is_none());
    }

    #[test]
    fn test_definition_exposes_configuration() {
        let agent = AgentDefinition::builder("literature_agent")
            .description("文学作品の中から気に入ったものを探すエージェントです。")
            .model("gemini-2.0-flash")
            .instruction("おすすめの文学作品の情報を教えてください。")
            .build()
            .unwrap();

        assert_eq!(agent.name(), "literature_agent");
        assert_eq!(agent.model(), "gemini-2.0-flash");
        assert!(agent.instruction().unwrap().contains("文学作品"));
        assert!(agent.tools().is_empty());
    }
}
