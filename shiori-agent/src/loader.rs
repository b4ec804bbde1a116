use async_trait::async_trait;
use shiori_core::{Agent, Result, ShioriError};
use std::collections::HashMap;
use std::sync::Arc;

/// Looks up agent definitions by name for an external runtime.
#[async_trait]
pub trait AgentLoader: Send + Sync {
    /// Load an agent by name. An empty name resolves to the root agent.
    async fn load_agent(&self, name: &str) -> Result<Arc<dyn Agent>>;

    fn list_agents(&self) -> Vec<String>;

    fn root_agent(&self) -> Arc<dyn Agent>;
}

/// Loader over a single agent.
pub struct SingleAgentLoader {
    agent: Arc<dyn Agent>,
}

impl SingleAgentLoader {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl AgentLoader for SingleAgentLoader {
    async fn load_agent(&self, name: &str) -> Result<Arc<dyn Agent>> {
        if name.is_empty() || name == self.agent.name() {
            Ok(self.agent.clone())
        } else {
            Err(ShioriError::Config(format!(
                "Cannot load agent '{}' - use empty string or '{}'",
                name,
                self.agent.name()
            )))
        }
    }

    fn list_agents(&self) -> Vec<String> {
        vec![self.agent.name().to_string()]
    }

    fn root_agent(&self) -> Arc<dyn Agent> {
        self.agent.clone()
    }
}

/// Loader over several agents; the first one passed in is the root.
pub struct MultiAgentLoader {
    agent_map: HashMap<String, Arc<dyn Agent>>,
    root: Arc<dyn Agent>,
}

impl MultiAgentLoader {
    pub fn new(agents: Vec<Arc<dyn Agent>>) -> Result<Self> {
        if agents.is_empty() {
            return Err(ShioriError::Config(
                "MultiAgentLoader requires at least one agent".to_string(),
            ));
        }

        let root = agents[0].clone();
        let mut agent_map = HashMap::new();
        for agent in agents {
            let name = agent.name().to_string();
            if agent_map.contains_key(&name) {
                return Err(ShioriError::Config(format!("Duplicate agent name: {name}")));
            }
            agent_map.insert(name, agent);
        }

        Ok(Self { agent_map, root })
    }
}

#[async_trait]
impl AgentLoader for MultiAgentLoader {
    async fn load_agent(&self, name: &str) -> Result<Arc<dyn Agent>> {
        if name.is_empty() {
            return Ok(self.root.clone());
        }

        self.agent_map.get(name).cloned().ok_or_else(|| {
            ShioriError::Config(format!(
                "Agent '{}' not found. Available agents: {:?}",
                name,
                self.list_agents()
            ))
        })
    }

    fn list_agents(&self) -> Vec<String> {
        self.agent_map.keys().cloned().collect()
    }

    fn root_agent(&self) -> Arc<dyn Agent> {
        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AgentDefinition;

    fn agent(name: &str) -> Arc<dyn Agent> {
        Arc::new(
            AgentDefinition::builder(name).model("gemini-2.0-flash").build().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_single_loader_resolves_its_agent() {
        let loader = SingleAgentLoader::new(agent("solo"));

        assert_eq!(loader.load_agent("").await.unwrap().name(), "solo");
        assert_eq!(loader.load_agent("solo").await.unwrap().name(), "solo");
        assert!(loader.load_agent("other").await.is_err());
        assert_eq!(loader.list_agents(), vec!["solo"]);
    }

    #[tokio::test]
    async fn test_multi_loader_roots_on_first_agent() {
        let loader =
            MultiAgentLoader::new(vec![agent("root"), agent("weather"), agent("books")]).unwrap();

        assert_eq!(loader.root_agent().name(), "root");
        assert_eq!(loader.load_agent("").await.unwrap().name(), "root");
        assert_eq!(loader.load_agent("weather").await.unwrap().name(), "weather");
        assert!(loader.load_agent("missing").await.is_err());
        assert_eq!(loader.list_agents().len(), 3);
    }

    #[test]
    fn test_multi_loader_rejects_duplicates_and_empty() {
        assert!(MultiAgentLoader::new(vec![]).is_err());
        assert!(MultiAgentLoader::new(vec![agent("a"), agent("a")]).is_err());
    }
}
