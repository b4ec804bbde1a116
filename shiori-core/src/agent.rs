use std::sync::Arc;

/// A configured conversational agent.
///
/// shiori agents are declarative: they carry a name, a description and a
/// tree of sub-agents. Running them against a model is the job of whatever
/// orchestration layer consumes the definitions.
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn sub_agents(&self) -> &[Arc<dyn Agent>];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestAgent {
        name: String,
    }

    impl Agent for TestAgent {
        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> &str {
            "test agent"
        }

        fn sub_agents(&self) -> &[Arc<dyn Agent>] {
            &[]
        }
    }

    #[test]
    fn test_agent_trait() {
        let agent = TestAgent { name: "test".to_string() };
        assert_eq!(agent.name(), "test");
        assert_eq!(agent.description(), "test agent");
        assert!(agent.sub_agents().is_empty());
    }
}
