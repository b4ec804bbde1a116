//! # shiori-agent
//!
//! Declarative agent definitions: what an agent is called, which model it
//! targets, what it is instructed to do, and which tools and sub-agents it
//! carries. Definitions are inert configuration — the LLM runtime that
//! executes them lives outside this workspace.

pub mod definition;
pub mod loader;

pub use definition::{AgentBuilder, AgentDefinition};
pub use loader::{AgentLoader, MultiAgentLoader, SingleAgentLoader};
