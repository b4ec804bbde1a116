//! # shiori-core
//!
//! Core traits and types for shiori agents and tools.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions shared by the rest of
//! the workspace:
//!
//! - [`Agent`] - Declarative agent configuration
//! - [`Tool`] / [`Toolset`] - Callable capabilities exposed to agents
//! - [`ShioriError`] / [`Result`] - Unified error handling
//! - [`init_telemetry`] - Structured logging setup
//!
//! The traits deliberately stop at the configuration boundary: model
//! invocation, dialogue state and sub-agent routing belong to the external
//! orchestration layer that consumes these types.

pub mod agent;
pub mod error;
pub mod telemetry;
pub mod tool;

pub use agent::Agent;
pub use error::{Result, ShioriError};
pub use telemetry::init_telemetry;
pub use tool::{ReadonlyContext, Tool, ToolContext, Toolset};
