//! Turn manager: the combat rules exposed as a chat-model tool.
//!
//! This crate sits between the chat layer and `turn-core`. It describes the
//! `calculateOutcome` function to the model, dispatches the model's tool
//! calls, and strictly validates the final `{scenario, outcome}` reply.
//!
//! # Flow
//!
//! ```text
//! chat endpoint ──tool call──▶ TurnManagerPlugin::invoke ──▶ OutcomeCalculator
//!      │                                   │
//!      │◀──────── outcome JSON ────────────┘
//!      ▼
//! final reply ──▶ parse_combat_result ──▶ CombatResult::verify
//! ```
pub mod error;
pub mod plugin;
pub mod response;
pub mod tool;

pub use error::{ErrorSeverity, ResponseError, ToolError, TurnError};
pub use plugin::TurnManagerPlugin;
pub use response::{CombatResult, parse_combat_result, parse_scenario};
pub use tool::{CALCULATE_OUTCOME, PLUGIN_NAME, ToolDefinition};

pub use turn_core;
