//! Print the tool descriptor.

use anyhow::Result;
use clap::Parser;
use turn_manager::ToolDefinition;

use crate::output::print_json;

/// Print the calculateOutcome tool definition
#[derive(Parser, Debug)]
pub struct Schema {
    /// Print the plugin-level descriptor instead of the OpenAI `tools` entry
    #[arg(long)]
    raw: bool,
}

impl Schema {
    pub fn execute(self) -> Result<()> {
        let definition = ToolDefinition::calculate_outcome();
        if self.raw {
            print_json(&definition)
        } else {
            print_json(&definition.to_openai_tool())
        }
    }
}
