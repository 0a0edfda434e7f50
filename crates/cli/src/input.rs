//! Reading JSON input from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the whole input: `path` when given, stdin otherwise.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}
