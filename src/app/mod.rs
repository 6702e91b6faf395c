use crate::config::Command;
use crate::core::json;
use crate::utils::error::{ArrayError, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;

/// Runs one CLI command against its JSON input and renders the result.
pub struct CommandRunner {
    pretty: bool,
}

impl CommandRunner {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// The inline argument when given, otherwise everything `stdin` yields.
    /// `range` takes no input and never touches `stdin`.
    pub fn read_input<R: Read>(&self, command: &Command, mut stdin: R) -> Result<Option<String>> {
        if let Some(inline) = command.input() {
            return Ok(Some(inline.to_string()));
        }
        if !command.reads_input() {
            return Ok(None);
        }

        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        tracing::debug!("Read {} bytes of JSON input from stdin", buffer.len());
        Ok(Some(buffer))
    }

    pub fn run(&self, command: &Command, input: Option<&str>) -> Result<String> {
        match command {
            Command::Range { a, b } => {
                let sequence = match b {
                    Some(end) => json::range_values(Some(*a), *end),
                    None => json::range_values(None, *a),
                };
                tracing::debug!("Generated range of {} integers", sequence.len());
                self.render(&sequence)
            }
            Command::Flatten { .. } => self.render(&json::flatten_value(&parse_input(input)?)?),
            // Rendered straight from `Groups` so keys keep first-occurrence order.
            Command::GroupBy { key, .. } => {
                self.render(&json::group_values_by(&parse_input(input)?, key.as_deref())?)
            }
            Command::Uniq { key, .. } => {
                self.render(&json::uniq_values(&parse_input(input)?, key.as_deref())?)
            }
            Command::Without { values, .. } => {
                let excluded = values
                    .iter()
                    .map(|raw| serde_json::from_str(raw))
                    .collect::<std::result::Result<Vec<Value>, _>>()?;
                self.render(&json::without_values(&parse_input(input)?, &excluded)?)
            }
        }
    }

    fn render<T: Serialize>(&self, output: &T) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(output)?
        } else {
            serde_json::to_string(output)?
        };
        Ok(rendered)
    }
}

fn parse_input(input: Option<&str>) -> Result<Value> {
    let raw = input.ok_or_else(|| ArrayError::ValidationError {
        field: "input".to_string(),
        value: String::new(),
        reason: "No JSON input given".to_string(),
    })?;
    Ok(serde_json::from_str(raw)?)
}
