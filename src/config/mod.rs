use crate::utils::error::Result;
use crate::utils::validation::{
    validate_json_pointer, validate_non_empty_string, validate_optional_non_empty, Validate,
};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "smart-arrays")]
#[command(about = "Flatten, group, range, deduplicate and filter JSON arrays")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Pretty-print the JSON result")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Flatten nested arrays into a single array
    Flatten {
        /// JSON array; read from stdin when omitted
        input: Option<String>,
    },
    /// Group elements into an object keyed by value or by a field
    GroupBy {
        input: Option<String>,

        /// JSON pointer to the grouping field, e.g. /job
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Print the integers from A up to B, or from 0 up to A
    Range {
        #[arg(allow_negative_numbers = true)]
        a: i64,

        #[arg(allow_negative_numbers = true)]
        b: Option<i64>,
    },
    /// Keep the first occurrence of each distinct element or field value
    Uniq {
        input: Option<String>,

        #[arg(short, long)]
        key: Option<String>,
    },
    /// Remove every element equal to one of the given JSON values
    Without {
        input: Option<String>,

        /// JSON value to remove; repeatable
        #[arg(long = "value", allow_negative_numbers = true)]
        values: Vec<String>,
    },
}

impl Command {
    /// Inline JSON argument, if one was given instead of stdin.
    pub fn input(&self) -> Option<&str> {
        match self {
            Command::Flatten { input }
            | Command::GroupBy { input, .. }
            | Command::Uniq { input, .. }
            | Command::Without { input, .. } => input.as_deref(),
            Command::Range { .. } => None,
        }
    }

    pub fn reads_input(&self) -> bool {
        !matches!(self, Command::Range { .. })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Flatten { input } => validate_optional_non_empty("input", input),
            Command::GroupBy { input, key } | Command::Uniq { input, key } => {
                validate_optional_non_empty("input", input)?;
                if let Some(key) = key {
                    validate_json_pointer("key", key)?;
                }
                Ok(())
            }
            Command::Without { input, values } => {
                validate_optional_non_empty("input", input)?;
                for value in values {
                    validate_non_empty_string("value", value)?;
                }
                Ok(())
            }
            Command::Range { .. } => Ok(()),
        }
    }
}
