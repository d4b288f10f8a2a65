//! CLI command implementations.

pub mod render;
pub mod status;

use anyhow::{bail, Result};

/// Output format shared by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Resolve a `--format` argument; text when omitted.
    pub fn parse(format: Option<&str>) -> Result<Self> {
        match format.map(str::to_lowercase).as_deref() {
            None | Some("text") => Ok(Self::Text),
            Some("json") => Ok(Self::Json),
            Some(other) => bail!("unknown format: '{other}' (expected text or json)"),
        }
    }
}
