//! `hmmbind render`: show how a binding error is reported.

use anyhow::Result;

use hmmbind_errors::BindingError;

use super::OutputFormat;

/// Render `err` as display text or as its tagged JSON form.
pub fn render(err: &BindingError, format: Option<&str>) -> Result<String> {
    match OutputFormat::parse(format)? {
        OutputFormat::Text => Ok(err.to_string()),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(err)?;
            value["display"] = serde_json::Value::String(err.to_string());
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}
