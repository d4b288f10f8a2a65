//! `hmmbind status`: status table listing and lookup.

use anyhow::Result;
use serde::Serialize;

use hmmbind_errors::status::{self, UNKNOWN_STATUS};

use super::OutputFormat;

/// Lookup result; `name` is absent for codes outside the table.
#[derive(Debug, Serialize)]
struct LookupReport {
    code: i32,
    name: Option<&'static str>,
    description: &'static str,
}

/// Render the full status table.
pub fn list(format: Option<&str>) -> Result<String> {
    let table = status::table();
    match OutputFormat::parse(format)? {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
        OutputFormat::Text => {
            let width = table.iter().map(|e| e.name.len()).max().unwrap_or(0);
            let lines: Vec<String> = table
                .iter()
                .map(|e| format!("{:>3}  {:<width$}  {}", e.code, e.name, e.description))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Describe one status code.
pub fn lookup(code: i32, format: Option<&str>) -> Result<String> {
    let entry = status::entry(code);
    if entry.is_none() {
        tracing::warn!(code, "status code is not in the native table");
    }
    let report = LookupReport {
        code,
        name: entry.map(|e| e.name),
        description: status::lookup(code),
    };

    match OutputFormat::parse(format)? {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => Ok(match report.name {
            Some(name) => format!("{code} ({name}): {}", report.description),
            None => format!("{code}: {UNKNOWN_STATUS}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_text_has_every_code() {
        let out = list(None).unwrap();
        assert_eq!(out.lines().count(), status::table().len());
        assert!(out.contains("eslEMEM"));
        assert!(out.contains("malloc or realloc failed"));
    }

    #[test]
    fn list_json_is_array() {
        let out = list(Some("json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), status::table().len());
        assert_eq!(rows[5]["name"], "eslEMEM");
    }

    #[test]
    fn lookup_known_code() {
        assert_eq!(
            lookup(7, None).unwrap(),
            "7 (eslEFORMAT): file format not correctly detected"
        );
    }

    #[test]
    fn lookup_unknown_code() {
        assert_eq!(lookup(99, None).unwrap(), "99: unknown error code");

        let value: serde_json::Value =
            serde_json::from_str(&lookup(99, Some("json")).unwrap()).unwrap();
        assert!(value["name"].is_null());
        assert_eq!(value["description"], UNKNOWN_STATUS);
    }
}
