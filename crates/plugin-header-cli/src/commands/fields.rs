//! Implementation of the `fields` command

use std::path::Path;

use colored::Colorize;
use plugin_header::HeaderFields;

use crate::error::Result;

/// Print every header field found in `file`.
pub fn run_fields(file: &Path, json: bool) -> Result<i32> {
    let fields = HeaderFields::from_file(file)?;

    if json {
        let map: serde_json::Map<String, serde_json::Value> = fields
            .iter()
            .map(|(tag, value)| (tag.label().to_string(), serde_json::Value::from(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(0);
    }

    if fields.is_empty() {
        println!("{}", "No header fields found".dimmed());
        return Ok(0);
    }

    let width = fields
        .iter()
        .map(|(tag, _)| tag.label().len())
        .max()
        .unwrap_or(0);
    for (tag, value) in fields.iter() {
        let label = format!("{:<pad$}", format!("{}:", tag.label()), pad = width + 1);
        println!("{} {}", label.cyan(), value);
    }

    Ok(0)
}
