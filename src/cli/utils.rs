use serde_json::{json, Map, Value};

use crate::cli::OutputFormat;
use crate::database::models::comment::Comment;

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(target)) = (data, response.as_object_mut()) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: &OutputFormat, message: &str, error_code: Option<u16>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["status"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Output a list of comments in the appropriate format
pub fn output_comments(output_format: &OutputFormat, comments: &[Comment]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(comments)?);
        }
        OutputFormat::Text => {
            if comments.is_empty() {
                println!("No comments");
                return Ok(());
            }
            for comment in comments {
                println!("{}  {}", comment.id, summarize(&comment.fields));
            }
        }
    }
    Ok(())
}

const SUMMARY_WIDTH: usize = 72;

/// One-line rendering of a comment body, truncated on a char boundary
fn summarize(fields: &Map<String, Value>) -> String {
    let line = Value::Object(fields.clone()).to_string();
    if line.chars().count() <= SUMMARY_WIDTH {
        return line;
    }
    let mut short: String = line.chars().take(SUMMARY_WIDTH - 1).collect();
    short.push('…');
    short
}
