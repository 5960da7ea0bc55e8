use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result envelope printed by every command.
///
/// Exactly two shapes exist: `{"status":"success","data":...}` and
/// `{"status":"error","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success { data: Value },
    Error { message: String },
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Envelope::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error { .. })
    }
}

impl From<anyhow::Result<Value>> for Envelope {
    fn from(result: anyhow::Result<Value>) -> Self {
        match result {
            Ok(data) => Envelope::success(data),
            Err(e) => Envelope::error(e.to_string()),
        }
    }
}

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One-line JSON envelope
    Json,
    /// Fixed-layout text lines
    Text,
}

/// Print the envelope to stdout in the selected format.
pub fn print(envelope: &Envelope, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", render_json(envelope)),
        OutputFormat::Text => println!("{}", render_text(envelope)),
    }
}

pub fn render_json(envelope: &Envelope) -> String {
    serde_json::to_string(envelope)
        .unwrap_or_else(|e| format!(r#"{{"status":"error","message":"{e}"}}"#))
}

pub fn render_text(envelope: &Envelope) -> String {
    match envelope {
        Envelope::Error { message } => format!("{} {message}", "error:".red()),
        Envelope::Success { data } => {
            let mut out = String::new();
            out.push_str(&"ok".green().to_string());
            push_lines(&mut out, data, 0);
            out
        }
    }
}

fn push_lines(out: &mut String, value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                if is_scalar(v) {
                    out.push_str(&format!("\n{pad}{key}: {}", scalar(v)));
                } else {
                    out.push_str(&format!("\n{pad}{key}:"));
                    push_lines(out, v, indent + 1);
                }
            }
        }
        Value::Array(items) => {
            for v in items {
                if is_scalar(v) {
                    out.push_str(&format!("\n{pad}- {}", scalar(v)));
                } else {
                    out.push_str(&format!("\n{pad}-"));
                    push_lines(out, v, indent + 1);
                }
            }
        }
        _ => out.push_str(&format!("\n{pad}{}", scalar(value))),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "N/A".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
