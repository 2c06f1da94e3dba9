use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::ToolError;

// ─── Tool definitions ───────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Boolean,
}

/// One named tool parameter.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: &'static str,
    pub required: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self { name, param_type, description, required: true }
    }

    pub const fn optional(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self { name, param_type, description, required: false }
    }
}

/// A tool as advertised to a model: name, description, JSON Schema input.
#[derive(Serialize, Debug, Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    #[serde(skip)]
    pub parameters: Vec<ParamSpec>,
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, parameters: Vec<ParamSpec>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: input_schema(&parameters),
            parameters,
        }
    }
}

/// Render parameters as a JSON Schema object. `required` is always present,
/// even when empty; some clients fail to parse schemas without it.
fn input_schema(parameters: &[ParamSpec]) -> Value {
    let mut properties = Map::new();
    for p in parameters {
        properties.insert(
            p.name.to_string(),
            json!({ "type": p.param_type, "description": p.description }),
        );
    }
    let required: Vec<&str> = parameters.iter().filter(|p| p.required).map(|p| p.name).collect();
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

// ─── Tool call results ──────────────────────────────────────────────

/// A block of tool output. Only text is produced today.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
#[non_exhaustive]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
        }
    }
}

/// Result of one tool call: always exactly one content block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ToolCallResult {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolCallResult {
    pub fn success(text: String) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: false,
        }
    }

    /// `{"error": "<message>"}` payload.
    pub fn from_error(err: &ToolError) -> Self {
        Self {
            content: vec![ContentBlock::text(json!({ "error": err.to_string() }).to_string())],
            is_error: true,
        }
    }

    /// Text of the single content block.
    #[must_use]
    pub fn text(&self) -> &str {
        self.content.first().and_then(ContentBlock::as_text).unwrap_or("")
    }
}

impl From<Result<String, ToolError>> for ToolCallResult {
    fn from(result: Result<String, ToolError>) -> Self {
        match result {
            Ok(text) => ToolCallResult::success(text),
            Err(e) => ToolCallResult::from_error(&e),
        }
    }
}
