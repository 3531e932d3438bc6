use serde::{Serialize, Deserialize};
use serde_json::{json, Map, Value as JsonValue};

use super::error::{ValidationError, ValidationIssue};

pub const JSON_SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgSchema {
    pub name: String,
    pub arg_type: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub args: Vec<ArgSchema>,
}

/// JSON type of a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }

    fn matches(&self, value: &JsonValue) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub field_type: FieldType,
    pub description: String,
    pub required: bool,
    /// Minimum length in characters; only meaningful for strings.
    pub min_length: Option<usize>,
    /// Message reported when the field is missing or fails a constraint.
    pub message: Option<String>,
}

impl FieldSchema {
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::String,
            description: description.into(),
            required: true,
            min_length: None,
            message: None,
        }
    }

    pub fn min_length(mut self, len: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(len);
        self.message = Some(message.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn issue(&self, fallback: String) -> ValidationIssue {
        ValidationIssue {
            path: self.name.clone(),
            message: self.message.clone().unwrap_or(fallback),
        }
    }

    fn check(&self, value: Option<&JsonValue>) -> Option<ValidationIssue> {
        let Some(value) = value else {
            return self.required.then(|| self.issue("Required".to_string()));
        };
        if !self.field_type.matches(value) {
            return Some(ValidationIssue {
                path: self.name.clone(),
                message: format!("Expected {}", self.field_type.as_str()),
            });
        }
        if let (Some(min), Some(s)) = (self.min_length, value.as_str()) {
            if s.chars().count() < min {
                return Some(self.issue(format!("String must contain at least {min} character(s)")));
            }
        }
        None
    }

    fn to_json_schema(&self) -> JsonValue {
        let mut prop = Map::new();
        prop.insert("type".into(), json!(self.field_type.as_str()));
        if let Some(min) = self.min_length {
            prop.insert("minLength".into(), json!(min));
        }
        prop.insert("description".into(), json!(self.description));
        JsonValue::Object(prop)
    }
}

/// Canonical description of a tool's input: an object with named fields.
///
/// This is the single source of truth for a tool's arguments. The JSON Schema
/// advertised to discovery clients and the argument list shown to agents are
/// both derived from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSchema {
    pub fields: Vec<FieldSchema>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Check `input` against every field, collecting all failures.
    pub fn validate(&self, input: &JsonValue) -> Result<(), ValidationError> {
        let Some(obj) = input.as_object() else {
            return Err(ValidationError::new(vec![ValidationIssue {
                path: String::new(),
                message: "Expected object".into(),
            }]));
        };
        let issues: Vec<ValidationIssue> = self
            .fields
            .iter()
            .filter_map(|f| f.check(obj.get(&f.name)))
            .collect();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(issues))
        }
    }

    /// Draft-07 JSON Schema form.
    pub fn to_json_schema(&self) -> JsonValue {
        let properties: Map<String, JsonValue> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.to_json_schema()))
            .collect();
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
            "$schema": JSON_SCHEMA_DRAFT,
        })
    }

    pub fn args(&self) -> Vec<ArgSchema> {
        self.fields
            .iter()
            .map(|f| ArgSchema {
                name: f.name.clone(),
                arg_type: f.field_type.as_str().into(),
                description: f.description.clone(),
                required: f.required,
            })
            .collect()
    }
}
