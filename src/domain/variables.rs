//! Editor records read by the interpreter.
//!
//! The editor owns these; the runtime only deserializes a snapshot and reads it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type tag of a variable (also used for array item types).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl VariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::String => "string",
            VariableType::Number => "number",
            VariableType::Boolean => "boolean",
            VariableType::Array => "array",
            VariableType::Object => "object",
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<serde_json::Value>),
    Object(serde_json::Map<String, serde_json::Value>),
}

impl VariableValue {
    pub fn kind(&self) -> VariableType {
        match self {
            VariableValue::Boolean(_) => VariableType::Boolean,
            VariableValue::Number(_) => VariableType::Number,
            VariableValue::String(_) => VariableType::String,
            VariableValue::Array(_) => VariableType::Array,
            VariableValue::Object(_) => VariableType::Object,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            VariableValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[serde_json::Value]> {
        match self {
            VariableValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Type tag of a raw JSON array element, in editor terms.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    #[serde(default)]
    pub block_type: String,
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: VariableType,
    pub value: VariableValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<VariableType>,
}

impl Variable {
    pub fn string(id: u64, name: &str, value: &str) -> Self {
        Self {
            block_type: "variable".to_string(),
            id,
            name: name.to_string(),
            var_type: VariableType::String,
            value: VariableValue::String(value.to_string()),
            item_type: None,
        }
    }

    pub fn array(id: u64, name: &str, item_type: VariableType, items: Vec<serde_json::Value>) -> Self {
        Self {
            block_type: "variable".to_string(),
            id,
            name: name.to_string(),
            var_type: VariableType::Array,
            value: VariableValue::Array(items),
            item_type: Some(item_type),
        }
    }
}

/// Supported instruction actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    CreateCircle,
    CreateSquare,
    CreateTriangle,
    CreateCircles,
}

impl Action {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "create circle" => Some(Action::CreateCircle),
            "create square" => Some(Action::CreateSquare),
            "create triangle" => Some(Action::CreateTriangle),
            "create circles" => Some(Action::CreateCircles),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateCircle => "create circle",
            Action::CreateSquare => "create square",
            Action::CreateTriangle => "create triangle",
            Action::CreateCircles => "create circles",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub block_type: String,
    #[serde(default)]
    pub variable_id: Option<u64>,
    pub action: String,
}

impl Instruction {
    pub fn new(action: &str, variable_id: u64) -> Self {
        Self {
            id: 0,
            block_type: "action".to_string(),
            variable_id: Some(variable_id),
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_records_deserialize() {
        let json = r#"[
            {"blockType":"variable","id":1,"name":"fill","type":"string","value":"red"},
            {"blockType":"variable","id":2,"name":"fills","type":"array","itemType":"string","value":["red","blue"]},
            {"blockType":"variable","id":3,"name":"n","type":"number","value":4}
        ]"#;
        let vars: Vec<Variable> = serde_json::from_str(json).unwrap();
        assert_eq!(vars[0].value.as_str(), Some("red"));
        assert_eq!(vars[1].item_type, Some(VariableType::String));
        assert_eq!(vars[1].value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(vars[2].value.kind(), VariableType::Number);

        let inst: Instruction =
            serde_json::from_str(r#"{"id":9,"blockType":"action","variableId":2,"action":"create circles"}"#)
                .unwrap();
        assert_eq!(inst.variable_id, Some(2));
        assert_eq!(Action::parse(&inst.action), Some(Action::CreateCircles));
    }

    #[test]
    fn unknown_action_does_not_parse() {
        assert_eq!(Action::parse("create hexagon"), None);
        assert_eq!(Action::parse("create circle"), Some(Action::CreateCircle));
    }
}
