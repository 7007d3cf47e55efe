//! Request validation: the create schema and the path identifier schema.

use crate::model::{ItemId, NewItem};
use crate::response::FieldIssue;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static pattern"));

/// Length-bounded string field of a schema.
#[derive(Clone, Copy, Debug)]
pub struct StringRule {
    pub field: &'static str,
    pub required: bool,
    pub required_message: &'static str,
    pub min_length: usize,
    pub min_message: &'static str,
    pub max_length: usize,
    pub max_message: &'static str,
}

/// Create schema, in declaration order. Issues are reported in this order.
// The description messages mention "Name" and a minimum of 5; clients match on them verbatim.
pub const CREATE_SCHEMA: [StringRule; 2] = [
    StringRule {
        field: "name",
        required: true,
        required_message: "Name is required",
        min_length: 3,
        min_message: "Name must be 3 or more characters long",
        max_length: 60,
        max_message: "Name must be 60 or fewer characters long",
    },
    StringRule {
        field: "description",
        required: false,
        required_message: "Description is required",
        min_length: 35,
        min_message: "Name must be 5 or more characters long",
        max_length: 255,
        max_message: "Name must be 255 or fewer characters long",
    },
];

pub const ID_REQUIRED: &str = "ID is required";
pub const ID_NOT_A_NUMBER: &str = "ID must be a number";

pub struct ItemValidator;

impl ItemValidator {
    /// Validate a create payload. Collects every issue before failing.
    pub fn validate_create(body: &Value) -> Result<NewItem, Vec<FieldIssue>> {
        let map = match body {
            Value::Object(m) => m,
            other => {
                return Err(vec![FieldIssue::new(
                    "",
                    format!("Expected object, received {}", type_name(other)),
                )])
            }
        };

        let mut issues = Vec::new();
        let mut values: Vec<Option<String>> = Vec::with_capacity(CREATE_SCHEMA.len());
        for rule in &CREATE_SCHEMA {
            values.push(check_string(map, rule, &mut issues));
        }
        if !issues.is_empty() {
            return Err(issues);
        }

        let mut values = values.into_iter();
        let name = values.next().flatten().unwrap_or_default();
        let description = values.next().flatten();
        Ok(NewItem { name, description })
    }

    /// Validate a path identifier. Only the first issue is reported.
    pub fn validate_id(raw: Option<&str>) -> Result<ItemId, String> {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => return Err(ID_REQUIRED.to_string()),
        };
        if !DIGITS.is_match(raw) {
            return Err(ID_NOT_A_NUMBER.to_string());
        }
        raw.parse::<ItemId>().map_err(|_| ID_NOT_A_NUMBER.to_string())
    }
}

fn check_string(map: &Map<String, Value>, rule: &StringRule, issues: &mut Vec<FieldIssue>) -> Option<String> {
    let value = match map.get(rule.field) {
        None => {
            if rule.required {
                issues.push(FieldIssue::new(rule.field, rule.required_message));
            }
            return None;
        }
        Some(v) => v,
    };
    let s = match value.as_str() {
        Some(s) => s,
        None => {
            issues.push(FieldIssue::new(
                rule.field,
                format!("Expected string, received {}", type_name(value)),
            ));
            return None;
        }
    };
    // UTF-16 code units, the length clients measure on their side.
    let len = s.encode_utf16().count();
    if len < rule.min_length {
        issues.push(FieldIssue::new(rule.field, rule.min_message));
    }
    if len > rule.max_length {
        issues.push(FieldIssue::new(rule.field, rule.max_message));
    }
    Some(s.to_string())
}

pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
