use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::core::{FieldPath, FieldValue, Schema, ValueTree};
use crate::error::{SettingsError, SettingsResult};

pub const SCHEMA_JSON_SCHEMA_V1: u32 = 1;
pub const VALUES_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaJsonContractV1 {
    pub schema_version: u32,
    pub schema: Schema,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuesJsonContractV1 {
    pub schema_version: u32,
    pub values: Value,
}

impl Schema {
    pub fn to_json_contract_v1_pretty(&self) -> SettingsResult<String> {
        let payload = SchemaJsonContractV1 {
            schema_version: SCHEMA_JSON_SCHEMA_V1,
            schema: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SettingsError::InvalidData(format!("failed to serialize schema contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> SettingsResult<Self> {
        if let Ok(schema) = serde_json::from_str::<Schema>(input) {
            return Ok(schema);
        }
        let payload: SchemaJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SettingsError::InvalidData(format!("failed to parse schema json payload: {e}"))
        })?;
        if payload.schema_version != SCHEMA_JSON_SCHEMA_V1 {
            return Err(SettingsError::InvalidData(format!(
                "unsupported schema contract version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.schema)
    }
}

impl ValueTree {
    /// Nested persisted form: `legend[labels][fontColor]` becomes
    /// `{"legend": {"labels": {"fontColor": ..}}}` and numeric segments
    /// (series indices) become array positions.
    pub fn to_document(&self) -> SettingsResult<Value> {
        let mut root = Value::Object(Map::new());
        for (id, value) in self.iter() {
            let path = FieldPath::parse(id)?;
            insert_path(&mut root, path.segments(), scalar_to_json(id, value)?, id)?;
        }
        Ok(root)
    }

    pub fn from_document(document: &Value) -> SettingsResult<Self> {
        let Value::Object(map) = document else {
            return Err(SettingsError::InvalidData(
                "settings document must be a JSON object".to_owned(),
            ));
        };
        let mut tree = ValueTree::new();
        for (key, child) in map {
            collect_leaves(child, &mut vec![key.clone()], &mut tree)?;
        }
        Ok(tree)
    }

    pub fn to_json_contract_v1_pretty(&self) -> SettingsResult<String> {
        let payload = ValuesJsonContractV1 {
            schema_version: VALUES_JSON_SCHEMA_V1,
            values: self.to_document()?,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SettingsError::InvalidData(format!("failed to serialize values contract v1: {e}"))
        })
    }

    /// Accepts a bare nested document or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> SettingsResult<Self> {
        let document: Value = serde_json::from_str(input).map_err(|e| {
            SettingsError::InvalidData(format!("failed to parse values json payload: {e}"))
        })?;
        let versioned = document.get("schema_version").is_some() && document.get("values").is_some();
        if !versioned {
            return Self::from_document(&document);
        }
        let payload: ValuesJsonContractV1 = serde_json::from_value(document).map_err(|e| {
            SettingsError::InvalidData(format!("failed to parse values contract v1: {e}"))
        })?;
        if payload.schema_version != VALUES_JSON_SCHEMA_V1 {
            return Err(SettingsError::InvalidData(format!(
                "unsupported values contract version: {}",
                payload.schema_version
            )));
        }
        Self::from_document(&payload.values)
    }
}

fn scalar_to_json(id: &str, value: &FieldValue) -> SettingsResult<Value> {
    Ok(match value {
        FieldValue::Bool(value) => Value::Bool(*value),
        FieldValue::Text(value) => Value::String(value.clone()),
        FieldValue::Number(value) => Number::from_f64(*value)
            .map(Value::Number)
            .ok_or_else(|| {
                SettingsError::InvalidData(format!("value of `{id}` is not a finite number"))
            })?,
    })
}

fn conflict(id: &str) -> SettingsError {
    SettingsError::InvalidData(format!("key `{id}` conflicts with another stored key"))
}

fn insert_path(node: &mut Value, segments: &[String], leaf: Value, id: &str) -> SettingsResult<()> {
    let Some((head, rest)) = segments.split_first() else {
        return Err(conflict(id));
    };

    let slot = if let Ok(index) = head.parse::<usize>() {
        if node.is_null() {
            *node = Value::Array(Vec::new());
        }
        let Value::Array(items) = node else {
            return Err(conflict(id));
        };
        if items.len() <= index {
            items.resize(index + 1, Value::Null);
        }
        &mut items[index]
    } else {
        if node.is_null() {
            *node = Value::Object(Map::new());
        }
        let Value::Object(map) = node else {
            return Err(conflict(id));
        };
        map.entry(head.clone()).or_insert(Value::Null)
    };

    if rest.is_empty() {
        if !slot.is_null() {
            return Err(conflict(id));
        }
        *slot = leaf;
        Ok(())
    } else {
        insert_path(slot, rest, leaf, id)
    }
}

fn collect_leaves(
    node: &Value,
    segments: &mut Vec<String>,
    tree: &mut ValueTree,
) -> SettingsResult<()> {
    match node {
        Value::Null => {}
        Value::Bool(value) => insert_leaf(segments, FieldValue::Bool(*value), tree)?,
        Value::String(value) => insert_leaf(segments, FieldValue::Text(value.clone()), tree)?,
        Value::Number(value) => {
            let number = value.as_f64().ok_or_else(|| {
                SettingsError::InvalidData(format!("number {value} is out of range"))
            })?;
            insert_leaf(segments, FieldValue::Number(number), tree)?;
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                segments.push(index.to_string());
                collect_leaves(item, segments, tree)?;
                segments.pop();
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                segments.push(key.clone());
                collect_leaves(child, segments, tree)?;
                segments.pop();
            }
        }
    }
    Ok(())
}

fn insert_leaf(segments: &[String], value: FieldValue, tree: &mut ValueTree) -> SettingsResult<()> {
    let path = FieldPath::from_segments(segments.iter().cloned()).ok_or_else(|| {
        SettingsError::InvalidData(format!("empty key in settings document at `{}`", segments.join(".")))
    })?;
    tree.insert(path.to_string(), value);
    Ok(())
}
