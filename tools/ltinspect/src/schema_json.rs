//! Loads a single schema node from a JSON object.

use std::{fs, io::Read, path::Path};

use anyhow::{Context, Result, bail};
use logical_types_core::{PhysicalType, SchemaDef};
use serde_json::Value;

/// Read a schema node from `path`, or from stdin when `path` is `-`.
pub fn load_schema(path: &Path) -> Result<SchemaDef> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    schema_from_json(&text)
}

/// Parse `{"type": ..., ...}` into a [`SchemaDef`].
///
/// `"type"` selects the physical type (`"fixed"` also reads `"size"`). Every
/// other scalar member becomes a string property; arrays and objects such as
/// `"fields"` are not properties and are skipped.
pub fn schema_from_json(text: &str) -> Result<SchemaDef> {
    let value: Value = serde_json::from_str(text).context("schema is not valid JSON")?;
    let object = match value {
        Value::Object(object) => object,
        Value::String(name) => {
            let physical = PhysicalType::from_type_name(&name, None)
                .with_context(|| format!("unsupported schema type '{name}'"))?;
            return Ok(SchemaDef::new(physical));
        }
        other => bail!("schema must be a JSON object or type name, got {other}"),
    };

    let type_name = object
        .get("type")
        .and_then(Value::as_str)
        .context("schema is missing a string \"type\"")?;
    let size = match object.get("size") {
        Some(size) => Some(
            size.as_u64()
                .and_then(|size| usize::try_from(size).ok())
                .with_context(|| format!("invalid fixed size {size}"))?,
        ),
        None => None,
    };
    let physical = PhysicalType::from_type_name(type_name, size)
        .with_context(|| format!("unsupported schema type '{type_name}'"))?;

    let mut schema = SchemaDef::new(physical);
    for (key, member) in &object {
        if key == "type" || (key == "size" && matches!(physical, PhysicalType::Fixed(_))) {
            continue;
        }
        let text = match member {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => continue,
        };
        schema.props.insert(key.clone(), text);
    }
    Ok(schema)
}
