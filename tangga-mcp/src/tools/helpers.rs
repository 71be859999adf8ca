//! Argument extraction shared by all tools

use serde_json::Value as JsonValue;
use tangga_units::{parse_quantity, Domain, Quantity};
use crate::error::ToolError;

fn type_name(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Required string argument
pub fn extract_text<'a>(args: &'a JsonValue, tool: &str, arg: &str) -> Result<&'a str, ToolError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Err(ToolError::arg_missing(tool, arg)),
        Some(JsonValue::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ToolError::arg_type(tool, arg, "string", type_name(other))),
    }
}

/// Required numeric argument; numeric strings are accepted too
pub fn extract_number(args: &JsonValue, tool: &str, arg: &str) -> Result<f64, ToolError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Err(ToolError::arg_missing(tool, arg)),
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ToolError::arg_type(tool, arg, "number", "out-of-range number")),
        Some(JsonValue::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| ToolError::arg_type(tool, arg, "number", "non-numeric string")),
        Some(other) => Err(ToolError::arg_type(tool, arg, "number", type_name(other))),
    }
}

/// Required domain argument ("length" / "mass")
pub fn extract_domain(args: &JsonValue, tool: &str, arg: &str) -> Result<Domain, ToolError> {
    Ok(extract_text(args, tool, arg)?.parse::<Domain>()?)
}

/// Optional domain argument
pub fn extract_optional_domain(args: &JsonValue, tool: &str, arg: &str) -> Result<Option<Domain>, ToolError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(_) => extract_domain(args, tool, arg).map(Some),
    }
}

/// A quantity given either as text (`"quantity": "2.1 km"`) or as
/// separate `domain`, `unit` and `value` arguments
pub fn extract_quantity(args: &JsonValue, tool: &str) -> Result<Quantity, ToolError> {
    match args.get("quantity") {
        None | Some(JsonValue::Null) => {
            let domain = extract_domain(args, tool, "domain")?;
            let unit = extract_text(args, tool, "unit")?;
            let value = extract_number(args, tool, "value")?;
            Ok(Quantity::new(domain, unit, value)?)
        }
        Some(_) => Ok(parse_quantity(extract_text(args, tool, "quantity")?)?),
    }
}

/// Physical quantities are non-negative by convention
pub fn ensure_non_negative(value: f64, tool: &str, arg: &str) -> Result<(), ToolError> {
    if value < 0.0 {
        return Err(ToolError::arg_type(tool, arg, "non-negative number", "negative number"));
    }
    Ok(())
}
