//! Unit table, conversion and comparison tools

use serde_json::{json, Value as JsonValue};
use tangga_units::{compare, convert, ladder_move, parse_conversion, rungs, UNITS};
use crate::error::ToolError;
use crate::plugin::{ArgMeta, Tool, ToolContext, ToolMeta};
use crate::render::{comparison_sentence, format_number};
use super::helpers::{ensure_non_negative, extract_domain, extract_number, extract_quantity, extract_text};

static DOMAIN_ARG: [ArgMeta; 1] = [
    ArgMeta::required("domain", "string", "\"length\" or \"mass\""),
];

// ============ list_units ============

pub struct ListUnits;

impl Tool for ListUnits {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "list_units",
            description: "List a domain's units in ladder order, largest first",
            args: &DOMAIN_ARG,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let domain = extract_domain(args, "list_units", "domain")?;
        let units: Vec<JsonValue> = UNITS
            .ladder(domain)
            .iter()
            .enumerate()
            .map(|(position, u)| json!({
                "name": u.name,
                "label": u.label,
                "factor": u.factor,
                "position": position
            }))
            .collect();
        let (from, to) = domain.default_pair();

        Ok(json!({
            "content": [{ "type": "text", "text": UNITS.units_of(domain).join(" > ") }],
            "domain": domain,
            "base_unit": domain.base_unit(),
            "default_from": from,
            "default_to": to,
            "units": units
        }))
    }
}

// ============ factor_of ============

pub struct FactorOf;

static FACTOR_OF_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("domain", "string", "\"length\" or \"mass\""),
    ArgMeta::required("unit", "string", "Unit name, e.g. \"km\""),
];

impl Tool for FactorOf {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "factor_of",
            description: "Factor of a unit relative to the base unit (m or g)",
            args: &FACTOR_OF_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let domain = extract_domain(args, "factor_of", "domain")?;
        let unit = extract_text(args, "factor_of", "unit")?;
        let factor = UNITS.factor_of(domain, unit)?;

        Ok(json!({
            "content": [{ "type": "text", "text": format!("1 {} = {} {}", unit, factor, domain.base_unit()) }],
            "factor": factor
        }))
    }
}

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("domain", "string", "\"length\" or \"mass\""),
    ArgMeta::required("from", "string", "Source unit, e.g. \"km\""),
    ArgMeta::required("to", "string", "Target unit, e.g. \"m\""),
    ArgMeta::required("value", "number", "Non-negative value to convert"),
];

impl Tool for Convert {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "convert",
            description: "Convert a value between two units of the same domain",
            args: &CONVERT_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let domain = extract_domain(args, "convert", "domain")?;
        let from = extract_text(args, "convert", "from")?;
        let to = extract_text(args, "convert", "to")?;
        let value = extract_number(args, "convert", "value")?;
        ensure_non_negative(value, "convert", "value")?;

        let result = convert(domain, from, to, value)?;
        let step = ladder_move(domain, from, to)?;
        let decimals = ctx.config.decimals;

        Ok(json!({
            "content": [{
                "type": "text",
                "text": format!("{} {} = {} {} ({})", format_number(value, decimals), from, format_number(result, decimals), to, step)
            }],
            "value": result,
            "ladder": { "steps": step.steps, "rule": step.describe() }
        }))
    }
}

// ============ compare ============

pub struct Compare;

static COMPARE_ARGS: [ArgMeta; 4] = [
    ArgMeta::optional("quantity", "string", "Quantity as text, e.g. \"2.1 km\"; replaces domain, unit and value"),
    ArgMeta::optional("domain", "string", "\"length\" or \"mass\""),
    ArgMeta::optional("unit", "string", "Unit of the value"),
    ArgMeta::optional("value", "number", "Non-negative value to compare with a familiar object"),
];

impl Tool for Compare {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "compare",
            description: "Express a value as a count of a familiar real-world object",
            args: &COMPARE_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let quantity = extract_quantity(args, "compare")?;
        ensure_non_negative(quantity.value, "compare", "value")?;
        let comparison = compare(quantity.domain, quantity.unit.name, quantity.value)?;

        Ok(json!({
            "content": [{ "type": "text", "text": comparison_sentence(&quantity, &comparison, ctx.config.decimals) }],
            "base_value": quantity.base_value(),
            "comparison": comparison
        }))
    }
}

// ============ ladder ============

pub struct Ladder;

static LADDER_ARGS: [ArgMeta; 2] = [
    ArgMeta::optional("domain", "string", "\"length\" or \"mass\"; inferred from move when omitted"),
    ArgMeta::optional("move", "string", "Unit pair to walk, e.g. \"km->m\" or \"kg to g\""),
];

const LADDER_RULE: &str = "Each step down multiplies by 10, each step up divides by 10.";

impl Tool for Ladder {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "ladder",
            description: "Staircase layout of a domain's units, optionally with the steps between two of them",
            args: &LADDER_ARGS,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &mut ToolContext) -> Result<JsonValue, ToolError> {
        let walk = match args.get("move") {
            None | Some(JsonValue::Null) => None,
            Some(_) => Some(parse_conversion(extract_text(args, "ladder", "move")?)?),
        };

        let domain = match walk {
            Some((domain, _, _)) => domain,
            None => extract_domain(args, "ladder", "domain")?,
        };

        let mut out = json!({
            "content": [{ "type": "text", "text": LADDER_RULE }],
            "domain": domain,
            "rungs": rungs(domain)
        });

        if let Some((_, from, to)) = walk {
            let step = ladder_move(domain, from, to)?;
            out["content"][0]["text"] = json!(format!("{} -> {}: {}", from, to, step.describe()));
            out["move"] = json!({ "from": from, "to": to, "steps": step.steps, "rule": step.describe() });
        }
        Ok(out)
    }
}
