use crate::json_path::model::Expression;
use serde_json::Value;
use serde_json_path::JsonPath;

pub fn evaluate_expression(context: &Value, exp: &Expression) -> Result<Vec<Value>, String> {
    let json_path = JsonPath::parse(exp.value.as_str()).map_err(|err| err.to_string())?;
    Ok(json_path.query(context).all().into_iter().cloned().collect())
}

/// First non-null node matched by `exp`.
pub fn first_value(context: &Value, exp: &Expression) -> Option<Value> {
    evaluate_expression(context, exp)
        .ok()?
        .into_iter()
        .find(|node| !node.is_null())
}
