use serde_json::{json, Value};

use crate::types::Entity;

/// Builds the JSON body for a create request.
pub fn build_create_body(entity: &Entity, row: usize, column: usize, candidate_id: &str) -> Value {
    let mut body = json!({
        "row": row,
        "column": column,
        "candidateId": candidate_id
    });

    match entity {
        Entity::Polyanet => {}
        Entity::Soloon(color) => body["color"] = json!(color),
        Entity::Cometh(direction) => body["direction"] = json!(direction),
    }

    body
}

/// Extracts the goal map from a goal endpoint response body.
///
/// A missing field yields `Value::Null`, which the grid parser rejects.
pub fn goal_from_body(body: &Value) -> Value {
    body.get("goal").cloned().unwrap_or(Value::Null)
}
