use serde_json::Value;
use tracing::error;

use crate::error::MegaverseError;
use crate::types::{Placement, SPACE};

/// Flattens a goal map into placements, scanning rows top to bottom and
/// cells left to right. `SPACE` cells are skipped.
///
/// A value that is not a list of lists of strings is logged and yields no
/// placements.
pub fn parse_goal_map(goal: &Value) -> Vec<Placement> {
    match collect_placements(goal) {
        Ok(placements) => placements,
        Err(e) => {
            error!(error = %e, "Invalid goal map format, expecting a list of lists");
            Vec::new()
        }
    }
}

fn collect_placements(goal: &Value) -> Result<Vec<Placement>, MegaverseError> {
    let rows = goal
        .as_array()
        .ok_or_else(|| MegaverseError::MalformedGrid(format!("expected a list, got {}", kind(goal))))?;

    let mut placements = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        let cells = row.as_array().ok_or_else(|| {
            MegaverseError::MalformedGrid(format!("row {} is {}, not a list", row_index, kind(row)))
        })?;

        for (column_index, cell) in cells.iter().enumerate() {
            let label = cell.as_str().ok_or_else(|| {
                MegaverseError::MalformedGrid(format!(
                    "cell ({}, {}) is {}, not a string",
                    row_index,
                    column_index,
                    kind(cell)
                ))
            })?;

            if label != SPACE {
                placements.push(Placement::new(label, row_index, column_index));
            }
        }
    }

    Ok(placements)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_capture::CapturedLevels;
    use serde_json::json;
    use tracing::Level;

    #[test]
    fn test_single_polyanet() {
        let goal = json!([
            ["SPACE", "SPACE", "SPACE"],
            ["SPACE", "POLYANET", "SPACE"],
            ["SPACE", "SPACE", "SPACE"]
        ]);
        assert_eq!(parse_goal_map(&goal), vec![Placement::new("POLYANET", 1, 1)]);
    }

    #[test]
    fn test_scan_order() {
        let goal = json!([
            ["SPACE", "SPACE", "SPACE", "SPACE"],
            ["SPACE", "UP_COMETH", "SPACE", "DOWN_COMETH"],
            ["SPACE", "SPACE", "UP_COMETH", "DOWN_COMETH"]
        ]);
        assert_eq!(
            parse_goal_map(&goal),
            vec![
                Placement::new("UP_COMETH", 1, 1),
                Placement::new("DOWN_COMETH", 1, 3),
                Placement::new("UP_COMETH", 2, 2),
                Placement::new("DOWN_COMETH", 2, 3),
            ]
        );
    }

    #[test]
    fn test_labels_are_not_validated() {
        let goal = json!([["GREEN_SOLOON", "SPACE", "MOON"]]);
        let placements = parse_goal_map(&goal);
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[1].label, "MOON");
        assert_eq!(placements[1].column, 2);
    }

    #[test]
    fn test_ragged_rows() {
        let goal = json!([["POLYANET"], ["SPACE", "SPACE", "POLYANET"]]);
        assert_eq!(
            parse_goal_map(&goal),
            vec![Placement::new("POLYANET", 0, 0), Placement::new("POLYANET", 1, 2)]
        );
    }

    #[test]
    fn test_row_not_a_list_invalidates_grid() {
        let goal = json!([
            ["SPACE", "SPACE", "SPACE"],
            ["SPACE", "POLYANET", "SPACE"],
            "SPACE"
        ]);
        assert!(parse_goal_map(&goal).is_empty());
    }

    #[test]
    fn test_non_list_inputs() {
        assert!(parse_goal_map(&Value::Null).is_empty());
        assert!(parse_goal_map(&json!("POLYANET")).is_empty());
        assert!(parse_goal_map(&json!({"goal": []})).is_empty());
    }

    #[test]
    fn test_non_string_cell_invalidates_grid() {
        let goal = json!([["POLYANET", 7]]);
        assert!(parse_goal_map(&goal).is_empty());
    }

    #[test]
    fn test_malformed_error_names_the_row() {
        let err = collect_placements(&json!([[], 3])).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_empty_grid() {
        assert!(parse_goal_map(&json!([])).is_empty());
        assert!(parse_goal_map(&json!([[], []])).is_empty());
    }

    #[test]
    fn test_malformed_grid_logs_one_error() {
        let (logs, _guard) = CapturedLevels::install();

        assert!(parse_goal_map(&json!([[], 3])).is_empty());
        assert_eq!(logs.count(Level::ERROR), 1);
        assert_eq!(logs.total(), 1);
    }

    #[test]
    fn test_valid_grid_logs_nothing() {
        let (logs, _guard) = CapturedLevels::install();

        assert_eq!(parse_goal_map(&json!([["POLYANET", "SPACE"]])).len(), 1);
        assert_eq!(logs.total(), 0);
    }
}
