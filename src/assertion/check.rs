use crate::assertion::model::AssertionResult;
use crate::execution::model::ActualStatus;
use serde_json::Value;

pub fn check_status(expected: u16, actual: ActualStatus) -> AssertionResult {
    if actual.matches(expected) {
        AssertionResult::of_success()
    } else {
        AssertionResult::from_error(format!("Expected {}, got {}", expected, actual))
    }
}

pub fn check_contains(values: &[Value], needle: &Value) -> AssertionResult {
    if values.contains(needle) {
        AssertionResult::of_success()
    } else {
        AssertionResult::from_error(format!("{} not found among {} values", needle, values.len()))
    }
}
