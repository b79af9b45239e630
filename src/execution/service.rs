use crate::assertion::check::check_status;
use crate::case::model::TestCase;
use crate::execution::model::{ActualStatus, TestCaseResult};
use crate::http::{HttpError, HttpResult, Payload};

pub fn build_result(
    case: &TestCase,
    outcome: Result<HttpResult, HttpError>,
    elapsed_ms: u64,
) -> TestCaseResult {
    let actual_status = resolve_status_code(&outcome);
    let success = check_status(case.expected_status, actual_status).success;
    let (response_data, error) = match outcome {
        Ok(http_result) if success => (Some(http_result.res_body), None),
        Ok(http_result) => (None, Some(http_result.res_body)),
        Err(err) => (None, Some(Payload::Text(err.to_string()))),
    };
    TestCaseResult {
        test_name: case.name.clone(),
        method: case.method,
        endpoint: case.endpoint.clone(),
        expected_status: case.expected_status,
        actual_status,
        success,
        response_data,
        error,
        elapsed_ms,
    }
}

fn resolve_status_code(outcome: &Result<HttpResult, HttpError>) -> ActualStatus {
    match outcome {
        Ok(http_result) => ActualStatus::Code(http_result.status_code),
        Err(_) => ActualStatus::Error,
    }
}
