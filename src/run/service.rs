use crate::case::model::TestCase;
use crate::execution::model::{ActualStatus, TestCaseResult};
use crate::execution::service::build_result;
use crate::http::{ApiClient, Payload};
use crate::run::model::Run;
use std::time::Instant;
use tracing::info;

/// Executes test cases one at a time and owns the state of the run.
pub struct Runner {
    client: ApiClient,
    run: Run,
}

impl Runner {
    pub fn new(client: ApiClient) -> Self {
        let run = Run::new(client.base_url().to_string());
        Runner { client, run }
    }

    pub fn run(&self) -> &Run {
        &self.run
    }

    pub fn into_run(self) -> Run {
        self.run
    }

    /// Sends the request described by `case` and records the outcome.
    ///
    /// Transport failures are recorded like any other failure; this never
    /// aborts the run. Returns whether the expected status was observed,
    /// along with the response data (on success) or the error (otherwise).
    pub async fn execute_request(&mut self, case: TestCase) -> (bool, Option<Payload>) {
        let url = self.client.url_for(&case.to_endpoint());
        println!("\nTesting {}...", case.name);
        println!("   URL: {}", url);
        info!(run_id = %self.run.id, test = %case.name, method = %case.method, "executing test case");

        let started_at = Instant::now();
        let outcome = self.client.execute(case.to_http_request()).await;
        let elapsed_ms = started_at.elapsed().as_millis() as u64;

        let result = build_result(&case, outcome, elapsed_ms);
        print_outcome(&result);
        if !result.success {
            info!(test = %result.test_name, actual = %result.actual_status, expected = result.expected_status, "test case failed");
        }
        let success = result.success;
        let payload = result.payload().cloned();
        self.run.record(result);
        (success, payload)
    }
}

fn print_outcome(result: &TestCaseResult) {
    if result.success {
        println!("[PASS] Status: {}", result.actual_status);
        if let Some(data) = &result.response_data {
            println!("   Response: {}", data.render());
        }
        return;
    }
    let error = result.error.as_ref().map(Payload::render).unwrap_or_default();
    match result.actual_status {
        ActualStatus::Error => println!("[FAIL] Error: {}", error),
        actual => {
            println!("[FAIL] Expected {}, got {}", result.expected_status, actual);
            println!("   Error: {}", error);
        }
    }
}
