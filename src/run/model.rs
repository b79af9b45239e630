use crate::execution::model::TestCaseResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// State of one process run. Counters and results only change together
/// through [`Run::record`], so `tests_run == results.len()` always holds.
#[derive(Serialize, Clone, Debug)]
pub struct Run {
    pub id: String,
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    tests_run: usize,
    tests_passed: usize,
    results: Vec<TestCaseResult>,
}

impl Run {
    pub fn new(base_url: String) -> Self {
        Run {
            id: uuid::Uuid::new_v4().to_string(),
            base_url,
            started_at: Utc::now(),
            tests_run: 0,
            tests_passed: 0,
            results: vec![],
        }
    }

    pub fn record(&mut self, result: TestCaseResult) {
        self.tests_run += 1;
        if result.success {
            self.tests_passed += 1;
        }
        self.results.push(result);
    }

    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    pub fn tests_passed(&self) -> usize {
        self.tests_passed
    }

    pub fn results(&self) -> &[TestCaseResult] {
        &self.results
    }

    pub fn failed(&self) -> impl Iterator<Item = &TestCaseResult> {
        self.results().iter().filter(|result| !result.success)
    }
}
