use crate::error::AppError;
use crate::execution::model::ActualStatus;
use crate::run::model::Run;
use std::fs;
use std::path::Path;
use tracing::info;

const RULE_WIDTH: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedTest {
    pub test_name: String,
    pub actual_status: ActualStatus,
    pub expected_status: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub tests_run: usize,
    pub tests_passed: usize,
    pub failed: Vec<FailedTest>,
}

impl Summary {
    pub fn from_run(run: &Run) -> Self {
        Summary {
            tests_run: run.tests_run(),
            tests_passed: run.tests_passed(),
            failed: run
                .failed()
                .map(|result| FailedTest {
                    test_name: result.test_name.clone(),
                    actual_status: result.actual_status,
                    expected_status: result.expected_status,
                })
                .collect(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.tests_passed == self.tests_run
    }

    /// Process exit status: 0 when every test passed, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            String::new(),
            "=".repeat(RULE_WIDTH),
            format!(
                "Final Results: {}/{} tests passed",
                self.tests_passed, self.tests_run
            ),
        ];
        if self.all_passed() {
            lines.push("All tests passed!".to_string());
        } else {
            lines.push(format!("{} tests failed", self.tests_run - self.tests_passed));
            if !self.failed.is_empty() {
                lines.push(String::new());
                lines.push("Failed Tests:".to_string());
                for test in &self.failed {
                    lines.push(format!(
                        "   - {}: {} (expected {})",
                        test.test_name, test.actual_status, test.expected_status
                    ));
                }
            }
        }
        lines.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

pub fn write_json_report(path: &Path, run: &Run) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(run)?;
    fs::write(path, json).map_err(|source| AppError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    info!("report written to {}", path.display());
    Ok(())
}
