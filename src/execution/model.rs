use crate::http::{HttpMethod, Payload};
use serde::{Serialize, Serializer};
use std::fmt;

/// Status observed for a test case: the response code, or `Error` when no
/// response was received at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActualStatus {
    Code(u16),
    Error,
}

impl ActualStatus {
    pub fn matches(&self, expected: u16) -> bool {
        *self == ActualStatus::Code(expected)
    }
}

impl fmt::Display for ActualStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActualStatus::Code(code) => write!(f, "{}", code),
            ActualStatus::Error => write!(f, "ERROR"),
        }
    }
}

impl Serialize for ActualStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ActualStatus::Code(code) => serializer.serialize_u16(*code),
            ActualStatus::Error => serializer.serialize_str("ERROR"),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TestCaseResult {
    pub test_name: String,
    pub method: HttpMethod,
    pub endpoint: String,
    pub expected_status: u16,
    pub actual_status: ActualStatus,
    pub success: bool,
    pub response_data: Option<Payload>,
    pub error: Option<Payload>,
    pub elapsed_ms: u64,
}

impl TestCaseResult {
    /// The response data of a passing test, the error of a failing one.
    pub fn payload(&self) -> Option<&Payload> {
        if self.success {
            self.response_data.as_ref()
        } else {
            self.error.as_ref()
        }
    }
}
