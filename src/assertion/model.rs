#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AssertionResult {
    pub success: bool,
    pub message: Option<String>,
}

impl AssertionResult {
    pub fn from_error(message: String) -> Self {
        AssertionResult {
            success: false,
            message: Some(message),
        }
    }

    pub fn of_success() -> Self {
        AssertionResult {
            success: true,
            message: None,
        }
    }
}
