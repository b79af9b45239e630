#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expression {
    pub value: String,
}

impl Expression {
    pub fn new(value: &str) -> Self {
        Expression {
            value: value.to_string(),
        }
    }
}
