pub mod operator;
pub mod present;
pub mod validate;

pub use operator::Operator;
pub use present::present;
pub use validate::is_complete;

use thiserror::Error;

/// Everything that can go wrong between two operand strings and an `i32`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("'{0}' is not a whole number")]
    Parse(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown operator index {0}")]
    UnknownOperator(usize),
}

/// Apply `op` to `a` and `b` with two's-complement wrapping. Division
/// truncates toward zero; a zero divisor is the only failure.
pub fn calculate(a: i32, b: i32, op: Operator) -> Result<i32, CalcError> {
    match op {
        Operator::Add => Ok(a.wrapping_add(b)),
        Operator::Subtract => Ok(a.wrapping_sub(b)),
        Operator::Multiply => Ok(a.wrapping_mul(b)),
        Operator::Divide if b == 0 => Err(CalcError::DivisionByZero),
        // i32::MIN / -1 wraps back to i32::MIN
        Operator::Divide => Ok(a.wrapping_div(b)),
    }
}

pub fn parse_operand(text: &str) -> Result<i32, CalcError> {
    text.parse::<i32>().map_err(|_| CalcError::Parse(text.to_string()))
}

/// Raw form contents: two operand texts and the selected operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationInput {
    pub operand1: String,
    pub operand2: String,
    pub operator: Operator,
}

impl CalculationInput {
    pub fn new(operand1: impl Into<String>, operand2: impl Into<String>, operator: Operator) -> Self {
        Self { operand1: operand1.into(), operand2: operand2.into(), operator }
    }

    pub fn is_complete(&self) -> bool {
        is_complete(&self.operand1, &self.operand2)
    }

    /// `Ok(None)` while a field is empty. Once both are filled, parse failures
    /// and arithmetic failures come back as errors.
    pub fn evaluate(&self) -> Result<Option<i32>, CalcError> {
        if !self.is_complete() {
            return Ok(None);
        }
        let a = parse_operand(&self.operand1)?;
        let b = parse_operand(&self.operand2)?;
        calculate(a, b, self.operator).map(Some)
    }
}
