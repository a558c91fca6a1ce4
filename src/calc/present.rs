use super::{parse_operand, calculate, CalculationInput};

/// Text for the result label.
///
/// Incomplete input and operands that do not (yet) parse show `placeholder`;
/// a failing calculation shows the error so typing a `0` divisor does not
/// tear the screen down.
pub fn present(input: &CalculationInput, placeholder: &str) -> String {
    if !input.is_complete() {
        return placeholder.to_string();
    }
    let (Ok(a), Ok(b)) = (parse_operand(&input.operand1), parse_operand(&input.operand2)) else {
        return placeholder.to_string();
    };
    match calculate(a, b, input.operator) {
        Ok(v) => format_result(v),
        Err(e) => format!("error: {e}"),
    }
}

pub fn format_result(value: i32) -> String {
    format!("= {value}")
}
