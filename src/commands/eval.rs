use anyhow::{Context, Result};
use tracing::info;

use crate::calc::{present, CalculationInput, Operator};
use crate::types::Evaluation;

/// Run the validator and calculator once, outside the UI.
pub fn evaluate(operand1: &str, operator: Operator, operand2: &str, placeholder: &str) -> Result<Evaluation> {
    let input = CalculationInput::new(operand1, operand2, operator);
    let result = input
        .evaluate()
        .with_context(|| format!("evaluating {operand1} {} {operand2}", operator.symbol()))?;
    info!(operand1, ?operator, operand2, ?result, "eval");
    Ok(Evaluation {
        operand1: operand1.to_string(),
        operator,
        operand2: operand2.to_string(),
        result,
        display: present(&input, placeholder),
    })
}

pub fn emit(eval: &Evaluation, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(eval)?);
    } else {
        println!("{}", eval.display);
    }
    Ok(())
}
