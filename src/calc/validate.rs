/// Both operand texts must be non-empty. Whitespace counts as content and
/// nothing is checked for being numeric here.
pub fn is_complete(operand1: &str, operand2: &str) -> bool {
    !operand1.is_empty() && !operand2.is_empty()
}
