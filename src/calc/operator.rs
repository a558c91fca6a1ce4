use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::CalcError;

/// The four selector positions, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    #[default]
    #[value(aliases = ["+", "plus"])]
    Add,
    #[value(aliases = ["-", "sub", "minus"])]
    Subtract,
    #[value(aliases = ["*", "x", "mul", "times"])]
    Multiply,
    #[value(aliases = ["/", "div"])]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    pub fn from_index(index: usize) -> Result<Self, CalcError> {
        Self::ALL.get(index).copied().ok_or(CalcError::UnknownOperator(index))
    }

    pub fn index(self) -> usize {
        match self {
            Self::Add => 0,
            Self::Subtract => 1,
            Self::Multiply => 2,
            Self::Divide => 3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    /// Selector stepping wraps around at both ends.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
