use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calc::Operator;
use crate::defaults::Defaults;

/// Which main-screen field asked the secondary screen for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestTarget {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Ok,
    Canceled,
}

/// What a child screen hands back to the screen that pushed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenResult {
    pub request: RequestTarget,
    pub status: ResultStatus,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, i32>,
}

impl ScreenResult {
    pub fn ok(request: RequestTarget, result: i32) -> Self {
        let mut extras = BTreeMap::new();
        extras.insert(Defaults::RESULT_KEY.to_string(), result);
        Self { request, status: ResultStatus::Ok, extras }
    }

    pub fn canceled(request: RequestTarget) -> Self {
        Self { request, status: ResultStatus::Canceled, extras: BTreeMap::new() }
    }

    /// The returned integer, only when the child reported success and
    /// actually set the result key.
    pub fn result(&self) -> Option<i32> {
        if self.status != ResultStatus::Ok {
            return None;
        }
        self.extras.get(Defaults::RESULT_KEY).copied()
    }
}

/// Runtime knobs, filled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub placeholder: String,
    pub initial_operator: Operator,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder: Defaults::PLACEHOLDER.to_string(),
            initial_operator: Defaults::OPERATOR,
        }
    }
}

/// One headless evaluation, as printed by `eval --json`.
#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub operand1: String,
    pub operator: Operator,
    pub operand2: String,
    pub result: Option<i32>,
    pub display: String,
}
