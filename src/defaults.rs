//! Central place for all default values.
//! Update these and the whole app picks them up.

use crate::calc::Operator;

pub struct Defaults;

impl Defaults {
    /* Result label */
    pub const PLACEHOLDER: &'static str = "Enter two numbers";

    /* Operator selected when a screen opens */
    pub const OPERATOR: Operator = Operator::Add;

    /* Cross-screen exchange */
    pub const RESULT_KEY: &'static str = "result";

    /* Event loop */
    pub const POLL_INTERVAL_MS: u64 = 250;

    /* Logging: path prefix for the log file; unset means no logging */
    pub const LOG_ENV: &'static str = "TWIN_CALC_LOG";
    pub const LOG_FILTER: &'static str = "info";
}
