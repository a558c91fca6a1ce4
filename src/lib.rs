pub mod app;
pub mod calc;
pub mod cli;
pub mod commands;
pub mod defaults;
pub mod logging;
pub mod screens;
pub mod types;
pub mod ui;
