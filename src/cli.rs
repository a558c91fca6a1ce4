use clap::{Args, Parser, Subcommand};

use crate::calc::Operator;
use crate::defaults::Defaults;

/// Two-screen integer calculator for the terminal
#[derive(Parser, Debug)]
#[command(version, about = "Two-screen integer calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    #[command(flatten)]
    pub tui: TuiArgs,
}

#[derive(Args, Debug, Clone)]
pub struct TuiArgs {
    /// Operator selected when a calculator screen opens
    #[arg(long, value_enum, default_value_t = Defaults::OPERATOR)]
    pub operator: Operator,

    /// Text shown in the result label while an input is empty
    #[arg(long, default_value = Defaults::PLACEHOLDER)]
    pub placeholder: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive calculator (the default)
    Tui(TuiArgs),

    /// Compute one result without opening the UI
    #[command(allow_negative_numbers = true)]
    Eval {
        /// First operand
        operand1: String,

        /// add|sub|mul|div (or + - * /)
        #[arg(value_enum)]
        operator: Operator,

        /// Second operand
        operand2: String,

        /// Print a JSON object instead of "= result"
        #[arg(long)]
        json: bool,
    },
}
