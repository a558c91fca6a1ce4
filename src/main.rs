use anyhow::Result;
use clap::Parser;

use twin_calc::app::run_app;
use twin_calc::cli::{Cli, Command, TuiArgs};
use twin_calc::commands;
use twin_calc::logging::init_tracing;
use twin_calc::types::Settings;

fn settings_from(args: TuiArgs) -> Settings {
    Settings { placeholder: args.placeholder, initial_operator: args.operator }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    match cli.cmd {
        None => run_app(settings_from(cli.tui)).await,
        Some(Command::Tui(args)) => run_app(settings_from(args)).await,
        Some(Command::Eval { operand1, operator, operand2, json }) => {
            let eval = commands::eval::evaluate(&operand1, operator, &operand2, &cli.tui.placeholder)?;
            commands::eval::emit(&eval, json)
        }
    }
}
