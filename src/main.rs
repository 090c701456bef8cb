use clap::{Parser, Subcommand};

mod cmd;
mod core;

#[derive(Parser, Debug)]
#[command(
    name = "taxin",
    version,
    about = "Indian Income Tax Calculator - Old vs New regime comparison (FY 2024-25)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute both regimes from an input snapshot and report the cheaper one
    Report(cmd::report::ReportCommand),
    /// Check an input file for problems without computing a report
    Validate(cmd::validate::ValidateCommand),
    /// Print expected input and export formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Report(cmd) => cmd.exec(),
        Command::Validate(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
