mod commands;
mod output;

use clap::{Parser, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "handler-diff")]
#[command(about = "Compare per-node handler functions between two grammar formatter sources")]
#[command(version)]
pub struct Cli {
    #[arg(
        help = "Path to the C-grammar handler source",
        default_value = "src/c_ast.rs"
    )]
    pub old: String,
    #[arg(
        help = "Path to the C++-grammar handler source",
        default_value = "src/cpp_ast.rs"
    )]
    pub new: String,
    #[arg(
        long,
        value_name = "PATH",
        default_value = "diffs",
        help = "Where to write the body-diff report"
    )]
    pub report: String,
    #[arg(
        long,
        short,
        value_enum,
        default_value = "text",
        help = "Output format for standard output"
    )]
    pub format: OutputFormat,
    #[arg(
        long,
        help = "Scan both sides unfiltered (disable the built-in C++-only handler list)"
    )]
    pub no_exclusions: bool,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::compare::run(
        &cli.old,
        &cli.new,
        &cli.report,
        cli.format,
        cli.no_exclusions,
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
