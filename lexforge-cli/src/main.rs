mod build;
mod error;
mod scan;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lexforge", about = "Build and run a postfix-regex lexer")]
struct LexforgeArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a DFA from a rule file, optionally exporting `.dot` diagrams.
    Build(build::BuildArgs),
    /// Build a DFA from a rule file and scan some text with it.
    Scan(scan::ScanArgs),
}

fn main() {
    let args = LexforgeArgs::parse();
    match args.command {
        Command::Build(args) => build::run(args),
        Command::Scan(args) => scan::run(args),
    }
}
