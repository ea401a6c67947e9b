use crate::error::Error;
use clap::Args;
use lexforge::dfa;
use lexforge::nfa;
use lexforge::ruleset;
use lexforge::scanner::Scanner;
use std::path::PathBuf;

#[derive(Debug, Args)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["text", "input"])))]
pub struct ScanArgs {
    /// Rule file to load (one `<TOKEN_NAME> <POSTFIX_REGEX>` per line).
    #[arg(long)]
    rules: PathBuf,
    /// Scan this literal string instead of reading a file.
    #[arg(long)]
    text: Option<String>,
    /// Scan the contents of this file.
    #[arg(long)]
    input: Option<PathBuf>,
}

pub fn run(args: ScanArgs) {
    let rules_source = match std::fs::read_to_string(&args.rules) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", Error::ReadFile(args.rules.clone(), e));
            std::process::exit(1);
        }
    };
    let (rules, load_errors) = ruleset::load(&rules_source);
    for e in &load_errors {
        eprintln!("{e}");
    }

    let (merged_nfa, build_errors) = nfa::merge::merge_rules(&rules);
    for e in &build_errors {
        eprintln!("{e}");
    }
    let dfa = dfa::minimize::minimize(&dfa::subset::to_dfa(&merged_nfa));

    let input_text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", Error::ReadFile(path.clone(), e));
                std::process::exit(1);
            }
        },
        (None, None) => unreachable!("clap enforces exactly one of --text/--input"),
    };

    let (tokens, diagnostics) = Scanner::new(&dfa).tokenize(&input_text);

    let mut exit_code = 0;
    for token in &tokens {
        let kinds: Vec<&str> = token.token_kinds.iter().map(|k| k.as_ref()).collect();
        println!("{:?} -> [{}]", token.lexeme, kinds.join(", "));
    }
    for diagnostic in &diagnostics {
        eprintln!("{diagnostic}");
        exit_code = 1;
    }

    std::process::exit(exit_code);
}
