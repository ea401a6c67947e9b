use crate::error::Error;
use clap::Args;
use lexforge::dfa;
use lexforge::nfa;
use lexforge::ruleset;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Rule file to load (one `<TOKEN_NAME> <POSTFIX_REGEX>` per line).
    #[arg(long)]
    rules: PathBuf,
    /// Write the merged NFA as Graphviz `.dot` to this path.
    #[arg(long)]
    dot_nfa: Option<PathBuf>,
    /// Write the minimized DFA as Graphviz `.dot` to this path.
    #[arg(long)]
    dot_dfa: Option<PathBuf>,
    /// Print a transition table for the minimized DFA.
    #[arg(long)]
    table: bool,
}

pub fn run(args: BuildArgs) {
    let source = match std::fs::read_to_string(&args.rules) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", Error::ReadFile(args.rules.clone(), e));
            std::process::exit(1);
        }
    };

    let (rules, load_errors) = ruleset::load(&source);
    for e in &load_errors {
        eprintln!("{e}");
    }

    let (merged_nfa, build_errors) = nfa::merge::merge_rules(&rules);
    for e in &build_errors {
        eprintln!("{e}");
    }

    let dfa = dfa::minimize::minimize(&dfa::subset::to_dfa(&merged_nfa));

    println!(
        "built DFA with {} states over {} rule(s) ({} skipped)",
        dfa.states().len(),
        rules.len(),
        load_errors.len() + build_errors.len()
    );

    if let Some(path) = args.dot_nfa {
        write_dot(&path, lexforge_dot::nfa_to_dot(&merged_nfa));
    }
    if let Some(path) = args.dot_dfa {
        write_dot(&path, lexforge_dot::dfa_to_dot(&dfa));
    }

    if args.table {
        print_table(&dfa);
    }
}

fn write_dot(path: &std::path::Path, contents: String) {
    if let Err(e) = std::fs::write(path, contents) {
        eprintln!("{}", Error::WriteFile(path.to_path_buf(), e));
    }
}

fn print_table(dfa: &lexforge::dfa::Dfa) {
    let alphabet: Vec<char> = dfa.alphabet().into_iter().collect();
    print!("     ");
    for c in &alphabet {
        print!("{c:>4}");
    }
    println!();
    for (idx, state) in dfa.states().iter().enumerate() {
        let marker = if state.is_accepting() { "*" } else { " " };
        print!("{marker}q{idx:<3}");
        for &c in &alphabet {
            match state.transition(c) {
                Some(t) => print!("{t:>4}"),
                None => print!("   -"),
            }
        }
        println!();
    }
}
