//! Graphviz `.dot` export for [`lexforge`] NFAs and DFAs.
//!
//! Pure string generation: nothing here touches the filesystem. Writing the
//! result to a file (and reporting the I/O failure if that fails) is the
//! caller's job — this crate hands back a `String` and nothing else.

use lexforge::dfa::Dfa;
use lexforge::nfa::Nfa;
use std::fmt::Write as _;

/// Render an NFA as Graphviz `.dot` source. States are labeled `qN`;
/// accepting states are filled light blue doublecircles labeled with their
/// comma-joined token kinds, non-accepting states are filled light grey
/// circles. ε-edges are drawn in red.
pub fn nfa_to_dot(nfa: &Nfa) -> String {
    let mut out = String::new();
    writeln!(out, "digraph NFA {{").unwrap();
    writeln!(out, "  rankdir=LR;").unwrap();

    for (idx, state) in nfa.states().iter().enumerate() {
        write_state_node(&mut out, idx, state.token_kind.as_deref());
    }

    for (idx, state) in nfa.states().iter().enumerate() {
        for (symbol, targets) in state.transitions() {
            for &to in targets {
                writeln!(out, "  q{idx} -> q{to} [label=\"{}\"];", escape(&symbol.to_string())).unwrap();
            }
        }
        for &to in state.epsilon_successors() {
            writeln!(out, "  q{idx} -> q{to} [label=\"\u{3b5}\", color=red, fontcolor=red];").unwrap();
        }
    }

    writeln!(out, "}}").unwrap();
    out
}

/// Render a DFA as Graphviz `.dot` source, same node/label conventions as
/// [`nfa_to_dot`] minus the ε-edges (a DFA has none).
pub fn dfa_to_dot(dfa: &Dfa) -> String {
    let mut out = String::new();
    writeln!(out, "digraph DFA {{").unwrap();
    writeln!(out, "  rankdir=LR;").unwrap();

    for (idx, state) in dfa.states().iter().enumerate() {
        let kinds: Vec<&str> = state.token_kinds.iter().map(|k| k.as_ref()).collect();
        let label = if kinds.is_empty() {
            None
        } else {
            Some(kinds.join(","))
        };
        write_state_node(&mut out, idx, label.as_deref());
    }

    for (idx, state) in dfa.states().iter().enumerate() {
        for (symbol, to) in state.transitions() {
            writeln!(out, "  q{idx} -> q{to} [label=\"{}\"];", escape(&symbol.to_string())).unwrap();
        }
    }

    writeln!(out, "}}").unwrap();
    out
}

fn write_state_node(out: &mut String, idx: usize, kinds_label: Option<&str>) {
    match kinds_label {
        Some(kinds) => {
            writeln!(
                out,
                "  q{idx} [shape=doublecircle, style=filled, fillcolor=lightblue, label=\"q{idx}\\n{}\"];",
                escape(kinds)
            )
            .unwrap();
        }
        None => {
            writeln!(
                out,
                "  q{idx} [shape=circle, style=filled, fillcolor=lightgrey, label=\"q{idx}\"];"
            )
            .unwrap();
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
