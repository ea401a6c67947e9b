//! Combining one NFA per rule into a single NFA with a fresh start state.
//!
//! Each rule's accept state keeps the `token_kind` label the builder stamped
//! on it; the merger never inspects or rewrites those labels, it only
//! reindexes states and adds ε-edges from a new start.

use super::build::{self, BuildError};
use super::{Nfa, NfaState};
use crate::ruleset::Rule;
use std::rc::Rc;

/// A rule whose postfix regex failed to build into an NFA. Carries the
/// rule's token kind so the caller can report which rule was at fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rule '{token_kind}': {source}")]
pub struct RuleBuildError {
    pub token_kind: Rc<str>,
    #[source]
    pub source: BuildError,
}

/// Build and merge every rule's NFA in one step. Rules whose regex fails to
/// build are skipped and reported in the returned diagnostics; the merged
/// NFA reflects only the rules that succeeded. If every rule fails (or
/// `rules` is empty) the result is an NFA with only the fresh start state
/// and no accept states, i.e. the empty language.
pub fn merge_rules(rules: &[Rule]) -> (Nfa, Vec<RuleBuildError>) {
    let mut built = Vec::with_capacity(rules.len());
    let mut errors = Vec::new();
    for rule in rules {
        match build::build(&rule.postfix_regex, rule.token_kind.clone()) {
            Ok(nfa) => built.push(nfa),
            Err(source) => errors.push(RuleBuildError {
                token_kind: rule.token_kind.clone(),
                source,
            }),
        }
    }
    (merge(built), errors)
}

/// Merge already-built NFAs under a fresh start state with an ε-edge to each
/// one's former start.
pub fn merge(nfas: Vec<Nfa>) -> Nfa {
    let mut states: Vec<NfaState> = vec![NfaState::default()];
    let mut start_targets = Vec::with_capacity(nfas.len());

    for nfa in nfas {
        let offset = states.len();
        start_targets.push(offset + nfa.start);
        for state in nfa.states {
            let transitions = state
                .transitions
                .into_iter()
                .map(|(c, targets)| (c, targets.into_iter().map(|t| t + offset).collect()))
                .collect();
            let epsilon = state.epsilon.into_iter().map(|t| t + offset).collect();
            states.push(NfaState {
                transitions,
                epsilon,
                token_kind: state.token_kind,
            });
        }
    }

    let mut merged = Nfa { states, start: 0 };
    for target in start_targets {
        merged.add_epsilon(0, target);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(kind: &str, regex: &str) -> Rule {
        Rule::new(kind, regex)
    }

    #[test]
    fn empty_rule_list_is_empty_language() {
        let (nfa, errors) = merge_rules(&[]);
        assert!(errors.is_empty());
        assert_eq!(nfa.states().len(), 1);
        assert!(!nfa.states()[0].is_accepting());
    }

    #[test]
    fn bad_rule_is_reported_and_skipped() {
        let rules = vec![rule("A", "a"), rule("B", "*")];
        let (nfa, errors) = merge_rules(&rules);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].token_kind.as_ref(), "B");
        // the NFA still contains the merged start plus rule A's two states
        assert_eq!(nfa.states().len(), 3);
    }

    #[test]
    fn accept_labels_survive_merge() {
        let rules = vec![rule("KEYWORD", "if."), rule("IDENTIFIER", "aa*.")];
        let (nfa, errors) = merge_rules(&rules);
        assert!(errors.is_empty());
        let kinds: std::collections::BTreeSet<Rc<str>> = nfa
            .states()
            .iter()
            .filter_map(|s| s.token_kind.clone())
            .collect();
        assert_eq!(kinds.len(), 2);
    }
}
