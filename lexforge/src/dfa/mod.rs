//! DFA representation produced by subset construction and consumed by the
//! minimizer and the scanner.

use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

pub mod minimize;
pub mod subset;

/// One DFA state: the NFA kernel it represents, its outgoing transitions,
/// and the token kinds it accepts (empty iff the state is non-accepting).
#[derive(Debug, Clone, Default)]
pub struct DfaState {
    pub kernel: BTreeSet<usize>,
    transitions: HashMap<char, usize>,
    pub token_kinds: BTreeSet<Rc<str>>,
}

impl DfaState {
    pub fn is_accepting(&self) -> bool {
        !self.token_kinds.is_empty()
    }

    pub fn transition(&self, symbol: char) -> Option<usize> {
        self.transitions.get(&symbol).copied()
    }

    pub fn transitions(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.transitions.iter().map(|(&c, &s)| (c, s))
    }
}

/// A DFA: a state arena, a start state, and (once completed by
/// [`minimize::minimize`]) the index of the sink state.
#[derive(Debug, Clone)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: usize,
    /// Set only on a completed DFA; the scanner uses it to stop consuming
    /// the moment it would enter a state that can never accept again.
    pub sink: Option<usize>,
}

impl Dfa {
    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn state(&self, idx: usize) -> &DfaState {
        &self.states[idx]
    }

    pub fn alphabet(&self) -> BTreeSet<char> {
        self.states
            .iter()
            .flat_map(|s| s.transitions().map(|(c, _)| c))
            .collect()
    }

    /// Every (state, symbol) pair has a transition and the sink is set.
    pub fn is_total(&self) -> bool {
        if self.sink.is_none() {
            return false;
        }
        let alphabet = self.alphabet();
        self.states
            .iter()
            .all(|s| alphabet.iter().all(|&c| s.transition(c).is_some()))
    }
}
