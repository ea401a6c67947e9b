//! Subset (powerset) construction: NFA → DFA.
//!
//! DFA states are canonicalized by their NFA kernel (the exact set of NFA
//! states they represent), so no two states with equal kernels are ever
//! created. The resulting DFA may be partial — a state has no transition
//! under a symbol if every move from its kernel under that symbol leads
//! nowhere; [`super::minimize::minimize`] is what makes it total.

use super::{Dfa, DfaState};
use crate::nfa::Nfa;
use std::collections::{BTreeSet, HashMap, VecDeque};

pub fn to_dfa(nfa: &Nfa) -> Dfa {
    let alphabet = nfa.alphabet();
    let start_kernel = nfa.epsilon_closure(&BTreeSet::from([nfa.start()]));

    let mut kernel_to_idx: HashMap<BTreeSet<usize>, usize> = HashMap::new();
    let mut states: Vec<DfaState> = Vec::new();
    let mut worklist: VecDeque<usize> = VecDeque::new();

    let start_idx = intern(&mut kernel_to_idx, &mut states, nfa, start_kernel);
    worklist.push_back(start_idx);

    while let Some(current) = worklist.pop_front() {
        let kernel = states[current].kernel.clone();
        for &symbol in &alphabet {
            let moved = nfa.move_set(&kernel, symbol);
            if moved.is_empty() {
                continue;
            }
            let next_kernel = nfa.epsilon_closure(&moved);
            let next_idx = match kernel_to_idx.get(&next_kernel) {
                Some(&idx) => idx,
                None => {
                    let idx = intern(&mut kernel_to_idx, &mut states, nfa, next_kernel);
                    worklist.push_back(idx);
                    idx
                }
            };
            states[current].transitions.insert(symbol, next_idx);
        }
    }

    Dfa {
        states,
        start: start_idx,
        sink: None,
    }
}

fn intern(
    map: &mut HashMap<BTreeSet<usize>, usize>,
    states: &mut Vec<DfaState>,
    nfa: &Nfa,
    kernel: BTreeSet<usize>,
) -> usize {
    let token_kinds = nfa.token_kinds(&kernel);
    let idx = states.len();
    map.insert(kernel.clone(), idx);
    states.push(DfaState {
        kernel,
        transitions: HashMap::new(),
        token_kinds,
    });
    idx
}
