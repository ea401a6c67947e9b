//! DFA minimization: reachability pruning, liveness pruning, a Hopcroft-style
//! partition refinement that respects token-kind labels, and sink
//! completion.
//!
//! The partition refinement here is the straightforward O(n²·|A|)
//! iterate-until-stable formulation rather than the fully indexed O(n·|A|
//! log n) one — adequate at the state counts a lexer's DFA reaches, and
//! easier to see is correct.

use super::{Dfa, DfaState};
use std::collections::{BTreeSet, HashMap, VecDeque};

pub fn minimize(dfa: &Dfa) -> Dfa {
    let reachable = reachable_states(dfa);
    let live = live_states(dfa, &reachable);

    if !live.contains(&dfa.start()) {
        return empty_language_dfa(dfa);
    }

    let pruned = restrict(dfa, &live);
    let minimized = merge_equivalent_states(&pruned);
    complete_with_sink(minimized)
}

fn reachable_states(dfa: &Dfa) -> BTreeSet<usize> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::from([dfa.start()]);
    seen.insert(dfa.start());
    while let Some(s) = queue.pop_front() {
        for (_, t) in dfa.state(s).transitions() {
            if seen.insert(t) {
                queue.push_back(t);
            }
        }
    }
    seen
}

fn live_states(dfa: &Dfa, reachable: &BTreeSet<usize>) -> BTreeSet<usize> {
    let mut reverse: HashMap<usize, Vec<usize>> = HashMap::new();
    for &s in reachable {
        for (_, t) in dfa.state(s).transitions() {
            if reachable.contains(&t) {
                reverse.entry(t).or_default().push(s);
            }
        }
    }

    let mut live = BTreeSet::new();
    let mut queue = VecDeque::new();
    for &s in reachable {
        if dfa.state(s).is_accepting() && live.insert(s) {
            queue.push_back(s);
        }
    }
    while let Some(s) = queue.pop_front() {
        if let Some(preds) = reverse.get(&s) {
            for &p in preds {
                if live.insert(p) {
                    queue.push_back(p);
                }
            }
        }
    }
    live
}

/// Build a new DFA containing only `keep`, with indices renumbered and any
/// transition leaving `keep` simply dropped (its target was proven dead).
fn restrict(dfa: &Dfa, keep: &BTreeSet<usize>) -> Dfa {
    let remap: HashMap<usize, usize> = keep.iter().enumerate().map(|(i, &s)| (s, i)).collect();

    let states = keep
        .iter()
        .map(|&s| {
            let old = dfa.state(s);
            let transitions = old
                .transitions()
                .filter_map(|(c, t)| remap.get(&t).map(|&t| (c, t)))
                .collect();
            DfaState {
                kernel: old.kernel.clone(),
                transitions,
                token_kinds: old.token_kinds.clone(),
            }
        })
        .collect();

    Dfa {
        states,
        start: remap[&dfa.start()],
        sink: None,
    }
}

/// Iterative signature refinement (a Moore-style fixpoint equivalent to
/// Hopcroft's result, just not its worklist bookkeeping). The initial
/// partition buckets states by their *exact* `token_kinds` set — including
/// the empty set for non-accepting states — which is what keeps two
/// accepting states with different labels from ever being merged.
fn merge_equivalent_states(dfa: &Dfa) -> Dfa {
    let alphabet: Vec<char> = dfa.alphabet().into_iter().collect();
    let n = dfa.states().len();

    let mut block_of = vec![0usize; n];
    {
        let mut next_id: HashMap<BTreeSet<std::rc::Rc<str>>, usize> = HashMap::new();
        for (i, state) in dfa.states().iter().enumerate() {
            let len = next_id.len();
            let id = *next_id.entry(state.token_kinds.clone()).or_insert(len);
            block_of[i] = id;
        }
    }

    loop {
        let mut signature_id: HashMap<(usize, Vec<Option<usize>>), usize> = HashMap::new();
        let mut new_block_of = vec![0usize; n];
        for (i, state) in dfa.states().iter().enumerate() {
            let sig: Vec<Option<usize>> = alphabet
                .iter()
                .map(|&c| state.transition(c).map(|t| block_of[t]))
                .collect();
            let len = signature_id.len();
            let id = *signature_id.entry((block_of[i], sig)).or_insert(len);
            new_block_of[i] = id;
        }
        let stable = signature_id.len() == block_of.iter().collect::<BTreeSet<_>>().len();
        block_of = new_block_of;
        if stable {
            break;
        }
    }

    let block_count = block_of.iter().copied().max().map_or(0, |m| m + 1);
    let mut new_states = vec![
        DfaState {
            kernel: BTreeSet::new(),
            transitions: HashMap::new(),
            token_kinds: BTreeSet::new(),
        };
        block_count
    ];
    let mut representative = vec![usize::MAX; block_count];
    for (i, &block) in block_of.iter().enumerate() {
        new_states[block].kernel.extend(dfa.state(i).kernel.iter().copied());
        if representative[block] == usize::MAX {
            representative[block] = i;
            new_states[block].token_kinds = dfa.state(i).token_kinds.clone();
        }
    }
    for (block, &rep) in representative.iter().enumerate() {
        let transitions = dfa
            .state(rep)
            .transitions()
            .map(|(c, t)| (c, block_of[t]))
            .collect();
        new_states[block].transitions = transitions;
    }

    Dfa {
        states: new_states,
        start: block_of[dfa.start()],
        sink: None,
    }
}

/// Add one non-accepting sink state with a self-loop on every symbol the
/// minimized DFA transitions on, and redirect every missing transition to
/// it, making the DFA total.
fn complete_with_sink(mut dfa: Dfa) -> Dfa {
    let alphabet: Vec<char> = dfa.alphabet().into_iter().collect();
    let sink_idx = dfa.states.len();

    let mut sink = DfaState::default();
    for &c in &alphabet {
        sink.transitions.insert(c, sink_idx);
    }
    dfa.states.push(sink);

    for state in &mut dfa.states {
        for &c in &alphabet {
            state.transitions.entry(c).or_insert(sink_idx);
        }
    }

    dfa.sink = Some(sink_idx);
    dfa
}

fn empty_language_dfa(original: &Dfa) -> Dfa {
    let mut sink = DfaState::default();
    for c in original.alphabet() {
        sink.transitions.insert(c, 0);
    }
    Dfa {
        states: vec![sink],
        start: 0,
        sink: Some(0),
    }
}
