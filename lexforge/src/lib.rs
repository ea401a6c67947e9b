//! # lexforge
//!
//! `lexforge` builds a longest-match lexical scanner out of a list of named
//! token rules, each a regular expression given in **postfix** form. The
//! pipeline is the classic one:
//!
//! 1. [`nfa::build`] turns one rule's postfix regex into an NFA (Thompson's
//!    construction).
//! 2. [`nfa::merge`] combines every rule's NFA into a single NFA whose accept
//!    states still remember which rule(s) they came from.
//! 3. [`dfa::subset`] turns that NFA into a DFA via subset construction,
//!    keeping the union of token kinds on every accepting state.
//! 4. [`dfa::minimize`] shrinks the DFA with a Hopcroft-style partition
//!    refinement that treats two accepting states as distinguishable unless
//!    their token-kind sets are exactly equal, then completes it with a sink
//!    state so every (state, symbol) pair has a transition.
//! 5. [`scanner`] walks the finished DFA over input text, emitting the
//!    longest token at each position and recovering from unknown characters
//!    by skipping one and continuing.
//!
//! Rule files are loaded with [`ruleset::load`]; a ready-made worked example:
//!
//! ```rust
//! use lexforge::ruleset::Rule;
//! use lexforge::nfa;
//! use lexforge::dfa;
//! use lexforge::scanner::Scanner;
//!
//! let rules = vec![
//!     Rule::new("KEYWORD", "if."),
//!     Rule::new("IDENTIFIER", "aa*."),
//! ];
//! let (nfa, errors) = nfa::merge::merge_rules(&rules);
//! assert!(errors.is_empty());
//! let dfa = dfa::subset::to_dfa(&nfa);
//! let dfa = dfa::minimize::minimize(&dfa);
//! let scanner = Scanner::new(&dfa);
//! let (tokens, diagnostics) = scanner.tokenize("if aaaa");
//! assert_eq!(tokens.len(), 2);
//! assert!(diagnostics.is_empty());
//! ```
//!
//! Everything here is single-threaded, synchronous batch processing: rules go
//! in, tokens and diagnostics come out. No stage mutates another stage's
//! output; minimization and subset construction each build a brand new `Dfa`.

pub mod dfa;
pub mod nfa;
pub mod ruleset;
pub mod scanner;
