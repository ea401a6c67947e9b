//! Longest-match ("maximal munch") tokenization over a completed DFA.
//!
//! The scanner never disambiguates a multi-kind accept: if a lexeme is
//! accepted by more than one rule, the emitted [`Token`] simply carries every
//! kind. Any prioritization (keywords over identifiers, say) is left to
//! whatever consumes these tokens.

use crate::dfa::Dfa;
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub token_kinds: BTreeSet<Rc<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Lexer error at index {index}: unexpected character '{character}'")]
pub struct Diagnostic {
    pub index: usize,
    pub character: char,
}

/// Scans text against a borrowed, already-minimized-and-completed [`Dfa`].
pub struct Scanner<'a> {
    dfa: &'a Dfa,
}

impl<'a> Scanner<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        Self { dfa }
    }

    /// Tokenize `input`, returning every emitted token in order and every
    /// diagnostic raised along the way. Whitespace between tokens is
    /// consumed silently; an unrecognized character is reported and skipped
    /// so scanning always makes progress.
    pub fn tokenize(&self, input: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        let chars: Vec<char> = input.chars().collect();
        let mut tokens = Vec::new();
        let mut diagnostics = Vec::new();
        let mut index = 0;

        while index < chars.len() {
            if chars[index].is_whitespace() {
                index += 1;
                continue;
            }

            let (end, kinds) = self.longest_match(&chars, index);

            match end {
                Some(end) => {
                    let lexeme: String = chars[index..=end].iter().collect();
                    tokens.push(Token {
                        lexeme,
                        token_kinds: kinds,
                    });
                    index = end + 1;
                }
                None => {
                    diagnostics.push(Diagnostic {
                        index,
                        character: chars[index],
                    });
                    index += 1;
                }
            }
        }

        (tokens, diagnostics)
    }

    /// Walk the DFA from `start` as far as it will go, remembering the last
    /// position at which it was in an accepting state. Returns `None` if no
    /// prefix starting at `start` is ever accepted.
    fn longest_match(&self, chars: &[char], start: usize) -> (Option<usize>, BTreeSet<Rc<str>>) {
        let mut current = self.dfa.start();
        let mut last_accept = None;
        let mut last_kinds = BTreeSet::new();
        let mut i = start;

        while i < chars.len() {
            let next = match self.dfa.state(current).transition(chars[i]) {
                Some(n) if Some(n) != self.dfa.sink => n,
                _ => break,
            };
            current = next;
            if self.dfa.state(current).is_accepting() {
                last_accept = Some(i);
                last_kinds = self.dfa.state(current).token_kinds.clone();
            }
            i += 1;
        }

        (last_accept, last_kinds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa::{minimize, subset};
    use crate::nfa::merge::merge_rules;
    use crate::ruleset::Rule;

    fn build_dfa(rules: &[Rule]) -> Dfa {
        let (nfa, errors) = merge_rules(rules);
        assert!(errors.is_empty(), "{errors:?}");
        minimize::minimize(&subset::to_dfa(&nfa))
    }

    #[test]
    fn single_literal() {
        let dfa = build_dfa(&[Rule::new("KW", "if.")]);
        let (tokens, diagnostics) = Scanner::new(&dfa).tokenize("if");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "if");
        assert_eq!(tokens[0].token_kinds, BTreeSet::from([Rc::from("KW")]));
    }

    #[test]
    fn kleene_star_is_greedy() {
        let dfa = build_dfa(&[Rule::new("A", "aa*.")]);
        let (tokens, diagnostics) = Scanner::new(&dfa).tokenize("aaaa");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "aaaa");
    }

    #[test]
    fn ambiguous_accept_carries_both_kinds() {
        let dfa = build_dfa(&[Rule::new("KEYWORD", "if."), Rule::new("IDENTIFIER", "aa*.")]);
        let (tokens, diagnostics) = Scanner::new(&dfa).tokenize("if");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].token_kinds,
            BTreeSet::from([Rc::from("KEYWORD"), Rc::from("IDENTIFIER")])
        );
    }

    #[test]
    fn whitespace_separates_tokens() {
        let dfa = build_dfa(&[Rule::new("KEYWORD", "if."), Rule::new("IDENTIFIER", "aa*.")]);
        let (tokens, diagnostics) = Scanner::new(&dfa).tokenize("if aaaa if");
        assert!(diagnostics.is_empty());
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["if", "aaaa", "if"]);
    }

    #[test]
    fn unrecognized_character_is_reported_and_recovered() {
        let dfa = build_dfa(&[Rule::new("KEYWORD", "if."), Rule::new("IDENTIFIER", "aa*.")]);
        let (tokens, diagnostics) = Scanner::new(&dfa).tokenize("if $a");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].index, 3);
        assert_eq!(diagnostics[0].character, '$');
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["if", "a"]);
    }

    #[test]
    fn alternation_yields_single_char_tokens() {
        let dfa = build_dfa(&[Rule::new("AB", "ab|")]);
        let (tokens, diagnostics) = Scanner::new(&dfa).tokenize("abba");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 4);
        for t in &tokens {
            assert_eq!(t.token_kinds, BTreeSet::from([Rc::from("AB")]));
        }
    }

    #[test]
    fn scanner_always_makes_progress() {
        let dfa = build_dfa(&[]);
        let (tokens, diagnostics) = Scanner::new(&dfa).tokenize("xyz");
        assert!(tokens.is_empty());
        assert_eq!(diagnostics.len(), 3);
    }
}
