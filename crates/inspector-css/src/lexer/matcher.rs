//! Backtracking matcher for compiled value definitions.
//!
//! Every term is matched at a position of the tokenized value and yields all
//! the ways it can match there, as `(end position, elements)` candidates.
//! Candidates are kept unique by end position, and the first one found for a
//! position wins, so earlier alternatives take priority over later ones.

use std::collections::{HashSet, VecDeque};

use super::node::{Component, CssNode, NodeType};
use super::syntax::{Combinator, Term};
use super::tree::{KeywordSyntax, LexerElement, LexerMatch, LexerToken, MatchSyntax};
use super::{Definition, Lexer};

/// Nesting limit for type and property references.
const MAX_DEPTH: usize = 64;

/// Most terms an `&&` or `||` group can have; used terms are tracked in a `u64`.
pub(crate) const MAX_ANY_ORDER_TERMS: usize = u64::BITS as usize;

type Candidate = (usize, Vec<LexerElement>);

fn push_unique(candidates: &mut Vec<Candidate>, candidate: Candidate) {
    if !candidates.iter().any(|(end, _)| *end == candidate.0) {
        candidates.push(candidate);
    }
}

pub(crate) struct Matcher<'a> {
    lexer: &'a Lexer,
    source: &'a str,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(lexer: &'a Lexer, source: &'a str) -> Self {
        Self { lexer, source }
    }

    /// Match `term` against the whole input.
    pub(crate) fn match_all(&self, term: &Term, input: &[Component]) -> Option<Vec<LexerElement>> {
        self.match_term(term, input, 0, 0)
            .into_iter()
            .find(|(end, _)| *end == input.len())
            .map(|(_, elements)| elements)
    }

    fn token(&self, component: &Component, syntax: Option<KeywordSyntax>) -> LexerToken {
        let node = match component {
            Component::Leaf(node) => node,
            Component::Function { name, .. } => name,
        };
        let span = component.span();
        LexerToken {
            syntax,
            token: self.text(span.start.offset, span.end.offset),
            node: node.clone(),
        }
    }

    fn node_token(&self, node: &CssNode) -> LexerToken {
        LexerToken {
            syntax: None,
            token: self.text(node.loc.start.offset, node.loc.end.offset),
            node: node.clone(),
        }
    }

    fn text(&self, start: usize, end: usize) -> String {
        self.source.get(start..end).unwrap_or_default().to_string()
    }

    fn match_term(&self, term: &Term, input: &[Component], pos: usize, depth: usize) -> Vec<Candidate> {
        if depth > MAX_DEPTH {
            return vec![];
        }

        match term {
            Term::Keyword(keyword) => match input.get(pos).and_then(Component::leaf) {
                Some(node)
                    if node.kind == NodeType::Identifier
                        && node.value.eq_ignore_ascii_case(keyword) =>
                {
                    let syntax = KeywordSyntax {
                        name: keyword.clone(),
                    };
                    vec![(pos + 1, vec![self.token(&input[pos], Some(syntax)).into()])]
                }
                _ => vec![],
            },
            Term::Literal(c) => match input.get(pos) {
                Some(component) if component.is_operator(*c) => {
                    vec![(pos + 1, vec![self.token(component, None).into()])]
                }
                _ => vec![],
            },
            Term::Type(name) => self.match_type(name, input, pos, depth),
            Term::Property(name) => match self.lexer.properties.get(name) {
                Some(definition) => self
                    .match_term(definition, input, pos, depth + 1)
                    .into_iter()
                    .map(|(end, children)| {
                        let syntax = MatchSyntax::Property(name.clone());
                        (end, vec![LexerElement::Match(LexerMatch { syntax, children })])
                    })
                    .collect(),
                None => vec![],
            },
            Term::Function { name, arguments } => match input.get(pos) {
                Some(Component::Function {
                    name: function,
                    arguments: inner,
                    close,
                }) if function.value.eq_ignore_ascii_case(name) => self
                    .match_term(arguments, inner, 0, depth)
                    .into_iter()
                    .find(|(end, _)| *end == inner.len())
                    .map(|(_, elements)| {
                        let mut children: Vec<LexerElement> = Vec::with_capacity(elements.len() + 2);
                        children.push(self.node_token(function).into());
                        children.extend(elements);
                        children.push(self.node_token(close).into());
                        vec![(pos + 1, children)]
                    })
                    .unwrap_or_default(),
                _ => vec![],
            },
            Term::Group {
                combinator: Combinator::Juxtaposition,
                terms,
            } => self.match_sequence(terms, input, pos, depth),
            Term::Group {
                combinator: Combinator::ExactlyOne,
                terms,
            } => {
                let mut candidates = vec![];
                for term in terms {
                    for candidate in self.match_term(term, input, pos, depth) {
                        push_unique(&mut candidates, candidate);
                    }
                }
                candidates
            }
            Term::Group {
                combinator: Combinator::AllAnyOrder,
                terms,
            } => self.match_any_order(terms, true, input, pos, depth),
            Term::Group {
                combinator: Combinator::AtLeastOneAnyOrder,
                terms,
            } => self.match_any_order(terms, false, input, pos, depth),
            Term::Repeat {
                term,
                min,
                max,
                comma,
            } => self.match_repeat(term, *min, *max, *comma, input, pos, depth),
        }
    }

    fn match_type(&self, name: &str, input: &[Component], pos: usize, depth: usize) -> Vec<Candidate> {
        let wrap = |children: Vec<LexerElement>| LexerMatch {
            syntax: MatchSyntax::Type(name.to_string()),
            children,
        };

        match self.lexer.types.get(name) {
            Some(Definition::Native(native)) => match input.get(pos) {
                Some(component) if native.matches(component) => {
                    let token = LexerElement::Token(self.token(component, None));
                    vec![(pos + 1, vec![LexerElement::Match(wrap(vec![token]))])]
                }
                _ => vec![],
            },
            Some(Definition::Syntax(definition)) => self
                .match_term(definition, input, pos, depth + 1)
                .into_iter()
                .map(|(end, children)| (end, vec![LexerElement::Match(wrap(children))]))
                .collect(),
            None => vec![],
        }
    }

    fn match_sequence(&self, terms: &[Term], input: &[Component], pos: usize, depth: usize) -> Vec<Candidate> {
        let mut states: Vec<Candidate> = vec![(pos, vec![])];

        for term in terms {
            let mut next = vec![];
            for (start, elements) in &states {
                for (end, more) in self.match_term(term, input, *start, depth) {
                    let mut combined = elements.clone();
                    combined.extend(more);
                    push_unique(&mut next, (end, combined));
                }
            }
            if next.is_empty() {
                return next;
            }
            states = next;
        }

        states
    }

    /// `&&` (`require_all`) and `||` groups.
    fn match_any_order(
        &self,
        terms: &[Term],
        require_all: bool,
        input: &[Component],
        pos: usize,
        depth: usize,
    ) -> Vec<Candidate> {
        let mut candidates = vec![];
        let mut seen = HashSet::from([(pos, 0u64)]);
        let mut queue = VecDeque::from([(pos, 0u64, Vec::<LexerElement>::new())]);

        while let Some((start, used, elements)) = queue.pop_front() {
            let complete = if require_all {
                terms
                    .iter()
                    .enumerate()
                    .all(|(i, term)| used & (1 << i) != 0 || term.is_nullable())
            } else {
                used != 0
            };
            if complete {
                push_unique(&mut candidates, (start, elements.clone()));
            }

            for (i, term) in terms.iter().enumerate() {
                if used & (1 << i) != 0 {
                    continue;
                }
                for (end, more) in self.match_term(term, input, start, depth) {
                    // Zero-width matches never change the state
                    if end == start {
                        continue;
                    }
                    let used = used | (1 << i);
                    if seen.insert((end, used)) {
                        let mut combined = elements.clone();
                        combined.extend(more);
                        queue.push_back((end, used, combined));
                    }
                }
            }
        }

        candidates
    }

    #[allow(clippy::too_many_arguments)]
    fn match_repeat(
        &self,
        term: &Term,
        min: usize,
        max: Option<usize>,
        comma: bool,
        input: &[Component],
        pos: usize,
        depth: usize,
    ) -> Vec<Candidate> {
        let mut matches: Vec<Candidate> = vec![];
        if min == 0 {
            matches.push((pos, vec![]));
        }

        let mut frontier: Vec<Candidate> = vec![(pos, vec![])];
        let mut count = 0;
        while !frontier.is_empty() && max.is_none_or(|max| count < max) {
            count += 1;
            let mut next = vec![];

            for (position, elements) in &frontier {
                let mut prefix = elements.clone();
                let mut start = *position;
                if comma && count > 1 {
                    match input.get(start) {
                        Some(separator) if separator.is_operator(',') => {
                            prefix.push(self.token(separator, None).into());
                            start += 1;
                        }
                        _ => continue,
                    }
                }

                for (end, more) in self.match_term(term, input, start, depth) {
                    if end == start {
                        continue;
                    }
                    let mut combined = prefix.clone();
                    combined.extend(more);
                    push_unique(&mut next, (end, combined));
                }
            }

            if count >= min {
                matches.extend(next.iter().cloned());
            }
            frontier = next;
        }

        // Longest repetition first
        let mut candidates = vec![];
        for candidate in matches.into_iter().rev() {
            push_unique(&mut candidates, candidate);
        }
        candidates
    }
}
