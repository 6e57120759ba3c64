//! Weighted finite string relations.
//!
//! A [`Relation`] maps input strings to zero or more weighted output
//! alternatives. Relations are assembled once from small building blocks
//! (literal crosses, character classes) using union, concatenation, closure,
//! composition, and difference, and are immutable afterwards. Application is
//! a pure function of the input string.
//!
//! Ambiguity between alternatives is resolved by an explicit cost mechanism:
//! the candidate with the lowest total weight wins, and candidates produced
//! by earlier-declared alternatives win ties. Nothing depends on automaton
//! minimization side effects.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::rewrite::Rewrite;

/// An immutable mapping from input strings to weighted output alternatives.
///
/// Relations are cheap to clone (the rule structure is shared) and safe to
/// share across threads once built. Application never mutates the relation.
///
/// # Example
///
/// ```
/// use cainte_relation::Relation;
///
/// let greeting = Relation::cross("hi", "hello").or(Relation::cross("yo", "hello"));
/// assert_eq!(greeting.apply("hi"), Some("hello".to_string()));
/// assert_eq!(greeting.apply("hm"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Relation {
    node: Arc<Node>,
}

#[derive(Debug)]
enum Node {
    /// Rewrite a literal input prefix into a literal output.
    Cross { input: String, output: String },
    /// Accept a single character drawn from a set, unchanged.
    Class(BTreeSet<char>),
    /// Alternatives, tried in declaration order.
    Union(Vec<Relation>),
    /// Sequence of parts, each consuming where the previous stopped.
    Concat(Vec<Relation>),
    /// Bounded or unbounded repetition of the inner relation.
    Repeat {
        inner: Relation,
        min: usize,
        max: Option<usize>,
    },
    /// Feed every complete output of `first` through `second`.
    Compose { first: Relation, second: Relation },
    /// Matches of `base` whose consumed input `subtract` does not accept.
    Difference { base: Relation, subtract: Relation },
    /// Inner relation with an added cost.
    Weighted { inner: Relation, weight: f64 },
    /// A start-anchored rewrite pass consuming the whole remaining input.
    Rewrite(Rewrite),
}

/// One complete output alternative for an input string.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The output string produced by this alternative.
    pub output: String,
    /// Total accumulated weight; lower is preferred.
    pub weight: f64,
}

/// A partial match: output and weight accumulated so far, plus the
/// unconsumed remainder of the input.
#[derive(Clone)]
struct Partial<'a> {
    rest: &'a str,
    output: String,
    weight: f64,
}

impl Relation {
    fn new(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// A relation accepting exactly `s` and emitting it unchanged.
    pub fn accept(s: impl Into<String>) -> Self {
        let s = s.into();
        Self::new(Node::Cross {
            input: s.clone(),
            output: s,
        })
    }

    /// A relation accepting `input` and emitting `output`.
    pub fn cross(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self::new(Node::Cross {
            input: input.into(),
            output: output.into(),
        })
    }

    /// A relation consuming nothing and emitting `output`.
    pub fn insert(output: impl Into<String>) -> Self {
        Self::cross("", output)
    }

    /// A relation consuming `input` and emitting nothing.
    pub fn delete(input: impl Into<String>) -> Self {
        Self::cross(input, "")
    }

    /// The empty-string identity relation.
    pub fn epsilon() -> Self {
        Self::cross("", "")
    }

    /// A relation accepting any single character from `chars`, unchanged.
    pub fn class(chars: impl IntoIterator<Item = char>) -> Self {
        Self::new(Node::Class(chars.into_iter().collect()))
    }

    /// A union of literal crosses built from a pair table, preserving
    /// table order for tie-breaking.
    pub fn string_map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::union(
            pairs
                .into_iter()
                .map(|(input, output)| Self::cross(input, output))
                .collect(),
        )
    }

    /// Wrap a [`Rewrite`] pass as a whole-string relation.
    ///
    /// The resulting relation consumes its entire input and emits exactly
    /// one output (rewrite passes are total functions), which makes it
    /// suitable as a stage in [`Relation::compose`] chains.
    pub fn from_rewrite(rewrite: Rewrite) -> Self {
        Self::new(Node::Rewrite(rewrite))
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Alternatives, tried in declaration order.
    pub fn union(alternatives: Vec<Relation>) -> Self {
        Self::new(Node::Union(alternatives))
    }

    /// This relation or `other`, preferring this one on weight ties.
    pub fn or(self, other: Relation) -> Self {
        Self::union(vec![self, other])
    }

    /// Sequence of parts applied left to right over the input.
    pub fn concat(parts: Vec<Relation>) -> Self {
        Self::new(Node::Concat(parts))
    }

    /// This relation followed by `next`.
    pub fn then(self, next: Relation) -> Self {
        Self::concat(vec![self, next])
    }

    /// Zero or more repetitions.
    ///
    /// Unbounded repetition requires the inner relation to consume input on
    /// every round; pure-insertion rounds are skipped so application always
    /// terminates.
    pub fn closure(self) -> Self {
        self.repeat(0, None)
    }

    /// Zero or one application.
    pub fn optional(self) -> Self {
        self.repeat(0, Some(1))
    }

    /// Between `min` and `max` repetitions (`None` for unbounded).
    pub fn repeat(self, min: usize, max: Option<usize>) -> Self {
        Self::new(Node::Repeat {
            inner: self,
            min,
            max,
        })
    }

    /// Feed every complete output of this relation through `next`.
    pub fn compose(self, next: Relation) -> Self {
        Self::new(Node::Compose {
            first: self,
            second: next,
        })
    }

    /// Matches of this relation whose consumed input `subtract` rejects.
    pub fn difference(self, subtract: Relation) -> Self {
        Self::new(Node::Difference {
            base: self,
            subtract,
        })
    }

    /// This relation with `weight` added to every alternative it produces.
    pub fn with_weight(self, weight: f64) -> Self {
        Self::new(Node::Weighted {
            inner: self,
            weight,
        })
    }

    // =========================================================================
    // Application
    // =========================================================================

    /// Apply the relation to `input`, returning the best output.
    ///
    /// The lowest-weight candidate wins; on ties the earliest-declared
    /// alternative wins. Returns `None` when no alternative accepts the
    /// whole input.
    pub fn apply(&self, input: &str) -> Option<String> {
        self.candidates(input)
            .into_iter()
            .reduce(|best, c| if c.weight < best.weight { c } else { best })
            .map(|c| c.output)
    }

    /// All complete-input candidates, in declaration order.
    ///
    /// Identical outputs reachable through several paths are reported once,
    /// at their earliest position, with the lowest weight any path assigns.
    pub fn candidates(&self, input: &str) -> Vec<Candidate> {
        let mut out: Vec<Candidate> = Vec::new();
        for m in self.matches(input) {
            if !m.rest.is_empty() {
                continue;
            }
            if let Some(existing) = out.iter_mut().find(|c| c.output == m.output) {
                if m.weight < existing.weight {
                    existing.weight = m.weight;
                }
            } else {
                out.push(Candidate {
                    output: m.output,
                    weight: m.weight,
                });
            }
        }
        out
    }

    /// Whether any alternative accepts the whole input.
    pub fn accepts(&self, input: &str) -> bool {
        self.matches(input).iter().any(|m| m.rest.is_empty())
    }

    /// Enumerate partial matches of this relation against a prefix of
    /// `input`, in declaration order.
    fn matches<'a>(&self, input: &'a str) -> Vec<Partial<'a>> {
        match &*self.node {
            Node::Cross {
                input: pattern,
                output,
            } => match input.strip_prefix(pattern.as_str()) {
                Some(rest) => vec![Partial {
                    rest,
                    output: output.clone(),
                    weight: 0.0,
                }],
                None => Vec::new(),
            },
            Node::Class(chars) => {
                let mut iter = input.chars();
                match iter.next() {
                    Some(c) if chars.contains(&c) => vec![Partial {
                        rest: iter.as_str(),
                        output: c.to_string(),
                        weight: 0.0,
                    }],
                    _ => Vec::new(),
                }
            }
            Node::Union(alternatives) => alternatives
                .iter()
                .flat_map(|alt| alt.matches(input))
                .collect(),
            Node::Concat(parts) => {
                let mut acc = vec![Partial {
                    rest: input,
                    output: String::new(),
                    weight: 0.0,
                }];
                for part in parts {
                    let mut next = Vec::new();
                    for prefix in &acc {
                        for m in part.matches(prefix.rest) {
                            next.push(Partial {
                                rest: m.rest,
                                output: format!("{}{}", prefix.output, m.output),
                                weight: prefix.weight + m.weight,
                            });
                        }
                    }
                    acc = next;
                    if acc.is_empty() {
                        break;
                    }
                }
                acc
            }
            Node::Repeat { inner, min, max } => {
                let mut results = Vec::new();
                let mut frontier = vec![Partial {
                    rest: input,
                    output: String::new(),
                    weight: 0.0,
                }];
                if *min == 0 {
                    results.push(Partial {
                        rest: input,
                        output: String::new(),
                        weight: 0.0,
                    });
                }
                let mut rounds = 0;
                while !frontier.is_empty() && max.is_none_or(|m| rounds < m) {
                    rounds += 1;
                    let mut next = Vec::new();
                    for prefix in &frontier {
                        for m in inner.matches(prefix.rest) {
                            // Unbounded repetition must make input progress,
                            // otherwise insertion rules would repeat forever.
                            if max.is_none() && m.rest.len() == prefix.rest.len() {
                                continue;
                            }
                            next.push(Partial {
                                rest: m.rest,
                                output: format!("{}{}", prefix.output, m.output),
                                weight: prefix.weight + m.weight,
                            });
                        }
                    }
                    if rounds >= *min {
                        results.extend(next.iter().cloned());
                    }
                    frontier = next;
                }
                results
            }
            Node::Compose { first, second } => {
                let mut results = Vec::new();
                for m in first.matches(input) {
                    for candidate in second.candidates(&m.output) {
                        results.push(Partial {
                            rest: m.rest,
                            output: candidate.output,
                            weight: m.weight + candidate.weight,
                        });
                    }
                }
                results
            }
            Node::Difference { base, subtract } => base
                .matches(input)
                .into_iter()
                .filter(|m| {
                    let consumed = &input[..input.len() - m.rest.len()];
                    !subtract.accepts(consumed)
                })
                .collect(),
            Node::Weighted { inner, weight } => {
                let mut matched = inner.matches(input);
                for m in &mut matched {
                    m.weight += weight;
                }
                matched
            }
            Node::Rewrite(rewrite) => vec![Partial {
                rest: "",
                output: rewrite.apply(input),
                weight: 0.0,
            }],
        }
    }
}
