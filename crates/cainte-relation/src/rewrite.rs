//! Start-anchored rewrite passes.
//!
//! A [`Rewrite`] is an ordered table of context-anchored rules applied at
//! most once, at the start of the string. The first rule whose pattern and
//! right context match wins; a string triggering no rule passes through
//! unchanged. This is a deliberate single-pass scanner: no general rewrite
//! engine is needed for anchored, obligatory, non-overlapping substitution.

use std::collections::BTreeSet;

/// An ordered, start-anchored rewrite rule table.
///
/// # Example
///
/// ```
/// use cainte_relation::Rewrite;
///
/// let mutate = Rewrite::replacements([("b", "mb"), ("c", "gc")]);
/// assert_eq!(mutate.apply("bád"), "mbád");
/// assert_eq!(mutate.apply("rud"), "rud");
/// ```
#[derive(Debug, Clone)]
pub struct Rewrite {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    pattern: String,
    substitution: String,
    right: RightContext,
}

/// What must follow the pattern for a rule to fire.
#[derive(Debug, Clone)]
enum RightContext {
    /// Anything, including end of string.
    Any,
    /// The next character must belong to this set.
    OneOf(BTreeSet<char>),
}

impl Rewrite {
    /// Build a rule table replacing each pattern with its substitution,
    /// regardless of what follows. Patterns must be non-empty; rules are
    /// tried in table order.
    pub fn replacements<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(pattern, substitution)| Entry {
                    pattern: pattern.into(),
                    substitution: substitution.into(),
                    right: RightContext::Any,
                })
                .collect(),
        }
    }

    /// Build a single-rule table inserting `marker` at the start of the
    /// string when the first character belongs to `before`.
    pub fn insertion(marker: impl Into<String>, before: impl IntoIterator<Item = char>) -> Self {
        Self {
            entries: vec![Entry {
                pattern: String::new(),
                substitution: marker.into(),
                right: RightContext::OneOf(before.into_iter().collect()),
            }],
        }
    }

    /// Append another table's rules after this one's (rule-table union;
    /// earlier tables keep priority).
    pub fn extend(mut self, other: Rewrite) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Apply the table to `input`: the first matching rule rewrites once,
    /// anchored at string start; otherwise the input is returned unchanged.
    pub fn apply(&self, input: &str) -> String {
        for entry in &self.entries {
            let Some(rest) = input.strip_prefix(entry.pattern.as_str()) else {
                continue;
            };
            let context_holds = match &entry.right {
                RightContext::Any => true,
                RightContext::OneOf(chars) => {
                    rest.chars().next().is_some_and(|c| chars.contains(&c))
                }
            };
            if context_holds {
                return format!("{}{}", entry.substitution, rest);
            }
        }
        input.to_string()
    }
}
