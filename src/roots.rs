//! Verb-root alternations for morphological patterns.
//!
//! Each verb line has the form `pastRoot#presentRoot[#extra...]`. The
//! alternation keeps file order and duplicates, since downstream patterns
//! rely on alternation precedence.

use std::fmt;

use crate::lexicon::Diagnostic;

pub const ROOT_SEPARATOR: char = '#';
pub const ALTERNATION_SEPARATOR: &str = "|";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    Past,
    Present,
}

impl RootKind {
    fn field(self) -> usize {
        match self {
            RootKind::Past => 0,
            RootKind::Present => 1,
        }
    }
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootKind::Past => f.write_str("past"),
            RootKind::Present => f.write_str("present"),
        }
    }
}

/// Extract the requested root from one verb line
pub fn verb_root(verb: &str, kind: RootKind) -> Option<&str> {
    verb.split(ROOT_SEPARATOR)
        .nth(kind.field())
        .filter(|root| !root.is_empty())
}

/// Join the roots of `verbs` into `a|b|c`.
///
/// Lines without a usable root are left out and reported to `diagnostics`,
/// so the result never holds an empty alternative. No verbs gives `""`.
pub fn roots_alternation<S: AsRef<str>>(
    verbs: &[S],
    kind: RootKind,
    diagnostics: &mut dyn FnMut(Diagnostic),
) -> String {
    let mut roots = Vec::with_capacity(verbs.len());
    for (idx, verb) in verbs.iter().enumerate() {
        match verb_root(verb.as_ref(), kind) {
            Some(root) => roots.push(root),
            None => diagnostics(Diagnostic::MissingRoot {
                line: idx + 1,
                kind,
            }),
        }
    }
    roots.join(ALTERNATION_SEPARATOR)
}
