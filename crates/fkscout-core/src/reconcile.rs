//! Reconcile proposed relationships against declared constraints.

use std::collections::BTreeSet;

use crate::model::ForeignKey;

/// How proposed relationships combine with declared constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcileMode {
    /// Drop every proposal already declared as a constraint (set difference).
    #[default]
    Subtract,
    /// Merge proposals with declared constraints (set union).
    Union,
}

/// Combine the candidate set with the declared constraint set.
///
/// Membership is full-tuple equality: a constraint removes (or merges with) a
/// candidate only when all six fields match, column sequences compared
/// elementwise in order. A candidate that merely overlaps a constraint is
/// kept as-is.
pub fn reconcile(
    candidates: BTreeSet<ForeignKey>,
    constraints: &BTreeSet<ForeignKey>,
    mode: ReconcileMode,
) -> BTreeSet<ForeignKey> {
    match mode {
        ReconcileMode::Subtract => candidates
            .into_iter()
            .filter(|fk| !constraints.contains(fk))
            .collect(),
        ReconcileMode::Union => candidates.union(constraints).cloned().collect(),
    }
}
