//! Name-convention matching: propose foreign keys from column names.
//!
//! For every single-column primary key, the implied referencing name is the
//! table name concatenated with the key column name (`users` + `id` =
//! `usersid`). Every column is scored against every implied name and the best
//! match above the threshold becomes a proposed relationship.

use std::collections::BTreeSet;

use crate::model::{Column, ForeignKey, PrimaryKey};
use crate::similarity;

/// Default acceptance threshold, calibrated against [`similarity::ratio`].
pub const DEFAULT_THRESHOLD: u32 = 80;

/// Similarity function over two already-normalized names, scored `0..=100`.
pub type SimilarityFn = fn(&str, &str) -> u32;

/// Matcher configuration: the acceptance threshold (strict `>`) and the
/// similarity function it is calibrated against.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Scores strictly greater than this accept a candidate.
    pub threshold: u32,
    /// Similarity metric; defaults to the gestalt ratio.
    pub similarity: SimilarityFn,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            similarity: similarity::ratio,
        }
    }
}

impl MatcherConfig {
    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// A single-column primary key with its implied referencing name
/// pre-lowercased for comparison.
struct EligibleKey<'a> {
    key: &'a PrimaryKey,
    implied_name: String,
}

/// Propose foreign-key relationships by name similarity.
///
/// Each column yields at most one relationship: the primary key with the
/// highest score strictly above the threshold wins. Equal top scores are
/// broken by lexicographic `(target schema, target table, target column)`
/// order, so results do not depend on input iteration order. Primary keys
/// with more than one column never participate.
pub fn find_candidates(
    columns: &[Column],
    primary_keys: &[PrimaryKey],
    config: &MatcherConfig,
) -> BTreeSet<ForeignKey> {
    find_candidates_with_progress(columns, primary_keys, config, |_, _| {})
}

/// [`find_candidates`] with a progress observer.
///
/// The observer is invoked once per processed column with
/// `(processed, total)`. It is purely observational and never alters the
/// result; pass a closure that drives a progress bar, or ignore it.
pub fn find_candidates_with_progress(
    columns: &[Column],
    primary_keys: &[PrimaryKey],
    config: &MatcherConfig,
    mut progress: impl FnMut(usize, usize),
) -> BTreeSet<ForeignKey> {
    let eligible: Vec<EligibleKey<'_>> = primary_keys
        .iter()
        .filter(|pk| pk.is_single_column())
        .map(|pk| EligibleKey {
            key: pk,
            implied_name: format!("{}{}", pk.table, pk.columns[0]).to_lowercase(),
        })
        .collect();

    let total = columns.len();
    let mut candidates = BTreeSet::new();

    for (processed, column) in columns.iter().enumerate() {
        let column_name = column.name.to_lowercase();

        if let Some(winner) = best_match(&column_name, &eligible, config) {
            candidates.insert(ForeignKey::single(column, winner));
        }

        progress(processed + 1, total);
    }

    candidates
}

/// The eligible key with the highest score above the threshold, if any.
fn best_match<'a>(
    column_name: &str,
    eligible: &'a [EligibleKey<'a>],
    config: &MatcherConfig,
) -> Option<&'a PrimaryKey> {
    let mut best: Option<(u32, &PrimaryKey)> = None;

    for entry in eligible {
        let score = (config.similarity)(column_name, &entry.implied_name);
        if score <= config.threshold {
            continue;
        }

        let better = match best {
            None => true,
            Some((best_score, best_key)) => {
                score > best_score || (score == best_score && target_order(entry.key, best_key))
            }
        };

        if better {
            best = Some((score, entry.key));
        }
    }

    best.map(|(_, key)| key)
}

/// Tie-break: does `a` precede `b` in target identity order?
fn target_order(a: &PrimaryKey, b: &PrimaryKey) -> bool {
    (&a.schema, &a.table, &a.columns) < (&b.schema, &b.table, &b.columns)
}
