//! Foreign-key detection engine.
//!
//! Proposes likely but undeclared foreign-key relationships in a relational
//! schema by matching column names against names implied by single-column
//! primary keys, then reconciling the proposals against the constraints the
//! database actually declares.
//!
//! The crate is pure computation: introspection (how the schema records get
//! here) and output formatting live with the caller.

pub mod matcher;
pub mod model;
pub mod reconcile;
pub mod similarity;

// Re-export main types and functions
pub use matcher::{
    find_candidates, find_candidates_with_progress, MatcherConfig, SimilarityFn,
    DEFAULT_THRESHOLD,
};
pub use model::{Column, ForeignKey, PrimaryKey};
pub use reconcile::{reconcile, ReconcileMode};
