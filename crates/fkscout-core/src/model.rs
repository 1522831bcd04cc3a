//! Schema records produced by introspection and consumed by the matcher.
//!
//! All records are plain values with structural equality, hashing, and total
//! ordering, so they can live in `BTreeSet`s and be compared member-wise.
//! Column sequences are `Vec<String>`, which compares elementwise in order,
//! so set membership is over the full tuple including column order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single column in a user-defined table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    /// Schema (namespace) containing the table.
    pub schema: String,
    /// Table the column belongs to.
    pub table: String,
    /// Column name, original case preserved.
    pub name: String,
}

impl Column {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            name: name.into(),
        }
    }
}

/// A declared primary key: one row per key-bearing table.
///
/// Columns appear in declared ordinal order. Keys with more than one column
/// are carried through introspection but never participate in name matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct PrimaryKey {
    pub schema: String,
    pub table: String,
    /// Key columns in declared ordinal order.
    pub columns: Vec<String>,
}

impl PrimaryKey {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        columns: Vec<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            columns,
        }
    }

    /// Whether this key is eligible for name matching (exactly one column).
    pub fn is_single_column(&self) -> bool {
        self.columns.len() == 1
    }
}

/// A foreign-key relationship, declared or inferred.
///
/// The column at `fk_columns[i]` references `target_columns[i]`; the pairing
/// is preserved end to end. Declared constraints may span multiple columns;
/// relationships produced by the name heuristic always carry exactly one
/// column per side. Two relationships are equal only when all six fields
/// match, column sequences compared elementwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct ForeignKey {
    pub fk_schema: String,
    pub fk_table: String,
    pub fk_columns: Vec<String>,
    pub target_schema: String,
    pub target_table: String,
    pub target_columns: Vec<String>,
}

impl ForeignKey {
    /// Build a single-column relationship from a referencing column and the
    /// primary key it appears to point at.
    pub fn single(column: &Column, target: &PrimaryKey) -> Self {
        Self {
            fk_schema: column.schema.clone(),
            fk_table: column.table.clone(),
            fk_columns: vec![column.name.clone()],
            target_schema: target.schema.clone(),
            target_table: target.table.clone(),
            target_columns: target.columns.clone(),
        }
    }
}
