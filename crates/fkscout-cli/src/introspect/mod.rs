//! Schema introspection for live databases.

mod sqlx_introspector;

pub use sqlx_introspector::{DatabaseType, SqlxIntrospector};

use fkscout_core::{Column, ForeignKey, PrimaryKey};
use thiserror::Error;

/// An introspector that can read schema structure from a database catalog.
///
/// Implementations query system catalogs (information_schema, pg_catalog)
/// and normalize the rows into the schema records the matcher consumes.
/// System schemas are excluded; only user-defined relations are returned.
pub trait SchemaIntrospector {
    /// All columns, one record per column.
    fn get_columns(&self) -> Result<Vec<Column>, IntrospectError>;

    /// All declared primary keys, one record per key-bearing table, columns
    /// in declared ordinal order.
    fn get_primary_keys(&self) -> Result<Vec<PrimaryKey>, IntrospectError>;

    /// All declared foreign-key constraints, fk and target column sequences
    /// ordinally aligned.
    fn get_foreign_keys(&self) -> Result<Vec<ForeignKey>, IntrospectError>;
}

#[derive(Debug, Error)]
pub enum IntrospectError {
    #[error("unsupported database URL scheme: {0} (expected postgres:// or mysql://)")]
    UnsupportedScheme(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("malformed catalog row: {0}")]
    MalformedRow(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
