//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use fkscout_core::ReconcileMode;
use std::path::PathBuf;

/// fkscout - foreign-key detector
#[derive(Parser, Debug)]
#[command(name = "fkscout")]
#[command(
    about = "Find likely foreign keys in a database by combining declared \
             constraints with column/table name matching",
    long_about = None
)]
#[command(version)]
pub struct Args {
    /// Database connection URL
    /// (e.g., postgres://user@host:5432/db, mysql://user@host:3306)
    #[arg(short, long, value_name = "URL")]
    pub url: String,

    /// Restrict introspection to a single schema
    /// (e.g., 'public' for PostgreSQL, database name for MySQL)
    #[arg(long, value_name = "SCHEMA")]
    pub db_schema: Option<String>,

    /// File containing the database password (first line is used)
    #[arg(long, value_name = "FILE")]
    pub password_file: Option<PathBuf>,

    /// Connect without a password
    #[arg(long)]
    pub no_password: bool,

    /// Similarity score a name match must exceed to be reported (0-100)
    #[arg(long, default_value_t = fkscout_core::DEFAULT_THRESHOLD, value_name = "SCORE")]
    pub threshold: u32,

    /// Union proposed foreign keys with declared constraints. By default
    /// keys already declared as constraints are omitted from the output.
    #[arg(short = 'U', long)]
    pub union_constraints: bool,

    /// Output format
    #[arg(short, long, default_value = "json", value_enum)]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,

    /// Suppress progress reporting and warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn reconcile_mode(&self) -> ReconcileMode {
        if self.union_constraints {
            ReconcileMode::Union
        } else {
            ReconcileMode::Subtract
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable listing
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::parse_from(["fkscout", "--url", "postgres://app@localhost/db"]);
        assert_eq!(args.url, "postgres://app@localhost/db");
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.threshold, 80);
        assert!(!args.union_constraints);
        assert!(!args.no_password);
        assert!(args.db_schema.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_parse_full_args() {
        let args = Args::parse_from([
            "fkscout",
            "-u",
            "mysql://root@db:3306",
            "--db-schema",
            "shop",
            "--password-file",
            "/run/secrets/db",
            "--threshold",
            "90",
            "-U",
            "-f",
            "table",
            "-o",
            "keys.json",
            "--compact",
            "--quiet",
        ]);
        assert_eq!(args.db_schema.as_deref(), Some("shop"));
        assert_eq!(
            args.password_file.as_ref().unwrap().to_str().unwrap(),
            "/run/secrets/db"
        );
        assert_eq!(args.threshold, 90);
        assert!(args.union_constraints);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.output.unwrap().to_str().unwrap(), "keys.json");
        assert!(args.compact);
        assert!(args.quiet);
    }

    #[test]
    fn test_url_is_required() {
        let result = Args::try_parse_from(["fkscout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reconcile_mode_mapping() {
        let subtract = Args::parse_from(["fkscout", "-u", "postgres://x@y/z"]);
        assert_eq!(subtract.reconcile_mode(), ReconcileMode::Subtract);

        let union = Args::parse_from(["fkscout", "-u", "postgres://x@y/z", "-U"]);
        assert_eq!(union.reconcile_mode(), ReconcileMode::Union);
    }
}
