//! fkscout - foreign-key detector for PostgreSQL and MySQL

use fkscout_cli::cli::{Args, OutputFormat};
use fkscout_cli::credentials;
use fkscout_cli::introspect::{SchemaIntrospector, SqlxIntrospector};
use fkscout_cli::output;
use fkscout_cli::progress::MatchProgressBar;

use anyhow::{Context, Result};
use clap::Parser;
use fkscout_core::{find_candidates_with_progress, reconcile, ForeignKey, MatcherConfig};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

/// Introspection or output failure.
const EXIT_FAILURE: u8 = 1;
/// Configuration error (bad URL, missing credentials, bad threshold).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    if args.threshold > 100 {
        eprintln!("fkscout: error: --threshold must be between 0 and 100");
        return ExitCode::from(EXIT_CONFIG_ERROR);
    }

    let url = match credentials::resolve_url(
        &args.url,
        args.no_password,
        args.password_file.as_deref(),
    ) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("fkscout: error: {e}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    if !args.quiet && credentials::url_embeds_password(&args.url) {
        eprintln!(
            "fkscout: warning: database credentials in --url may be logged in shell history. \
             Consider --password-file or the {} environment variable instead.",
            credentials::PASSWORD_ENV_VAR
        );
    }

    match run(&args, &url) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fkscout: error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &Args, url: &str) -> Result<()> {
    let introspector = SqlxIntrospector::connect(url, args.db_schema.clone())
        .context("Failed to connect to database")?;

    let columns = introspector
        .get_columns()
        .context("Failed to read columns from catalog")?;
    let primary_keys = introspector
        .get_primary_keys()
        .context("Failed to read primary keys from catalog")?;
    let constraints: BTreeSet<ForeignKey> = introspector
        .get_foreign_keys()
        .context("Failed to read foreign-key constraints from catalog")?
        .into_iter()
        .collect();

    let config = MatcherConfig::with_threshold(args.threshold);

    let mut bar = MatchProgressBar::new(columns.len(), args.quiet);
    let candidates =
        find_candidates_with_progress(&columns, &primary_keys, &config, |done, total| {
            bar.update(done, total)
        });
    bar.finish();

    let discovered = reconcile(candidates, &constraints, args.reconcile_mode());

    let output_str = match args.format {
        OutputFormat::Json => output::format_json(&discovered, args.compact),
        OutputFormat::Table => output::format_table(&discovered, args.output.is_none()),
    };

    write_output(&args.output, &output_str)?;

    if let (Some(path), false) = (&args.output, args.quiet) {
        eprintln!("fkscout: wrote discovered foreign keys to {}", path.display());
    }

    Ok(())
}

fn write_output(path: &Option<std::path::PathBuf>, content: &str) -> Result<()> {
    let mut content = content.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }

    if let Some(path) = path {
        fs::write(path, content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    } else {
        io::stdout()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
    }
    Ok(())
}
