//! Human-readable output formatting.

use fkscout_core::ForeignKey;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Format discovered foreign keys as human-readable text with optional
/// colors.
pub fn format_table(keys: &BTreeSet<ForeignKey>, use_colors: bool) -> String {
    let colored = use_colors && std::io::stdout().is_terminal();
    let mut out = String::new();

    write_header(&mut out, colored);

    if keys.is_empty() {
        writeln!(out, "No foreign keys discovered.").unwrap();
        return out;
    }

    for key in keys {
        writeln!(
            out,
            "{}.{} ({}) -> {}.{} ({})",
            key.fk_schema,
            key.fk_table,
            key.fk_columns.join(", "),
            key.target_schema,
            key.target_table,
            key.target_columns.join(", ")
        )
        .unwrap();
    }

    writeln!(out).unwrap();

    let summary = format!("{} foreign key(s) discovered", keys.len());
    if colored {
        writeln!(out, "{}", summary.cyan()).unwrap();
    } else {
        writeln!(out, "{summary}").unwrap();
    }

    out
}

fn write_header(out: &mut String, colored: bool) {
    let title = "fkscout: discovered foreign keys";
    let line = "═".repeat(50);

    if colored {
        writeln!(out, "{}", title.bold()).unwrap();
        writeln!(out, "{}", line.dimmed()).unwrap();
    } else {
        writeln!(out, "{title}").unwrap();
        writeln!(out, "{line}").unwrap();
    }
}
