//! JSON output formatting.

use fkscout_core::ForeignKey;
use std::collections::BTreeSet;

/// Format discovered foreign keys as a JSON array.
///
/// The set's ordering carries through, so output is deterministic. If
/// `compact` is true, outputs minified JSON without whitespace.
pub fn format_json(keys: &BTreeSet<ForeignKey>, compact: bool) -> String {
    let records: Vec<&ForeignKey> = keys.iter().collect();
    if compact {
        serde_json::to_string(&records).expect("serialization cannot fail")
    } else {
        serde_json::to_string_pretty(&records).expect("serialization cannot fail")
    }
}
