//! Pipeline tests: matching, reconciliation, and output formatting wired
//! together the way the binary runs them, minus the database.

use std::collections::BTreeSet;

use fkscout_cli::output;
use fkscout_core::{
    find_candidates, reconcile, Column, ForeignKey, MatcherConfig, PrimaryKey, ReconcileMode,
};

fn schema() -> (Vec<Column>, Vec<PrimaryKey>) {
    let columns = vec![
        Column::new("public", "users", "id"),
        Column::new("public", "users", "email"),
        Column::new("public", "orders", "id"),
        Column::new("public", "orders", "user_id"),
        Column::new("public", "order_items", "order_id"),
        Column::new("public", "order_items", "sku"),
    ];
    let primary_keys = vec![
        PrimaryKey::new("public", "users", vec!["id".into()]),
        PrimaryKey::new("public", "orders", vec!["id".into()]),
    ];
    (columns, primary_keys)
}

fn declared_orders_users() -> ForeignKey {
    ForeignKey {
        fk_schema: "public".into(),
        fk_table: "orders".into(),
        fk_columns: vec!["user_id".into()],
        target_schema: "public".into(),
        target_table: "users".into(),
        target_columns: vec!["id".into()],
    }
}

#[test]
fn subtract_mode_reports_only_undeclared_keys_as_json() {
    let (columns, primary_keys) = schema();
    let constraints: BTreeSet<ForeignKey> = [declared_orders_users()].into_iter().collect();

    let candidates = find_candidates(&columns, &primary_keys, &MatcherConfig::default());
    let discovered = reconcile(candidates, &constraints, ReconcileMode::Subtract);
    let json = output::format_json(&discovered, true);

    // orders.user_id is declared, so only order_items.order_id remains.
    assert!(!json.contains("\"fk_table\":\"orders\""));
    assert!(json.contains("\"fk_table\":\"order_items\""));
    assert!(json.contains("\"fk_columns\":[\"order_id\"]"));
    assert!(json.contains("\"target_table\":\"orders\""));
}

#[test]
fn union_mode_reports_declared_keys_exactly_once() {
    let (columns, primary_keys) = schema();
    let constraints: BTreeSet<ForeignKey> = [declared_orders_users()].into_iter().collect();

    let candidates = find_candidates(&columns, &primary_keys, &MatcherConfig::default());
    let discovered = reconcile(candidates, &constraints, ReconcileMode::Union);
    let json = output::format_json(&discovered, true);

    assert_eq!(json.matches("\"fk_table\":\"orders\"").count(), 1);
    assert_eq!(discovered.len(), 2);
}

#[test]
fn json_output_parses_back_into_records() {
    let (columns, primary_keys) = schema();

    let candidates = find_candidates(&columns, &primary_keys, &MatcherConfig::default());
    let discovered = reconcile(candidates, &BTreeSet::new(), ReconcileMode::Subtract);
    let json = output::format_json(&discovered, false);

    let parsed: Vec<ForeignKey> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), discovered.len());
    assert!(parsed.contains(&declared_orders_users()));
}

#[test]
fn raised_threshold_prunes_weaker_matches() {
    let (columns, primary_keys) = schema();

    let strict = MatcherConfig::with_threshold(95);
    let candidates = find_candidates(&columns, &primary_keys, &strict);

    // "user_id" vs "usersid" scores 86 and "order_id" vs "ordersid" scores
    // 88; neither clears 95.
    assert!(candidates.is_empty());
}
