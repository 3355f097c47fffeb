//! Snapshot tests using insta
//!
//! Whole-diagnostic renders compared against stored snapshots.

use insta::assert_snapshot;
use querydiag::{DiagnosticConfig, Position, QueryError};

/// Bind a query to an error, render it, and snapshot the result
fn snapshot_bound(name: &str, err: QueryError, query: &str) {
    match err.with_query(query) {
        Ok(bound) => assert_snapshot!(name, bound.render()),
        Err(e) => assert_snapshot!(name, format!("ERROR: {}", e)),
    }
}

// =============================================================================
// Syntax Errors
// =============================================================================

#[test]
fn snapshot_syntax_unexpected_token() {
    snapshot_bound(
        "syntax_unexpected_token",
        QueryError::syntax(Position::At(7), "unexpected token"),
        "SELECT * FROM t",
    );
}

#[test]
fn snapshot_syntax_unbound() {
    let rendered = QueryError::syntax(Position::At(2), "bad literal").render();
    assert_snapshot!("syntax_unbound", rendered);
}

#[test]
fn snapshot_syntax_zero_padding() {
    let config = DiagnosticConfig::new().with_padding(0);
    snapshot_bound("syntax_zero_padding", config.syntax(Position::At(4), "x"), "SELECT");
}

// =============================================================================
// Execute Errors
// =============================================================================

#[test]
fn snapshot_execute_end_of_query() {
    snapshot_bound(
        "execute_end_of_query",
        QueryError::execute(Position::End, "division by zero"),
        "3 / 0",
    );
}

#[test]
fn snapshot_execute_unbound_end() {
    let rendered = QueryError::execute(Position::End, "division by zero").render();
    assert_snapshot!("execute_unbound_end", rendered);
}
