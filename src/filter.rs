// 🔍 Filter Engine - FilterSpec evaluation over the enriched record set
//
// All active constraints AND together; an empty/absent constraint always
// passes. The filter is stable (input order preserved) and the predicate
// is pure per record.
//
// Date-bound policy: a record whose date never parsed is NOT excluded by
// a bound on that axis. "No data to compare" is different from "fails the
// bound", and the report deliberately keeps undated rows visible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::EnrichedRecord;

/// User-supplied filter constraints. Every field is optional; a default
/// spec passes everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    // Purchase order date bounds (inclusive)
    pub po_date_from: Option<NaiveDate>,
    pub po_date_to: Option<NaiveDate>,

    // Received date bounds (inclusive)
    pub received_date_from: Option<NaiveDate>,
    pub received_date_to: Option<NaiveDate>,

    // Case-insensitive substring needles
    pub supplier: Option<String>,
    pub contract: Option<String>,
    pub item_code: Option<String>,
}

impl FilterSpec {
    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        *self == FilterSpec::default()
    }
}

/// Apply a filter spec, producing a fresh view in input order.
pub fn apply(records: &[EnrichedRecord], spec: &FilterSpec) -> Vec<EnrichedRecord> {
    records
        .iter()
        .filter(|r| matches(r, spec))
        .cloned()
        .collect()
}

/// Pure per-record predicate: AND of all active constraints.
pub fn matches(record: &EnrichedRecord, spec: &FilterSpec) -> bool {
    within_bounds(
        record.purchase_order_date_value,
        spec.po_date_from,
        spec.po_date_to,
    ) && within_bounds(
        record.received_date_value,
        spec.received_date_from,
        spec.received_date_to,
    ) && needle_matches(&record.record.supplier_name, spec.supplier.as_deref())
        && needle_matches(&record.record.contract, spec.contract.as_deref())
        && needle_matches(&record.record.item_code, spec.item_code.as_deref())
}

/// Inclusive bound check. An unparsed date passes vacuously; the filter
/// only rejects when a comparable date exists and lies outside the bound.
fn within_bounds(
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    match date {
        None => true,
        Some(d) => from.map_or(true, |f| d >= f) && to.map_or(true, |t| d <= t),
    }
}

/// Case-insensitive substring match; empty or absent needles pass.
fn needle_matches(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) if n.is_empty() => true,
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
    }
}

// ============================================================================
// TESTS
// ============================================================================
