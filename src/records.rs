// 📦 Record Model - Raw and enriched purchase order fulfillment records
//
// A Record is the normalized form of one row from the upstream payload:
// text fields are owned strings (missing → empty), numeric fields are
// already coerced to f64 (missing/garbage → 0.0). Dates stay as raw wire
// text here; their parsed calendar values live on EnrichedRecord so export
// can still emit the original text verbatim.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One purchase order fulfillment row, as ingested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    // Identifiers
    pub purchase_order_number: String,
    pub item_code: String,
    pub item_name: String,
    pub supplier_name: String,
    pub contract: String,

    // Dates (raw wire text, parsed lazily during enrichment)
    pub purchase_order_date: String,
    pub received_date: String,

    // Quantities and values (coerced at the ingestion boundary)
    pub quantity_ordered: f64,
    pub quantity_received: f64,
    pub order_value: f64,
    pub received_value: f64,
}

/// A Record plus its derived metrics and parsed date values.
///
/// Produced by `metrics::enrich`, which is total: every Record yields a
/// well-formed EnrichedRecord, with zero sentinels where inputs were
/// missing or unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: Record,

    /// received_value / order_value * 100, rounded to 2 decimals;
    /// 0.0 when order_value is not positive.
    pub fulfillment_ratio: f64,

    /// Whole calendar days between order and receipt; 0 unless both
    /// dates parsed.
    pub elapsed_days: i64,

    /// Parsed calendar values; None when the raw text was unparseable.
    pub purchase_order_date_value: Option<NaiveDate>,
    pub received_date_value: Option<NaiveDate>,
}
