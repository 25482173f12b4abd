// 📊 Metric Calculator - Per-record derived metrics
//
// Two metrics per record: the fulfillment ratio (received value over
// ordered value, as a percentage) and elapsed days between order and
// receipt. Enrichment is a pure, total function: bad inputs degrade to
// zero sentinels, they never become errors.

use serde_json::Value;

use crate::dates::parse_date;
use crate::records::{EnrichedRecord, Record};

/// Coerce an untyped JSON value to f64.
///
/// Numbers pass through, numeric strings are parsed, everything else
/// (null, objects, non-numeric text, absent fields) is 0.0. Permissive
/// parse with a documented zero default - not validation.
pub fn coerce_numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Derive the metrics for one record.
pub fn enrich(record: Record) -> EnrichedRecord {
    let purchase_order_date_value = parse_date(&record.purchase_order_date);
    let received_date_value = parse_date(&record.received_date);

    let fulfillment_ratio = if record.order_value > 0.0 {
        round2(record.received_value / record.order_value * 100.0)
    } else {
        0.0
    };

    // Whole-day difference; 0 when either date failed to parse
    let elapsed_days = match (purchase_order_date_value, received_date_value) {
        (Some(ordered), Some(received)) => (received - ordered).num_days(),
        _ => 0,
    };

    EnrichedRecord {
        record,
        fulfillment_ratio,
        elapsed_days,
        purchase_order_date_value,
        received_date_value,
    }
}

/// Enrich a whole batch, preserving order.
pub fn enrich_all(records: Vec<Record>) -> Vec<EnrichedRecord> {
    records.into_iter().map(enrich).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_record(order_value: f64, received_value: f64) -> Record {
        Record {
            purchase_order_number: "PO-001".to_string(),
            order_value,
            received_value,
            ..Record::default()
        }
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric(&json!(42)), 42.0);
        assert_eq!(coerce_numeric(&json!(42.5)), 42.5);
        assert_eq!(coerce_numeric(&json!("100")), 100.0);
        assert_eq!(coerce_numeric(&json!(" 3.25 ")), 3.25);
        assert_eq!(coerce_numeric(&json!("abc")), 0.0);
        assert_eq!(coerce_numeric(&json!(null)), 0.0);
        assert_eq!(coerce_numeric(&json!([1, 2])), 0.0);
        assert_eq!(coerce_numeric(&json!({"v": 1})), 0.0);
    }

    #[test]
    fn test_enrich_ratio() {
        let enriched = enrich(make_record(100.0, 80.0));
        assert_eq!(enriched.fulfillment_ratio, 80.0);

        // Rounded to 2 decimals
        let enriched = enrich(make_record(3.0, 1.0));
        assert_eq!(enriched.fulfillment_ratio, 33.33);
    }

    #[test]
    fn test_enrich_ratio_zero_when_no_order_value() {
        assert_eq!(enrich(make_record(0.0, 80.0)).fulfillment_ratio, 0.0);
        assert_eq!(enrich(make_record(-5.0, 80.0)).fulfillment_ratio, 0.0);
    }

    #[test]
    fn test_enrich_elapsed_days() {
        let record = Record {
            purchase_order_date: "01/01/2024".to_string(),
            received_date: "05/01/2024".to_string(),
            ..Record::default()
        };
        let enriched = enrich(record);
        assert_eq!(enriched.elapsed_days, 4);
        assert!(enriched.purchase_order_date_value.is_some());
        assert!(enriched.received_date_value.is_some());
    }

    #[test]
    fn test_enrich_elapsed_days_zero_when_unparseable() {
        let record = Record {
            purchase_order_date: "pending".to_string(),
            received_date: "05/01/2024".to_string(),
            ..Record::default()
        };
        let enriched = enrich(record);
        assert_eq!(enriched.elapsed_days, 0);
        assert_eq!(enriched.purchase_order_date_value, None);
    }

    #[test]
    fn test_enrich_is_total_on_empty_record() {
        // All-missing input still yields a well-formed record
        let enriched = enrich(Record::default());
        assert_eq!(enriched.fulfillment_ratio, 0.0);
        assert_eq!(enriched.elapsed_days, 0);
        assert_eq!(enriched.purchase_order_date_value, None);
        assert_eq!(enriched.received_date_value, None);
    }
}
