// 📥 Ingestion - JSON payload → normalized records
//
// The endpoint responds with either a bare array of row objects or an
// object wrapping the array in a `data` property. Any other shape is an
// empty record set, never an error. Field names drifted across service
// versions, so extraction tries the canonical name first and then the
// legacy wire aliases (nomorPO, poDate, poValue, ...).

use serde_json::Value;
use tracing::debug;

use crate::metrics::coerce_numeric;
use crate::records::Record;

/// Decode a JSON payload into records.
///
/// Accepted shapes:
/// - `[ {...}, {...} ]`
/// - `{ "data": [ {...} ] }`
/// - anything else → empty vec
pub fn parse_payload(payload: &Value) -> Vec<Record> {
    let rows: &[Value] = match payload {
        Value::Array(rows) => rows,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(rows)) => rows,
            _ => {
                debug!("payload object has no data array, treating as empty");
                &[]
            }
        },
        _ => {
            debug!("payload is neither array nor object, treating as empty");
            &[]
        }
    };

    let records: Vec<Record> = rows.iter().map(record_from_row).collect();
    debug!(count = records.len(), "decoded payload");
    records
}

/// Normalize one row object. Missing fields degrade per-field: text to
/// the empty string, numerics to 0.0.
fn record_from_row(row: &Value) -> Record {
    Record {
        purchase_order_number: text_field(row, &["purchaseOrderNumber", "nomorPO"]),
        item_code: text_field(row, &["itemCode"]),
        item_name: text_field(row, &["itemName"]),
        supplier_name: text_field(row, &["supplierName"]),
        contract: text_field(row, &["contract"]),
        purchase_order_date: text_field(row, &["purchaseOrderDate", "poDate"]),
        received_date: text_field(row, &["receivedDate"]),
        quantity_ordered: numeric_field(row, &["quantityOrdered", "qtyPO"]),
        quantity_received: numeric_field(row, &["quantityReceived", "qtyReceived"]),
        order_value: numeric_field(row, &["orderValue", "poValue"]),
        received_value: numeric_field(row, &["receivedValue"]),
    }
}

/// First non-null value among the aliases, rendered as text.
fn text_field(row: &Value, keys: &[&str]) -> String {
    for key in keys {
        match row.get(key) {
            Some(Value::String(s)) => return s.clone(),
            Some(Value::Null) | None => continue,
            // Numeric identifiers show up as JSON numbers in old payloads
            Some(other) => return other.to_string(),
        }
    }
    String::new()
}

/// First non-null value among the aliases, coerced to f64.
fn numeric_field(row: &Value, keys: &[&str]) -> f64 {
    for key in keys {
        match row.get(key) {
            Some(Value::Null) | None => continue,
            Some(value) => return coerce_numeric(value),
        }
    }
    0.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_array() {
        let payload = json!([
            {"purchaseOrderNumber": "PO1", "supplierName": "Acme", "orderValue": 100},
            {"purchaseOrderNumber": "PO2", "supplierName": "Globex", "orderValue": "250.5"}
        ]);

        let records = parse_payload(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].purchase_order_number, "PO1");
        assert_eq!(records[0].order_value, 100.0);
        assert_eq!(records[1].order_value, 250.5);
    }

    #[test]
    fn test_parse_data_wrapper() {
        let payload = json!({"data": [{"purchaseOrderNumber": "PO1"}]});
        let records = parse_payload(&payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].purchase_order_number, "PO1");
    }

    #[test]
    fn test_parse_unexpected_shapes_are_empty() {
        assert!(parse_payload(&json!({"rows": []})).is_empty());
        assert!(parse_payload(&json!("oops")).is_empty());
        assert!(parse_payload(&json!(42)).is_empty());
        assert!(parse_payload(&json!(null)).is_empty());
    }

    #[test]
    fn test_legacy_wire_aliases() {
        let payload = json!([{
            "nomorPO": "PO1",
            "poDate": "01/01/2024",
            "poValue": "100",
            "qtyPO": 10,
            "qtyReceived": "8",
            "receivedValue": "80"
        }]);

        let records = parse_payload(&payload);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.purchase_order_number, "PO1");
        assert_eq!(record.purchase_order_date, "01/01/2024");
        assert_eq!(record.order_value, 100.0);
        assert_eq!(record.quantity_ordered, 10.0);
        assert_eq!(record.quantity_received, 8.0);
        assert_eq!(record.received_value, 80.0);
    }

    #[test]
    fn test_missing_fields_degrade() {
        let records = parse_payload(&json!([{}]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], Record::default());

        // Non-object rows normalize to empty records too
        let records = parse_payload(&json!(["not a row"]));
        assert_eq!(records[0], Record::default());
    }

    #[test]
    fn test_numeric_identifier_rendered_as_text() {
        let records = parse_payload(&json!([{"purchaseOrderNumber": 12345}]));
        assert_eq!(records[0].purchase_order_number, "12345");
    }

    #[test]
    fn test_null_field_falls_through_to_alias() {
        let records =
            parse_payload(&json!([{"purchaseOrderNumber": null, "nomorPO": "PO9"}]));
        assert_eq!(records[0].purchase_order_number, "PO9");
    }
}
