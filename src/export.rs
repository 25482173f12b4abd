// 📤 Exporter - Active view → delimited text
//
// 13 fixed columns, header row first, one row per record in input order
// (the export reflects the current filter/sort state verbatim). Every
// cell is double-quoted. Embedded quote characters are NOT escaped; the
// legacy report files are produced that way and consumers rely on the
// byte layout, so the limitation is preserved rather than fixed.

use crate::records::EnrichedRecord;

/// Column headers, in the fixed export order.
pub const HEADERS: [&str; 13] = [
    "PO Number",
    "Item Code",
    "Item Name",
    "Supplier",
    "Contract",
    "PO Date",
    "Qty Ordered",
    "Order Value",
    "Received Date",
    "Qty Received",
    "Received Value",
    "Fulfillment Ratio (%)",
    "Elapsed Days",
];

/// Serialize a view to delimited text (CSV-shaped, see module note on
/// quoting). Dates are emitted as the raw wire text, not the parsed
/// calendar values; the fulfillment ratio is formatted to 2 decimals.
pub fn to_delimited_text(records: &[EnrichedRecord]) -> String {
    let mut out = String::new();

    push_row(&mut out, HEADERS.iter().map(|h| h.to_string()));

    for r in records {
        push_row(
            &mut out,
            [
                r.record.purchase_order_number.clone(),
                r.record.item_code.clone(),
                r.record.item_name.clone(),
                r.record.supplier_name.clone(),
                r.record.contract.clone(),
                r.record.purchase_order_date.clone(),
                format_number(r.record.quantity_ordered),
                format_number(r.record.order_value),
                r.record.received_date.clone(),
                format_number(r.record.quantity_received),
                format_number(r.record.received_value),
                format!("{:.2}", r.fulfillment_ratio),
                r.elapsed_days.to_string(),
            ]
            .into_iter(),
        );
    }

    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>) {
    let quoted: Vec<String> = cells.map(|cell| format!("\"{}\"", cell)).collect();
    out.push_str(&quoted.join(","));
    out.push('\n');
}

/// Whole numbers render without a trailing ".0", matching the way the
/// upstream values were templated into the legacy export.
fn format_number(value: f64) -> String {
    format!("{}", value)
}

// ============================================================================
// TESTS
// ============================================================================
