// ↕️ Sort Engine - Ordering the active view by a chosen column
//
// Columns are an explicit enum mapped to typed accessors, not string-keyed
// field lookup. Three-way comparator per column type: numeric columns
// compare as f64, date columns compare by parsed calendar value (unparsed
// dates sort as the earliest representable date), text columns by natural
// string order. The sort is unstable; tie order is unspecified.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::EnrichedRecord;

/// Every sortable column of the report table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    PurchaseOrderNumber,
    ItemCode,
    ItemName,
    SupplierName,
    Contract,
    PurchaseOrderDate,
    ReceivedDate,
    QuantityOrdered,
    QuantityReceived,
    OrderValue,
    ReceivedValue,
    FulfillmentRatio,
    ElapsedDays,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: SortColumn) -> Self {
        SortSpec {
            column,
            direction: SortDirection::Ascending,
        }
    }
}

/// Sort a view by the given spec. Not stable: records with equal keys may
/// appear in any relative order.
pub fn sort(mut records: Vec<EnrichedRecord>, spec: &SortSpec) -> Vec<EnrichedRecord> {
    records.sort_unstable_by(|a, b| compare(a, b, spec));
    records
}

/// Three-way comparison of two records under a sort spec.
pub fn compare(a: &EnrichedRecord, b: &EnrichedRecord, spec: &SortSpec) -> Ordering {
    let ordering = match spec.column {
        // Numeric columns
        SortColumn::QuantityOrdered => numeric(a.record.quantity_ordered, b.record.quantity_ordered),
        SortColumn::QuantityReceived => {
            numeric(a.record.quantity_received, b.record.quantity_received)
        }
        SortColumn::OrderValue => numeric(a.record.order_value, b.record.order_value),
        SortColumn::ReceivedValue => numeric(a.record.received_value, b.record.received_value),
        SortColumn::FulfillmentRatio => numeric(a.fulfillment_ratio, b.fulfillment_ratio),
        SortColumn::ElapsedDays => a.elapsed_days.cmp(&b.elapsed_days),

        // Date columns: unparsed dates sort first ascending, last descending
        SortColumn::PurchaseOrderDate => {
            date(a.purchase_order_date_value, b.purchase_order_date_value)
        }
        SortColumn::ReceivedDate => date(a.received_date_value, b.received_date_value),

        // Text columns
        SortColumn::PurchaseOrderNumber => a
            .record
            .purchase_order_number
            .cmp(&b.record.purchase_order_number),
        SortColumn::ItemCode => a.record.item_code.cmp(&b.record.item_code),
        SortColumn::ItemName => a.record.item_name.cmp(&b.record.item_name),
        SortColumn::SupplierName => a.record.supplier_name.cmp(&b.record.supplier_name),
        SortColumn::Contract => a.record.contract.cmp(&b.record.contract),
    };

    match spec.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn numeric(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

fn date(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    a.unwrap_or(NaiveDate::MIN).cmp(&b.unwrap_or(NaiveDate::MIN))
}

// ============================================================================
// TESTS
// ============================================================================
