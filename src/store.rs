// 🗂️ Record Store - Owner of the raw enriched set and the active view
//
// The store is the single mutable holder in the pipeline: raw records in,
// current FilterSpec/SortSpec held alongside, active view recomputed in
// full on every change. Dashboard-scale data (hundreds to low thousands
// of rows), so full recompute is fine and there is no incremental state
// to keep consistent. Consumers only ever borrow the view.

use tracing::debug;

use crate::export;
use crate::filter::{self, FilterSpec};
use crate::metrics;
use crate::records::{EnrichedRecord, Record};
use crate::sort::{self, SortColumn, SortDirection, SortSpec};
use crate::stats::{self, Summary};

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    raw: Vec<EnrichedRecord>,
    filter: FilterSpec,
    sort: Option<SortSpec>,
    view: Vec<EnrichedRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Replace the record set. Records are enriched on the way in; the
    /// current filter and sort are re-applied to the new data.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.raw = metrics::enrich_all(records);
        self.refresh();
        debug!(raw = self.raw.len(), view = self.view.len(), "records replaced");
    }

    /// Replace the filter spec and recompute the view.
    pub fn set_filter(&mut self, spec: FilterSpec) {
        self.filter = spec;
        self.refresh();
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(FilterSpec::default());
    }

    /// Sort by a column. Selecting the column already sorted by toggles
    /// the direction; selecting a new column resets to ascending.
    pub fn sort_by_column(&mut self, column: SortColumn) {
        let spec = match self.sort {
            Some(current) if current.column == column => SortSpec {
                column,
                direction: current.direction.toggled(),
            },
            _ => SortSpec {
                column,
                direction: SortDirection::Ascending,
            },
        };
        self.sort = Some(spec);
        self.refresh();
    }

    /// Full recompute: filter the raw set, then sort the result. An empty
    /// filter spec passes everything, so the filter pass is skipped.
    fn refresh(&mut self) {
        let mut view = if self.filter.is_empty() {
            self.raw.clone()
        } else {
            filter::apply(&self.raw, &self.filter)
        };
        if let Some(spec) = &self.sort {
            view = sort::sort(view, spec);
        }
        self.view = view;
    }

    /// The active filtered/sorted view.
    pub fn view(&self) -> &[EnrichedRecord] {
        &self.view
    }

    /// The full enriched record set, unfiltered.
    pub fn raw(&self) -> &[EnrichedRecord] {
        &self.raw
    }

    pub fn filter_spec(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Summary statistics over the active view.
    pub fn summary(&self) -> Summary {
        stats::summarize(&self.view)
    }

    /// Delimited-text export of the active view.
    pub fn export(&self) -> String {
        export::to_delimited_text(&self.view)
    }
}

// ============================================================================
// TESTS
// ============================================================================
