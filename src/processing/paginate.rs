// Paged access to raw trip records
// Author: Gabriel Demetrios Lafis

use crate::data::{TripRecord, TripTable};
use super::ProcessingError;

/// Rows shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One window of raw records
#[derive(Debug, PartialEq)]
pub struct Page<'a> {
    /// Index of the first row in this page
    pub offset: usize,
    pub rows: &'a [TripRecord],
    pub has_more: bool,
}

/// Forward-only cursor over an unfiltered table
pub struct RawPaginator {
    table: TripTable,
    page_size: usize,
    cursor: usize,
}

impl RawPaginator {
    /// Create a new paginator positioned at the first row
    pub fn new(table: TripTable, page_size: usize) -> Result<Self, ProcessingError> {
        if page_size == 0 {
            return Err(ProcessingError::InvalidArgument(
                "Page size must be at least 1".to_string(),
            ));
        }

        Ok(RawPaginator {
            table,
            page_size,
            cursor: 0,
        })
    }

    /// Return the next page and advance. Past the end, pages are empty.
    pub fn next_page(&mut self) -> Page<'_> {
        let len = self.table.len();
        let start = self.cursor.min(len);
        let end = start.saturating_add(self.page_size).min(len);
        self.cursor = self.cursor.saturating_add(self.page_size);

        Page {
            offset: start,
            rows: &self.table.records[start..end],
            has_more: end < len,
        }
    }

    /// Whether a further call would return rows
    pub fn has_more(&self) -> bool {
        self.cursor < self.table.len()
    }

    /// Number of rows already handed out
    pub fn position(&self) -> usize {
        self.cursor.min(self.table.len())
    }
}
