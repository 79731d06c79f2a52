//! Offset/limit pagination shared by list endpoints.
//!
//! Pages are 1-based; offsets are 0-based record positions.

/// Fixed page size of the organization invoices list.
pub const INVOICES_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Current page, starting at 1.
    pub page: usize,
    pub page_size: usize,
    /// Total number of records reported by the server.
    pub total_count: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(INVOICES_PAGE_SIZE)
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            total_count: 0,
        }
    }

    /// Record offset of the first row of `page`.
    pub fn offset_for(&self, page: usize) -> usize {
        page.saturating_sub(1) * self.page_size
    }

    pub fn offset(&self) -> usize {
        self.offset_for(self.page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// False once the current page reaches the reported total.
    pub fn has_next(&self) -> bool {
        self.page * self.page_size < self.total_count
    }

    /// 1-based inclusive bounds of the rows shown, for `shown` rows on the current page.
    pub fn shown_range(&self, shown: usize) -> (usize, usize) {
        let offset = self.offset();
        (offset + 1, offset + shown)
    }
}
