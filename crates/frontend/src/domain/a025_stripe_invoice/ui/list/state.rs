use contracts::domain::a025_stripe_invoice::aggregate::Invoice;
use contracts::shared::pagination::{PaginationState, INVOICES_PAGE_SIZE};
use leptos::prelude::*;

use crate::shared::notifications::Notifier;

pub const CHECKING_FOR_INVOICES: &str = "Checking for invoices";
pub const NO_INVOICES_YET: &str = "No invoices for this organization yet";

/// Identifies one request. Captured when the request starts and checked
/// before its response is allowed to touch the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    request: u64,
    pub page: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Accepted,
    Stale,
}

#[derive(Clone, Debug)]
pub struct InvoiceListState {
    pub customer_id: String,
    pub invoices: Vec<Invoice>,
    pub pagination: PaginationState,
    pub loading: bool,
    /// Bumped on every customer change; older responses are dropped.
    generation: u64,
    /// Bumped on every list request; only the latest one is applied.
    list_request: u64,
}

impl Default for InvoiceListState {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            invoices: Vec::new(),
            pagination: PaginationState::new(INVOICES_PAGE_SIZE),
            loading: false,
            generation: 0,
            list_request: 0,
        }
    }
}

impl InvoiceListState {
    /// Switch to another customer and start over at page 1.
    ///
    /// Rows and count of the previous customer are dropped. Returns `None`
    /// when there is nothing to fetch (organization without billing customer).
    pub fn start_customer(&mut self, customer_id: &str) -> Option<FetchTicket> {
        self.generation += 1;
        self.customer_id = customer_id.trim().to_string();
        self.invoices.clear();
        self.pagination.total_count = 0;
        self.pagination.page = 1;

        if self.customer_id.is_empty() {
            self.loading = false;
            return None;
        }
        Some(self.start_page(1))
    }

    /// Begin loading `page` of the current customer.
    ///
    /// The displayed page only moves once the rows of `page` arrive.
    pub fn start_page(&mut self, page: usize) -> FetchTicket {
        let page = page.max(1);
        self.list_request += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            request: self.list_request,
            page,
        }
    }

    /// Offset of the page a ticket was issued for.
    pub fn offset_for(&self, ticket: FetchTicket) -> usize {
        self.pagination.offset_for(ticket.page)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn finish_list(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Invoice>, String>,
        notifier: &impl Notifier,
    ) -> Applied {
        if !self.is_current(ticket) || ticket.request != self.list_request {
            log::debug!("dropping stale invoice page {} response", ticket.page);
            return Applied::Stale;
        }

        match result {
            Ok(invoices) => {
                self.invoices = invoices;
                self.pagination.page = ticket.page;
            }
            Err(e) => {
                log::warn!(
                    "failed to load page {} of invoices for {}: {}",
                    ticket.page,
                    self.customer_id,
                    e
                );
                notifier.error(e);
            }
        }
        self.loading = false;
        Applied::Accepted
    }

    pub fn finish_count(
        &mut self,
        ticket: FetchTicket,
        result: Result<usize, String>,
        notifier: &impl Notifier,
    ) -> Applied {
        if !self.is_current(ticket) {
            log::debug!("dropping stale invoice count response");
            return Applied::Stale;
        }

        match result {
            Ok(count) => self.pagination.total_count = count,
            Err(e) => {
                log::warn!("failed to count invoices for {}: {}", self.customer_id, e);
                notifier.error(e);
            }
        }
        Applied::Accepted
    }

    /// Text shown in place of rows, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        if self.loading {
            Some(CHECKING_FOR_INVOICES)
        } else if self.invoices.is_empty() {
            Some(NO_INVOICES_YET)
        } else {
            None
        }
    }

    /// "Showing X to Y out of N invoices"
    pub fn summary(&self) -> String {
        let (from, to) = self.pagination.shown_range(self.invoices.len());
        format!(
            "Showing {} to {} out of {} invoices",
            from, to, self.pagination.total_count
        )
    }

    pub fn can_go_previous(&self) -> bool {
        self.pagination.has_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.pagination.has_next()
    }
}

// Create state within component scope so it is disposed on unmount
pub fn create_state() -> RwSignal<InvoiceListState> {
    RwSignal::new(InvoiceListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::testing::RecordingNotifier;
    use crate::shared::notifications::NotificationCategory;

    fn invoice(id: &str) -> Invoice {
        Invoice {
            id: id.to_string(),
            number: Some(format!("N-{}", id)),
            period_end: 1_700_000_000,
            subtotal: 1999,
            invoice_pdf: None,
            currency: None,
        }
    }

    fn page_of(n: usize) -> Vec<Invoice> {
        (0..n).map(|i| invoice(&format!("in_{}", i))).collect()
    }

    #[test]
    fn test_initial_load_applies_rows_and_count() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();

        let ticket = state.start_customer("cus_1").unwrap();
        assert!(state.loading);
        assert_eq!(ticket.page, 1);
        assert_eq!(state.offset_for(ticket), 0);

        assert_eq!(state.finish_count(ticket, Ok(23), &notifier), Applied::Accepted);
        assert_eq!(state.finish_list(ticket, Ok(page_of(10)), &notifier), Applied::Accepted);

        assert!(!state.loading);
        assert_eq!(state.invoices.len(), 10);
        assert_eq!(state.pagination.total_count, 23);
        assert_eq!(notifier.total(), 0);
    }

    #[test]
    fn test_customer_change_discards_pending_results() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();

        let old = state.start_customer("cus_old").unwrap();
        let new = state.start_customer("cus_new").unwrap();

        assert_eq!(state.finish_list(old, Ok(page_of(10)), &notifier), Applied::Stale);
        assert_eq!(state.finish_count(old, Ok(99), &notifier), Applied::Stale);
        assert!(state.invoices.is_empty());
        assert_eq!(state.pagination.total_count, 0);
        assert!(state.loading);

        // errors of the old customer are not reported either
        assert_eq!(
            state.finish_list(old, Err("boom".to_string()), &notifier),
            Applied::Stale
        );
        assert_eq!(notifier.total(), 0);

        assert_eq!(state.finish_list(new, Ok(page_of(2)), &notifier), Applied::Accepted);
        assert_eq!(state.invoices.len(), 2);
        assert_eq!(state.customer_id, "cus_new");
    }

    #[test]
    fn test_customer_change_resets_to_first_page() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();

        let t = state.start_customer("cus_1").unwrap();
        state.finish_count(t, Ok(50), &notifier);
        let t = state.start_page(4);
        state.finish_list(t, Ok(page_of(10)), &notifier);
        assert_eq!(state.pagination.page, 4);

        let t = state.start_customer("cus_2").unwrap();
        assert_eq!(t.page, 1);
        assert_eq!(state.pagination.page, 1);
        assert_eq!(state.offset_for(t), 0);
    }

    #[test]
    fn test_older_page_response_does_not_override_newer() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();

        let first = state.start_customer("cus_1").unwrap();
        state.finish_list(first, Ok(page_of(10)), &notifier);

        let page2 = state.start_page(2);
        let page3 = state.start_page(3);
        assert_eq!(state.offset_for(page3), 20);

        assert_eq!(state.finish_list(page3, Ok(page_of(3)), &notifier), Applied::Accepted);
        assert_eq!(state.finish_list(page2, Ok(page_of(10)), &notifier), Applied::Stale);
        assert_eq!(state.invoices.len(), 3);
        assert!(!state.loading);
    }

    #[test]
    fn test_list_failure_keeps_rows_and_clears_loading() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();

        let t = state.start_customer("cus_1").unwrap();
        state.finish_count(t, Ok(25), &notifier);
        state.finish_list(t, Ok(page_of(10)), &notifier);

        let t = state.start_page(2);
        let applied = state.finish_list(t, Err("Stripe is unavailable".to_string()), &notifier);

        assert_eq!(applied, Applied::Accepted);
        assert!(!state.loading);
        assert_eq!(state.invoices.len(), 10);
        assert_eq!(state.pagination.page, 1);
        assert_eq!(state.summary(), "Showing 1 to 10 out of 25 invoices");
        assert_eq!(notifier.count(NotificationCategory::Error), 1);
        assert_eq!(notifier.last_message().as_deref(), Some("Stripe is unavailable"));

        // retrying "next" asks for page 2 again, not page 3
        let t = state.start_page(state.pagination.page + 1);
        assert_eq!(t.page, 2);
        assert_eq!(state.offset_for(t), 10);
    }

    #[test]
    fn test_page_moves_only_when_rows_arrive() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();

        let t = state.start_customer("cus_1").unwrap();
        state.finish_count(t, Ok(25), &notifier);
        state.finish_list(t, Ok(page_of(10)), &notifier);

        let t = state.start_page(2);
        assert_eq!(state.pagination.page, 1);
        assert!(state.loading);

        state.finish_list(t, Ok(page_of(10)), &notifier);
        assert_eq!(state.pagination.page, 2);
        assert_eq!(state.summary(), "Showing 11 to 20 out of 25 invoices");
    }

    #[test]
    fn test_count_failure_is_reported() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();

        let t = state.start_customer("cus_1").unwrap();
        state.finish_count(t, Err("Request failed: 500".to_string()), &notifier);

        assert_eq!(state.pagination.total_count, 0);
        assert!(state.loading);
        assert_eq!(notifier.count(NotificationCategory::Error), 1);
    }

    #[test]
    fn test_blank_customer_fetches_nothing() {
        let mut state = InvoiceListState::default();
        assert_eq!(state.start_customer("  "), None);
        assert!(!state.loading);
        assert_eq!(state.placeholder(), Some(NO_INVOICES_YET));
    }

    #[test]
    fn test_placeholder() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();
        assert_eq!(state.placeholder(), Some(NO_INVOICES_YET));

        let t = state.start_customer("cus_1").unwrap();
        assert_eq!(state.placeholder(), Some(CHECKING_FOR_INVOICES));

        state.finish_list(t, Ok(page_of(1)), &notifier);
        assert_eq!(state.placeholder(), None);

        // loading wins regardless of rows
        state.start_page(2);
        assert_eq!(state.placeholder(), Some(CHECKING_FOR_INVOICES));
    }

    #[test]
    fn test_navigation_bounds() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();

        let t = state.start_customer("cus_1").unwrap();
        state.finish_count(t, Ok(25), &notifier);
        state.finish_list(t, Ok(page_of(10)), &notifier);
        assert!(!state.can_go_previous());
        assert!(state.can_go_next());

        let t = state.start_page(3);
        state.finish_list(t, Ok(page_of(5)), &notifier);
        assert!(state.can_go_previous());
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_summary() {
        let notifier = RecordingNotifier::default();
        let mut state = InvoiceListState::default();

        let t = state.start_customer("cus_1").unwrap();
        state.finish_count(t, Ok(23), &notifier);
        let t = state.start_page(3);
        state.finish_list(t, Ok(page_of(3)), &notifier);

        assert_eq!(state.summary(), "Showing 21 to 23 out of 23 invoices");
    }
}
