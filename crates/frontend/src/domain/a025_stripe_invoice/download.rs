use contracts::domain::a025_stripe_invoice::aggregate::Invoice;

use crate::shared::notifications::Notifier;

pub const PDF_UNAVAILABLE: &str = "Unable to fetch the selected invoice";

/// Decide what to do with a fetched invoice detail.
///
/// Returns the URL to open, or reports why there is none.
pub fn resolve_download(result: Result<Invoice, String>, notifier: &impl Notifier) -> Option<String> {
    match result {
        Ok(invoice) => match invoice.pdf_url() {
            Some(url) => Some(url.to_string()),
            None => {
                log::debug!("invoice {} has no PDF", invoice.id);
                notifier.info(PDF_UNAVAILABLE);
                None
            }
        },
        Err(e) => {
            notifier.error(e);
            None
        }
    }
}

/// Open `url` in a new browsing context
pub fn open_in_new_tab(url: &str) {
    let opened = web_sys::window().and_then(|w| w.open_with_url_and_target(url, "_blank").ok().flatten());
    if opened.is_none() {
        log::warn!("could not open a new window for {}", url);
    }
}
