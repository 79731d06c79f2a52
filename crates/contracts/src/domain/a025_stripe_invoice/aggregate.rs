use serde::{Deserialize, Serialize};

// ============================================================================
// Invoice (read-only projection of a billing-provider invoice)
// ============================================================================

/// Invoice as returned by `GET /stripe/invoices` and `GET /stripe/invoices/{id}`.
///
/// The record is never mutated on the client. Amounts are integer minor
/// currency units (cents for `usd`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,

    /// Human facing invoice number. Draft invoices have none yet.
    #[serde(default)]
    pub number: Option<String>,

    /// End of the billed period, unix epoch seconds.
    pub period_end: i64,

    /// Subtotal in minor currency units.
    pub subtotal: i64,

    #[serde(default)]
    pub invoice_pdf: Option<String>,

    /// ISO currency code in lower case, e.g. "usd".
    #[serde(default)]
    pub currency: Option<String>,
}

impl Invoice {
    /// Download link, if the provider has rendered a PDF for this invoice.
    pub fn pdf_url(&self) -> Option<&str> {
        self.invoice_pdf
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}

pub const DEFAULT_CURRENCY: &str = "usd";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_item_without_optional_fields() {
        let json = r#"{"id":"in_1","number":"A-0001","period_end":1700000000,"subtotal":2500}"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();

        assert_eq!(invoice.id, "in_1");
        assert_eq!(invoice.number.as_deref(), Some("A-0001"));
        assert_eq!(invoice.subtotal, 2500);
        assert_eq!(invoice.invoice_pdf, None);
        assert_eq!(invoice.currency_code(), "usd");
    }

    #[test]
    fn test_pdf_url_ignores_null_and_blank() {
        let json = r#"{"id":"in_2","number":null,"period_end":0,"subtotal":0,"invoice_pdf":null}"#;
        let mut invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.pdf_url(), None);

        invoice.invoice_pdf = Some("   ".to_string());
        assert_eq!(invoice.pdf_url(), None);

        invoice.invoice_pdf = Some("https://pay.example.com/in_2.pdf".to_string());
        assert_eq!(invoice.pdf_url(), Some("https://pay.example.com/in_2.pdf"));
    }
}
