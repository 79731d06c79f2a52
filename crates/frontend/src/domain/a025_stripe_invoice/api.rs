use contracts::domain::a025_stripe_invoice::aggregate::Invoice;

use crate::shared::api_utils::{api_root, get_json, head_header};

/// Response header carrying the total number of invoices of a customer
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

pub fn list_url(root: &str, customer_id: &str, offset: usize, limit: usize) -> String {
    format!(
        "{}/stripe/invoices?offset={}&limit={}&customer={}",
        root,
        offset,
        limit,
        urlencoding::encode(customer_id)
    )
}

pub fn count_url(root: &str, customer_id: &str) -> String {
    format!(
        "{}/stripe/invoices?customer={}",
        root,
        urlencoding::encode(customer_id)
    )
}

pub fn detail_url(root: &str, invoice_id: &str) -> String {
    format!("{}/stripe/invoices/{}", root, urlencoding::encode(invoice_id))
}

pub fn parse_total_count(value: &str) -> Result<usize, String> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid {} header: {:?}", TOTAL_COUNT_HEADER, value))
}

/// Fetch one page of a customer's invoices
pub async fn fetch_invoices(
    customer_id: &str,
    offset: usize,
    limit: usize,
) -> Result<Vec<Invoice>, String> {
    get_json::<Vec<Invoice>>(&list_url(&api_root(), customer_id, offset, limit)).await
}

/// Total number of invoices of a customer (metadata-only request)
pub async fn fetch_invoice_count(customer_id: &str) -> Result<usize, String> {
    let value = head_header(&count_url(&api_root(), customer_id), TOTAL_COUNT_HEADER).await?;
    parse_total_count(&value)
}

/// Fetch a single invoice, including its PDF link if available
pub async fn fetch_invoice(invoice_id: &str) -> Result<Invoice, String> {
    get_json::<Invoice>(&detail_url(&api_root(), invoice_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "https://dash.example.com/api";

    #[test]
    fn test_list_url() {
        assert_eq!(
            list_url(ROOT, "cus_123", 20, 10),
            "https://dash.example.com/api/stripe/invoices?offset=20&limit=10&customer=cus_123"
        );
    }

    #[test]
    fn test_customer_is_url_encoded() {
        assert_eq!(
            count_url(ROOT, "cus 1&x=2"),
            "https://dash.example.com/api/stripe/invoices?customer=cus%201%26x%3D2"
        );
    }

    #[test]
    fn test_detail_url() {
        assert_eq!(
            detail_url(ROOT, "in_1Abc"),
            "https://dash.example.com/api/stripe/invoices/in_1Abc"
        );
    }

    #[test]
    fn test_parse_total_count() {
        assert_eq!(parse_total_count("42"), Ok(42));
        assert_eq!(parse_total_count(" 7 "), Ok(7));
        assert!(parse_total_count("").is_err());
        assert!(parse_total_count("-1").is_err());
        assert!(parse_total_count("many").is_err());
    }
}
