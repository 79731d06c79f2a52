use serde::{Deserialize, Serialize};

/// Organization in the dashboard. For invoices only its billing-provider
/// customer id matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub slug: String,
    pub name: String,

    /// Billing-provider customer id; scopes every invoice query.
    #[serde(default)]
    pub stripe_customer_id: String,
}

impl Organization {
    pub fn new(slug: impl Into<String>, name: impl Into<String>, customer: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            stripe_customer_id: customer.into(),
        }
    }

    /// Title shown in the page header: name, or slug if the name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.slug
        } else {
            &self.name
        }
    }
}
