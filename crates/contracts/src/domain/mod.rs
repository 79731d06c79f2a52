pub mod a002_organization;
pub mod a025_stripe_invoice;
