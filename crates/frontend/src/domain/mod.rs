pub mod a025_stripe_invoice;
