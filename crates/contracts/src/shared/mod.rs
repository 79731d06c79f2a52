pub mod api_error;
pub mod pagination;
