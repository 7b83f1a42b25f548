pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod templates;

// Re-export commonly used types
pub use dtos::{ClientRequest, InvoiceRequest};
pub use errors::ApiError;
pub use middleware::{RequestId, RequestIdMiddleware};
pub use routes::{configure_client_routes, configure_invoice_routes, configure_web_routes};
pub use templates::TemplateEngine;
