use actix_web::web;
use std::sync::Arc;

use crate::application::client::{DeleteClientUseCase, ListClientsUseCase, RegisterClientUseCase};
use crate::application::invoice::{
  CancelInvoiceUseCase, CreateInvoiceUseCase, GetInvoiceDetailsUseCase, ListInvoicesUseCase,
  UpdateInvoiceUseCase,
};

use super::handlers::clients::{
  delete_client_handler, list_clients_handler, register_client_handler,
};
use super::handlers::invoices::{
  cancel_invoice_handler, create_invoice_handler, get_invoice_handler, list_invoices_handler,
  update_invoice_handler,
};
use super::handlers::pages;
use super::templates::TemplateEngine;

/// Configure invoice routes
///
/// Mounts the invoice endpoints under the provided scope (e.g. /api/invoices).
///
/// # Routes
///
/// - GET / - List invoices with party names
/// - POST / - Create an invoice, responds with its id
/// - GET /{id} - Invoice with parties and derived figures
/// - PUT /{id} - Edit an active invoice
/// - POST /{id}/cancel - Stornó
pub fn configure_invoice_routes(
  cfg: &mut web::ServiceConfig,
  list_use_case: Arc<ListInvoicesUseCase>,
  create_use_case: Arc<CreateInvoiceUseCase>,
  get_use_case: Arc<GetInvoiceDetailsUseCase>,
  update_use_case: Arc<UpdateInvoiceUseCase>,
  cancel_use_case: Arc<CancelInvoiceUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(get_use_case))
    .app_data(web::Data::new(update_use_case))
    .app_data(web::Data::new(cancel_use_case))
    .route("", web::get().to(list_invoices_handler))
    .route("", web::post().to(create_invoice_handler))
    .route("/{id}", web::get().to(get_invoice_handler))
    .route("/{id}", web::put().to(update_invoice_handler))
    .route("/{id}/cancel", web::post().to(cancel_invoice_handler));
}

/// Configure client routes
///
/// # Routes
///
/// - GET / - List clients
/// - POST / - Register a client, responds with its id
/// - DELETE /{id} - Delete a client without invoices
pub fn configure_client_routes(
  cfg: &mut web::ServiceConfig,
  list_use_case: Arc<ListClientsUseCase>,
  register_use_case: Arc<RegisterClientUseCase>,
  delete_use_case: Arc<DeleteClientUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(register_use_case))
    .app_data(web::Data::new(delete_use_case))
    .route("", web::get().to(list_clients_handler))
    .route("", web::post().to(register_client_handler))
    .route("/{id}", web::delete().to(delete_client_handler));
}

/// Configure web UI routes
pub fn configure_web_routes(
  cfg: &mut web::ServiceConfig,
  templates: TemplateEngine,
  list_use_case: Arc<ListInvoicesUseCase>,
  get_use_case: Arc<GetInvoiceDetailsUseCase>,
) {
  cfg
    .app_data(web::Data::new(templates))
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(get_use_case))
    .route("/", web::get().to(pages::invoices_page))
    .route("/invoices/{id}", web::get().to(pages::invoice_document_page));
}
