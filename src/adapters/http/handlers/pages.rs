use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{errors::ApiError, templates::TemplateEngine};
use crate::application::invoice::{
  GetInvoiceDetailsCommand, GetInvoiceDetailsUseCase, ListInvoicesUseCase,
};

use super::parse_id;

fn render(
  templates: &TemplateEngine,
  template: &str,
  context: &tera::Context,
) -> Result<HttpResponse, ApiError> {
  let html = templates
    .render(template, context)
    .map_err(|e| ApiError::Internal(format!("Template error: {:?}", e)))?;

  Ok(
    HttpResponse::Ok()
      .content_type("text/html; charset=utf-8")
      .body(html),
  )
}

// GET / - Invoice list
pub async fn invoices_page(
  templates: web::Data<TemplateEngine>,
  use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  let mut context = tera::Context::new();
  context.insert("invoices", &response.invoices);

  render(&templates, "pages/invoices.html.tera", &context)
}

// GET /invoices/{id} - Printable invoice document
pub async fn invoice_document_page(
  path: web::Path<String>,
  templates: web::Data<TemplateEngine>,
  use_case: web::Data<Arc<GetInvoiceDetailsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoice_id = parse_id(&path)?;
  let invoice = use_case
    .execute(GetInvoiceDetailsCommand { invoice_id })
    .await?;

  let mut context = tera::Context::new();
  context.insert("invoice", &invoice);

  render(&templates, "pages/invoice_document.html.tera", &context)
}
