use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{dtos::InvoiceRequest, errors::ApiError};
use crate::application::invoice::{
  CancelInvoiceCommand, CancelInvoiceUseCase, CreateInvoiceCommand, CreateInvoiceUseCase,
  GetInvoiceDetailsCommand, GetInvoiceDetailsUseCase, ListInvoicesUseCase, UpdateInvoiceCommand,
  UpdateInvoiceUseCase,
};

use super::parse_id;

/// List invoices with issuer and customer names
/// GET /api/invoices
pub async fn list_invoices_handler(
  use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;
  Ok(HttpResponse::Ok().json(response.invoices))
}

/// Get one invoice with both parties and the derived figures
/// GET /api/invoices/{id}
pub async fn get_invoice_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<GetInvoiceDetailsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoice_id = parse_id(&path)?;
  let response = use_case
    .execute(GetInvoiceDetailsCommand { invoice_id })
    .await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Create invoice
/// POST /api/invoices
pub async fn create_invoice_handler(
  request: web::Json<InvoiceRequest>,
  use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = CreateInvoiceCommand {
    draft: request.into_inner().into(),
  };

  let response = use_case.execute(command).await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Edit an active invoice
/// PUT /api/invoices/{id}
pub async fn update_invoice_handler(
  path: web::Path<String>,
  request: web::Json<InvoiceRequest>,
  use_case: web::Data<Arc<UpdateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoice_id = parse_id(&path)?;
  let command = UpdateInvoiceCommand {
    invoice_id,
    draft: request.into_inner().into(),
  };

  use_case.execute(command).await?;
  Ok(HttpResponse::Ok().finish())
}

/// Stornó
/// POST /api/invoices/{id}/cancel
pub async fn cancel_invoice_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<CancelInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoice_id = parse_id(&path)?;
  use_case.execute(CancelInvoiceCommand { invoice_id }).await?;
  Ok(HttpResponse::Ok().finish())
}
