use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{dtos::ClientRequest, errors::ApiError};
use crate::application::client::{
  DeleteClientCommand, DeleteClientUseCase, ListClientsUseCase, RegisterClientUseCase,
};

use super::parse_id;

/// List clients
/// GET /api/clients
pub async fn list_clients_handler(
  use_case: web::Data<Arc<ListClientsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;
  Ok(HttpResponse::Ok().json(response.clients))
}

/// Register client
/// POST /api/clients
pub async fn register_client_handler(
  request: web::Json<ClientRequest>,
  use_case: web::Data<Arc<RegisterClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute(request.into_inner().into()).await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Delete a client no invoice refers to
/// DELETE /api/clients/{id}
pub async fn delete_client_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<DeleteClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let client_id = parse_id(&path)?;
  use_case.execute(DeleteClientCommand { client_id }).await?;
  Ok(HttpResponse::Ok().finish())
}
