use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::client::ClientError;
use crate::domain::invoice::InvoiceError;

/// Message returned for path ids that are not integers
pub const INVALID_ID_MESSAGE: &str = "Érvénytelen azonosító";

const INTERNAL_MESSAGE: &str = "Belső hiba történt.";

/// API error type that maps domain errors to HTTP responses.
///
/// Every response body is the plain-text Hungarian message shown to the user.
#[derive(Debug)]
pub enum ApiError {
  /// Validation or business-rule rejection (400 Bad Request)
  Validation(String),

  /// Referenced record does not exist (404 Not Found)
  NotFound(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl ApiError {
  pub fn invalid_id() -> Self {
    ApiError::Validation(INVALID_ID_MESSAGE.to_string())
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let message = match self {
      ApiError::Validation(msg) => {
        tracing::warn!("Request rejected: {}", msg);
        msg.clone()
      }
      ApiError::NotFound(msg) => msg.clone(),
      ApiError::Internal(msg) => {
        // Don't expose internal error details
        tracing::error!("Internal error: {}", msg);
        INTERNAL_MESSAGE.to_string()
      }
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::plaintext())
      .body(message)
  }
}

/// Convert InvoiceError to ApiError
impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::NotFound(_) => ApiError::NotFound(error.to_string()),
      InvoiceError::Validation(_)
      | InvoiceError::DuplicateNumber(_)
      | InvoiceError::AlreadyCanceled(_)
      | InvoiceError::CannotEditCanceled(_)
      | InvoiceError::UnknownParty { .. } => ApiError::Validation(error.to_string()),
      InvoiceError::Internal(msg) => ApiError::Internal(msg),
      InvoiceError::Database(e) => ApiError::Internal(format!("Database error: {}", e)),
    }
  }
}

/// Convert ClientError to ApiError
impl From<ClientError> for ApiError {
  fn from(error: ClientError) -> Self {
    match error {
      ClientError::NotFound(_) => ApiError::NotFound(error.to_string()),
      ClientError::Validation(_)
      | ClientError::DuplicateIdentity
      | ClientError::HasDependentInvoices { .. } => ApiError::Validation(error.to_string()),
      ClientError::Database(e) => ApiError::Internal(format!("Database error: {}", e)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::client::ClientRejection;
  use crate::domain::invoice::{InvoiceRejection, PartyRole};
  use actix_web::body::to_bytes;

  async fn body_text(error: ApiError) -> String {
    let bytes = to_bytes(error.error_response().into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::NotFound("test".to_string()).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(ApiError::invalid_id().status_code(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn test_invoice_error_conversion() {
    let api_error: ApiError = InvoiceError::NotFound(1).into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError = InvoiceError::AlreadyCanceled(1).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    let api_error: ApiError = InvoiceError::UnknownParty {
      role: PartyRole::Issuer,
      client_id: 5,
    }
    .into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    let api_error: ApiError = InvoiceError::Database(sqlx::Error::PoolTimedOut).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn test_client_error_conversion() {
    let api_error: ApiError = ClientError::NotFound(3).into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError = ClientError::HasDependentInvoices {
      client_id: 3,
      invoice_count: 2,
    }
    .into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    let api_error: ApiError = ClientError::from(ClientRejection::InvalidTaxNumber).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn test_body_is_plain_hungarian_message() {
    let error: ApiError = InvoiceError::from(InvoiceRejection::DueDateOutOfRange).into();
    let response = error.error_response();
    assert_eq!(
      response.headers().get("content-type").unwrap(),
      "text/plain; charset=utf-8"
    );
    assert_eq!(
      body_text(error).await,
      "A fizetési határidő a számla keltétől számítva 0 és 30 nap között lehet!"
    );

    let error: ApiError = ClientError::DuplicateIdentity.into();
    assert_eq!(body_text(error).await, "Név vagy adószám már létezik!");

    let error = ApiError::Internal("connection reset".to_string());
    assert_eq!(body_text(error).await, INTERNAL_MESSAGE);
  }
}
