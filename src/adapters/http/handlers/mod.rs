pub mod clients;
pub mod invoices;
pub mod pages;

use crate::adapters::http::errors::ApiError;

/// Parses a numeric path id, rejecting anything else with a 400
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
  raw.trim().parse::<i64>().map_err(|_| {
    tracing::debug!("parse_id: malformed id {:?}", raw);
    ApiError::invalid_id()
  })
}
