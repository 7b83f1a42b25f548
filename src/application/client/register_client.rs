use serde::Serialize;
use std::sync::Arc;

use crate::domain::client::{ClientError, ClientRegistry};

#[derive(Debug)]
pub struct RegisterClientCommand {
  pub name: String,
  pub address: String,
  pub tax_number: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterClientResponse {
  pub id: i64,
}

pub struct RegisterClientUseCase {
  client_registry: Arc<ClientRegistry>,
}

impl RegisterClientUseCase {
  pub fn new(client_registry: Arc<ClientRegistry>) -> Self {
    Self { client_registry }
  }

  pub async fn execute(
    &self,
    command: RegisterClientCommand,
  ) -> Result<RegisterClientResponse, ClientError> {
    let client = self
      .client_registry
      .register(&command.name, &command.address, &command.tax_number)
      .await?;

    Ok(RegisterClientResponse { id: client.id })
  }
}
