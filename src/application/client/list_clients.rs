use serde::Serialize;
use std::sync::Arc;

use crate::domain::client::{Client, ClientError, ClientRegistry};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
  pub id: i64,
  pub name: String,
  pub address: String,
  pub tax_number: String,
}

impl From<Client> for ClientDto {
  fn from(client: Client) -> Self {
    Self {
      id: client.id,
      name: client.name.value().to_string(),
      address: client.address.value().to_string(),
      tax_number: client.tax_number.value().to_string(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ListClientsResponse {
  pub clients: Vec<ClientDto>,
}

pub struct ListClientsUseCase {
  client_registry: Arc<ClientRegistry>,
}

impl ListClientsUseCase {
  pub fn new(client_registry: Arc<ClientRegistry>) -> Self {
    Self { client_registry }
  }

  pub async fn execute(&self) -> Result<ListClientsResponse, ClientError> {
    let clients = self.client_registry.list().await?;

    Ok(ListClientsResponse {
      clients: clients.into_iter().map(ClientDto::from).collect(),
    })
  }
}
