use std::sync::Arc;

use crate::domain::client::{ClientError, ClientRegistry};

#[derive(Debug)]
pub struct DeleteClientCommand {
  pub client_id: i64,
}

pub struct DeleteClientUseCase {
  client_registry: Arc<ClientRegistry>,
}

impl DeleteClientUseCase {
  pub fn new(client_registry: Arc<ClientRegistry>) -> Self {
    Self { client_registry }
  }

  pub async fn execute(&self, command: DeleteClientCommand) -> Result<(), ClientError> {
    self.client_registry.delete(command.client_id).await
  }
}
