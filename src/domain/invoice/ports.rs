use async_trait::async_trait;

use super::entities::{Invoice, InvoiceWithParties, NewInvoice};
use super::errors::InvoiceError;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  /// Fails with `InvoiceError::DuplicateNumber` when the number is taken.
  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError>;
  /// Writes every mutable field of an active invoice. Fails with
  /// `InvoiceError::NotFound` when no active row matched.
  async fn update(&self, invoice: &Invoice) -> Result<Invoice, InvoiceError>;
  /// Flips the canceled flag of an active invoice. Returns `false` when the
  /// row is missing or was already canceled.
  async fn mark_canceled(&self, id: i64) -> Result<bool, InvoiceError>;
  async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>, InvoiceError>;
  async fn find_with_parties(&self, id: i64) -> Result<Option<InvoiceWithParties>, InvoiceError>;
  /// Every invoice, ordered by id
  async fn find_all_with_parties(&self) -> Result<Vec<InvoiceWithParties>, InvoiceError>;
  async fn list_numbers(&self) -> Result<Vec<String>, InvoiceError>;
}
