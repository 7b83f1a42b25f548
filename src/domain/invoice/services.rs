use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::client::{ClientError, ClientRegistry};

use super::entities::{Invoice, InvoiceWithParties, NewInvoice};
use super::errors::{InvoiceEntityError, InvoiceError, InvoiceRejection, PartyRole};
use super::ports::InvoiceRepository;
use super::validator::{CheckedInvoice, InvoiceDraft, InvoiceValidator};

/// Invoice creation, editing, stornó and the joined read paths
pub struct InvoiceCatalog {
  invoice_repo: Arc<dyn InvoiceRepository>,
  clients: Arc<ClientRegistry>,
}

impl InvoiceCatalog {
  pub fn new(invoice_repo: Arc<dyn InvoiceRepository>, clients: Arc<ClientRegistry>) -> Self {
    Self {
      invoice_repo,
      clients,
    }
  }

  pub async fn create(&self, draft: &InvoiceDraft) -> Result<Invoice, InvoiceError> {
    let existing_numbers: HashSet<String> =
      self.invoice_repo.list_numbers().await?.into_iter().collect();

    let checked =
      InvoiceValidator::validate_new(draft, &existing_numbers).map_err(|rejection| {
        match rejection {
          InvoiceRejection::NumberTaken => InvoiceError::DuplicateNumber(
            draft.number.as_deref().unwrap_or_default().trim().to_string(),
          ),
          other => other.into(),
        }
      })?;

    self.verify_parties(&checked).await?;

    let invoice = self
      .invoice_repo
      .create(NewInvoice::from_checked(checked))
      .await?;

    tracing::info!("Invoice {} created with id {}", invoice.number, invoice.id);
    Ok(invoice)
  }

  /// Replaces every mutable field of an active invoice.
  pub async fn update(&self, id: i64, draft: &InvoiceDraft) -> Result<Invoice, InvoiceError> {
    let checked = InvoiceValidator::validate_edit(draft)?;

    let mut invoice = self
      .invoice_repo
      .find_by_id(id)
      .await?
      .ok_or(InvoiceError::NotFound(id))?;

    if invoice.is_canceled() {
      return Err(InvoiceError::CannotEditCanceled(id));
    }

    self.verify_parties(&checked).await?;

    invoice.apply_edit(checked).map_err(|e| match e {
      InvoiceEntityError::NotEditable => InvoiceError::CannotEditCanceled(id),
      InvoiceEntityError::AlreadyCanceled => InvoiceError::AlreadyCanceled(id),
      InvoiceEntityError::AmountOutOfRange => InvoiceError::Internal(e.to_string()),
    })?;

    let invoice = self.invoice_repo.update(&invoice).await?;
    tracing::info!("Invoice {} updated", id);
    Ok(invoice)
  }

  /// Stornó. A second attempt always fails with `AlreadyCanceled`.
  pub async fn cancel(&self, id: i64) -> Result<(), InvoiceError> {
    let mut invoice = self
      .invoice_repo
      .find_by_id(id)
      .await?
      .ok_or(InvoiceError::NotFound(id))?;

    invoice
      .cancel()
      .map_err(|_| InvoiceError::AlreadyCanceled(id))?;

    // Conditional write; a concurrent stornó that got there first leaves no row to update
    if !self.invoice_repo.mark_canceled(id).await? {
      return Err(InvoiceError::AlreadyCanceled(id));
    }

    tracing::info!("Invoice {} canceled", id);
    Ok(())
  }

  pub async fn get(&self, id: i64) -> Result<InvoiceWithParties, InvoiceError> {
    self
      .invoice_repo
      .find_with_parties(id)
      .await?
      .ok_or(InvoiceError::NotFound(id))
  }

  pub async fn list(&self) -> Result<Vec<InvoiceWithParties>, InvoiceError> {
    self.invoice_repo.find_all_with_parties().await
  }

  async fn verify_parties(&self, checked: &CheckedInvoice) -> Result<(), InvoiceError> {
    for (role, client_id) in [
      (PartyRole::Issuer, checked.issuer_id),
      (PartyRole::Customer, checked.client_id),
    ] {
      let exists = self.clients.exists(client_id).await.map_err(client_failure)?;
      if !exists {
        return Err(InvoiceError::UnknownParty { role, client_id });
      }
    }
    Ok(())
  }
}

fn client_failure(error: ClientError) -> InvoiceError {
  match error {
    ClientError::Database(e) => InvoiceError::Database(e),
    other => InvoiceError::Internal(other.to_string()),
  }
}
