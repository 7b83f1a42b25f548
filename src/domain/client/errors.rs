use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientRejection {
  #[error("Hiányzó mező!")]
  MissingField,

  #[error("A név csak betűket, szóközt, pontot és kötőjelet tartalmazhat!")]
  InvalidName,

  #[error("Az adószám csak számjegyeket tartalmazhat!")]
  InvalidTaxNumber,

  #[error("A cím nem tartalmazhat negatív számot!")]
  InvalidAddress,
}

#[derive(Debug, Error)]
pub enum ClientError {
  #[error(transparent)]
  Validation(#[from] ClientRejection),

  /// Name or tax number already registered; storage does not tell which
  #[error("Név vagy adószám már létezik!")]
  DuplicateIdentity,

  #[error("Ügyfél nem található.")]
  NotFound(i64),

  #[error("Nem törölhető, mert van hozzárendelt számla.")]
  HasDependentInvoices { client_id: i64, invoice_count: i64 },

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
