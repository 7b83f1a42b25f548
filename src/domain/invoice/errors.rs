use thiserror::Error;

/// Reason a candidate invoice was rejected by the validator.
///
/// Only the first failing rule is reported, so each variant maps to exactly
/// one user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceRejection {
  #[error("A számla számát ki kell tölteni!")]
  MissingNumber,

  #[error("A számla száma nem lehet negatív!")]
  NegativeNumber,

  #[error("A számla kelte nem megfelelő formátumú (YYYY-MM-DD)!")]
  InvalidDate,

  #[error("A teljesítés dátuma nem megfelelő formátumú (YYYY-MM-DD)!")]
  InvalidFulfillmentDate,

  #[error("A fizetési határidő nem megfelelő formátumú (YYYY-MM-DD)!")]
  InvalidDueDate,

  #[error("Minden mezőt ki kell tölteni!")]
  MissingField,

  #[error("Érvénytelen ügyfél azonosító!")]
  InvalidClientReference,

  #[error("A végösszeg nem érvényes szám!")]
  InvalidTotal,

  #[error("A végösszegnek nagyobbnak kell lennie nullánál!")]
  TotalNotPositive,

  #[error("A végösszeg nem lehet negatív!")]
  NegativeTotal,

  #[error("Az ÁFA kulcs nem érvényes szám!")]
  InvalidVat,

  #[error("Az ÁFA kulcs nem lehet negatív!")]
  NegativeVat,

  #[error("Az ÁFA kulcs csak egész szám lehet!")]
  FractionalVat,

  #[error("A teljesítés dátuma nem lehet későbbi a számla kelténél!")]
  FulfillmentAfterIssue,

  #[error("A fizetési határidő a számla keltétől számítva 0 és 30 nap között lehet!")]
  DueDateOutOfRange,

  #[error("Érvénytelen fizetési mód!")]
  InvalidPaymentMethod,

  #[error("A számlaszám már létezik!")]
  NumberTaken,
}

/// Which side of an invoice a client reference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
  Issuer,
  Customer,
}

impl PartyRole {
  pub fn not_found_message(&self) -> &'static str {
    match self {
      PartyRole::Issuer => "A kiállító nem található.",
      PartyRole::Customer => "A vevő nem található.",
    }
  }
}

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error(transparent)]
  Validation(#[from] InvoiceRejection),

  #[error("A számlaszám már létezik!")]
  DuplicateNumber(String),

  #[error("Számla nem található.")]
  NotFound(i64),

  #[error("Számla már stornózva.")]
  AlreadyCanceled(i64),

  #[error("Stornózott számla nem szerkeszthető.")]
  CannotEditCanceled(i64),

  #[error("{}", .role.not_found_message())]
  UnknownParty { role: PartyRole, client_id: i64 },

  #[error("Internal error: {0}")]
  Internal(String),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}

/// Errors raised by the invoice entity itself (state machine guards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvoiceEntityError {
  #[error("invoice is already canceled")]
  AlreadyCanceled,

  #[error("canceled invoice cannot be edited")]
  NotEditable,

  #[error("invoice amount is out of range")]
  AmountOutOfRange,
}
