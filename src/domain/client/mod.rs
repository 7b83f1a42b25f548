pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Client, NewClient};
pub use errors::{ClientError, ClientRejection};
pub use ports::ClientRepository;
pub use services::ClientRegistry;
pub use value_objects::{ClientAddress, ClientName, TaxNumber};
