pub mod delete_client;
pub mod list_clients;
pub mod register_client;

pub use delete_client::{DeleteClientCommand, DeleteClientUseCase};
pub use list_clients::{ClientDto, ListClientsResponse, ListClientsUseCase};
pub use register_client::{RegisterClientCommand, RegisterClientResponse, RegisterClientUseCase};
