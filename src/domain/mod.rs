pub mod client;
pub mod invoice;
