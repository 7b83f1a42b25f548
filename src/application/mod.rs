//! Application layer
//!
//! Use cases that turn caller commands into calls on the domain services
//! and shape the results for the adapters.

pub mod client;
pub mod invoice;
