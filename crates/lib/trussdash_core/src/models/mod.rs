//! Domain models shared by the core services and the API layer.

pub mod dashboard;
pub mod production;
pub mod vendor;
