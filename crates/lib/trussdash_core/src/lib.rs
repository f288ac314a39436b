//! # trussdash_core
//!
//! Core domain logic for Trussdash: the OpenAPI endpoint catalog, dashboard
//! and widget state, truss geometry, and the vendor API client.

pub mod catalog;
pub mod dashboard;
pub mod geometry;
pub mod models;
pub mod production;
pub mod vendor;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
