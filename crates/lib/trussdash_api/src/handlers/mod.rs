//! Request handlers.

pub mod catalog;
pub mod dashboards;
pub mod geometry;
pub mod health;
pub mod production;
pub mod vendor;
pub mod widgets;
