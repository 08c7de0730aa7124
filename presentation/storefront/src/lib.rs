//! Headless storefront: configuration, wiring and screen projections over the
//! cart and catalog core.

pub mod config;
pub mod setup;
pub mod view;
