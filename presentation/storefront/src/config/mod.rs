pub mod app_config;
pub mod catalog_config;
pub mod store_config;
