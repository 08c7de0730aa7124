pub mod cart;
pub mod catalog;
pub mod errors;
pub mod money;
pub mod session;
