pub mod auth;
pub mod category;
pub mod customer;
pub mod product;
pub mod types;
