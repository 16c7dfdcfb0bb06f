pub mod category;
pub mod config;
pub mod customer;
pub mod product;
