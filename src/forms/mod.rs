pub mod category;
pub mod customer;
pub mod product;
