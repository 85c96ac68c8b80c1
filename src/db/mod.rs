pub mod catalog_repo;
pub mod company_repo;
pub mod customer_repo;
pub mod entities;
pub mod item_repo;
pub mod order_repo;
