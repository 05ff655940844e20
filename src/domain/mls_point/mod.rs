pub mod entity;
pub mod errors;
pub mod query;
pub mod raw_row;
pub mod repository;
pub mod schema;
