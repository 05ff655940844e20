pub mod health;
pub mod mls_points;
pub mod reports;
pub mod user;
