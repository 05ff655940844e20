pub mod mls_loader;
pub mod pool;
