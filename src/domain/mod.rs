pub mod mls_point;
