pub mod in_memory_mls_repository;
