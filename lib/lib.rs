pub mod proxy;
pub mod repo;
pub mod result;
pub mod sources;
