pub mod factory;
pub mod persistence;
