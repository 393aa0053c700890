pub mod base;
pub mod schemas;
pub mod sqlite;
