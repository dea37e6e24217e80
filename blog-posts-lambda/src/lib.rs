pub mod handler;
pub mod runtime;
pub mod store;
