pub mod client;
pub mod query;
pub mod variant;

mod record;
