pub mod client;
pub mod queries;
