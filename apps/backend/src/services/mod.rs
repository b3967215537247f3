//! Backend services.

pub mod rounds;
pub mod store;
