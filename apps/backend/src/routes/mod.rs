//! HTTP route handlers.

pub mod cards;
pub mod rounds;
pub mod sets;
