//! Serializable records shared between the server and its clients.

pub mod api;
pub mod loan;
