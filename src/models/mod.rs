//! Wire representations exchanged with the remote boletas service.

pub mod config;
pub mod reference;
pub mod ticket;
