//! Domain entities handled by the boletas search layer.

pub mod criteria;
pub mod reference;
pub mod ticket;
pub mod types;
