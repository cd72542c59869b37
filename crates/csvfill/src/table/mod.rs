//! In-memory table model and aggregates over it.

mod aggregate;
mod data;

pub use aggregate::Reduction;
pub use data::Table;
