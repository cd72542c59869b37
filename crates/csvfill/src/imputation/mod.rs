//! Ragged-row imputation.

mod engine;
mod instruction;

pub use engine::{ImputationEngine, ImputationSummary};
pub use instruction::{Instruction, Operation};
