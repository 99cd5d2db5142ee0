//! Assembled-product inventory: serial range engine, catalog configuration,
//! inventory models and the assemble session that owns a batch being edited.

pub mod model;
pub mod service;
pub mod sn;

pub use service::{AssembleSession, BatchSummary};
