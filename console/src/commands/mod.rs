//! Command implementations: fetch, compute, print

pub mod adjust;
pub mod batches;
pub mod damage;
pub mod history;
pub mod items;
pub mod receive;
pub mod stats;
