//! Domain models mirrored from the inventory backend
//!
//! All entities are created and mutated server-side. The client holds
//! transient copies fetched per view and discards them afterwards.

mod batch;
mod damage;
mod item;
mod reference;
mod transaction;

pub use batch::Batch;
pub use damage::DamageReport;
pub use item::{InventoryItem, StockLevel};
pub use reference::{Category, Supplier};
pub use transaction::{HistoryEntry, HistoryRow};
