//! View-controller services
//!
//! Each service owns an [`crate::api::ApiClient`] clone, fetches what its
//! view needs, runs the shared calculations, and hands back a render-ready
//! view struct. Mutating services return the server echo; previews are never
//! treated as persisted state.

mod adjustment;
mod batch_ledger;
mod damage;
mod history;
mod receiving;
mod stats;

pub use adjustment::AdjustmentService;
pub use batch_ledger::{ItemLedgerView, LedgerService};
pub use damage::{export_csv, DamageReportView, DamageService};
pub use history::{HistoryService, ItemHistoryView};
pub use receiving::{
    BatchIntakeForm, BatchReceiveForm, BatchReceivePlan, ReceiveForm, ReceivePlan,
    ReceivingService,
};
pub use stats::{CategoryStats, DepartmentStatsView, StatsService};
