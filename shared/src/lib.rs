//! Shared domain types and calculations for the Stockdesk warehouse console
//!
//! Everything in this crate is pure: no I/O, no clocks, no network. The
//! console crate feeds it data fetched from the inventory backend and renders
//! whatever comes back.

pub mod currency;
pub mod damage;
pub mod history;
pub mod ledger;
pub mod models;
pub mod valuation;
pub mod validation;

pub use models::*;
