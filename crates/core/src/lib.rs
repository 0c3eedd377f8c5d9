//! Core ledger logic for Dompet.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The store is reached only through the [`ledger::LedgerStore`] trait.
//!
//! # Modules
//!
//! - `ledger` - Entries, validation, summaries and the ledger service
//! - `period` - Date parsing and calendar period resolution

pub mod ledger;
pub mod period;
