//! `LedgerBuddy` - A chat bot that keeps a shared income/expense ledger per chat
//!
//! Members of a chat record income (`/receita`) and expenses (`/despesa`) and ask for the
//! chat's totals and balance (`/resumo`). Every chat has its own independent ledger,
//! persisted in `SQLite`.

#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// `missing_docs` stays a warning: `poise::command` expands to undocumented items.
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::enum_glob_use,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
// Every public fn returns the crate `Result`; documenting each error path adds nothing.
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]

/// Discord bot interface - commands, framework setup, and bot context
pub mod bot;
/// Configuration management for database and bot settings
pub mod config;
/// Core business logic - framework-agnostic ledger store and command processing
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
