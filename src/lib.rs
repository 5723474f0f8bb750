//! `InventoryBuddy` - A terminal inventory manager
//!
//! This crate provides an in-memory product catalog with stock tracking, sales and
//! stock valuation, driven from a numbered terminal menu.

#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::match_same_arms,
    clippy::wildcard_imports,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
)]

/// Terminal shell - menu loop, prompts and rendering
pub mod cli;
/// Configuration loading from config.toml and the environment
pub mod config;
/// Core business logic - catalog, products and sales, free of I/O
pub mod core;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
