#![no_std]
//! # Shared Voting Ledger Library
//!
//! Reusable errors, constants and validation helpers for the voting ledger
//! workspace.
//!
//! ## Modules
//!
//! - `errors` - The `LedgerError` enum returned by every contract entry point
//! - `constants` - Vote fee, option bounds, text limits and storage TTLs
//! - `validation` - Input validation and checked arithmetic helpers
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! shared = { path = "../shared" }
//! ```
//!
//! ```rust,ignore
//! use shared::errors::LedgerError;
//! use shared::constants::VOTE_FEE;
//! use shared::validation::validate_vote_fee;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

pub use errors::LedgerError;
pub use validation::{
    safe_add, safe_increment, share_bps, validate_option_index, validate_options,
    validate_title, validate_vote_fee,
};
