//! Validation helper utilities for the voting ledger
//!
//! All checks are pure: they read their arguments and return a `LedgerError`
//! without touching storage, so entry points can run every check before the
//! first write.

use crate::constants::{MAX_BASIS_POINTS, MAX_OPTIONS, MAX_TITLE_LEN, MIN_OPTIONS, VOTE_FEE};
use crate::errors::LedgerError;
use soroban_sdk::{String, Vec};

// ===== Text Validation =====

/// Whether `bytes` holds nothing but whitespace. Whitespace is the Unicode
/// `White_Space` set, so an ideographic space (U+3000) counts as blank.
/// Bytes that are not valid UTF-8 are never blank.
pub fn is_blank(bytes: &[u8]) -> bool {
    match core::str::from_utf8(bytes) {
        Ok(text) => text.trim().is_empty(),
        Err(_) => false,
    }
}

/// Validate a topic title: non-blank after trimming whitespace.
///
/// Titles longer than `MAX_TITLE_LEN` bytes are rejected as well. The bound
/// only caps the scratch buffer the blank check copies into.
pub fn validate_title(title: &String) -> Result<(), LedgerError> {
    let len = title.len();
    if len == 0 || len > MAX_TITLE_LEN {
        return Err(LedgerError::InvalidArgument);
    }

    let mut buf = [0u8; MAX_TITLE_LEN as usize];
    let bytes = &mut buf[..len as usize];
    title.copy_into_slice(bytes);

    if is_blank(bytes) {
        return Err(LedgerError::InvalidArgument);
    }
    Ok(())
}

/// Validate a topic's option list. Only the count is checked; labels are
/// stored as given, blank ones included.
///
/// # Returns
/// `Err(LedgerError::InvalidArgument)` when the count is outside
/// `[MIN_OPTIONS, MAX_OPTIONS]`
pub fn validate_options(options: &Vec<String>) -> Result<(), LedgerError> {
    let count = options.len();
    if count < MIN_OPTIONS || count > MAX_OPTIONS {
        return Err(LedgerError::InvalidArgument);
    }
    Ok(())
}

/// Validate an option index against a topic's option count
pub fn validate_option_index(index: u32, option_count: u32) -> Result<(), LedgerError> {
    if index >= option_count {
        return Err(LedgerError::InvalidArgument);
    }
    Ok(())
}

// ===== Payment Validation =====

/// The attached amount must equal `VOTE_FEE` exactly, no more and no less
pub fn validate_vote_fee(amount: i128) -> Result<(), LedgerError> {
    if amount != VOTE_FEE {
        return Err(LedgerError::InvalidPayment);
    }
    Ok(())
}

// ===== Arithmetic =====

/// Safely add two amounts, returning error on overflow
pub fn safe_add(a: i128, b: i128) -> Result<i128, LedgerError> {
    a.checked_add(b).ok_or(LedgerError::Overflow)
}

/// Increment a counter, returning error on overflow
pub fn safe_increment(value: u64) -> Result<u64, LedgerError> {
    value.checked_add(1).ok_or(LedgerError::Overflow)
}

/// Share of `votes` in `total`, in basis points, rounded down. Zero when
/// nobody has voted yet.
pub fn share_bps(votes: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    let bps = (votes as u128) * (MAX_BASIS_POINTS as u128) / (total as u128);
    bps.min(MAX_BASIS_POINTS as u128) as u32
}
