//! Error codes for the voting ledger
//!
//! Codes are part of the contract interface: clients match on them to render
//! a precise message, so existing values must never be renumbered.

use soroban_sdk::contracterror;

/// Every rejected precondition maps to exactly one variant.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Ledger used before `initialize`
    NotInitialized = 1,

    /// `initialize` called on a ledger that already has an owner
    AlreadyInitialized = 2,

    /// Bad title, option list or option index
    InvalidArgument = 3,

    /// Unknown topic id
    NotFound = 4,

    /// Attached amount differs from the fixed vote fee
    InvalidPayment = 5,

    /// Voter already has a vote recorded on this topic
    AlreadyVoted = 6,

    /// Caller lacks the privilege required (withdraw is owner-only)
    Unauthorized = 7,

    /// Checked arithmetic overflowed
    Overflow = 8,

    /// Post-mutation tally or balance check failed
    InvariantViolation = 9,
}

impl LedgerError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &'static str {
        match self {
            LedgerError::NotInitialized => "Ledger not initialized",
            LedgerError::AlreadyInitialized => "Ledger already initialized",
            LedgerError::InvalidArgument => "Invalid argument",
            LedgerError::NotFound => "Topic not found",
            LedgerError::InvalidPayment => "Must send exactly the vote fee to vote",
            LedgerError::AlreadyVoted => "Already voted on this topic",
            LedgerError::Unauthorized => "Not the owner",
            LedgerError::Overflow => "Arithmetic overflow",
            LedgerError::InvariantViolation => "Ledger invariant violated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(LedgerError::NotInitialized as u32, 1);
        assert_eq!(LedgerError::InvalidArgument as u32, 3);
        assert_eq!(LedgerError::NotFound as u32, 4);
        assert_eq!(LedgerError::InvalidPayment as u32, 5);
        assert_eq!(LedgerError::AlreadyVoted as u32, 6);
        assert_eq!(LedgerError::Unauthorized as u32, 7);
    }

    #[test]
    fn test_messages() {
        assert_eq!(LedgerError::AlreadyVoted.message(), "Already voted on this topic");
        assert_eq!(LedgerError::Unauthorized.message(), "Not the owner");
    }
}
