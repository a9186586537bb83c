#![no_std]

mod events;
mod ledger;
mod payment;
mod storage;
mod types;

pub use ledger::{VotingLedger, VotingLedgerClient};
pub use shared::LedgerError;
pub use types::{LedgerConfig, OptionResult, Topic};

#[cfg(test)]
mod testutils;
