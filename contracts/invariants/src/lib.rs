//! Post-mutation checks for the voting ledger.
//!
//! These never fire in a correct build; a failure aborts the invocation so a
//! broken tally is never committed.

#![no_std]

use soroban_sdk::Vec;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvariantError {
    /// `vote_counts` is not index-aligned with `options`
    CountLengthMismatch,
    /// `total_votes` differs from the sum of `vote_counts`
    TallyMismatch,
    /// Accumulated fee balance went negative
    NegativeBalance,
    Overflow,
}

pub struct LedgerInvariants;

impl LedgerInvariants {
    /// `vote_counts.len() == option_count` and `sum(vote_counts) == total_votes`
    pub fn check_tally(
        vote_counts: &Vec<u64>,
        option_count: u32,
        total_votes: u64,
    ) -> Result<(), InvariantError> {
        if vote_counts.len() != option_count {
            return Err(InvariantError::CountLengthMismatch);
        }

        let mut sum: u64 = 0;
        for count in vote_counts.iter() {
            sum = sum.checked_add(count).ok_or(InvariantError::Overflow)?;
        }
        if sum != total_votes {
            return Err(InvariantError::TallyMismatch);
        }
        Ok(())
    }

    pub fn check_balance(balance: i128) -> Result<(), InvariantError> {
        if balance < 0 {
            return Err(InvariantError::NegativeBalance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{vec, Env};

    #[test]
    fn test_tally_consistent() {
        let env = Env::default();
        let counts = vec![&env, 2u64, 0, 5];
        assert_eq!(LedgerInvariants::check_tally(&counts, 3, 7), Ok(()));
    }

    #[test]
    fn test_tally_mismatch() {
        let env = Env::default();
        let counts = vec![&env, 1u64, 1];
        assert_eq!(
            LedgerInvariants::check_tally(&counts, 2, 3),
            Err(InvariantError::TallyMismatch)
        );
        assert_eq!(
            LedgerInvariants::check_tally(&counts, 3, 2),
            Err(InvariantError::CountLengthMismatch)
        );
    }

    #[test]
    fn test_balance() {
        assert_eq!(LedgerInvariants::check_balance(0), Ok(()));
        assert_eq!(LedgerInvariants::check_balance(10_000), Ok(()));
        assert_eq!(
            LedgerInvariants::check_balance(-1),
            Err(InvariantError::NegativeBalance)
        );
    }
}
