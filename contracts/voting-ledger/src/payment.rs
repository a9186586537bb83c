//! Value transfer through the fee token configured at initialization.
//!
//! A failed transfer traps the whole invocation, so callers may write state
//! in the same call without an explicit rollback path.

use soroban_sdk::{token, Address, Env};

/// Pull `amount` from `from` into the ledger's own account
pub fn receive(env: &Env, fee_token: &Address, from: &Address, amount: i128) {
    let client = token::Client::new(env, fee_token);
    client.transfer(from, &env.current_contract_address(), &amount);
}

/// Pay `amount` out of the ledger's account to `to`
pub fn send(env: &Env, fee_token: &Address, to: &Address, amount: i128) {
    let client = token::Client::new(env, fee_token);
    client.transfer(&env.current_contract_address(), to, &amount);
}
