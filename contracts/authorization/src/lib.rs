//! Authorization Module for the Voting Ledger
//!
//! The ledger has a single privileged identity, the owner. It is recorded once
//! at initialization and never changes; the only privileged operation is the
//! fee withdrawal.
//!
//! Authentication is delegated to the host (`Address::require_auth`); this
//! module only performs the owner comparison.

#![no_std]

use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for role assignments
#[contracttype]
#[derive(Clone)]
pub enum RoleKey {
    /// Contract-level owner address
    Owner,
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    Unauthorized,
    OwnerNotSet,
    OwnerAlreadySet,
}

/// Record the owner (call once during contract initialization)
pub fn initialize_owner(env: &Env, owner: &Address) -> Result<(), AuthError> {
    if has_owner(env) {
        return Err(AuthError::OwnerAlreadySet);
    }
    env.storage().instance().set(&RoleKey::Owner, owner);
    Ok(())
}

/// Get the owner address
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RoleKey::Owner)
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&RoleKey::Owner)
}

/// Compare `caller` with the recorded owner without asking for a signature
pub fn check_owner(env: &Env, caller: &Address) -> Result<Address, AuthError> {
    let owner = get_owner(env).ok_or(AuthError::OwnerNotSet)?;
    if owner != *caller {
        return Err(AuthError::Unauthorized);
    }
    Ok(owner)
}

/// Require that `caller` signed the invocation and is the owner
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, AuthError> {
    caller.require_auth();
    check_owner(env, caller)
}
