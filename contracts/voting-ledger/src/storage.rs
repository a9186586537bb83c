use soroban_sdk::{Address, Env};

use shared::constants::{LEDGER_TTL_EXTEND, LEDGER_TTL_THRESHOLD};
use shared::LedgerError;

use crate::types::{DataKey, Topic};

// ── Instance ─────────────────────────────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_TTL_THRESHOLD, LEDGER_TTL_EXTEND);
}

pub fn set_fee_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FeeToken, token);
}

pub fn get_fee_token(env: &Env) -> Result<Address, LedgerError> {
    env.storage()
        .instance()
        .get(&DataKey::FeeToken)
        .ok_or(LedgerError::NotInitialized)
}

pub fn get_topic_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TopicCount)
        .unwrap_or(0)
}

pub fn set_topic_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::TopicCount, &count);
}

pub fn get_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance)
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Balance, &amount);
}

// ── Topics ───────────────────────────────────────────────────────────────────

pub fn get_topic(env: &Env, id: u64) -> Result<Topic, LedgerError> {
    env.storage()
        .persistent()
        .get(&DataKey::Topic(id))
        .ok_or(LedgerError::NotFound)
}

pub fn set_topic(env: &Env, topic: &Topic) {
    let key = DataKey::Topic(topic.id);
    env.storage().persistent().set(&key, topic);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_TTL_THRESHOLD, LEDGER_TTL_EXTEND);
}

// ── Vote Flags ───────────────────────────────────────────────────────────────

pub fn has_voted(env: &Env, topic_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::Voted(topic_id, voter.clone()))
        .unwrap_or(false)
}

/// Flags are only ever set, never cleared.
pub fn set_voted(env: &Env, topic_id: u64, voter: &Address) {
    let key = DataKey::Voted(topic_id, voter.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_TTL_THRESHOLD, LEDGER_TTL_EXTEND);
}
