//! Contract events consumed by indexers and the frontend's live view.

use soroban_sdk::{symbol_short, Address, Env, String};

/// `("init",)` → `(owner, fee_token)`
pub fn initialized(env: &Env, owner: &Address, fee_token: &Address) {
    env.events().publish(
        (symbol_short!("init"),),
        (owner.clone(), fee_token.clone()),
    );
}

/// TopicCreated: `("topic", topic_id)` → `(title, creator)`
pub fn topic_created(env: &Env, topic_id: u64, title: &String, creator: &Address) {
    env.events().publish(
        (symbol_short!("topic"), topic_id),
        (title.clone(), creator.clone()),
    );
}

/// VoteCast: `("vote", topic_id)` → `(option_index, voter, amount)`
pub fn vote_cast(env: &Env, topic_id: u64, option_index: u32, voter: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("vote"), topic_id),
        (option_index, voter.clone(), amount),
    );
}

/// `("withdraw",)` → `(owner, amount)`
pub fn withdrawn(env: &Env, owner: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdraw"),), (owner.clone(), amount));
}
