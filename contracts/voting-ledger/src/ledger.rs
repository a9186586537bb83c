use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use authorization::AuthError;
use ledger_invariants::{InvariantError, LedgerInvariants};
use shared::constants::{MAX_PAGE_SIZE, VOTE_FEE};
use shared::{
    safe_add, safe_increment, share_bps, validate_option_index, validate_options,
    validate_title, validate_vote_fee, LedgerError,
};

use crate::types::{LedgerConfig, OptionResult, Topic};
use crate::{events, payment, storage};

fn auth_error(err: AuthError) -> LedgerError {
    match err {
        AuthError::Unauthorized => LedgerError::Unauthorized,
        AuthError::OwnerNotSet => LedgerError::NotInitialized,
        AuthError::OwnerAlreadySet => LedgerError::AlreadyInitialized,
    }
}

fn invariant_error(err: InvariantError) -> LedgerError {
    match err {
        InvariantError::Overflow => LedgerError::Overflow,
        _ => LedgerError::InvariantViolation,
    }
}

#[contract]
pub struct VotingLedger;

#[contractimpl]
impl VotingLedger {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Fix the owner and the token votes are paid in. Can only be called once.
    pub fn initialize(env: Env, owner: Address, fee_token: Address) -> Result<(), LedgerError> {
        if authorization::has_owner(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }
        owner.require_auth();

        authorization::initialize_owner(&env, &owner).map_err(auth_error)?;
        storage::set_fee_token(&env, &fee_token);
        storage::set_topic_count(&env, 0);
        storage::set_balance(&env, 0);
        storage::bump_instance(&env);

        events::initialized(&env, &owner, &fee_token);
        log!(&env, "ledger initialized", owner, fee_token);

        Ok(())
    }

    // ── Mutations ────────────────────────────────────────────────────────────

    /// Append a new topic and return its id (the number of topics that
    /// existed before the call).
    ///
    /// # Arguments
    /// * `caller`  – Creator of the topic, must authorize the call
    /// * `title`   – Non-blank title
    /// * `options` – Between 2 and 10 labels, stored as given
    pub fn create_topic(
        env: Env,
        caller: Address,
        title: String,
        options: Vec<String>,
    ) -> Result<u64, LedgerError> {
        caller.require_auth();
        storage::get_fee_token(&env)?;

        if let Err(err) = validate_title(&title) {
            log!(&env, "create_topic rejected: bad title", caller);
            return Err(err);
        }
        if let Err(err) = validate_options(&options) {
            log!(&env, "create_topic rejected: bad options", caller, options.len());
            return Err(err);
        }

        let id = storage::get_topic_count(&env);
        let next_id = safe_increment(id)?;

        let mut vote_counts = Vec::new(&env);
        for _ in 0..options.len() {
            vote_counts.push_back(0u64);
        }

        let topic = Topic {
            id,
            title: title.clone(),
            options,
            vote_counts,
            creator: caller.clone(),
            total_votes: 0,
            created_at: env.ledger().timestamp(),
        };
        LedgerInvariants::check_tally(&topic.vote_counts, topic.options.len(), topic.total_votes)
            .map_err(invariant_error)?;

        storage::set_topic(&env, &topic);
        storage::set_topic_count(&env, next_id);
        storage::bump_instance(&env);

        events::topic_created(&env, id, &title, &caller);

        Ok(id)
    }

    /// Cast one paid vote.
    ///
    /// Checks run in a fixed order (topic exists, not yet voted, exact fee,
    /// option in range) and all of them before the first write. The fee is
    /// pulled from `voter` in the same invocation as the tally update.
    pub fn vote(
        env: Env,
        voter: Address,
        topic_id: u64,
        option_index: u32,
        amount: i128,
    ) -> Result<(), LedgerError> {
        voter.require_auth();
        let fee_token = storage::get_fee_token(&env)?;

        let mut topic = storage::get_topic(&env, topic_id)?;

        if storage::has_voted(&env, topic_id, &voter) {
            log!(&env, "vote rejected: already voted", topic_id, voter);
            return Err(LedgerError::AlreadyVoted);
        }
        if let Err(err) = validate_vote_fee(amount) {
            log!(&env, "vote rejected: wrong fee", topic_id, amount);
            return Err(err);
        }
        validate_option_index(option_index, topic.options.len())?;

        let count = topic
            .vote_counts
            .get(option_index)
            .ok_or(LedgerError::InvalidArgument)?;
        topic.vote_counts.set(option_index, safe_increment(count)?);
        topic.total_votes = safe_increment(topic.total_votes)?;
        LedgerInvariants::check_tally(&topic.vote_counts, topic.options.len(), topic.total_votes)
            .map_err(invariant_error)?;

        let balance = safe_add(storage::get_balance(&env), amount)?;

        payment::receive(&env, &fee_token, &voter, amount);

        storage::set_topic(&env, &topic);
        storage::set_voted(&env, topic_id, &voter);
        storage::set_balance(&env, balance);
        storage::bump_instance(&env);

        events::vote_cast(&env, topic_id, option_index, &voter, amount);

        Ok(())
    }

    /// Send the whole accumulated fee balance to the owner and return the
    /// amount sent. An empty balance is not an error: nothing is transferred
    /// and 0 is returned.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, LedgerError> {
        let fee_token = storage::get_fee_token(&env)?;
        let owner = match authorization::require_owner(&env, &caller) {
            Ok(owner) => owner,
            Err(err) => {
                log!(&env, "withdraw rejected", caller);
                return Err(auth_error(err));
            }
        };

        let amount = storage::get_balance(&env);
        LedgerInvariants::check_balance(amount).map_err(invariant_error)?;

        storage::set_balance(&env, 0);
        if amount > 0 {
            payment::send(&env, &fee_token, &owner, amount);
        }
        storage::bump_instance(&env);

        events::withdrawn(&env, &owner, amount);
        log!(&env, "fees withdrawn", owner, amount);

        Ok(amount)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn get_topic_count(env: Env) -> u64 {
        storage::get_topic_count(&env)
    }

    pub fn get_topic(env: Env, topic_id: u64) -> Result<Topic, LedgerError> {
        storage::get_topic(&env, topic_id)
    }

    /// `false` for any pair never recorded, unknown topics included.
    pub fn check_has_voted(env: Env, topic_id: u64, voter: Address) -> bool {
        storage::has_voted(&env, topic_id, &voter)
    }

    /// Topics with ids in `[start, start + limit)`, `limit` capped at
    /// `MAX_PAGE_SIZE`.
    pub fn get_topics(env: Env, start: u64, limit: u32) -> Vec<Topic> {
        let count = storage::get_topic_count(&env);
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE) as u64)
            .min(count);

        let mut page = Vec::new(&env);
        let mut id = start;
        while id < end {
            if let Ok(topic) = storage::get_topic(&env, id) {
                page.push_back(topic);
            }
            id += 1;
        }
        page
    }

    /// Per-option tallies with their share of the topic's votes.
    pub fn get_results(env: Env, topic_id: u64) -> Result<Vec<OptionResult>, LedgerError> {
        let topic = storage::get_topic(&env, topic_id)?;

        let mut results = Vec::new(&env);
        for (index, label) in topic.options.iter().enumerate() {
            let index = index as u32;
            let votes = topic.vote_counts.get(index).unwrap_or(0);
            results.push_back(OptionResult {
                index,
                label,
                votes,
                share_bps: share_bps(votes, topic.total_votes),
            });
        }
        Ok(results)
    }

    pub fn owner(env: Env) -> Result<Address, LedgerError> {
        authorization::get_owner(&env).ok_or(LedgerError::NotInitialized)
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        let owner = authorization::get_owner(&env).ok_or(LedgerError::NotInitialized)?;
        Ok(LedgerConfig {
            owner,
            fee_token: storage::get_fee_token(&env)?,
            vote_fee: VOTE_FEE,
        })
    }

    pub fn vote_fee() -> i128 {
        VOTE_FEE
    }

    /// Fees collected and not yet withdrawn.
    pub fn get_balance(env: Env) -> i128 {
        storage::get_balance(&env)
    }
}
