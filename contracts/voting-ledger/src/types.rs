use soroban_sdk::{contracttype, Address, String, Vec};

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance
    FeeToken,
    TopicCount,
    Balance,
    // Persistent
    Topic(u64),
    Voted(u64, Address), // (topic_id, voter)
}

/// Deployment configuration as reported by `get_config`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub owner: Address,
    /// Token the vote fee is paid in
    pub fee_token: Address,
    /// Exact amount one vote costs, in the token's smallest unit
    pub vote_fee: i128,
}

/// A voting subject. Only `vote_counts` and `total_votes` change after creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Topic {
    /// Creation index, starting at 0
    pub id: u64,
    pub title: String,
    pub options: Vec<String>,
    /// Index-aligned with `options`
    pub vote_counts: Vec<u64>,
    pub creator: Address,
    /// Always the sum of `vote_counts`
    pub total_votes: u64,
    /// Ledger timestamp (seconds)
    pub created_at: u64,
}

/// One row of a topic's results
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionResult {
    pub index: u32,
    pub label: String,
    pub votes: u64,
    /// Share of the topic's votes in basis points (10_000 = 100%)
    pub share_bps: u32,
}
