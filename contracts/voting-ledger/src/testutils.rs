use soroban_sdk::{
    contract, contractimpl, symbol_short,
    testutils::{Address as _, Ledger},
    token, Address, Env, String, Symbol, Vec,
};

use crate::{VotingLedger, VotingLedgerClient};
use shared::constants::VOTE_FEE;

pub struct TestEnvironment {
    pub env: Env,
    pub owner: Address,
    pub ledger_id: Address,
    pub ledger: VotingLedgerClient<'static>,
    pub fee_token: token::Client<'static>,
    pub fee_token_admin: token::StellarAssetClient<'static>,
}

impl TestEnvironment {
    /// Deployed but not yet initialized ledger
    pub fn uninitialized() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(1_700_000_000);

        let owner = Address::generate(&env);
        let issuer = Address::generate(&env);
        let asset = env.register_stellar_asset_contract_v2(issuer);
        let fee_token = token::Client::new(&env, &asset.address());
        let fee_token_admin = token::StellarAssetClient::new(&env, &asset.address());

        let ledger_id = env.register(VotingLedger, ());
        let ledger = VotingLedgerClient::new(&env, &ledger_id);

        Self {
            env,
            owner,
            ledger_id,
            ledger,
            fee_token,
            fee_token_admin,
        }
    }

    pub fn new() -> Self {
        let t = Self::uninitialized();
        t.ledger.initialize(&t.owner, &t.fee_token.address);
        t
    }

    /// A fresh account holding `votes` vote fees
    pub fn funded_voter(&self, votes: i128) -> Address {
        let voter = Address::generate(&self.env);
        if votes > 0 {
            self.fee_token_admin.mint(&voter, &(VOTE_FEE * votes));
        }
        voter
    }

    pub fn create_user(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn text(&self, s: &str) -> String {
        String::from_str(&self.env, s)
    }

    pub fn options(&self, labels: &[&str]) -> Vec<String> {
        let mut options = Vec::new(&self.env);
        for label in labels {
            options.push_back(self.text(label));
        }
        options
    }

    /// Create a topic owned by `owner` and return its id
    pub fn create_topic(&self, title: &str, labels: &[&str]) -> u64 {
        self.ledger
            .create_topic(&self.owner, &self.text(title), &self.options(labels))
    }

    pub fn advance_time(&self, seconds: u64) {
        let current = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(current + seconds);
    }
}

const FROZEN: Symbol = symbol_short!("frozen");

/// Fee token stand-in: transfers succeed without moving anything until
/// `freeze` is called, after which every transfer traps.
#[contract]
pub struct FreezableToken;

#[contractimpl]
impl FreezableToken {
    pub fn freeze(env: Env) {
        env.storage().instance().set(&FROZEN, &true);
    }

    pub fn transfer(env: Env, _from: Address, _to: Address, _amount: i128) {
        let frozen: bool = env.storage().instance().get(&FROZEN).unwrap_or(false);
        if frozen {
            panic!("token frozen");
        }
    }
}
