//! # Token Testing Framework
//!
//! A reusable harness for property-based testing of the governed token
//! contract: environment setup, time control, and a high-level wrapper over
//! the generated client so proptest cases stay readable.
//!
//! ```text
//! test/framework/
//! ├── mod.rs          — TestEnv, TokenHarness
//! └── generators.rs   — proptest value strategies
//! ```

extern crate std;

pub mod generators;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as AssetClient, StellarAssetClient},
    Address, Env, String,
};
use token::{TokenContract, TokenContractClient};

/// Initial supply minted to the owner in every harness instance.  Large
/// enough that generated burn amounts never exhaust it.
pub const HARNESS_SUPPLY: i128 = 1_000_000_000_000_000;

// ── Core test environment ─────────────────────────────────────────────────────

/// Wraps the Soroban `Env` with all auth mocked and simple time control.
pub struct TestEnv {
    pub env: Env,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        Self { env }
    }

    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }

    /// Advance the ledger timestamp by `delta` seconds.
    pub fn advance_time(&self, delta: u64) {
        let current = self.env.ledger().timestamp();
        self.env
            .ledger()
            .set_timestamp(current.saturating_add(delta));
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

// ── Token harness ─────────────────────────────────────────────────────────────

/// A deployed, initialised token with its owner and native asset.
pub struct TokenHarness<'a> {
    pub env: &'a Env,
    pub client: TokenContractClient<'a>,
    pub contract_id: Address,
    pub owner: Address,
    pub native: Address,
}

impl<'a> TokenHarness<'a> {
    pub fn new(test_env: &'a TestEnv) -> Self {
        let env = &test_env.env;
        let native_sac = env.register_stellar_asset_contract_v2(Address::generate(env));
        let contract_id = env.register(TokenContract, ());
        let client = TokenContractClient::new(env, &contract_id);

        let owner = Address::generate(env);
        client.initialize(
            &owner,
            &native_sac.address(),
            &String::from_str(env, "Cindral"),
            &String::from_str(env, "CNDR"),
            &7u32,
            &HARNESS_SUPPLY,
            &owner,
        );

        Self {
            env,
            client,
            contract_id,
            owner,
            native: native_sac.address(),
        }
    }

    /// Move `amount` from the owner into contract custody for burn staging.
    pub fn fund_custody(&self, amount: i128) {
        self.client.transfer(&self.owner, &self.contract_id, &amount);
    }

    pub fn total_supply(&self) -> i128 {
        self.client.total_supply()
    }

    pub fn owner_balance(&self) -> i128 {
        self.client.balance(&self.owner)
    }

    pub fn custody_balance(&self) -> i128 {
        self.client.balance(&self.contract_id)
    }

    /// Mint `amount` of the native asset to the contract address.
    pub fn fund_native(&self, amount: i128) {
        StellarAssetClient::new(self.env, &self.native).mint(&self.contract_id, &amount);
    }

    pub fn native_balance(&self, id: &Address) -> i128 {
        AssetClient::new(self.env, &self.native).balance(id)
    }
}
