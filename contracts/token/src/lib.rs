#![no_std]
#![allow(clippy::too_many_arguments)]

//! # Cindral Governed Token
//!
//! A fungible token with delegated voting power and an owner/multisig-gated
//! administrative core:
//!
//! - **Admin set**: `{owner} ∪ {multisig}`; the multisig slot is owner-only
//!   mutable, and ownership itself moves through a two-step nominate/accept.
//! - **Emergency pause**: one flag, checked inside the transfer chokepoint,
//!   freezing every balance mutation — including the burn workflow's own.
//! - **Timelocked burn**: at most one pending burn; opened against the
//!   contract's own balance, finishable after [`burn::BURN_TIMELOCK`],
//!   cancellable at any time.
//! - **Vote tracking**: delegation with checkpointed historical power, kept
//!   consistent with balances on every mutation.
//! - **Rescue**: sweep foreign assets or native balance sent here by mistake;
//!   the governed token itself is never rescuable.

pub mod admin;
pub mod burn;
pub mod events;
pub mod ledger;
pub mod pause;
pub mod rescue;
pub mod votes;


use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
    Symbol,
};

// ── Storage keys ──────────────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const METADATA: Symbol = symbol_short!("META");

// ── Error codes ───────────────────────────────────────────────────────────────

/// Error codes, grouped by range: 1–9 lifecycle, 10–19 authorisation,
/// 30–39 validation, 40–49 contract state, 50–59 external calls.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is neither the owner nor the configured multisig.
    NotAdmin = 10,
    /// Owner-only operation invoked by someone else (the multisig included).
    NotOwner = 11,
    NotPendingOwner = 12,
    InvalidAmount = 30,
    InsufficientBalance = 31,
    InsufficientAllowance = 32,
    /// The governed token itself cannot be rescued.
    CannotRescueSelf = 33,
    /// Historical vote queries must target a strictly past timestamp.
    TimestampInFuture = 34,
    ContractPaused = 40,
    NotPaused = 41,
    AlreadyPaused = 42,
    BurnAlreadyActive = 43,
    BurnNotActive = 44,
    /// The pending burn's unlock time has not been reached; query
    /// `burn_info` for the unlock timestamp.
    TimelockNotExpired = 45,
    /// A cross-contract asset transfer was rejected by the target.
    TransferFailed = 50,
}

// ── Types ─────────────────────────────────────────────────────────────────────

/// Immutable token metadata fixed at initialisation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct TokenContract;

#[contractimpl]
impl TokenContract {
    // ── Initialisation ────────────────────────────────────────────────────────

    /// Bootstrap the token.
    ///
    /// * `owner`        — initial owner (sole admin until a multisig is set).
    /// * `native_token` — Stellar Asset Contract address of the native asset,
    ///                    used by `rescue_native`.
    /// * `initial_supply` is minted to `recipient` through the transfer
    ///   chokepoint; the pause flag is necessarily clear at this point.
    pub fn initialize(
        env: Env,
        owner: Address,
        native_token: Address,
        name: String,
        symbol: String,
        decimals: u32,
        initial_supply: i128,
        recipient: Address,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if initial_supply <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        admin::set_owner(&env, &owner);
        rescue::set_native_token(&env, &native_token);
        env.storage().instance().set(
            &METADATA,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        env.storage().instance().set(&INITIALIZED, &true);

        ledger::move_tokens(&env, None, Some(&recipient), initial_supply)?;

        events::publish_initialized(&env, &owner, initial_supply);
        Ok(())
    }

    // ── Ledger ────────────────────────────────────────────────────────────────

    /// Move `amount` from `from` to `to`.  Blocked while paused.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        ledger::move_tokens(&env, Some(&from), Some(&to), amount)?;
        events::publish_transfer(&env, &from, &to, amount);
        Ok(())
    }

    /// Grant `spender` an allowance of `amount` over `from`'s balance.
    /// `amount = 0` revokes.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        ledger::set_allowance(&env, &from, &spender, amount)?;
        events::publish_approval(&env, &from, &spender, amount);
        Ok(())
    }

    /// Spend `spender`'s allowance to move `amount` from `from` to `to`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        spender.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        ledger::spend_allowance(&env, &from, &spender, amount)?;
        ledger::move_tokens(&env, Some(&from), Some(&to), amount)?;
        events::publish_transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        ledger::balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        ledger::allowance(&env, &from, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        ledger::total_supply(&env)
    }

    pub fn name(env: Env) -> Result<String, ContractError> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        Ok(Self::metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, ContractError> {
        Ok(Self::metadata(&env)?.decimals)
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    /// Delegate `account`'s voting units to `delegatee`.  Until an account
    /// delegates, its balance carries no voting weight.
    pub fn delegate(env: Env, account: Address, delegatee: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        account.require_auth();

        let balance = ledger::balance(&env, &account);
        votes::set_delegate(&env, &account, &delegatee, balance);
        Ok(())
    }

    /// Current delegatee of `account`, if any.
    pub fn delegates(env: Env, account: Address) -> Option<Address> {
        votes::delegatee(&env, &account)
    }

    /// Current voting power of `account`.
    pub fn get_votes(env: Env, account: Address) -> i128 {
        votes::current_votes(&env, &account)
    }

    /// Voting power of `account` at a strictly past `timestamp`.
    pub fn get_past_votes(
        env: Env,
        account: Address,
        timestamp: u64,
    ) -> Result<i128, ContractError> {
        votes::past_votes(&env, &account, timestamp)
    }

    // ── Pause switch ──────────────────────────────────────────────────────────

    /// Engage the emergency stop.  Fails when already paused.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin::require_admin(&env, &caller)?;

        pause::pause(&env)?;
        events::publish_paused(&env, &caller);
        Ok(())
    }

    /// Release the emergency stop.  Fails when not paused.
    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin::require_admin(&env, &caller)?;

        pause::unpause(&env)?;
        events::publish_unpaused(&env, &caller);
        Ok(())
    }

    pub fn paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    // ── Burn lifecycle ────────────────────────────────────────────────────────

    /// Open a timelocked burn of `amount` from the contract's own balance.
    pub fn open_burn(env: Env, caller: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin::require_admin(&env, &caller)?;

        burn::open(&env, &caller, amount)
    }

    /// Destroy the pending burn's earmarked amount once the timelock has
    /// elapsed.
    pub fn finish_burn(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin::require_admin(&env, &caller)?;

        burn::finish(&env, &caller)
    }

    /// Abort the pending burn, returning the earmarked amount to `caller`.
    pub fn cancel_burn(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin::require_admin(&env, &caller)?;

        burn::cancel(&env, &caller)
    }

    /// `(unlock_time, amount)` of the pending burn; `(0, 0)` when idle.
    pub fn burn_info(env: Env) -> (u64, i128) {
        burn::info(&env)
    }

    // ── Recovery ──────────────────────────────────────────────────────────────

    /// Sweep a foreign `asset` out of the contract.  Never the token itself.
    pub fn rescue_token(
        env: Env,
        caller: Address,
        asset: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin::require_admin(&env, &caller)?;

        rescue::rescue_token(&env, &caller, &asset, &to, amount)
    }

    /// Sweep native-asset balance out of the contract.
    pub fn rescue_native(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin::require_admin(&env, &caller)?;

        rescue::rescue_native(&env, &caller, &to, amount)
    }

    // ── Admin set ─────────────────────────────────────────────────────────────

    /// Replace the multisig co-admin.  Owner-only; the multisig cannot
    /// reassign itself.
    pub fn set_multisig(
        env: Env,
        caller: Address,
        new_multisig: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin::require_owner(&env, &caller)?;

        admin::set_multisig(&env, &new_multisig);
        events::publish_multisig_set(&env, &caller, &new_multisig);
        Ok(())
    }

    pub fn multisig(env: Env) -> Option<Address> {
        admin::multisig(&env)
    }

    /// Nominate `new_owner`; rights move only when the nominee accepts.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        admin::require_owner(&env, &caller)?;

        admin::nominate_owner(&env, &new_owner);
        events::publish_ownership_nominated(&env, &caller, &new_owner);
        Ok(())
    }

    /// Complete a pending ownership transfer.  Caller must be the nominee.
    pub fn accept_ownership(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        admin::accept_ownership(&env, &caller)?;
        events::publish_ownership_transferred(&env, &caller);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        admin::owner(&env)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            Ok(())
        } else {
            Err(ContractError::NotInitialized)
        }
    }

    fn metadata(env: &Env) -> Result<TokenMetadata, ContractError> {
        env.storage()
            .instance()
            .get(&METADATA)
            .ok_or(ContractError::NotInitialized)
    }
}
