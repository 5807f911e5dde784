//! Emergency pause switch.
//!
//! A single instance-storage flag gating every balance mutation.  The flag is
//! consulted inside [`crate::ledger::move_tokens`] — the lowest common
//! chokepoint — so ordinary transfers, allowance transfers, and the burn
//! lifecycle's own token movements are all frozen together.
//!
//! Transitions are strict: pausing an already-paused contract fails rather
//! than silently succeeding, and likewise for unpausing.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::ContractError;

const PAUSED: Symbol = symbol_short!("PAUSED");

/// Returns `true` when the contract is paused.  Defaults to `false`.
pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Guard — `ContractPaused` when the pause flag is set.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::ContractPaused);
    }
    Ok(())
}

/// Transition unpaused → paused.  Fails `AlreadyPaused` otherwise.
pub fn pause(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::AlreadyPaused);
    }
    env.storage().instance().set(&PAUSED, &true);
    Ok(())
}

/// Transition paused → unpaused.  Fails `NotPaused` otherwise.
pub fn unpause(env: &Env) -> Result<(), ContractError> {
    if !is_paused(env) {
        return Err(ContractError::NotPaused);
    }
    env.storage().instance().set(&PAUSED, &false);
    Ok(())
}
