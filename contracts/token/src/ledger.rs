//! Fungible ledger: balances, allowances, total supply, and the single
//! transfer chokepoint.
//!
//! Every balance mutation in the contract — user transfers, allowance
//! transfers, the initial mint, burn execution, burn cancellation — goes
//! through [`move_tokens`].  The chokepoint checks the pause flag at the
//! moment of mutation, applies the debit/credit, and forwards the unit
//! movement to the vote tracker so voting power can never drift from
//! balances.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::pause;
use crate::votes;
use crate::ContractError;

// ── Storage keys ──────────────────────────────────────────────────────────────

const BALANCE: Symbol = symbol_short!("BAL");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");
const TOTAL_SUPPLY: Symbol = symbol_short!("TOTAL");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

// ── Storage helpers ───────────────────────────────────────────────────────────

fn balance_key(id: &Address) -> (Symbol, Address) {
    (BALANCE, id.clone())
}

fn allowance_key(from: &Address, spender: &Address) -> (Symbol, Address, Address) {
    (ALLOWANCE, from.clone(), spender.clone())
}

fn extend_balance_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// Balance of `id` (0 if the account has never held tokens).
pub fn balance(env: &Env, id: &Address) -> i128 {
    let key = balance_key(id);
    let bal: Option<i128> = env.storage().persistent().get(&key);
    if bal.is_some() {
        extend_balance_ttl(env, &key);
    }
    bal.unwrap_or(0)
}

/// Remaining allowance granted by `from` to `spender`.
pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&allowance_key(from, spender))
        .unwrap_or(0)
}

/// Total number of tokens in existence.
pub fn total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0)
}

// ── Mutations ─────────────────────────────────────────────────────────────────

/// The transfer chokepoint.
///
/// `from = None` mints, `to = None` destroys; both adjust total supply.  The
/// pause check sits here — at the lowest common point — so no mutation path
/// can bypass it.  Order is fixed: pause gate, ledger update, vote-tracker
/// update.
pub fn move_tokens(
    env: &Env,
    from: Option<&Address>,
    to: Option<&Address>,
    amount: i128,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    pause::require_not_paused(env)?;

    if let Some(from) = from {
        let key = balance_key(from);
        let current = balance(env, from);
        if current < amount {
            return Err(ContractError::InsufficientBalance);
        }
        env.storage().persistent().set(&key, &(current - amount));
        extend_balance_ttl(env, &key);
    } else {
        let total = total_supply(env);
        env.storage()
            .instance()
            .set(&TOTAL_SUPPLY, &(total + amount));
    }

    if let Some(to) = to {
        let key = balance_key(to);
        let current = balance(env, to);
        env.storage().persistent().set(&key, &(current + amount));
        extend_balance_ttl(env, &key);
    } else {
        let total = total_supply(env);
        env.storage()
            .instance()
            .set(&TOTAL_SUPPLY, &(total - amount));
    }

    votes::move_voting_units(env, from, to, amount);
    Ok(())
}

/// Record an approval.  `amount = 0` clears the entry.
pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    let key = allowance_key(from, spender);
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    Ok(())
}

/// Debit `amount` from the allowance `from → spender`.
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let current = allowance(env, from, spender);
    if current < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    set_allowance(env, from, spender, current - amount)
}
