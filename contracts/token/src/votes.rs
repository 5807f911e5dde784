//! Vote-weight tracking: delegation plus per-delegatee checkpoint history.
//!
//! Voting power follows balances, but only once an account has delegated —
//! undelegated units carry no weight.  Every balance mutation is forwarded
//! here by the transfer chokepoint so the tallies can never drift from the
//! ledger.  Checkpoints are append-only `(timestamp, votes)` pairs; a query
//! for a past timestamp binary-searches the history.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::events;
use crate::ContractError;

// ── Storage keys ──────────────────────────────────────────────────────────────

const DELEGATE: Symbol = symbol_short!("DELEG");
const CHECKPOINTS: Symbol = symbol_short!("VCHK");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

// ── Types ─────────────────────────────────────────────────────────────────────

/// One point in a delegatee's voting-power history.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub timestamp: u64,
    pub votes: i128,
}

// ── Storage helpers ───────────────────────────────────────────────────────────

fn delegate_key(account: &Address) -> (Symbol, Address) {
    (DELEGATE, account.clone())
}

fn checkpoint_key(delegatee: &Address) -> (Symbol, Address) {
    (CHECKPOINTS, delegatee.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn history(env: &Env, delegatee: &Address) -> Vec<Checkpoint> {
    let key = checkpoint_key(delegatee);
    let ckpts: Option<Vec<Checkpoint>> = env.storage().persistent().get(&key);
    if ckpts.is_some() {
        extend_ttl(env, &key);
    }
    ckpts.unwrap_or_else(|| Vec::new(env))
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// The account `account` has delegated to, if any.
pub fn delegatee(env: &Env, account: &Address) -> Option<Address> {
    let key = delegate_key(account);
    let del: Option<Address> = env.storage().persistent().get(&key);
    if del.is_some() {
        extend_ttl(env, &key);
    }
    del
}

/// Current voting power of `account` (the last checkpoint, 0 if none).
pub fn current_votes(env: &Env, account: &Address) -> i128 {
    history(env, account).last().map_or(0, |c| c.votes)
}

/// Voting power of `account` at `timestamp`, which must be strictly in the
/// past relative to the current ledger time.
pub fn past_votes(env: &Env, account: &Address, timestamp: u64) -> Result<i128, ContractError> {
    if timestamp >= env.ledger().timestamp() {
        return Err(ContractError::TimestampInFuture);
    }

    let ckpts = history(env, account);

    // Largest checkpoint with ckpt.timestamp <= timestamp.
    let mut lo: u32 = 0;
    let mut hi: u32 = ckpts.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if ckpts.get_unchecked(mid).timestamp <= timestamp {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    if lo == 0 {
        Ok(0)
    } else {
        Ok(ckpts.get_unchecked(lo - 1).votes)
    }
}

// ── Mutations ─────────────────────────────────────────────────────────────────

/// Append (or update, for same-timestamp writes) a checkpoint for `delegatee`
/// and return the new tally.
fn write_checkpoint(env: &Env, delegatee: &Address, delta: i128) -> i128 {
    let key = checkpoint_key(delegatee);
    let mut ckpts = history(env, delegatee);
    let now = env.ledger().timestamp();

    let old = ckpts.last().map_or(0, |c| c.votes);
    let new = old + delta;

    match ckpts.last() {
        Some(last) if last.timestamp == now => {
            ckpts.set(
                ckpts.len() - 1,
                Checkpoint {
                    timestamp: now,
                    votes: new,
                },
            );
        }
        _ => {
            ckpts.push_back(Checkpoint {
                timestamp: now,
                votes: new,
            });
        }
    }

    env.storage().persistent().set(&key, &ckpts);
    extend_ttl(env, &key);
    new
}

/// Shift `amount` voting units between the delegatees of `from` and `to`.
///
/// Called by the ledger chokepoint for every balance mutation.  Accounts that
/// have not delegated contribute nothing, so the corresponding side is a
/// no-op.  A transfer between two accounts sharing one delegatee nets out but
/// still records a checkpoint pair for auditability.
pub fn move_voting_units(
    env: &Env,
    from: Option<&Address>,
    to: Option<&Address>,
    amount: i128,
) {
    if amount == 0 {
        return;
    }

    if let Some(from) = from {
        if let Some(del) = delegatee(env, from) {
            let new = write_checkpoint(env, &del, -amount);
            events::publish_votes_changed(env, &del, new);
        }
    }
    if let Some(to) = to {
        if let Some(del) = delegatee(env, to) {
            let new = write_checkpoint(env, &del, amount);
            events::publish_votes_changed(env, &del, new);
        }
    }
}

/// Record `account → new_delegatee` and move the account's full balance of
/// voting units from the previous delegatee's tally to the new one.
pub fn set_delegate(env: &Env, account: &Address, new_delegatee: &Address, balance: i128) {
    let previous = delegatee(env, account);

    if let Some(prev) = &previous {
        if prev == new_delegatee {
            return;
        }
        if balance > 0 {
            let new = write_checkpoint(env, prev, -balance);
            events::publish_votes_changed(env, prev, new);
        }
    }

    let key = delegate_key(account);
    env.storage().persistent().set(&key, new_delegatee);
    extend_ttl(env, &key);

    if balance > 0 {
        let new = write_checkpoint(env, new_delegatee, balance);
        events::publish_votes_changed(env, new_delegatee, new);
    }

    events::publish_delegate_changed(env, account, new_delegatee);
}
