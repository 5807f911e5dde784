//! Timelocked burn lifecycle.
//!
//! A single instance-storage slot holds at most one pending burn.  Opening a
//! burn earmarks part of the contract's own balance and starts the timelock;
//! finishing destroys exactly the earmarked amount; cancelling returns it to
//! the cancelling admin.  Tokens that land on the contract after `open` are
//! ordinary balance — never swept into the burn, never paid out by a cancel.
//!
//! ```text
//! Idle ──open──▶ Pending ──(timelock elapses)──▶ Ready ──finish──▶ Idle
//!                   │                              │
//!                   └──────────── cancel ──────────┘
//! ```

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::events;
use crate::ledger;
use crate::pause;
use crate::ContractError;

/// Delay between opening and finishing a burn: 2.5 days in seconds.
pub const BURN_TIMELOCK: u64 = 216_000;

const BURN_RECORD: Symbol = symbol_short!("BURN");

/// The one pending burn, if any.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BurnRecord {
    /// Earliest ledger timestamp at which `finish` may run.
    pub unlock_time: u64,
    /// Amount earmarked at open time, in contract custody until resolution.
    pub amount: i128,
}

fn active(env: &Env) -> Option<BurnRecord> {
    env.storage().instance().get(&BURN_RECORD)
}

fn clear(env: &Env) {
    env.storage().instance().remove(&BURN_RECORD);
}

/// `(unlock_time, amount)` of the pending burn, `(0, 0)` when idle.
pub fn info(env: &Env) -> (u64, i128) {
    active(env).map_or((0, 0), |rec| (rec.unlock_time, rec.amount))
}

/// Idle → Pending.  Earmarks `amount` of the contract's own balance and
/// starts the timelock.
pub fn open(env: &Env, caller: &Address, amount: i128) -> Result<(), ContractError> {
    pause::require_not_paused(env)?;
    if active(env).is_some() {
        return Err(ContractError::BurnAlreadyActive);
    }
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let custody = ledger::balance(env, &env.current_contract_address());
    if custody < amount {
        return Err(ContractError::InsufficientBalance);
    }

    let unlock_time = env.ledger().timestamp() + BURN_TIMELOCK;
    env.storage()
        .instance()
        .set(&BURN_RECORD, &BurnRecord { unlock_time, amount });

    events::publish_burn_opened(env, caller, unlock_time, amount);
    Ok(())
}

/// Pending/Ready → Idle, destroying exactly the earmarked amount.
///
/// Fails while the timelock has not elapsed; the pending record's timestamps
/// stay queryable through [`info`] for diagnostics.  The destroying transfer
/// runs through the ledger chokepoint, so the pause flag blocks it.
pub fn finish(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let rec = active(env).ok_or(ContractError::BurnNotActive)?;

    let now = env.ledger().timestamp();
    if now < rec.unlock_time {
        return Err(ContractError::TimelockNotExpired);
    }

    ledger::move_tokens(env, Some(&env.current_contract_address()), None, rec.amount)?;
    clear(env);

    events::publish_burn_finished(env, caller, now, rec.amount);
    Ok(())
}

/// Pending/Ready → Idle, returning the earmarked amount to `caller`.
///
/// No timelock check — cancellation is always available to an admin.
pub fn cancel(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let rec = active(env).ok_or(ContractError::BurnNotActive)?;

    ledger::move_tokens(
        env,
        Some(&env.current_contract_address()),
        Some(caller),
        rec.amount,
    )?;
    clear(env);

    events::publish_burn_cancelled(env, caller, rec.amount);
    Ok(())
}
