//! Admin set: owner, pending owner, and the optional multisig co-admin.
//!
//! The owner is set once at initialisation and can only change hands through
//! the two-step nominate/accept flow.  The multisig slot widens the admin set
//! to `{owner, multisig}` for day-to-day privileged operations, but the slot
//! itself is owner-controlled — the multisig can never replace itself.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::ContractError;

// ── Storage keys ──────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");
const MULTISIG: Symbol = symbol_short!("MSIG");

// ── Storage access ────────────────────────────────────────────────────────────

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)
}

pub fn multisig(env: &Env) -> Option<Address> {
    env.storage().instance().get(&MULTISIG)
}

pub fn pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

// ── Guards ────────────────────────────────────────────────────────────────────

/// Ok iff `caller` is the owner or the configured multisig.
///
/// Callers must have already verified `caller.require_auth()`; this predicate
/// only decides membership in the admin set.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if *caller == owner(env)? {
        return Ok(());
    }
    if let Some(msig) = multisig(env) {
        if *caller == msig {
            return Ok(());
        }
    }
    Err(ContractError::NotAdmin)
}

/// Ok iff `caller` is the owner.  The multisig is deliberately excluded so it
/// cannot reassign itself or nominate a new owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if *caller == owner(env)? {
        Ok(())
    } else {
        Err(ContractError::NotOwner)
    }
}

// ── Mutations ─────────────────────────────────────────────────────────────────

/// Replace the multisig co-admin.  Owner-only; enforced by the caller.
pub fn set_multisig(env: &Env, new_multisig: &Address) {
    env.storage().instance().set(&MULTISIG, new_multisig);
}

/// Nominate a new owner.  Overwrites any earlier nomination; the current
/// owner keeps full rights until the nominee accepts.
pub fn nominate_owner(env: &Env, new_owner: &Address) {
    env.storage().instance().set(&PENDING_OWNER, new_owner);
}

/// Complete the two-step transfer.  `caller` must match the pending nominee.
pub fn accept_ownership(env: &Env, caller: &Address) -> Result<(), ContractError> {
    match pending_owner(env) {
        Some(nominee) if nominee == *caller => {
            env.storage().instance().set(&OWNER, caller);
            env.storage().instance().remove(&PENDING_OWNER);
            Ok(())
        }
        _ => Err(ContractError::NotPendingOwner),
    }
}
