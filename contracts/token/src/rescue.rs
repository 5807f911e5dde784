//! Recovery of assets mistakenly sent to the contract address.
//!
//! Both operations are admin-gated but deliberately not pause-gated: rescue
//! must stay available during an emergency stop.  The governed token itself
//! can never be rescued — that would let an admin drain pending-burn custody.

use soroban_sdk::{symbol_short, token, Address, Env, Symbol};

use crate::events;
use crate::ContractError;

/// Stellar Asset Contract address of the native asset, captured at
/// initialisation for native-balance rescue.
const NATIVE_TOKEN: Symbol = symbol_short!("NATIVE");

pub fn set_native_token(env: &Env, native: &Address) {
    env.storage().instance().set(&NATIVE_TOKEN, native);
}

pub fn native_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&NATIVE_TOKEN)
        .ok_or(ContractError::NotInitialized)
}

fn send(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    let client = token::Client::new(env, asset);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// Sweep `amount` of a foreign `asset` held by the contract out to `to`.
pub fn rescue_token(
    env: &Env,
    caller: &Address,
    asset: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if *asset == env.current_contract_address() {
        return Err(ContractError::CannotRescueSelf);
    }
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    send(env, asset, to, amount)?;
    events::publish_rescued(env, caller, asset, to, amount);
    Ok(())
}

/// Sweep `amount` of the native asset held by the contract out to `to`.
///
/// A recipient that cannot take the transfer fails the whole call with
/// `TransferFailed`; nothing is debited.
pub fn rescue_native(
    env: &Env,
    caller: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let native = native_token(env)?;

    send(env, &native, to, amount)?;
    events::publish_rescued(env, caller, &native, to, amount);
    Ok(())
}
