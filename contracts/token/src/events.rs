//! Structured event publishing for the token contract.
#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

pub fn publish_initialized(env: &Env, owner: &Address, initial_supply: i128) {
    env.events()
        .publish((symbol_short!("INIT"),), (owner.clone(), initial_supply));
}

pub fn publish_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("XFER"), from.clone(), to.clone()), amount);
}

pub fn publish_approval(env: &Env, from: &Address, spender: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("APPROVE"), from.clone(), spender.clone()), amount);
}

pub fn publish_paused(env: &Env, caller: &Address) {
    env.events()
        .publish((symbol_short!("PAUSED"), caller.clone()), true);
}

pub fn publish_unpaused(env: &Env, caller: &Address) {
    env.events()
        .publish((symbol_short!("UNPAUSED"), caller.clone()), false);
}

pub fn publish_burn_opened(env: &Env, caller: &Address, unlock_time: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("BRN_OPEN"), caller.clone()),
        (unlock_time, amount),
    );
}

pub fn publish_burn_finished(env: &Env, caller: &Address, timestamp: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("BRN_DONE"), caller.clone()),
        (timestamp, amount),
    );
}

pub fn publish_burn_cancelled(env: &Env, caller: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("BRN_CANC"), caller.clone()), amount);
}

pub fn publish_rescued(env: &Env, caller: &Address, asset: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RESCUED"), asset.clone()),
        (caller.clone(), to.clone(), amount),
    );
}

pub fn publish_multisig_set(env: &Env, owner: &Address, multisig: &Address) {
    env.events()
        .publish((symbol_short!("MSIG_SET"),), (owner.clone(), multisig.clone()));
}

pub fn publish_ownership_nominated(env: &Env, owner: &Address, nominee: &Address) {
    env.events()
        .publish((symbol_short!("OWN_PEND"),), (owner.clone(), nominee.clone()));
}

pub fn publish_ownership_transferred(env: &Env, new_owner: &Address) {
    env.events()
        .publish((symbol_short!("OWN_XFER"),), new_owner.clone());
}

pub fn publish_delegate_changed(env: &Env, account: &Address, current: &Address) {
    env.events()
        .publish((symbol_short!("DEL_SET"), account.clone()), current.clone());
}

pub fn publish_votes_changed(env: &Env, delegatee: &Address, new_votes: i128) {
    env.events()
        .publish((symbol_short!("VOTE_CHG"), delegatee.clone()), new_votes);
}
