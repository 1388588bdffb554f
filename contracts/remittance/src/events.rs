//! Event schema. Every event carries the acting account as its second topic
//! so indexers can filter by participant.

use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

pub fn remit(env: &Env, sender: &Address, hash: &BytesN<32>, value: i128, deadline: u64) {
    env.events().publish(
        (symbol_short!("remit"), sender.clone()),
        (hash.clone(), value, deadline),
    );
}

pub fn retrieve(env: &Env, retriever: &Address, hash: &BytesN<32>, value: i128, timestamp: u64) {
    env.events().publish(
        (symbol_short!("retrieve"), retriever.clone()),
        (hash.clone(), value, timestamp),
    );
}

pub fn cancel(env: &Env, sender: &Address, hash: &BytesN<32>, value: i128, timestamp: u64) {
    env.events().publish(
        (symbol_short!("cancel"), sender.clone()),
        (hash.clone(), value, timestamp),
    );
}

pub fn withdraw_fee_pot(env: &Env, account: &Address, value: i128) {
    env.events()
        .publish((symbol_short!("fee_pot"), account.clone()), value);
}

pub fn killed_withdrawal(env: &Env, account: &Address, value: i128) {
    env.events().publish(
        (Symbol::new(env, "killed_withdrawal"), account.clone()),
        value,
    );
}

pub fn transfer_ownership(env: &Env, old_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("ownership"), old_owner.clone()),
        new_owner.clone(),
    );
}

pub fn fee_set(env: &Env, owner: &Address, old_fee: i128, new_fee: i128) {
    env.events()
        .publish((symbol_short!("fee_set"), owner.clone()), (old_fee, new_fee));
}

pub fn pauser_added(env: &Env, account: &Address) {
    env.events()
        .publish((Symbol::new(env, "pauser_added"), account.clone()), ());
}

pub fn pauser_removed(env: &Env, account: &Address) {
    env.events()
        .publish((Symbol::new(env, "pauser_removed"), account.clone()), ());
}

pub fn paused(env: &Env, account: &Address) {
    env.events()
        .publish((symbol_short!("paused"), account.clone()), ());
}

pub fn unpaused(env: &Env, account: &Address) {
    env.events()
        .publish((symbol_short!("unpaused"), account.clone()), ());
}

pub fn killed(env: &Env, account: &Address) {
    env.events()
        .publish((symbol_short!("killed"), account.clone()), ());
}
