use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::error::Error;
use crate::fees;
use crate::lifecycle::Lifecycle;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Fee,
    FeePot,
    Lifecycle,
    Pauser(Address),
    Deposit(BytesN<32>),
}

/// Settings fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Stellar Asset Contract of the native asset.
    pub token: Address,
    /// Longest accepted `active_period`, in seconds.
    pub max_active_period: u64,
}

/// A pending remittance, keyed by its commitment identifier.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub depositor: Address,
    /// Full attached value; the fee is taken at settlement.
    pub value: i128,
    pub expiry: u64,
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Constructor guarantees Config, Owner, Fee and Lifecycle are present, so the
// unwraps below only fire on a contract that was never constructed.

pub fn get_config(env: &Env) -> Config {
    env.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_fee(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Fee).unwrap()
}

pub fn set_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::Fee, &fee);
}

pub fn get_fee_pot(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::FeePot).unwrap_or(0)
}

pub fn set_fee_pot(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::FeePot, &amount);
}

pub fn credit_fee_pot(env: &Env, fee: i128) -> Result<(), Error> {
    set_fee_pot(env, fees::credit(get_fee_pot(env), fee)?);
    Ok(())
}

pub fn get_lifecycle(env: &Env) -> Lifecycle {
    env.storage()
        .instance()
        .get(&DataKey::Lifecycle)
        .unwrap_or(Lifecycle::Active)
}

pub fn set_lifecycle(env: &Env, lifecycle: Lifecycle) {
    env.storage().instance().set(&DataKey::Lifecycle, &lifecycle);
}

pub fn is_pauser(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Pauser(account.clone()))
}

pub fn grant_pauser(env: &Env, account: &Address) {
    let key = DataKey::Pauser(account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn revoke_pauser(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Pauser(account.clone()));
}

pub fn load_deposit(env: &Env, hash: &BytesN<32>) -> Option<Deposit> {
    env.storage()
        .persistent()
        .get(&DataKey::Deposit(hash.clone()))
}

pub fn has_deposit(env: &Env, hash: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Deposit(hash.clone()))
}

pub fn save_deposit(env: &Env, hash: &BytesN<32>, deposit: &Deposit) {
    let key = DataKey::Deposit(hash.clone());
    env.storage().persistent().set(&key, deposit);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_deposit(env: &Env, hash: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::Deposit(hash.clone()));
}
