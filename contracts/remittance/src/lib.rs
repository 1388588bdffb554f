#![no_std]
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, Bytes, BytesN, Env,
};

mod access;
mod commitment;
mod error;
mod events;
mod fees;
mod lifecycle;
mod storage;

pub use error::Error;
pub use lifecycle::Lifecycle;
pub use storage::{Config, Deposit};

#[contract]
pub struct Remittance;

#[contractimpl]
impl Remittance {
    /// Set up the owner, the native asset contract, the initial fee and the
    /// longest period a remittance may stay claimable.
    /// The owner starts out holding the pauser role.
    pub fn __constructor(
        env: Env,
        owner: Address,
        token: Address,
        fee: i128,
        max_active_period: u64,
    ) {
        if let Err(err) = fees::check_fee(fee) {
            panic_with_error!(&env, err);
        }

        storage::set_config(
            &env,
            &Config {
                token,
                max_active_period,
            },
        );
        storage::set_owner(&env, &owner);
        storage::set_fee(&env, fee);
        storage::set_fee_pot(&env, 0);
        storage::set_lifecycle(&env, Lifecycle::Active);
        storage::grant_pauser(&env, &owner);
        storage::extend_instance(&env);

        events::pauser_added(&env, &owner);
    }

    /// Commitment identifier for `secret` claimable by `counterparty` on this
    /// deployment.
    pub fn hash_it(env: Env, secret: Bytes, counterparty: Address) -> BytesN<32> {
        commitment::derive_id(&env, &secret, &counterparty)
    }

    /// Lock `amount` of the native asset under `hash` for `active_period`
    /// seconds. Returns the deadline after which the sender may cancel.
    ///
    /// `max_fee` guards against a fee raise landing before this call; it does
    /// not bind the fee charged at settlement.
    pub fn remit(
        env: Env,
        sender: Address,
        hash: BytesN<32>,
        active_period: u64,
        amount: i128,
        max_fee: i128,
    ) -> Result<u64, Error> {
        sender.require_auth();
        storage::get_lifecycle(&env).require_active()?;

        let config = storage::get_config(&env);
        if active_period > config.max_active_period {
            return Err(Error::PeriodTooLong);
        }
        fees::check_admission(amount, storage::get_fee(&env), max_fee)?;
        if storage::has_deposit(&env, &hash) {
            return Err(Error::DuplicateCommitment);
        }

        let deadline = env
            .ledger()
            .timestamp()
            .checked_add(active_period)
            .ok_or(Error::PeriodTooLong)?;

        storage::save_deposit(
            &env,
            &hash,
            &Deposit {
                depositor: sender.clone(),
                value: amount,
                expiry: deadline,
            },
        );
        storage::extend_instance(&env);

        token::Client::new(&env, &config.token).transfer(
            &sender,
            &env.current_contract_address(),
            &amount,
        );

        log!(&env, "remit locked", amount, deadline);
        events::remit(&env, &sender, &hash, amount, deadline);

        Ok(deadline)
    }

    /// Claim the remittance addressed to `retriever` by revealing `secret`.
    /// Pays the deposit minus the fee in force now.
    pub fn retrieve(env: Env, retriever: Address, secret: Bytes) -> Result<i128, Error> {
        retriever.require_auth();
        storage::get_lifecycle(&env).require_active()?;

        let hash = commitment::derive_id(&env, &secret, &retriever);
        let deposit = storage::load_deposit(&env, &hash).ok_or(Error::NoSuchCommitment)?;

        let now = env.ledger().timestamp();
        if now > deposit.expiry {
            return Err(Error::CommitmentExpired);
        }

        let net = Self::settle(&env, &hash, &deposit, &retriever)?;
        events::retrieve(&env, &retriever, &hash, net, now);

        Ok(net)
    }

    /// Return an expired, unclaimed remittance to its depositor, minus the fee.
    pub fn cancel(env: Env, sender: Address, hash: BytesN<32>) -> Result<i128, Error> {
        sender.require_auth();
        storage::get_lifecycle(&env).require_active()?;

        let deposit = storage::load_deposit(&env, &hash).ok_or(Error::NoSuchCommitment)?;
        if deposit.depositor != sender {
            return Err(Error::NotDepositor);
        }

        let now = env.ledger().timestamp();
        if now <= deposit.expiry {
            return Err(Error::NotYetExpired);
        }

        let net = Self::settle(&env, &hash, &deposit, &sender)?;
        events::cancel(&env, &sender, &hash, net, now);

        Ok(net)
    }

    /// Pay every collected fee to the current owner.
    pub fn withdraw_fee_pot(env: Env, caller: Address) -> Result<i128, Error> {
        access::require_owner(&env, &caller)?;
        storage::get_lifecycle(&env).require_active()?;

        let amount = storage::get_fee_pot(&env);
        if amount == 0 {
            return Err(Error::EmptyPot);
        }

        storage::set_fee_pot(&env, 0);
        storage::extend_instance(&env);

        Self::pay_out(&env, &caller, amount);
        events::withdraw_fee_pot(&env, &caller, amount);

        Ok(amount)
    }

    /// Replace the flat fee charged on every future admission and settlement.
    /// There is no upper bound; pending deposits settle at the new rate.
    pub fn set_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;
        fees::check_fee(new_fee)?;

        let old_fee = storage::get_fee(&env);
        storage::set_fee(&env, new_fee);
        storage::extend_instance(&env);

        log!(&env, "fee changed", old_fee, new_fee);
        events::fee_set(&env, &caller, old_fee, new_fee);

        Ok(())
    }

    /// Halt remit, retrieve, cancel and fee withdrawal. Pauser only.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        access::require_pauser(&env, &caller)?;

        let next = storage::get_lifecycle(&env).pause()?;
        storage::set_lifecycle(&env, next);
        storage::extend_instance(&env);

        events::paused(&env, &caller);
        Ok(())
    }

    /// Resume normal operation. Fails once the contract is killed.
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        access::require_pauser(&env, &caller)?;

        let next = storage::get_lifecycle(&env).unpause()?;
        storage::set_lifecycle(&env, next);
        storage::extend_instance(&env);

        events::unpaused(&env, &caller);
        Ok(())
    }

    /// Grant the pauser role. Granting it to an existing pauser is a no-op.
    pub fn add_pauser(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        access::require_pauser(&env, &caller)?;

        if !storage::is_pauser(&env, &account) {
            storage::grant_pauser(&env, &account);
            events::pauser_added(&env, &account);
        }
        Ok(())
    }

    /// Drop the caller's own pauser role.
    pub fn renounce_pauser(env: Env, caller: Address) -> Result<(), Error> {
        access::require_pauser(&env, &caller)?;

        storage::revoke_pauser(&env, &caller);
        events::pauser_removed(&env, &caller);
        Ok(())
    }

    /// Hand the owner designation and the owner's pauser role to `new_owner`.
    /// Fees already in the pot follow the owner designation.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;

        if storage::is_pauser(&env, &caller) {
            storage::revoke_pauser(&env, &caller);
            events::pauser_removed(&env, &caller);
        }
        storage::set_owner(&env, &new_owner);
        if !storage::is_pauser(&env, &new_owner) {
            storage::grant_pauser(&env, &new_owner);
            events::pauser_added(&env, &new_owner);
        }
        storage::extend_instance(&env);

        events::transfer_ownership(&env, &caller, &new_owner);
        Ok(())
    }

    /// Permanently disable remit, retrieve, cancel and fee withdrawal.
    /// Only reachable while paused.
    pub fn kill(env: Env, caller: Address) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;

        let next = storage::get_lifecycle(&env).kill()?;
        storage::set_lifecycle(&env, next);
        storage::extend_instance(&env);

        log!(&env, "contract killed");
        events::killed(&env, &caller);
        Ok(())
    }

    /// Drain the whole contract balance, pending deposits included, to the
    /// owner of a killed contract.
    pub fn killed_withdrawal(env: Env, caller: Address) -> Result<i128, Error> {
        access::require_owner(&env, &caller)?;
        storage::get_lifecycle(&env).require_killed()?;

        let token = token::Client::new(&env, &storage::get_config(&env).token);
        let balance = token.balance(&env.current_contract_address());
        if balance <= 0 {
            return Err(Error::EmptyBalance);
        }

        storage::set_fee_pot(&env, 0);
        storage::extend_instance(&env);

        token.transfer(&env.current_contract_address(), &caller, &balance);
        events::killed_withdrawal(&env, &caller, balance);

        Ok(balance)
    }

    /// Current owner, the recipient of fee-pot and kill-switch withdrawals.
    pub fn get_owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// Flat fee charged per settlement, in stroops.
    pub fn get_fee(env: Env) -> i128 {
        storage::get_fee(&env)
    }

    /// Collected fees not yet withdrawn.
    pub fn get_fee_pot(env: Env) -> i128 {
        storage::get_fee_pot(&env)
    }

    /// Stellar Asset Contract holding the escrowed native asset.
    pub fn get_token(env: Env) -> Address {
        storage::get_config(&env).token
    }

    /// Longest `active_period` accepted by `remit`, in seconds.
    pub fn get_max_active_period(env: Env) -> u64 {
        storage::get_config(&env).max_active_period
    }

    /// Current emergency-stop state.
    pub fn get_lifecycle(env: Env) -> Lifecycle {
        storage::get_lifecycle(&env)
    }

    /// True while paused, false when active or killed.
    pub fn is_paused(env: Env) -> bool {
        storage::get_lifecycle(&env) == Lifecycle::Paused
    }

    /// True once the kill switch has been thrown.
    pub fn is_killed(env: Env) -> bool {
        storage::get_lifecycle(&env) == Lifecycle::Killed
    }

    /// Whether `account` may pause and unpause.
    pub fn is_pauser(env: Env, account: Address) -> bool {
        storage::is_pauser(&env, &account)
    }

    /// Pending remittance under `hash`, if any.
    pub fn get_deposit(env: Env, hash: BytesN<32>) -> Option<Deposit> {
        storage::load_deposit(&env, &hash)
    }
}

impl Remittance {
    /// Clears the record and books the fee before any value leaves the
    /// contract.
    fn settle(
        env: &Env,
        hash: &BytesN<32>,
        deposit: &Deposit,
        payee: &Address,
    ) -> Result<i128, Error> {
        let fee = storage::get_fee(env);
        let net = fees::net_payout(deposit.value, fee)?;

        storage::remove_deposit(env, hash);
        storage::credit_fee_pot(env, fee)?;
        storage::extend_instance(env);

        Self::pay_out(env, payee, net);
        log!(env, "settled", net, fee);

        Ok(net)
    }

    fn pay_out(env: &Env, to: &Address, amount: i128) {
        let token = token::Client::new(env, &storage::get_config(env).token);
        token.transfer(&env.current_contract_address(), to, &amount);
    }
}
