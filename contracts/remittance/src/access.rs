use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage;

/// Authenticates `caller` and checks it is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != storage::get_owner(env) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Authenticates `caller` and checks it holds the pauser role.
pub fn require_pauser(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if !storage::is_pauser(env, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
