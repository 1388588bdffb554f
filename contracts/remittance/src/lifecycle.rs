use soroban_sdk::contracttype;

use crate::error::Error;

/// Emergency-stop state of the contract.
///
/// `Killed` is terminal and can only be entered from `Paused`, so a
/// killed-but-running contract cannot be represented.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Lifecycle {
    Active = 0,
    Paused = 1,
    Killed = 2,
}

impl Lifecycle {
    /// Gate for remit, retrieve, cancel and fee withdrawal.
    pub fn require_active(self) -> Result<(), Error> {
        match self {
            Lifecycle::Active => Ok(()),
            Lifecycle::Paused => Err(Error::ContractPaused),
            Lifecycle::Killed => Err(Error::ContractKilled),
        }
    }

    pub fn require_killed(self) -> Result<(), Error> {
        match self {
            Lifecycle::Killed => Ok(()),
            _ => Err(Error::NotKilled),
        }
    }

    pub fn pause(self) -> Result<Lifecycle, Error> {
        match self {
            Lifecycle::Active => Ok(Lifecycle::Paused),
            Lifecycle::Paused => Err(Error::ContractPaused),
            Lifecycle::Killed => Err(Error::ContractKilled),
        }
    }

    pub fn unpause(self) -> Result<Lifecycle, Error> {
        match self {
            Lifecycle::Paused => Ok(Lifecycle::Active),
            Lifecycle::Active => Err(Error::NotPaused),
            Lifecycle::Killed => Err(Error::ContractKilled),
        }
    }

    pub fn kill(self) -> Result<Lifecycle, Error> {
        match self {
            Lifecycle::Paused => Ok(Lifecycle::Killed),
            Lifecycle::Active => Err(Error::NotPaused),
            Lifecycle::Killed => Err(Error::ContractKilled),
        }
    }
}
