use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// An active deposit already occupies this commitment.
    DuplicateCommitment = 1,
    /// Requested active period exceeds the configured maximum.
    PeriodTooLong = 2,
    /// Value does not cover the fee, or the payout after fee would be zero.
    BelowMinimum = 3,
    /// Current fee is higher than the caller accepted.
    FeeSlippage = 4,
    NoSuchCommitment = 5,
    NotDepositor = 6,
    NotYetExpired = 7,
    EmptyPot = 8,
    EmptyBalance = 9,
    ContractKilled = 10,
    Unauthorized = 11,
    ContractPaused = 12,
    NotPaused = 13,
    NotKilled = 14,
    /// The claim window closed at the deposit's expiry.
    CommitmentExpired = 15,
    NegativeAmount = 16,
    /// Fee pot would exceed `i128::MAX`.
    Overflow = 17,
}
