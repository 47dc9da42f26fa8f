use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,

    Unauthorized = 2,

    ContractPaused = 3,

    ReentrancyDetected = 4,

    AssetAlreadySupported = 5,

    AssetNotSupported = 6,

    InvalidAmount = 7,

    LengthMismatch = 8,

    EmptyRequest = 9,

    TargetNotApproved = 10,

    WithdrawalLimitExceeded = 11,

    RequestNotFound = 12,

    RequestAlreadyProcessed = 13,

    InvalidStatusTransition = 14,

    InsufficientCustody = 15,
}
