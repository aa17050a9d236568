use soroban_sdk::contracterror;

/// Every way a rental ledger operation can be rejected.
///
/// Codes are part of the contract ABI and surface to callers as
/// `Error(Contract, #n)`; never renumber an existing variant.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RentalError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    /// Zero or negative amount where a positive one is required
    InvalidAmount = 4,
    RentalAlreadyActive = 5,
    /// Not allowed to rent while debt is pending
    DebtPending = 6,
    NoActiveRental = 7,
    InvalidConfig = 8,
    /// Stop time earlier than start time
    InvalidTimestamp = 9,
    ArithmeticOverflow = 10,
    /// The engine does not hold enough un-custodied tokens
    InsufficientTokenFloat = 11,
}
