use soroban_sdk::contracttype;

/// Billing tier decided by the collateral rule at rental activation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
#[repr(u32)]
pub enum RateTier {
    Standard = 0,
    Premium = 1,
}

/// Engine parameters, fixed at deployment and adjustable by the owner.
///
/// Amounts are in the settlement currency's smallest unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub struct RentalConfig {
    /// Per-second rate charged to customers below the collateral threshold
    pub standard_rate: i128,
    /// Premium rate as basis points of the standard rate (8000 = 80%)
    pub premium_bps: u32,
    /// Minimum collateral value that qualifies for the premium rate
    pub collateral_threshold: i128,
    /// Rental tokens per unit of settlement currency, used both as the
    /// purchase price and as the collateral conversion factor
    pub tokens_per_unit: i128,
}

/// A rental in progress. The rate is frozen at activation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct ActiveRental {
    pub bike_id: u32,
    pub start_time: u64,
    pub rate: i128,
    pub tier: RateTier,
    /// Token conversion factor in force at activation
    pub tokens_per_unit: i128,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub enum RentalState {
    Idle,
    Active(ActiveRental),
}

/// Per-customer ledger entry
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct RentalAccount {
    /// Settlement currency credited to the customer and held by the engine
    pub settlement_balance: i128,
    /// Rental tokens held in custody on the customer's behalf
    pub token_balance: i128,
    /// Settlement currency owed to the engine
    pub debt: i128,
    pub state: RentalState,
}

impl RentalAccount {
    pub fn new() -> Self {
        Self {
            settlement_balance: 0,
            token_balance: 0,
            debt: 0,
            state: RentalState::Idle,
        }
    }

    pub fn active_rental(&self) -> Option<&ActiveRental> {
        match &self.state {
            RentalState::Active(rental) => Some(rental),
            RentalState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active_rental().is_some()
    }
}

impl Default for RentalAccount {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a stopped rental, mirrored by the `DebtUpdated`,
/// `FundsReturned` and `RentalStop` events.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct RentalReceipt {
    pub bike_id: u32,
    pub start_time: u64,
    pub stop_time: u64,
    pub rate: i128,
    pub fee: i128,
    /// Tokens kept by the engine to cover the fee
    pub token_debited: i128,
    /// Settlement currency collected from the customer's balance
    pub currency_debited: i128,
    /// Unpaid part of the fee added to the customer's debt
    pub shortfall: i128,
    /// Settlement currency sent back to the customer
    pub refund: i128,
    /// Custody tokens released back to the customer's wallet
    pub tokens_returned: i128,
}
