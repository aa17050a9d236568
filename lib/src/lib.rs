#![no_std]
pub mod admin;
pub mod collateral;
pub mod errors;
pub mod fee;
pub mod settlement;
pub mod types;
pub mod validation;

pub use errors::RentalError;
pub use types::*;

// Config
pub const OWNER_KEY: &str = "owner";
pub const BPS_DENOMINATOR: i128 = 10_000;

// Defaults, all amounts in the settlement currency's smallest unit
pub const DEFAULT_STANDARD_RATE: i128 = 10_000; // per second
pub const DEFAULT_PREMIUM_BPS: u32 = 8_000; // 80% of standard
pub const DEFAULT_COLLATERAL_THRESHOLD: i128 = 200_000;
pub const DEFAULT_TOKENS_PER_UNIT: i128 = 2;

pub fn default_config() -> RentalConfig {
    RentalConfig {
        standard_rate: DEFAULT_STANDARD_RATE,
        premium_bps: DEFAULT_PREMIUM_BPS,
        collateral_threshold: DEFAULT_COLLATERAL_THRESHOLD,
        tokens_per_unit: DEFAULT_TOKENS_PER_UNIT,
    }
}
