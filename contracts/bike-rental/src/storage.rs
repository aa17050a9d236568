use soroban_sdk::{contracttype, token, Address, Env};

use rental_lib::{RentalAccount, RentalConfig, RentalError};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Engine parameters
    Config,
    /// Base currency token contract
    SettlementToken,
    /// Secondary rental token contract
    RentalToken,
    /// Per-customer ledger entry
    Account(Address),
    /// Value credited to the owner, in settlement currency terms
    OwnerCollected,
    /// Sum of every customer's custody token balance
    TotalCustody,
}

/* ---------------- CONFIG ---------------- */

pub fn set_config(env: &Env, config: &RentalConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<RentalConfig, RentalError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(RentalError::NotInitialized)
}

/* ---------------- TOKENS ---------------- */

pub fn set_settlement_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::SettlementToken, token);
}

pub fn get_settlement_token(env: &Env) -> Result<Address, RentalError> {
    env.storage()
        .instance()
        .get(&DataKey::SettlementToken)
        .ok_or(RentalError::NotInitialized)
}

pub fn set_rental_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::RentalToken, token);
}

pub fn get_rental_token(env: &Env) -> Result<Address, RentalError> {
    env.storage()
        .instance()
        .get(&DataKey::RentalToken)
        .ok_or(RentalError::NotInitialized)
}

pub fn settlement_client(env: &Env) -> Result<token::Client<'_>, RentalError> {
    Ok(token::Client::new(env, &get_settlement_token(env)?))
}

pub fn rental_token_client(env: &Env) -> Result<token::Client<'_>, RentalError> {
    Ok(token::Client::new(env, &get_rental_token(env)?))
}

/* ---------------- ACCOUNTS ---------------- */

/// Accounts spring into existence on first read.
pub fn get_account(env: &Env, customer: &Address) -> RentalAccount {
    env.storage()
        .persistent()
        .get(&DataKey::Account(customer.clone()))
        .unwrap_or_default()
}

pub fn set_account(env: &Env, customer: &Address, account: &RentalAccount) {
    env.storage()
        .persistent()
        .set(&DataKey::Account(customer.clone()), account);
}

/* ---------------- TOTALS ---------------- */

pub fn get_owner_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::OwnerCollected)
        .unwrap_or(0)
}

pub fn add_owner_collected(env: &Env, amount: i128) -> Result<(), RentalError> {
    let total = get_owner_collected(env)
        .checked_add(amount)
        .ok_or(RentalError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::OwnerCollected, &total);
    Ok(())
}

pub fn get_total_custody(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalCustody)
        .unwrap_or(0)
}

pub fn add_total_custody(env: &Env, tokens: i128) -> Result<(), RentalError> {
    let total = get_total_custody(env)
        .checked_add(tokens)
        .ok_or(RentalError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::TotalCustody, &total);
    Ok(())
}

pub fn sub_total_custody(env: &Env, tokens: i128) -> Result<(), RentalError> {
    let total = get_total_custody(env)
        .checked_sub(tokens)
        .filter(|total| *total >= 0)
        .ok_or(RentalError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::TotalCustody, &total);
    Ok(())
}
