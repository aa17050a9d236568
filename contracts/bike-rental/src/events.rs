use soroban_sdk::{symbol_short, Address, Env, Symbol};

use rental_lib::{RentalAccount, RentalConfig};

pub fn initialized(env: &Env, owner: &Address) {
    env.events().publish((symbol_short!("init"),), owner.clone());
}

pub fn rental_started(env: &Env, customer: &Address, bike_id: u32, start_time: u64, rate: i128) {
    env.events().publish(
        (Symbol::new(env, "RentalStart"), customer.clone()),
        (bike_id, start_time, rate),
    );
}

pub fn rental_stopped(env: &Env, customer: &Address, stop_time: u64) {
    env.events().publish(
        (Symbol::new(env, "RentalStop"), customer.clone()),
        stop_time,
    );
}

pub fn balance_updated(env: &Env, customer: &Address, account: &RentalAccount) {
    env.events().publish(
        (Symbol::new(env, "BalanceUpdated"), customer.clone()),
        (account.settlement_balance, account.token_balance),
    );
}

/// Payload: (orig_amount, pending_amount, token_debited_amount, debited_amount)
pub fn debt_updated(
    env: &Env,
    customer: &Address,
    orig_amount: i128,
    pending_amount: i128,
    token_debited_amount: i128,
    debited_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "DebtUpdated"), customer.clone()),
        (orig_amount, pending_amount, token_debited_amount, debited_amount),
    );
}

pub fn funds_returned(env: &Env, customer: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "FundsReturned"), customer.clone()),
        amount,
    );
}

pub fn funds_received(env: &Env, customer: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "FundsReceived"), customer.clone()),
        amount,
    );
}

pub fn config_updated(env: &Env, config: &RentalConfig) {
    env.events()
        .publish((Symbol::new(env, "ConfigUpdated"),), *config);
}

pub fn ownership_transferred(env: &Env, previous: &Address, next: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnershipTransferred"),),
        (previous.clone(), next.clone()),
    );
}

pub fn float_swept(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "FloatSwept"),), (to.clone(), amount));
}
