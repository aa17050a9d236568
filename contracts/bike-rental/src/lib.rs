#![no_std]

mod events;
mod storage;


use soroban_sdk::{contract, contractimpl, log, Address, Env};
use rental_lib::{
    admin, collateral, default_config, fee, settlement, validation, ActiveRental, RentalAccount,
    RentalConfig, RentalError, RentalReceipt, RentalState,
};

use storage::*;

#[contract]
pub struct BikeRental;

#[contractimpl]
impl BikeRental {
    /// Initialize the ledger with its owner and the two token contracts.
    /// `None` selects the default rates and threshold.
    pub fn initialize(
        env: Env,
        owner: Address,
        settlement_token: Address,
        rental_token: Address,
        config: Option<RentalConfig>,
    ) -> Result<(), RentalError> {
        if admin::has_owner(&env) {
            return Err(RentalError::AlreadyInitialized);
        }
        owner.require_auth();

        if settlement_token == rental_token {
            return Err(RentalError::InvalidConfig);
        }
        let config = config.unwrap_or_else(default_config);
        validation::validate_config(&config)?;

        admin::set_owner(&env, &owner);
        set_settlement_token(&env, &settlement_token);
        set_rental_token(&env, &rental_token);
        set_config(&env, &config);

        events::initialized(&env, &owner);
        Ok(())
    }

    /* ---------------- CUSTOMER OPERATIONS ---------------- */

    /// Buy rental tokens with settlement currency. The currency goes straight
    /// to the owner; the tokens land in the customer's own wallet.
    pub fn purchase_tokens(env: Env, customer: Address, amount: i128) -> Result<i128, RentalError> {
        customer.require_auth();
        validation::validate_positive_amount(amount)?;

        let config = get_config(&env)?;
        let owner = admin::get_owner(&env)?;
        let tokens = collateral::tokens_for_value(amount, config.tokens_per_unit)?;
        if Self::token_float(&env)? < tokens {
            return Err(RentalError::InsufficientTokenFloat);
        }

        add_owner_collected(&env, amount)?;
        settlement_client(&env)?.transfer(&customer, &owner, &amount);
        rental_token_client(&env)?.transfer(&env.current_contract_address(), &customer, &tokens);

        log!(&env, "tokens purchased", customer, amount, tokens);
        events::funds_received(&env, &customer, amount);
        Ok(tokens)
    }

    /// Start renting `bike_id`.
    ///
    /// `deposit` settlement currency is credited to the customer's balance and
    /// the whole token allowance granted to this contract is taken into
    /// custody before the collateral rule picks the rate. Returns the rate.
    pub fn start_rental(
        env: Env,
        customer: Address,
        bike_id: u32,
        deposit: i128,
    ) -> Result<i128, RentalError> {
        customer.require_auth();
        validation::validate_deposit(deposit)?;

        let config = get_config(&env)?;
        let mut account = get_account(&env, &customer);
        if account.is_active() {
            return Err(RentalError::RentalAlreadyActive);
        }
        if account.debt > 0 {
            return Err(RentalError::DebtPending);
        }

        let this = env.current_contract_address();

        if deposit > 0 {
            settlement_client(&env)?.transfer(&customer, &this, &deposit);
            account.settlement_balance = account
                .settlement_balance
                .checked_add(deposit)
                .ok_or(RentalError::ArithmeticOverflow)?;
        }

        // Pull what was approved, but never more than the wallet holds.
        let token = rental_token_client(&env)?;
        let pulled = token.allowance(&customer, &this).min(token.balance(&customer));
        if pulled > 0 {
            token.transfer_from(&this, &customer, &this, &pulled);
            account.token_balance = account
                .token_balance
                .checked_add(pulled)
                .ok_or(RentalError::ArithmeticOverflow)?;
            add_total_custody(&env, pulled)?;
        }

        let tier = collateral::evaluate(account.settlement_balance, account.token_balance, &config)?;
        let rate = collateral::rate_for(tier, &config)?;
        let start_time = env.ledger().timestamp();

        account.state = RentalState::Active(ActiveRental {
            bike_id,
            start_time,
            rate,
            tier,
            tokens_per_unit: config.tokens_per_unit,
        });
        set_account(&env, &customer, &account);

        log!(&env, "rental started", customer, bike_id, rate);
        events::balance_updated(&env, &customer, &account);
        events::rental_started(&env, &customer, bike_id, start_time, rate);
        Ok(rate)
    }

    /// Finish the active rental and settle its fee.
    ///
    /// The fee is taken from custody tokens first, then from the settlement
    /// balance; anything left unpaid becomes debt. Unused currency and
    /// tokens go back to the customer.
    pub fn stop_rental(env: Env, customer: Address) -> Result<RentalReceipt, RentalError> {
        customer.require_auth();

        let mut account = get_account(&env, &customer);
        let rental = account
            .active_rental()
            .cloned()
            .ok_or(RentalError::NoActiveRental)?;

        let stop_time = env.ledger().timestamp();
        let fee = fee::compute_fee(rental.start_time, stop_time, rental.rate)?;
        let split = settlement::settle(
            fee,
            account.settlement_balance,
            account.token_balance,
            rental.tokens_per_unit,
        )?;

        account.debt = account
            .debt
            .checked_add(split.shortfall)
            .ok_or(RentalError::ArithmeticOverflow)?;
        sub_total_custody(&env, account.token_balance)?;
        account.settlement_balance = 0;
        account.token_balance = 0;
        account.state = RentalState::Idle;
        set_account(&env, &customer, &account);
        add_owner_collected(&env, split.collected()?)?;

        let this = env.current_contract_address();
        let currency = settlement_client(&env)?;
        if split.currency_debited > 0 {
            currency.transfer(&this, &admin::get_owner(&env)?, &split.currency_debited);
        }
        if split.refund > 0 {
            currency.transfer(&this, &customer, &split.refund);
        }
        if split.tokens_returned > 0 {
            rental_token_client(&env)?.transfer(&this, &customer, &split.tokens_returned);
        }

        log!(&env, "rental stopped", customer, fee, split.shortfall);
        events::debt_updated(
            &env,
            &customer,
            fee,
            account.debt,
            split.token_debited,
            split.currency_debited,
        );
        if split.refund > 0 {
            events::funds_returned(&env, &customer, split.refund);
        }
        events::rental_stopped(&env, &customer, stop_time);

        Ok(RentalReceipt {
            bike_id: rental.bike_id,
            start_time: rental.start_time,
            stop_time,
            rate: rental.rate,
            fee,
            token_debited: split.token_debited,
            currency_debited: split.currency_debited,
            shortfall: split.shortfall,
            refund: split.refund,
            tokens_returned: split.tokens_returned,
        })
    }

    /// Send settlement currency to the ledger. Outstanding debt is paid off
    /// first; the rest is credited to the customer's balance.
    pub fn transfer_funds(env: Env, customer: Address, amount: i128) -> Result<(), RentalError> {
        customer.require_auth();
        validation::validate_positive_amount(amount)?;

        let this = env.current_contract_address();
        let currency = settlement_client(&env)?;
        currency.transfer(&customer, &this, &amount);
        events::funds_received(&env, &customer, amount);

        let mut account = get_account(&env, &customer);
        let applied = amount.min(account.debt);
        if applied > 0 {
            let orig_amount = account.debt;
            account.debt -= applied;
            add_owner_collected(&env, applied)?;
            currency.transfer(&this, &admin::get_owner(&env)?, &applied);
            events::debt_updated(&env, &customer, orig_amount, account.debt, 0, applied);
        }

        account.settlement_balance = account
            .settlement_balance
            .checked_add(amount - applied)
            .ok_or(RentalError::ArithmeticOverflow)?;
        set_account(&env, &customer, &account);

        events::balance_updated(&env, &customer, &account);
        Ok(())
    }

    /* ---------------- OWNER OPERATIONS ---------------- */

    /// Replace the engine parameters. Active rentals keep their rate.
    pub fn update_config(env: Env, caller: Address, config: RentalConfig) -> Result<(), RentalError> {
        caller.require_auth();
        admin::verify_owner(&env, &caller)?;
        validation::validate_config(&config)?;

        set_config(&env, &config);
        events::config_updated(&env, &config);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), RentalError> {
        admin::transfer_owner(&env, &caller, &new_owner)?;
        events::ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    /// Move rental tokens that are not in any customer's custody out of the
    /// engine.
    pub fn sweep_token_float(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), RentalError> {
        caller.require_auth();
        admin::verify_owner(&env, &caller)?;
        validation::validate_positive_amount(amount)?;

        if Self::token_float(&env)? < amount {
            return Err(RentalError::InsufficientTokenFloat);
        }
        rental_token_client(&env)?.transfer(&env.current_contract_address(), &to, &amount);

        events::float_swept(&env, &to, amount);
        Ok(())
    }

    /* ---------------- QUERIES ---------------- */

    pub fn get_settlement_balance(env: Env, customer: Address) -> i128 {
        get_account(&env, &customer).settlement_balance
    }

    pub fn get_token_account_balance(env: Env, customer: Address) -> i128 {
        get_account(&env, &customer).token_balance
    }

    pub fn get_debt(env: Env, customer: Address) -> i128 {
        get_account(&env, &customer).debt
    }

    pub fn get_account(env: Env, customer: Address) -> RentalAccount {
        get_account(&env, &customer)
    }

    pub fn get_active_rental(env: Env, customer: Address) -> Option<ActiveRental> {
        get_account(&env, &customer).active_rental().cloned()
    }

    /// Standard per-second rate
    pub fn get_rate(env: Env) -> Result<i128, RentalError> {
        Ok(get_config(&env)?.standard_rate)
    }

    pub fn get_premium_rate(env: Env) -> Result<i128, RentalError> {
        collateral::premium_rate(&get_config(&env)?)
    }

    pub fn get_config(env: Env) -> Result<RentalConfig, RentalError> {
        get_config(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, RentalError> {
        admin::get_owner(&env)
    }

    pub fn get_owner_collected(env: Env) -> i128 {
        get_owner_collected(&env)
    }

    pub fn get_total_custody(env: Env) -> i128 {
        get_total_custody(&env)
    }

    /// Rental tokens held by the engine beyond customer custody
    pub fn get_token_float(env: Env) -> Result<i128, RentalError> {
        Self::token_float(&env)
    }

    fn token_float(env: &Env) -> Result<i128, RentalError> {
        let held = rental_token_client(env)?.balance(&env.current_contract_address());
        Ok((held - get_total_custody(env)).max(0))
    }
}
