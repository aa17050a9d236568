//! Stop-time debit ordering: tokens first, then settlement currency, then debt.

use crate::{
    collateral::{token_value, tokens_for_value},
    errors::RentalError,
};

/// How a fee is split across a customer's custodial balances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub fee: i128,
    /// Tokens retained by the engine
    pub token_debited: i128,
    /// Currency value of `token_debited`
    pub token_value: i128,
    pub currency_debited: i128,
    pub shortfall: i128,
    pub refund: i128,
    pub tokens_returned: i128,
}

impl Settlement {
    /// Value credited to the owner for this fee.
    pub fn collected(&self) -> Result<i128, RentalError> {
        self.token_value
            .checked_add(self.currency_debited)
            .ok_or(RentalError::ArithmeticOverflow)
    }
}

pub fn settle(
    fee: i128,
    settlement_balance: i128,
    token_balance: i128,
    tokens_per_unit: i128,
) -> Result<Settlement, RentalError> {
    if fee < 0 || settlement_balance < 0 || token_balance < 0 {
        return Err(RentalError::InvalidAmount);
    }

    let token_value = token_value(token_balance, tokens_per_unit)?.min(fee);
    let token_debited = tokens_for_value(token_value, tokens_per_unit)?;
    let remainder = fee - token_value;
    let currency_debited = remainder.min(settlement_balance);

    Ok(Settlement {
        fee,
        token_debited,
        token_value,
        currency_debited,
        shortfall: remainder - currency_debited,
        refund: settlement_balance - currency_debited,
        tokens_returned: token_balance - token_debited,
    })
}
