use crate::{errors::RentalError, RentalConfig, BPS_DENOMINATOR};

pub fn validate_positive_amount(amount: i128) -> Result<(), RentalError> {
    if amount <= 0 {
        return Err(RentalError::InvalidAmount);
    }
    Ok(())
}

pub fn validate_deposit(amount: i128) -> Result<(), RentalError> {
    if amount < 0 {
        return Err(RentalError::InvalidAmount);
    }
    Ok(())
}

pub fn validate_config(config: &RentalConfig) -> Result<(), RentalError> {
    if config.standard_rate <= 0 {
        return Err(RentalError::InvalidConfig);
    }
    if config.premium_bps == 0 || config.premium_bps as i128 > BPS_DENOMINATOR {
        return Err(RentalError::InvalidConfig);
    }
    if config.collateral_threshold < 0 {
        return Err(RentalError::InvalidConfig);
    }
    if config.tokens_per_unit <= 0 {
        return Err(RentalError::InvalidConfig);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_config;

    #[test]
    fn amount_validation_works() {
        assert!(validate_positive_amount(1).is_ok());
        assert_eq!(validate_positive_amount(0), Err(RentalError::InvalidAmount));
        assert_eq!(validate_positive_amount(-5), Err(RentalError::InvalidAmount));

        assert!(validate_deposit(0).is_ok());
        assert_eq!(validate_deposit(-1), Err(RentalError::InvalidAmount));
    }

    #[test]
    fn config_validation_works() {
        assert!(validate_config(&default_config()).is_ok());

        let mut bad = default_config();
        bad.standard_rate = 0;
        assert_eq!(validate_config(&bad), Err(RentalError::InvalidConfig));

        let mut bad = default_config();
        bad.premium_bps = 10_001;
        assert_eq!(validate_config(&bad), Err(RentalError::InvalidConfig));

        let mut bad = default_config();
        bad.tokens_per_unit = 0;
        assert_eq!(validate_config(&bad), Err(RentalError::InvalidConfig));

        let mut full_price = default_config();
        full_price.premium_bps = 10_000;
        assert!(validate_config(&full_price).is_ok());
    }
}
