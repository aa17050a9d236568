use crate::errors::RentalError;

/// Fee owed for a rental: elapsed seconds times the assigned rate.
pub fn compute_fee(start_time: u64, stop_time: u64, rate: i128) -> Result<i128, RentalError> {
    let elapsed = stop_time
        .checked_sub(start_time)
        .ok_or(RentalError::InvalidTimestamp)?;
    (elapsed as i128)
        .checked_mul(rate)
        .ok_or(RentalError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_is_elapsed_times_rate() {
        assert_eq!(compute_fee(1_000, 1_005, 8_000), Ok(40_000));
        assert_eq!(compute_fee(1_000, 1_000, 8_000), Ok(0));
    }

    #[test]
    fn stop_before_start_is_rejected() {
        assert_eq!(compute_fee(10, 9, 1), Err(RentalError::InvalidTimestamp));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            compute_fee(0, u64::MAX, i128::MAX),
            Err(RentalError::ArithmeticOverflow)
        );
    }
}
