use proptest::prelude::*;
use rental_lib::{
    collateral::{evaluate, rate_for},
    default_config,
    fee::compute_fee,
    settlement::settle,
    RateTier,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_fee_is_fully_accounted(
        fee in 0..1_000_000_000_000i128,
        balance in 0..1_000_000_000_000i128,
        tokens in 0..1_000_000_000_000i128,
        tokens_per_unit in 1..100i128,
    ) {
        let s = settle(fee, balance, tokens, tokens_per_unit).unwrap();

        // INVARIANT: token value + currency + new debt == fee, exactly
        prop_assert_eq!(s.token_value + s.currency_debited + s.shortfall, fee);
        prop_assert_eq!(s.collected().unwrap() + s.shortfall, fee);

        // INVARIANT: nothing goes negative
        prop_assert!(s.token_debited >= 0 && s.tokens_returned >= 0);
        prop_assert!(s.currency_debited >= 0 && s.refund >= 0 && s.shortfall >= 0);

        // INVARIANT: custody balances are split, never created
        prop_assert_eq!(s.token_debited + s.tokens_returned, tokens);
        prop_assert_eq!(s.currency_debited + s.refund, balance);
        prop_assert_eq!(s.token_debited, s.token_value * tokens_per_unit);
    }

    #[test]
    fn prop_debt_only_when_funds_run_out(
        fee in 0..1_000_000_000i128,
        balance in 0..1_000_000_000i128,
        tokens in 0..1_000_000_000i128,
    ) {
        let s = settle(fee, balance, tokens, 2).unwrap();
        if s.shortfall > 0 {
            prop_assert_eq!(s.refund, 0);
            prop_assert!(s.tokens_returned < 2);
        }
        if s.refund > 0 {
            prop_assert_eq!(s.shortfall, 0);
        }
    }

    #[test]
    fn prop_rate_matches_tier(
        balance in 0..1_000_000i128,
        tokens in 0..1_000_000i128,
        elapsed in 0..100_000u64,
    ) {
        let config = default_config();
        let tier = evaluate(balance, tokens, &config).unwrap();
        let rate = rate_for(tier, &config).unwrap();

        if balance + tokens / config.tokens_per_unit >= config.collateral_threshold {
            prop_assert_eq!(tier, RateTier::Premium);
            prop_assert_eq!(rate, config.standard_rate * 8 / 10);
        } else {
            prop_assert_eq!(tier, RateTier::Standard);
            prop_assert_eq!(rate, config.standard_rate);
        }

        prop_assert_eq!(compute_fee(1_000, 1_000 + elapsed, rate).unwrap(), elapsed as i128 * rate);
    }
}
