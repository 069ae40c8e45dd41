//! Outbound fee computation.
//!
//! The withdrawal fee is linear in the swap value, scaled by two ratios
//! supplied by the storeman-admin registry: the base-coin price ratio and
//! the group's transaction-fee ratio, both quoted over the registry's
//! `precise` denominator. Integer division truncates, rounding fees down.

use cosmwasm_std::{Addr, Deps, StdError, StdResult, Uint128, Uint256};

use common::registry::{FeeRatiosResponse, StoremanAdminQueryMsg};

/// Query the registry and price an outbound swap.
pub fn outbound_fee(
    deps: Deps,
    registry: &Addr,
    storeman: &Addr,
    value: Uint128,
) -> StdResult<Uint128> {
    let ratios: FeeRatiosResponse = deps.querier.query_wasm_smart(
        registry,
        &StoremanAdminQueryMsg::FeeRatios {
            storeman: storeman.to_string(),
        },
    )?;
    compute_fee(value, ratios.coin_ratio, ratios.tx_fee_ratio, ratios.precise)
}

/// `value * coin_ratio * tx_fee_ratio / precise^2`, computed in 256 bits.
pub fn compute_fee(
    value: Uint128,
    coin_ratio: Uint128,
    tx_fee_ratio: Uint128,
    precise: Uint128,
) -> StdResult<Uint128> {
    if precise.is_zero() {
        return Err(StdError::generic_err("registry precise denominator is zero"));
    }

    let numerator = value
        .full_mul(coin_ratio)
        .checked_mul(Uint256::from(tx_fee_ratio))
        .map_err(StdError::overflow)?;
    let denominator = Uint256::from(precise)
        .checked_mul(Uint256::from(precise))
        .map_err(StdError::overflow)?;

    let fee = numerator / denominator;
    Uint128::try_from(fee).map_err(StdError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRECISE: Uint128 = Uint128::new(10_000);

    #[test]
    fn test_fee_linear_in_value() {
        // 2.0 price ratio, 1% tx fee: 500 * 2.0 * 0.01 = 10
        let fee = compute_fee(
            Uint128::new(500),
            Uint128::new(20_000),
            Uint128::new(100),
            PRECISE,
        )
        .unwrap();
        assert_eq!(fee, Uint128::new(10));
    }

    #[test]
    fn test_fee_truncates_down() {
        // 999 * 1.0 * 0.01 = 9.99 -> 9
        let fee = compute_fee(
            Uint128::new(999),
            Uint128::new(10_000),
            Uint128::new(100),
            PRECISE,
        )
        .unwrap();
        assert_eq!(fee, Uint128::new(9));
    }

    #[test]
    fn test_fee_zero_ratio_is_free() {
        let fee = compute_fee(
            Uint128::new(1_000_000),
            Uint128::new(10_000),
            Uint128::zero(),
            PRECISE,
        )
        .unwrap();
        assert_eq!(fee, Uint128::zero());
    }

    #[test]
    fn test_fee_large_values_do_not_overflow_intermediate() {
        // The 256-bit intermediate keeps u128-scale values * two ratios safe
        let fee = compute_fee(
            Uint128::new(u128::MAX / 2),
            PRECISE,
            PRECISE,
            PRECISE,
        )
        .unwrap();
        assert_eq!(fee, Uint128::new(u128::MAX / 2));
    }

    #[test]
    fn test_fee_rejects_zero_precise() {
        let err = compute_fee(
            Uint128::new(100),
            Uint128::new(10_000),
            Uint128::new(100),
            Uint128::zero(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("precise"));
    }
}
