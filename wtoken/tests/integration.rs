//! Integration tests for the wrapped token contract using cw-multi-test.
//!
//! Covers the manager-gated supply operations, the standard transfer and
//! allowance surface, and the native-funds rejection rule.

use cosmwasm_std::{coins, Addr, Uint128};
use cw20::{BalanceResponse, TokenInfoResponse};
use cw_multi_test::{App, ContractWrapper, Executor};

use wtoken::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use wtoken::ContractError;

fn contract_wtoken() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        wtoken::contract::execute,
        wtoken::contract::instantiate,
        wtoken::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    token: Addr,
    owner: Addr,
    manager: Addr,
    user: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let manager = Addr::unchecked("manager");
    let user = Addr::unchecked("user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(1_000_000, "ucoin"))
            .unwrap();
    });

    let code_id = app.store_code(contract_wtoken());
    let token = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                name: "Wrapped BTC".to_string(),
                symbol: "WBTC".to_string(),
                decimals: 8,
                manager: Some(manager.to_string()),
            },
            &[],
            "wtoken",
            Some(owner.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        token,
        owner,
        manager,
        user,
    }
}

fn balance_of(app: &App, token: &Addr, account: &Addr) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn total_supply(app: &App, token: &Addr) -> Uint128 {
    let res: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(token, &QueryMsg::TokenInfo {})
        .unwrap();
    res.total_supply
}

// ============================================================================
// Supply operations
// ============================================================================

#[test]
fn test_mint_adds_balance_and_supply() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(500),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance_of(&env.app, &env.token, &env.user), Uint128::new(500));
    assert_eq!(total_supply(&env.app, &env.token), Uint128::new(500));
}

#[test]
fn test_mint_requires_manager() {
    let mut env = setup();

    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(500),
            },
            &[],
        )
        .unwrap_err();

    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::UnauthorizedManager
    );
}

#[test]
fn test_mint_rejects_zero_amount() {
    let mut env = setup();

    let err = env
        .app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::zero(),
            },
            &[],
        )
        .unwrap_err();

    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidZeroAmount
    );
}

#[test]
fn test_burn_subtracts_balance_and_supply() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(500),
            },
            &[],
        )
        .unwrap();

    env.app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Burn {
                owner: env.user.to_string(),
                amount: Uint128::new(200),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance_of(&env.app, &env.token, &env.user), Uint128::new(300));
    assert_eq!(total_supply(&env.app, &env.token), Uint128::new(300));
}

#[test]
fn test_burn_beyond_balance_fails() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(100),
            },
            &[],
        )
        .unwrap();

    let err = env
        .app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Burn {
                owner: env.user.to_string(),
                amount: Uint128::new(101),
            },
            &[],
        )
        .unwrap_err();

    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InsufficientBalance {
            balance: "100".to_string(),
            required: "101".to_string(),
        }
    );
    // Nothing changed
    assert_eq!(total_supply(&env.app, &env.token), Uint128::new(100));
}

#[test]
fn test_lock_to_moves_balance_without_supply_change() {
    let mut env = setup();
    let escrow = Addr::unchecked("escrow");

    env.app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(500),
            },
            &[],
        )
        .unwrap();

    env.app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::LockTo {
                owner: env.user.to_string(),
                recipient: escrow.to_string(),
                amount: Uint128::new(500),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance_of(&env.app, &env.token, &env.user), Uint128::zero());
    assert_eq!(balance_of(&env.app, &env.token, &escrow), Uint128::new(500));
    assert_eq!(total_supply(&env.app, &env.token), Uint128::new(500));
}

#[test]
fn test_lock_to_rejects_self_transfer() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(500),
            },
            &[],
        )
        .unwrap();

    let err = env
        .app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::LockTo {
                owner: env.user.to_string(),
                recipient: env.user.to_string(),
                amount: Uint128::new(100),
            },
            &[],
        )
        .unwrap_err();

    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::SelfTransfer
    );
}

// ============================================================================
// Standard surface
// ============================================================================

#[test]
fn test_transfer_and_allowance_flow() {
    let mut env = setup();
    let other = Addr::unchecked("other");
    let spender = Addr::unchecked("spender");

    env.app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(1000),
            },
            &[],
        )
        .unwrap();

    // Direct transfer
    env.app
        .execute_contract(
            env.user.clone(),
            env.token.clone(),
            &ExecuteMsg::Transfer {
                recipient: other.to_string(),
                amount: Uint128::new(400),
            },
            &[],
        )
        .unwrap();
    assert_eq!(balance_of(&env.app, &env.token, &other), Uint128::new(400));

    // Allowance + transfer_from
    env.app
        .execute_contract(
            env.user.clone(),
            env.token.clone(),
            &ExecuteMsg::IncreaseAllowance {
                spender: spender.to_string(),
                amount: Uint128::new(300),
            },
            &[],
        )
        .unwrap();

    env.app
        .execute_contract(
            spender.clone(),
            env.token.clone(),
            &ExecuteMsg::TransferFrom {
                owner: env.user.to_string(),
                recipient: other.to_string(),
                amount: Uint128::new(250),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance_of(&env.app, &env.token, &env.user), Uint128::new(350));
    assert_eq!(balance_of(&env.app, &env.token, &other), Uint128::new(650));

    // Remaining allowance is 50; spending more fails
    let err = env
        .app
        .execute_contract(
            spender,
            env.token.clone(),
            &ExecuteMsg::TransferFrom {
                owner: env.user.to_string(),
                recipient: other.to_string(),
                amount: Uint128::new(51),
            },
            &[],
        )
        .unwrap_err();

    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InsufficientAllowance {
            allowance: "50".to_string(),
            required: "51".to_string(),
        }
    );
}

// ============================================================================
// Gates
// ============================================================================

#[test]
fn test_execute_rejects_native_funds() {
    let mut env = setup();

    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.token.clone(),
            &ExecuteMsg::Transfer {
                recipient: env.owner.to_string(),
                amount: Uint128::new(1),
            },
            &coins(10, "ucoin"),
        )
        .unwrap_err();

    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NativeFundsRejected
    );
}

#[test]
fn test_halted_blocks_mutations() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.owner.clone(),
            env.token.clone(),
            &ExecuteMsg::Pause {},
            &[],
        )
        .unwrap();

    let err = env
        .app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(1),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::SystemHalted
    );

    // Unpause restores operation
    env.app
        .execute_contract(
            env.owner.clone(),
            env.token.clone(),
            &ExecuteMsg::Unpause {},
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(1),
            },
            &[],
        )
        .unwrap();
}

#[test]
fn test_set_manager_owner_only() {
    let mut env = setup();
    let new_manager = Addr::unchecked("new_manager");

    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.token.clone(),
            &ExecuteMsg::SetManager {
                manager: new_manager.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Unauthorized
    );

    env.app
        .execute_contract(
            env.owner.clone(),
            env.token.clone(),
            &ExecuteMsg::SetManager {
                manager: new_manager.to_string(),
            },
            &[],
        )
        .unwrap();

    // Old manager can no longer mint
    let err = env
        .app
        .execute_contract(
            env.manager.clone(),
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(1),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::UnauthorizedManager
    );
}
