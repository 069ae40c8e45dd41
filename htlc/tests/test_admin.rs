//! Administrative gate tests: halt, halted-only setters, kill and the
//! initialized gate. These need no ledger; the collaborator references are
//! plain addresses because every path under test fails before reaching them.

use cosmwasm_std::{coins, Addr, Binary, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use htlc::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use htlc::ContractError;

const FEE_DENOM: &str = "ucoin";

fn contract_htlc() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        htlc::contract::execute,
        htlc::contract::instantiate,
        htlc::contract::query,
    ))
}

fn x_hash(tag: u8) -> Binary {
    Binary::from(common::keccak256(&[tag; 32]).to_vec())
}

fn instantiate_htlc(app: &mut App, owner: &Addr, wired: bool) -> Addr {
    let code_id = app.store_code(contract_htlc());
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &InstantiateMsg {
            owner: owner.to_string(),
            fee_denom: FEE_DENOM.to_string(),
            token_manager: wired.then(|| "ledger".to_string()),
            storeman_admin: wired.then(|| "registry".to_string()),
            locked_time: None,
            revoke_fee_ratio: None,
        },
        &[],
        "htlc",
        Some(owner.to_string()),
    )
    .unwrap()
}

#[test]
fn test_instantiate_validates_parameters() {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let code_id = app.store_code(contract_htlc());

    let err = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                fee_denom: FEE_DENOM.to_string(),
                token_manager: None,
                storeman_admin: None,
                locked_time: Some(0),
                revoke_fee_ratio: None,
            },
            &[],
            "htlc",
            None,
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidLockedTime
    );

    let err = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                fee_denom: FEE_DENOM.to_string(),
                token_manager: None,
                storeman_admin: None,
                locked_time: None,
                revoke_fee_ratio: Some(10_001),
            },
            &[],
            "htlc",
            None,
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidFeeRatio { precise: 10_000 }
    );
}

#[test]
fn test_uninitialized_contract_rejects_swaps() {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let htlc = instantiate_htlc(&mut app, &owner, false);

    let err = app
        .execute_contract(
            Addr::unchecked("storeman1"),
            htlc,
            &ExecuteMsg::InboundLock {
                x_hash: x_hash(1),
                recipient: "user".to_string(),
                value: Uint128::new(100),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NotInitialized
    );
}

#[test]
fn test_halt_gate_blocks_swaps() {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let htlc = instantiate_htlc(&mut app, &owner, true);

    app.execute_contract(owner.clone(), htlc.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();

    let err = app
        .execute_contract(
            Addr::unchecked("storeman1"),
            htlc.clone(),
            &ExecuteMsg::InboundLock {
                x_hash: x_hash(1),
                recipient: "user".to_string(),
                value: Uint128::new(100),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::SystemHalted
    );

    // Non-owner cannot unpause
    let err = app
        .execute_contract(
            Addr::unchecked("stranger"),
            htlc,
            &ExecuteMsg::Unpause {},
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Unauthorized
    );
}

#[test]
fn test_setters_require_owner_and_halt() {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let htlc = instantiate_htlc(&mut app, &owner, true);

    // Running contract: setters refuse
    let err = app
        .execute_contract(
            owner.clone(),
            htlc.clone(),
            &ExecuteMsg::SetLockedTime { seconds: 7200 },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NotHalted
    );

    app.execute_contract(owner.clone(), htlc.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();

    // Owner gate still applies while halted
    let err = app
        .execute_contract(
            Addr::unchecked("stranger"),
            htlc.clone(),
            &ExecuteMsg::SetLockedTime { seconds: 7200 },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Unauthorized
    );

    app.execute_contract(
        owner.clone(),
        htlc.clone(),
        &ExecuteMsg::SetLockedTime { seconds: 7200 },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        htlc.clone(),
        &ExecuteMsg::SetRevokeFeeRatio { ratio: 5000 },
        &[],
    )
    .unwrap();

    // Ratio above the denominator is invalid
    let err = app
        .execute_contract(
            owner.clone(),
            htlc.clone(),
            &ExecuteMsg::SetRevokeFeeRatio { ratio: 10_001 },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidFeeRatio { precise: 10_000 }
    );

    app.execute_contract(
        owner.clone(),
        htlc.clone(),
        &ExecuteMsg::SetTokenManager {
            address: "new_ledger".to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner,
        htlc.clone(),
        &ExecuteMsg::SetStoremanAdmin {
            address: "new_registry".to_string(),
        },
        &[],
    )
    .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&htlc, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.locked_time, 7200);
    assert_eq!(config.revoke_fee_ratio, 5000);
    assert_eq!(config.token_manager, Some("new_ledger".to_string()));
    assert_eq!(config.storeman_admin, Some("new_registry".to_string()));
}

#[test]
fn test_kill_sweeps_balance_and_deactivates() {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let funder = Addr::unchecked("funder");
    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &funder, coins(250, FEE_DENOM))
            .unwrap();
    });

    let htlc = instantiate_htlc(&mut app, &owner, true);

    // Leave some residual native coin on the contract
    app.send_tokens(funder, htlc.clone(), &coins(250, FEE_DENOM))
        .unwrap();

    // Kill requires the halted state
    let err = app
        .execute_contract(owner.clone(), htlc.clone(), &ExecuteMsg::Kill {}, &[])
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NotHalted
    );

    app.execute_contract(owner.clone(), htlc.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();
    app.execute_contract(owner.clone(), htlc.clone(), &ExecuteMsg::Kill {}, &[])
        .unwrap();

    // Residual coin swept to the owner
    let owner_balance = app.wrap().query_balance(&owner, FEE_DENOM).unwrap().amount;
    assert_eq!(owner_balance, Uint128::new(250));

    // The instance is dead for good
    let err = app
        .execute_contract(owner.clone(), htlc.clone(), &ExecuteMsg::Unpause {}, &[])
        .unwrap_err();
    assert_eq!(err.downcast::<ContractError>().unwrap(), ContractError::Killed);

    let err = app
        .execute_contract(
            Addr::unchecked("storeman1"),
            htlc,
            &ExecuteMsg::InboundLock {
                x_hash: x_hash(1),
                recipient: "user".to_string(),
                value: Uint128::new(100),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(err.downcast::<ContractError>().unwrap(), ContractError::Killed);
}

#[test]
fn test_malformed_hash_and_preimage_rejected() {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let htlc = instantiate_htlc(&mut app, &owner, true);

    let err = app
        .execute_contract(
            Addr::unchecked("storeman1"),
            htlc.clone(),
            &ExecuteMsg::InboundLock {
                x_hash: Binary::from(vec![1u8; 31]),
                recipient: "user".to_string(),
                value: Uint128::new(100),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidHashLength { got: 31 }
    );

    let err = app
        .execute_contract(
            Addr::unchecked("user"),
            htlc,
            &ExecuteMsg::InboundRefund {
                preimage: Binary::from(vec![1u8; 16]),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidPreimageLength { got: 16 }
    );
}
