//! Query handlers for the quota ledger.

use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ConfigResponse, GroupEntry, GroupsResponse, IsStoremanGroupResponse, StoremanGroupResponse,
    TotalQuotaResponse,
};
use crate::state::{group_status, GroupStatus, CONFIG, GROUPS, TOTAL_QUOTA, UNREGISTERING};

/// Ledger record of one group; an unregistered address reports all zeros.
pub fn query_storeman_group(deps: Deps, group: String) -> StdResult<StoremanGroupResponse> {
    let group = deps.api.addr_validate(&group)?;
    let record = GROUPS.may_load(deps.storage, &group)?.unwrap_or_default();

    Ok(StoremanGroupResponse {
        quota: record.quota,
        inbound_available: record.inbound_available(),
        outbound_available: record.outbound_available(),
        receivable: record.receivable,
        payable: record.payable,
        debt: record.debt,
    })
}

pub fn query_total_quota(deps: Deps) -> StdResult<TotalQuotaResponse> {
    Ok(TotalQuotaResponse {
        total_quota: TOTAL_QUOTA.load(deps.storage)?,
    })
}

pub fn query_is_storeman_group(deps: Deps, address: String) -> StdResult<IsStoremanGroupResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(IsStoremanGroupResponse {
        is_storeman_group: group_status(deps.storage, &address)? != GroupStatus::Unregistered,
    })
}

pub fn query_is_active_storeman_group(
    deps: Deps,
    address: String,
) -> StdResult<IsStoremanGroupResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(IsStoremanGroupResponse {
        is_storeman_group: group_status(deps.storage, &address)? == GroupStatus::Active,
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner.to_string(),
        halted: config.halted,
        wtoken: config.wtoken.to_string(),
        htlc: config.htlc.map(|h| h.to_string()),
        storeman_admin: config.storeman_admin.to_string(),
    })
}

/// Paginated list of registered groups.
pub fn query_groups(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<GroupsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let groups: Vec<GroupEntry> = GROUPS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (address, record) = item?;
            let unregistering = UNREGISTERING
                .may_load(deps.storage, &address)?
                .unwrap_or(false);
            Ok(GroupEntry {
                address: address.to_string(),
                quota: record.quota,
                receivable: record.receivable,
                debt: record.debt,
                payable: record.payable,
                unregistering,
            })
        })
        .collect::<StdResult<_>>()?;

    Ok(GroupsResponse { groups })
}
