use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::types::{RequestStatus, Role};

// Event emitted when a deposit is recorded and forwarded to custody
pub fn asset_deposited_event(env: &Env, asset: Address, amount: i128, depositor: Address) {
    let topics = (symbol_short!("deposit"), asset);
    env.events().publish(topics, (amount, depositor));
}

// Event emitted when a withdrawal request is created. Carries only the
// first line item of a multi-asset request; the stored request holds the
// full list.
pub fn withdrawal_request_created_event(
    env: &Env,
    request_id: BytesN<32>,
    requester: Address,
    first_asset: Address,
    target: Option<Address>,
    first_amount: i128,
) {
    let topics = (symbol_short!("wreq"), request_id);
    env.events()
        .publish(topics, (requester, first_asset, target, first_amount));
}

// Event emitted when a custodian operator resolves a request
pub fn request_status_updated_event(env: &Env, request_id: BytesN<32>, status: RequestStatus) {
    let topics = (symbol_short!("wstatus"), request_id);
    env.events().publish(topics, status);
}

// Event emitted once per line item when a resolution pays out
pub fn withdrawal_completed_event(
    env: &Env,
    request_id: BytesN<32>,
    requester: Address,
    asset: Address,
    amount: i128,
) {
    let topics = (symbol_short!("wdone"), request_id);
    env.events().publish(topics, (requester, asset, amount));
}

pub fn asset_added_event(env: &Env, asset: Address) {
    let topics = (symbol_short!("asset"),);
    env.events().publish(topics, asset);
}

pub fn withdrawal_limit_updated_event(env: &Env, asset: Address, limit: i128) {
    let topics = (symbol_short!("limit"), asset);
    env.events().publish(topics, limit);
}

pub fn target_approved_event(env: &Env, target: Address) {
    let topics = (symbol_short!("target"),);
    env.events().publish(topics, target);
}

pub fn custody_wallet_updated_event(env: &Env, wallet: Address) {
    let topics = (symbol_short!("wallet"),);
    env.events().publish(topics, wallet);
}

pub fn repo_locker_updated_event(env: &Env, locker: Address) {
    let topics = (symbol_short!("locker"),);
    env.events().publish(topics, locker);
}

pub fn role_granted_event(env: &Env, role: Role, account: Address) {
    let topics = (symbol_short!("grant"),);
    env.events().publish(topics, (role, account));
}

pub fn role_revoked_event(env: &Env, role: Role, account: Address) {
    let topics = (symbol_short!("revoke"),);
    env.events().publish(topics, (role, account));
}

pub fn paused_event(env: &Env, paused: bool) {
    let topics = (symbol_short!("paused"),);
    env.events().publish(topics, paused);
}
