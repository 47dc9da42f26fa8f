use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::types::{AssetInfo, Role, WithdrawalRequest};

// ---------- TTL constants ----------
// Testnet: ~5s per ledger
// 30 days  ≈  518_400 ledgers
// 180 days ≈ 3_110_400 ledgers
const INSTANCE_LIFETIME_THRESHOLD: u32 = 100_800; // ~7 days
const INSTANCE_BUMP_AMOUNT: u32 = 518_400;        // bump to ~30 days
const RECORD_LIFETIME_THRESHOLD: u32 = 518_400;   // ~30 days
const RECORD_BUMP_AMOUNT: u32 = 3_110_400;        // bump to ~180 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Paused,
    ReentrancyLock,
    CustodyWallet,
    RepoLocker,
    RequestNonce,
    LastRequestId,
    Role(Role, Address),
    Asset(Address),
    PendingWithdrawals(Address),
    ApprovedTarget(Address),
    Request(BytesN<32>),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_record(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// ---------- Initialization ----------

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// ---------- Pause flag ----------

pub fn get_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

// ---------- Reentrancy lock ----------

pub fn get_reentrancy_lock(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::ReentrancyLock).unwrap_or(false)
}

pub fn set_reentrancy_lock(env: &Env, locked: bool) {
    env.storage().instance().set(&DataKey::ReentrancyLock, &locked);
}

// ---------- Settlement addresses ----------

pub fn get_custody_wallet(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::CustodyWallet).unwrap()
}

pub fn set_custody_wallet(env: &Env, wallet: &Address) {
    env.storage().instance().set(&DataKey::CustodyWallet, wallet);
}

pub fn get_repo_locker(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::RepoLocker).unwrap()
}

pub fn set_repo_locker(env: &Env, locker: &Address) {
    env.storage().instance().set(&DataKey::RepoLocker, locker);
}

// ---------- Request id derivation state ----------

pub fn get_request_nonce(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::RequestNonce).unwrap_or(0)
}

pub fn set_request_nonce(env: &Env, nonce: u64) {
    env.storage().instance().set(&DataKey::RequestNonce, &nonce);
}

pub fn get_last_request_id(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&DataKey::LastRequestId)
}

pub fn set_last_request_id(env: &Env, id: &BytesN<32>) {
    env.storage().instance().set(&DataKey::LastRequestId, id);
}

// ---------- Role membership ----------

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Role(role, account.clone()))
        .unwrap_or(false)
}

pub fn set_role(env: &Env, role: Role, account: &Address, member: bool) {
    let key = DataKey::Role(role, account.clone());
    if member {
        env.storage().persistent().set(&key, &true);
        extend_record(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ---------- Asset registry ----------

pub fn get_asset(env: &Env, asset: &Address) -> Option<AssetInfo> {
    env.storage().persistent().get(&DataKey::Asset(asset.clone()))
}

pub fn set_asset(env: &Env, asset: &Address, info: &AssetInfo) {
    let key = DataKey::Asset(asset.clone());
    env.storage().persistent().set(&key, info);
    extend_record(env, &key);
}

// ---------- Pending withdrawal counters ----------

pub fn get_pending_withdrawals(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PendingWithdrawals(asset.clone()))
        .unwrap_or(0)
}

pub fn set_pending_withdrawals(env: &Env, asset: &Address, amount: i128) {
    let key = DataKey::PendingWithdrawals(asset.clone());
    env.storage().persistent().set(&key, &amount);
    extend_record(env, &key);
}

// ---------- Approved callback targets ----------

pub fn is_approved_target(env: &Env, target: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::ApprovedTarget(target.clone()))
        .unwrap_or(false)
}

pub fn set_approved_target(env: &Env, target: &Address) {
    let key = DataKey::ApprovedTarget(target.clone());
    env.storage().persistent().set(&key, &true);
    extend_record(env, &key);
}

// ---------- Withdrawal requests ----------

pub fn get_request(env: &Env, id: &BytesN<32>) -> Option<WithdrawalRequest> {
    env.storage().persistent().get(&DataKey::Request(id.clone()))
}

pub fn set_request(env: &Env, id: &BytesN<32>, request: &WithdrawalRequest) {
    let key = DataKey::Request(id.clone());
    env.storage().persistent().set(&key, request);
    extend_record(env, &key);
}
