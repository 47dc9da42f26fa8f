#![no_std]

use soroban_sdk::{
    contract, contractclient, contractimpl, log, token, xdr::ToXdr, Address, Bytes, BytesN, Env,
    Vec,
};

mod access;
mod error;
mod events;
mod guard;
mod storage;
mod types;

use error::Error;
use events::{
    asset_added_event, asset_deposited_event, custody_wallet_updated_event, paused_event,
    repo_locker_updated_event, request_status_updated_event, target_approved_event,
    withdrawal_completed_event, withdrawal_limit_updated_event, withdrawal_request_created_event,
};
use types::{is_forward_transition, AssetInfo, RequestStatus, Role, WithdrawalRequest};

/// Interface an approved target must implement to receive the completion
/// callback. The treasury forwards the stored payload verbatim and does
/// not interpret it.
#[contractclient(name = "WithdrawalTargetClient")]
pub trait WithdrawalTarget {
    fn on_withdrawal_approved(env: Env, request_id: BytesN<32>, payload: Bytes);
}

#[contract]
pub struct Treasury;

#[contractimpl]
impl Treasury {
    /// Initialize the treasury with its admin, first manager and the two
    /// settlement addresses.
    pub fn initialize(
        env: Env,
        admin: Address,
        manager: Address,
        custody_wallet: Address,
        repo_locker: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_role(&env, Role::Admin, &admin, true);
        storage::set_role(&env, Role::Manager, &manager, true);
        storage::set_custody_wallet(&env, &custody_wallet);
        storage::set_repo_locker(&env, &repo_locker);
        storage::set_request_nonce(&env, 0);
        storage::set_initialized(&env);

        log!(&env, "Treasury: Initialized");
        Ok(())
    }

    // ---------- Role registry ----------

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        storage::has_role(&env, role, &account)
    }

    pub fn grant_role(env: Env, granter: Address, role: Role, account: Address) -> Result<(), Error> {
        access::grant_role(&env, &granter, role, &account)
    }

    pub fn revoke_role(env: Env, granter: Address, role: Role, account: Address) -> Result<(), Error> {
        access::revoke_role(&env, &granter, role, &account)
    }

    /// Grant `role` to every account in the batch, skipping entries that
    /// already hold it. Returns the number actually granted.
    pub fn batch_grant(
        env: Env,
        granter: Address,
        role: Role,
        accounts: Vec<Address>,
    ) -> Result<u32, Error> {
        access::batch_grant(&env, &granter, role, &accounts)
    }

    // ---------- Asset registry ----------

    pub fn add_supported_asset(env: Env, manager: Address, asset: Address) -> Result<(), Error> {
        manager.require_auth();
        access::require_role(&env, Role::Manager, &manager)?;

        if let Some(info) = storage::get_asset(&env, &asset) {
            if info.is_active {
                return Err(Error::AssetAlreadySupported);
            }
        }

        storage::set_asset(
            &env,
            &asset,
            &AssetInfo {
                is_active: true,
                total_custodied: 0,
                withdrawal_limit: 0,
            },
        );
        storage::extend_instance(&env);

        asset_added_event(&env, asset.clone());
        log!(&env, "Treasury: asset supported {}", asset);
        Ok(())
    }

    /// Set the per-line-item withdrawal ceiling for an asset. 0 means
    /// unlimited.
    pub fn set_withdrawal_limit(
        env: Env,
        manager: Address,
        asset: Address,
        limit: i128,
    ) -> Result<(), Error> {
        manager.require_auth();
        access::require_role(&env, Role::Manager, &manager)?;

        if limit < 0 {
            return Err(Error::InvalidAmount);
        }

        let mut info = storage::get_asset(&env, &asset).ok_or(Error::AssetNotSupported)?;
        if !info.is_active {
            return Err(Error::AssetNotSupported);
        }

        info.withdrawal_limit = limit;
        storage::set_asset(&env, &asset, &info);

        withdrawal_limit_updated_event(&env, asset, limit);
        Ok(())
    }

    pub fn get_asset_details(env: Env, asset: Address) -> (Address, i128, bool) {
        match storage::get_asset(&env, &asset) {
            Some(info) => (asset, info.total_custodied, info.is_active),
            None => (asset, 0, false),
        }
    }

    pub fn is_supported_asset(env: Env, asset: Address) -> bool {
        storage::get_asset(&env, &asset)
            .map(|info| info.is_active)
            .unwrap_or(false)
    }

    // ---------- Custody ledger ----------

    /// Pull `amount` of `asset` from the depositor, credit the custody
    /// total, then forward the full amount to the custody wallet. The
    /// ledger holds funds only transiently during this call.
    pub fn deposit(env: Env, depositor: Address, asset: Address, amount: i128) -> Result<(), Error> {
        guard::acquire(&env)?;

        depositor.require_auth();
        access::require_role(&env, Role::WithdrawalOperator, &depositor)?;

        let mut info = storage::get_asset(&env, &asset).ok_or(Error::AssetNotSupported)?;
        if !info.is_active {
            return Err(Error::AssetNotSupported);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let token_client = token::Client::new(&env, &asset);
        token_client.transfer(&depositor, &env.current_contract_address(), &amount);

        // Accounting before the forwarding transfer.
        info.total_custodied += amount;
        storage::set_asset(&env, &asset, &info);

        let custody_wallet = storage::get_custody_wallet(&env);
        token_client.transfer(&env.current_contract_address(), &custody_wallet, &amount);

        storage::extend_instance(&env);
        asset_deposited_event(&env, asset.clone(), amount, depositor.clone());
        log!(&env, "Treasury: deposit of {} recorded for {}", amount, asset);

        guard::release(&env);
        Ok(())
    }

    pub fn update_custody_wallet(env: Env, manager: Address, wallet: Address) -> Result<(), Error> {
        manager.require_auth();
        access::require_role(&env, Role::Manager, &manager)?;

        storage::set_custody_wallet(&env, &wallet);
        custody_wallet_updated_event(&env, wallet);
        Ok(())
    }

    pub fn update_repo_locker(env: Env, manager: Address, locker: Address) -> Result<(), Error> {
        manager.require_auth();
        access::require_role(&env, Role::Manager, &manager)?;

        storage::set_repo_locker(&env, &locker);
        repo_locker_updated_event(&env, locker);
        Ok(())
    }

    // ---------- Approved callback targets ----------

    pub fn add_approved_target(env: Env, manager: Address, target: Address) -> Result<(), Error> {
        manager.require_auth();
        access::require_role(&env, Role::Manager, &manager)?;

        storage::set_approved_target(&env, &target);
        target_approved_event(&env, target);
        Ok(())
    }

    pub fn is_approved_target(env: Env, target: Address) -> bool {
        storage::is_approved_target(&env, &target)
    }

    // ---------- Withdrawal request state machine ----------

    /// File a multi-asset withdrawal request. Every line item is
    /// validated before any counter moves; the request is stored Pending
    /// and each asset's pending counter is credited.
    pub fn request_withdrawal(
        env: Env,
        requester: Address,
        assets: Vec<Address>,
        amounts: Vec<i128>,
        target: Option<Address>,
        payload: Bytes,
    ) -> Result<BytesN<32>, Error> {
        guard::acquire(&env)?;
        guard::require_not_paused(&env)?;

        requester.require_auth();
        access::require_role(&env, Role::WithdrawalOperator, &requester)?;

        if assets.len() != amounts.len() {
            return Err(Error::LengthMismatch);
        }
        if assets.is_empty() {
            return Err(Error::EmptyRequest);
        }
        if let Some(ref t) = target {
            if !storage::is_approved_target(&env, t) {
                return Err(Error::TargetNotApproved);
            }
        }

        for (asset, amount) in assets.iter().zip(amounts.iter()) {
            let info = storage::get_asset(&env, &asset).ok_or(Error::AssetNotSupported)?;
            if !info.is_active {
                return Err(Error::AssetNotSupported);
            }
            if amount <= 0 {
                return Err(Error::InvalidAmount);
            }
            if info.withdrawal_limit > 0 && amount > info.withdrawal_limit {
                return Err(Error::WithdrawalLimitExceeded);
            }
        }

        let request_id = Self::derive_request_id(&env, &requester);
        let requested_at = env.ledger().timestamp();

        let request = WithdrawalRequest {
            requester: requester.clone(),
            assets: assets.clone(),
            amounts: amounts.clone(),
            requested_at,
            status: RequestStatus::Pending,
            is_processed: false,
            target: target.clone(),
            payload,
        };
        storage::set_request(&env, &request_id, &request);

        for (asset, amount) in assets.iter().zip(amounts.iter()) {
            let pending = storage::get_pending_withdrawals(&env, &asset);
            storage::set_pending_withdrawals(&env, &asset, pending + amount);
        }

        storage::set_last_request_id(&env, &request_id);
        storage::extend_instance(&env);

        withdrawal_request_created_event(
            &env,
            request_id.clone(),
            requester.clone(),
            assets.get_unchecked(0),
            target,
            amounts.get_unchecked(0),
        );
        log!(&env, "Treasury: withdrawal requested by {}", requester);

        guard::release(&env);
        Ok(request_id)
    }

    /// Resolve a pending request. Status may only move to a strictly
    /// higher rank and a request is resolved at most once. Resolution
    /// pays every line item out of the repo locker to the requester,
    /// refusing any line item larger than the asset's custodied total; on
    /// approval with a recorded target, the completion callback runs
    /// exactly once as the last effect. Any failure reverts the whole
    /// resolution.
    pub fn update_request(
        env: Env,
        operator: Address,
        request_id: BytesN<32>,
        new_status: RequestStatus,
    ) -> Result<(), Error> {
        guard::acquire(&env)?;

        operator.require_auth();
        access::require_role(&env, Role::CustodianOperator, &operator)?;

        let mut request =
            storage::get_request(&env, &request_id).ok_or(Error::RequestNotFound)?;
        if request.is_processed {
            return Err(Error::RequestAlreadyProcessed);
        }
        if !is_forward_transition(request.status, new_status) {
            return Err(Error::InvalidStatusTransition);
        }

        request.status = new_status;
        request.is_processed = true;
        storage::set_request(&env, &request_id, &request);

        let locker = storage::get_repo_locker(&env);
        for (asset, amount) in request.assets.iter().zip(request.amounts.iter()) {
            let pending = storage::get_pending_withdrawals(&env, &asset);
            storage::set_pending_withdrawals(&env, &asset, pending - amount);

            let token_client = token::Client::new(&env, &asset);
            token_client.transfer_from(
                &env.current_contract_address(),
                &locker,
                &request.requester,
                &amount,
            );

            let mut info = storage::get_asset(&env, &asset).ok_or(Error::AssetNotSupported)?;
            if amount > info.total_custodied {
                return Err(Error::InsufficientCustody);
            }
            info.total_custodied -= amount;
            storage::set_asset(&env, &asset, &info);

            withdrawal_completed_event(
                &env,
                request_id.clone(),
                request.requester.clone(),
                asset,
                amount,
            );
        }

        request_status_updated_event(&env, request_id.clone(), new_status);
        log!(&env, "Treasury: request resolved by {}", operator);

        if new_status == RequestStatus::Approved {
            if let Some(target) = request.target {
                WithdrawalTargetClient::new(&env, &target)
                    .on_withdrawal_approved(&request_id, &request.payload);
            }
        }

        storage::extend_instance(&env);
        guard::release(&env);
        Ok(())
    }

    pub fn get_request(env: Env, request_id: BytesN<32>) -> Option<WithdrawalRequest> {
        storage::get_request(&env, &request_id)
    }

    pub fn get_last_request_id(env: Env) -> Option<BytesN<32>> {
        storage::get_last_request_id(&env)
    }

    pub fn get_pending_withdrawals(env: Env, asset: Address) -> i128 {
        storage::get_pending_withdrawals(&env, &asset)
    }

    // ---------- Pause gate ----------

    pub fn pause(env: Env, manager: Address) -> Result<(), Error> {
        guard::acquire(&env)?;

        manager.require_auth();
        access::require_role(&env, Role::Manager, &manager)?;

        storage::set_paused(&env, true);
        paused_event(&env, true);

        guard::release(&env);
        Ok(())
    }

    pub fn unpause(env: Env, manager: Address) -> Result<(), Error> {
        guard::acquire(&env)?;

        manager.require_auth();
        access::require_role(&env, Role::Manager, &manager)?;

        storage::set_paused(&env, false);
        paused_event(&env, false);

        guard::release(&env);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        storage::get_paused(&env)
    }

    /// Collision-resistant request id: timestamp and ledger sequence plus
    /// a strictly increasing nonce, so requests in the same ledger tick
    /// still get distinct ids.
    fn derive_request_id(env: &Env, requester: &Address) -> BytesN<32> {
        let nonce = storage::get_request_nonce(env);
        storage::set_request_nonce(env, nonce + 1);

        let mut seed = Bytes::new(env);
        seed.extend_from_array(&env.ledger().timestamp().to_be_bytes());
        seed.extend_from_array(&env.ledger().sequence().to_be_bytes());
        seed.extend_from_array(&nonce.to_be_bytes());
        seed.append(&requester.clone().to_xdr(env));

        env.crypto().sha256(&seed).into()
    }
}
