use soroban_sdk::{log, Address, Env, Vec};

use crate::error::Error;
use crate::events::{role_granted_event, role_revoked_event};
use crate::storage;
use crate::types::Role;

/// Fails with Unauthorized unless `account` holds `role`.
pub fn require_role(env: &Env, role: Role, account: &Address) -> Result<(), Error> {
    if !storage::has_role(env, role, account) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn grant_role(env: &Env, granter: &Address, role: Role, account: &Address) -> Result<(), Error> {
    granter.require_auth();
    require_role(env, role.granting_authority(), granter)?;

    storage::set_role(env, role, account, true);
    role_granted_event(env, role, account.clone());

    log!(env, "Treasury: role granted to {}", account);
    Ok(())
}

pub fn revoke_role(env: &Env, granter: &Address, role: Role, account: &Address) -> Result<(), Error> {
    granter.require_auth();
    require_role(env, role.granting_authority(), granter)?;

    storage::set_role(env, role, account, false);
    role_revoked_event(env, role, account.clone());

    log!(env, "Treasury: role revoked from {}", account);
    Ok(())
}

/// Bulk onboarding. Duplicate and already-granted entries are skipped
/// rather than failing the whole batch. Returns the number granted.
pub fn batch_grant(
    env: &Env,
    granter: &Address,
    role: Role,
    accounts: &Vec<Address>,
) -> Result<u32, Error> {
    granter.require_auth();
    require_role(env, role.granting_authority(), granter)?;

    let mut granted: u32 = 0;
    for account in accounts.iter() {
        if storage::has_role(env, role, &account) {
            continue;
        }
        storage::set_role(env, role, &account, true);
        role_granted_event(env, role, account.clone());
        granted += 1;
    }

    log!(env, "Treasury: batch granted {} accounts", granted);
    Ok(granted)
}
