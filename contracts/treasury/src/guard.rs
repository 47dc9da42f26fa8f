use soroban_sdk::Env;

use crate::error::Error;
use crate::storage;

/// Single-writer lock wrapping every mutating entry point. An `Err`
/// returned while the lock is held rolls the flag back together with
/// the rest of the invocation, so release holds on every exit path.
pub fn acquire(env: &Env) -> Result<(), Error> {
    if storage::get_reentrancy_lock(env) {
        return Err(Error::ReentrancyDetected);
    }
    storage::set_reentrancy_lock(env, true);
    Ok(())
}

pub fn release(env: &Env) {
    storage::set_reentrancy_lock(env, false);
}

/// Pause gate. Blocks new exposure only; resolution of already-pending
/// requests stays open while paused.
pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if storage::get_paused(env) {
        return Err(Error::ContractPaused);
    }
    Ok(())
}
