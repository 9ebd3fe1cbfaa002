use crate::error::ContractError;
use crate::events::*;
use crate::storage;
use crate::types::LedgerPolicy;
use crate::utils;
use soroban_sdk::{log, Address, Env, Vec};

/// Bootstraps the ledger: stores the policy and seats `deployer` as the first authorizer.
pub fn initialize(env: &Env, deployer: &Address, policy: LedgerPolicy) -> Result<(), ContractError> {
    if storage::has_policy(env) {
        return Err(ContractError::AlreadyInitialized);
    }

    let mut authorizers = Vec::new(env);
    authorizers.push_back(deployer.clone());

    storage::set_policy(env, &policy);
    storage::set_authorizers(env, &authorizers);

    log!(env, "seed relief ledger initialized", deployer.clone());
    emit_initialized(env, deployer.clone(), policy);

    Ok(())
}

pub fn require_initialized(env: &Env) -> Result<LedgerPolicy, ContractError> {
    storage::get_policy(env).ok_or(ContractError::NotInitialized)
}

pub fn is_authorizer(env: &Env, address: &Address) -> bool {
    storage::get_authorizers(env).contains(address)
}

/// Fails with `NotAuthorized` unless `caller` is in the authorizer set.
pub fn require_authorizer(env: &Env, caller: &Address) -> Result<(), ContractError> {
    require_initialized(env)?;
    if !is_authorizer(env, caller) {
        return Err(ContractError::NotAuthorized);
    }
    Ok(())
}

/// Gate for operations an open policy leaves to any caller.
pub fn require_authorizer_if(env: &Env, caller: &Address, restricted: bool) -> Result<(), ContractError> {
    if restricted {
        require_authorizer(env, caller)
    } else {
        Ok(())
    }
}

pub fn add_authorizer(env: &Env, caller: &Address, address: &Address) -> Result<(), ContractError> {
    require_authorizer(env, caller)?;

    let mut authorizers = storage::get_authorizers(env);
    if authorizers.contains(address) {
        return Err(ContractError::AlreadyAuthorized);
    }

    authorizers.push_back(address.clone());
    storage::set_authorizers(env, &authorizers);

    emit_authorizer_added(env, caller.clone(), address.clone(), utils::current_height(env));

    Ok(())
}

pub fn remove_authorizer(env: &Env, caller: &Address, address: &Address) -> Result<(), ContractError> {
    require_authorizer(env, caller)?;

    let mut authorizers = storage::get_authorizers(env);
    let index = authorizers
        .first_index_of(address)
        .ok_or(ContractError::NotAuthorizedMember)?;

    // The registry can only grow from an existing member.
    if authorizers.len() == 1 {
        return Err(ContractError::LastAuthorizer);
    }

    authorizers.remove(index);
    storage::set_authorizers(env, &authorizers);

    emit_authorizer_removed(env, caller.clone(), address.clone(), utils::current_height(env));

    Ok(())
}

pub fn update_policy(env: &Env, caller: &Address, policy: LedgerPolicy) -> Result<(), ContractError> {
    require_authorizer(env, caller)?;

    storage::set_policy(env, &policy);
    emit_policy_updated(env, caller.clone(), policy);

    Ok(())
}

pub fn get_authorizers(env: &Env) -> Vec<Address> {
    storage::get_authorizers(env)
}
