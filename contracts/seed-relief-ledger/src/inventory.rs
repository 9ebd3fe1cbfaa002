use crate::authorization;
use crate::error::ContractError;
use crate::events::*;
use crate::storage;
use crate::types::{InventoryRecord, Variety};
use crate::utils;
use soroban_sdk::{Address, Env, String, Vec};

pub fn register_variety(
    env: &Env,
    caller: &Address,
    name: String,
    species: String,
    origin: String,
) -> Result<u64, ContractError> {
    let policy = authorization::require_initialized(env)?;
    authorization::require_authorizer_if(env, caller, policy.restrict_variety_registration)?;

    utils::require_valid_name(&name)?;
    utils::require_valid_text(&species)?;
    utils::require_valid_text(&origin)?;

    let variety_id = storage::get_next_variety_id(env)?;
    let variety = Variety {
        variety_id,
        name: name.clone(),
        species: species.clone(),
        origin,
        registered_by: caller.clone(),
        registered_at: utils::current_height(env),
    };

    storage::set_variety(env, &variety);

    emit_variety_registered(env, variety_id, name, species, caller.clone());

    Ok(variety_id)
}

/// Creates the (facility, variety) record on first stock-in, otherwise increments it.
/// The stored expiration date tracks the most recent stock-in.
pub fn add_inventory(
    env: &Env,
    caller: &Address,
    facility_id: String,
    variety_id: u64,
    quantity: u64,
    expiration_date: u64,
) -> Result<(), ContractError> {
    let policy = authorization::require_initialized(env)?;
    authorization::require_authorizer_if(env, caller, policy.restrict_inventory_updates)?;

    if !storage::has_variety(env, variety_id) {
        return Err(ContractError::NotFound);
    }
    utils::require_positive(quantity)?;
    utils::require_valid_name(&facility_id)?;

    let timestamp = utils::current_height(env);
    let existing = storage::get_inventory(env, &facility_id, variety_id);
    let old_quantity = existing.as_ref().map(|record| record.quantity).unwrap_or(0);
    let new_quantity = old_quantity
        .checked_add(quantity)
        .ok_or(ContractError::QuantityOverflow)?;

    if existing.is_none() {
        storage::add_facility_variety(env, &facility_id, variety_id);
    }

    let record = InventoryRecord {
        facility_id: facility_id.clone(),
        variety_id,
        quantity: new_quantity,
        expiration_date,
        last_updated: timestamp,
        last_updated_by: caller.clone(),
    };
    storage::set_inventory(env, &record);

    emit_inventory_updated(
        env,
        facility_id,
        variety_id,
        old_quantity,
        new_quantity,
        caller.clone(),
        timestamp,
    );

    Ok(())
}

pub fn remove_inventory(
    env: &Env,
    caller: &Address,
    facility_id: String,
    variety_id: u64,
    quantity: u64,
) -> Result<(), ContractError> {
    let policy = authorization::require_initialized(env)?;
    authorization::require_authorizer_if(env, caller, policy.restrict_inventory_updates)?;

    utils::require_positive(quantity)?;
    withdraw(env, caller, &facility_id, variety_id, quantity)
}

/// Decrements stock at a facility. Shared by manual removal and request approval.
pub(crate) fn withdraw(
    env: &Env,
    actor: &Address,
    facility_id: &String,
    variety_id: u64,
    quantity: u64,
) -> Result<(), ContractError> {
    let mut record = storage::get_inventory(env, facility_id, variety_id)
        .ok_or(ContractError::InsufficientInventory)?;

    let old_quantity = record.quantity;
    let new_quantity = old_quantity
        .checked_sub(quantity)
        .ok_or(ContractError::InsufficientInventory)?;

    let timestamp = utils::current_height(env);
    record.quantity = new_quantity;
    record.last_updated = timestamp;
    record.last_updated_by = actor.clone();
    storage::set_inventory(env, &record);

    emit_inventory_updated(
        env,
        facility_id.clone(),
        variety_id,
        old_quantity,
        new_quantity,
        actor.clone(),
        timestamp,
    );

    Ok(())
}

pub fn get_variety(env: &Env, variety_id: u64) -> Result<Variety, ContractError> {
    storage::get_variety(env, variety_id).ok_or(ContractError::NotFound)
}

pub fn get_inventory(env: &Env, facility_id: String, variety_id: u64) -> Result<InventoryRecord, ContractError> {
    storage::get_inventory(env, &facility_id, variety_id).ok_or(ContractError::NotFound)
}

pub fn get_facility_varieties(env: &Env, facility_id: String) -> Vec<u64> {
    storage::get_facility_variety_ids(env, &facility_id)
}
