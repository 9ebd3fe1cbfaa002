use crate::authorization;
use crate::error::ContractError;
use crate::events::*;
use crate::storage;
use crate::types::DisasterEvent;
use crate::utils;
use soroban_sdk::{Address, Env, String};

pub fn declare_disaster_event(
    env: &Env,
    caller: &Address,
    name: String,
    description: String,
    affected_region: String,
    severity: u32,
    start_date: u64,
) -> Result<u64, ContractError> {
    authorization::require_authorizer(env, caller)?;

    if !utils::is_valid_severity(severity) {
        return Err(ContractError::InvalidInput);
    }
    utils::require_valid_name(&name)?;
    utils::require_valid_text(&description)?;
    utils::require_valid_text(&affected_region)?;

    let event_id = storage::get_next_event_id(env)?;
    let event = DisasterEvent {
        event_id,
        name: name.clone(),
        description,
        affected_region,
        severity,
        start_date,
        end_date: None,
        declared_by: caller.clone(),
        active: true,
    };

    storage::set_event(env, &event);

    emit_disaster_declared(env, event_id, name, severity, start_date, caller.clone());

    Ok(event_id)
}

/// Closes an active event. Unknown and already-ended events are both invalid transitions.
pub fn end_disaster_event(
    env: &Env,
    caller: &Address,
    event_id: u64,
    end_date: u64,
) -> Result<(), ContractError> {
    authorization::require_authorizer(env, caller)?;

    let mut event = match storage::get_event(env, event_id) {
        Some(event) if event.active => event,
        _ => return Err(ContractError::InvalidState),
    };

    if end_date < event.start_date {
        return Err(ContractError::InvalidDate);
    }

    event.active = false;
    event.end_date = Some(end_date);
    storage::set_event(env, &event);

    emit_disaster_ended(env, event_id, end_date, caller.clone());

    Ok(())
}

pub fn get_disaster_event(env: &Env, event_id: u64) -> Result<DisasterEvent, ContractError> {
    storage::get_event(env, event_id).ok_or(ContractError::NotFound)
}

/// Active event lookup used by the request engine.
pub fn get_active_event(env: &Env, event_id: u64) -> Result<DisasterEvent, ContractError> {
    match storage::get_event(env, event_id) {
        Some(event) if event.active => Ok(event),
        _ => Err(ContractError::InvalidState),
    }
}
