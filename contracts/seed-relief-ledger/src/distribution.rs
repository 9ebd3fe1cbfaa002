use crate::authorization;
use crate::disaster;
use crate::error::ContractError;
use crate::events::*;
use crate::inventory;
use crate::storage;
use crate::types::{DistributionRequest, RequestStatus};
use crate::utils;
use soroban_sdk::{log, Address, Env, String, Vec};

/// Files a pending request. Stock is not reserved here; approval re-checks it.
pub fn request_seed_distribution(
    env: &Env,
    requester: &Address,
    event_id: u64,
    facility_id: String,
    variety_id: u64,
    quantity: u64,
    purpose: String,
) -> Result<u64, ContractError> {
    authorization::require_initialized(env)?;

    disaster::get_active_event(env, event_id)?;
    if !storage::has_variety(env, variety_id) {
        return Err(ContractError::NotFound);
    }
    utils::require_positive(quantity)?;
    utils::require_valid_name(&facility_id)?;
    utils::require_valid_text(&purpose)?;

    let request_id = storage::get_next_request_id(env)?;
    let request = DistributionRequest {
        request_id,
        event_id,
        requester: requester.clone(),
        facility_id: facility_id.clone(),
        variety_id,
        quantity_requested: quantity,
        purpose,
        request_date: utils::current_height(env),
        status: RequestStatus::Pending,
        approved_by: None,
        approval_date: None,
        notes: String::from_str(env, ""),
    };

    storage::set_request(env, &request);
    storage::add_event_request(env, event_id, request_id)?;

    emit_request_created(
        env,
        request_id,
        event_id,
        requester.clone(),
        facility_id,
        variety_id,
        quantity,
    );

    Ok(request_id)
}

pub fn approve_distribution_request(
    env: &Env,
    caller: &Address,
    request_id: u64,
    notes: String,
) -> Result<(), ContractError> {
    let mut request = pending_request(env, caller, request_id, &notes)?;

    inventory::withdraw(
        env,
        caller,
        &request.facility_id,
        request.variety_id,
        request.quantity_requested,
    )?;

    let timestamp = utils::current_height(env);
    request.status = RequestStatus::Approved;
    request.approved_by = Some(caller.clone());
    request.approval_date = Some(timestamp);
    request.notes = notes;
    storage::set_request(env, &request);

    log!(env, "distribution request approved", request_id, request.quantity_requested);
    emit_request_approved(env, request_id, caller.clone(), timestamp);

    Ok(())
}

pub fn reject_distribution_request(
    env: &Env,
    caller: &Address,
    request_id: u64,
    notes: String,
) -> Result<(), ContractError> {
    let mut request = pending_request(env, caller, request_id, &notes)?;

    let timestamp = utils::current_height(env);
    request.status = RequestStatus::Rejected;
    request.approved_by = Some(caller.clone());
    request.approval_date = Some(timestamp);
    request.notes = notes;
    storage::set_request(env, &request);

    emit_request_rejected(env, request_id, caller.clone(), timestamp);

    Ok(())
}

// Shared gate for approval and rejection: authorizer, known and still pending, then valid notes.
fn pending_request(
    env: &Env,
    caller: &Address,
    request_id: u64,
    notes: &String,
) -> Result<DistributionRequest, ContractError> {
    authorization::require_authorizer(env, caller)?;

    let request = get_distribution_request(env, request_id)?;
    if request.status != RequestStatus::Pending {
        return Err(ContractError::InvalidState);
    }
    utils::require_valid_text(notes)?;

    Ok(request)
}

pub fn get_distribution_request(env: &Env, request_id: u64) -> Result<DistributionRequest, ContractError> {
    storage::get_request(env, request_id).ok_or(ContractError::NotFound)
}

pub fn get_event_requests(env: &Env, event_id: u64, offset: u32, limit: u32) -> Vec<u64> {
    let total = storage::get_event_request_count(env, event_id);
    let mut request_ids = Vec::new(env);

    for index in utils::page_range(offset, limit, total) {
        if let Some(request_id) = storage::get_event_request(env, event_id, index) {
            request_ids.push_back(request_id);
        }
    }

    request_ids
}
