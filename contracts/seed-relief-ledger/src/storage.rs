use crate::error::ContractError;
use crate::types::*;
use soroban_sdk::{Address, Env, String, Vec};

// Counter generation functions
fn next_id(env: &Env, key: &StorageKey) -> Result<u64, ContractError> {
    let current: u64 = env.storage().instance().get(key).unwrap_or(0u64);
    let next = current.checked_add(1).ok_or(ContractError::CounterOverflow)?;
    env.storage().instance().set(key, &next);
    Ok(next)
}

fn current_id(env: &Env, key: &StorageKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0u64)
}

pub fn get_next_event_id(env: &Env) -> Result<u64, ContractError> {
    next_id(env, &StorageKey::EventCounter)
}

pub fn get_next_variety_id(env: &Env) -> Result<u64, ContractError> {
    next_id(env, &StorageKey::VarietyCounter)
}

pub fn get_next_request_id(env: &Env) -> Result<u64, ContractError> {
    next_id(env, &StorageKey::RequestCounter)
}

pub fn get_event_count(env: &Env) -> u64 {
    current_id(env, &StorageKey::EventCounter)
}

pub fn get_variety_count(env: &Env) -> u64 {
    current_id(env, &StorageKey::VarietyCounter)
}

pub fn get_request_count(env: &Env) -> u64 {
    current_id(env, &StorageKey::RequestCounter)
}

// Policy storage functions
pub fn has_policy(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Policy)
}

pub fn get_policy(env: &Env) -> Option<LedgerPolicy> {
    env.storage().instance().get(&StorageKey::Policy)
}

pub fn set_policy(env: &Env, policy: &LedgerPolicy) {
    env.storage().instance().set(&StorageKey::Policy, policy);
}

// Authorizer storage functions
pub fn get_authorizers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&StorageKey::Authorizers)
        .unwrap_or(Vec::new(env))
}

pub fn set_authorizers(env: &Env, authorizers: &Vec<Address>) {
    env.storage().instance().set(&StorageKey::Authorizers, authorizers);
}

// Disaster event storage functions
pub fn get_event(env: &Env, event_id: u64) -> Option<DisasterEvent> {
    env.storage().persistent().get(&StorageKey::Event(event_id))
}

pub fn set_event(env: &Env, event: &DisasterEvent) {
    let key = StorageKey::Event(event.event_id);
    env.storage().persistent().set(&key, event);
}

// Variety storage functions
pub fn get_variety(env: &Env, variety_id: u64) -> Option<Variety> {
    env.storage().persistent().get(&StorageKey::Variety(variety_id))
}

pub fn has_variety(env: &Env, variety_id: u64) -> bool {
    env.storage().persistent().has(&StorageKey::Variety(variety_id))
}

pub fn set_variety(env: &Env, variety: &Variety) {
    let key = StorageKey::Variety(variety.variety_id);
    env.storage().persistent().set(&key, variety);
}

// Inventory storage functions
pub fn get_inventory(env: &Env, facility_id: &String, variety_id: u64) -> Option<InventoryRecord> {
    let key = StorageKey::Inventory(facility_id.clone(), variety_id);
    env.storage().persistent().get(&key)
}

pub fn set_inventory(env: &Env, record: &InventoryRecord) {
    let key = StorageKey::Inventory(record.facility_id.clone(), record.variety_id);
    env.storage().persistent().set(&key, record);
}

// Facility variety index
pub fn get_facility_variety_ids(env: &Env, facility_id: &String) -> Vec<u64> {
    let key = StorageKey::FacilityVarieties(facility_id.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_facility_variety(env: &Env, facility_id: &String, variety_id: u64) {
    let key = StorageKey::FacilityVarieties(facility_id.clone());
    let mut varieties = get_facility_variety_ids(env, facility_id);
    varieties.push_back(variety_id);
    env.storage().persistent().set(&key, &varieties);
}

// Distribution request storage functions
pub fn get_request(env: &Env, request_id: u64) -> Option<DistributionRequest> {
    env.storage().persistent().get(&StorageKey::Request(request_id))
}

pub fn set_request(env: &Env, request: &DistributionRequest) {
    let key = StorageKey::Request(request.request_id);
    env.storage().persistent().set(&key, request);
}

// Event request index, one entry per request so filing stays constant-size
pub fn get_event_request_count(env: &Env, event_id: u64) -> u32 {
    let key = StorageKey::EventRequestCount(event_id);
    env.storage().persistent().get(&key).unwrap_or(0u32)
}

pub fn get_event_request(env: &Env, event_id: u64, index: u32) -> Option<u64> {
    env.storage().persistent().get(&StorageKey::EventRequest(event_id, index))
}

pub fn add_event_request(env: &Env, event_id: u64, request_id: u64) -> Result<(), ContractError> {
    let index = get_event_request_count(env, event_id);
    let count = index.checked_add(1).ok_or(ContractError::CounterOverflow)?;

    env.storage()
        .persistent()
        .set(&StorageKey::EventRequest(event_id, index), &request_id);
    env.storage()
        .persistent()
        .set(&StorageKey::EventRequestCount(event_id), &count);
    Ok(())
}
