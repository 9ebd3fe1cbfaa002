use crate::types::{LedgerPolicy, RequestStatus};
use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizerChangedEvent {
    pub changed_by: Address,
    pub authorizer: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisasterDeclaredEvent {
    pub event_id: u64,
    pub name: String,
    pub severity: u32,
    pub start_date: u64,
    pub declared_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisasterEndedEvent {
    pub event_id: u64,
    pub end_date: u64,
    pub ended_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VarietyRegisteredEvent {
    pub variety_id: u64,
    pub name: String,
    pub species: String,
    pub registered_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InventoryUpdatedEvent {
    pub facility_id: String,
    pub variety_id: u64,
    pub old_quantity: u64,
    pub new_quantity: u64,
    pub updated_by: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestCreatedEvent {
    pub request_id: u64,
    pub event_id: u64,
    pub requester: Address,
    pub facility_id: String,
    pub variety_id: u64,
    pub quantity: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestDecidedEvent {
    pub request_id: u64,
    pub status: RequestStatus,
    pub decided_by: Address,
    pub timestamp: u64,
}

pub fn emit_initialized(env: &Env, deployer: Address, policy: LedgerPolicy) {
    env.events().publish((symbol_short!("init"), deployer), policy);
}

pub fn emit_policy_updated(env: &Env, updated_by: Address, policy: LedgerPolicy) {
    env.events().publish((symbol_short!("policy"), updated_by), policy);
}

pub fn emit_authorizer_added(env: &Env, changed_by: Address, authorizer: Address, timestamp: u64) {
    let event = AuthorizerChangedEvent {
        changed_by: changed_by.clone(),
        authorizer,
        timestamp,
    };
    env.events().publish((symbol_short!("auth_add"), changed_by), event);
}

pub fn emit_authorizer_removed(env: &Env, changed_by: Address, authorizer: Address, timestamp: u64) {
    let event = AuthorizerChangedEvent {
        changed_by: changed_by.clone(),
        authorizer,
        timestamp,
    };
    env.events().publish((symbol_short!("auth_rm"), changed_by), event);
}

pub fn emit_disaster_declared(
    env: &Env,
    event_id: u64,
    name: String,
    severity: u32,
    start_date: u64,
    declared_by: Address,
) {
    let event = DisasterDeclaredEvent {
        event_id,
        name,
        severity,
        start_date,
        declared_by,
    };
    env.events().publish((symbol_short!("evt_decl"), event_id), event);
}

pub fn emit_disaster_ended(env: &Env, event_id: u64, end_date: u64, ended_by: Address) {
    let event = DisasterEndedEvent {
        event_id,
        end_date,
        ended_by,
    };
    env.events().publish((symbol_short!("evt_end"), event_id), event);
}

pub fn emit_variety_registered(
    env: &Env,
    variety_id: u64,
    name: String,
    species: String,
    registered_by: Address,
) {
    let event = VarietyRegisteredEvent {
        variety_id,
        name,
        species,
        registered_by,
    };
    env.events().publish((symbol_short!("var_reg"), variety_id), event);
}

pub fn emit_inventory_updated(
    env: &Env,
    facility_id: String,
    variety_id: u64,
    old_quantity: u64,
    new_quantity: u64,
    updated_by: Address,
    timestamp: u64,
) {
    let event = InventoryUpdatedEvent {
        facility_id,
        variety_id,
        old_quantity,
        new_quantity,
        updated_by,
        timestamp,
    };
    env.events().publish((symbol_short!("inv_upd"), variety_id), event);
}

pub fn emit_request_created(
    env: &Env,
    request_id: u64,
    event_id: u64,
    requester: Address,
    facility_id: String,
    variety_id: u64,
    quantity: u64,
) {
    let event = RequestCreatedEvent {
        request_id,
        event_id,
        requester,
        facility_id,
        variety_id,
        quantity,
    };
    env.events().publish((symbol_short!("req_new"), request_id), event);
}

pub fn emit_request_approved(env: &Env, request_id: u64, decided_by: Address, timestamp: u64) {
    let event = RequestDecidedEvent {
        request_id,
        status: RequestStatus::Approved,
        decided_by,
        timestamp,
    };
    env.events().publish((symbol_short!("req_appr"), request_id), event);
}

pub fn emit_request_rejected(env: &Env, request_id: u64, decided_by: Address, timestamp: u64) {
    let event = RequestDecidedEvent {
        request_id,
        status: RequestStatus::Rejected,
        decided_by,
        timestamp,
    };
    env.events().publish((symbol_short!("req_rej"), request_id), event);
}
